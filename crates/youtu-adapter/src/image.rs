/*
[INPUT]:  Local image file path or raw image bytes
[OUTPUT]: Base64 string for image/imageA/imageB/images request fields
[POS]:    Helper layer - request payload preparation
[UPDATE]: When image encoding expectations change
*/

use std::fs;
use std::path::Path;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::http::Result;

/// Read an image file and encode it for an image request field
pub fn encode_image(path: impl AsRef<Path>) -> Result<String> {
    let bytes = fs::read(path)?;
    Ok(encode_image_bytes(&bytes))
}

pub fn encode_image_bytes(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}
