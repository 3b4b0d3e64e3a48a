/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public youtu adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod http;
pub mod image;
pub mod types;

// Re-export commonly used types from auth
pub use auth::{Credential, USER_ID_MAX_LEN};

// Re-export commonly used types from http
pub use http::{
    ClientConfig,
    DEFAULT_HOST,
    DEFAULT_TIMEOUT,
    Operation,
    RequestSigner,
    Result,
    YoutuClient,
    YoutuError,
};

pub use image::{encode_image, encode_image_bytes};

// Re-export all types
pub use types::*;
