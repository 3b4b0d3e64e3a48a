/*
[INPUT]:  Credential, wall-clock time and a random nonce
[OUTPUT]: Base64 authorization token for the Authorization header
[POS]:    HTTP layer - request signing for every API call
[UPDATE]: When changing signing algorithm or canonical string format
*/

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chrono::Utc;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha1::Sha1;

use crate::auth::Credential;

type HmacSha1 = Hmac<Sha1>;

/// Signs requests on behalf of a [`Credential`]
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credential: Credential,
}

impl RequestSigner {
    /// Create a new request signer for the given credential
    pub fn new(credential: Credential) -> Self {
        Self { credential }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Draw a fresh 31-bit non-negative nonce.
    ///
    /// Uses the thread-local generator, which is seeded from the OS, so
    /// concurrent or back-to-back calls do not share a seed.
    pub fn nonce(&self) -> u32 {
        rand::thread_rng().gen_range(0..=i32::MAX as u32)
    }

    /// Canonical string that gets signed
    ///
    /// Format: "a={app_id}&k={secret_id}&e={expired}&t={timestamp}&r={nonce}&u={user_id}&f="
    pub fn canonical_string(&self, timestamp: i64, nonce: u32) -> String {
        let credential = &self.credential;
        format!(
            "a={}&k={}&e={}&t={timestamp}&r={nonce}&u={}&f=",
            credential.app_id(),
            credential.secret_id(),
            credential.expired(),
            credential.user_id(),
        )
    }

    /// Sign with an explicit timestamp and nonce.
    ///
    /// Token = base64(HMAC-SHA1(secret_key, canonical) || canonical)
    pub fn sign_at(&self, timestamp: i64, nonce: u32) -> String {
        let canonical = self.canonical_string(timestamp, nonce);

        // HMAC pads or hashes the key to the block size, so no length is rejected.
        let mut mac = HmacSha1::new_from_slice(self.credential.secret_key().as_bytes())
            .expect("HMAC can accept any key length");
        mac.update(canonical.as_bytes());
        let digest = mac.finalize().into_bytes();

        let mut signed = Vec::with_capacity(digest.len() + canonical.len());
        signed.extend_from_slice(&digest);
        signed.extend_from_slice(canonical.as_bytes());
        BASE64.encode(signed)
    }

    /// Sign with the current time and a fresh nonce
    pub fn sign(&self) -> String {
        self.sign_at(Utc::now().timestamp(), self.nonce())
    }
}
