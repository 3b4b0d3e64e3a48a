/*
[INPUT]:  Application id, secret id/key, expiry and subject user id
[OUTPUT]: Validated, immutable signing credential
[POS]:    Auth layer - caller identity for request signing
[UPDATE]: When credential fields or validation rules change
*/

use std::fmt;

use crate::http::{Result, YoutuError};

/// Maximum length of the subject user id, in bytes
pub const USER_ID_MAX_LEN: usize = 110;

/// Identifies the caller to the youtu service.
///
/// `expired` is a unix timestamp in seconds. The signature is valid from its
/// issuance time `t` up to `expired`; `0` makes it valid only at `t`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    app_id: u32,
    secret_id: String,
    secret_key: String,
    expired: u32,
    user_id: String,
}

impl Credential {
    /// Build a credential, rejecting user ids longer than [`USER_ID_MAX_LEN`]
    pub fn new(
        app_id: u32,
        secret_id: impl Into<String>,
        secret_key: impl Into<String>,
        expired: u32,
        user_id: impl Into<String>,
    ) -> Result<Self> {
        let user_id = user_id.into();
        if user_id.len() > USER_ID_MAX_LEN {
            return Err(YoutuError::Validation(format!(
                "user id too long: {} bytes (max {USER_ID_MAX_LEN})",
                user_id.len()
            )));
        }

        Ok(Self {
            app_id,
            secret_id: secret_id.into(),
            secret_key: secret_key.into(),
            expired,
            user_id,
        })
    }

    pub fn app_id(&self) -> u32 {
        self.app_id
    }

    pub fn secret_id(&self) -> &str {
        &self.secret_id
    }

    pub fn expired(&self) -> u32 {
        self.expired
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("app_id", &self.app_id)
            .field("secret_id", &self.secret_id)
            .field("secret_key", &"<redacted>")
            .field("expired", &self.expired)
            .field("user_id", &self.user_id)
            .finish()
    }
}
