/*
[INPUT]:  Typed request bound to an operation name
[OUTPUT]: Typed response decoded from the service body
[POS]:    HTTP layer - generic request dispatcher (sign, send, decode)
[UPDATE]: When changing wire encoding or response handling
*/

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{Result, YoutuClient, YoutuError};

/// A request shape bound to its remote operation and response shape
pub trait Operation: Serialize {
    /// Path segment under `/youtu/api/`
    const NAME: &'static str;

    type Response: DeserializeOwned;
}

impl YoutuClient {
    /// Execute one operation.
    ///
    /// A non-zero `errorcode` in the body is returned as data, not as an
    /// error; the HTTP status is not inspected either.
    pub async fn call<O: Operation>(&self, request: &O) -> Result<O::Response> {
        let body = serde_json::to_vec(request).map_err(YoutuError::Encoding)?;
        let builder = self.signed_post(O::NAME)?.body(body);

        debug!(operation = O::NAME, host = %self.host(), "sending youtu request");
        let response = builder.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(
            operation = O::NAME,
            status = status.as_u16(),
            body_len = bytes.len(),
            "received youtu response"
        );

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!(
                operation = O::NAME,
                status = status.as_u16(),
                error = %e,
                "failed to decode response"
            );
            YoutuError::decoding(&bytes, e)
        })
    }
}
