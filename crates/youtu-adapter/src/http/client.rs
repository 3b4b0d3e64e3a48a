/*
[INPUT]:  HTTP configuration (host, timeout) and signing credential
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, EXPECT, USER_AGENT};
use reqwest::{Client, RequestBuilder, Url};
use std::time::Duration;

use crate::auth::Credential;
use crate::http::{RequestSigner, Result, YoutuError};

/// Default youtu API host
pub const DEFAULT_HOST: &str = "api.youtu.qq.com";

/// Total request timeout mandated by the service
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host (and optional port) the API is served from, without scheme
    pub host: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at another host
    pub fn with_host(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }
}

/// Main HTTP client for the youtu API.
///
/// Immutable after construction; share it freely between tasks.
#[derive(Debug, Clone)]
pub struct YoutuClient {
    http_client: Client,
    host: String,
    signer: RequestSigner,
}

impl YoutuClient {
    /// Create a new client against [`DEFAULT_HOST`]
    pub fn new(credential: Credential) -> Result<Self> {
        Self::with_config(credential, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credential: Credential, config: ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| YoutuError::Config(format!("failed to build HTTP client: {e}")))?;

        let client = Self {
            http_client,
            host: config.host,
            signer: RequestSigner::new(credential),
        };
        // Reject hosts that cannot form a URL before the first call.
        client.interface_url("detectface")?;
        Ok(client)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn credential(&self) -> &Credential {
        self.signer.credential()
    }

    pub fn signer(&self) -> &RequestSigner {
        &self.signer
    }

    /// Application id in its wire form (decimal string)
    pub fn app_id(&self) -> String {
        self.credential().app_id().to_string()
    }

    /// Build full URL for an operation
    ///
    /// http://{host}/youtu/api/{operation}
    pub fn interface_url(&self, operation: &str) -> Result<Url> {
        let url = Url::parse(&format!("http://{}/youtu/api/{operation}", self.host))?;
        Ok(url)
    }

    /// Build a signed POST request for an operation
    pub(crate) fn signed_post(&self, operation: &str) -> Result<RequestBuilder> {
        let url = self.interface_url(operation)?;
        Ok(self
            .http_client
            .post(url)
            .header(AUTHORIZATION, self.signer.sign())
            .header(CONTENT_TYPE, "text/json")
            .header(ACCEPT, "*/*")
            .header(USER_AGENT, "")
            .header(EXPECT, "100-continue"))
    }
}
