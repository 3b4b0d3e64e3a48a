/*
[INPUT]:  HTTP client configuration and typed operation requests
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod client;
pub mod dispatch;
pub mod error;
pub mod face;
pub mod listing;
pub mod person;
pub mod signature;

pub use error::{Result, YoutuError};
pub use signature::RequestSigner;

pub use client::{ClientConfig, DEFAULT_HOST, DEFAULT_TIMEOUT, YoutuClient};
pub use dispatch::Operation;
