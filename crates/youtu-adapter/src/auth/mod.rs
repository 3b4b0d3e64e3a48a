/*
[INPUT]:  Application credentials
[OUTPUT]: Validated credential used by the request signer
[POS]:    Auth layer - caller identity for the youtu API
[UPDATE]: When credential fields or validation rules change
*/

pub mod credential;

pub use credential::{Credential, USER_ID_MAX_LEN};
