/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::models::Face;
use super::serde_helpers;

/// Service-level status carried by every response body.
///
/// A non-zero code is a service error; the payload fields are only
/// meaningful when [`ServiceResponse::is_success`] holds.
pub trait ServiceResponse {
    fn error_code(&self) -> i32;

    fn error_msg(&self) -> &str;

    fn is_success(&self) -> bool {
        self.error_code() == 0
    }
}

macro_rules! impl_service_response {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ServiceResponse for $ty {
                fn error_code(&self) -> i32 {
                    self.error_code
                }

                fn error_msg(&self) -> &str {
                    &self.error_msg
                }
            }
        )+
    };
}

impl_service_response!(
    DetectFaceResponse,
    FaceCompareResponse,
    FaceVerifyResponse,
    FaceIdentifyResponse,
    NewPersonResponse,
    DelPersonResponse,
    AddFaceResponse,
    DelFaceResponse,
    SetInfoResponse,
    GetInfoResponse,
    GetGroupIdsResponse,
    GetPersonIdsResponse,
    GetFaceIdsResponse,
    GetFaceInfoResponse,
);

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectFaceResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub image_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub image_width: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub image_height: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face: Vec<Face>,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

/// Overall and per-feature similarity between two faces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceCompareResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub eyebrow_sim: f32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub eye_sim: f32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub nose_sim: f32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub mouth_sim: f32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub similarity: f32,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceVerifyResponse {
    #[serde(rename = "ismatch", deserialize_with = "serde_helpers::null_as_default")]
    pub is_match: bool,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub confidence: f32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceIdentifyResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub person_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub confidence: f32,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewPersonResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    /// Number of groups the person was added to
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub suc_group: i32,
    /// Number of faces the person was created with
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub suc_face: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub person_name: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub person_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face_id: String,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelPersonResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub deleted: i32,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddFaceResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub added: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face_ids: Vec<String>,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelFaceResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub deleted: i32,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetInfoResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub person_id: String,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetInfoResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub person_name: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub person_id: String,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub group_ids: Vec<String>,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face_ids: Vec<String>,
    #[serde(alias = "SessionID", deserialize_with = "serde_helpers::null_as_default")]
    pub session_id: String,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetGroupIdsResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub group_ids: Vec<String>,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetPersonIdsResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub person_ids: Vec<String>,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFaceIdsResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face_ids: Vec<String>,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GetFaceInfoResponse {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face_info: Face,
    #[serde(rename = "errorcode", deserialize_with = "serde_helpers::null_as_default")]
    pub error_code: i32,
    #[serde(rename = "errormsg", deserialize_with = "serde_helpers::null_as_default")]
    pub error_msg: String,
}
