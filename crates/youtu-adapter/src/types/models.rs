/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust structs shared by several responses
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// A detected face with its bounding box and attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Face {
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub face_id: String,
    /// Top-left corner of the bounding box
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub x: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub y: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub width: f32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub height: f32,
    /// 0 (female) to 100 (male)
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub gender: i32,
    /// 0 to 100
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub age: i32,
    /// 0 (normal), 50 (smile), 100 (laugh)
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub expression: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub glass: bool,
    /// Head pose in degrees: pitch and yaw in [-30, 30], roll in [-180, 180]
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub pitch: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub yaw: i32,
    #[serde(deserialize_with = "serde_helpers::null_as_default")]
    pub roll: i32,
}
