/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

/// Face detection mode, sent as an integer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DetectMode {
    #[default]
    Normal,
    BigFace,
}

impl DetectMode {
    pub fn is_normal(&self) -> bool {
        matches!(self, DetectMode::Normal)
    }
}

impl From<DetectMode> for u8 {
    fn from(mode: DetectMode) -> Self {
        match mode {
            DetectMode::Normal => 0,
            DetectMode::BigFace => 1,
        }
    }
}

impl TryFrom<u8> for DetectMode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(DetectMode::Normal),
            1 => Ok(DetectMode::BigFace),
            other => Err(format!("unknown detect mode: {other}")),
        }
    }
}
