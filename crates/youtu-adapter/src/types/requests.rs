/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust request structs bound to their operation name
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::{Deserialize, Serialize};

use super::enums::DetectMode;
use super::responses::{
    AddFaceResponse, DelFaceResponse, DelPersonResponse, DetectFaceResponse, FaceCompareResponse,
    FaceIdentifyResponse, FaceVerifyResponse, GetFaceIdsResponse, GetFaceInfoResponse,
    GetGroupIdsResponse, GetInfoResponse, GetPersonIdsResponse, NewPersonResponse,
    SetInfoResponse,
};
use crate::http::Operation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectFaceRequest {
    pub app_id: String,
    /// Base64 encoded image
    pub image: String,
    #[serde(default, skip_serializing_if = "DetectMode::is_normal")]
    pub mode: DetectMode,
}

impl Operation for DetectFaceRequest {
    const NAME: &'static str = "detectface";
    type Response = DetectFaceResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceCompareRequest {
    pub app_id: String,
    #[serde(rename = "imageA")]
    pub image_a: String,
    #[serde(rename = "imageB")]
    pub image_b: String,
}

impl Operation for FaceCompareRequest {
    const NAME: &'static str = "facecompare";
    type Response = FaceCompareResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceVerifyRequest {
    pub app_id: String,
    pub image: String,
    pub person_id: String,
}

impl Operation for FaceVerifyRequest {
    const NAME: &'static str = "faceverify";
    type Response = FaceVerifyResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceIdentifyRequest {
    pub app_id: String,
    pub group_id: String,
    pub image: String,
}

impl Operation for FaceIdentifyRequest {
    const NAME: &'static str = "faceidentify";
    type Response = FaceIdentifyResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPersonRequest {
    pub app_id: String,
    pub image: String,
    pub person_id: String,
    pub group_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub person_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

impl Operation for NewPersonRequest {
    const NAME: &'static str = "newperson";
    type Response = NewPersonResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelPersonRequest {
    pub app_id: String,
    pub person_id: String,
}

impl Operation for DelPersonRequest {
    const NAME: &'static str = "delperson";
    type Response = DelPersonResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFaceRequest {
    pub app_id: String,
    pub person_id: String,
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

impl Operation for AddFaceRequest {
    const NAME: &'static str = "addface";
    type Response = AddFaceResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DelFaceRequest {
    pub app_id: String,
    pub person_id: String,
    pub face_ids: Vec<String>,
}

impl Operation for DelFaceRequest {
    const NAME: &'static str = "delface";
    type Response = DelFaceResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetInfoRequest {
    pub app_id: String,
    pub person_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub person_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub tag: String,
}

impl Operation for SetInfoRequest {
    const NAME: &'static str = "setinfo";
    type Response = SetInfoResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetInfoRequest {
    pub app_id: String,
    pub person_id: String,
}

impl Operation for GetInfoRequest {
    const NAME: &'static str = "getinfo";
    type Response = GetInfoResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetGroupIdsRequest {
    pub app_id: String,
}

impl Operation for GetGroupIdsRequest {
    const NAME: &'static str = "getgroupids";
    type Response = GetGroupIdsResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetPersonIdsRequest {
    pub app_id: String,
    pub group_id: String,
}

impl Operation for GetPersonIdsRequest {
    const NAME: &'static str = "getpersonids";
    type Response = GetPersonIdsResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFaceIdsRequest {
    pub app_id: String,
    pub person_id: String,
}

impl Operation for GetFaceIdsRequest {
    const NAME: &'static str = "getfaceids";
    type Response = GetFaceIdsResponse;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetFaceInfoRequest {
    pub app_id: String,
    pub face_id: String,
}

impl Operation for GetFaceInfoRequest {
    const NAME: &'static str = "getfaceinfo";
    type Response = GetFaceInfoResponse;
}
