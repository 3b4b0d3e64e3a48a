/*
[INPUT]:  Group and person identifiers
[OUTPUT]: Id listings for groups, persons and faces
[POS]:    HTTP layer - listing endpoints
[UPDATE]: When adding new listing endpoints
*/

// ### Listing Endpoints

use crate::http::{Result, YoutuClient};
use crate::types::{
    GetFaceIdsRequest, GetFaceIdsResponse, GetGroupIdsRequest, GetGroupIdsResponse,
    GetPersonIdsRequest, GetPersonIdsResponse,
};

impl YoutuClient {
    /// All groups under this application
    ///
    /// POST /youtu/api/getgroupids
    pub async fn get_group_ids(&self) -> Result<GetGroupIdsResponse> {
        let req = GetGroupIdsRequest {
            app_id: self.app_id(),
        };
        self.call(&req).await
    }

    /// POST /youtu/api/getpersonids
    pub async fn get_person_ids(
        &self,
        group_id: impl Into<String>,
    ) -> Result<GetPersonIdsResponse> {
        let req = GetPersonIdsRequest {
            app_id: self.app_id(),
            group_id: group_id.into(),
        };
        self.call(&req).await
    }

    /// POST /youtu/api/getfaceids
    pub async fn get_face_ids(&self, person_id: impl Into<String>) -> Result<GetFaceIdsResponse> {
        let req = GetFaceIdsRequest {
            app_id: self.app_id(),
            person_id: person_id.into(),
        };
        self.call(&req).await
    }
}
