/*
[INPUT]:  Person ids, group ids, face ids and Base64 images
[OUTPUT]: Person and face management results
[POS]:    HTTP layer - person/face management endpoints
[UPDATE]: When adding new management endpoints or changing parameters
*/

// ### Person Management Endpoints

use crate::http::{Result, YoutuClient};
use crate::types::{
    AddFaceRequest, AddFaceResponse, DelFaceRequest, DelFaceResponse, DelPersonRequest,
    DelPersonResponse, GetInfoRequest, GetInfoResponse, NewPersonRequest, NewPersonResponse,
    SetInfoRequest, SetInfoResponse,
};

impl YoutuClient {
    /// Create a person from one face image and add it to the given groups.
    ///
    /// Empty `person_name` and `tag` are left out of the request.
    ///
    /// POST /youtu/api/newperson
    pub async fn new_person(
        &self,
        image: impl Into<String>,
        person_id: impl Into<String>,
        group_ids: Vec<String>,
        person_name: impl Into<String>,
        tag: impl Into<String>,
    ) -> Result<NewPersonResponse> {
        let req = NewPersonRequest {
            app_id: self.app_id(),
            image: image.into(),
            person_id: person_id.into(),
            group_ids,
            person_name: person_name.into(),
            tag: tag.into(),
        };
        self.call(&req).await
    }

    /// POST /youtu/api/delperson
    pub async fn del_person(&self, person_id: impl Into<String>) -> Result<DelPersonResponse> {
        let req = DelPersonRequest {
            app_id: self.app_id(),
            person_id: person_id.into(),
        };
        self.call(&req).await
    }

    /// Add faces to a person. A face can belong to one person only.
    ///
    /// POST /youtu/api/addface
    pub async fn add_face(
        &self,
        images: Vec<String>,
        person_id: impl Into<String>,
        tag: impl Into<String>,
    ) -> Result<AddFaceResponse> {
        let req = AddFaceRequest {
            app_id: self.app_id(),
            person_id: person_id.into(),
            images,
            tag: tag.into(),
        };
        self.call(&req).await
    }

    /// POST /youtu/api/delface
    pub async fn del_face(
        &self,
        person_id: impl Into<String>,
        face_ids: Vec<String>,
    ) -> Result<DelFaceResponse> {
        let req = DelFaceRequest {
            app_id: self.app_id(),
            person_id: person_id.into(),
            face_ids,
        };
        self.call(&req).await
    }

    /// Update the name and/or tag of a person
    ///
    /// POST /youtu/api/setinfo
    pub async fn set_info(
        &self,
        person_id: impl Into<String>,
        person_name: impl Into<String>,
        tag: impl Into<String>,
    ) -> Result<SetInfoResponse> {
        let req = SetInfoRequest {
            app_id: self.app_id(),
            person_id: person_id.into(),
            person_name: person_name.into(),
            tag: tag.into(),
        };
        self.call(&req).await
    }

    /// POST /youtu/api/getinfo
    pub async fn get_info(&self, person_id: impl Into<String>) -> Result<GetInfoResponse> {
        let req = GetInfoRequest {
            app_id: self.app_id(),
            person_id: person_id.into(),
        };
        self.call(&req).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credential;
    use crate::http::{ClientConfig, YoutuClient};
    use crate::types::{GetInfoResponse, ServiceResponse};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> YoutuClient {
        let credential = Credential::new(7, "AKID", "secret", 0, "tester").unwrap();
        YoutuClient::with_config(
            credential,
            ClientConfig::with_host(server.address().to_string()),
        )
        .expect("client init")
    }

    async fn mount(
        server: &MockServer,
        operation: &str,
        request: serde_json::Value,
        response: serde_json::Value,
    ) {
        Mock::given(method("POST"))
            .and(path(format!("/youtu/api/{operation}")))
            .and(body_json(request))
            .respond_with(ResponseTemplate::new(200).set_body_json(response))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_del_person() {
        let server = MockServer::start().await;
        mount(
            &server,
            "delperson",
            json!({"app_id": "7", "person_id": "p1"}),
            json!({"session_id": "s1", "deleted": 1, "errorcode": 0, "errormsg": "OK"}),
        )
        .await;

        let response = client_for(&server).del_person("p1").await.expect("del_person failed");
        assert_eq!(response.deleted, 1);
        assert_eq!(response.session_id, "s1");
    }

    #[tokio::test]
    async fn test_add_face_with_tag() {
        let server = MockServer::start().await;
        mount(
            &server,
            "addface",
            json!({"app_id": "7", "person_id": "p1", "images": ["QQ==", "Qg=="], "tag": "batch"}),
            json!({"session_id": "s2", "added": 2, "face_ids": ["f1", "f2"], "errorcode": 0, "errormsg": "OK"}),
        )
        .await;

        let response = client_for(&server)
            .add_face(vec!["QQ==".to_string(), "Qg==".to_string()], "p1", "batch")
            .await
            .expect("add_face failed");
        assert_eq!(response.added, 2);
        assert_eq!(response.face_ids, vec!["f1", "f2"]);
    }

    #[tokio::test]
    async fn test_del_face() {
        let server = MockServer::start().await;
        mount(
            &server,
            "delface",
            json!({"app_id": "7", "person_id": "p1", "face_ids": ["f1"]}),
            json!({"session_id": "s3", "deleted": 1, "errorcode": 0, "errormsg": "OK"}),
        )
        .await;

        let response = client_for(&server)
            .del_face("p1", vec!["f1".to_string()])
            .await
            .expect("del_face failed");
        assert_eq!(response.deleted, 1);
        assert_eq!(response.session_id, "s3");
    }

    #[tokio::test]
    async fn test_set_info_omits_empty_name() {
        let server = MockServer::start().await;
        mount(
            &server,
            "setinfo",
            json!({"app_id": "7", "person_id": "p1", "tag": "vip"}),
            json!({"session_id": "s4", "person_id": "p1", "errorcode": 0, "errormsg": "OK"}),
        )
        .await;

        let response = client_for(&server)
            .set_info("p1", "", "vip")
            .await
            .expect("set_info failed");
        assert_eq!(response.person_id, "p1");
        assert_eq!(response.session_id, "s4");
    }

    #[tokio::test]
    async fn test_get_info_service_error_is_data() {
        let server = MockServer::start().await;
        mount(
            &server,
            "getinfo",
            json!({"app_id": "7", "person_id": "missing"}),
            json!({"errorcode": -1101, "errormsg": "person not exist"}),
        )
        .await;

        let response = client_for(&server)
            .get_info("missing")
            .await
            .expect("service errors are data");
        assert_eq!(
            response,
            GetInfoResponse {
                error_code: -1101,
                error_msg: "person not exist".to_string(),
                ..GetInfoResponse::default()
            }
        );
        assert!(!response.is_success());
    }
}
