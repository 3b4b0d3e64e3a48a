/*
[INPUT]:  Base64 images, person/group/face identifiers
[OUTPUT]: Detection, comparison, verification and identification results
[POS]:    HTTP layer - face analysis endpoints
[UPDATE]: When adding new face analysis endpoints or changing parameters
*/

// ### Face Analysis Endpoints

use crate::http::{Result, YoutuClient};
use crate::types::{
    DetectFaceRequest, DetectFaceResponse, DetectMode, FaceCompareRequest, FaceCompareResponse,
    FaceIdentifyRequest, FaceIdentifyResponse, FaceVerifyRequest, FaceVerifyResponse,
    GetFaceInfoRequest, GetFaceInfoResponse,
};

impl YoutuClient {
    /// Detect every face in an image with position and attributes
    ///
    /// POST /youtu/api/detectface
    pub async fn detect_face(
        &self,
        image: impl Into<String>,
        mode: DetectMode,
    ) -> Result<DetectFaceResponse> {
        let req = DetectFaceRequest {
            app_id: self.app_id(),
            image: image.into(),
            mode,
        };
        self.call(&req).await
    }

    /// Similarity of two faces, overall and per feature
    ///
    /// POST /youtu/api/facecompare
    pub async fn face_compare(
        &self,
        image_a: impl Into<String>,
        image_b: impl Into<String>,
    ) -> Result<FaceCompareResponse> {
        let req = FaceCompareRequest {
            app_id: self.app_id(),
            image_a: image_a.into(),
            image_b: image_b.into(),
        };
        self.call(&req).await
    }

    /// Whether a face belongs to a given person
    ///
    /// POST /youtu/api/faceverify
    pub async fn face_verify(
        &self,
        image: impl Into<String>,
        person_id: impl Into<String>,
    ) -> Result<FaceVerifyResponse> {
        let req = FaceVerifyRequest {
            app_id: self.app_id(),
            image: image.into(),
            person_id: person_id.into(),
        };
        self.call(&req).await
    }

    /// Most similar person within a group
    ///
    /// POST /youtu/api/faceidentify
    pub async fn face_identify(
        &self,
        image: impl Into<String>,
        group_id: impl Into<String>,
    ) -> Result<FaceIdentifyResponse> {
        let req = FaceIdentifyRequest {
            app_id: self.app_id(),
            group_id: group_id.into(),
            image: image.into(),
        };
        self.call(&req).await
    }

    /// POST /youtu/api/getfaceinfo
    pub async fn get_face_info(&self, face_id: impl Into<String>) -> Result<GetFaceInfoResponse> {
        let req = GetFaceInfoRequest {
            app_id: self.app_id(),
            face_id: face_id.into(),
        };
        self.call(&req).await
    }
}

#[cfg(test)]
mod tests {
    use crate::auth::Credential;
    use crate::http::{ClientConfig, YoutuClient};
    use crate::types::{DetectMode, Face};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> YoutuClient {
        let credential = Credential::new(1000061, "AKID", "secret", 0, "tester").unwrap();
        YoutuClient::with_config(
            credential,
            ClientConfig::with_host(server.address().to_string()),
        )
        .expect("client init")
    }

    #[tokio::test]
    async fn test_detect_face_big_face_mode() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/youtu/api/detectface"))
            .and(body_json(json!({"app_id": "1000061", "image": "aW1n", "mode": 1})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "session_id": "s1",
                "image_id": "i1",
                "image_width": 100,
                "image_height": 80,
                "face": [{"face_id": "f1", "x": 1, "y": 2, "width": 30.0, "height": 40.0, "age": 25}],
                "errorcode": 0,
                "errormsg": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .detect_face("aW1n", DetectMode::BigFace)
            .await
            .expect("detect_face failed");

        assert_eq!(response.image_width, 100);
        assert_eq!(
            response.face,
            vec![Face {
                face_id: "f1".to_string(),
                x: 1,
                y: 2,
                width: 30.0,
                height: 40.0,
                age: 25,
                ..Face::default()
            }]
        );
    }

    #[tokio::test]
    async fn test_face_compare() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/youtu/api/facecompare"))
            .and(body_json(json!({"app_id": "1000061", "imageA": "QQ==", "imageB": "Qg=="})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "eyebrow_sim": 0.5,
                "eye_sim": 0.25,
                "nose_sim": 0.75,
                "mouth_sim": 1.0,
                "similarity": 88.5,
                "errorcode": 0,
                "errormsg": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .face_compare("QQ==", "Qg==")
            .await
            .expect("face_compare failed");

        assert_eq!(response.similarity, 88.5);
        assert_eq!(response.eye_sim, 0.25);
        assert_eq!(response.mouth_sim, 1.0);
    }

    #[tokio::test]
    async fn test_face_verify() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/youtu/api/faceverify"))
            .and(body_json(json!({"app_id": "1000061", "image": "aW1n", "person_id": "p1"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ismatch": true,
                "confidence": 92.0,
                "session_id": "s2",
                "errorcode": 0,
                "errormsg": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .face_verify("aW1n", "p1")
            .await
            .expect("face_verify failed");

        assert!(response.is_match);
        assert_eq!(response.confidence, 92.0);
        assert_eq!(response.session_id, "s2");
    }

    #[tokio::test]
    async fn test_face_identify() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/youtu/api/faceidentify"))
            .and(body_json(json!({"app_id": "1000061", "group_id": "g1", "image": "aW1n"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "session_id": "s3",
                "person_id": "p7",
                "face_id": "f7",
                "confidence": 77.5,
                "errorcode": 0,
                "errormsg": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .face_identify("aW1n", "g1")
            .await
            .expect("face_identify failed");

        assert_eq!(response.person_id, "p7");
        assert_eq!(response.face_id, "f7");
        assert_eq!(response.confidence, 77.5);
    }

    #[tokio::test]
    async fn test_get_face_info() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/youtu/api/getfaceinfo"))
            .and(body_json(json!({"app_id": "1000061", "face_id": "f9"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "face_info": {"face_id": "f9", "gender": 100, "glass": true, "roll": -12},
                "errorcode": 0,
                "errormsg": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server)
            .get_face_info("f9")
            .await
            .expect("get_face_info failed");

        assert_eq!(response.face_info.face_id, "f9");
        assert_eq!(response.face_info.gender, 100);
        assert!(response.face_info.glass);
        assert_eq!(response.face_info.roll, -12);
    }
}
