//! AI API 통합 테스트
//!
//! Router를 직접 호출하여 요청 검증, 응답 형식, 에러 매핑을 확인합니다.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use meddash_ai::{
    create_router_with_client,
    domain::ai::{ModelClient, OutputSchema, PromptRequest},
    utils::error::AppError,
};
use serde_json::{json, Value};
use tower::ServiceExt;

const TIMEOUT: Duration = Duration::from_secs(5);

/// 고정 응답을 돌려주고 호출 횟수를 세는 Mock 클라이언트
struct MockAiClientSuccess {
    response: String,
    calls: Arc<AtomicU32>,
}

impl MockAiClientSuccess {
    fn new(response: &str) -> (Self, Arc<AtomicU32>) {
        let calls = Arc::new(AtomicU32::new(0));
        (
            Self {
                response: response.to_string(),
                calls: Arc::clone(&calls),
            },
            calls,
        )
    }
}

#[async_trait::async_trait]
impl ModelClient for MockAiClientSuccess {
    async fn generate(
        &self,
        _prompt: &PromptRequest,
        _schema: &OutputSchema,
    ) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// 항상 실패하는 Mock 클라이언트
struct MockAiClientError {
    error: fn() -> AppError,
}

#[async_trait::async_trait]
impl ModelClient for MockAiClientError {
    async fn generate(
        &self,
        _prompt: &PromptRequest,
        _schema: &OutputSchema,
    ) -> Result<String, AppError> {
        Err((self.error)())
    }
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

mod product_description {
    use super::*;

    const URI: &str = "/api/ai/products/description";

    fn valid_body() -> Value {
        json!({
            "name": "Ibuprofen 200mg",
            "category": "Pain Relief",
            "description": "anti-inflammatory, fever",
            "usage": ""
        })
    }

    #[tokio::test]
    async fn should_return_200_for_valid_request() {
        // Arrange
        let (mock, calls) = MockAiClientSuccess::new(
            r#"{"description":"Ibuprofen is an NSAID used for pain and fever.","usage":"Take one tablet every 4-6 hours with food."}"#,
        );
        let app = create_router_with_client(mock, TIMEOUT);

        // Act
        let (status, body) = post_json(app, URI, valid_body()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isSuccess"], true);
        assert_eq!(body["code"], "COMMON200");
        assert!(!body["result"]["description"].as_str().unwrap().is_empty());
        assert!(!body["result"]["usage"].as_str().unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn should_return_400_without_calling_model_when_name_is_missing() {
        // Arrange
        let (mock, calls) = MockAiClientSuccess::new(r#"{"description":"d","usage":"u"}"#);
        let app = create_router_with_client(mock, TIMEOUT);

        // Act
        let (status, body) = post_json(
            app,
            URI,
            json!({ "category": "Pain Relief", "description": "", "usage": "" }),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "COMMON400");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_400_for_wrong_field_type() {
        let (mock, calls) = MockAiClientSuccess::new(r#"{"description":"d","usage":"u"}"#);
        let app = create_router_with_client(mock, TIMEOUT);

        let (status, body) = post_json(
            app,
            URI,
            json!({ "name": 1, "category": "x", "description": "", "usage": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "COMMON400");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_accept_empty_description_and_usage() {
        let (mock, _) = MockAiClientSuccess::new(
            r#"{"description":"Cetirizine relieves allergy symptoms.","usage":"One tablet daily."}"#,
        );
        let app = create_router_with_client(mock, TIMEOUT);

        let (status, _) = post_json(
            app,
            URI,
            json!({ "name": "Cetirizine", "category": "Allergy", "description": "", "usage": "" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn should_return_502_when_model_output_is_malformed() {
        // Arrange
        let (mock, _) = MockAiClientSuccess::new(r#"{"description":"only half"}"#);
        let app = create_router_with_client(mock, TIMEOUT);

        // Act
        let (status, body) = post_json(app, URI, valid_body()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "AI_005");
        assert!(body["result"].is_null());
    }
}

mod feedback_summary {
    use super::*;

    const URI: &str = "/api/ai/drivers/feedback-summary";

    #[tokio::test]
    async fn should_return_summary_for_feedback() {
        // Arrange
        let feedback = "Driver was late three times.";
        let (mock, _) =
            MockAiClientSuccess::new(r#"{"summary":"Punctuality needs improvement."}"#);
        let app = create_router_with_client(mock, TIMEOUT);

        // Act
        let (status, body) = post_json(app, URI, json!({ "feedback": feedback })).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        let summary = body["result"]["summary"].as_str().unwrap();
        assert!(!summary.is_empty());
        assert_ne!(summary, feedback);
    }

    #[tokio::test]
    async fn should_return_400_for_missing_feedback() {
        let (mock, calls) = MockAiClientSuccess::new(r#"{"summary":"s"}"#);
        let app = create_router_with_client(mock, TIMEOUT);

        let (status, body) = post_json(app, URI, json!({})).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "COMMON400");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn should_return_400_for_malformed_json_body() {
        let (mock, _) = MockAiClientSuccess::new(r#"{"summary":"s"}"#);
        let app = create_router_with_client(mock, TIMEOUT);

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(URI)
                    .header("content-type", "application/json")
                    .body(Body::from("{not json"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn should_return_502_when_model_call_fails() {
        // Arrange
        let mock = MockAiClientError {
            error: || AppError::ModelInvocationError("connection reset by peer".to_string()),
        };
        let app = create_router_with_client(mock, TIMEOUT);

        // Act
        let (status, body) = post_json(app, URI, json!({ "feedback": "Rude driver." })).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["isSuccess"], false);
        assert_eq!(body["code"], "AI_004");
        assert!(body["result"].is_null());
    }

    #[tokio::test]
    async fn should_return_429_when_model_is_rate_limited() {
        let mock = MockAiClientError {
            error: || AppError::ModelRateLimited,
        };
        let app = create_router_with_client(mock, TIMEOUT);

        let (status, body) = post_json(app, URI, json!({ "feedback": "Late." })).await;

        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(body["code"], "AI_002");
    }

    #[tokio::test]
    async fn should_return_502_when_summary_key_is_missing() {
        let (mock, _) = MockAiClientSuccess::new(r#"{"result":"Be on time."}"#);
        let app = create_router_with_client(mock, TIMEOUT);

        let (status, body) = post_json(app, URI, json!({ "feedback": "Late." })).await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "AI_005");
    }
}
