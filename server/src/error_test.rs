use super::*;

#[test]
fn poem_validation_errors_are_bad_request() {
    assert_eq!(ApiError::from(PoemError::Empty).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::from(PoemError::MissingId).status(), StatusCode::BAD_REQUEST);
    assert_eq!(ApiError::from(PoemError::InvalidId("a-b".into())).status(), StatusCode::BAD_REQUEST);
}

#[test]
fn missing_resources_are_not_found() {
    assert_eq!(ApiError::from(PoemError::NotFound("x".into())).status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::from(PreferenceError::Missing).status(), StatusCode::NOT_FOUND);
    assert_eq!(ApiError::NotFound.status(), StatusCode::NOT_FOUND);
}

#[test]
fn llm_errors_map_to_server_errors() {
    let err = ApiError::from(LlmError::ApiRequest("timeout".into()));
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(ApiError::LlmUnavailable.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[test]
fn unauthorized_is_401() {
    assert_eq!(ApiError::Unauthorized.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn response_body_carries_detail() {
    let resp = ApiError::from(PoemError::Empty).into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "detail": "Empty poem" }));
}
