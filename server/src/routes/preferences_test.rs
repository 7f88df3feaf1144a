use super::*;
use crate::services::preferences::PreferenceError;
use crate::state::test_helpers::test_app_state;
use axum::http::StatusCode;

fn record(chosen: &str) -> PreferenceRecord {
    PreferenceRecord {
        current_text: "Roses are red".into(),
        alternatives: vec!["a".into(), chosen.into()],
        chosen: chosen.into(),
    }
}

#[tokio::test]
async fn record_appends_and_reports_success() {
    let tmp = tempfile::tempdir().unwrap();
    let state = test_app_state(tmp.path());
    let Json(body) = record_preference(State(state.clone()), Json(record("b"))).await.unwrap();
    assert_eq!(body, json!({ "status": "success" }));

    let raw = state.preferences.read_all().await.unwrap();
    let line: PreferenceRecord = serde_json::from_slice(raw.strip_suffix(b"\n").unwrap()).unwrap();
    assert_eq!(line.chosen, "b");
}

#[tokio::test]
async fn download_without_log_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let err = download_preferences(State(test_app_state(tmp.path())), RequireToken).await.err().unwrap();
    assert!(matches!(err, ApiError::Preference(PreferenceError::Missing)));
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn download_serves_jsonl_attachment() {
    let tmp = tempfile::tempdir().unwrap();
    let state = test_app_state(tmp.path());
    record_preference(State(state.clone()), Json(record("x"))).await.unwrap();
    record_preference(State(state.clone()), Json(record("y"))).await.unwrap();

    let resp = download_preferences(State(state), RequireToken).await.ok().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        resp.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"line_preferences.jsonl\""
    );

    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert_eq!(text.lines().count(), 2);
}
