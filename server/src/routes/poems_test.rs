use super::*;
use crate::state::test_helpers::test_app_state;

fn save_request(id: Option<&str>, content: &str) -> Json<SavePoemRequest> {
    Json(SavePoemRequest { id: id.map(str::to_owned), content: content.into() })
}

#[tokio::test]
async fn save_then_fetch_round_trip() {
    let tmp = tempfile::tempdir().unwrap();
    let state = test_app_state(tmp.path());

    let Json(saved) = save_poem(State(state.clone()), save_request(Some("abc123"), "  Roses are red\nViolets  \n"))
        .await
        .unwrap();
    assert_eq!(saved, SavePoemResponse { status: "success", id: "abc123".into() });

    let Json(poem) = get_poem(State(state), Path("abc123".into())).await.unwrap();
    assert_eq!(poem.content, "Roses are red\nViolets");
}

#[tokio::test]
async fn empty_content_is_rejected_before_id() {
    let tmp = tempfile::tempdir().unwrap();
    let err = save_poem(State(test_app_state(tmp.path())), save_request(None, "   \n")).await.unwrap_err();
    assert!(matches!(err, ApiError::Poem(PoemError::Empty)));
}

#[tokio::test]
async fn missing_id_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let err = save_poem(State(test_app_state(tmp.path())), save_request(None, "a line")).await.unwrap_err();
    assert!(matches!(err, ApiError::Poem(PoemError::MissingId)));
    assert_eq!(err.status(), axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn list_shows_saved_poems() {
    let tmp = tempfile::tempdir().unwrap();
    let state = test_app_state(tmp.path());
    save_poem(State(state.clone()), save_request(Some("one"), "First poem")).await.unwrap();

    let Json(list) = list_poems(State(state)).await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].id, "one");
    assert_eq!(list[0].first_line, "First poem");
}

#[tokio::test]
async fn list_is_empty_for_fresh_store() {
    let tmp = tempfile::tempdir().unwrap();
    let Json(list) = list_poems(State(test_app_state(tmp.path()))).await.unwrap();
    assert!(list.is_empty());
}

#[tokio::test]
async fn unknown_poem_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let err = get_poem(State(test_app_state(tmp.path())), Path("ghost".into())).await.unwrap_err();
    assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn malformed_poem_id_is_not_found() {
    let tmp = tempfile::tempdir().unwrap();
    let err = get_poem(State(test_app_state(tmp.path())), Path("no-such-poem".into())).await.unwrap_err();
    assert_eq!(err.status(), axum::http::StatusCode::NOT_FOUND);
}
