use super::*;

#[test]
fn poem_endpoint_formats_expected_path() {
    assert_eq!(poem_endpoint("a1b2c3"), "/api/poem/a1b2c3");
}

#[test]
fn request_failed_message_prefers_detail() {
    assert_eq!(request_failed_message("save", 400, Some("Empty poem")), "save failed: Empty poem");
}

#[test]
fn request_failed_message_falls_back_to_status() {
    assert_eq!(request_failed_message("generate", 503, None), "generate failed: 503");
    assert_eq!(request_failed_message("generate", 500, Some("")), "generate failed: 500");
}

#[test]
fn download_url_points_at_api() {
    assert_eq!(PREFERENCES_DOWNLOAD_URL, "/api/download_preferences");
    assert_eq!(PREFERENCES_FILE_NAME, "line_preferences.jsonl");
}
