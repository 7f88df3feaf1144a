use super::*;

#[test]
fn auth_headers_empty_without_token() {
    assert!(auth_headers_for(None).is_empty());
}

#[test]
fn auth_headers_empty_for_empty_token() {
    assert!(auth_headers_for(Some("")).is_empty());
}

#[test]
fn auth_headers_bearer_for_token() {
    let headers = auth_headers_for(Some("abc.def"));
    assert_eq!(headers.len(), 1);
    assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer abc.def"));
}

#[test]
fn auth_headers_pass_token_verbatim() {
    let headers = auth_headers_for(Some("  spaced token  "));
    assert_eq!(headers.get("Authorization").map(String::as_str), Some("Bearer   spaced token  "));
}

#[test]
fn guard_redirects_to_viewer_when_unauthenticated() {
    assert_eq!(guard_redirect(false), Some("/v"));
}

#[test]
fn guard_allows_when_authenticated() {
    assert_eq!(guard_redirect(true), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn storage_reads_are_empty_outside_browser() {
    // Non-hydrate builds have no localStorage; the auth check must be false.
    assert!(stored_token().is_none());
    assert!(!is_authenticated());
    assert!(auth_headers().is_empty());
}
