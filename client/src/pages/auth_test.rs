use super::*;

#[test]
fn normalize_token_input_trims() {
    assert_eq!(normalize_token_input("  tok-123 \n"), Ok("tok-123".to_owned()));
}

#[test]
fn normalize_token_input_rejects_blank() {
    assert_eq!(normalize_token_input("   "), Err("Enter a token first."));
    assert_eq!(normalize_token_input(""), Err("Enter a token first."));
}
