use super::*;

/// Tests parsing the Authorization header.
///
/// Expected: token for a well-formed bearer header, None otherwise
#[test]
fn parses_bearer_header() {
    assert_eq!(bearer_token(&headers_with("Bearer abc123")), Some("abc123"));
    assert_eq!(bearer_token(&headers_with("bearer abc123")), Some("abc123"));
    assert_eq!(bearer_token(&headers_with("Basic abc123")), None);
    assert_eq!(bearer_token(&headers_with("Bearer ")), None);
    assert_eq!(bearer_token(&headers_with("abc123")), None);
    assert_eq!(bearer_token(&HeaderMap::new()), None);
}
