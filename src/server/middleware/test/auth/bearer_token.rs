use super::*;

/// Expected: token without the scheme prefix
#[test]
fn extracts_token() {
    let headers = headers_with("Bearer abc123");

    assert_eq!(bearer_token(&headers).unwrap(), "abc123");
}

/// Tests headers that carry no usable bearer token.
///
/// Expected: Err(AuthError::MissingCredential) for each
#[test]
fn rejects_missing_or_malformed_header() {
    let empty = HeaderMap::new();
    let basic = headers_with("Basic dXNlcjpwdw==");
    let blank = headers_with("Bearer   ");

    assert!(matches!(
        bearer_token(&empty),
        Err(AuthError::MissingCredential)
    ));
    assert!(matches!(
        bearer_token(&basic),
        Err(AuthError::MissingCredential)
    ));
    assert!(matches!(
        bearer_token(&blank),
        Err(AuthError::MissingCredential)
    ));
}
