use super::*;

#[test]
fn post_endpoint_formats_expected_path() {
    assert_eq!(post_endpoint(42), "/api/posts/42/");
}

#[test]
fn public_posts_by_endpoint_pins_visibility() {
    assert_eq!(
        public_posts_by_endpoint(9),
        "/api/posts/?author=9&visibility=public"
    );
}

#[test]
fn category_and_user_endpoints_format_ids() {
    assert_eq!(category_endpoint(3), "/api/categories/3/");
    assert_eq!(user_endpoint(17), "/api/user/17/");
}

#[test]
fn bearer_value_prefixes_token() {
    assert_eq!(bearer_value("abc.def"), "Bearer abc.def");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message(500), "request failed: 500");
}

#[test]
fn error_from_body_prefers_detail() {
    let err = error_from_body(403, r#"{"detail":"You do not have permission."}"#);
    assert_eq!(err.status, Some(403));
    assert_eq!(err.message, "You do not have permission.");
}

#[test]
fn error_from_body_flattens_field_errors() {
    let err = error_from_body(
        400,
        r#"{"email":["Email address already in use."],"username":["A user with that username already exists."]}"#,
    );
    assert!(err.message.contains("email: Email address already in use."));
    assert!(err.message.contains("username: A user with that username already exists."));
}

#[test]
fn error_from_body_falls_back_on_non_json() {
    let err = error_from_body(502, "<html>Bad Gateway</html>");
    assert_eq!(err.message, "request failed: 502");
}

#[test]
fn error_from_body_falls_back_on_empty_object() {
    let err = error_from_body(400, "{}");
    assert_eq!(err.message, "request failed: 400");
}

#[test]
fn is_unauthorized_only_for_401() {
    assert!(error_from_body(401, "{}").is_unauthorized());
    assert!(!error_from_body(403, "{}").is_unauthorized());
    assert!(!ApiError::transport("offline").is_unauthorized());
}

#[test]
fn display_uses_message() {
    let err = ApiError::transport("connection refused");
    assert_eq!(err.to_string(), "connection refused");
}
