use super::*;

// =============================================================
// Headers
// =============================================================

#[test]
fn header_lookup_ignores_case() {
    let request = OutboundRequest::get("/a").try_header("content-type", "text/plain").unwrap();
    assert_eq!(request.header_str("Content-Type"), Some("text/plain"));
    assert!(request.headers.contains_key("CONTENT-TYPE"));
}

#[test]
fn header_replaces_existing_value() {
    let request = OutboundRequest::get("/a")
        .try_header("X-AUTH-TOKEN", "old")
        .and_then(|r| r.try_header("x-auth-token", "new"))
        .unwrap();
    assert_eq!(request.headers.len(), 1);
    assert_eq!(request.header_str("X-AUTH-TOKEN"), Some("new"));
}

#[test]
fn try_header_rejects_invalid_name_and_value() {
    assert!(matches!(OutboundRequest::get("/a").try_header("Bad Header", "x"), Err(ApiError::Interceptor(_))));
    assert!(matches!(OutboundRequest::get("/a").try_header("X-Ok", "a\r\nb"), Err(ApiError::Interceptor(_))));
}

// =============================================================
// Requests and responses
// =============================================================

#[test]
fn json_body_serializes_value() {
    #[derive(serde::Serialize)]
    struct Event<'a> {
        title: &'a str,
    }
    let request = OutboundRequest::new(Method::POST, "/events").json(&Event { title: "standup" }).unwrap();
    assert_eq!(request.body.as_deref(), Some(r#"{"title":"standup"}"#));
    assert_eq!(request.method, Method::POST);
}

#[test]
fn response_success_range() {
    assert!(ApiResponse { status: 204, body: String::new() }.is_success());
    assert!(!ApiResponse { status: 401, body: String::new() }.is_success());
}

#[test]
fn response_json_reports_decode_errors() {
    let response = ApiResponse { status: 200, body: "not json".to_owned() };
    assert!(matches!(response.json::<serde_json::Value>(), Err(ApiError::Decode(_))));
    let response = ApiResponse { status: 200, body: r#"{"id":3}"#.to_owned() };
    let value: serde_json::Value = response.json().unwrap();
    assert_eq!(value["id"], 3);
}
