use super::*;

#[test]
fn calendar_endpoint_formats_expected_path() {
    assert_eq!(calendar_endpoint("42"), "/calendars/42");
}

#[test]
fn calendar_endpoint_encodes_identifier() {
    assert_eq!(calendar_endpoint("a b"), "/calendars/a%20b");
}

#[test]
fn calendar_failed_message_formats_status() {
    assert_eq!(calendar_failed_message(403), "calendar request failed: 403");
}
