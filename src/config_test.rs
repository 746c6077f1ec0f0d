use super::*;

#[test]
fn default_config_uses_fixed_key_and_header() {
    let config = ClientConfig::default();
    assert_eq!(config.token_key, "token");
    assert_eq!(config.auth_header.as_str(), "x-auth-token");
    assert_eq!(config.signin_path, "/signin");
    assert_eq!(config.home_path, "/home");
    assert!(config.api_base_url.is_empty());
}

#[test]
fn normalize_base_url_trims_trailing_slashes() {
    assert_eq!(normalize_base_url(" https://api.example.com// "), "https://api.example.com");
    assert_eq!(normalize_base_url("/"), "");
}

#[test]
fn from_base_url_absent_means_page_origin() {
    let config = ClientConfig::from_base_url(None);
    assert_eq!(config.url_for("/calendars"), "/calendars");
}

#[test]
fn url_for_joins_base_and_path() {
    let config = ClientConfig::from_base_url(Some("http://localhost:8080/"));
    assert_eq!(config.url_for("/calendars/7"), "http://localhost:8080/calendars/7");
}

#[test]
fn url_for_leaves_absolute_urls_alone() {
    let config = ClientConfig::from_base_url(Some("http://localhost:8080"));
    assert_eq!(config.url_for("https://cdn.example.com/holidays.json"), "https://cdn.example.com/holidays.json");
}
