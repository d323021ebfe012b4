use css_accounts_client::prelude::*;
use std::time::Duration;

#[test]
fn test_default_rest_api_config() {
    let cfg = RestApiConfig::default();
    assert_eq!(cfg.host, "css.googleapis.com");
    assert_eq!(cfg.url_scheme, "https");
    assert_eq!(cfg.timeout(), Duration::from_secs(60));
}

#[test]
fn test_with_host_and_token() {
    let cfg = Config::with_host_and_token("localhost:8080", "abc");
    assert_eq!(cfg.credentials.access_token.as_deref(), Some("abc"));
    assert!(cfg.credentials.quota_project_id.is_none());
    assert_eq!(cfg.rest_api.base_url().unwrap(), "https://localhost:8080");
}

#[test]
fn test_http_scheme_for_local_servers() {
    let mut cfg = Config::with_host_and_token("localhost:8080", "abc");
    cfg.rest_api.url_scheme = "http".to_string();
    assert_eq!(cfg.rest_api.base_url().unwrap(), "http://localhost:8080");
}

#[test]
fn test_empty_host_is_rejected() {
    let cfg = Config::with_host_and_token("  ", "abc");
    assert!(matches!(
        cfg.rest_api.base_url(),
        Err(AppError::InvalidConfig(_))
    ));
}

#[test]
fn test_config_deserializes_without_token() {
    let cfg: Config = serde_json::from_str(
        r#"{
            "credentials": {"quota_project_id": "billing-project"},
            "rest_api": {"host": "css.googleapis.com", "url_scheme": "https", "timeout": 30}
        }"#,
    )
    .unwrap();
    assert!(cfg.credentials.access_token.is_none());
    assert_eq!(cfg.credentials.quota_project_id.as_deref(), Some("billing-project"));
    assert_eq!(cfg.rest_api.timeout, 30);
}
