use css_accounts_client::model::retry::RetryConfig;
use reqwest::StatusCode;
use std::env;

#[test]
fn test_retry_config_none() {
    let config = RetryConfig::none();
    assert_eq!(config.max_retries(), 0); // single attempt
    assert_eq!(config.delay_secs(), 1); // default
}

#[test]
fn test_retry_config_with_max_retries() {
    let config = RetryConfig::with_max_retries(5);
    assert_eq!(config.max_retries(), 5);
    assert_eq!(config.delay_secs(), 1);
}

#[test]
fn test_retry_config_with_max_retries_and_delay() {
    let config = RetryConfig::with_max_retries_and_delay(3, 15);
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.delay_secs(), 15);
}

#[test]
fn test_retry_config_reads_environment() {
    unsafe {
        env::set_var("CSS_TEST_RETRY_MAX", "4");
        env::set_var("CSS_TEST_RETRY_DELAY", "0");
    }
    let config = RetryConfig::from_env_vars("CSS_TEST_RETRY_MAX", "CSS_TEST_RETRY_DELAY");
    assert_eq!(config.max_retry_count, Some(4));
    assert_eq!(config.max_retries(), 4);
    assert_eq!(config.delay_secs(), 0);
}

#[test]
fn test_retry_config_ignores_unparsable_environment() {
    unsafe { env::set_var("CSS_TEST_RETRY_BAD_MAX", "many") };
    let config =
        RetryConfig::from_env_vars("CSS_TEST_RETRY_BAD_MAX", "CSS_TEST_RETRY_UNSET_DELAY");
    assert!(config.max_retry_count.is_none());
    assert!(config.retry_delay_secs.is_none());
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.delay_secs(), 1);
}

#[test]
fn test_retryable_statuses() {
    assert!(RetryConfig::is_retryable(StatusCode::TOO_MANY_REQUESTS));
    assert!(RetryConfig::is_retryable(StatusCode::SERVICE_UNAVAILABLE));
    assert!(RetryConfig::is_retryable(StatusCode::BAD_GATEWAY));
    assert!(RetryConfig::is_retryable(StatusCode::GATEWAY_TIMEOUT));
    assert!(!RetryConfig::is_retryable(StatusCode::NOT_FOUND));
    assert!(!RetryConfig::is_retryable(StatusCode::INTERNAL_SERVER_ERROR));
    assert!(!RetryConfig::is_retryable(StatusCode::OK));
}
