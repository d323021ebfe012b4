use assert_json_diff::assert_json_eq;
use css_accounts_client::prelude::*;
use serde_json::json;
use std::time::Duration;

#[test]
fn test_get_account_request_serialization() {
    let request = GetAccountRequest::new("accounts/123").with_parent("accounts/1");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"name": "accounts/123", "parent": "accounts/1"})
    );
}

#[test]
fn test_list_child_accounts_request_omits_defaults() {
    let request = ListChildAccountsRequest::new("accounts/5");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"parent": "accounts/5"})
    );
}

#[test]
fn test_list_child_accounts_request_with_filters() {
    let request = ListChildAccountsRequest::new("accounts/5")
        .with_label_id(1234567890123)
        .with_full_name("Shop")
        .with_page_size(25)
        .with_page_token("next");
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "parent": "accounts/5",
            "labelId": "1234567890123",
            "fullName": "Shop",
            "pageSize": 25,
            "pageToken": "next"
        })
    );
}

#[test]
fn test_update_labels_request_encodes_int64_as_strings() {
    let request = UpdateAccountLabelsRequest::new("accounts/9", [1, 2, 3]);
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"name": "accounts/9", "labelIds": ["1", "2", "3"]})
    );
}

#[test]
fn test_update_labels_request_empty_labels_clears() {
    let request = UpdateAccountLabelsRequest::new("accounts/9", Vec::<i64>::new());
    assert_json_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({"name": "accounts/9"})
    );
}

#[test]
fn test_call_options_builder() {
    let options = CallOptions::new()
        .with_retry(RetryConfig::with_max_retries_and_delay(2, 0))
        .with_timeout(Duration::from_millis(1500))
        .with_metadata("x-trace", "abc");

    assert_eq!(options.retry.as_ref().map(RetryConfig::max_retries), Some(2));
    assert_eq!(options.timeout, Some(Duration::from_millis(1500)));
    assert_eq!(
        options.metadata,
        vec![("x-trace".to_string(), "abc".to_string())]
    );
}
