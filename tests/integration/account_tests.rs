// End-to-end calls for each accounts endpoint

use crate::common::{alt_param, create_transport, test_config};
use css_accounts_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_get_account() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/accounts/123")
        .match_query(alt_param())
        .match_header("authorization", "Bearer test-token")
        .match_header("content-type", "application/json")
        .match_header("x-request-source", "tests")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "name": "accounts/123",
                "fullName": "Example CSS Group",
                "homepageUri": "https://example.test",
                "labelIds": ["1", "2"],
                "accountType": 1,
                "fieldFromTheFuture": "ignored"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let transport = create_transport(&server.url(), None);
    let options = CallOptions::new().with_metadata("x-request-source", "tests");
    let account = transport
        .get_account(GetAccountRequest::new("accounts/123"), options)
        .await
        .expect("Failed to get account");

    assert_eq!(account.name, "accounts/123");
    assert_eq!(account.full_name, "Example CSS Group");
    assert_eq!(account.label_ids, vec![1, 2]);
    assert_eq!(account.account_type, AccountType::CssGroup);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_child_accounts() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/accounts/5:listChildAccounts")
        .match_query(Matcher::AllOf(vec![
            alt_param(),
            Matcher::UrlEncoded("labelId".to_string(), "42".to_string()),
            Matcher::UrlEncoded("pageSize".to_string(), "2".to_string()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "accounts": [
                    {"name": "accounts/6", "accountType": 2, "parent": "accounts/5"},
                    {"name": "accounts/7", "accountType": 2, "parent": "accounts/5"}
                ],
                "nextPageToken": "page-2"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let transport = create_transport(&server.url(), None);
    let request = ListChildAccountsRequest::new("accounts/5")
        .with_label_id(42)
        .with_page_size(2);
    let response = transport
        .list_child_accounts(request, CallOptions::new())
        .await
        .expect("Failed to list child accounts");

    assert_eq!(response.accounts.len(), 2);
    assert_eq!(response.accounts[1].account_id(), Some("7"));
    assert_eq!(response.next_page_token, "page-2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_update_labels() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/accounts/9:updateLabels")
        .match_query(alt_param())
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({"labelIds": ["10", "20"]})))
        .with_status(200)
        .with_body(
            json!({"name": "accounts/9", "labelIds": ["10", "20"], "accountType": 7}).to_string(),
        )
        .create_async()
        .await;

    let transport = create_transport(&server.url(), None);
    let account = transport
        .update_labels(
            UpdateAccountLabelsRequest::new("accounts/9", [10, 20]),
            CallOptions::new(),
        )
        .await
        .expect("Failed to update labels");

    assert_eq!(account.label_ids, vec![10, 20]);
    assert_eq!(account.account_type, AccountType::McStandalone);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_empty_success_body_decodes_to_default() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/accounts/1")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("")
        .create_async()
        .await;

    let transport = create_transport(&server.url(), None);
    let account = transport
        .get_account(GetAccountRequest::new("accounts/1"), CallOptions::new())
        .await
        .expect("Empty body should decode");

    assert_eq!(account, Account::default());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_quota_project_header() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/accounts/1")
        .match_query(Matcher::Any)
        .match_header("x-goog-user-project", "billing-project")
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let mut config = test_config(&server.url());
    config.credentials.quota_project_id = Some("billing-project".to_string());
    let transport = AccountsServiceRestTransport::new(&config, None).unwrap();
    transport
        .get_account(GetAccountRequest::new("accounts/1"), CallOptions::new())
        .await
        .expect("Failed to get account");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_retry_policy_is_forwarded_to_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/accounts/1")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body(r#"{"error": {"code": 503, "message": "try later", "status": "UNAVAILABLE"}}"#)
        .expect(3)
        .create_async()
        .await;

    let transport = create_transport(&server.url(), None);
    let options = CallOptions::new()
        .with_retry(RetryConfig::with_max_retries_and_delay(2, 0))
        .with_timeout(Duration::from_secs(2));
    let err = transport
        .get_account(GetAccountRequest::new("accounts/1"), options)
        .await
        .unwrap_err();

    let api = err.as_api_error().expect("Expected an API error");
    assert_eq!(api.kind, ApiErrorKind::ServiceUnavailable);
    assert_eq!(api.rpc_status.as_deref(), Some("UNAVAILABLE"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_invalid_request_is_rejected_locally() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let transport = create_transport(&server.url(), None);
    let err = transport
        .get_account(GetAccountRequest::new("not-an-account"), CallOptions::new())
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidRequest(_)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_closed_transport_rejects_calls() {
    let server = Server::new_async().await;
    let transport = Arc::new(create_transport(&server.url(), None));
    transport.close().await;

    let err = transport
        .get_account(GetAccountRequest::new("accounts/1"), CallOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::SessionClosed));
    assert!(transport.session().is_closed());
}

#[tokio::test]
async fn test_custom_client_identification_headers() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/accounts/1")
        .match_query(Matcher::Any)
        .match_header(
            "user-agent",
            Matcher::Regex("^shop-sync/2.1 css-accounts-client/".to_string()),
        )
        .match_header(
            "x-goog-api-client",
            Matcher::Regex("rest/reqwest shop-sync/2.1$".to_string()),
        )
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let mut config = test_config(&server.url());
    config.rest_api.user_agent = Some("shop-sync/2.1".to_string());
    config.rest_api.client_info = Some("shop-sync/2.1".to_string());
    let transport = AccountsServiceRestTransport::new(&config, None).unwrap();
    transport
        .get_account(GetAccountRequest::new("accounts/1"), CallOptions::new())
        .await
        .expect("Failed to get account");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_incomplete_client_certificate_config_is_rejected() {
    let mut config = test_config("http://127.0.0.1:9");
    config.rest_api.client_key_path = Some("client.key".to_string());
    assert!(matches!(
        AccountsServiceRestTransport::new(&config, None),
        Err(AppError::InvalidConfig(_))
    ));
}

#[tokio::test]
async fn test_unknown_account_type_in_list_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/v1/accounts/5:listChildAccounts")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "accounts": [
                    {"name": "accounts/6", "accountType": "MC_FUTURE_KIND"},
                    {"name": "accounts/7", "accountType": "7"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let transport = create_transport(&server.url(), None);
    let response = transport
        .list_child_accounts(ListChildAccountsRequest::new("accounts/5"), CallOptions::new())
        .await
        .expect("Unknown account types must not fail decoding");

    assert_eq!(response.accounts[0].account_type, AccountType::Unspecified);
    assert_eq!(response.accounts[1].account_type, AccountType::McStandalone);
    mock.assert_async().await;
}
