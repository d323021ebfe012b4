// Common utilities for integration tests

use css_accounts_client::prelude::*;
use mockito::Matcher;
use std::sync::{Arc, Mutex};

pub const TEST_TOKEN: &str = "test-token";

/// Configuration pointing at the mock server
pub fn test_config(server_url: &str) -> Config {
    setup_logger();
    let mut config = Config::with_host_and_token(server_url, TEST_TOKEN);
    config.rest_api.timeout = 5;
    config
}

/// Transport pointing at the mock server
pub fn create_transport(
    server_url: &str,
    interceptor: Option<Arc<dyn AccountsServiceInterceptor>>,
) -> AccountsServiceRestTransport {
    AccountsServiceRestTransport::new(&test_config(server_url), interceptor)
        .expect("Failed to create transport")
}

/// Matches the system parameter every request carries
pub fn alt_param() -> Matcher {
    Matcher::UrlEncoded("$alt".to_string(), "json;enum-encoding=int".to_string())
}

/// Interceptor recording every hook invocation in order
#[derive(Default)]
pub struct RecordingInterceptor {
    pub events: Mutex<Vec<&'static str>>,
}

impl RecordingInterceptor {
    pub fn events(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, event: &'static str) {
        self.events.lock().unwrap().push(event);
    }
}

impl AccountsServiceInterceptor for RecordingInterceptor {
    fn pre_get_account(
        &self,
        request: GetAccountRequest,
        metadata: Metadata,
    ) -> (GetAccountRequest, Metadata) {
        self.record("pre_get_account");
        (request, metadata)
    }

    fn post_get_account(&self, response: Account) -> Account {
        self.record("post_get_account");
        response
    }

    fn pre_list_child_accounts(
        &self,
        request: ListChildAccountsRequest,
        metadata: Metadata,
    ) -> (ListChildAccountsRequest, Metadata) {
        self.record("pre_list_child_accounts");
        (request, metadata)
    }

    fn post_list_child_accounts(
        &self,
        response: ListChildAccountsResponse,
    ) -> ListChildAccountsResponse {
        self.record("post_list_child_accounts");
        response
    }

    fn pre_update_labels(
        &self,
        request: UpdateAccountLabelsRequest,
        metadata: Metadata,
    ) -> (UpdateAccountLabelsRequest, Metadata) {
        self.record("pre_update_labels");
        (request, metadata)
    }

    fn post_update_labels(&self, response: Account) -> Account {
        self.record("post_update_labels");
        response
    }
}
