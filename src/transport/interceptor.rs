use crate::model::requests::{
    GetAccountRequest, ListChildAccountsRequest, UpdateAccountLabelsRequest,
};
use crate::model::responses::ListChildAccountsResponse;
use crate::presentation::account::Account;

/// Request metadata: header key/value pairs sent with a call
pub type Metadata = Vec<(String, String)>;

/// Hooks run around every call of the accounts REST transport
///
/// Interceptors can rewrite requests, metadata and responses, e.g. to log
/// traffic, check requests against local rules or strip fields from
/// responses. Every method defaults to passing its input through unchanged,
/// so implementors only override the hooks they care about.
///
/// Each `pre_*` hook runs exactly once before the request is transcoded.
/// Each `post_*` hook runs exactly once after a successful response has been
/// decoded and is skipped when the call fails.
///
/// ```rust
/// use css_accounts_client::prelude::*;
///
/// struct Tagging;
///
/// impl AccountsServiceInterceptor for Tagging {
///     fn pre_get_account(
///         &self,
///         request: GetAccountRequest,
///         mut metadata: Metadata,
///     ) -> (GetAccountRequest, Metadata) {
///         metadata.push(("x-request-source".to_string(), "batch".to_string()));
///         (request, metadata)
///     }
/// }
/// ```
pub trait AccountsServiceInterceptor: Send + Sync {
    /// Before `GetAccount` is sent
    fn pre_get_account(
        &self,
        request: GetAccountRequest,
        metadata: Metadata,
    ) -> (GetAccountRequest, Metadata) {
        (request, metadata)
    }

    /// After `GetAccount` returns
    fn post_get_account(&self, response: Account) -> Account {
        response
    }

    /// Before `ListChildAccounts` is sent
    fn pre_list_child_accounts(
        &self,
        request: ListChildAccountsRequest,
        metadata: Metadata,
    ) -> (ListChildAccountsRequest, Metadata) {
        (request, metadata)
    }

    /// After `ListChildAccounts` returns
    fn post_list_child_accounts(
        &self,
        response: ListChildAccountsResponse,
    ) -> ListChildAccountsResponse {
        response
    }

    /// Before `UpdateLabels` is sent
    fn pre_update_labels(
        &self,
        request: UpdateAccountLabelsRequest,
        metadata: Metadata,
    ) -> (UpdateAccountLabelsRequest, Metadata) {
        (request, metadata)
    }

    /// After `UpdateLabels` returns
    fn post_update_labels(&self, response: Account) -> Account {
        response
    }
}

/// Interceptor that leaves everything untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultInterceptor;

impl AccountsServiceInterceptor for DefaultInterceptor {}
