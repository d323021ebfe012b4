use crate::error::AppError;
use crate::model::requests::{
    CallOptions, GetAccountRequest, ListChildAccountsRequest, UpdateAccountLabelsRequest,
};
use crate::model::responses::ListChildAccountsResponse;
use crate::presentation::account::Account;
use async_trait::async_trait;

/// Interface for the accounts service
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Gets information about a CSS/MC account
    ///
    /// # Arguments
    /// * `request` - Account name, e.g. `accounts/123`, and optional parent
    async fn get_account(&self, request: GetAccountRequest) -> Result<Account, AppError>;

    /// Same as [`get_account`](Self::get_account) with explicit per-call options
    async fn get_account_with_options(
        &self,
        request: GetAccountRequest,
        options: CallOptions,
    ) -> Result<Account, AppError>;

    /// Lists a single page of child accounts of a CSS group or domain
    async fn list_child_accounts(
        &self,
        request: ListChildAccountsRequest,
    ) -> Result<ListChildAccountsResponse, AppError>;

    /// Same as [`list_child_accounts`](Self::list_child_accounts) with explicit per-call options
    async fn list_child_accounts_with_options(
        &self,
        request: ListChildAccountsRequest,
        options: CallOptions,
    ) -> Result<ListChildAccountsResponse, AppError>;

    /// Lists every child account, following `next_page_token` until exhausted
    ///
    /// The request's own `page_token` is used as the starting page.
    async fn list_all_child_accounts(
        &self,
        request: ListChildAccountsRequest,
    ) -> Result<Vec<Account>, AppError>;

    /// Same as [`list_all_child_accounts`](Self::list_all_child_accounts); every page uses `options`
    async fn list_all_child_accounts_with_options(
        &self,
        request: ListChildAccountsRequest,
        options: CallOptions,
    ) -> Result<Vec<Account>, AppError>;

    /// Replaces the labels assigned to an account and returns the updated account
    async fn update_labels(&self, request: UpdateAccountLabelsRequest)
    -> Result<Account, AppError>;

    /// Same as [`update_labels`](Self::update_labels) with explicit per-call options
    async fn update_labels_with_options(
        &self,
        request: UpdateAccountLabelsRequest,
        options: CallOptions,
    ) -> Result<Account, AppError>;
}
