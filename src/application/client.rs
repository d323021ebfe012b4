/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::account::AccountService;
use crate::error::AppError;
use crate::model::requests::{
    CallOptions, GetAccountRequest, ListChildAccountsRequest, UpdateAccountLabelsRequest,
};
use crate::model::responses::ListChildAccountsResponse;
use crate::presentation::account::Account;
use crate::transport::interceptor::AccountsServiceInterceptor;
use crate::transport::rest::AccountsServiceRestTransport;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Upper bound on pages fetched by `list_all_child_accounts`
const MAX_PAGES: usize = 10_000;

/// Client for the CSS accounts service
pub struct AccountsServiceClient {
    transport: Arc<AccountsServiceRestTransport>,
    default_options: CallOptions,
}

impl AccountsServiceClient {
    /// Creates a client over a fresh REST transport
    ///
    /// # Errors
    /// Fails when the configuration has no token or an invalid host.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let transport = AccountsServiceRestTransport::new(&config, None)?;
        Ok(Self::from_transport(Arc::new(transport)))
    }

    /// Creates a client whose transport runs the given interceptor
    pub fn with_interceptor(
        config: Config,
        interceptor: Arc<dyn AccountsServiceInterceptor>,
    ) -> Result<Self, AppError> {
        let transport = AccountsServiceRestTransport::new(&config, Some(interceptor))?;
        Ok(Self::from_transport(Arc::new(transport)))
    }

    /// Wraps an existing transport
    pub fn from_transport(transport: Arc<AccountsServiceRestTransport>) -> Self {
        Self {
            transport,
            default_options: CallOptions::default(),
        }
    }

    /// Sets the options used by calls that take none explicitly
    pub fn set_default_options(&mut self, options: CallOptions) {
        self.default_options = options;
    }

    /// Gets the underlying transport
    pub fn transport(&self) -> &Arc<AccountsServiceRestTransport> {
        &self.transport
    }

    /// Closes the transport's session
    pub async fn close(&self) {
        self.transport.close().await;
    }
}

#[async_trait]
impl AccountService for AccountsServiceClient {
    async fn get_account(&self, request: GetAccountRequest) -> Result<Account, AppError> {
        self.get_account_with_options(request, self.default_options.clone())
            .await
    }

    async fn get_account_with_options(
        &self,
        request: GetAccountRequest,
        options: CallOptions,
    ) -> Result<Account, AppError> {
        info!("Getting account: {}", request.name);
        let account = self.transport.get_account(request, options).await?;
        debug!(
            "Account obtained: {} ({})",
            account.name, account.account_type
        );
        Ok(account)
    }

    async fn list_child_accounts(
        &self,
        request: ListChildAccountsRequest,
    ) -> Result<ListChildAccountsResponse, AppError> {
        self.list_child_accounts_with_options(request, self.default_options.clone())
            .await
    }

    async fn list_child_accounts_with_options(
        &self,
        request: ListChildAccountsRequest,
        options: CallOptions,
    ) -> Result<ListChildAccountsResponse, AppError> {
        info!("Listing child accounts of {}", request.parent);
        let result = self.transport.list_child_accounts(request, options).await?;
        debug!("Child accounts obtained: {} accounts", result.accounts.len());
        Ok(result)
    }

    async fn list_all_child_accounts(
        &self,
        request: ListChildAccountsRequest,
    ) -> Result<Vec<Account>, AppError> {
        self.list_all_child_accounts_with_options(request, self.default_options.clone())
            .await
    }

    async fn list_all_child_accounts_with_options(
        &self,
        request: ListChildAccountsRequest,
        options: CallOptions,
    ) -> Result<Vec<Account>, AppError> {
        let mut all_accounts = Vec::new();
        let mut request = request;
        let mut page = 1;

        loop {
            info!("Listing child accounts of {} (page {})", request.parent, page);
            let result = self
                .transport
                .list_child_accounts(request.clone(), options.clone())
                .await?;

            all_accounts.extend(result.accounts);

            if result.next_page_token.is_empty() {
                break;
            }
            if result.next_page_token == request.page_token {
                warn!(
                    "Server returned the same page token twice ({}), stopping",
                    result.next_page_token
                );
                break;
            }
            if page >= MAX_PAGES {
                return Err(AppError::InvalidRequest(format!(
                    "pagination did not finish after {MAX_PAGES} pages"
                )));
            }
            request.page_token = result.next_page_token;
            page += 1;
        }

        debug!(
            "Total child accounts obtained: {} accounts",
            all_accounts.len()
        );
        Ok(all_accounts)
    }

    async fn update_labels(
        &self,
        request: UpdateAccountLabelsRequest,
    ) -> Result<Account, AppError> {
        self.update_labels_with_options(request, self.default_options.clone())
            .await
    }

    async fn update_labels_with_options(
        &self,
        request: UpdateAccountLabelsRequest,
        options: CallOptions,
    ) -> Result<Account, AppError> {
        info!(
            "Updating labels of {} to {:?}",
            request.name, request.label_ids
        );
        let account = self.transport.update_labels(request, options).await?;
        debug!("Labels updated: {:?}", account.label_ids);
        Ok(account)
    }
}
