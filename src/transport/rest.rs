/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! REST transport for the accounts service
//!
//! Every RPC is a zero-sized type implementing [`RestMethod`]: it names its
//! request and response types, its static HTTP rules and which interceptor
//! hooks wrap it. [`AccountsServiceRestTransport::call`] is the single
//! dispatcher shared by all of them.

use crate::application::config::Config;
use crate::error::{ApiError, AppError};
use crate::model::http::{HttpRequest, HttpSession};
use crate::model::requests::{
    CallOptions, GetAccountRequest, ListChildAccountsRequest, UpdateAccountLabelsRequest,
};
use crate::model::responses::ListChildAccountsResponse;
use crate::presentation::account::Account;
use crate::transport::interceptor::{AccountsServiceInterceptor, DefaultInterceptor, Metadata};
use crate::transport::transcoding::{HttpRule, transcode};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, error};

/// One remote method of the accounts service
pub trait RestMethod {
    /// Request message
    type Request: Serialize + Send;
    /// Response message
    type Response: DeserializeOwned + Send;
    /// Fully qualified method name, used in logs
    const NAME: &'static str;

    /// Static HTTP mapping, tried in order
    fn http_rules() -> &'static [HttpRule];

    /// Runs the matching pre-call hook
    fn pre(
        interceptor: &dyn AccountsServiceInterceptor,
        request: Self::Request,
        metadata: Metadata,
    ) -> (Self::Request, Metadata);

    /// Runs the matching post-call hook
    fn post(interceptor: &dyn AccountsServiceInterceptor, response: Self::Response)
    -> Self::Response;
}

static GET_ACCOUNT_RULES: [HttpRule; 1] = [HttpRule {
    method: Method::GET,
    uri: "/v1/{name=accounts/*}",
    body: None,
}];

static LIST_CHILD_ACCOUNTS_RULES: [HttpRule; 1] = [HttpRule {
    method: Method::GET,
    uri: "/v1/{parent=accounts/*}:listChildAccounts",
    body: None,
}];

static UPDATE_LABELS_RULES: [HttpRule; 1] = [HttpRule {
    method: Method::POST,
    uri: "/v1/{name=accounts/*}:updateLabels",
    body: Some("*"),
}];

/// `GetAccount`: `GET /v1/{name=accounts/*}`
#[derive(Debug, Clone, Copy)]
pub struct GetAccount;

impl RestMethod for GetAccount {
    type Request = GetAccountRequest;
    type Response = Account;
    const NAME: &'static str = "AccountsService.GetAccount";

    fn http_rules() -> &'static [HttpRule] {
        &GET_ACCOUNT_RULES
    }

    fn pre(
        interceptor: &dyn AccountsServiceInterceptor,
        request: Self::Request,
        metadata: Metadata,
    ) -> (Self::Request, Metadata) {
        interceptor.pre_get_account(request, metadata)
    }

    fn post(interceptor: &dyn AccountsServiceInterceptor, response: Account) -> Account {
        interceptor.post_get_account(response)
    }
}

/// `ListChildAccounts`: `GET /v1/{parent=accounts/*}:listChildAccounts`
#[derive(Debug, Clone, Copy)]
pub struct ListChildAccounts;

impl RestMethod for ListChildAccounts {
    type Request = ListChildAccountsRequest;
    type Response = ListChildAccountsResponse;
    const NAME: &'static str = "AccountsService.ListChildAccounts";

    fn http_rules() -> &'static [HttpRule] {
        &LIST_CHILD_ACCOUNTS_RULES
    }

    fn pre(
        interceptor: &dyn AccountsServiceInterceptor,
        request: Self::Request,
        metadata: Metadata,
    ) -> (Self::Request, Metadata) {
        interceptor.pre_list_child_accounts(request, metadata)
    }

    fn post(
        interceptor: &dyn AccountsServiceInterceptor,
        response: ListChildAccountsResponse,
    ) -> ListChildAccountsResponse {
        interceptor.post_list_child_accounts(response)
    }
}

/// `UpdateLabels`: `POST /v1/{name=accounts/*}:updateLabels`
#[derive(Debug, Clone, Copy)]
pub struct UpdateLabels;

impl RestMethod for UpdateLabels {
    type Request = UpdateAccountLabelsRequest;
    type Response = Account;
    const NAME: &'static str = "AccountsService.UpdateLabels";

    fn http_rules() -> &'static [HttpRule] {
        &UPDATE_LABELS_RULES
    }

    fn pre(
        interceptor: &dyn AccountsServiceInterceptor,
        request: Self::Request,
        metadata: Metadata,
    ) -> (Self::Request, Metadata) {
        interceptor.pre_update_labels(request, metadata)
    }

    fn post(interceptor: &dyn AccountsServiceInterceptor, response: Account) -> Account {
        interceptor.post_update_labels(response)
    }
}

/// REST backend for the accounts service
///
/// Sends JSON over HTTP/1.1 through one shared [`HttpSession`]. Cheap to share
/// behind an `Arc`; calls are independent of each other.
pub struct AccountsServiceRestTransport {
    session: Arc<HttpSession>,
    base_url: String,
    interceptor: Arc<dyn AccountsServiceInterceptor>,
}

impl AccountsServiceRestTransport {
    /// Creates a transport with its own session
    ///
    /// # Arguments
    /// * `config` - Host, scheme, timeout and credentials
    /// * `interceptor` - Hooks around every call; `None` uses [`DefaultInterceptor`]
    pub fn new(
        config: &Config,
        interceptor: Option<Arc<dyn AccountsServiceInterceptor>>,
    ) -> Result<Self, AppError> {
        let session = Arc::new(HttpSession::new(config)?);
        Self::with_session(config, session, interceptor)
    }

    /// Creates a transport over an existing session
    pub fn with_session(
        config: &Config,
        session: Arc<HttpSession>,
        interceptor: Option<Arc<dyn AccountsServiceInterceptor>>,
    ) -> Result<Self, AppError> {
        let base_url = config.rest_api.base_url()?;
        debug!("Accounts REST transport targeting {}", base_url);
        Ok(Self {
            session,
            base_url,
            interceptor: interceptor.unwrap_or_else(|| Arc::new(DefaultInterceptor)),
        })
    }

    /// Runs one RPC end to end
    ///
    /// Pre hook, transcoding, send, error mapping, decoding, post hook.
    /// Statuses >= 400 become `AppError::Api` and skip the post hook.
    pub async fn call<M: RestMethod>(
        &self,
        request: M::Request,
        options: CallOptions,
    ) -> Result<M::Response, AppError> {
        let CallOptions {
            retry,
            timeout,
            metadata,
        } = options;

        let (request, metadata) = M::pre(self.interceptor.as_ref(), request, metadata);
        let transcoded = transcode(M::http_rules(), &request)?;

        let mut headers: Vec<(String, String)> = metadata
            .into_iter()
            .filter(|(k, _)| !k.eq_ignore_ascii_case("content-type"))
            .collect();
        headers.push(("Content-Type".to_string(), "application/json".to_string()));

        let http_request = HttpRequest {
            method: transcoded.method.clone(),
            url: format!("{}{}", self.base_url, transcoded.uri),
            headers,
            query: transcoded.query_params,
            body: transcoded
                .body
                .as_ref()
                .map(serde_json::to_string)
                .transpose()?,
        };

        debug!("Calling {} ({} {})", M::NAME, http_request.method, transcoded.uri);
        let response = self
            .session
            .send(&http_request, timeout, retry.as_ref())
            .await?;

        if response.status().as_u16() >= 400 {
            let err = ApiError::from_response(&http_request.method, response).await;
            error!("{} failed: {}", M::NAME, err);
            return Err(AppError::Api(err));
        }

        let bytes = response.bytes().await?;
        let decoded: M::Response = if bytes.iter().all(u8::is_ascii_whitespace) {
            serde_json::from_str("{}")?
        } else {
            serde_json::from_slice(&bytes)?
        };

        Ok(M::post(self.interceptor.as_ref(), decoded))
    }

    /// Gets information about a CSS/MC account
    pub async fn get_account(
        &self,
        request: GetAccountRequest,
        options: CallOptions,
    ) -> Result<Account, AppError> {
        self.call::<GetAccount>(request, options).await
    }

    /// Lists one page of child accounts of a CSS group or domain
    pub async fn list_child_accounts(
        &self,
        request: ListChildAccountsRequest,
        options: CallOptions,
    ) -> Result<ListChildAccountsResponse, AppError> {
        self.call::<ListChildAccounts>(request, options).await
    }

    /// Replaces the labels assigned to an account
    pub async fn update_labels(
        &self,
        request: UpdateAccountLabelsRequest,
        options: CallOptions,
    ) -> Result<Account, AppError> {
        self.call::<UpdateLabels>(request, options).await
    }

    /// Transport kind
    #[must_use]
    pub fn kind(&self) -> &'static str {
        "rest"
    }

    /// Base URL every request is sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The shared session
    #[must_use]
    pub fn session(&self) -> &Arc<HttpSession> {
        &self.session
    }

    /// Closes the underlying session
    pub async fn close(&self) {
        self.session.close().await;
    }
}

impl std::fmt::Debug for AccountsServiceRestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountsServiceRestTransport")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish()
    }
}
