/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # CSS Accounts Client Prelude
//!
//! Re-exports the types needed for most interactions with the accounts API.
//!
//! ## Usage
//!
//! ```rust
//! use css_accounts_client::prelude::*;
//!
//! let config = Config::with_host_and_token("css.googleapis.com", "ya29.token");
//! let request = ListChildAccountsRequest::new("accounts/123").with_page_size(50);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{ApiError, ApiErrorKind, AppError};

// ============================================================================
// AUTHENTICATION
// ============================================================================

pub use crate::application::auth::{Auth, StaticTokenProvider, TokenProvider};

// ============================================================================
// CLIENT AND SERVICE TRAIT
// ============================================================================

pub use crate::application::client::AccountsServiceClient;
pub use crate::application::interfaces::account::AccountService;

// ============================================================================
// TRANSPORT
// ============================================================================

pub use crate::model::http::{HttpRequest, HttpSession};
pub use crate::model::retry::RetryConfig;
pub use crate::transport::interceptor::{AccountsServiceInterceptor, DefaultInterceptor, Metadata};
pub use crate::transport::rest::{
    AccountsServiceRestTransport, GetAccount, ListChildAccounts, RestMethod, UpdateLabels,
};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{
    CallOptions, GetAccountRequest, ListChildAccountsRequest, UpdateAccountLabelsRequest,
};
pub use crate::model::responses::ListChildAccountsResponse;
pub use crate::presentation::account::{Account, AccountType};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
