/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # CSS Accounts Client
//!
//! REST client for the Comparison Shopping Service (CSS) `AccountsService` API.
//!
//! Every call goes through the same pipeline: the pre-call interceptor hook runs,
//! the typed request is transcoded into an HTTP verb, URL, query parameters and an
//! optional JSON body, the request is sent through a shared bearer-token session,
//! error statuses become [`error::ApiError`] values, and successful bodies are
//! decoded into typed responses before the post-call hook sees them.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use css_accounts_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let client = AccountsServiceClient::new(Config::new())?;
//! let account = client
//!     .get_account(GetAccountRequest::new("accounts/123"))
//!     .await?;
//! println!("{}", account.full_name);
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, credentials and the high-level client
pub mod application;
/// Library-wide constants
pub mod constants;
/// Error types
pub mod error;
/// Request, response and session models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Resource models returned by the API
pub mod presentation;
/// REST transport: transcoding, interceptors and the call dispatcher
pub mod transport;
/// Utility helpers
pub mod utils;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version string
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
