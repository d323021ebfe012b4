/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Credentials for authenticated requests
//!
//! [`Auth`] hands out bearer tokens to the HTTP session. Where the tokens come
//! from is up to a [`TokenProvider`]: a fixed token from configuration by
//! default, or any caller-supplied source that can mint fresh ones.

use crate::application::config::Config;
use crate::error::AppError;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Source of OAuth2 access tokens
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Returns a currently valid access token
    async fn access_token(&self) -> Result<String, AppError>;

    /// Whether asking again can yield a different token after a 401
    fn can_refresh(&self) -> bool {
        true
    }
}

/// Provider that always returns the same token
#[derive(Clone)]
pub struct StaticTokenProvider {
    token: String,
}

impl StaticTokenProvider {
    /// Creates a provider for a fixed token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider")
            .field("token", &"<redacted>")
            .finish()
    }
}

#[async_trait]
impl TokenProvider for StaticTokenProvider {
    async fn access_token(&self) -> Result<String, AppError> {
        if self.token.trim().is_empty() {
            return Err(AppError::Unauthenticated);
        }
        Ok(self.token.clone())
    }

    fn can_refresh(&self) -> bool {
        false
    }
}

/// Authentication manager shared by every request of a session
///
/// Caches the last token obtained from the provider until it is invalidated.
pub struct Auth {
    provider: Arc<dyn TokenProvider>,
    cached: RwLock<Option<String>>,
}

impl Auth {
    /// Creates an `Auth` backed by the given provider
    pub fn new(provider: Arc<dyn TokenProvider>) -> Self {
        Self {
            provider,
            cached: RwLock::new(None),
        }
    }

    /// Creates an `Auth` from the configured static token
    ///
    /// # Errors
    /// Returns `AppError::Unauthenticated` when no token is configured.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let token = config
            .credentials
            .access_token
            .clone()
            .filter(|t| !t.trim().is_empty())
            .ok_or(AppError::Unauthenticated)?;
        Ok(Self::new(Arc::new(StaticTokenProvider::new(token))))
    }

    /// Returns the cached token, asking the provider when there is none
    pub async fn token(&self) -> Result<String, AppError> {
        if let Some(token) = self.cached.read().await.as_ref() {
            return Ok(token.clone());
        }

        let mut cached = self.cached.write().await;
        // Another task may have filled it while we waited for the write lock
        if let Some(token) = cached.as_ref() {
            return Ok(token.clone());
        }
        debug!("Requesting access token from provider");
        let token = self.provider.access_token().await?;
        if token.trim().is_empty() {
            return Err(AppError::Unauthenticated);
        }
        *cached = Some(token.clone());
        Ok(token)
    }

    /// Drops the cached token so the next request asks the provider again
    pub async fn invalidate(&self) {
        debug!("Invalidating cached access token");
        *self.cached.write().await = None;
    }

    /// Whether invalidating the cached token can produce a new one
    #[must_use]
    pub fn can_refresh(&self) -> bool {
        self.provider.can_refresh()
    }

    /// Clears all cached credentials
    pub async fn clear(&self) {
        self.invalidate().await;
    }
}

impl std::fmt::Debug for Auth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Auth").field("provider", &"dyn TokenProvider").finish()
    }
}
