/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::error::AppError;
use crate::model::retry::RetryConfig;
use reqwest::{Client, Method, Response, StatusCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tracing::{debug, warn};

/// Number of times a 401 triggers a token refresh before the response is returned
const MAX_REFRESH_ATTEMPTS: u32 = 2;

/// A fully transcoded HTTP request, ready to be sent
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP verb
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    /// Header name/value pairs, in order
    pub headers: Vec<(String, String)>,
    /// Query parameters; repeated keys are allowed
    pub query: Vec<(String, String)>,
    /// JSON body, already serialized
    pub body: Option<String>,
}

/// Authenticated HTTP session shared by every call of a transport
///
/// Wraps a single `reqwest::Client`, which pools connections and is safe to
/// share between tasks. Adds the bearer token and client headers to every
/// request and executes the retry policy handed to it.
pub struct HttpSession {
    http_client: Client,
    auth: Arc<Auth>,
    quota_project_id: Option<String>,
    api_client_header: String,
    closed: AtomicBool,
}

impl HttpSession {
    /// Creates a session using the configured static token
    ///
    /// # Errors
    /// * `AppError::Unauthenticated` - if no token is configured
    /// * `AppError::Http` - if the HTTP client cannot be built
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let auth = Arc::new(Auth::from_config(config)?);
        Self::with_auth(config, auth)
    }

    /// Creates a session with a caller-supplied `Auth`
    pub fn with_auth(config: &Config, auth: Arc<Auth>) -> Result<Self, AppError> {
        let mut builder = Client::builder()
            .user_agent(config.rest_api.user_agent())
            .timeout(config.rest_api.timeout());
        if let Some(identity) = config.rest_api.identity()? {
            debug!("Using mutual TLS client identity");
            builder = builder.identity(identity);
        }

        Ok(Self {
            http_client: builder.build()?,
            auth,
            quota_project_id: config.credentials.quota_project_id.clone(),
            api_client_header: config.rest_api.api_client_header(),
            closed: AtomicBool::new(false),
        })
    }

    /// Sends a request, executing the optional retry policy
    ///
    /// Error statuses are returned as a normal `Response`; turning them into
    /// errors is the caller's job. Only transport failures become `Err`.
    ///
    /// # Arguments
    /// * `request` - The request to send
    /// * `timeout` - Per-call timeout overriding the session default
    /// * `retry` - Retry policy for transient statuses; `None` means one attempt
    pub async fn send(
        &self,
        request: &HttpRequest,
        timeout: Option<Duration>,
        retry: Option<&RetryConfig>,
    ) -> Result<Response, AppError> {
        let max_retries = retry.map_or(0, RetryConfig::max_retries);
        let delay = Duration::from_secs(retry.map_or(0, RetryConfig::delay_secs));
        let mut retry_count = 0;
        let mut refresh_count = 0;

        loop {
            let response = self.send_once(request, timeout).await?;
            let status = response.status();

            if status == StatusCode::UNAUTHORIZED
                && self.auth.can_refresh()
                && refresh_count < MAX_REFRESH_ATTEMPTS
            {
                refresh_count += 1;
                warn!(
                    "Unauthorized response, refreshing credentials (attempt {})",
                    refresh_count
                );
                self.auth.invalidate().await;
                continue;
            }

            if RetryConfig::is_retryable(status) && retry_count < max_retries {
                retry_count += 1;
                warn!(
                    "Transient status {} (retry {}/{}). Waiting {:?} before retry...",
                    status, retry_count, max_retries, delay
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            return Ok(response);
        }
    }

    async fn send_once(
        &self,
        request: &HttpRequest,
        timeout: Option<Duration>,
    ) -> Result<Response, AppError> {
        if self.is_closed() {
            return Err(AppError::SessionClosed);
        }
        let token = self.auth.token().await?;

        debug!("{} {}", request.method, request.url);

        let mut builder = self
            .http_client
            .request(request.method.clone(), &request.url)
            .bearer_auth(token)
            .header("x-goog-api-client", self.api_client_header.as_str());

        if let Some(project) = &self.quota_project_id {
            builder = builder.header("x-goog-user-project", project.as_str());
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let response = builder.send().await?;
        debug!("Response status: {}", response.status());
        Ok(response)
    }

    /// Closes the session; later sends fail with `AppError::SessionClosed`
    pub async fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!("Closing HTTP session");
            self.auth.clear().await;
        }
    }

    /// Whether `close` has been called
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Gets the `Auth` used by this session
    pub fn auth(&self) -> &Auth {
        &self.auth
    }
}

impl std::fmt::Debug for HttpSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpSession")
            .field("quota_project_id", &self.quota_project_id)
            .field("closed", &self.is_closed())
            .finish()
    }
}
