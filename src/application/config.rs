use crate::constants::{
    API_CLIENT_HEADER, DEFAULT_HOST, DEFAULT_SCOPE, DEFAULT_TIMEOUT_SECS, DEFAULT_URL_SCHEME,
    USER_AGENT,
};
use crate::error::AppError;
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::Identity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Credentials attached to every request
pub struct Credentials {
    /// OAuth2 access token sent as `Authorization: Bearer <token>`
    #[serde(skip_serializing)]
    pub access_token: Option<String>,
    /// Project billed for quota, sent as `x-goog-user-project`
    pub quota_project_id: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST endpoint
pub struct RestApiConfig {
    /// Host to connect to, with or without a scheme
    pub host: String,
    /// Scheme prepended to `host` when it carries none. Normally `https`,
    /// `http` is useful for local servers and tests.
    pub url_scheme: String,
    /// Default timeout in seconds for requests without a per-call timeout
    pub timeout: u64,
    /// PEM client certificate chain for mutual TLS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_cert_path: Option<String>,
    /// PEM PKCS#8 private key matching `client_cert_path`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key_path: Option<String>,
    /// Product token prepended to the crate's user agent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Extra entry appended to the `x-goog-api-client` header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_info: Option<String>,
}

impl Default for RestApiConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            url_scheme: DEFAULT_URL_SCHEME.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            client_cert_path: None,
            client_key_path: None,
            user_agent: None,
            client_info: None,
        }
    }
}

impl RestApiConfig {
    /// Base URL built from host and scheme, without a trailing slash
    ///
    /// # Errors
    /// Returns `AppError::InvalidConfig` when the host is empty or the scheme
    /// is neither `http` nor `https`.
    pub fn base_url(&self) -> Result<String, AppError> {
        let host = self.host.trim().trim_end_matches('/');
        if host.is_empty() {
            return Err(AppError::InvalidConfig("host must not be empty".to_string()));
        }
        if host.starts_with("http://") || host.starts_with("https://") {
            return Ok(host.to_string());
        }
        match self.url_scheme.as_str() {
            "http" | "https" => Ok(format!("{}://{}", self.url_scheme, host)),
            other => Err(AppError::InvalidConfig(format!(
                "unsupported url scheme: {other}"
            ))),
        }
    }

    /// Default request timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    /// `User-Agent` sent with every request
    #[must_use]
    pub fn user_agent(&self) -> String {
        match self.user_agent.as_deref().map(str::trim) {
            Some(custom) if !custom.is_empty() => format!("{custom} {USER_AGENT}"),
            _ => USER_AGENT.to_string(),
        }
    }

    /// `x-goog-api-client` value sent with every request
    #[must_use]
    pub fn api_client_header(&self) -> String {
        match self.client_info.as_deref().map(str::trim) {
            Some(info) if !info.is_empty() => format!("{API_CLIENT_HEADER} {info}"),
            _ => API_CLIENT_HEADER.to_string(),
        }
    }

    /// Client identity for mutual TLS, if a certificate is configured
    ///
    /// # Errors
    /// * `AppError::InvalidConfig` - if only one of certificate and key is set
    /// * `AppError::Io` - if either file cannot be read
    /// * `AppError::Http` - if the PEM data is not a valid identity
    pub fn identity(&self) -> Result<Option<Identity>, AppError> {
        match (&self.client_cert_path, &self.client_key_path) {
            (None, None) => Ok(None),
            (Some(cert_path), Some(key_path)) => {
                debug!("Loading mTLS client certificate from {}", cert_path);
                let cert = fs::read(cert_path)?;
                let key = fs::read(key_path)?;
                Ok(Some(Identity::from_pkcs8_pem(&cert, &key)?))
            }
            _ => Err(AppError::InvalidConfig(
                "client_cert_path and client_key_path must be set together".to_string(),
            )),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Main configuration for the CSS accounts client
pub struct Config {
    /// Credentials
    pub credentials: Credentials,
    /// REST endpoint configuration
    pub rest_api: RestApiConfig,
}

impl Config {
    /// Loads the configuration from the environment and an optional `.env` file
    ///
    /// Reads `CSS_ACCESS_TOKEN`, `CSS_QUOTA_PROJECT_ID`, `CSS_HOST`,
    /// `CSS_URL_SCHEME` and `CSS_REST_TIMEOUT`, plus the optional
    /// `CSS_CLIENT_CERT` / `CSS_CLIENT_KEY` pair and the `CSS_USER_AGENT` and
    /// `CSS_CLIENT_INFO` identification overrides.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let access_token: Option<String> = get_env_or_none("CSS_ACCESS_TOKEN");
        if access_token.is_none() {
            warn!(
                "CSS_ACCESS_TOKEN not found in environment variables or .env file; \
                 a token with scope {} is required",
                DEFAULT_SCOPE
            );
        }

        Config {
            credentials: Credentials {
                access_token,
                quota_project_id: get_env_or_none("CSS_QUOTA_PROJECT_ID"),
            },
            rest_api: RestApiConfig {
                host: get_env_or_default("CSS_HOST", DEFAULT_HOST.to_string()),
                url_scheme: get_env_or_default("CSS_URL_SCHEME", DEFAULT_URL_SCHEME.to_string()),
                timeout: get_env_or_default("CSS_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
                client_cert_path: get_env_or_none("CSS_CLIENT_CERT"),
                client_key_path: get_env_or_none("CSS_CLIENT_KEY"),
                user_agent: get_env_or_none("CSS_USER_AGENT"),
                client_info: get_env_or_none("CSS_CLIENT_INFO"),
            },
        }
    }

    /// Builds a configuration for a given host and token, ignoring the environment
    pub fn with_host_and_token(host: impl Into<String>, access_token: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                access_token: Some(access_token.into()),
                quota_project_id: None,
            },
            rest_api: RestApiConfig {
                host: host.into(),
                ..RestApiConfig::default()
            },
        }
    }
}
