/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error types for the CSS accounts client
//!
//! Any HTTP status >= 400 becomes an [`ApiError`]. Transport faults, codec
//! failures and local validation problems get their own [`AppError`] variants.

use reqwest::{Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// `@type` of the structured error detail carrying reason and domain
const ERROR_INFO_TYPE: &str = "type.googleapis.com/google.rpc.ErrorInfo";

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The API answered with an error status
    #[error("api error: {0}")]
    Api(ApiError),
    /// Transport-level failure from the HTTP client
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    /// JSON encoding or decoding failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// The request could not be transcoded into an HTTP request
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The configuration is unusable
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// No usable access token is available
    #[error("unauthenticated")]
    Unauthenticated,
    /// The session was closed and cannot send requests anymore
    #[error("session closed")]
    SessionClosed,
}

impl From<ApiError> for AppError {
    fn from(e: ApiError) -> Self {
        AppError::Api(e)
    }
}

impl AppError {
    /// Returns the API error when this is one
    #[must_use]
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            AppError::Api(e) => Some(e),
            _ => None,
        }
    }
}

/// Classification of an error status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// 400
    BadRequest,
    /// 401
    Unauthorized,
    /// 403
    Forbidden,
    /// 404
    NotFound,
    /// 405
    MethodNotAllowed,
    /// 409
    Conflict,
    /// 411
    LengthRequired,
    /// 412
    PreconditionFailed,
    /// 416
    RequestRangeNotSatisfiable,
    /// 429
    TooManyRequests,
    /// 500
    InternalServerError,
    /// 501
    MethodNotImplemented,
    /// 502
    BadGateway,
    /// 503
    ServiceUnavailable,
    /// 504
    GatewayTimeout,
    /// Any other 4xx status
    ClientError,
    /// Any other 5xx status, or anything outside the 4xx range
    ServerError,
}

impl ApiErrorKind {
    /// Maps an HTTP status code to its error kind
    #[must_use]
    pub fn from_status(status: StatusCode) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            405 => Self::MethodNotAllowed,
            409 => Self::Conflict,
            411 => Self::LengthRequired,
            412 => Self::PreconditionFailed,
            416 => Self::RequestRangeNotSatisfiable,
            429 => Self::TooManyRequests,
            500 => Self::InternalServerError,
            501 => Self::MethodNotImplemented,
            502 => Self::BadGateway,
            503 => Self::ServiceUnavailable,
            504 => Self::GatewayTimeout,
            400..=499 => Self::ClientError,
            _ => Self::ServerError,
        }
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Error returned by the API for a status >= 400
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status of the response
    pub status: StatusCode,
    /// Classification of the status
    pub kind: ApiErrorKind,
    /// `"{METHOD} {url}: {message}"`
    pub message: String,
    /// Canonical RPC status name, e.g. `NOT_FOUND`
    pub rpc_status: Option<String>,
    /// Raw structured error details
    pub details: Vec<Value>,
    /// Reason from the `ErrorInfo` detail, if any
    pub reason: Option<String>,
    /// Domain from the `ErrorInfo` detail, if any
    pub domain: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    #[serde(default)]
    error: ErrorBody,
}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<Value>,
}

impl ApiError {
    /// Builds an error from the pieces of a failed HTTP exchange
    ///
    /// # Arguments
    /// * `method` - Verb of the request that failed
    /// * `url` - Full URL of the request that failed
    /// * `status` - Status returned by the server
    /// * `body` - Raw response body
    #[must_use]
    pub fn from_parts(method: &Method, url: &str, status: StatusCode, body: &str) -> Self {
        let (error_message, rpc_status, details) =
            match serde_json::from_str::<ErrorEnvelope>(body) {
                Ok(envelope) => (
                    envelope
                        .error
                        .message
                        .unwrap_or_else(|| "unknown error".to_string()),
                    envelope.error.status,
                    envelope.error.details,
                ),
                Err(_) if body.trim().is_empty() => ("unknown error".to_string(), None, Vec::new()),
                Err(_) => (body.to_string(), None, Vec::new()),
            };

        let error_info = details
            .iter()
            .find(|d| d.get("@type").and_then(Value::as_str) == Some(ERROR_INFO_TYPE));
        let reason = error_info
            .and_then(|d| d.get("reason"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let domain = error_info
            .and_then(|d| d.get("domain"))
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            status,
            kind: ApiErrorKind::from_status(status),
            message: format!("{method} {url}: {error_message}"),
            rpc_status,
            details,
            reason,
            domain,
        }
    }

    /// Consumes a failed response and builds the matching error
    pub async fn from_response(method: &Method, response: reqwest::Response) -> Self {
        let status = response.status();
        let url = response.url().to_string();
        let body = response.text().await.unwrap_or_default();
        Self::from_parts(method, &url, status, &body)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.status.as_u16(), self.message)
    }
}

impl std::error::Error for ApiError {}
