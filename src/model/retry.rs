/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::DEFAULT_RETRY_DELAY_SECS;
use crate::utils::config::get_env_or_none;
use reqwest::StatusCode;

/// Retry policy handed to the HTTP session for a single call
///
/// Only transient statuses (429, 502, 503, 504) are retried. The call
/// dispatcher never interprets this value; it is forwarded as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries after the first attempt (None = no retries)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between attempts (None = default of 1 second)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Creates a retry configuration from `MAX_RETRY_COUNT` and `RETRY_DELAY_SECS`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the retry count and delay from the named environment variables
    ///
    /// Missing, blank or unparsable values leave the field unset.
    #[must_use]
    pub fn from_env_vars(max_retry_var: &str, delay_var: &str) -> Self {
        Self {
            max_retry_count: get_env_or_none(max_retry_var),
            retry_delay_secs: get_env_or_none(delay_var),
        }
    }

    /// A policy that never retries
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Retries up to `max_retries` times with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Retries up to `max_retries` times, waiting `delay_secs` between attempts
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Gets the maximum retry count (0 = single attempt)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(0)
    }

    /// Gets the retry delay in seconds
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }

    /// Whether a response with this status should be attempted again
    #[must_use]
    pub fn is_retryable(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::TOO_MANY_REQUESTS
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
        )
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::from_env_vars("MAX_RETRY_COUNT", "RETRY_DELAY_SECS")
    }
}
