/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::model::retry::RetryConfig;
use crate::presentation::serialization::{int64_vec_as_string, is_default, opt_int64_as_string};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Request message for the `GetAccount` method
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GetAccountRequest {
    /// Name of the managed CSS/MC account, `accounts/{account}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Parent account, `accounts/{account}`; only needed for MC sub-accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl GetAccountRequest {
    /// Create a request for the given account name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the parent account
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Request message for the `ListChildAccounts` method
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListChildAccountsRequest {
    /// Parent account, `accounts/{account}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub parent: String,
    /// Only return accounts carrying this label ID
    #[serde(with = "opt_int64_as_string", skip_serializing_if = "Option::is_none")]
    pub label_id: Option<i64>,
    /// Only return accounts whose full name contains this string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Maximum number of accounts per page (server default 50, max 100)
    #[serde(skip_serializing_if = "is_default")]
    pub page_size: i32,
    /// Token of the page to retrieve, from a previous response
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_token: String,
}

impl ListChildAccountsRequest {
    /// Create a request listing the children of `parent`
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            ..Default::default()
        }
    }

    /// Filter by label ID
    pub fn with_label_id(mut self, label_id: i64) -> Self {
        self.label_id = Some(label_id);
        self
    }

    /// Filter by full name
    pub fn with_full_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }

    /// Set the page size
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the page token
    pub fn with_page_token(mut self, page_token: impl Into<String>) -> Self {
        self.page_token = page_token.into();
        self
    }
}

/// Request message for the `UpdateLabels` method
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateAccountLabelsRequest {
    /// Account whose labels are updated, `accounts/{account}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Complete set of label IDs to assign; replaces the current ones
    #[serde(with = "int64_vec_as_string", skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<i64>,
    /// Parent account; only needed for MC sub-accounts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl UpdateAccountLabelsRequest {
    /// Create a request replacing the labels of `name`
    pub fn new(name: impl Into<String>, label_ids: impl IntoIterator<Item = i64>) -> Self {
        Self {
            name: name.into(),
            label_ids: label_ids.into_iter().collect(),
            parent: None,
        }
    }

    /// Set the parent account
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }
}

/// Per-call options
///
/// `metadata` pairs are sent as request headers. `retry` is forwarded to the
/// HTTP session untouched and `timeout` overrides the session default.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    /// Retry policy forwarded to the session
    pub retry: Option<RetryConfig>,
    /// Timeout for this call
    pub timeout: Option<Duration>,
    /// Extra header key/value pairs
    pub metadata: Vec<(String, String)>,
}

impl CallOptions {
    /// Options with no retry, no timeout override and no metadata
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the retry policy
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = Some(retry);
        self
    }

    /// Set the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Add a metadata pair
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }
}
