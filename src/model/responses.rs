/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::presentation::account::Account;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// Response message for the `ListChildAccounts` method
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListChildAccountsResponse {
    /// Child accounts of the requested parent
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<Account>,
    /// Token for the next page; empty when this is the last page
    #[serde(skip_serializing_if = "String::is_empty")]
    pub next_page_token: String,
}

impl ListChildAccountsResponse {
    /// Whether another page can be requested
    #[must_use]
    pub fn has_next_page(&self) -> bool {
        !self.next_page_token.is_empty()
    }
}
