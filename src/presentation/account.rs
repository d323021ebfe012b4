use crate::presentation::serialization::{int64_vec_as_string, is_default};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Information about a CSS or Merchant Center account
#[derive(DebugPretty, DisplaySimple, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Account {
    /// Resource name, `accounts/{account}`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Full name of the account
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,
    /// Name shown in the CSS Center
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Homepage of the account
    #[serde(skip_serializing_if = "String::is_empty")]
    pub homepage_uri: String,
    /// Parent CSS group or domain, `accounts/{account}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Manually assigned label IDs
    #[serde(with = "int64_vec_as_string", skip_serializing_if = "Vec::is_empty")]
    pub label_ids: Vec<i64>,
    /// Label IDs assigned automatically by CSS Center
    #[serde(with = "int64_vec_as_string", skip_serializing_if = "Vec::is_empty")]
    pub automatic_label_ids: Vec<i64>,
    /// Kind of account
    #[serde(skip_serializing_if = "is_default")]
    pub account_type: AccountType,
}

impl Account {
    /// Numeric account ID taken from the resource name, if it has the expected shape
    #[must_use]
    pub fn account_id(&self) -> Option<&str> {
        self.name
            .strip_prefix("accounts/")
            .filter(|id| !id.is_empty() && !id.contains('/'))
    }
}

/// Kind of account
///
/// Decodes from either the enum number or its name. Numbers this client does
/// not know about are kept as [`AccountType::Unrecognized`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccountType {
    /// Unknown account type
    #[default]
    Unspecified,
    /// CSS group account
    CssGroup,
    /// CSS domain account
    CssDomain,
    /// MC Primary CSS MCA account
    McPrimaryCssMca,
    /// MC CSS MCA account
    McCssMca,
    /// MC Marketplace MCA account
    McMarketplaceMca,
    /// MC Other MCA account
    McOtherMca,
    /// MC Standalone account
    McStandalone,
    /// MC MCA sub-account
    McMcaSubaccount,
    /// A value this client has no name for
    Unrecognized(i32),
}

const ACCOUNT_TYPES: [(AccountType, i32, &str); 9] = [
    (AccountType::Unspecified, 0, "ACCOUNT_TYPE_UNSPECIFIED"),
    (AccountType::CssGroup, 1, "CSS_GROUP"),
    (AccountType::CssDomain, 2, "CSS_DOMAIN"),
    (AccountType::McPrimaryCssMca, 3, "MC_PRIMARY_CSS_MCA"),
    (AccountType::McCssMca, 4, "MC_CSS_MCA"),
    (AccountType::McMarketplaceMca, 5, "MC_MARKETPLACE_MCA"),
    (AccountType::McOtherMca, 6, "MC_OTHER_MCA"),
    (AccountType::McStandalone, 7, "MC_STANDALONE"),
    (AccountType::McMcaSubaccount, 8, "MC_MCA_SUBACCOUNT"),
];

impl AccountType {
    /// Enum number on the wire
    #[must_use]
    pub fn value(self) -> i32 {
        match self {
            AccountType::Unrecognized(n) => n,
            known => ACCOUNT_TYPES
                .iter()
                .find(|(t, _, _)| *t == known)
                .map_or(0, |(_, n, _)| *n),
        }
    }

    /// Enum name, `None` for unrecognized numbers
    #[must_use]
    pub fn as_str_name(self) -> Option<&'static str> {
        ACCOUNT_TYPES
            .iter()
            .find(|(t, _, _)| *t == self)
            .map(|(_, _, name)| *name)
    }

    /// Looks a value up by its number
    #[must_use]
    pub fn from_value(value: i32) -> Self {
        ACCOUNT_TYPES
            .iter()
            .find(|(_, n, _)| *n == value)
            .map_or(AccountType::Unrecognized(value), |(t, _, _)| *t)
    }

    /// Looks a value up by its name
    #[must_use]
    pub fn from_str_name(name: &str) -> Option<Self> {
        ACCOUNT_TYPES
            .iter()
            .find(|(_, _, n)| *n == name)
            .map(|(t, _, _)| *t)
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str_name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.value()),
        }
    }
}

impl Serialize for AccountType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_str_name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_i32(self.value()),
        }
    }
}

impl<'de> Deserialize<'de> for AccountType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AccountTypeVisitor;

        impl Visitor<'_> for AccountTypeVisitor {
            type Value = AccountType;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an account type name or number")
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<AccountType, E> {
                i32::try_from(v)
                    .map(AccountType::from_value)
                    .map_err(|_| E::custom(format!("account type out of range: {v}")))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<AccountType, E> {
                i32::try_from(v)
                    .map(AccountType::from_value)
                    .map_err(|_| E::custom(format!("account type out of range: {v}")))
            }

            // Names this client does not know yet decode as unspecified
            fn visit_str<E: de::Error>(self, v: &str) -> Result<AccountType, E> {
                Ok(AccountType::from_str_name(v)
                    .or_else(|| v.trim().parse::<i32>().ok().map(AccountType::from_value))
                    .unwrap_or(AccountType::Unspecified))
            }

            fn visit_unit<E: de::Error>(self) -> Result<AccountType, E> {
                Ok(AccountType::Unspecified)
            }
        }

        deserializer.deserialize_any(AccountTypeVisitor)
    }
}
