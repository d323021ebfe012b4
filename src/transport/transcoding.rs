/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Transcoding of typed requests into HTTP request parts
//!
//! Each RPC carries one or more [`HttpRule`]s. A rule names the verb, a URI
//! template such as `/v1/{name=accounts/*}:updateLabels` and where the body
//! comes from. [`transcode`] binds template variables from the request's JSON
//! form, validates them against their pattern, and splits the leftover fields
//! between the body and the query string.

use crate::constants::ALT_JSON_PARAM;
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;
use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::trace;

/// `{field}` or `{field=pattern}` inside a URI template
static VARIABLE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([A-Za-z_][A-Za-z0-9_.]*)(?:=([^{}]+))?\}").expect("static regex is valid")
});

/// Static HTTP mapping of one RPC
#[derive(Debug, Clone)]
pub struct HttpRule {
    /// HTTP verb
    pub method: Method,
    /// URI template relative to the host
    pub uri: &'static str,
    /// `None` for no body, `"*"` for the whole leftover message, or a field name
    pub body: Option<&'static str>,
}

/// HTTP request parts produced from a typed request
#[derive(Debug, Clone, PartialEq)]
pub struct TranscodedRequest {
    /// HTTP verb
    pub method: Method,
    /// Path with every template variable expanded
    pub uri: String,
    /// Flattened query parameters, `$alt` included
    pub query_params: Vec<(String, String)>,
    /// JSON body, if the rule has one
    pub body: Option<Value>,
}

/// Transcodes `request` using the first rule that matches
///
/// # Errors
/// Returns `AppError::InvalidRequest` when no rule matches, i.e. a path field
/// is missing or does not fit its pattern, and `AppError::Json` when the
/// request cannot be serialized.
pub fn transcode<T: Serialize>(
    rules: &[HttpRule],
    request: &T,
) -> Result<TranscodedRequest, AppError> {
    let message = match serde_json::to_value(request)? {
        Value::Object(map) => Value::Object(map),
        Value::Null => Value::Object(Map::new()),
        other => {
            return Err(AppError::InvalidRequest(format!(
                "request must encode as a JSON object, got {other}"
            )));
        }
    };

    let mut unbound = Vec::new();
    for rule in rules {
        match transcode_rule(rule, &message) {
            Ok(transcoded) => return Ok(transcoded),
            Err(RuleMismatch(fields)) => {
                trace!("Rule {} {} did not match: {:?}", rule.method, rule.uri, fields);
                unbound.extend(fields);
            }
        }
    }

    unbound.sort();
    unbound.dedup();
    Err(AppError::InvalidRequest(format!(
        "some fields of the request are missing or malformed, make sure these are set: {}",
        unbound.join(", ")
    )))
}

struct RuleMismatch(Vec<String>);

fn transcode_rule(rule: &HttpRule, message: &Value) -> Result<TranscodedRequest, RuleMismatch> {
    let mut leftovers = message.clone();
    let mut mismatched = Vec::new();
    let mut uri = String::with_capacity(rule.uri.len());
    let mut last = 0;

    for caps in VARIABLE_RE.captures_iter(rule.uri) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let field = &caps[1];
        let pattern = caps.get(2).map_or("*", |m| m.as_str());
        uri.push_str(&rule.uri[last..whole.start()]);
        last = whole.end();

        let path = json_path(field);
        match lookup(message, &path).and_then(Value::as_str) {
            Some(value) if segment_regex(pattern).is_some_and(|re| re.is_match(value)) => {
                uri.push_str(value);
                remove(&mut leftovers, &path);
            }
            _ => mismatched.push(field.to_string()),
        }
    }
    uri.push_str(&rule.uri[last..]);

    if !mismatched.is_empty() {
        return Err(RuleMismatch(mismatched));
    }

    let (body, query_source) = match rule.body {
        None => (None, leftovers),
        Some("*") => (Some(leftovers), Value::Object(Map::new())),
        Some(field) => {
            let path = json_path(field);
            let body = remove(&mut leftovers, &path).unwrap_or_else(|| Value::Object(Map::new()));
            (Some(body), leftovers)
        }
    };

    let mut query_params =
        flatten_query_params(&query_source).map_err(|e| RuleMismatch(vec![e]))?;
    query_params.push((ALT_JSON_PARAM.0.to_string(), ALT_JSON_PARAM.1.to_string()));

    Ok(TranscodedRequest {
        method: rule.method.clone(),
        uri,
        query_params,
        body,
    })
}

/// Anchored regex for a variable pattern: `*` is one segment, `**` is one or more
fn segment_regex(pattern: &str) -> Option<Regex> {
    let parts: Vec<String> = pattern
        .split('/')
        .map(|segment| match segment {
            "**" => ".+".to_string(),
            "*" => "[^/]+".to_string(),
            literal => regex::escape(literal),
        })
        .collect();
    Regex::new(&format!("^{}$", parts.join("/"))).ok()
}

/// Dotted proto field path to the camelCase JSON key path
fn json_path(field: &str) -> Vec<String> {
    field.split('.').map(to_lower_camel).collect()
}

fn to_lower_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper = false;
    for c in name.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

fn lookup<'a>(value: &'a Value, path: &[String]) -> Option<&'a Value> {
    path.iter().try_fold(value, |v, key| v.get(key))
}

fn remove(value: &mut Value, path: &[String]) -> Option<Value> {
    let (last, parents) = path.split_last()?;
    let mut current = value;
    for key in parents {
        current = current.get_mut(key)?;
    }
    current.as_object_mut()?.remove(last)
}

/// Flattens a JSON message into query parameters
///
/// Nested objects become dotted keys, lists of scalars repeat their key,
/// booleans are lowercase and nulls are dropped.
///
/// # Errors
/// Returns a description of the offending key when a list holds objects or
/// lists, which have no query-string form.
pub fn flatten_query_params(message: &Value) -> Result<Vec<(String, String)>, String> {
    let mut out = Vec::new();
    if let Value::Object(map) = message {
        for (key, value) in map {
            flatten_into(key, value, &mut out)?;
        }
    }
    Ok(out)
}

fn flatten_into(key: &str, value: &Value, out: &mut Vec<(String, String)>) -> Result<(), String> {
    match value {
        Value::Null => {}
        Value::Object(map) => {
            for (child, v) in map {
                flatten_into(&format!("{key}.{child}"), v, out)?;
            }
        }
        Value::Array(items) => {
            for item in items {
                match item {
                    Value::Object(_) | Value::Array(_) => {
                        return Err(format!("{key} (lists of messages cannot be query parameters)"));
                    }
                    Value::Null => {}
                    scalar => out.push((key.to_string(), scalar_to_string(scalar))),
                }
            }
        }
        scalar => out.push((key.to_string(), scalar_to_string(scalar))),
    }
    Ok(())
}

fn scalar_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}
