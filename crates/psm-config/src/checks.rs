//! Primitive field checkers.
//!
//! Each checker inspects one key of a section object and returns at most one
//! finding. Checkers are total: absent keys, `null`, and wrong-typed values
//! all produce a finding instead of a panic. Types are checked strictly, so
//! `0`/`1` never pass as booleans and `true`/`false` never pass as numbers.

use crate::finding::Finding;
use crate::ConfigMap;
use serde_json::Value;

/// Numeric constraint for [`expect_number`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberRule {
    pub minimum: Option<f64>,
    pub integer: bool,
}

impl NumberRule {
    /// Accept JSON integers only.
    pub const fn integer() -> Self {
        Self {
            minimum: None,
            integer: true,
        }
    }

    /// Accept integers and floats.
    pub const fn float() -> Self {
        Self {
            minimum: None,
            integer: false,
        }
    }

    pub const fn min(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

/// A string starting with `http://` or `https://`. No further parsing.
pub fn is_http_url(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if s.starts_with("http://") || s.starts_with("https://"))
}

/// Whether a present value counts as "set": non-empty strings and
/// collections, non-zero numbers, `true`.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Numeric value of a JSON number, rejecting booleans and strings.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

fn field_path(section: &str, key: &str) -> String {
    format!("{section}.{key}")
}

/// `key` must be present and a JSON boolean.
pub fn expect_bool(obj: &ConfigMap, key: &str, section: &str) -> Option<Finding> {
    match obj.get(key) {
        None => Some(Finding::error(
            field_path(section, key),
            "missing required boolean",
        )),
        Some(Value::Bool(_)) => None,
        Some(_) => Some(Finding::error(field_path(section, key), "must be boolean")),
    }
}

/// `key`, when present, must be a JSON boolean.
pub fn expect_optional_bool(
    obj: &ConfigMap,
    key: &str,
    section: &str,
    message: &str,
) -> Option<Finding> {
    match obj.get(key) {
        None | Some(Value::Bool(_)) => None,
        Some(_) => Some(Finding::error(field_path(section, key), message)),
    }
}

/// `key` must be present, numeric per `rule`, and not below its minimum.
pub fn expect_number(obj: &ConfigMap, key: &str, section: &str, rule: NumberRule) -> Option<Finding> {
    let Some(value) = obj.get(key) else {
        return Some(Finding::error(
            field_path(section, key),
            "missing required number",
        ));
    };

    let number = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.as_f64(),
        Value::Number(n) if !rule.integer => n.as_f64(),
        _ => None,
    };
    let Some(number) = number else {
        return Some(Finding::error(field_path(section, key), "must be a number"));
    };

    match rule.minimum {
        Some(minimum) if number < minimum => Some(Finding::error(
            field_path(section, key),
            format!("must be >= {minimum}"),
        )),
        _ => None,
    }
}

/// `key` must be a string from `allowed`.
pub fn expect_one_of(
    obj: &ConfigMap,
    key: &str,
    section: &str,
    allowed: &[&str],
) -> Option<Finding> {
    match obj.get(key).and_then(Value::as_str) {
        Some(s) if allowed.contains(&s) => None,
        _ => Some(Finding::error(
            field_path(section, key),
            format!("must be one of {allowed:?}"),
        )),
    }
}
