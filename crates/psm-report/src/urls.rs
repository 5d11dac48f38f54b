//! Candidate URL input normalization.

use crate::error::{ReportError, Result};
use psm_config::checks::is_truthy;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

/// Normalize a URL document into a flat list.
///
/// Accepted shapes, checked in order:
/// - absent or `null`: no URLs
/// - an array: every entry
/// - an object with a `urls` array: every entry
/// - an object with a `pages` array: the `url` of each object entry that
///   has a non-empty one
///
/// Entries that are not strings are kept in their JSON text form.
pub fn normalize_urls(data: Option<&Value>) -> Result<Vec<String>> {
    let entries = match data {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(Value::Object(obj)) => {
            if let Some(Value::Array(urls)) = obj.get("urls") {
                urls
            } else if let Some(Value::Array(pages)) = obj.get("pages") {
                return Ok(pages
                    .iter()
                    .filter_map(Value::as_object)
                    .filter_map(|page| page.get("url"))
                    .filter(|url| is_truthy(url))
                    .map(stringify)
                    .collect());
            } else {
                return Err(ReportError::UrlFormat);
            }
        }
        Some(_) => return Err(ReportError::UrlFormat),
    };
    Ok(entries.iter().map(stringify).collect())
}

/// Read a URL document from disk and normalize it.
pub fn load_urls(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| ReportError::UrlRead {
        path: path.to_path_buf(),
        source,
    })?;
    let data: Value = serde_json::from_str(&content)?;
    let urls = normalize_urls(Some(&data))?;
    debug!(path = %path.display(), count = urls.len(), "URL list loaded");
    Ok(urls)
}

/// Strings verbatim, every other value as JSON text.
pub(crate) fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
