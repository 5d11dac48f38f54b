//! `output`: optional format hints. Only ever produces warnings.

use crate::finding::Finding;
use crate::ConfigMap;
use serde_json::Value;

pub fn validate(config: &ConfigMap) -> Vec<Finding> {
    let output = match config.get("output") {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Object(output)) => output,
        Some(_) => return vec![Finding::warning("output", "should be an object if provided")],
    };

    let Some(formats) = output.get("formats").and_then(Value::as_object) else {
        return Vec::new();
    };
    let disabled = |key: &str| formats.get(key) == Some(&Value::Bool(false));
    if disabled("markdown") || disabled("json") {
        return vec![Finding::warning(
            "output.formats",
            "markdown and json are required by this workflow",
        )];
    }

    Vec::new()
}
