//! Loading the configuration document.
//!
//! Load failures are fatal and distinct from validation findings: an
//! unreadable file, invalid JSON, or a non-object root never reaches the
//! section validators.

use crate::ConfigMap;
use serde_json::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that can occur while loading a configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read JSON: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("config must be a top-level JSON object")]
    NotAnObject,
}

impl From<LoadError> for psm_common::Error {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::Io { path, source } => {
                psm_common::Error::ConfigLoad(format!("{}: {}", path.display(), source))
            }
            LoadError::Parse(source) => psm_common::Error::ConfigLoad(source.to_string()),
            LoadError::NotAnObject => psm_common::Error::ConfigShape,
        }
    }
}

/// Read and parse a configuration file.
pub fn load_config(path: &Path) -> Result<ConfigMap, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "Config read");
    parse_config(&content)
}

/// Parse configuration text; the root must be a JSON object.
pub fn parse_config(content: &str) -> Result<ConfigMap, LoadError> {
    match serde_json::from_str::<Value>(content)? {
        Value::Object(map) => Ok(map),
        _ => Err(LoadError::NotAnObject),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_object() {
        let config = parse_config(r#"{"mode": "brand_faithful_modernization", "scope": {}}"#).unwrap();
        let keys: Vec<_> = config.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["mode", "scope"]);
    }

    #[test]
    fn test_non_object_roots_rejected() {
        for text in ["[]", "null", "\"config\"", "3"] {
            assert!(matches!(parse_config(text), Err(LoadError::NotAnObject)), "{text}");
        }
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_config("{\"mode\": ").unwrap_err();
        assert!(matches!(err, LoadError::Parse(_)));
        assert!(err.to_string().starts_with("failed to read JSON: "));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{\"mode\": \"brand_faithful_modernization\"}}").unwrap();
        let config = load_config(file.path()).unwrap();
        assert_eq!(config["mode"], "brand_faithful_modernization");
    }

    #[test]
    fn test_missing_file_maps_to_config_load() {
        let err = load_config(Path::new("/nonexistent/psm/config.json")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        let common: psm_common::Error = err.into();
        assert_eq!(common.code(), 10);
    }

    #[test]
    fn test_not_an_object_maps_to_config_shape() {
        let common: psm_common::Error = LoadError::NotAnObject.into();
        assert!(matches!(common, psm_common::Error::ConfigShape));
    }
}
