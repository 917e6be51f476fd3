//! Error types for the alertcfg-model crate.

use thiserror::Error;

/// Errors raised while encoding or decoding a configuration document.
#[derive(Debug, Error)]
pub enum ModelError {
    /// YAML encoding or decoding failed.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON encoding or decoding failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn error_display_yaml() {
        let source = serde_yaml::from_str::<u32>("not a number").unwrap_err();
        let message = source.to_string();
        let err = ModelError::from(source);
        assert_eq!(err.to_string(), format!("yaml error: {message}"));
    }

    #[test]
    fn error_keeps_source() {
        let err: ModelError = serde_json::from_str::<u32>("{").unwrap_err().into();
        let source = err.source().unwrap();
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn error_from_serde_json() {
        let json_err = serde_json::from_str::<String>("invalid json");
        assert!(json_err.is_err());
        let err: ModelError = json_err.unwrap_err().into();
        assert!(matches!(err, ModelError::Json(_)));
    }

    #[test]
    fn error_from_serde_yaml() {
        let yaml_err = serde_yaml::from_str::<u32>("[not, a, number]");
        assert!(yaml_err.is_err());
        let err: ModelError = yaml_err.unwrap_err().into();
        assert!(matches!(err, ModelError::Yaml(_)));
    }
}
