//! Theme loading errors.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned when a theme document cannot be loaded.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The theme file could not be read.
    #[error("failed to read theme file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid YAML theme: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON theme: {0}")]
    Json(#[from] serde_json::Error),
    /// The file extension is not one of `.yaml`, `.yml` or `.json`.
    #[error("unsupported theme file extension: {path}")]
    UnsupportedExtension { path: PathBuf },
    /// A document node has the wrong shape.
    #[error("theme entry '{path}' must be {expected}")]
    Shape { path: String, expected: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_error_display() {
        let err = ThemeError::Shape {
            path: "Text.hero".to_string(),
            expected: "a mapping",
        };
        let msg = err.to_string();
        assert!(msg.contains("Text.hero"));
        assert!(msg.contains("a mapping"));
    }

    #[test]
    fn test_unsupported_extension_display() {
        let err = ThemeError::UnsupportedExtension {
            path: PathBuf::from("theme.toml"),
        };
        assert!(err.to_string().contains("theme.toml"));
    }
}
