//! Theme documents in YAML or JSON.
//!
//! A document maps component kinds to type tags to fragments:
//!
//! ```yaml
//! Text:
//!   hero:
//!     fontSize: 40
//!   italic:
//!     text:
//!       fontStyle: italic
//! ```
//!
//! Both formats are parsed into a `serde_json::Value` first, so the same
//! shape checks apply to either.

use std::path::Path;

use serde_json::Value;

use super::error::ThemeError;
use super::theme::Theme;
use crate::style::StyleFragment;

impl Theme {
    /// Parses a YAML theme document.
    ///
    /// # Example
    ///
    /// ```rust
    /// use themed_text::Theme;
    ///
    /// let theme = Theme::from_yaml("Text:\n  hero:\n    fontSize: 40\n").unwrap();
    /// assert!(theme.has_type("Text", "hero"));
    /// ```
    pub fn from_yaml(source: &str) -> Result<Self, ThemeError> {
        let document: Value = serde_yaml::from_str(source)?;
        from_document(document)
    }

    /// Parses a JSON theme document.
    pub fn from_json(source: &str) -> Result<Self, ThemeError> {
        let document: Value = serde_json::from_str(source)?;
        from_document(document)
    }

    /// Loads a theme file, picking the format from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, ThemeError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(ThemeError::UnsupportedExtension {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| ThemeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source)
    }
}

fn from_document(document: Value) -> Result<Theme, ThemeError> {
    let mut theme = Theme::new();

    // An empty YAML document parses as null.
    let kinds = match document {
        Value::Null => return Ok(theme),
        Value::Object(kinds) => kinds,
        _ => {
            return Err(ThemeError::Shape {
                path: "<root>".to_string(),
                expected: "a mapping of component kinds",
            })
        }
    };

    for (kind, types) in kinds {
        let Value::Object(types) = types else {
            return Err(ThemeError::Shape {
                path: kind,
                expected: "a mapping of type tags",
            });
        };
        for (tag, fragment) in types {
            let Value::Object(entries) = fragment else {
                return Err(ThemeError::Shape {
                    path: format!("{}.{}", kind, tag),
                    expected: "a mapping of style properties",
                });
            };
            theme.register_type(&kind, &tag, StyleFragment::from_map(entries));
        }
    }

    Ok(theme)
}
