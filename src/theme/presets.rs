//! Built-in theme with the predefined text types.

use once_cell::sync::Lazy;

use super::theme::Theme;

const DEFAULT_THEME_SOURCE: &str = include_str!("default.yaml");

static DEFAULT_THEME: Lazy<Theme> = Lazy::new(|| {
    Theme::from_yaml(DEFAULT_THEME_SOURCE).unwrap_or_else(|err| {
        log::error!(target: "themed_text", "built-in theme failed to load: {}", err);
        Theme::new()
    })
});

/// Returns the built-in theme.
///
/// Defines `primary`, `info`, `warning`, `danger`, `success`, `xxlarge`,
/// `xlarge`, `large`, `medium`, `small`, `header` and `subtitle` for the
/// `"Text"` kind. Clone it to extend:
///
/// ```rust
/// use themed_text::{default_theme, StyleFragment};
///
/// let theme = default_theme()
///     .clone()
///     .add("Text", "hero", StyleFragment::new().attr("fontSize", 40));
/// assert!(theme.has_type("Text", "danger"));
/// ```
pub fn default_theme() -> &'static Theme {
    &DEFAULT_THEME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_types() {
        let theme = default_theme();
        for tag in [
            "primary", "info", "warning", "danger", "success", "xxlarge", "xlarge", "large",
            "medium", "small", "header", "subtitle",
        ] {
            assert!(theme.has_type("Text", tag), "missing preset '{}'", tag);
        }
        assert_eq!(theme.kinds(), vec!["Text"]);
    }

    #[test]
    fn test_default_theme_source_parses() {
        assert!(Theme::from_yaml(DEFAULT_THEME_SOURCE).is_ok());
    }
}
