//! Light/dark theme pairs.
//!
//! The color mode is picked once, at setup, and the chosen [`Theme`] is
//! what widgets receive. Rendering never queries the OS.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};

use super::theme::Theme;

/// The user's preferred color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    /// Asks the OS for its current mode. Falls back to light when unknown.
    ///
    /// This queries the desktop environment; call it during setup, not per
    /// render pass.
    pub fn detect() -> Self {
        match detect_os_theme() {
            OsThemeMode::Dark => ColorMode::Dark,
            _ => ColorMode::Light,
        }
    }
}

/// A pair of themes, one per color mode.
///
/// # Example
///
/// ```rust
/// use themed_text::{AdaptiveTheme, ColorMode, StyleFragment, Theme, TextWidget};
///
/// let light = Theme::new().add("Text", "body", StyleFragment::new().attr("color", "#222222"));
/// let dark = Theme::new().add("Text", "body", StyleFragment::new().attr("color", "#eeeeee"));
/// let adaptive = AdaptiveTheme::new(light, dark);
///
/// // Pick once, then hand the plain theme to widgets.
/// let widget = TextWidget::new(adaptive.for_mode(ColorMode::Dark));
/// ```
#[derive(Debug, Clone)]
pub struct AdaptiveTheme {
    light: Theme,
    dark: Theme,
}

impl AdaptiveTheme {
    /// Creates an adaptive theme with separate light and dark variants.
    pub fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    /// The variant for an explicit color mode.
    pub fn for_mode(&self, mode: ColorMode) -> &Theme {
        match mode {
            ColorMode::Light => &self.light,
            ColorMode::Dark => &self.dark,
        }
    }

    /// The variant matching the OS color mode, see [`ColorMode::detect`].
    pub fn detect(&self) -> &Theme {
        self.for_mode(ColorMode::detect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleFragment;

    fn pair() -> AdaptiveTheme {
        let light = Theme::new().add("Text", "body", StyleFragment::new().attr("color", "black"));
        let dark = Theme::new().add("Text", "body", StyleFragment::new().attr("color", "white"));
        AdaptiveTheme::new(light, dark)
    }

    fn body_color(theme: &Theme) -> &serde_json::Value {
        theme.fragment("Text", "body").unwrap().get("color").unwrap()
    }

    #[test]
    fn test_for_mode() {
        let adaptive = pair();
        assert_eq!(body_color(adaptive.for_mode(ColorMode::Light)), "black");
        assert_eq!(body_color(adaptive.for_mode(ColorMode::Dark)), "white");
    }

    #[test]
    fn test_detect_returns_one_of_the_variants() {
        let adaptive = pair();
        let chosen = adaptive.detect();
        assert!(
            std::ptr::eq(chosen, adaptive.for_mode(ColorMode::Light))
                || std::ptr::eq(chosen, adaptive.for_mode(ColorMode::Dark))
        );
    }

    #[test]
    fn test_default_mode_is_light() {
        assert_eq!(ColorMode::default(), ColorMode::Light);
    }
}
