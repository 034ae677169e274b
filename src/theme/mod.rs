//! Theme registry, loading and selection.
//!
//! This module provides:
//!
//! - [`Theme`]: style fragments keyed by (component kind, type tag)
//! - [`default_theme`]: the built-in predefined text types
//! - [`AdaptiveTheme`]: light/dark theme pairs, picked once at setup
//! - [`ThemeError`]: errors from loading theme documents
//!
//! Themes are loaded from YAML or JSON documents or built in code with a
//! fluent API; both end up in the same registry.

mod adaptive;
mod error;
mod loader;
mod presets;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{AdaptiveTheme, ColorMode};
pub use error::ThemeError;
pub use presets::default_theme;
pub use theme::Theme;
