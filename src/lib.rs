//! # Themed Text - type-tag styling for text widgets
//!
//! `themed-text` is the core of a themeable text widget for declarative UI
//! frameworks. It does two things:
//!
//! - **Style resolution**: a whitespace-separated type-tag string such as
//!   `"danger large"` selects style fragments from a [`Theme`], which are
//!   layered per render slot together with semantic shortcuts (`color`,
//!   `fontSize`, ...) routed through a compile-time [`AttributeMapping`].
//! - **Letter-spacing simulation**: on platforms whose text primitive
//!   ignores `letterSpacing`, words are re-spelled with invisible joiner
//!   characters so the spacing still shows.
//!
//! Drawing and layout stay with the host framework, which receives a
//! [`TextView`]. A plain-terminal preview helper ([`render_view`]) is included
//! for snapshots and CLIs.
//!
//! ## Quick Start
//!
//! ```rust
//! use themed_text::{default_theme, Platform, StyleFragment, TextProps, TextWidget};
//! use serde_json::json;
//!
//! let theme = default_theme()
//!     .clone()
//!     .add("Text", "hero", StyleFragment::new().attr("fontSize", 40));
//!
//! let view = TextWidget::new(&theme)
//!     .platform(Platform::Android)
//!     .render(
//!         TextProps::<()>::new("Hi there")
//!             .type_tag("danger hero")
//!             .style(json!({ "letterSpacing": 1 })),
//!     );
//!
//! // One fragment per word on the simulated path
//! assert_eq!(view.fragments.len(), 2);
//! assert_eq!(view.text_style["fontSize"], 40);
//! ```
//!
//! ## Type Tags
//!
//! Tags are applied left to right, later tags winning per property; the
//! caller's shortcuts and then the caller's style override come last.
//! Unknown tags are skipped (and reported to the injected
//! [`DiagnosticSink`], if any).
//!
//! ## Themes
//!
//! Themes are built in code with [`Theme::add`] / [`Theme::register_type`]
//! or loaded from YAML/JSON with [`Theme::from_file`]. [`AdaptiveTheme`]
//! pairs a light and a dark theme; pick one at setup and pass it to the widget.

pub mod diagnostics;
pub mod render;
pub mod style;
pub mod term;
pub mod theme;
mod util;
pub mod widget;

pub use diagnostics::{Diagnostic, DiagnosticSink, LogSink, NoopSink};
pub use render::{
    space_count, Child, Children, Fragment, LetterSpacingRenderer, Platform, RenderStrategy,
    SpacingPlan, INVISIBLE_JOINER, LETTER_SPACING_KEY, MAX_FRAGMENT_CHARS, SCALE_CONSTANT,
    WORD_SEPARATOR,
};
pub use style::{
    resolve, AttributeMapping, ComponentConfig, ResolvedStyle, Resolver, SlotMapping,
    StyleFragment, StyleMap,
};
pub use term::{render_view, terminal_style, OutputMode};
pub use theme::{default_theme, AdaptiveTheme, ColorMode, Theme, ThemeError};
pub use util::{display_width, parse_hex_color, rgb_to_ansi256};
pub use widget::{container_style, TextProps, TextView, TextWidget, TEXT_COMPONENT, TEXT_SLOT};
