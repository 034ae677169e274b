//! The themeable text widget.
//!
//! [`TextWidget`] resolves the `"text"` slot for the requested type tags,
//! runs the children through the [`LetterSpacingRenderer`], and wraps the
//! fragments in a left-aligned wrapping row container. Drawing and layout
//! belong to the host framework, which receives a [`TextView`].

use serde_json::json;

use crate::diagnostics::{DiagnosticSink, NoopSink};
use crate::render::{Children, Fragment, LetterSpacingRenderer, Platform, RenderStrategy};
use crate::style::{AttributeMapping, ComponentConfig, Resolver, SlotMapping, StyleMap};
use crate::theme::Theme;

/// Slot receiving the text primitive's style.
pub const TEXT_SLOT: &str = "text";

/// Component configuration of the text widget.
pub const TEXT_COMPONENT: ComponentConfig = ComponentConfig::new(
    "Text",
    AttributeMapping::new(&[SlotMapping {
        slot: TEXT_SLOT,
        attributes: &[
            ("color", "color"),
            ("backgroundColor", "backgroundColor"),
            ("fontSize", "fontSize"),
            ("fontFamily", "fontFamily"),
            ("letterSpacing", "letterSpacing"),
        ],
    }]),
);

/// Properties of one text widget instance.
///
/// # Example
///
/// ```rust
/// use themed_text::TextProps;
/// use serde_json::json;
///
/// let props: TextProps<()> = TextProps::new("Danger and Large")
///     .type_tag("danger large")
///     .style(json!({ "letterSpacing": 2 }))
///     .prop("numberOfLines", 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TextProps<N> {
    /// Whitespace-separated type tags; empty means slot defaults only.
    pub type_tag: String,
    /// Caller override, merged last.
    pub style: StyleMap,
    /// Semantic attributes outside the type system, e.g. `color`.
    pub shortcuts: StyleMap,
    pub children: Children<N>,
    /// Everything else, handed to the text primitive untouched.
    pub passthrough: StyleMap,
}

impl<N> TextProps<N> {
    pub fn new(children: impl Into<Children<N>>) -> Self {
        Self {
            type_tag: String::new(),
            style: StyleMap::new(),
            shortcuts: StyleMap::new(),
            children: children.into(),
            passthrough: StyleMap::new(),
        }
    }

    pub fn type_tag(mut self, type_tag: impl Into<String>) -> Self {
        self.type_tag = type_tag.into();
        self
    }

    /// Sets the style override. Anything but a JSON object clears it.
    pub fn style(mut self, style: serde_json::Value) -> Self {
        self.style = match style {
            serde_json::Value::Object(map) => map,
            _ => StyleMap::new(),
        };
        self
    }

    /// Sets a semantic shortcut attribute.
    pub fn attr(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.shortcuts.insert(name.to_string(), value.into());
        self
    }

    /// Sets a pass-through property of the text primitive.
    pub fn prop(mut self, name: &str, value: impl Into<serde_json::Value>) -> Self {
        self.passthrough.insert(name.to_string(), value.into());
        self
    }
}

/// What the host framework lays out: a wrapping row of fragments.
#[derive(Debug, Clone, PartialEq)]
pub struct TextView<N> {
    pub container_style: StyleMap,
    /// Resolved `"text"` slot with the caller's override on top.
    pub text_style: StyleMap,
    pub fragments: Vec<Fragment<N>>,
    pub passthrough: StyleMap,
}

/// Style of the wrapping container around the fragments.
pub fn container_style() -> StyleMap {
    let mut style = StyleMap::new();
    style.insert("flexDirection".into(), json!("row"));
    style.insert("flexWrap".into(), json!("wrap"));
    style.insert("alignItems".into(), json!("flex-start"));
    style
}

/// Renders [`TextProps`] against a theme.
///
/// # Example
///
/// ```rust
/// use themed_text::{default_theme, Platform, TextProps, TextWidget};
///
/// let widget = TextWidget::new(default_theme()).platform(Platform::Ios);
/// let view = widget.render(TextProps::<()>::new("Primary").type_tag("primary"));
///
/// assert_eq!(view.fragments.len(), 1);
/// assert_eq!(view.text_style["color"], "#2979ff");
/// ```
pub struct TextWidget<'a> {
    theme: &'a Theme,
    native_spacing: bool,
    diagnostics: &'a dyn DiagnosticSink,
}

impl std::fmt::Debug for TextWidget<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextWidget")
            .field("kinds", &self.theme.kinds())
            .field("native_spacing", &self.native_spacing)
            .finish_non_exhaustive()
    }
}

impl<'a> TextWidget<'a> {
    /// Creates a widget for the platform this binary targets.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            native_spacing: Platform::current().supports_native_letter_spacing(),
            diagnostics: &NoopSink,
        }
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.native_spacing = platform.supports_native_letter_spacing();
        self
    }

    /// Overrides the platform's letter-spacing capability directly.
    pub fn native_spacing(mut self, native_spacing: bool) -> Self {
        self.native_spacing = native_spacing;
        self
    }

    pub fn diagnostics(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Builds the view for one render pass. Recomputed from scratch every call.
    pub fn render<N>(&self, props: TextProps<N>) -> TextView<N> {
        let TextProps {
            type_tag,
            style,
            shortcuts,
            children,
            passthrough,
        } = props;

        let resolved = Resolver::new(self.theme, TEXT_COMPONENT)
            .with_diagnostics(self.diagnostics)
            .resolve(&type_tag, &shortcuts);
        let slot = resolved.slot(TEXT_SLOT).cloned().unwrap_or_default();

        let fragments = LetterSpacingRenderer::new(self.native_spacing)
            .with_diagnostics(self.diagnostics)
            .render(children, &slot, &style);

        TextView {
            container_style: container_style(),
            text_style: resolved.with_override(TEXT_SLOT, &style),
            fragments,
            passthrough,
        }
    }
}
