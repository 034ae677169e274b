//! Terminal preview of a [`TextView`].
//!
//! A debugging aid, not a layout engine: the view's container style is
//! ignored and fragments are simply concatenated, breaking lines at a
//! column budget. With color enabled each fragment is styled with `console`
//! from its style map. Handy for snapshots and CLIs.

use std::fmt::Display;

use console::{Color, Style};
use serde_json::Value;

use crate::render::Child;
use crate::style::StyleMap;
use crate::util::{display_width, parse_hex_color, rgb_to_ansi256};
use crate::widget::TextView;

/// Whether to emit ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Style only if stdout is a color-capable terminal.
    #[default]
    Auto,
    /// Always emit ANSI codes.
    Term,
    /// Plain text, no codes.
    Text,
}

impl OutputMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            OutputMode::Auto => console::Term::stdout().features().colors_supported(),
            OutputMode::Term => true,
            OutputMode::Text => false,
        }
    }
}

/// Maps a text style to a terminal style.
///
/// Understands `color`, `backgroundColor`, `fontWeight`, `fontStyle` and
/// `textDecorationLine`; everything else has no terminal equivalent.
pub fn terminal_style(style: &StyleMap) -> Style {
    let mut term = Style::new().force_styling(true);

    if let Some(color) = style.get("color").and_then(color_value) {
        term = term.fg(color);
    }
    if let Some(color) = style.get("backgroundColor").and_then(color_value) {
        term = term.bg(color);
    }
    if style.get("fontWeight").is_some_and(is_bold) {
        term = term.bold();
    }
    if style.get("fontStyle").and_then(Value::as_str) == Some("italic") {
        term = term.italic();
    }
    if style
        .get("textDecorationLine")
        .and_then(Value::as_str)
        .is_some_and(|d| d.contains("underline"))
    {
        term = term.underlined();
    }
    term
}

fn color_value(value: &Value) -> Option<Color> {
    let name = value.as_str()?;
    let color = match name.to_ascii_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        _ => Color::Color256(rgb_to_ansi256(parse_hex_color(name)?)),
    };
    Some(color)
}

fn is_bold(weight: &Value) -> bool {
    match weight {
        Value::String(s) if s == "bold" => true,
        Value::String(s) => s.parse::<u32>().is_ok_and(|w| w >= 600),
        Value::Number(n) => n.as_f64().is_some_and(|w| w >= 600.0),
        _ => false,
    }
}

/// Formats a preview of a view's fragments as terminal text.
///
/// The container style is not interpreted.
///
/// Fragments go left to right; one that does not fit the remaining `width`
/// starts a new line. `None` never wraps.
///
/// ```rust
/// use themed_text::{render_view, OutputMode, Platform, TextProps, TextWidget, Theme};
///
/// let theme = Theme::new();
/// let view = TextWidget::new(&theme)
///     .platform(Platform::Ios)
///     .render(TextProps::<String>::new("hello"));
/// assert_eq!(render_view(&view, None, OutputMode::Text), "hello");
/// ```
pub fn render_view<N: Display>(
    view: &TextView<N>,
    width: Option<usize>,
    mode: OutputMode,
) -> String {
    let use_color = mode.should_use_color();
    let mut out = String::new();
    let mut line_width = 0;

    for fragment in &view.fragments {
        let text = match &fragment.content {
            Child::Text(text) => text.clone(),
            Child::Node(node) => node.to_string(),
        };
        let w = display_width(&text);

        if let Some(max) = width {
            if line_width > 0 && line_width + w > max {
                out.push('\n');
                line_width = 0;
            }
        }
        line_width += w;

        match (&fragment.style, use_color) {
            (Some(style), true) => {
                out.push_str(&terminal_style(style).apply_to(&text).to_string())
            }
            _ => out.push_str(&text),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::Fragment;
    use crate::widget::container_style;
    use serde_json::json;

    fn map(value: Value) -> StyleMap {
        value.as_object().cloned().unwrap()
    }

    fn view(fragments: Vec<Fragment<&'static str>>) -> TextView<&'static str> {
        TextView {
            container_style: container_style(),
            text_style: StyleMap::new(),
            fragments,
            passthrough: StyleMap::new(),
        }
    }

    fn text(s: &str, style: Value) -> Fragment<&'static str> {
        Fragment {
            content: Child::Text(s.to_string()),
            style: Some(map(style)),
        }
    }

    #[test]
    fn test_plain_text_mode() {
        let v = view(vec![
            text("ab ", json!({ "color": "red" })),
            Fragment {
                content: Child::Node("[icon]"),
                style: None,
            },
        ]);
        assert_eq!(render_view(&v, None, OutputMode::Text), "ab [icon]");
    }

    #[test]
    fn test_wraps_fragments_that_do_not_fit() {
        let v = view(vec![
            text("aaaa", json!({})),
            text("bbb", json!({})),
            text("cc", json!({})),
            text("dddddddd", json!({})),
        ]);
        assert_eq!(render_view(&v, Some(7), OutputMode::Text), "aaaabbb\ncc\ndddddddd");
    }

    #[test]
    fn test_container_style_is_not_interpreted() {
        let mut v = view(vec![text("ab", json!({})), text("cd", json!({}))]);
        let expected = render_view(&v, Some(3), OutputMode::Text);

        v.container_style = map(json!({ "flexDirection": "column", "flexWrap": "nowrap" }));
        assert_eq!(render_view(&v, Some(3), OutputMode::Text), expected);
        assert_eq!(expected, "ab\ncd");
    }

    #[test]
    fn test_term_mode_applies_colors() {
        let v = view(vec![
            text("r", json!({ "color": "red" })),
            text("h", json!({ "color": "#ff0000" })),
        ]);
        let out = render_view(&v, None, OutputMode::Term);
        assert!(out.contains("\x1b[31m"));
        assert!(out.contains("\x1b[38;5;196m"));
    }

    #[test]
    fn test_terminal_style_attributes() {
        let styled = terminal_style(&map(json!({
            "fontWeight": "700",
            "fontStyle": "italic",
            "textDecorationLine": "underline line-through",
        })))
        .apply_to("x")
        .to_string();

        assert!(styled.contains("\x1b[1m"));
        assert!(styled.contains("\x1b[3m"));
        assert!(styled.contains("\x1b[4m"));
    }

    #[test]
    fn test_unknown_color_ignored() {
        let styled = terminal_style(&map(json!({ "color": "chartreuse", "fontWeight": 400 })))
            .apply_to("x")
            .to_string();
        assert_eq!(styled, "x");
    }
}
