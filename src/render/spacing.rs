//! Letter-spacing simulation for text primitives without native support.
//!
//! When the platform ignores `letterSpacing`, the requested spacing is
//! approximated by inserting [`INVISIBLE_JOINER`] characters between the
//! glyphs of every word. Each word becomes its own fragment, closed by a
//! spaced [`WORD_SEPARATOR`]:
//!
//! ```text
//! "ab", spaceCount = 1  =>  "a" J "b" J NBSP J
//! ```
//!
//! The constants below are part of the public contract; changing any of
//! them changes rendered output.

use serde_json::Value;

use super::content::{Child, Children, Fragment};
use super::platform::Platform;
use crate::diagnostics::{Diagnostic, DiagnosticSink, NoopSink};
use crate::style::{merge_into, StyleMap};

/// Joiner characters inserted per unit of requested spacing.
pub const SCALE_CONSTANT: f64 = 1.0;

/// Inserted between glyphs: U+200A HAIR SPACE.
pub const INVISIBLE_JOINER: char = '\u{200A}';

/// Visible gap closing every word: U+00A0 NO-BREAK SPACE.
pub const WORD_SEPARATOR: char = '\u{00A0}';

/// Style property holding the requested spacing.
pub const LETTER_SPACING_KEY: &str = "letterSpacing";

/// Longest fragment, in chars, the simulated path will build.
///
/// Spacing that would exceed it for any word is treated as invalid and
/// rendered natively.
pub const MAX_FRAGMENT_CHARS: usize = 1 << 16;

/// How a render pass will handle letter spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpacingPlan {
    /// Children go to the text primitive as-is.
    Native,
    /// Words are split and padded with `space_count` joiners.
    ///
    /// The count may be zero or negative for small or negative spacing; a
    /// non-positive count inserts no joiners.
    Simulated { space_count: i64 },
}

/// Converts a spacing value to a joiner count.
///
/// Rounds half toward positive infinity: `2.5 -> 3`, `-2.5 -> -2`. There is
/// no sign check.
pub fn space_count(spacing: f64) -> i64 {
    (spacing * SCALE_CONSTANT + 0.5).floor() as i64
}

/// Chars in the spelled-out form of a `word_chars`-long word, or `None`
/// past [`MAX_FRAGMENT_CHARS`].
fn fragment_chars(word_chars: usize, space_count: i64) -> Option<usize> {
    let joiners = usize::try_from(space_count).unwrap_or(0);
    // Joiner runs: one between each pair of chars, two around the separator.
    let runs = word_chars.saturating_sub(1).checked_add(2)?;
    joiners
        .checked_mul(runs)?
        .checked_add(word_chars)?
        .checked_add(1)
        .filter(|&total| total <= MAX_FRAGMENT_CHARS)
}

/// Spells out one word with joiners between its characters, followed by
/// the spaced word separator.
///
/// Callers bound `space_count` through [`fragment_chars`] first.
pub(crate) fn spaced_word(word: &str, space_count: i64) -> String {
    let joiners: String = std::iter::repeat(INVISIBLE_JOINER)
        .take(usize::try_from(space_count).unwrap_or(0))
        .collect();

    let capacity = word.len() * (joiners.len() + 1) + joiners.len() * 2 + 2;
    let mut out = String::with_capacity(capacity);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push_str(&joiners);
        }
        out.push(c);
    }
    out.push_str(&joiners);
    out.push(WORD_SEPARATOR);
    out.push_str(&joiners);
    out
}

/// Splits text on the literal space character and spells out every word.
///
/// Consecutive spaces produce empty words, which still get a separator.
/// Empty input produces nothing.
pub(crate) fn simulate_spacing(text: &str, space_count: i64) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ')
        .map(|word| spaced_word(word, space_count))
        .collect()
}

/// Turns widget children into fragments for one render pass.
pub trait RenderStrategy {
    /// Renders `children` with the resolved text style and the caller's override.
    fn render<N>(
        &self,
        children: Children<N>,
        text_style: &StyleMap,
        style_override: &StyleMap,
    ) -> Vec<Fragment<N>>;
}

/// Renders text natively where possible and simulates spacing otherwise.
///
/// # Example
///
/// ```rust
/// use themed_text::{LetterSpacingRenderer, RenderStrategy, StyleMap, Children};
/// use serde_json::json;
///
/// let renderer = LetterSpacingRenderer::new(false);
/// let style_override = json!({ "letterSpacing": 1 }).as_object().cloned().unwrap();
/// let children: Children<()> = "ab".into();
///
/// let fragments = renderer.render(children, &StyleMap::new(), &style_override);
/// assert_eq!(fragments[0].as_text(), Some("a\u{200A}b\u{200A}\u{00A0}\u{200A}"));
/// ```
pub struct LetterSpacingRenderer<'a> {
    native_spacing: bool,
    diagnostics: &'a dyn DiagnosticSink,
}

impl std::fmt::Debug for LetterSpacingRenderer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LetterSpacingRenderer")
            .field("native_spacing", &self.native_spacing)
            .finish_non_exhaustive()
    }
}

impl<'a> LetterSpacingRenderer<'a> {
    /// Creates a renderer; `native_spacing` says whether the platform's
    /// text primitive handles `letterSpacing` itself.
    pub fn new(native_spacing: bool) -> Self {
        Self {
            native_spacing,
            diagnostics: &NoopSink,
        }
    }

    pub fn for_platform(platform: Platform) -> Self {
        Self::new(platform.supports_native_letter_spacing())
    }

    /// Routes invalid spacing values to `sink`.
    pub fn with_diagnostics(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Decides between the native and the simulated path.
    ///
    /// Only the caller's override is consulted. Missing, zero and
    /// non-numeric spacing all take the native path, as does spacing so
    /// large that even a one-char word would exceed [`MAX_FRAGMENT_CHARS`].
    pub fn plan(&self, style_override: &StyleMap) -> SpacingPlan {
        let Some(value) = style_override.get(LETTER_SPACING_KEY) else {
            return SpacingPlan::Native;
        };
        let spacing = match value {
            Value::Null => return SpacingPlan::Native,
            _ => match value.as_f64() {
                Some(spacing) => spacing,
                None => return self.invalid(value),
            },
        };

        if self.native_spacing || spacing == 0.0 {
            return SpacingPlan::Native;
        }
        let space_count = space_count(spacing);
        if fragment_chars(1, space_count).is_none() {
            return self.invalid(value);
        }
        SpacingPlan::Simulated { space_count }
    }

    fn invalid(&self, value: &Value) -> SpacingPlan {
        self.diagnostics.report(&Diagnostic::InvalidSpacing {
            value: value.clone(),
        });
        SpacingPlan::Native
    }
}

/// Whether every word of every text child stays within [`MAX_FRAGMENT_CHARS`].
fn words_fit<N>(children: &Children<N>, space_count: i64) -> bool {
    children
        .iter()
        .filter_map(Child::as_text)
        .flat_map(|text| text.split(' '))
        .all(|word| fragment_chars(word.chars().count(), space_count).is_some())
}

impl RenderStrategy for LetterSpacingRenderer<'_> {
    fn render<N>(
        &self,
        children: Children<N>,
        text_style: &StyleMap,
        style_override: &StyleMap,
    ) -> Vec<Fragment<N>> {
        let mut style = text_style.clone();
        merge_into(&mut style, style_override);

        let plan = match self.plan(style_override) {
            SpacingPlan::Simulated { space_count } if !words_fit(&children, space_count) => {
                self.invalid(style_override.get(LETTER_SPACING_KEY).unwrap_or(&Value::Null))
            }
            plan => plan,
        };

        match plan {
            SpacingPlan::Native => children
                .into_iter()
                .map(|content| Fragment {
                    content,
                    style: Some(style.clone()),
                })
                .collect(),
            SpacingPlan::Simulated { space_count } => {
                let mut fragments = Vec::new();
                for child in children {
                    match child {
                        Child::Text(text) => fragments.extend(
                            simulate_spacing(&text, space_count)
                                .into_iter()
                                .map(|word| Fragment::text(word, style.clone())),
                        ),
                        node @ Child::Node(_) => fragments.push(Fragment {
                            content: node,
                            style: None,
                        }),
                    }
                }
                fragments
            }
        }
    }
}
