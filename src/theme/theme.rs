//! Theme registry of type fragments.

use std::collections::HashMap;

use crate::style::StyleFragment;

/// Named style fragments keyed by (component kind, type tag).
///
/// A theme is plain data passed by reference to whoever resolves styles.
/// Fill it during setup, then share it immutably (e.g. behind an `Arc`)
/// for rendering; the borrow checker keeps writers and readers apart.
///
/// # Example
///
/// ```rust
/// use themed_text::{StyleFragment, Theme};
/// use serde_json::json;
///
/// let theme = Theme::new()
///     .add("Text", "hero", StyleFragment::new().attr("fontSize", 40))
///     .add("Text", "italic", StyleFragment::new().slot("text", json!({ "fontStyle": "italic" })));
///
/// assert!(theme.has_type("Text", "hero"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    kinds: HashMap<String, HashMap<String, StyleFragment>>,
}

impl Theme {
    /// Creates an empty theme.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a fragment for `(kind, tag)`.
    ///
    /// Registering the same pair again replaces the previous fragment.
    pub fn register_type(&mut self, kind: &str, tag: &str, fragment: StyleFragment) {
        self.kinds
            .entry(kind.to_string())
            .or_default()
            .insert(tag.to_string(), fragment);
    }

    /// Registers a fragment, returning the updated theme for chaining.
    pub fn add(mut self, kind: &str, tag: &str, fragment: StyleFragment) -> Self {
        self.register_type(kind, tag, fragment);
        self
    }

    /// Looks up the fragment for `(kind, tag)`.
    pub fn fragment(&self, kind: &str, tag: &str) -> Option<&StyleFragment> {
        self.kinds.get(kind).and_then(|types| types.get(tag))
    }

    pub fn has_type(&self, kind: &str, tag: &str) -> bool {
        self.fragment(kind, tag).is_some()
    }

    /// Component kinds with at least one registered type, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.kinds.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    /// Type tags registered for a kind, sorted.
    pub fn types(&self, kind: &str) -> Vec<&str> {
        let mut tags: Vec<&str> = self
            .kinds
            .get(kind)
            .map(|types| types.keys().map(String::as_str).collect())
            .unwrap_or_default();
        tags.sort_unstable();
        tags
    }

    /// Copies every fragment of `other` into this theme; `other` wins on conflicts.
    pub fn merge(&mut self, other: Theme) {
        for (kind, types) in other.kinds {
            self.kinds.entry(kind).or_default().extend(types);
        }
    }

    /// Number of registered (kind, tag) pairs.
    pub fn len(&self) -> usize {
        self.kinds.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
