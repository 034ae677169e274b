//! Style property maps and registered style fragments.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Style property name to value (number, string or nested object).
pub type StyleMap = serde_json::Map<String, Value>;

/// The style payload registered under one (component kind, type tag) pair.
///
/// A fragment is a flat map. Keys that name a slot of the component hold
/// that slot's properties; other keys are semantic attributes that the
/// component's [`AttributeMapping`](super::AttributeMapping) routes to the
/// right slot at resolution time.
///
/// # Example
///
/// ```rust
/// use themed_text::StyleFragment;
/// use serde_json::json;
///
/// // Semantic shortcut, routed through the mapping table
/// let hero = StyleFragment::new().attr("fontSize", 40);
///
/// // Slot sub-object, applied to the "text" slot as-is
/// let italic = StyleFragment::new().slot("text", json!({ "fontStyle": "italic" }));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleFragment {
    entries: StyleMap,
}

impl StyleFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fragment from a raw property map.
    pub fn from_map(entries: StyleMap) -> Self {
        Self { entries }
    }

    /// Sets a semantic attribute, returning the fragment for chaining.
    pub fn attr(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Sets the properties of a slot, returning the fragment for chaining.
    ///
    /// Values that are not JSON objects are stored verbatim and later
    /// ignored by the resolver.
    pub fn slot(mut self, name: &str, properties: impl Into<Value>) -> Self {
        self.entries.insert(name.to_string(), properties.into());
        self
    }

    /// Looks up a top-level entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Iterates over the top-level entries.
    pub fn entries(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }

    /// Returns true if the fragment has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<StyleMap> for StyleFragment {
    fn from(entries: StyleMap) -> Self {
        Self::from_map(entries)
    }
}

/// Shallow merge: every key of `layer` overwrites the same key in `base`.
///
/// Nested objects are replaced wholesale, never merged.
pub fn merge_into(base: &mut StyleMap, layer: &StyleMap) {
    for (key, value) in layer {
        base.insert(key.clone(), value.clone());
    }
}
