//! Type-tag style resolution.
//!
//! Resolution layers, in order, each overwriting keys set by the previous:
//!
//! 1. the fragment of every type tag, left to right;
//! 2. the caller's semantic shortcuts, routed through the mapping table;
//! 3. (at render time) the caller's explicit style override, see
//!    [`ResolvedStyle::with_override`].
//!
//! The theme and the mapping table are only read. Every call builds a fresh
//! [`ResolvedStyle`] owned by the caller.

use std::collections::BTreeMap;

use serde_json::Value;

use super::fragment::{merge_into, StyleFragment, StyleMap};
use super::mapping::ComponentConfig;
use crate::diagnostics::{Diagnostic, DiagnosticSink, NoopSink};
use crate::theme::Theme;

/// Merged style per render slot.
///
/// Contains exactly the slots declared by the component's mapping table,
/// each defaulting to an empty map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    slots: BTreeMap<String, StyleMap>,
}

impl ResolvedStyle {
    /// Returns the merged style of a slot.
    pub fn slot(&self, name: &str) -> Option<&StyleMap> {
        self.slots.get(name)
    }

    /// Iterates over `(slot, style)` pairs in slot name order.
    pub fn slots(&self) -> impl Iterator<Item = (&str, &StyleMap)> {
        self.slots.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Slot names present in this style.
    pub fn slot_names(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Returns a slot's style with the caller's override merged on top.
    ///
    /// An unknown slot yields just the override.
    pub fn with_override(&self, slot: &str, style_override: &StyleMap) -> StyleMap {
        let mut merged = self.slots.get(slot).cloned().unwrap_or_default();
        merge_into(&mut merged, style_override);
        merged
    }

    fn slot_mut(&mut self, name: &str) -> Option<&mut StyleMap> {
        self.slots.get_mut(name)
    }
}

/// Resolves type tags for one component kind against a theme.
///
/// # Example
///
/// ```rust
/// use themed_text::{Resolver, StyleFragment, StyleMap, Theme, TEXT_COMPONENT};
/// use serde_json::json;
///
/// let mut theme = Theme::new();
/// theme.register_type("Text", "danger", StyleFragment::new().attr("color", "red"));
/// theme.register_type("Text", "large", StyleFragment::new().attr("fontSize", 24));
///
/// let resolved = Resolver::new(&theme, TEXT_COMPONENT).resolve("danger large", &StyleMap::new());
/// let text = resolved.slot("text").unwrap();
/// assert_eq!(text["color"], json!("red"));
/// assert_eq!(text["fontSize"], json!(24));
/// ```
pub struct Resolver<'a> {
    theme: &'a Theme,
    config: ComponentConfig,
    diagnostics: &'a dyn DiagnosticSink,
}

impl std::fmt::Debug for Resolver<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("kind", &self.config.kind)
            .finish_non_exhaustive()
    }
}

impl<'a> Resolver<'a> {
    /// Creates a resolver that discards diagnostics.
    pub fn new(theme: &'a Theme, config: ComponentConfig) -> Self {
        Self {
            theme,
            config,
            diagnostics: &NoopSink,
        }
    }

    /// Routes unknown types and ignored keys to `sink`.
    pub fn with_diagnostics(mut self, sink: &'a dyn DiagnosticSink) -> Self {
        self.diagnostics = sink;
        self
    }

    /// Resolves a whitespace-separated type-tag string plus semantic shortcuts.
    ///
    /// Blank input and unknown tags are not errors: the result then holds
    /// only the empty slot defaults and whatever the shortcuts set.
    pub fn resolve(&self, type_tags: &str, shortcuts: &StyleMap) -> ResolvedStyle {
        let mut resolved = ResolvedStyle {
            slots: self
                .config
                .mapping
                .slots()
                .map(|s| (s.slot.to_string(), StyleMap::new()))
                .collect(),
        };

        for tag in type_tags.split_whitespace() {
            match self.theme.fragment(self.config.kind, tag) {
                Some(fragment) => self.apply_fragment(&mut resolved, tag, fragment),
                None => self.diagnostics.report(&Diagnostic::UnknownType {
                    kind: self.config.kind.to_string(),
                    tag: tag.to_string(),
                }),
            }
        }

        for (attribute, value) in shortcuts {
            self.apply_attribute(&mut resolved, attribute, value);
        }

        resolved
    }

    fn apply_fragment(&self, resolved: &mut ResolvedStyle, tag: &str, fragment: &StyleFragment) {
        let mapping = &self.config.mapping;
        let mut attributes = Vec::new();

        for (key, value) in fragment.entries() {
            if mapping.has_slot(key) {
                if let (Some(slot), Value::Object(properties)) = (resolved.slot_mut(key), value) {
                    merge_into(slot, properties);
                    continue;
                }
            } else if mapping.is_attribute(key) {
                attributes.push((key, value));
                continue;
            }
            self.diagnostics.report(&Diagnostic::IgnoredKey {
                kind: self.config.kind.to_string(),
                tag: tag.to_string(),
                key: key.clone(),
            });
        }

        // Semantic keys of a fragment win over its own slot sub-objects.
        for (attribute, value) in attributes {
            self.apply_attribute(resolved, attribute, value);
        }
    }

    fn apply_attribute(&self, resolved: &mut ResolvedStyle, attribute: &str, value: &Value) {
        for (slot, property) in self.config.mapping.targets(attribute) {
            if let Some(style) = resolved.slot_mut(slot) {
                style.insert(property.to_string(), value.clone());
            }
        }
    }
}

/// Resolves without diagnostics. Shorthand for [`Resolver::resolve`].
pub fn resolve(
    theme: &Theme,
    config: ComponentConfig,
    type_tags: &str,
    shortcuts: &StyleMap,
) -> ResolvedStyle {
    Resolver::new(theme, config).resolve(type_tags, shortcuts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::testing::RecordingSink;
    use crate::style::{AttributeMapping, SlotMapping};
    use serde_json::json;

    const CARD: ComponentConfig = ComponentConfig::new(
        "Card",
        AttributeMapping::new(&[
            SlotMapping {
                slot: "container",
                attributes: &[("color", "backgroundColor")],
            },
            SlotMapping {
                slot: "title",
                attributes: &[("color", "color"), ("size", "fontSize")],
            },
        ]),
    );

    fn map(value: Value) -> StyleMap {
        value.as_object().cloned().unwrap()
    }

    fn theme() -> Theme {
        let mut theme = Theme::new();
        theme.register_type("Card", "red", StyleFragment::new().attr("color", "red"));
        theme.register_type("Card", "blue", StyleFragment::new().attr("color", "blue"));
        theme.register_type(
            "Card",
            "framed",
            StyleFragment::new()
                .slot("container", json!({ "borderWidth": 1, "backgroundColor": "white" }))
                .attr("size", 12),
        );
        theme
    }

    #[test]
    fn test_cascade_order() {
        let theme = theme();
        let r1 = resolve(&theme, CARD, "red blue", &StyleMap::new());
        let r2 = resolve(&theme, CARD, "blue red", &StyleMap::new());

        assert_eq!(r1.slot("title").unwrap()["color"], json!("blue"));
        assert_eq!(r2.slot("title").unwrap()["color"], json!("red"));
    }

    #[test]
    fn test_semantic_attribute_fans_out() {
        let theme = theme();
        let resolved = resolve(&theme, CARD, "red", &StyleMap::new());

        assert_eq!(resolved.slot("container").unwrap()["backgroundColor"], json!("red"));
        assert_eq!(resolved.slot("title").unwrap()["color"], json!("red"));
    }

    #[test]
    fn test_slot_sub_object_applied_verbatim() {
        let theme = theme();
        let resolved = resolve(&theme, CARD, "framed", &StyleMap::new());
        let container = resolved.slot("container").unwrap();

        assert_eq!(container["borderWidth"], json!(1));
        assert_eq!(container["backgroundColor"], json!("white"));
        assert_eq!(resolved.slot("title").unwrap()["fontSize"], json!(12));
    }

    #[test]
    fn test_later_fragment_overrides_earlier_slot_object() {
        let theme = theme();
        let resolved = resolve(&theme, CARD, "framed red", &StyleMap::new());
        let container = resolved.slot("container").unwrap();

        assert_eq!(container["backgroundColor"], json!("red"));
        assert_eq!(container["borderWidth"], json!(1));
    }

    #[test]
    fn test_shortcuts_override_types() {
        let theme = theme();
        let resolved = resolve(&theme, CARD, "red", &map(json!({ "color": "green" })));

        assert_eq!(resolved.slot("title").unwrap()["color"], json!("green"));
        assert_eq!(
            resolved.slot("container").unwrap()["backgroundColor"],
            json!("green")
        );
    }

    #[test]
    fn test_unknown_tag_equals_blank() {
        let theme = theme();
        let unknown = resolve(&theme, CARD, "unknown-tag", &StyleMap::new());
        let blank = resolve(&theme, CARD, "", &StyleMap::new());

        assert_eq!(unknown, blank);
        assert_eq!(blank.slot_names().collect::<Vec<_>>(), vec!["container", "title"]);
        assert!(blank.slots().all(|(_, style)| style.is_empty()));
    }

    #[test]
    fn test_unknown_tag_reported() {
        let theme = theme();
        let sink = RecordingSink::default();
        Resolver::new(&theme, CARD)
            .with_diagnostics(&sink)
            .resolve("  red   ghost ", &StyleMap::new());

        assert_eq!(
            sink.take(),
            vec![Diagnostic::UnknownType {
                kind: "Card".into(),
                tag: "ghost".into()
            }]
        );
    }

    #[test]
    fn test_unknown_fragment_keys_ignored() {
        let mut theme = Theme::new();
        theme.register_type(
            "Card",
            "odd",
            StyleFragment::new()
                .slot("icon", json!({ "color": "red" }))
                .attr("margin", 4)
                .slot("title", "not an object"),
        );
        let sink = RecordingSink::default();
        let resolved = Resolver::new(&theme, CARD)
            .with_diagnostics(&sink)
            .resolve("odd", &StyleMap::new());

        assert!(resolved.slot("icon").is_none());
        assert!(resolved.slots().all(|(_, style)| style.is_empty()));
        let keys: Vec<String> = sink
            .take()
            .into_iter()
            .filter_map(|d| match d {
                Diagnostic::IgnoredKey { key, .. } => Some(key),
                _ => None,
            })
            .collect();
        assert_eq!(keys, vec!["icon", "margin", "title"]);
    }

    #[test]
    fn test_resolution_does_not_mutate_theme() {
        let theme = theme();
        let before = theme.clone();
        let _ = resolve(&theme, CARD, "framed red blue", &map(json!({ "size": 3 })));
        assert_eq!(theme, before);
    }

    #[test]
    fn test_with_override() {
        let theme = theme();
        let resolved = resolve(&theme, CARD, "red", &StyleMap::new());
        let merged = resolved.with_override("title", &map(json!({ "color": "pink", "x": 1 })));

        assert_eq!(merged["color"], json!("pink"));
        assert_eq!(merged["x"], json!(1));
        assert_eq!(resolved.slot("title").unwrap()["color"], json!("red"));
    }
}
