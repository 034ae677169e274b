//! Attribute mapping tables: semantic attribute names to slot properties.
//!
//! Each component kind declares, at compile time, which render slots it has
//! and which semantic attributes land on which property of which slot. The
//! tables are `&'static` data and are never mutated.

/// The semantic attributes routed to one render slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotMapping {
    /// Slot name, e.g. `"text"`.
    pub slot: &'static str,
    /// `(semantic attribute, underlying property)` pairs.
    pub attributes: &'static [(&'static str, &'static str)],
}

impl SlotMapping {
    /// Returns the underlying property name for a semantic attribute.
    pub fn property_for(&self, attribute: &str) -> Option<&'static str> {
        self.attributes
            .iter()
            .find(|(semantic, _)| *semantic == attribute)
            .map(|(_, property)| *property)
    }
}

/// Per-slot mapping for a whole component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeMapping {
    slots: &'static [SlotMapping],
}

impl AttributeMapping {
    /// Creates a mapping from a static slot table.
    pub const fn new(slots: &'static [SlotMapping]) -> Self {
        Self { slots }
    }

    /// Iterates over the declared slots in declaration order.
    pub fn slots(&self) -> impl Iterator<Item = &'static SlotMapping> {
        self.slots.iter()
    }

    /// Returns true if `name` is a declared slot.
    pub fn has_slot(&self, name: &str) -> bool {
        self.slots.iter().any(|s| s.slot == name)
    }

    /// Every `(slot, property)` a semantic attribute fans out to.
    pub fn targets<'a>(
        &'a self,
        attribute: &'a str,
    ) -> impl Iterator<Item = (&'static str, &'static str)> + 'a {
        self.slots
            .iter()
            .filter_map(move |s| s.property_for(attribute).map(|p| (s.slot, p)))
    }

    /// Returns true if some slot maps the semantic attribute.
    pub fn is_attribute(&self, attribute: &str) -> bool {
        self.targets(attribute).next().is_some()
    }
}

/// Everything the resolver needs to know about a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentConfig {
    /// Kind name used as the first key of the theme registry.
    pub kind: &'static str,
    pub mapping: AttributeMapping,
}

impl ComponentConfig {
    pub const fn new(kind: &'static str, mapping: AttributeMapping) -> Self {
        Self { kind, mapping }
    }
}
