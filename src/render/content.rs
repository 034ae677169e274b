//! Widget children and rendered fragments.

use crate::style::StyleMap;

/// One child of a text widget.
///
/// `N` is the host framework's node type; it is opaque to this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum Child<N> {
    /// Plain text, subject to letter-spacing simulation.
    Text(String),
    /// A framework node, passed through untouched.
    Node(N),
}

impl<N> Child<N> {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Child::Text(text) => Some(text),
            Child::Node(_) => None,
        }
    }
}

impl<N> From<&str> for Child<N> {
    fn from(text: &str) -> Self {
        Child::Text(text.to_string())
    }
}

impl<N> From<String> for Child<N> {
    fn from(text: String) -> Self {
        Child::Text(text)
    }
}

/// Ordered children of a text widget.
///
/// A single string converts into one implicit text child.
#[derive(Debug, Clone, PartialEq)]
pub struct Children<N>(Vec<Child<N>>);

impl<N> Children<N> {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a child, returning the list for chaining.
    pub fn push(mut self, child: impl Into<Child<N>>) -> Self {
        self.0.push(child.into());
        self
    }

    /// Appends a framework node.
    pub fn node(self, node: N) -> Self {
        self.push(Child::Node(node))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Child<N>> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N> Default for Children<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> IntoIterator for Children<N> {
    type Item = Child<N>;
    type IntoIter = std::vec::IntoIter<Child<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<N> From<&str> for Children<N> {
    fn from(text: &str) -> Self {
        Self(vec![Child::from(text)])
    }
}

impl<N> From<String> for Children<N> {
    fn from(text: String) -> Self {
        Self(vec![Child::Text(text)])
    }
}

impl<N> From<Child<N>> for Children<N> {
    fn from(child: Child<N>) -> Self {
        Self(vec![child])
    }
}

impl<N> From<Vec<Child<N>>> for Children<N> {
    fn from(children: Vec<Child<N>>) -> Self {
        Self(children)
    }
}

impl<N> FromIterator<Child<N>> for Children<N> {
    fn from_iter<I: IntoIterator<Item = Child<N>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One renderable piece of output.
///
/// Text fragments always carry a style. Nodes carry the merged style on the
/// native path and `None` when passed through the simulated path.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment<N> {
    pub content: Child<N>,
    pub style: Option<StyleMap>,
}

impl<N> Fragment<N> {
    pub(crate) fn text(text: String, style: StyleMap) -> Self {
        Self {
            content: Child::Text(text),
            style: Some(style),
        }
    }

    pub fn is_plain_text(&self) -> bool {
        matches!(self.content, Child::Text(_))
    }

    /// The fragment's text, if it is a text fragment.
    pub fn as_text(&self) -> Option<&str> {
        self.content.as_text()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_one_implicit_child() {
        let children: Children<()> = "hello world".into();
        assert_eq!(children.len(), 1);
        assert_eq!(children.iter().next().unwrap().as_text(), Some("hello world"));
    }

    #[test]
    fn test_builder_preserves_order() {
        let children = Children::new().push("a").node(7u32).push(String::from("b"));
        let kinds: Vec<Option<&str>> = children.iter().map(Child::as_text).collect();
        assert_eq!(kinds, vec![Some("a"), None, Some("b")]);
    }

    #[test]
    fn test_fragment_is_plain_text() {
        let text: Fragment<u8> = Fragment::text("x".into(), StyleMap::new());
        let node = Fragment {
            content: Child::Node(1u8),
            style: None,
        };
        assert!(text.is_plain_text());
        assert!(!node.is_plain_text());
        assert_eq!(node.as_text(), None);
    }
}
