//! Element tree and its markup serialization.

use std::fmt;

use serde::Serialize;
use termtree::Tree;
use tracing::instrument;

/// Spaces per nesting level in serialized markup.
pub const INDENT_SIZE: usize = 2;

/// Named node of a markup tree with optional text content.
///
/// A parent owns its children exclusively; trees are built either through
/// [`ElementBuilder`](crate::domain::ElementBuilder) or by combining
/// independently constructed elements with [`Element::with_child`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Element>,
}

impl Element {
    /// Element without text or children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Leaf element carrying `text`.
    pub fn with_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    /// Append `child` and return the combined element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }

    /// Levels in this subtree; a lone element has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Element::depth)
            .max()
            .unwrap_or(0)
    }

    /// Serialize the subtree as indented markup, starting at depth 0.
    ///
    /// Each element emits its opening tag, its text one level deeper (only
    /// when non-empty), its children in insertion order and its closing tag.
    /// Every line is newline-terminated.
    #[instrument(level = "trace", skip(self), fields(name = %self.name))]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out, 0);
        out
    }

    fn write_markup(&self, out: &mut String, depth: usize) {
        let indent = " ".repeat(depth * INDENT_SIZE);

        out.push_str(&indent);
        out.push('<');
        out.push_str(&self.name);
        out.push_str(">\n");

        if let Some(text) = self.text.as_deref().filter(|t| !t.is_empty()) {
            out.push_str(&" ".repeat((depth + 1) * INDENT_SIZE));
            out.push_str(text);
            out.push('\n');
        }

        for child in &self.children {
            child.write_markup(out, depth + 1);
        }

        out.push_str(&indent);
        out.push_str("</");
        out.push_str(&self.name);
        out.push_str(">\n");
    }

    /// Outline view of the subtree, one `name` or `name: text` label per node.
    pub fn to_tree(&self) -> Tree<String> {
        let label = match self.text.as_deref() {
            Some(text) if !text.is_empty() => format!("{}: {}", self.name, text),
            _ => self.name.clone(),
        };
        let leaves: Vec<_> = self.children.iter().map(Element::to_tree).collect();
        Tree::new(label).with_leaves(leaves)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markup())
    }
}
