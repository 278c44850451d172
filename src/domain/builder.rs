//! Element builder for composing a markup tree under a single root.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::domain::element::Element;
use crate::domain::error::{DomainError, DomainResult};

/// Builds a one-level tree of elements under a named root.
///
/// Children are appended to the root only; deeper nesting comes from
/// attaching independently combined elements via [`add_subtree`](Self::add_subtree).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementBuilder {
    root: Element,
}

impl ElementBuilder {
    /// Start a tree whose root is named `root_name`.
    ///
    /// # Errors
    /// `InvalidArgument` if `root_name` is empty.
    pub fn create(root_name: impl Into<String>) -> DomainResult<Self> {
        let root_name = root_name.into();
        if root_name.is_empty() {
            return Err(DomainError::invalid_argument(
                "root_name",
                "root element must have a name",
            ));
        }
        debug!("create: root={}", root_name);
        Ok(Self {
            root: Element::new(root_name),
        })
    }

    /// Append a leaf `<name>text</name>` to the root. Empty strings are allowed.
    pub fn add_child(&mut self, name: impl Into<String>, text: impl Into<String>) -> &mut Self {
        let child = Element::with_text(name, text);
        trace!("add_child: {}", child.name());
        self.root.push_child(child);
        self
    }

    /// Like [`add_child`](Self::add_child) for inputs that may be missing.
    ///
    /// # Errors
    /// `InvalidArgument` if `name` or `text` is `None`; the tree is left unchanged.
    pub fn try_add_child(
        &mut self,
        name: Option<String>,
        text: Option<String>,
    ) -> DomainResult<&mut Self> {
        let name = name.ok_or_else(|| DomainError::invalid_argument("name", "must have a name"))?;
        let text = text.ok_or_else(|| {
            DomainError::invalid_argument("text", format!("element `{name}` must have text"))
        })?;
        Ok(self.add_child(name, text))
    }

    /// Attach an independently combined element under the root.
    pub fn add_subtree(&mut self, element: Element) -> &mut Self {
        trace!("add_subtree: {} ({} nodes)", element.name(), element.node_count());
        self.root.push_child(element);
        self
    }

    /// Reset to a bare root with the same name.
    #[instrument(level = "debug", skip(self), fields(root = %self.root.name()))]
    pub fn clear(&mut self) {
        self.root = Element::new(self.root.name());
    }

    /// Indented markup of the whole tree; does not modify the builder.
    pub fn serialize(&self) -> String {
        self.root.to_markup()
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Finish building and take the root element.
    pub fn build(self) -> Element {
        self.root
    }
}

impl fmt::Display for ElementBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<ElementBuilder> for Element {
    fn from(builder: ElementBuilder) -> Self {
        builder.build()
    }
}
