//! The node model: immutable, structurally shared tree values.
//!
//! Every public type here is a cheap-to-clone handle over a reference-counted
//! read-only payload. Cloning shares the allocation; the `ptr_eq` probes
//! expose that sharing so callers can detect no-op updates without deep
//! comparison.

mod attribute;
mod node_list;

pub use attribute::{Attribute, AttributeList};
pub use node_list::NodeList;

use std::sync::Arc;

use crate::error::{InvalidName, ParseError};

/// Element names that never carry children or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "input", "img", "br", "hr", "source", "meta", "link", "base", "area", "col", "command",
    "embed", "param", "track", "keygen", "wbr",
];

/// Whether `name` is a void element, ignoring ASCII case.
pub fn is_void_element(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|void| name.eq_ignore_ascii_case(void))
}

/// A markup tree value.
///
/// `List` is itself a node, so a fragment with several top-level siblings has
/// a uniform representation. Equality is structural: element and attribute
/// names compare ignoring ASCII case, attribute sets ignore order, child
/// sequences do not.
#[derive(Clone, Debug)]
pub enum Node {
    Text(Text),
    Comment(Comment),
    Element(Element),
    List(NodeList),
}

impl Node {
    /// Returns a new text node.
    pub fn text(value: impl Into<Arc<str>>) -> Node {
        Node::Text(Text::new(value))
    }

    /// Returns a new comment node.
    pub fn comment(value: impl Into<Arc<str>>) -> Node {
        Node::Comment(Comment::new(value))
    }

    /// Returns a new element node.
    pub fn element(
        name: impl Into<Arc<str>>,
        attributes: AttributeList,
        children: NodeList,
    ) -> Result<Node, InvalidName> {
        Element::new(name, attributes, children).map(Node::Element)
    }

    /// Parses a fragment; see [`crate::parse`].
    pub fn parse(input: &str) -> Result<Option<Node>, ParseError> {
        crate::parser::parse(input)
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Node::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Node::Comment(comment) => Some(comment),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&NodeList> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    /// Whether `self` and `other` are the same shared instance.
    pub fn ptr_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Text(a), Node::Text(b)) => a.ptr_eq(b),
            (Node::Comment(a), Node::Comment(b)) => a.ptr_eq(b),
            (Node::Element(a), Node::Element(b)) => a.ptr_eq(b),
            (Node::List(a), Node::List(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Comment(a), Node::Comment(b)) => a == b,
            (Node::Element(a), Node::Element(b)) => a == b,
            (Node::List(a), Node::List(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Node {}

impl From<Text> for Node {
    fn from(text: Text) -> Node {
        Node::Text(text)
    }
}

impl From<Comment> for Node {
    fn from(comment: Comment) -> Node {
        Node::Comment(comment)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Node {
        Node::Element(element)
    }
}

impl From<NodeList> for Node {
    fn from(list: NodeList) -> Node {
        Node::List(list)
    }
}

/// Verbatim character content. Entities are not decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Text(Arc<str>);

impl Text {
    pub fn new(value: impl Into<Arc<str>>) -> Text {
        Text(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Whether `self` and `other` are the same shared instance.
    pub fn ptr_eq(&self, other: &Text) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Raw content between `<!--` and `-->`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comment(Arc<str>);

impl Comment {
    pub fn new(value: impl Into<Arc<str>>) -> Comment {
        Comment(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }

    /// Whether `self` and `other` are the same shared instance.
    pub fn ptr_eq(&self, other: &Comment) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// A named element with attributes and children.
///
/// The name is stored exactly as given (case preserved) and compared
/// ignoring ASCII case everywhere: tag matching, void classification,
/// structural equality.
#[derive(Clone, Debug)]
pub struct Element {
    inner: Arc<ElementInner>,
}

#[derive(Debug)]
struct ElementInner {
    name: Arc<str>,
    attributes: AttributeList,
    children: NodeList,
}

impl Element {
    /// Returns a new element. The name must contain a non-whitespace
    /// character.
    pub fn new(
        name: impl Into<Arc<str>>,
        attributes: AttributeList,
        children: NodeList,
    ) -> Result<Element, InvalidName> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(InvalidName::Element);
        }
        Ok(Element::from_parts(name, attributes, children))
    }

    pub(crate) fn from_parts(
        name: Arc<str>,
        attributes: AttributeList,
        children: NodeList,
    ) -> Element {
        debug_assert!(!name.trim().is_empty(), "caller must validate the name");
        Element {
            inner: Arc::new(ElementInner {
                name,
                attributes,
                children,
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.inner.attributes
    }

    pub fn children(&self) -> &NodeList {
        &self.inner.children
    }

    /// Whether this element's name is in the void set.
    pub fn is_void(&self) -> bool {
        is_void_element(self.name())
    }

    /// Returns a new element sharing this element's name, with the given
    /// attributes and children.
    pub fn with(&self, attributes: AttributeList, children: NodeList) -> Element {
        Element::from_parts(Arc::clone(&self.inner.name), attributes, children)
    }

    /// Whether `self` and `other` are the same shared instance.
    pub fn ptr_eq(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl PartialEq for Element {
    fn eq(&self, other: &Element) -> bool {
        self.name().eq_ignore_ascii_case(other.name())
            && self.attributes() == other.attributes()
            && self.children() == other.children()
    }
}

impl Eq for Element {}
