//! Lenient, fragment-oriented markup parsing and rewriting.
//!
//! The dialect is a tolerant subset of HTML aimed at "HTML-ish" content of
//! uncertain strictness (rich-text fields, legacy CMS exports). A fragment is
//! parsed into an immutable tree of [`Node`] values, rewritten through
//! persistent update operations or the [`NodeVisitor`] rewriter, and
//! serialized back to text via [`Node::write_to`] or `Display`.
//!
//! Invariants:
//! - Tree values are immutable after construction. Update operations return
//!   new values sharing unchanged substructure; an unchanged result is the
//!   same shared instance, observable through the `ptr_eq` probes.
//! - A [`NodeList`] never directly contains another list; range construction
//!   and `add` splice a list argument into the parent sequence.
//! - Attribute values carry `&quot;` in place of literal `"` from the moment
//!   of construction; serialization writes values verbatim, double-quoted.
//! - Parsing is total: it yields a complete tree or a [`ParseError`], never a
//!   partial result. Entities are not decoded and pass through as text.

mod dom;
mod error;
mod parser;
mod serialize;
mod visit;

pub use crate::dom::{
    Attribute, AttributeList, Comment, Element, Node, NodeList, Text, is_void_element,
};
pub use crate::error::{InvalidName, ParseError, ParseErrorCode};
pub use crate::parser::parse;
pub use crate::visit::NodeVisitor;
