//! Generic depth-first tree rewriting.
//!
//! Default hooks are identity at every level: a visitor that overrides
//! nothing returns the same shared instances it was given and allocates
//! nothing. Rebuilds happen only where a hook actually changed something,
//! detected through `ptr_eq` against the original.

use crate::dom::{Attribute, AttributeList, Comment, Element, Node, NodeList, Text};

pub trait NodeVisitor {
    /// Dispatches `node` to the per-variant visit method.
    fn visit(&mut self, node: &Node) -> Node {
        match node {
            Node::Comment(comment) => self.visit_comment(comment),
            Node::Element(element) => self.visit_element(element),
            Node::List(list) => Node::List(self.visit_node_list(list)),
            Node::Text(text) => self.visit_text(text),
        }
    }

    /// Visits a text node. Default: identity.
    fn visit_text(&mut self, text: &Text) -> Node {
        Node::Text(text.clone())
    }

    /// Visits a comment node. Default: identity.
    fn visit_comment(&mut self, comment: &Comment) -> Node {
        Node::Comment(comment.clone())
    }

    /// Visits an element: its children list first, then its attribute list.
    /// The element is rebuilt only when either came back changed.
    fn visit_element(&mut self, element: &Element) -> Node {
        let children = self.visit_node_list(element.children());
        let attributes = self.visit_attribute_list(element.attributes());
        if attributes.ptr_eq(element.attributes()) && children.ptr_eq(element.children()) {
            Node::Element(element.clone())
        } else {
            Node::Element(element.with(attributes, children))
        }
    }

    /// Visits one attribute; `None` removes it from the list. Default:
    /// identity.
    fn visit_attribute(&mut self, attribute: &Attribute) -> Option<Attribute> {
        Some(attribute.clone())
    }

    /// Visits every attribute of a list, rebuilding the list only when any
    /// attribute changed or was removed.
    fn visit_attribute_list(&mut self, list: &AttributeList) -> AttributeList {
        let mut changed = false;
        let mut visited = Vec::with_capacity(list.len());
        for attribute in list.iter() {
            match self.visit_attribute(attribute) {
                Some(result) => {
                    changed |= !result.ptr_eq(attribute);
                    visited.push(result);
                }
                None => changed = true,
            }
        }
        if changed {
            AttributeList::from_attributes(visited)
        } else {
            list.clone()
        }
    }

    /// Visits children in order with a copy-on-write rebuild: a new backing
    /// sequence is allocated only at the first child that came back
    /// different, and the original list is returned when none did.
    fn visit_node_list(&mut self, list: &NodeList) -> NodeList {
        let mut rebuilt: Option<Vec<Node>> = None;
        for (index, node) in list.iter().enumerate() {
            let visited = self.visit(node);
            if rebuilt.is_none() && !visited.ptr_eq(node) {
                let mut nodes = Vec::with_capacity(list.len());
                nodes.extend(list.iter().take(index).cloned());
                rebuilt = Some(nodes);
            }
            if let Some(nodes) = &mut rebuilt {
                nodes.push(visited);
            }
        }
        match rebuilt {
            Some(nodes) => NodeList::from_nodes(nodes),
            None => list.clone(),
        }
    }
}
