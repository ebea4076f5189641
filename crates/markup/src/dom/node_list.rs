//! Ordered node sequence with persistent updates.

use std::ops::Index;
use std::sync::{Arc, LazyLock};

use super::Node;

static EMPTY: LazyLock<NodeList> = LazyLock::new(|| NodeList {
    nodes: Vec::new().into(),
});

/// An ordered, immutable sequence of [`Node`] that is itself a node.
///
/// A list never directly contains another list: range construction and
/// [`NodeList::add`] splice a list argument's elements into the parent
/// sequence. Update operations return new lists sharing the untouched
/// elements; all empty results collapse to one shared empty instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeList {
    nodes: Arc<[Node]>,
}

impl NodeList {
    /// The shared empty list.
    pub fn empty() -> NodeList {
        EMPTY.clone()
    }

    /// Builds a list from nodes, splicing any `Node::List` argument into the
    /// sequence.
    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> NodeList {
        let mut flat = Vec::new();
        for node in nodes {
            push_flattened(&mut flat, node);
        }
        NodeList::wrap_new(flat)
    }

    /// Appends a node; appending a list appends each of its elements.
    pub fn add(&self, node: Node) -> NodeList {
        if let Node::List(list) = &node {
            if list.is_empty() {
                return self.clone();
            }
        }
        let mut nodes = self.nodes.to_vec();
        push_flattened(&mut nodes, node);
        NodeList::wrap_new(nodes)
    }

    /// Removes the first occurrence of `node` by identity; removing a list
    /// removes each of its elements. Returns `self` unchanged when nothing
    /// matched.
    pub fn remove(&self, node: &Node) -> NodeList {
        match node {
            Node::List(list) => {
                let mut nodes = self.nodes.to_vec();
                let mut removed = false;
                for target in list {
                    if let Some(index) = nodes.iter().position(|n| n.ptr_eq(target)) {
                        nodes.remove(index);
                        removed = true;
                    }
                }
                if removed {
                    NodeList::wrap_new(nodes)
                } else {
                    self.clone()
                }
            }
            node => match self.nodes.iter().position(|n| n.ptr_eq(node)) {
                Some(index) => {
                    let mut nodes = self.nodes.to_vec();
                    nodes.remove(index);
                    NodeList::wrap_new(nodes)
                }
                None => self.clone(),
            },
        }
    }

    /// The shared empty list.
    pub fn clear(&self) -> NodeList {
        NodeList::empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn first(&self) -> Option<&Node> {
        self.nodes.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Whether `self` and `other` are the same shared sequence.
    pub fn ptr_eq(&self, other: &NodeList) -> bool {
        Arc::ptr_eq(&self.nodes, &other.nodes)
    }

    fn wrap_new(nodes: Vec<Node>) -> NodeList {
        if nodes.is_empty() {
            NodeList::empty()
        } else {
            NodeList {
                nodes: nodes.into(),
            }
        }
    }
}

fn push_flattened(flat: &mut Vec<Node>, node: Node) {
    match node {
        // lists never nest, so one level is enough
        Node::List(list) => flat.extend(list.iter().cloned()),
        node => flat.push(node),
    }
}

impl Default for NodeList {
    fn default() -> NodeList {
        NodeList::empty()
    }
}

impl FromIterator<Node> for NodeList {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> NodeList {
        NodeList::from_nodes(iter)
    }
}

impl Index<usize> for NodeList {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.nodes[index]
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
