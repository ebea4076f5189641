//! Tree-to-text serialization.
//!
//! Attribute values are always emitted double-quoted, regardless of how the
//! source quoted them; the values were entity-escaped at construction, so
//! they are written verbatim here. Names starting with `?` or `!` close as
//! `?>` / `>` with no children and no closing tag — those forms are only
//! reachable through hand-built trees, never from the parser.

use std::fmt::{self, Write};

use crate::dom::{Comment, Element, Node, NodeList, Text};

impl Node {
    /// Writes the serialized form of this node into `out`.
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        match self {
            Node::Text(text) => text.write_to(out),
            Node::Comment(comment) => comment.write_to(out),
            Node::Element(element) => element.write_to(out),
            Node::List(list) => list.write_to(out),
        }
    }
}

impl Text {
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str(self.value())
    }
}

impl Comment {
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        out.write_str("<!--")?;
        out.write_str(self.value())?;
        out.write_str("-->")
    }
}

impl NodeList {
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        for node in self {
            node.write_to(out)?;
        }
        Ok(())
    }
}

impl Element {
    pub fn write_to(&self, out: &mut impl Write) -> fmt::Result {
        let name = self.name();
        out.write_char('<')?;
        out.write_str(name)?;
        for attribute in self.attributes().iter() {
            out.write_char(' ')?;
            out.write_str(attribute.name())?;
            if let Some(value) = attribute.value() {
                out.write_str("=\"")?;
                out.write_str(value)?;
                out.write_char('"')?;
            }
        }
        if self.is_void() {
            // a hand-built void element may carry children; they are not written
            out.write_str("/>")
        } else if name.starts_with('?') {
            out.write_str("?>")
        } else if name.starts_with('!') {
            out.write_char('>')
        } else {
            out.write_char('>')?;
            self.children().write_to(out)?;
            out.write_str("</")?;
            out.write_str(name)?;
            out.write_char('>')
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for Comment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}

impl fmt::Display for NodeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to(f)
    }
}
