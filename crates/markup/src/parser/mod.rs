//! Recursive-descent parser for the fragment dialect.
//!
//! One forward pass over a byte-offset cursor, no lookahead beyond the kind
//! dispatch at the current position, no error recovery: the result is a
//! complete tree or a [`ParseError`].
//!
//! Whitespace-only runs between tags are discarded, not kept as text nodes.
//! Inside a tag, whitespace is allowed after `<`, around attribute names and
//! `=`, before `>`, and around the closing tag name; every such position
//! requires non-empty continuation.

mod cursor;
#[cfg(test)]
mod tests;

use cursor::Cursor;

use crate::dom::{Attribute, AttributeList, Element, Node, NodeList, is_void_element};
use crate::error::{ParseError, ParseErrorCode};

/// Parses a markup fragment.
///
/// Returns `Ok(None)` for empty or whitespace-only input, the single node
/// when the fragment has exactly one top-level node, and a [`Node::List`] of
/// the siblings otherwise.
pub fn parse(input: &str) -> Result<Option<Node>, ParseError> {
    let mut cursor = Cursor::new(input);
    let mut list = NodeList::empty();
    loop {
        match parse_node(&mut cursor)? {
            Step::Node(node) => list = list.add(node),
            Step::SkippedWhitespace => {}
            Step::Exhausted => break,
        }
    }
    Ok(match list.len() {
        0 => None,
        1 => list.first().cloned(),
        _ => Some(Node::List(list)),
    })
}

/// Outcome of one dispatch attempt at the current position.
enum Step {
    /// A complete node was produced.
    Node(Node),
    /// A whitespace-only run before `<` was discarded; the cursor advanced
    /// and dispatch must be retried.
    SkippedWhitespace,
    /// Nothing remains that could begin a node.
    Exhausted,
}

/// Tries text, comment, element at the cursor, in that order.
fn parse_node(cursor: &mut Cursor<'_>) -> Result<Step, ParseError> {
    if cursor.is_empty() {
        return Ok(Step::Exhausted);
    }
    match parse_text(cursor) {
        TextStep::Node(node) => return Ok(Step::Node(node)),
        TextStep::Skipped => return Ok(Step::SkippedWhitespace),
        TextStep::None => {}
    }
    if let Some(node) = parse_comment(cursor)? {
        return Ok(Step::Node(node));
    }
    if let Some(node) = parse_element(cursor)? {
        return Ok(Step::Node(node));
    }
    Ok(Step::Exhausted)
}

enum TextStep {
    Node(Node),
    /// The run before `<` was all whitespace and was discarded.
    Skipped,
    /// The position cannot start a text node.
    None,
}

fn parse_text(cursor: &mut Cursor<'_>) -> TextStep {
    match cursor.find_byte(b'<') {
        // no markup ahead: the remainder is text unless it is all whitespace
        None => {
            if cursor.rest().trim().is_empty() {
                TextStep::None
            } else {
                TextStep::Node(Node::text(cursor.take_rest()))
            }
        }
        Some(0) => TextStep::None,
        Some(start) => {
            let slice = cursor.take(start);
            if slice.trim().is_empty() {
                TextStep::Skipped
            } else {
                TextStep::Node(Node::text(slice))
            }
        }
    }
}

fn parse_comment(cursor: &mut Cursor<'_>) -> Result<Option<Node>, ParseError> {
    if !cursor.starts_with("<!--") {
        return Ok(None);
    }
    let open = cursor.position();
    cursor.advance(4);
    let Some(end) = cursor.find("-->") else {
        return Err(ParseError {
            code: ParseErrorCode::UnterminatedComment,
            position: open,
        });
    };
    let value = cursor.take(end);
    cursor.advance(3);
    log::trace!(target: "markup.parser", "comment node, {} bytes", value.len());
    Ok(Some(Node::comment(value)))
}

fn parse_element(cursor: &mut Cursor<'_>) -> Result<Option<Node>, ParseError> {
    if !cursor.starts_with("<") {
        return Ok(None);
    }
    cursor.advance(1);
    cursor.expect_more_trimmed()?;

    let name = cursor.take_alphanumeric_run();
    if name.is_empty() {
        return Err(cursor.error(ParseErrorCode::InvalidElementName));
    }

    let attributes = parse_attribute_list(cursor)?;
    cursor.expect_more_trimmed()?;

    // a void element closes with an optional '/' and a mandatory '>';
    // no children are parsed and no closing tag is expected
    if is_void_element(name) {
        if cursor.peek() == Some('/') {
            cursor.advance(1);
            cursor.expect_more_trimmed()?;
        }
        if cursor.peek() == Some('>') {
            cursor.advance(1);
            log::trace!(target: "markup.parser", "void element <{name}>");
            return Ok(Some(element_node(name, attributes, NodeList::empty())));
        }
        return Err(cursor.error(ParseErrorCode::UnterminatedElement));
    }

    // a non-void tag cannot self-close
    if cursor.peek() != Some('>') {
        return Err(cursor.error(ParseErrorCode::UnterminatedElement));
    }
    cursor.advance(1);
    cursor.expect_more()?;

    let mut children = NodeList::empty();
    while !cursor.starts_with("</") {
        match parse_node(cursor)? {
            Step::Node(child) => {
                children = children.add(child);
                cursor.trim_start();
            }
            // re-check for the closing tag from the new position
            Step::SkippedWhitespace => {}
            Step::Exhausted => {
                return Err(cursor.error(ParseErrorCode::UnexpectedEndOfInput));
            }
        }
    }

    cursor.advance(2);
    cursor.expect_more_trimmed()?;
    if !cursor.starts_with_ignore_ascii_case(name) {
        return Err(cursor.error(ParseErrorCode::MismatchedClosingTag));
    }
    cursor.advance(name.len());
    cursor.expect_more_trimmed()?;
    if cursor.peek() != Some('>') {
        return Err(cursor.error(ParseErrorCode::UnterminatedElement));
    }
    cursor.advance(1);

    log::trace!(
        target: "markup.parser",
        "element <{name}> with {} children",
        children.len()
    );
    Ok(Some(element_node(name, attributes, children)))
}

/// Repeats until the next significant character is `>` or `/`.
fn parse_attribute_list(cursor: &mut Cursor<'_>) -> Result<AttributeList, ParseError> {
    let mut attributes = AttributeList::empty();
    while !cursor.is_empty() {
        cursor.expect_more_trimmed()?;
        let Some(ch) = cursor.peek() else { break };
        if ch == '>' || ch == '/' {
            return Ok(attributes);
        }
        if !ch.is_ascii_alphanumeric() {
            return Err(cursor.error(ParseErrorCode::InvalidCharacterInTag { found: ch }));
        }

        let name = cursor.take_until(is_name_terminator);
        if name.is_empty() {
            return Err(cursor.error(ParseErrorCode::InvalidAttributeName));
        }
        cursor.expect_more_trimmed()?;

        match cursor.peek() {
            Some('\'' | '"') => {
                return Err(cursor.error(ParseErrorCode::QuoteAfterAttributeName));
            }
            Some('=') => {
                cursor.advance(1);
                let value = parse_attribute_value(cursor)?;
                attributes = attributes.set(Attribute::from_parts(name.into(), Some(value)));
            }
            _ => {
                attributes = attributes.set(Attribute::from_parts(name.into(), None));
            }
        }
    }
    Ok(attributes)
}

fn parse_attribute_value(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    cursor.expect_more_trimmed()?;
    match cursor.peek() {
        Some(quote @ ('\'' | '"')) => {
            cursor.advance(1);
            let Some(end) = cursor.find_byte(quote as u8) else {
                return Err(cursor.error(ParseErrorCode::UnterminatedAttributeValue));
            };
            // the captured text, possibly empty, is the value
            let value = cursor.take(end).to_string();
            cursor.advance(1);
            Ok(value)
        }
        _ => {
            let value = cursor.take_until(is_unquoted_value_terminator);
            if value.is_empty() {
                return Err(cursor.error(ParseErrorCode::EmptyAttributeValue));
            }
            Ok(value.to_string())
        }
    }
}

fn element_node(name: &str, attributes: AttributeList, children: NodeList) -> Node {
    Node::Element(Element::from_parts(name.into(), attributes, children))
}

fn is_name_terminator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '=' | '/' | '>' | '\'' | '"')
}

fn is_unquoted_value_terminator(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '=' | '/' | '>' | '\'' | '"' | '<' | '`')
}
