use super::parse;
use crate::dom::{Attribute, AttributeList, Node, NodeList};
use crate::error::ParseErrorCode;

fn parse_one(input: &str) -> Node {
    parse(input)
        .unwrap_or_else(|err| panic!("{input:?} must parse: {err}"))
        .unwrap_or_else(|| panic!("{input:?} must produce a node"))
}

fn parse_err(input: &str) -> crate::error::ParseError {
    match parse(input) {
        Err(err) => err,
        Ok(node) => panic!("{input:?} must be rejected, got {node:?}"),
    }
}

fn element(name: &str, attributes: AttributeList, children: NodeList) -> Node {
    Node::element(name, attributes, children).expect("valid element name")
}

fn attrs(pairs: &[(&str, &str)]) -> AttributeList {
    AttributeList::from_attributes(
        pairs
            .iter()
            .map(|(name, value)| Attribute::new(*name, *value).expect("valid attribute name")),
    )
}

#[test]
fn empty_and_whitespace_only_input_produce_nothing() {
    assert_eq!(parse(""), Ok(None));
    assert_eq!(parse("  \t\r\n "), Ok(None));
}

#[test]
fn parses_a_bare_element() {
    let node = parse_one("<p></p>");
    assert_eq!(node, element("p", AttributeList::empty(), NodeList::empty()));
}

#[test]
fn quoting_styles_produce_the_same_tree() {
    let expected = element("p", attrs(&[("class", "white")]), NodeList::empty());
    assert_eq!(parse_one("<p class=white></p>"), expected);
    assert_eq!(parse_one("<p class='white'></p>"), expected);
    assert_eq!(parse_one(r#"<p class="white"></p>"#), expected);
}

#[test]
fn duplicate_attributes_keep_the_last_value() {
    let node = parse_one(r#"<p class="a" class="b"></p>"#);
    let element = node.as_element().expect("element");
    assert_eq!(element.attributes().len(), 1);
    assert_eq!(
        element.attributes().get("class").and_then(|a| a.value()),
        Some("b")
    );
}

#[test]
fn attribute_lookup_and_closing_tags_ignore_ascii_case() {
    let node = parse_one("<p CLASS=white></P>");
    let element = node.as_element().expect("element");
    assert_eq!(element.attributes().get("class").and_then(|a| a.value()), Some("white"));
    // the opening name's case is preserved
    assert_eq!(element.name(), "p");
}

#[test]
fn bare_attributes_parse_without_a_value() {
    let node = parse_one("<input checked disabled>");
    let element = node.as_element().expect("element");
    assert_eq!(element.attributes().len(), 2);
    assert_eq!(element.attributes().get("checked").and_then(|a| a.value()), None);
}

#[test]
fn empty_quoted_attribute_values_are_kept() {
    let node = parse_one(r#"<p class=""></p>"#);
    let element = node.as_element().expect("element");
    assert_eq!(element.attributes().get("class").and_then(|a| a.value()), Some(""));
    assert_eq!(node.to_string(), r#"<p class=""></p>"#);
}

#[test]
fn quotes_inside_attribute_values_are_escaped() {
    let node = parse_one(r#"<p title='say "hi"'></p>"#);
    let element = node.as_element().expect("element");
    assert_eq!(
        element.attributes().get("title").and_then(|a| a.value()),
        Some("say &quot;hi&quot;")
    );
}

#[test]
fn void_element_closing_is_flexible() {
    let expected = element("img", AttributeList::empty(), NodeList::empty());
    assert_eq!(parse_one("<img>"), expected);
    assert_eq!(parse_one("<img/>"), expected);
    assert_eq!(parse_one("<img />"), expected);
    assert_eq!(parse_one("<IMG>"), element("IMG", AttributeList::empty(), NodeList::empty()));
}

#[test]
fn nested_elements_parse_in_order() {
    let node = parse_one("<ul><li>a</li><li>b</li></ul>");
    let expected = element(
        "ul",
        AttributeList::empty(),
        NodeList::from_nodes([
            element(
                "li",
                AttributeList::empty(),
                NodeList::from_nodes([Node::text("a")]),
            ),
            element(
                "li",
                AttributeList::empty(),
                NodeList::from_nodes([Node::text("b")]),
            ),
        ]),
    );
    assert_eq!(node, expected);
}

#[test]
fn several_top_level_siblings_become_a_list() {
    let node = parse_one("a<br>b");
    let list = node.as_list().expect("list");
    assert_eq!(list.len(), 3);
    assert_eq!(list[0], Node::text("a"));
    assert_eq!(list[2], Node::text("b"));

    // a single node is unwrapped even with surrounding whitespace
    let node = parse_one("  <p></p>  ");
    assert!(node.as_element().is_some());
}

#[test]
fn whitespace_between_tags_is_elided() {
    assert_eq!(
        parse_one("<ul> <li>a</li>\r\n\t<li>b</li> </ul>"),
        parse_one("<ul><li>a</li><li>b</li></ul>")
    );
    assert_eq!(
        parse_one("<p> </p>"),
        element("p", AttributeList::empty(), NodeList::empty())
    );
}

#[test]
fn text_content_keeps_its_leading_whitespace() {
    let node = parse_one("<p> x</p>");
    let children = node.as_element().expect("element").children();
    assert_eq!(children[0], Node::text(" x"));
}

#[test]
fn comments_parse_verbatim() {
    assert_eq!(parse_one("<!-- a < b -->"), Node::comment(" a < b "));

    let node = parse_one("<p><!--note-->x</p>");
    let children = node.as_element().expect("element").children();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0], Node::comment("note"));
}

#[test]
fn entities_pass_through_as_text() {
    let node = parse_one("<span>&nbsp;</span>");
    let children = node.as_element().expect("element").children();
    assert_eq!(children[0], Node::text("&nbsp;"));
}

#[test]
fn whitespace_inside_tags_is_tolerated() {
    let expected = element("p", attrs(&[("class", "a")]), NodeList::empty());
    assert_eq!(parse_one("< p class = a ></ p >"), expected);
}

#[test]
fn multibyte_text_is_preserved() {
    let node = parse_one("<span>Nastaviteľný kľúč.</span>");
    let children = node.as_element().expect("element").children();
    assert_eq!(children[0], Node::text("Nastaviteľný kľúč."));
}

#[test]
fn rejects_malformed_fragments() {
    let cases: &[(&str, ParseErrorCode)] = &[
        ("<", ParseErrorCode::UnexpectedEndOfInput),
        ("<p", ParseErrorCode::InvalidElementName),
        ("<p ", ParseErrorCode::UnexpectedEndOfInput),
        ("<p>", ParseErrorCode::UnexpectedEndOfInput),
        ("<p>x", ParseErrorCode::UnexpectedEndOfInput),
        ("<p>  ", ParseErrorCode::UnexpectedEndOfInput),
        ("<p/>", ParseErrorCode::UnterminatedElement),
        ("<p></x>", ParseErrorCode::MismatchedClosingTag),
        ("<p></px>", ParseErrorCode::UnterminatedElement),
        ("<img></img>", ParseErrorCode::InvalidElementName),
        ("<img/", ParseErrorCode::UnexpectedEndOfInput),
        ("<p class=></p>", ParseErrorCode::EmptyAttributeValue),
        ("<p class= ></p>", ParseErrorCode::EmptyAttributeValue),
        ("<p class=a", ParseErrorCode::EmptyAttributeValue),
        ("<p=>", ParseErrorCode::InvalidCharacterInTag { found: '=' }),
        ("<p-></p>", ParseErrorCode::InvalidCharacterInTag { found: '-' }),
        ("<p:></p>", ParseErrorCode::InvalidCharacterInTag { found: ':' }),
        ("<p=tag></p>", ParseErrorCode::InvalidCharacterInTag { found: '=' }),
        ("<p class\"></p>", ParseErrorCode::QuoteAfterAttributeName),
        ("<p class'></p>", ParseErrorCode::QuoteAfterAttributeName),
        ("<p class='a></p>", ParseErrorCode::UnterminatedAttributeValue),
        ("<!-- no close", ParseErrorCode::UnterminatedComment),
    ];
    for (input, expected) in cases {
        let err = parse_err(input);
        assert_eq!(err.code, *expected, "wrong code for {input:?}");
    }
}

#[test]
fn error_positions_point_into_the_input() {
    let err = parse_err("ab<");
    assert_eq!(err.code, ParseErrorCode::UnexpectedEndOfInput);
    assert_eq!(err.position, 3);

    let err = parse_err("<p><!-- oops</p>");
    assert_eq!(err.code, ParseErrorCode::UnterminatedComment);
    assert_eq!(err.position, 3);
}

#[test]
fn parse_never_returns_a_partial_tree() {
    // the first sibling is fine; the second is malformed
    let err = parse_err("<p>a</p><p");
    assert_eq!(err.code, ParseErrorCode::InvalidElementName);
}

#[test]
fn round_trip_preserves_structure() {
    let inputs = [
        "<p></p>",
        "<p class=white>abcd</p>",
        "<ul><li><span>Nastaviteľný kľúč.</span></li><li><span>&nbsp;</span></li></ul>",
        r#"<table border="0" cellspacing="0"><tr style="height:15.75pt;"><td>x</td></tr></table>"#,
        "a<!--b--><br>c",
    ];
    for input in inputs {
        let first = parse_one(input);
        let second = parse_one(&first.to_string());
        assert_eq!(first, second, "round trip must be stable for {input:?}");
    }
}

#[test]
fn node_parse_is_the_same_entry_point() {
    assert_eq!(Node::parse("<p></p>"), parse("<p></p>"));
}
