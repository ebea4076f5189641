//! Parse and construction errors.

use std::error::Error;
use std::fmt;

/// Reason a fragment failed to parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseErrorCode {
    /// `<!--` without a matching `-->`.
    UnterminatedComment,
    /// Input ended where the grammar required more.
    UnexpectedEndOfInput,
    /// Tag position without a leading alphanumeric name run.
    InvalidElementName,
    /// Element or closing tag missing its `>`.
    UnterminatedElement,
    /// Closing tag name does not match the open element.
    MismatchedClosingTag,
    /// Attribute position without a terminated name run.
    InvalidAttributeName,
    /// Character that cannot start an attribute name inside a tag.
    InvalidCharacterInTag {
        /// The offending character.
        found: char,
    },
    /// Quote directly after an attribute name, without `=`.
    QuoteAfterAttributeName,
    /// Quoted attribute value without its closing quote.
    UnterminatedAttributeValue,
    /// `=` followed by a zero-length unquoted value.
    EmptyAttributeValue,
}

impl ParseErrorCode {
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnterminatedComment => "comment has no closing sequence",
            Self::UnexpectedEndOfInput => "unexpected end of input",
            Self::InvalidElementName => "element must have a non-empty alphanumeric name",
            Self::UnterminatedElement => "element is not properly closed",
            Self::MismatchedClosingTag => "closing tag does not match the open element",
            Self::InvalidAttributeName => "attribute name cannot be empty",
            Self::InvalidCharacterInTag { .. } => "tag cannot contain this character",
            Self::QuoteAfterAttributeName => "attribute name cannot be followed by a quote",
            Self::UnterminatedAttributeValue => "attribute value is not closed",
            Self::EmptyAttributeValue => "attribute has no value",
        }
    }
}

/// Fatal parse failure at a byte position in the input.
///
/// Parsing never produces a partial tree: the first malformed construct
/// aborts the whole parse with one of these.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub code: ParseErrorCode,
    /// Byte offset into the input at which the error was detected.
    pub position: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            ParseErrorCode::InvalidCharacterInTag { found } => {
                write!(f, "tag cannot contain {found:?} at byte {}", self.position)
            }
            code => write!(f, "{} at byte {}", code.label(), self.position),
        }
    }
}

impl Error for ParseError {}

/// Rejected construction argument: an element or attribute name that is
/// empty or all-whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidName {
    Element,
    Attribute,
}

impl fmt::Display for InvalidName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element => f.write_str("element name cannot be empty or whitespace"),
            Self::Attribute => f.write_str("attribute name cannot be empty or whitespace"),
        }
    }
}

impl Error for InvalidName {}
