//! Forward-only cursor over a fragment string.

use memchr::{memchr, memmem};

use crate::error::{ParseError, ParseErrorCode};

/// Read-only view over the unconsumed remainder of the input.
///
/// Invariant: `offset` is a byte position into the original string and
/// always sits on a UTF-8 boundary.
#[derive(Debug)]
pub(super) struct Cursor<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(super) fn new(input: &'a str) -> Cursor<'a> {
        Cursor { input, offset: 0 }
    }

    /// The unconsumed remainder.
    pub(super) fn rest(&self) -> &'a str {
        &self.input[self.offset..]
    }

    pub(super) fn is_empty(&self) -> bool {
        self.offset == self.input.len()
    }

    /// Byte position of the next unconsumed character.
    pub(super) fn position(&self) -> usize {
        self.offset
    }

    pub(super) fn advance(&mut self, bytes: usize) {
        debug_assert!(
            self.input.is_char_boundary(self.offset + bytes),
            "cursor must stay on UTF-8 boundaries"
        );
        self.offset += bytes;
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    pub(super) fn starts_with_ignore_ascii_case(&self, prefix: &str) -> bool {
        let rest = self.rest().as_bytes();
        rest.len() >= prefix.len() && rest[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    }

    /// Byte offset of `byte` in the remainder.
    pub(super) fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr(byte, self.rest().as_bytes())
    }

    /// Byte offset of `needle` in the remainder.
    pub(super) fn find(&self, needle: &str) -> Option<usize> {
        memmem::find(self.rest().as_bytes(), needle.as_bytes())
    }

    /// Consumes and returns the next `bytes` bytes.
    pub(super) fn take(&mut self, bytes: usize) -> &'a str {
        let taken = &self.rest()[..bytes];
        self.advance(bytes);
        taken
    }

    /// Consumes and returns the remainder.
    pub(super) fn take_rest(&mut self) -> &'a str {
        let taken = self.rest();
        self.offset = self.input.len();
        taken
    }

    /// Consumes the maximal leading run of ASCII alphanumerics. Returns an
    /// empty slice, consuming nothing, when the run is empty or would extend
    /// to the end of the input.
    pub(super) fn take_alphanumeric_run(&mut self) -> &'a str {
        self.take_until(|ch| !ch.is_ascii_alphanumeric())
    }

    /// Consumes up to the first char matching `terminator`. Returns an empty
    /// slice, consuming nothing, when no char matches.
    pub(super) fn take_until(&mut self, terminator: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        for (index, ch) in rest.char_indices() {
            if terminator(ch) {
                self.advance(index);
                return &rest[..index];
            }
        }
        ""
    }

    /// Consumes leading whitespace.
    pub(super) fn trim_start(&mut self) {
        let rest = self.rest();
        self.offset += rest.len() - rest.trim_start().len();
    }

    /// Fails with `UnexpectedEndOfInput` when nothing remains.
    pub(super) fn expect_more(&self) -> Result<(), ParseError> {
        if self.is_empty() {
            Err(self.error(ParseErrorCode::UnexpectedEndOfInput))
        } else {
            Ok(())
        }
    }

    /// Consumes leading whitespace, then fails when nothing remains.
    pub(super) fn expect_more_trimmed(&mut self) -> Result<(), ParseError> {
        self.trim_start();
        self.expect_more()
    }

    pub(super) fn error(&self, code: ParseErrorCode) -> ParseError {
        ParseError {
            code,
            position: self.offset,
        }
    }
}
