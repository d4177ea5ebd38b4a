//! Token type shared by every stage of the pipeline

use serde::Serialize;
use std::fmt;
use std::ops::Range;

/// A slice of the original input together with its byte offset
///
/// Tokens never own text. Every token produced by a tokenizer borrows from the
/// input string, and the tokens of one call tile the input without gaps or
/// overlaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Token<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Token<'a> {
    /// Create a token for `text` starting at byte `offset` of the source
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// Token covering a whole source string
    pub fn whole(source: &'a str) -> Self {
        Self::new(source, 0)
    }

    /// The token text
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the first character in the source
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Byte offset one past the last character in the source
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token covers no text
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Source range covered by the token
    pub fn span(&self) -> Range<usize> {
        self.offset..self.end()
    }

    /// Whether the token consists only of whitespace
    pub fn is_whitespace(&self) -> bool {
        !self.text.is_empty() && self.text.chars().all(char::is_whitespace)
    }

    /// Sub-token for a byte range relative to this token
    ///
    /// The range must lie on character boundaries.
    pub fn slice(&self, range: Range<usize>) -> Self {
        Self::new(&self.text[range.clone()], self.offset + range.start)
    }

    /// Split into two tokens at a byte index relative to this token
    pub fn split_at(&self, mid: usize) -> (Self, Self) {
        let (head, tail) = self.text.split_at(mid);
        (
            Self::new(head, self.offset),
            Self::new(tail, self.offset + mid),
        )
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq<str> for Token<'_> {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

/// Collect the text of each token, mostly useful in tests and output code
pub fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens.iter().map(Token::as_str).collect()
}
