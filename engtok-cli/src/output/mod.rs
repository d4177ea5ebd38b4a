//! Output formatting module

use anyhow::Result;
use std::borrow::Cow;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the tokens of a new input document
    fn begin_document(&mut self, _name: &str) -> Result<()> {
        Ok(())
    }

    /// Format and output a single token
    fn format_token(&mut self, token: &str, offset: usize) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Token text safe to print on one line
///
/// Tokens holding whitespace or control characters are escaped.
pub fn printable(token: &str) -> Cow<'_, str> {
    if token.chars().any(|ch| ch.is_whitespace() || ch.is_control()) {
        Cow::Owned(token.escape_debug().to_string())
    } else {
        Cow::Borrowed(token)
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable() {
        assert_eq!(printable("word"), "word");
        assert_eq!(printable("n’t"), "n’t");
        assert_eq!(printable(" "), " ");
        assert_eq!(printable("\n"), "\\n");
        assert_eq!(printable("\t"), "\\t");
    }
}
