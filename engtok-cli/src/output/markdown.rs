//! Markdown output formatter

use super::{printable, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs tokens as a numbered list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    document_tokens: usize,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            document_tokens: 0,
            token_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        if self.token_count > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        self.document_tokens = 0;
        Ok(())
    }

    fn format_token(&mut self, token: &str, _offset: usize) -> Result<()> {
        self.document_tokens += 1;
        self.token_count += 1;
        let text = printable(token);
        if text.contains('`') {
            // Padded double-backtick span for tokens holding a backtick
            writeln!(self.writer, "{}. `` {} ``", self.document_tokens, text)?;
        } else {
            writeln!(self.writer, "{}. `{}`", self.document_tokens, text)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
