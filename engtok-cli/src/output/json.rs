//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one entry per document with its tokens
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Tokens of one input document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Input file name
    pub file: String,
    pub tokens: Vec<TokenData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// The token text
    pub text: String,
    /// Byte offset in the original text
    pub offset: usize,
    /// Length of the token in bytes
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        self.documents.push(DocumentData {
            file: name.to_string(),
            tokens: Vec::new(),
        });
        Ok(())
    }

    fn format_token(&mut self, token: &str, offset: usize) -> Result<()> {
        if self.documents.is_empty() {
            self.begin_document("")?;
        }
        if let Some(document) = self.documents.last_mut() {
            document.tokens.push(TokenData {
                text: token.to_string(),
                offset,
                length: token.len(),
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
