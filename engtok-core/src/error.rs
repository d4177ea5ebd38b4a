//! Error types for building tokenizers
//!
//! Tokenization itself is total and never fails. Errors only arise while
//! loading configuration or lexicon data.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while constructing a tokenizer
#[derive(Debug, Error)]
pub enum TokenizerError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// A config or lexicon file could not be read
    #[error("Failed to read '{}': {source}", path.display())]
    Io {
        /// File that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Malformed lexicon entry
    #[error("Invalid lexicon entry at line {line}: {message}")]
    Lexicon {
        /// 1-based line number
        line: usize,
        /// What is wrong with the entry
        message: String,
    },

    /// Config file is not valid TOML for the expected schema
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for tokenizer construction
pub type Result<T> = std::result::Result<T, TokenizerError>;
