//! Dictionary-aware English word tokenization
//!
//! Running English text is cut into words, punctuation, hyphens and
//! apostrophe fragments ready for grammatical analysis. Every token borrows
//! from the input, and the tokens of one call concatenate back to the input
//! exactly.
//!
//! # Pipeline
//!
//! 1. Apostrophes are guarded so delimiter splitting never cuts at them.
//! 2. Text is split into segments and single-character delimiters.
//! 3. Each segment goes through the contraction rules (`couldn't` → `could`
//!    `n't`), then through the hyphen/apostrophe resolver which consults a
//!    lexicon to decide whether `well-known` or `o'clock` stays whole.
//! 4. Email addresses and URLs split by punctuation are joined again.
//!
//! # Example
//!
//! ```rust
//! use engtok_core::{EnglishWordTokenizer, WordTokenizer};
//!
//! let tokenizer = EnglishWordTokenizer::new();
//! let tokens = tokenizer.tokenize("I couldn't find a well-known cafe.");
//!
//! let words: Vec<&str> = tokens
//!     .iter()
//!     .map(|t| t.as_str())
//!     .filter(|t| !t.trim().is_empty())
//!     .collect();
//! assert_eq!(
//!     words,
//!     ["I", "could", "n't", "find", "a", "well-known", "cafe", "."]
//! );
//! ```

pub mod config;
pub mod contraction;
pub mod error;
pub mod guard;
pub mod joiner;
pub mod lexicon;
pub mod resolver;
pub mod splitter;
pub mod token;
pub mod tokenizer;

pub use config::{TokenizerConfig, TokenizerConfigBuilder};
pub use contraction::{ContractionMatch, ContractionMatcher, ContractionRule};
pub use error::{Result, TokenizerError};
pub use guard::ApostropheGuard;
pub use joiner::EmailUrlJoiner;
pub use lexicon::{AnalyzedWord, LexiconAccess, Reading, SharedTagger, Tagger, WordList};
pub use resolver::{HyphenResolver, SegmentShape};
pub use splitter::{DelimiterSet, EN_DASH};
pub use token::Token;
pub use tokenizer::{EnglishWordTokenizer, GenericWordTokenizer, WordTokenizer};
