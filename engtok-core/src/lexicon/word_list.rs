//! In-memory word list lexicon
//!
//! Entries are read from a plain-text format, one per line:
//! `word[<TAB>lemma[<TAB>pos]]`. Blank lines and `#` comments are skipped.

use super::{AnalyzedWord, Reading};
use crate::error::{Result, TokenizerError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::OnceLock;

static ENGLISH: OnceLock<WordList> = OnceLock::new();

const ENGLISH_LEXICON: &str = include_str!("../../configs/lexicon/english.tsv");

/// Immutable-after-load lexicon keyed by exact word form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: HashMap<String, Vec<Reading>>,
}

impl WordList {
    /// Empty lexicon, every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Builtin English lexicon, parsed once per process
    pub fn english() -> &'static WordList {
        ENGLISH.get_or_init(|| {
            WordList::parse(ENGLISH_LEXICON).expect("embedded English lexicon must be valid")
        })
    }

    /// Parse lexicon text
    pub fn parse(content: &str) -> Result<Self> {
        let mut list = Self::new();

        for (index, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim_end_matches('\r');
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            let mut fields = line.split('\t');
            let word = fields.next().unwrap_or_default().trim();
            if word.is_empty() {
                return Err(TokenizerError::Lexicon {
                    line: index + 1,
                    message: "missing word form".to_string(),
                });
            }

            let lemma = fields
                .next()
                .map(str::trim)
                .filter(|lemma| !lemma.is_empty())
                .unwrap_or(word);
            let pos_tag = fields
                .next()
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string);

            if fields.next().is_some() {
                return Err(TokenizerError::Lexicon {
                    line: index + 1,
                    message: "expected at most three tab-separated fields".to_string(),
                });
            }

            list.insert(
                word,
                Reading {
                    lemma: lemma.to_string(),
                    pos_tag,
                },
            );
        }

        Ok(list)
    }

    /// Load a lexicon file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TokenizerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&content)?;
        log::debug!(
            "Loaded {} lexicon entries from {}",
            list.len(),
            path.display()
        );
        Ok(list)
    }

    /// Add a reading for `word`, ignoring exact duplicates
    pub fn insert(&mut self, word: &str, reading: Reading) {
        let readings = self.entries.entry(word.to_string()).or_default();
        if !readings.contains(&reading) {
            readings.push(reading);
        }
    }

    /// Merge all entries of `other` into this list
    pub fn extend(&mut self, other: WordList) {
        for (word, readings) in other.entries {
            for reading in readings {
                self.insert(&word, reading);
            }
        }
    }

    /// Look up a word form, falling back to its lowercase form
    pub fn lookup(&self, word: &str) -> AnalyzedWord {
        let readings = self.entries.get(word).or_else(|| {
            let lower = word.to_lowercase();
            (lower != word)
                .then(|| self.entries.get(&lower))
                .flatten()
        });

        AnalyzedWord {
            word: word.to_string(),
            readings: readings.cloned().unwrap_or_default(),
        }
    }

    /// Whether the exact or lowercase form is known
    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_tagged()
    }

    /// Number of distinct word forms
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
