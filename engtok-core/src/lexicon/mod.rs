//! Dictionary lookup used to decide whether a hyphenated or apostrophed
//! segment is a known word form
//!
//! A [`Tagger`] answers single-word lookups and may keep internal state, so it
//! takes `&mut self`. Tokenizers reach it through a [`LexiconAccess`], which
//! decides how access is scoped: [`SharedTagger`] serializes callers with a
//! mutex, while an immutable [`WordList`] hands out a lock-free handle.

mod word_list;

pub use word_list::WordList;

use std::sync::{Mutex, PoisonError};

/// One morphological reading of a word form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reading {
    /// Base form
    pub lemma: String,
    /// Part-of-speech tag, if the lexicon provides one
    pub pos_tag: Option<String>,
}

/// Result of tagging a single word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzedWord {
    /// The queried form
    pub word: String,
    /// Known readings, empty for unknown words
    pub readings: Vec<Reading>,
}

impl AnalyzedWord {
    /// Result for a word the lexicon does not know
    pub fn unknown(word: &str) -> Self {
        Self {
            word: word.to_string(),
            readings: Vec::new(),
        }
    }

    /// Whether the lexicon recognized the word form
    pub fn is_tagged(&self) -> bool {
        !self.readings.is_empty()
    }
}

/// Single-word morphological lookup
///
/// Implementations are not required to be reentrant. Apostrophes in `word` are
/// always the typewriter glyph.
pub trait Tagger {
    /// Analyze one literal word form
    fn tag(&mut self, word: &str) -> AnalyzedWord;
}

impl<T: Tagger + ?Sized> Tagger for Box<T> {
    fn tag(&mut self, word: &str) -> AnalyzedWord {
        (**self).tag(word)
    }
}

/// Scoped access to a tagger shared by one tokenizer instance
pub trait LexiconAccess: Send + Sync {
    /// Run `f` with exclusive use of the tagger for its whole duration
    fn with_tagger<R>(&self, f: impl FnOnce(&mut dyn Tagger) -> R) -> R;
}

/// Mutex adapter for a non-reentrant tagger
///
/// Concurrent callers are serialized for the duration of each
/// [`LexiconAccess::with_tagger`] call.
#[derive(Debug, Default)]
pub struct SharedTagger<T> {
    inner: Mutex<T>,
}

impl<T> SharedTagger<T> {
    /// Wrap a tagger
    pub fn new(tagger: T) -> Self {
        Self {
            inner: Mutex::new(tagger),
        }
    }

    /// Unwrap the tagger
    pub fn into_inner(self) -> T {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Tagger + Send> LexiconAccess for SharedTagger<T> {
    fn with_tagger<R>(&self, f: impl FnOnce(&mut dyn Tagger) -> R) -> R {
        // Taggers hold no invariants a panicking caller could break
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *guard)
    }
}

impl Tagger for WordList {
    fn tag(&mut self, word: &str) -> AnalyzedWord {
        self.lookup(word)
    }
}

impl Tagger for &WordList {
    fn tag(&mut self, word: &str) -> AnalyzedWord {
        self.lookup(word)
    }
}

impl LexiconAccess for WordList {
    fn with_tagger<R>(&self, f: impl FnOnce(&mut dyn Tagger) -> R) -> R {
        let mut handle = self;
        f(&mut handle)
    }
}
