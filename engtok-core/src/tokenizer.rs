//! Word tokenizers
//!
//! [`GenericWordTokenizer`] splits on tokenizing characters and re-joins
//! emails and URLs. [`EnglishWordTokenizer`] adds the en-dash to the
//! tokenizing characters, splits contractions and resolves hyphens and
//! apostrophes against a lexicon.

use crate::config::TokenizerConfig;
use crate::contraction::ContractionMatcher;
use crate::error::Result;
use crate::guard::ApostropheGuard;
use crate::joiner::EmailUrlJoiner;
use crate::lexicon::{LexiconAccess, SharedTagger, WordList};
use crate::resolver::HyphenResolver;
use crate::splitter::{split, DelimiterSet, EN_DASH};
use crate::token::Token;

/// Common interface of word tokenizers
pub trait WordTokenizer {
    /// Characters that end a segment and become tokens of their own
    fn tokenizing_characters(&self) -> &DelimiterSet {
        DelimiterSet::base()
    }

    /// Split `text` into tokens that concatenate back to `text`
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>>;
}

/// Split `text` into segments and single delimiters without ever cutting at
/// an apostrophe
///
/// Apostrophes are guarded while splitting, so segments come back with their
/// apostrophes restored and offsets pointing into `text`.
pub fn guarded_segments<'a>(text: &'a str, delimiters: &DelimiterSet) -> Vec<Token<'a>> {
    if !ApostropheGuard::can_guard(text) {
        // Splitting without apostrophe delimiters is what the guard emulates
        let unguarded = delimiters.without_apostrophes();
        return offset_pieces(text, split(text, &unguarded, true));
    }

    let guarded = ApostropheGuard::guard(text);
    let mut offset = 0;

    split(&guarded, delimiters, true)
        .map(|raw| {
            let restored = ApostropheGuard::unguard(raw);
            let segment = Token::new(&text[offset..offset + restored.len()], offset);
            debug_assert_eq!(segment.as_str(), restored);
            offset = segment.end();
            segment
        })
        .collect()
}

fn offset_pieces<'a>(text: &'a str, pieces: impl Iterator<Item = &'a str>) -> Vec<Token<'a>> {
    let mut offset = 0;
    pieces
        .map(|piece| {
            let token = Token::new(piece, offset);
            offset += piece.len();
            debug_assert!(offset <= text.len());
            token
        })
        .collect()
}

/// Language-neutral tokenizer: split on delimiters, then join emails and URLs
#[derive(Debug, Clone, Default)]
pub struct GenericWordTokenizer {
    joiner: EmailUrlJoiner,
}

impl GenericWordTokenizer {
    /// Create a tokenizer with the default joiner
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with a specific joiner
    pub fn with_joiner(joiner: EmailUrlJoiner) -> Self {
        Self { joiner }
    }
}

impl WordTokenizer for GenericWordTokenizer {
    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let delimiters = self.tokenizing_characters();
        let tokens = offset_pieces(text, split(text, delimiters, true));
        self.joiner.join(text, tokens)
    }
}

/// English tokenizer with contraction and hyphen/apostrophe handling
///
/// The lexicon is reached through `L`. The default [`SharedTagger`] adapter
/// serializes concurrent callers for the duration of each resolve step, so one
/// instance can be shared between threads.
#[derive(Debug)]
pub struct EnglishWordTokenizer<L = SharedTagger<WordList>> {
    lexicon: L,
    delimiters: DelimiterSet,
    resolver: HyphenResolver,
    joiner: EmailUrlJoiner,
}

impl EnglishWordTokenizer {
    /// Tokenizer backed by the builtin English lexicon
    pub fn new() -> Self {
        Self::with_lexicon(SharedTagger::new(WordList::english().clone()))
    }

    /// Build a tokenizer from a validated configuration
    pub fn from_config(config: &TokenizerConfig) -> Result<Self> {
        config.validate()?;

        let mut words = if config.lexicon.builtin {
            WordList::english().clone()
        } else {
            WordList::new()
        };
        for path in &config.lexicon.files {
            words.extend(WordList::from_file(path)?);
        }

        let delimiters = Self::english_delimiters().with(config.delimiters.extra.iter().copied());
        log::debug!(
            "Built English tokenizer: {} lexicon entries, {} tokenizing characters",
            words.len(),
            delimiters.len()
        );

        Ok(Self {
            lexicon: SharedTagger::new(words),
            delimiters,
            resolver: HyphenResolver::new(),
            joiner: EmailUrlJoiner::new(config.joiner.emails, config.joiner.urls),
        })
    }
}

impl Default for EnglishWordTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: LexiconAccess> EnglishWordTokenizer<L> {
    /// Tokenizer using a custom lexicon access strategy
    pub fn with_lexicon(lexicon: L) -> Self {
        Self {
            lexicon,
            delimiters: Self::english_delimiters(),
            resolver: HyphenResolver::new(),
            joiner: EmailUrlJoiner::default(),
        }
    }

    /// Replace the email/URL joiner
    pub fn joiner(mut self, joiner: EmailUrlJoiner) -> Self {
        self.joiner = joiner;
        self
    }

    /// The lexicon access strategy
    pub fn lexicon(&self) -> &L {
        &self.lexicon
    }

    fn english_delimiters() -> DelimiterSet {
        DelimiterSet::base().with([EN_DASH])
    }

    /// Tokenize one segment, appending to `out`
    fn tokenize_segment<'a>(&self, segment: Token<'a>, out: &mut Vec<Token<'a>>) {
        match ContractionMatcher::shared().find(segment) {
            Some(matched) => {
                for group in matched.groups {
                    self.resolve(group, out);
                }
            }
            None => self.resolve(segment, out),
        }
    }

    fn resolve<'a>(&self, segment: Token<'a>, out: &mut Vec<Token<'a>>) {
        self.lexicon
            .with_tagger(|tagger| self.resolver.resolve(segment, tagger, out));
    }

    /// Tokenize many texts on the rayon thread pool, sharing this instance
    #[cfg(feature = "parallel")]
    pub fn tokenize_batch<'a>(&self, texts: &[&'a str]) -> Vec<Vec<Token<'a>>> {
        use rayon::prelude::*;

        texts.par_iter().map(|text| self.tokenize(text)).collect()
    }
}

impl<L: LexiconAccess> WordTokenizer for EnglishWordTokenizer<L> {
    fn tokenizing_characters(&self) -> &DelimiterSet {
        &self.delimiters
    }

    fn tokenize<'a>(&self, text: &'a str) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        for segment in guarded_segments(text, self.tokenizing_characters()) {
            self.tokenize_segment(segment, &mut tokens);
        }
        self.joiner.join(text, tokens)
    }
}
