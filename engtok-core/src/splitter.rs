//! Delimiter splitter
//!
//! Splits text into maximal runs of non-delimiter characters, optionally
//! interleaved with every delimiter as a single-character piece.

use crate::guard::{is_apostrophe, SENTINEL_MARKER};
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// En-dash, a tokenizing character in English running text
pub const EN_DASH: char = '\u{2013}';

/// Default tokenizing characters of the generic word tokenizer
const BASE_TOKENIZING_CHARACTERS: &[char] = &[
    // Spaces and invisible separators
    ' ', '\t', '\n', '\r', '\u{000B}', '\u{000C}', '\u{00A0}', '\u{115F}', '\u{1160}', '\u{1680}',
    '\u{2000}', '\u{2001}', '\u{2002}', '\u{2003}', '\u{2004}', '\u{2005}', '\u{2006}',
    '\u{2007}', '\u{2008}', '\u{2009}', '\u{200A}', '\u{200B}', '\u{200C}', '\u{200D}',
    '\u{200E}', '\u{200F}', '\u{2028}', '\u{2029}', '\u{202A}', '\u{202B}', '\u{202C}',
    '\u{202D}', '\u{202E}', '\u{202F}', '\u{205F}', '\u{2060}', '\u{2061}', '\u{2062}',
    '\u{2063}', '\u{2064}', '\u{3000}', '\u{3164}', '\u{FEFF}', '\u{FFA0}',
    // Dashes and bullets other than the en-dash
    '\u{2012}', '\u{2014}', '\u{2015}', '\u{2022}',
    // Punctuation
    ',', '.', ';', ':', '(', ')', '[', ']', '{', '}', '<', '>', '!', '?', '/', '\\', '|', '=',
    '*', '#', '+', '~', '^', '"', '`', '\'', '\u{2019}', '\u{2018}', '\u{201A}', '\u{201C}',
    '\u{201D}', '\u{201E}', '\u{00AB}', '\u{00BB}', '\u{00B4}', '\u{2026}', '\u{00BF}',
    '\u{00A1}', '\u{00B7}', '\u{00D7}', '\u{00F7}', '\u{2217}',
    // Symbols
    '\u{2122}', '\u{00AE}', '\u{00A9}', '\u{2120}', '\u{00B0}', '\u{00B1}', '\u{00A7}',
    '\u{2020}', '\u{2021}', '\u{00B6}',
];

/// Immutable set of tokenizing characters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterSet {
    chars: BTreeSet<char>,
}

impl DelimiterSet {
    /// Shared default set used by the generic tokenizer
    pub fn base() -> &'static DelimiterSet {
        static BASE: OnceLock<DelimiterSet> = OnceLock::new();
        BASE.get_or_init(|| Self::from_chars(BASE_TOKENIZING_CHARACTERS.iter().copied()))
    }

    /// Build a set from arbitrary characters
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// A copy extended with `extra`
    pub fn with(&self, extra: impl IntoIterator<Item = char>) -> Self {
        let mut chars = self.chars.clone();
        chars.extend(extra);
        Self { chars }
    }

    /// A copy with both apostrophe glyphs removed
    pub fn without_apostrophes(&self) -> Self {
        Self {
            chars: self
                .chars
                .iter()
                .copied()
                .filter(|&ch| !is_apostrophe(ch))
                .collect(),
        }
    }

    /// Whether `ch` is a tokenizing character
    pub fn contains(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Number of characters in the set
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Iterate in code point order
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

/// Reason a character cannot be added as an extra delimiter, if any
///
/// Hyphens and apostrophes are resolved after splitting, alphanumerics would
/// break words apart and the sentinel marker would break the apostrophe guard.
pub fn reject_extra_delimiter(ch: char) -> Option<&'static str> {
    if ch == '-' {
        Some("the hyphen is handled by the hyphen resolver")
    } else if is_apostrophe(ch) {
        Some("apostrophes are handled by the contraction rules")
    } else if ch.is_alphanumeric() {
        Some("alphanumeric characters cannot be delimiters")
    } else if ch == SENTINEL_MARKER {
        Some("reserved by the apostrophe guard")
    } else {
        None
    }
}

/// Iterator over the pieces of a delimiter split
#[derive(Debug, Clone)]
pub struct Split<'a, 'd> {
    rest: &'a str,
    delimiters: &'d DelimiterSet,
    retain_delimiters: bool,
}

impl<'a> Iterator for Split<'a, '_> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let first = self.rest.chars().next()?;

            if self.delimiters.contains(first) {
                let (delimiter, rest) = self.rest.split_at(first.len_utf8());
                self.rest = rest;
                if self.retain_delimiters {
                    return Some(delimiter);
                }
                continue;
            }

            let end = self
                .rest
                .char_indices()
                .find(|&(_, ch)| self.delimiters.contains(ch))
                .map_or(self.rest.len(), |(idx, _)| idx);
            let (run, rest) = self.rest.split_at(end);
            self.rest = rest;
            return Some(run);
        }
    }
}

/// Split `text` on any character of `delimiters`
///
/// With `retain_delimiters` every delimiter character is yielded as its own
/// piece, so concatenating the pieces reproduces `text`.
pub fn split<'a, 'd>(
    text: &'a str,
    delimiters: &'d DelimiterSet,
    retain_delimiters: bool,
) -> Split<'a, 'd> {
    Split {
        rest: text,
        delimiters,
        retain_delimiters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pieces(text: &str, delimiters: &DelimiterSet, retain: bool) -> Vec<String> {
        split(text, delimiters, retain).map(str::to_string).collect()
    }

    #[test]
    fn test_split_retaining_delimiters() {
        let result = pieces("Hello, world!", DelimiterSet::base(), true);
        assert_eq!(result, vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_split_dropping_delimiters() {
        let result = pieces("Hello,  world!", DelimiterSet::base(), false);
        assert_eq!(result, vec!["Hello", "world"]);
    }

    #[test]
    fn test_consecutive_delimiters_are_separate_pieces() {
        let result = pieces("a...b", DelimiterSet::base(), true);
        assert_eq!(result, vec!["a", ".", ".", ".", "b"]);
    }

    #[test]
    fn test_empty_and_delimiter_only_input() {
        assert!(pieces("", DelimiterSet::base(), true).is_empty());
        assert_eq!(pieces("  ", DelimiterSet::base(), true), vec![" ", " "]);
        assert!(pieces("  ", DelimiterSet::base(), false).is_empty());
    }

    #[test]
    fn test_base_set_keeps_hyphen_and_en_dash_inside_words() {
        let base = DelimiterSet::base();
        assert!(!base.contains('-'));
        assert!(!base.contains(EN_DASH));
        assert_eq!(pieces("1990–2000", base, true), vec!["1990–2000"]);
    }

    #[test]
    fn test_extended_set_splits_en_dash() {
        let english = DelimiterSet::base().with([EN_DASH]);
        assert_eq!(
            pieces("1990–2000", &english, true),
            vec!["1990", "–", "2000"]
        );
        assert_eq!(english.len(), DelimiterSet::base().len() + 1);
    }

    #[test]
    fn test_without_apostrophes() {
        let set = DelimiterSet::base().without_apostrophes();
        assert!(!set.contains('\''));
        assert!(!set.contains('\u{2019}'));
        assert!(set.contains('\u{2018}'));
    }

    #[test]
    fn test_multibyte_delimiters() {
        let result = pieces("wait…what", DelimiterSet::base(), true);
        assert_eq!(result, vec!["wait", "…", "what"]);
    }

    #[test]
    fn test_reject_extra_delimiter() {
        assert!(reject_extra_delimiter('-').is_some());
        assert!(reject_extra_delimiter('\'').is_some());
        assert!(reject_extra_delimiter('x').is_some());
        assert!(reject_extra_delimiter('\u{1}').is_some());
        assert!(reject_extra_delimiter('@').is_none());
    }
}
