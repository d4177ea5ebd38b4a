//! Apostrophe guard
//!
//! Both apostrophe glyphs are swapped for sentinel sequences before delimiter
//! splitting so the splitter never cuts a word at an apostrophe, then swapped
//! back segment by segment.

use std::borrow::Cow;

/// Typewriter apostrophe
pub const TYPEWRITER_APOSTROPHE: char = '\'';
/// Typographic apostrophe (right single quotation mark)
pub const TYPOGRAPHIC_APOSTROPHE: char = '\u{2019}';

/// Character framing both sentinels. Text containing it cannot be guarded.
pub const SENTINEL_MARKER: char = '\u{1}';

const TYPEWRITER_SENTINEL: &str = "\u{1}\u{1}APOSTYPEW\u{1}\u{1}";
const TYPOGRAPHIC_SENTINEL: &str = "\u{1}\u{1}APOSTYPOG\u{1}\u{1}";

/// Whether `ch` is one of the two apostrophe glyphs
pub fn is_apostrophe(ch: char) -> bool {
    matches!(ch, TYPEWRITER_APOSTROPHE | TYPOGRAPHIC_APOSTROPHE)
}

/// Reversible apostrophe substitution
#[derive(Debug, Clone, Copy, Default)]
pub struct ApostropheGuard;

impl ApostropheGuard {
    /// Whether guard/unguard round-trips `text` exactly
    ///
    /// Holds for every string that does not already contain the marker.
    pub fn can_guard(text: &str) -> bool {
        !text.contains(SENTINEL_MARKER)
    }

    /// Replace both apostrophe glyphs with their sentinels
    pub fn guard(text: &str) -> Cow<'_, str> {
        if !text.contains(is_apostrophe) {
            return Cow::Borrowed(text);
        }

        let mut guarded = String::with_capacity(text.len() + 16);
        for ch in text.chars() {
            match ch {
                TYPEWRITER_APOSTROPHE => guarded.push_str(TYPEWRITER_SENTINEL),
                TYPOGRAPHIC_APOSTROPHE => guarded.push_str(TYPOGRAPHIC_SENTINEL),
                _ => guarded.push(ch),
            }
        }
        Cow::Owned(guarded)
    }

    /// Restore apostrophes in a fragment of guarded text
    pub fn unguard(fragment: &str) -> Cow<'_, str> {
        if !fragment.contains(SENTINEL_MARKER) {
            return Cow::Borrowed(fragment);
        }

        Cow::Owned(
            fragment
                .replace(TYPEWRITER_SENTINEL, "'")
                .replace(TYPOGRAPHIC_SENTINEL, "\u{2019}"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_removes_both_glyphs() {
        let guarded = ApostropheGuard::guard("it's rock’n’roll");
        assert!(!guarded.contains('\''));
        assert!(!guarded.contains('\u{2019}'));
        assert_eq!(ApostropheGuard::unguard(&guarded), "it's rock’n’roll");
    }

    #[test]
    fn test_sentinels_are_distinct() {
        let a = ApostropheGuard::guard("'");
        let b = ApostropheGuard::guard("\u{2019}");
        assert_ne!(a, b);
        assert_eq!(ApostropheGuard::unguard(&a), "'");
        assert_eq!(ApostropheGuard::unguard(&b), "\u{2019}");
    }

    #[test]
    fn test_guard_borrows_when_nothing_to_do() {
        assert!(matches!(ApostropheGuard::guard("plain"), Cow::Borrowed(_)));
        assert!(matches!(ApostropheGuard::unguard("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_can_guard() {
        assert!(ApostropheGuard::can_guard("couldn't"));
        assert!(!ApostropheGuard::can_guard("odd\u{1}text"));
    }
}
