//! Hyphen and apostrophe resolution
//!
//! Decides whether a segment containing a hyphen or an apostrophe stays whole
//! or is broken up. Edge hyphens always become their own tokens. Inner
//! hyphens and apostrophes are kept when the lexicon knows the form or it is a
//! listed compound; otherwise the segment is split at apostrophes only.

use crate::guard::{is_apostrophe, TYPOGRAPHIC_APOSTROPHE};
use crate::lexicon::Tagger;
use crate::token::Token;
use smallvec::SmallVec;

/// Hyphenated words that are valid even though lexicons usually miss them
pub const COMPOUND_EXCEPTIONS: &[&str] = &[
    "mers-cov",
    "mcgraw-hill",
    "sars-cov-2",
    "sars-cov",
    "ph-metre",
    "ph-metres",
    "anti-ivg",
    "anti-uv",
    "anti-vih",
    "al-qaida",
];

/// Whether `segment` is a listed compound, ignoring case
pub fn is_compound_exception(segment: &str) -> bool {
    COMPOUND_EXCEPTIONS
        .iter()
        .any(|exception| exception.eq_ignore_ascii_case(segment))
}

/// Shape of a segment, checked in this order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentShape {
    /// Nothing left
    Empty,
    /// Starts with `-`
    LeadingHyphen,
    /// Ends with `-`
    TrailingHyphen,
    /// No hyphen and no apostrophe
    Plain,
    /// Inner hyphen or apostrophe
    Compound,
}

impl SegmentShape {
    /// Classify a segment
    pub fn of(segment: &str) -> Self {
        if segment.is_empty() {
            SegmentShape::Empty
        } else if segment.starts_with('-') {
            SegmentShape::LeadingHyphen
        } else if segment.ends_with('-') {
            SegmentShape::TrailingHyphen
        } else if !segment.contains(|ch| ch == '-' || is_apostrophe(ch)) {
            SegmentShape::Plain
        } else {
            SegmentShape::Compound
        }
    }
}

/// Hyphen/apostrophe resolver
#[derive(Debug, Clone, Copy, Default)]
pub struct HyphenResolver;

impl HyphenResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Resolve `segment`, appending its tokens to `out` in source order
    pub fn resolve<'a, T>(&self, segment: Token<'a>, tagger: &mut T, out: &mut Vec<Token<'a>>)
    where
        T: Tagger + ?Sized,
    {
        let mut rest = segment;
        // Trailing hyphens are peeled off last-first
        let mut trailing: SmallVec<[Token<'a>; 2]> = SmallVec::new();

        loop {
            match SegmentShape::of(rest.as_str()) {
                SegmentShape::Empty => break,
                SegmentShape::LeadingHyphen => {
                    let (hyphen, tail) = rest.split_at(1);
                    out.push(hyphen);
                    rest = tail;
                }
                SegmentShape::TrailingHyphen => {
                    let (head, hyphen) = rest.split_at(rest.len() - 1);
                    trailing.push(hyphen);
                    rest = head;
                }
                SegmentShape::Plain => {
                    out.push(rest);
                    break;
                }
                SegmentShape::Compound => {
                    self.resolve_compound(rest, tagger, out);
                    break;
                }
            }
        }

        out.extend(trailing.into_iter().rev());
    }

    fn resolve_compound<'a, T>(&self, segment: Token<'a>, tagger: &mut T, out: &mut Vec<Token<'a>>)
    where
        T: Tagger + ?Sized,
    {
        let text = segment.as_str();
        let normalized = text.replace(TYPOGRAPHIC_APOSTROPHE, "'");

        if tagger.tag(&normalized).is_tagged() || is_compound_exception(text) {
            out.push(segment);
            return;
        }

        split_at_apostrophes(segment, out);
    }
}

/// Split at every apostrophe, keeping each apostrophe as a token
fn split_at_apostrophes<'a>(segment: Token<'a>, out: &mut Vec<Token<'a>>) {
    let text = segment.as_str();
    let mut start = 0;

    for (idx, ch) in text.char_indices().filter(|&(_, ch)| is_apostrophe(ch)) {
        if start < idx {
            out.push(segment.slice(start..idx));
        }
        let end = idx + ch.len_utf8();
        out.push(segment.slice(idx..end));
        start = end;
    }

    if start < text.len() {
        out.push(segment.slice(start..text.len()));
    }
}
