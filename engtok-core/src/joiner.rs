//! Email and URL re-joining
//!
//! Delimiter splitting cuts addresses at `.`, `:` and `/`. This pass finds
//! email addresses and URLs in the source text and merges every run of tokens
//! that overlaps one of them back into a single token.

use crate::token::Token;
use regex::Regex;
use std::ops::Range;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = r"(?i)[a-z0-9][a-z0-9._%+\-]*@[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?(?:\.[a-z0-9](?:[a-z0-9\-]*[a-z0-9])?)*\.[a-z]{2,}";
const URL_PATTERN: &str = r#"(?i)\b(?:(?:https?|ftp)://|www\.)[^\s"'<>()\[\]{}«»“”‘’`–—]+"#;

/// Punctuation that ends a sentence rather than a URL
const URL_TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?'];

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"))
}

fn url_regex() -> &'static Regex {
    static URL: OnceLock<Regex> = OnceLock::new();
    URL.get_or_init(|| Regex::new(URL_PATTERN).expect("URL pattern must compile"))
}

/// Post-pass merging over-split email addresses and URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmailUrlJoiner {
    emails: bool,
    urls: bool,
}

impl Default for EmailUrlJoiner {
    fn default() -> Self {
        Self::new(true, true)
    }
}

impl EmailUrlJoiner {
    /// Create a joiner, enabling each kind separately
    pub fn new(emails: bool, urls: bool) -> Self {
        Self { emails, urls }
    }

    /// Joiner that returns its input unchanged
    pub fn disabled() -> Self {
        Self::new(false, false)
    }

    /// Merge tokens covering an email address or URL
    ///
    /// `tokens` must be slices of `source` with offsets relative to it.
    pub fn join<'a>(&self, source: &'a str, tokens: Vec<Token<'a>>) -> Vec<Token<'a>> {
        if tokens.len() < 2 {
            return tokens;
        }

        let spans = self.find_spans(source);
        if spans.is_empty() {
            return tokens;
        }

        let mut joined = Vec::with_capacity(tokens.len());
        let mut spans = spans.into_iter().peekable();
        let mut index = 0;

        while index < tokens.len() {
            let token = tokens[index];
            while spans.peek().is_some_and(|span| span.end <= token.offset()) {
                spans.next();
            }

            match spans.peek() {
                Some(span) if span.start < token.end() => {
                    let span_end = span.end;
                    let start = token.offset();
                    let mut end = token.end();
                    index += 1;
                    while index < tokens.len() && tokens[index].offset() < span_end {
                        end = tokens[index].end();
                        index += 1;
                    }
                    joined.push(Token::new(&source[start..end], start));
                }
                _ => {
                    joined.push(token);
                    index += 1;
                }
            }
        }

        joined
    }

    /// Sorted, disjoint byte ranges of every match in `source`
    fn find_spans(&self, source: &str) -> Vec<Range<usize>> {
        let mut spans = Vec::new();

        if self.emails && source.contains('@') {
            spans.extend(email_regex().find_iter(source).map(|m| m.range()));
        }

        if self.urls {
            spans.extend(url_regex().find_iter(source).filter_map(|m| {
                let trimmed = m.as_str().trim_end_matches(URL_TRAILING_PUNCTUATION);
                (!trimmed.is_empty()).then(|| m.start()..m.start() + trimmed.len())
            }));
        }

        spans.sort_by_key(|span| (span.start, std::cmp::Reverse(span.end)));

        let mut disjoint: Vec<Range<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            match disjoint.last_mut() {
                Some(last) if span.start < last.end => last.end = last.end.max(span.end),
                _ => disjoint.push(span),
            }
        }
        disjoint
    }
}
