//! Contraction pattern matching
//!
//! Four anchored, case-insensitive rules are tried in priority order against a
//! whole segment. The first rule that matches decides how the segment is cut;
//! each captured group is then processed on its own.

use crate::token::Token;
use regex::Regex;
use smallvec::SmallVec;
use std::sync::OnceLock;

/// The contraction rules, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractionRule {
    /// Irregular forms captured whole so no clitic rule cuts them (`rec'd`, `fo'c'sle`)
    ProtectedIrregular,
    /// Auxiliary or modal stem followed by `n't` (`couldn't`, `won't`)
    NegatedAuxiliary,
    /// Stem followed by `'m`, `'re`, `'ll`, `'ve`, `'d` or `'s`
    Clitic,
    /// `'twas` split into `'t` and `was`
    ArchaicTwas,
}

impl ContractionRule {
    /// All rules, highest priority first
    pub const ALL: [ContractionRule; 4] = [
        ContractionRule::ProtectedIrregular,
        ContractionRule::NegatedAuxiliary,
        ContractionRule::Clitic,
        ContractionRule::ArchaicTwas,
    ];

    /// Position in the priority order, 0 being tried first
    pub fn priority(self) -> usize {
        match self {
            ContractionRule::ProtectedIrregular => 0,
            ContractionRule::NegatedAuxiliary => 1,
            ContractionRule::Clitic => 2,
            ContractionRule::ArchaicTwas => 3,
        }
    }

    fn pattern(self) -> &'static str {
        match self {
            ContractionRule::ProtectedIrregular => {
                r"(?i)^(fo['’]c['’]sle|rec['’]d|OK['’]d|cc['’]d)$"
            }
            ContractionRule::NegatedAuxiliary => {
                r"(?i)^(are|is|were|was|do|does|did|have|has|had|wo|would|ca|could|sha|should|must|ai|ought|might|need|may)(n['’]t)$"
            }
            ContractionRule::Clitic => r"(?i)^(.+)(['’]m|['’]re|['’]ll|['’]ve|['’]d|['’]s)(['’-]?)$",
            ContractionRule::ArchaicTwas => r"(?i)^(['’]t)(was)$",
        }
    }
}

/// A successful rule match and its captured groups, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractionMatch<'a> {
    /// Rule that matched
    pub rule: ContractionRule,
    /// Captured groups; together they cover the whole segment
    pub groups: SmallVec<[Token<'a>; 3]>,
}

/// Compiled rule table
#[derive(Debug)]
pub struct ContractionMatcher {
    rules: Vec<(ContractionRule, Regex)>,
}

impl ContractionMatcher {
    /// Process-wide matcher, compiled on first use
    pub fn shared() -> &'static ContractionMatcher {
        static MATCHER: OnceLock<ContractionMatcher> = OnceLock::new();
        MATCHER.get_or_init(ContractionMatcher::compile)
    }

    fn compile() -> Self {
        let rules = ContractionRule::ALL
            .iter()
            .map(|&rule| {
                let regex = Regex::new(rule.pattern())
                    .unwrap_or_else(|e| panic!("contraction rule {rule:?} must compile: {e}"));
                (rule, regex)
            })
            .collect();
        Self { rules }
    }

    /// Match a segment against the rules, first match wins
    pub fn find<'a>(&self, segment: Token<'a>) -> Option<ContractionMatch<'a>> {
        let text = segment.as_str();

        self.rules.iter().find_map(|(rule, regex)| {
            let captures = regex.captures(text)?;
            let groups = captures
                .iter()
                .skip(1)
                .flatten()
                .map(|group| segment.slice(group.range()))
                .collect();

            log::trace!("'{text}' matched contraction rule {rule:?}");
            Some(ContractionMatch {
                rule: *rule,
                groups,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::texts;

    fn find(text: &str) -> Option<(ContractionRule, Vec<&str>)> {
        ContractionMatcher::shared()
            .find(Token::whole(text))
            .map(|m| (m.rule, texts(&m.groups)))
    }

    #[test]
    fn test_rules_are_in_priority_order() {
        for (index, rule) in ContractionRule::ALL.iter().enumerate() {
            assert_eq!(rule.priority(), index);
        }
    }

    #[test]
    fn test_protected_irregulars() {
        assert_eq!(
            find("rec'd"),
            Some((ContractionRule::ProtectedIrregular, vec!["rec'd"]))
        );
        assert_eq!(
            find("fo’c'sle"),
            Some((ContractionRule::ProtectedIrregular, vec!["fo’c'sle"]))
        );
        assert_eq!(
            find("ok'd").map(|(rule, _)| rule),
            Some(ContractionRule::ProtectedIrregular)
        );
    }

    #[test]
    fn test_protected_rule_beats_clitic_rule() {
        // "cc'd" also fits stem + 'd
        assert_eq!(
            find("CC'd"),
            Some((ContractionRule::ProtectedIrregular, vec!["CC'd"]))
        );
    }

    #[test]
    fn test_negated_auxiliaries() {
        assert_eq!(
            find("couldn't"),
            Some((ContractionRule::NegatedAuxiliary, vec!["could", "n't"]))
        );
        assert_eq!(
            find("Won’t"),
            Some((ContractionRule::NegatedAuxiliary, vec!["Wo", "n’t"]))
        );
        assert_eq!(
            find("CAN'T"),
            Some((ContractionRule::NegatedAuxiliary, vec!["CA", "N'T"]))
        );
    }

    #[test]
    fn test_unknown_stem_is_not_a_negated_auxiliary() {
        assert_eq!(find("gon't"), None);
    }

    #[test]
    fn test_clitics() {
        assert_eq!(
            find("it's"),
            Some((ContractionRule::Clitic, vec!["it", "'s", ""]))
        );
        assert_eq!(
            find("they’re"),
            Some((ContractionRule::Clitic, vec!["they", "’re", ""]))
        );
        assert_eq!(
            find("we'll-"),
            Some((ContractionRule::Clitic, vec!["we", "'ll", "-"]))
        );
        assert_eq!(
            find("o'clock's"),
            Some((ContractionRule::Clitic, vec!["o'clock", "'s", ""]))
        );
    }

    #[test]
    fn test_clitic_needs_a_stem() {
        assert_eq!(find("'s"), None);
        assert_eq!(find("'ll"), None);
    }

    #[test]
    fn test_archaic_twas() {
        assert_eq!(
            find("'Twas"),
            Some((ContractionRule::ArchaicTwas, vec!["'T", "was"]))
        );
    }

    #[test]
    fn test_groups_cover_segment() {
        let segment = Token::new("shouldn’t", 7);
        let matched = ContractionMatcher::shared().find(segment).unwrap();

        assert_eq!(matched.groups[0].offset(), 7);
        assert_eq!(matched.groups[1].offset(), 7 + "should".len());
        assert_eq!(matched.groups[1].end(), segment.end());
    }

    #[test]
    fn test_no_match() {
        assert_eq!(find("hello"), None);
        assert_eq!(find("foo'bar"), None);
        assert_eq!(find(""), None);
    }
}
