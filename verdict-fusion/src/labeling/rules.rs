//! Reusable rule shapes for building labeling functions.
//!
//! Three shapes cover the whole built-in set: a keyword vocabulary, a
//! regex pattern, and a two-vocabulary co-occurrence. All match
//! case-insensitively and respect word boundaries, so "ondernemer" does
//! not fire inside "ondernemerschapsonderwijs"-style compounds unless
//! the compound itself is in the vocabulary.

use aho_corasick::AhoCorasick;
use regex::Regex;

use super::set::LabelingFunction;
use super::types::Vote;

/// A match is only counted when it sits on word boundaries: the
/// characters just before and after must not be alphanumeric.
fn has_bounded_match(automaton: &AhoCorasick, text: &str) -> bool {
    for m in automaton.find_overlapping_iter(text) {
        let before_ok = text[..m.start()]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = text[m.end()..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
    }
    false
}

fn build_automaton(vocabulary: &[&str]) -> AhoCorasick {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(vocabulary)
        .expect("vocabulary automaton")
}

/// Votes a fixed way when any vocabulary term appears in the text.
pub struct KeywordRule {
    name: String,
    automaton: AhoCorasick,
    vote: Vote,
}

impl KeywordRule {
    pub fn new(name: impl Into<String>, vocabulary: &[&str], vote: Vote) -> Self {
        Self {
            name: name.into(),
            automaton: build_automaton(vocabulary),
            vote,
        }
    }
}

impl LabelingFunction for KeywordRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self, text: &str) -> Vote {
        if has_bounded_match(&self.automaton, text) {
            self.vote
        } else {
            Vote::Abstain
        }
    }
}

/// Votes a fixed way when a regex matches. Patterns are wrapped in
/// case-insensitive mode; boundaries are the pattern's own business.
pub struct PatternRule {
    name: String,
    pattern: Regex,
    vote: Vote,
}

impl PatternRule {
    pub fn new(
        name: impl Into<String>,
        pattern: &str,
        vote: Vote,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name: name.into(),
            pattern: Regex::new(&format!("(?i){pattern}"))?,
            vote,
        })
    }
}

impl LabelingFunction for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self, text: &str) -> Vote {
        if self.pattern.is_match(text) {
            self.vote
        } else {
            Vote::Abstain
        }
    }
}

/// Votes a fixed way only when both vocabularies hit the text.
///
/// The built-in SME×cybercrime rule is the motivating case: a company
/// term alone or a security term alone is weak evidence, the pair is
/// strong.
pub struct CooccurrenceRule {
    name: String,
    left: AhoCorasick,
    right: AhoCorasick,
    vote: Vote,
}

impl CooccurrenceRule {
    pub fn new(
        name: impl Into<String>,
        left_vocabulary: &[&str],
        right_vocabulary: &[&str],
        vote: Vote,
    ) -> Self {
        Self {
            name: name.into(),
            left: build_automaton(left_vocabulary),
            right: build_automaton(right_vocabulary),
            vote,
        }
    }
}

impl LabelingFunction for CooccurrenceRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn label(&self, text: &str) -> Vote {
        if has_bounded_match(&self.left, text) && has_bounded_match(&self.right, text) {
            self.vote
        } else {
            Vote::Abstain
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_rule_respects_word_boundaries() {
        let rule = KeywordRule::new("sme", &["mkb", "kleine onderneming"], Vote::Positive);
        assert_eq!(rule.label("steun voor het mkb aangekondigd"), Vote::Positive);
        assert_eq!(rule.label("Een kleine onderneming in Venlo"), Vote::Positive);
        // Substring inside a longer word does not fire.
        assert_eq!(rule.label("de mkbond vergadert"), Vote::Abstain);
        assert_eq!(rule.label("niets relevants"), Vote::Abstain);
    }

    #[test]
    fn keyword_rule_is_case_insensitive() {
        let rule = KeywordRule::new("sme", &["zzp"], Vote::Positive);
        assert_eq!(rule.label("ZZP'ers protesteren"), Vote::Positive);
    }

    #[test]
    fn pattern_rule_votes_on_match() {
        let rule = PatternRule::new("plural", r"\bmkb'?ers?\b", Vote::Positive).unwrap();
        assert_eq!(rule.label("veel MKB'ers getroffen"), Vote::Positive);
        assert_eq!(rule.label("geen treffer"), Vote::Abstain);
    }

    #[test]
    fn pattern_rule_rejects_invalid_pattern() {
        assert!(PatternRule::new("bad", r"(unclosed", Vote::Positive).is_err());
    }

    #[test]
    fn cooccurrence_requires_both_sides() {
        let rule = CooccurrenceRule::new(
            "sme_cyber",
            &["bedrijf", "mkb"],
            &["ransomware", "phishing"],
            Vote::Positive,
        );
        assert_eq!(
            rule.label("bedrijf getroffen door ransomware"),
            Vote::Positive
        );
        assert_eq!(rule.label("bedrijf opent nieuw pand"), Vote::Abstain);
        assert_eq!(rule.label("ransomware golf in duitsland"), Vote::Abstain);
    }
}
