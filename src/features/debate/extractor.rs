use std::collections::HashSet;

use crate::features::debate::classifier::{DebatabilityPolicy, SHORT_POINT_MAX_WORDS};
use crate::features::nlp::{LanguageToolkit, is_punctuation};

pub const DEFAULT_EXTRACT_LIMIT: usize = 20;
pub const FALLBACK_WORD_COUNT: usize = 8;
pub const SENTINEL_POINT: &str = "General discussion point";

pub struct KeyPointExtractor<'a> {
    toolkit: &'a dyn LanguageToolkit,
    policy: &'a DebatabilityPolicy,
}

impl<'a> KeyPointExtractor<'a> {
    pub fn new(toolkit: &'a dyn LanguageToolkit, policy: &'a DebatabilityPolicy) -> Self {
        Self { toolkit, policy }
    }

    /// Returns at most `max_points` distinct points in first-seen order, or
    /// the sentinel point when the text yields none.
    pub fn extract(&self, text: &str, max_points: usize) -> Vec<String> {
        let candidates = self
            .toolkit
            .sentences(text)
            .iter()
            .filter_map(|sentence| self.point_for_sentence(sentence))
            .collect::<Vec<_>>();

        let mut points = dedupe_preserving_order(candidates);
        if points.is_empty() {
            return vec![SENTINEL_POINT.to_string()];
        }

        points.truncate(max_points);
        points
    }

    fn point_for_sentence(&self, sentence: &str) -> Option<String> {
        let words = self.toolkit.words(sentence);
        let tagged = self.toolkit.tag(&words);

        let nouns: Vec<&str> = tagged
            .iter()
            .filter(|tagged| tagged.tag.is_noun())
            .map(|tagged| tagged.word.as_str())
            .filter(|word| !self.toolkit.is_stop_word(word) && !is_punctuation(word))
            .collect();

        if nouns.is_empty() {
            let trimmed = sentence.trim();
            return (!trimmed.is_empty()).then(|| trimmed.to_string());
        }

        let point = nouns.join(" ");
        if point.split_whitespace().count() <= SHORT_POINT_MAX_WORDS
            && !self.policy.is_debatable(&point)
        {
            return Some(leading_words(&words, FALLBACK_WORD_COUNT));
        }

        Some(point)
    }
}

fn leading_words(words: &[String], count: usize) -> String {
    words
        .iter()
        .take(count)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

fn dedupe_preserving_order(points: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    points
        .into_iter()
        .filter(|point| seen.insert(point.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::nlp::{PosTag, RuleBasedToolkit, TaggedWord};

    /// Splits sentences on `|` and words on spaces; words ending in `/n` are nouns.
    struct ScriptedToolkit;

    impl LanguageToolkit for ScriptedToolkit {
        fn sentences(&self, text: &str) -> Vec<String> {
            text.split('|').map(str::to_string).collect()
        }

        fn words(&self, sentence: &str) -> Vec<String> {
            sentence.split_whitespace().map(str::to_string).collect()
        }

        fn tag(&self, words: &[String]) -> Vec<TaggedWord> {
            words
                .iter()
                .map(|word| match word.strip_suffix("/n") {
                    Some(noun) => TaggedWord::new(noun, PosTag::Noun),
                    None => TaggedWord::new(word.clone(), PosTag::Verb),
                })
                .collect()
        }

        fn is_stop_word(&self, word: &str) -> bool {
            word.eq_ignore_ascii_case("the")
        }
    }

    fn extract_scripted(text: &str, max_points: usize) -> Vec<String> {
        let policy = DebatabilityPolicy::standard();
        KeyPointExtractor::new(&ScriptedToolkit, &policy).extract(text, max_points)
    }

    #[test]
    fn joins_nouns_of_each_sentence() {
        let points = extract_scripted(
            "cities/n grow economy/n policy/n trade/n|regulation/n issue/n",
            DEFAULT_EXTRACT_LIMIT,
        );
        assert_eq!(points, vec!["cities economy policy trade", "regulation issue"]);
    }

    #[test]
    fn short_factual_nouns_fall_back_to_leading_words() {
        let points = extract_scripted(
            "a b c d sky/n e f g h i j",
            DEFAULT_EXTRACT_LIMIT,
        );
        assert_eq!(points, vec!["a b c d sky/n e f g"]);
    }

    #[test]
    fn stop_words_and_punctuation_are_not_nouns() {
        let points = extract_scripted("the/n ./n ,/n", DEFAULT_EXTRACT_LIMIT);
        assert_eq!(points, vec!["the/n ./n ,/n"], "no nouns keeps the sentence");
    }

    #[test]
    fn sentence_without_nouns_is_kept_trimmed() {
        let points = extract_scripted("  run fast  |   ", DEFAULT_EXTRACT_LIMIT);
        assert_eq!(points, vec!["run fast"]);
    }

    #[test]
    fn duplicates_keep_first_occurrence() {
        let points = extract_scripted(
            "impact/n|growth/n issue/n|impact/n|growth/n issue/n|jobs/n impact/n",
            DEFAULT_EXTRACT_LIMIT,
        );
        assert_eq!(points, vec!["impact", "growth issue", "jobs impact"]);
    }

    #[test]
    fn truncates_after_deduplication() {
        let points = extract_scripted("issue/n|issue/n|problem/n|impact/n", 2);
        assert_eq!(points, vec!["issue", "problem"]);
    }

    #[test]
    fn empty_result_becomes_sentinel() {
        assert_eq!(extract_scripted("   ", 5), vec![SENTINEL_POINT]);

        let toolkit = RuleBasedToolkit::default();
        let policy = DebatabilityPolicy::standard();
        let points = KeyPointExtractor::new(&toolkit, &policy).extract("", 5);
        assert_eq!(points, vec![SENTINEL_POINT]);
    }

    #[test]
    fn never_exceeds_limit_or_repeats() {
        let toolkit = RuleBasedToolkit::default();
        let policy = DebatabilityPolicy::standard();
        let extractor = KeyPointExtractor::new(&toolkit, &policy);
        let text = "Taxes should rise. Taxes should rise. Schools need funding. \
                    Cities grow. The river floods often. Voters might disagree. \
                    Trade has a complex impact on jobs.";

        for limit in 1..=8 {
            let points = extractor.extract(text, limit);
            assert!(!points.is_empty());
            assert!(points.len() <= limit, "limit {limit}: {points:?}");
            let unique: HashSet<&String> = points.iter().collect();
            assert_eq!(unique.len(), points.len(), "limit {limit}: {points:?}");
        }
    }

    #[test]
    fn extracts_the_reference_passage() {
        let toolkit = RuleBasedToolkit::default();
        let policy = DebatabilityPolicy::standard();
        let points = KeyPointExtractor::new(&toolkit, &policy).extract(
            "AI should replace doctors. The sky is blue.",
            DEFAULT_EXTRACT_LIMIT,
        );

        assert_eq!(points, vec!["AI should replace doctors .", "The sky is blue ."]);
    }
}
