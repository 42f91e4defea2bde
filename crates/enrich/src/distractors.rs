use std::collections::BTreeSet;
use stories::{AnalyzedSentence, PosBreakdown, PosCategory};

use crate::normalizer::normalize_word;

pub const MAX_WRONG_ANSWERS: usize = 3;

/// Generic words used when a story has too few candidates of its own.
pub fn fallback_words(category: PosCategory) -> &'static [&'static str] {
    match category {
        PosCategory::Noun => &["thing", "place", "person", "object", "item"],
        PosCategory::Verb => &["do", "make", "get", "take", "go"],
        PosCategory::Adjective => &["good", "bad", "big", "small", "new"],
        PosCategory::Adverb => &["well", "badly", "quickly", "slowly", "carefully"],
        _ => &[],
    }
}

/// First quiz category (noun, verb, adjective, adverb) whose words contain
/// `word` after normalization.
pub fn find_word_category(word: &str, breakdown: &PosBreakdown) -> Option<PosCategory> {
    let normalized = normalize_word(word);

    PosCategory::SEMANTIC.into_iter().find(|category| {
        breakdown
            .get(category)
            .is_some_and(|words| words.iter().any(|w| normalize_word(w) == normalized))
    })
}

/// Up to three distractors of `category` for `target_word`.
///
/// Story words come first in sorted order, then fallback words fill the
/// remaining slots. Never contains the normalized target.
pub fn wrong_answers(
    target_word: &str,
    category: Option<PosCategory>,
    story_sentences: &[AnalyzedSentence],
) -> Vec<String> {
    let Some(category) = category else {
        return Vec::new();
    };
    let target = normalize_word(target_word);

    let candidates: BTreeSet<String> = story_sentences
        .iter()
        .flat_map(|s| s.words(category))
        .map(|w| normalize_word(w))
        .filter(|w| *w != target && w.chars().count() > 1)
        .collect();

    let mut answers: Vec<String> = candidates.into_iter().take(MAX_WRONG_ANSWERS).collect();

    for word in fallback_words(category) {
        if answers.len() >= MAX_WRONG_ANSWERS {
            break;
        }
        let normalized = normalize_word(word);
        if normalized != target && !answers.contains(&normalized) {
            answers.push(normalized);
        }
    }

    answers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sentence(breakdown: &[(PosCategory, &[&str])]) -> AnalyzedSentence {
        AnalyzedSentence {
            sentence_id: None,
            sentence_index: None,
            original_english: String::new(),
            original_korean: String::new(),
            pos_breakdown: breakdown
                .iter()
                .map(|(c, words)| (*c, words.iter().map(|w| w.to_string()).collect()))
                .collect(),
        }
    }

    #[test]
    fn test_category_lookup_order() {
        let analyzed = sentence(&[
            (PosCategory::Verb, &["run"]),
            (PosCategory::Noun, &["Run"]),
        ]);

        assert_eq!(
            find_word_category("run", &analyzed.pos_breakdown),
            Some(PosCategory::Noun)
        );
    }

    #[test]
    fn test_untracked_category_is_ignored() {
        let analyzed = sentence(&[
            (PosCategory::Pronoun, &["she"]),
            (PosCategory::Others, &["the"]),
        ]);

        assert_eq!(find_word_category("She", &analyzed.pos_breakdown), None);
        assert_eq!(find_word_category("the", &analyzed.pos_breakdown), None);
    }

    #[test]
    fn test_story_words_sorted_then_fallback() {
        let story = vec![
            sentence(&[(PosCategory::Adjective, &["quick"])]),
            sentence(&[(PosCategory::Adjective, &["lazy", "Brown,"])]),
        ];

        let answers = wrong_answers("quick", Some(PosCategory::Adjective), &story);
        assert_eq!(answers, vec!["brown", "lazy", "good"]);
    }

    #[test]
    fn test_candidates_deduplicated_and_capped() {
        let story = vec![
            sentence(&[(PosCategory::Noun, &["tree", "Tree", "a", "river", "fox"])]),
            sentence(&[(PosCategory::Noun, &["apple", "fox"])]),
        ];

        let answers = wrong_answers("Fox", Some(PosCategory::Noun), &story);
        assert_eq!(answers, vec!["apple", "river", "tree"]);
    }

    #[test]
    fn test_fallback_only_excludes_target() {
        let story = vec![sentence(&[(PosCategory::Verb, &["do"])])];

        let answers = wrong_answers("do", Some(PosCategory::Verb), &story);
        assert_eq!(answers, vec!["make", "get", "take"]);
    }

    #[test]
    fn test_no_category_no_answers() {
        let story = vec![sentence(&[(PosCategory::Noun, &["tree"])])];

        assert!(wrong_answers("tree", None, &story).is_empty());
    }

    #[test]
    fn test_fallback_skips_story_duplicates() {
        let story = vec![sentence(&[(PosCategory::Adverb, &["quickly"])])];

        let answers = wrong_answers("fast", Some(PosCategory::Adverb), &story);
        assert_eq!(answers, vec!["quickly", "well", "badly"]);
    }
}
