use regex::Regex;
use std::sync::LazyLock;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid non-word pattern"));

/// Normalize a word for comparison: drop punctuation, lowercase, trim.
pub fn normalize_word(word: &str) -> String {
    NON_WORD
        .replace_all(word, "")
        .to_lowercase()
        .trim()
        .to_string()
}
