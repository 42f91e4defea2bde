use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use stories::{PosBreakdown, PosCategory};

static PUNCTUATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\p{P}+$").expect("valid punctuation pattern"));

/// Universal POS tag set, plus `SPACE` for whitespace tokens.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum UposTag {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Space,
    Sym,
    Verb,
    X,
    Other,
}

impl UposTag {
    pub fn parse(tag: &str) -> Self {
        match tag.trim().to_ascii_uppercase().as_str() {
            "ADJ" => UposTag::Adj,
            "ADP" => UposTag::Adp,
            "ADV" => UposTag::Adv,
            "AUX" => UposTag::Aux,
            "CCONJ" | "CONJ" => UposTag::Cconj,
            "DET" => UposTag::Det,
            "INTJ" => UposTag::Intj,
            "NOUN" => UposTag::Noun,
            "NUM" => UposTag::Num,
            "PART" => UposTag::Part,
            "PRON" => UposTag::Pron,
            "PROPN" => UposTag::Propn,
            "PUNCT" => UposTag::Punct,
            "SCONJ" => UposTag::Sconj,
            "SPACE" => UposTag::Space,
            "SYM" => UposTag::Sym,
            "VERB" => UposTag::Verb,
            "X" => UposTag::X,
            _ => UposTag::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UposTag::Adj => "ADJ",
            UposTag::Adp => "ADP",
            UposTag::Adv => "ADV",
            UposTag::Aux => "AUX",
            UposTag::Cconj => "CCONJ",
            UposTag::Det => "DET",
            UposTag::Intj => "INTJ",
            UposTag::Noun => "NOUN",
            UposTag::Num => "NUM",
            UposTag::Part => "PART",
            UposTag::Pron => "PRON",
            UposTag::Propn => "PROPN",
            UposTag::Punct => "PUNCT",
            UposTag::Sconj => "SCONJ",
            UposTag::Space => "SPACE",
            UposTag::Sym => "SYM",
            UposTag::Verb => "VERB",
            UposTag::X => "X",
            UposTag::Other => "OTHER",
        }
    }

    /// Bucket for this tag. Anything without a dedicated bucket is `others`.
    pub fn category(&self) -> PosCategory {
        match self {
            UposTag::Noun | UposTag::Propn => PosCategory::Noun,
            UposTag::Verb | UposTag::Aux => PosCategory::Verb,
            UposTag::Adj => PosCategory::Adjective,
            UposTag::Adv => PosCategory::Adverb,
            UposTag::Pron => PosCategory::Pronoun,
            UposTag::Adp => PosCategory::Preposition,
            _ => PosCategory::Others,
        }
    }
}

impl From<String> for UposTag {
    fn from(tag: String) -> Self {
        UposTag::parse(&tag)
    }
}

impl From<UposTag> for String {
    fn from(tag: UposTag) -> Self {
        tag.as_str().to_string()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaggedToken {
    pub text: String,
    #[serde(rename = "pos", alias = "tag")]
    pub tag: UposTag,
}

impl TaggedToken {
    pub fn new(text: &str, tag: UposTag) -> Self {
        Self {
            text: text.to_string(),
            tag,
        }
    }

    /// Punctuation and whitespace tokens never reach a bucket.
    pub fn is_skipped(&self) -> bool {
        matches!(self.tag, UposTag::Punct | UposTag::Space)
            || self.text.trim().is_empty()
            || PUNCTUATION.is_match(&self.text)
    }
}

/// Group token texts by category, keeping their order and spelling.
pub fn bucket_tokens(tokens: &[TaggedToken]) -> PosBreakdown {
    let mut breakdown = PosBreakdown::new();

    for token in tokens.iter().filter(|t| !t.is_skipped()) {
        breakdown
            .entry(token.tag.category())
            .or_default()
            .push(token.text.clone());
    }

    breakdown
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(pairs: &[(&str, &str)]) -> Vec<TaggedToken> {
        pairs
            .iter()
            .map(|(text, tag)| TaggedToken::new(text, UposTag::parse(tag)))
            .collect()
    }

    #[test]
    fn test_tag_mapping() {
        assert_eq!(UposTag::Propn.category(), PosCategory::Noun);
        assert_eq!(UposTag::Aux.category(), PosCategory::Verb);
        assert_eq!(UposTag::Adj.category(), PosCategory::Adjective);
        assert_eq!(UposTag::Adv.category(), PosCategory::Adverb);
        assert_eq!(UposTag::Pron.category(), PosCategory::Pronoun);
        assert_eq!(UposTag::Adp.category(), PosCategory::Preposition);
        assert_eq!(UposTag::Det.category(), PosCategory::Others);
        assert_eq!(UposTag::parse("whatever").category(), PosCategory::Others);
    }

    #[test]
    fn test_bucketing_skips_punctuation_and_space() {
        let breakdown = bucket_tokens(&tokens(&[
            ("The", "DET"),
            ("Quick", "ADJ"),
            ("fox", "NOUN"),
            ("jumps", "VERB"),
            (" ", "SPACE"),
            ("over", "ADP"),
            ("Seoul", "PROPN"),
            ("...", "X"),
            (".", "PUNCT"),
        ]));

        assert_eq!(breakdown[&PosCategory::Noun], ["fox", "Seoul"]);
        assert_eq!(breakdown[&PosCategory::Adjective], ["Quick"]);
        assert_eq!(breakdown[&PosCategory::Verb], ["jumps"]);
        assert_eq!(breakdown[&PosCategory::Preposition], ["over"]);
        assert_eq!(breakdown[&PosCategory::Others], ["The"]);
        assert!(!breakdown.contains_key(&PosCategory::Adverb));
        assert!(!breakdown.contains_key(&PosCategory::Pronoun));
    }

    #[test]
    fn test_bucketing_is_deterministic() {
        let input = tokens(&[("She", "PRON"), ("runs", "VERB"), ("fast", "ADV")]);

        assert_eq!(bucket_tokens(&input), bucket_tokens(&input));
    }

    #[test]
    fn test_contractions_are_not_punctuation() {
        let token = TaggedToken::new("'s", UposTag::Part);
        assert!(!token.is_skipped());
    }

    #[test]
    fn test_token_json_accepts_lowercase_tags() {
        let token: TaggedToken = serde_json::from_str(r#"{"text": "dog", "pos": "noun"}"#).unwrap();
        assert_eq!(token.tag, UposTag::Noun);

        let token: TaggedToken = serde_json::from_str(r#"{"text": "ran", "tag": "VERB"}"#).unwrap();
        assert_eq!(token.tag, UposTag::Verb);
    }
}
