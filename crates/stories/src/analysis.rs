use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Coarse grammatical bucket a tagged token lands in.
///
/// Declaration order is the serialization and iteration order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PosCategory {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Others,
}

impl PosCategory {
    /// Categories the quiz generates answers for, in lookup order.
    pub const SEMANTIC: [PosCategory; 4] = [
        PosCategory::Noun,
        PosCategory::Verb,
        PosCategory::Adjective,
        PosCategory::Adverb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PosCategory::Noun => "noun",
            PosCategory::Verb => "verb",
            PosCategory::Adjective => "adjective",
            PosCategory::Adverb => "adverb",
            PosCategory::Pronoun => "pronoun",
            PosCategory::Preposition => "preposition",
            PosCategory::Others => "others",
        }
    }

    pub fn is_semantic(&self) -> bool {
        Self::SEMANTIC.contains(self)
    }
}

impl fmt::Display for PosCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category -> token texts, in sentence order. Empty categories are absent.
pub type PosBreakdown = BTreeMap<PosCategory, Vec<String>>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalyzedSentence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence_index: Option<usize>,
    pub original_english: String,
    #[serde(default)]
    pub original_korean: String,
    #[serde(default)]
    pub pos_breakdown: PosBreakdown,
}

impl AnalyzedSentence {
    pub fn words(&self, category: PosCategory) -> &[String] {
        self.pos_breakdown
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoryAnalysis {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub analyzed_sentences: Vec<AnalyzedSentence>,
}

/// The analysis cache: story filename -> analysis.
pub type AnalysisResults = BTreeMap<String, StoryAnalysis>;
