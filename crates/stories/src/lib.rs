pub mod analysis;
pub mod config;
pub mod reader;
pub mod story;
pub mod writer;

pub use analysis::{AnalysisResults, AnalyzedSentence, PosBreakdown, PosCategory, StoryAnalysis};
pub use config::{AppConfig, PathsConfig, TaggerConfig};
pub use reader::{FileReader, file_name};
pub use story::{Sentence, Story};
pub use writer::FileWriter;

use sha2::{Digest, Sha256};

/// Generate a stable sentence ID from its story file, position and text.
///
/// Both jobs compute this independently, so the enricher can find a
/// sentence's analysis without comparing text.
pub fn generate_sentence_id(story_filename: &str, index: usize, english: &str) -> String {
    let english = english.trim();
    let mut hasher = Sha256::new();
    // Length-prefixed so neighbouring fields cannot run into each other
    hasher.update((story_filename.len() as u64).to_le_bytes());
    hasher.update(story_filename.as_bytes());
    hasher.update((index as u64).to_le_bytes());
    hasher.update((english.len() as u64).to_le_bytes());
    hasher.update(english.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..16])
}
