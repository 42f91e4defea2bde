pub mod llm;
pub mod prompt;
pub mod tags;

pub use llm::OllamaTagger;
pub use tags::{TaggedToken, UposTag, bucket_tokens};

use anyhow::Result;
use std::path::PathBuf;
use stories::{
    AnalysisResults, AnalyzedSentence, FileReader, FileWriter, PathsConfig, Story, StoryAnalysis,
    file_name, generate_sentence_id,
};
use tracing::{error, info, warn};

/// A part-of-speech model: sentence in, `(token, coarse tag)` pairs out.
#[allow(async_fn_in_trait)]
pub trait PosTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagSummary {
    pub files_found: usize,
    pub files_analyzed: usize,
    pub sentences_analyzed: usize,
    pub sentences_failed: usize,
}

pub struct Tagger<T: PosTagger> {
    backend: T,
}

impl<T: PosTagger> Tagger<T> {
    pub fn new(backend: T) -> Self {
        Self { backend }
    }

    /// Analyze every sentence with English text. A sentence the model fails
    /// on is logged and left out; `sentence_index` keeps the original position.
    pub async fn analyze_story(
        &self,
        filename: &str,
        story: &Story,
        summary: &mut TagSummary,
    ) -> StoryAnalysis {
        let mut analyzed_sentences = Vec::new();

        for (index, sentence) in story.sentences.iter().enumerate() {
            if sentence.english.is_empty() {
                continue;
            }

            let tokens = match self.backend.tag(&sentence.english).await {
                Ok(tokens) => tokens,
                Err(e) => {
                    warn!(file = filename, index = index, error = %e, "Failed to tag sentence");
                    summary.sentences_failed += 1;
                    continue;
                }
            };

            analyzed_sentences.push(AnalyzedSentence {
                sentence_id: Some(generate_sentence_id(filename, index, &sentence.english)),
                sentence_index: Some(index),
                original_english: sentence.english.clone(),
                original_korean: sentence.korean.clone(),
                pos_breakdown: bucket_tokens(&tokens),
            });
            summary.sentences_analyzed += 1;
        }

        StoryAnalysis {
            title: story.title.clone(),
            analyzed_sentences,
        }
    }

    /// Analyze each story file. Files that fail to read or parse are logged
    /// and skipped.
    pub async fn analyze_files(&self, files: &[PathBuf]) -> (AnalysisResults, TagSummary) {
        let mut results = AnalysisResults::new();
        let mut summary = TagSummary {
            files_found: files.len(),
            ..TagSummary::default()
        };

        for path in files {
            let filename = file_name(path);

            let story = match FileReader::read_story(path).await {
                Ok(story) => story,
                Err(e) => {
                    println!("Error reading {}: {:#}", filename, e);
                    error!(file = %filename, error = %e, "Skipping unreadable story");
                    continue;
                }
            };

            let analysis = self.analyze_story(&filename, &story, &mut summary).await;
            info!(
                file = %filename,
                sentences = analysis.analyzed_sentences.len(),
                "Story analyzed"
            );
            results.insert(filename, analysis);
            summary.files_analyzed += 1;
        }

        (results, summary)
    }

    /// Tag the whole data directory and write the analysis cache.
    ///
    /// Returns `None` when there was nothing to do; the cache is then left
    /// untouched.
    pub async fn run(&self, paths: &PathsConfig) -> Result<Option<TagSummary>> {
        let files = match FileReader::list_story_files(&paths.data_dir).await {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, "Data directory unavailable");
                Vec::new()
            }
        };

        if files.is_empty() {
            println!("No JSON files found in {}", paths.data_dir.display());
            return Ok(None);
        }

        println!("Processing {} files...", files.len());
        let (results, summary) = self.analyze_files(&files).await;

        FileWriter::write_results(&paths.results_file, &results).await?;
        println!(
            "Successfully processed sentences. Results saved to: {}",
            paths.results_file.display()
        );

        Ok(Some(summary))
    }
}
