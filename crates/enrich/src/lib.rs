pub mod distractors;
pub mod matcher;
pub mod normalizer;

pub use distractors::{MAX_WRONG_ANSWERS, fallback_words, find_word_category, wrong_answers};
pub use matcher::find_match;
pub use normalizer::normalize_word;

use anyhow::{Context, Result};
use stories::{
    AnalysisResults, FileReader, FileWriter, PathsConfig, Story, StoryAnalysis, file_name,
};
use tracing::{info, warn};

/// Add `partOfSpeech` and `wrongAnswers` to every sentence that can be
/// matched to its analysis. Returns how many sentences got a part of speech.
pub fn enrich_story(story_filename: &str, story: &mut Story, analysis: &StoryAnalysis) -> usize {
    let analyzed = &analysis.analyzed_sentences;
    let mut enhanced = 0;

    for (index, sentence) in story.sentences.iter_mut().enumerate() {
        if sentence.target_word_english.is_empty() {
            continue;
        }

        let Some(matched) = find_match(story_filename, index, sentence, analyzed) else {
            continue;
        };

        let category = find_word_category(&sentence.target_word_english, &matched.pos_breakdown);
        if let Some(category) = category {
            sentence.part_of_speech = Some(category.to_string());
            enhanced += 1;
        }

        let answers = wrong_answers(&sentence.target_word_english, category, analyzed);
        if !answers.is_empty() {
            sentence.wrong_answers = Some(answers);
        }
    }

    enhanced
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichSummary {
    pub files_total: usize,
    pub files_enhanced: usize,
    pub sentences_enhanced: usize,
}

pub struct Enricher {
    paths: PathsConfig,
}

impl Enricher {
    pub fn new(paths: PathsConfig) -> Self {
        Self { paths }
    }

    /// Enrich one story file in place and mirror it to the public data
    /// directory when that directory exists.
    pub async fn enhance_file(&self, filename: &str, results: &AnalysisResults) -> Result<usize> {
        let story_path = self.paths.data_dir.join(filename);
        if !story_path.is_file() {
            anyhow::bail!("Story file not found: {:?}", story_path);
        }

        let mut story = FileReader::read_story(&story_path).await?;

        let analysis = results
            .get(filename)
            .context(format!("No POS analysis for {}", filename))?;

        let enhanced = enrich_story(filename, &mut story, analysis);

        FileWriter::write_story(&story_path, &story).await?;
        if self.paths.public_data_dir.is_dir() {
            FileWriter::write_story(&self.paths.public_data_dir.join(filename), &story).await?;
        }

        Ok(enhanced)
    }

    /// Enrich every story in the data directory from the analysis cache.
    ///
    /// Returns `None` when the cache or the stories are unavailable.
    pub async fn run(&self) -> Option<EnrichSummary> {
        println!("📚 Enhancing story files...\n");

        let results_file = &self.paths.results_file;
        if !results_file.exists() {
            println!("❌ Cannot find {}", results_file.display());
            return None;
        }

        let results = match FileReader::read_results(results_file).await {
            Ok(results) => results,
            Err(e) => {
                println!("❌ Failed to read {}: {:#}", results_file.display(), e);
                return None;
            }
        };

        let files = match FileReader::list_story_files(&self.paths.data_dir).await {
            Ok(files) => files,
            Err(e) => {
                warn!(error = %e, "Data directory unavailable");
                Vec::new()
            }
        };

        if files.is_empty() {
            println!("⚠️  No JSON files in {}", self.paths.data_dir.display());
            return None;
        }

        let mut summary = EnrichSummary {
            files_total: files.len(),
            ..EnrichSummary::default()
        };

        for path in &files {
            let filename = file_name(path);

            match self.enhance_file(&filename, &results).await {
                Ok(enhanced) => {
                    println!("✅ {}: {} sentences enhanced", filename, enhanced);
                    summary.files_enhanced += 1;
                    summary.sentences_enhanced += enhanced;
                }
                Err(e) => {
                    println!("❌ {}: {:#}", filename, e);
                    warn!(file = %filename, error = %e, "Story not enhanced");
                }
            }
            println!();
        }

        println!(
            "✨ Done: {}/{} files enhanced",
            summary.files_enhanced, summary.files_total
        );
        info!(
            files = summary.files_enhanced,
            total = summary.files_total,
            sentences = summary.sentences_enhanced,
            "Enrichment finished"
        );

        Some(summary)
    }
}
