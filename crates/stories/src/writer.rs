use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::fs;

use crate::analysis::AnalysisResults;
use crate::story::Story;

/// Writes pretty-printed (two-space indent) UTF-8 JSON. Non-ASCII text is
/// written as-is, never escaped.
pub struct FileWriter;

impl FileWriter {
    pub async fn write_story(path: &Path, story: &Story) -> Result<()> {
        Self::write_json(path, story).await
    }

    pub async fn write_results(path: &Path, results: &AnalysisResults) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .context(format!("Failed to create directory: {:?}", parent))?;
        }
        Self::write_json(path, results).await
    }

    async fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON")?;

        fs::write(path, json)
            .await
            .context(format!("Failed to write file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::FileReader;
    use crate::story::Sentence;

    #[tokio::test]
    async fn test_story_written_pretty_with_unicode() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fox.json");
        let story = Story {
            title: "여우".to_string(),
            sentences: vec![Sentence::new("Run.", "달려.", "run")],
            ..Story::default()
        };

        FileWriter::write_story(&path, &story).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"title\": \"여우\""));
        assert!(raw.contains("\n  \"sentences\""));

        let reread = FileReader::read_story(&path).await.unwrap();
        assert_eq!(reread, story);
    }

    #[tokio::test]
    async fn test_results_parent_directory_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("utils").join("pos_split_results.json");

        FileWriter::write_results(&path, &AnalysisResults::new())
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
