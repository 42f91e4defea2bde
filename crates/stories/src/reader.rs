use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::analysis::AnalysisResults;
use crate::story::Story;

pub struct FileReader;

impl FileReader {
    /// All `*.json` files directly inside `dir`, sorted by file name.
    pub async fn list_story_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        let mut entries = fs::read_dir(dir)
            .await
            .context(format!("Failed to read directory: {:?}", dir))?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                files.push(path);
            }
        }

        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }

    pub async fn read_story(path: &Path) -> Result<Story> {
        let content = fs::read_to_string(path)
            .await
            .context(format!("Failed to read file: {:?}", path))?;

        serde_json::from_str(&content).context(format!("Failed to parse story: {:?}", path))
    }

    pub async fn read_results(path: &Path) -> Result<AnalysisResults> {
        let content = fs::read_to_string(path)
            .await
            .context(format!("Failed to read file: {:?}", path))?;

        serde_json::from_str(&content)
            .context(format!("Failed to parse analysis results: {:?}", path))
    }
}

/// File name component as a string, e.g. `fox.json`.
pub fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default()
}
