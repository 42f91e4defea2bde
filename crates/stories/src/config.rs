use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub paths: PathsConfig,
    pub tagger: TaggerConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Story JSON files, enriched in place.
    pub data_dir: PathBuf,
    /// Public mirror; only written when it already exists.
    pub public_data_dir: PathBuf,
    /// Analysis cache written by the tagger and read by the enricher.
    pub results_file: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaggerConfig {
    pub base_url: String,
    pub model: String,
    pub max_json_retries: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_root(".")
    }
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
            max_json_retries: 3,
        }
    }
}

impl AppConfig {
    /// Lay out the standard project directories under `root`.
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            paths: PathsConfig {
                data_dir: root.join("data"),
                public_data_dir: root.join("public").join("data"),
                results_file: root.join("utils").join("pos_split_results.json"),
            },
            tagger: TaggerConfig::default(),
        }
    }

    /// Build from the environment: `STORY_ROOT` picks the project root,
    /// `OLLAMA_BASE_URL` and `POS_MODEL` override the tagging backend.
    pub fn from_env() -> Self {
        let root = std::env::var_os("STORY_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let mut config = Self::for_root(root);

        if let Ok(base_url) = std::env::var("OLLAMA_BASE_URL") {
            config.tagger.base_url = base_url;
        }
        if let Ok(model) = std::env::var("POS_MODEL") {
            config.tagger.model = model;
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_root() {
        let config = AppConfig::for_root("/srv/app");

        assert_eq!(config.paths.data_dir, PathBuf::from("/srv/app/data"));
        assert_eq!(config.paths.public_data_dir, PathBuf::from("/srv/app/public/data"));
        assert_eq!(
            config.paths.results_file,
            PathBuf::from("/srv/app/utils/pos_split_results.json")
        );
        assert_eq!(config.tagger.max_json_retries, 3);
    }
}
