use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::PosTagger;
use crate::prompt;
use crate::tags::TaggedToken;

#[derive(Clone)]
pub struct OllamaTagger {
    base_url: String,
    model: String,
    max_json_retries: usize,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
    format: String, // "json" for structured output
}

#[derive(Deserialize)]
struct OllamaResponse {
    response: String,
}

#[derive(Serialize)]
struct PullRequest {
    model: String,
    stream: bool,
}

#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<LocalModel>,
}

#[derive(Deserialize)]
struct LocalModel {
    name: String,
}

#[derive(Deserialize)]
struct TaggingResponse {
    tokens: Vec<TaggedToken>,
}

impl OllamaTagger {
    pub fn new(base_url: String, model: String, max_json_retries: usize) -> Self {
        Self {
            base_url,
            model,
            max_json_retries: max_json_retries.max(1),
            client: reqwest::Client::new(),
        }
    }

    pub fn from_config(config: &stories::TaggerConfig) -> Self {
        Self::new(
            config.base_url.clone(),
            config.model.clone(),
            config.max_json_retries,
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Make sure the model is available locally, pulling it if not.
    pub async fn ensure_model(&self) -> Result<()> {
        if self.has_model().await? {
            return Ok(());
        }

        println!("Model '{}' not found. Downloading now...", self.model);
        self.pull_model().await?;

        if !self.has_model().await? {
            anyhow::bail!("Model '{}' is still unavailable after pulling", self.model);
        }
        info!(model = %self.model, "Model pulled");
        Ok(())
    }

    async fn has_model(&self) -> Result<bool> {
        let response = self
            .client
            .get(self.api_url("tags"))
            .send()
            .await
            .context("Failed to list Ollama models")?;

        if !response.status().is_success() {
            anyhow::bail!("Ollama model listing failed: {}", response.status());
        }

        let tags: TagsResponse = response
            .json()
            .await
            .context("Failed to parse Ollama model list")?;

        Ok(tags.models.iter().any(|m| model_matches(&m.name, &self.model)))
    }

    async fn pull_model(&self) -> Result<()> {
        let request = PullRequest {
            model: self.model.clone(),
            stream: false,
        };

        self.post_json("pull", &request).await?;
        Ok(())
    }

    /// Run one non-streaming completion with JSON output forced.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
            format: "json".to_string(),
        };

        let ollama_response: OllamaResponse = self
            .post_json("generate", &request)
            .await?
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        Ok(ollama_response.response)
    }

    /// POST `body` to `/api/<endpoint>`; a non-success status is an error.
    async fn post_json<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<reqwest::Response> {
        let response = self
            .client
            .post(self.api_url(endpoint))
            .json(body)
            .send()
            .await
            .context(format!("Failed to send {} request to Ollama", endpoint))?;

        if !response.status().is_success() {
            anyhow::bail!("Ollama {} request failed: {}", endpoint, response.status());
        }
        Ok(response)
    }

    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/api/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Generate tokens, asking the model to repair its own output when it
    /// is not the expected JSON.
    async fn generate_tokens_with_retry(&self, sentence: &str) -> Result<Vec<TaggedToken>> {
        let mut response = self.generate(&prompt::build_tagging_prompt(sentence)).await?;

        for attempt in 1..=self.max_json_retries {
            match parse_tagging_response(&response) {
                Ok(tokens) => return Ok(tokens),
                Err(e) => {
                    warn!(
                        attempt = attempt,
                        max_retries = self.max_json_retries,
                        error = %e,
                        "Tagger returned invalid JSON"
                    );
                    if attempt < self.max_json_retries {
                        response = self.generate(&prompt::build_retry_prompt(&response)).await?;
                    }
                }
            }
        }

        anyhow::bail!(
            "Failed to get valid JSON after {} attempts",
            self.max_json_retries
        )
    }
}

impl PosTagger for OllamaTagger {
    async fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        self.generate_tokens_with_retry(text).await
    }
}

fn parse_tagging_response(raw: &str) -> Result<Vec<TaggedToken>> {
    let parsed: TaggingResponse =
        serde_json::from_str(raw).context("Failed to parse tagging result")?;
    Ok(parsed.tokens)
}

/// `llama3` matches a local `llama3:latest`; an explicit tag must match exactly.
fn model_matches(local: &str, wanted: &str) -> bool {
    local == wanted
        || (!wanted.contains(':') && local.split(':').next() == Some(wanted))
}
