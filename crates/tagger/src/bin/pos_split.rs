use anyhow::{Context, Result};
use stories::AppConfig;
use tagger::{OllamaTagger, Tagger};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env();

    // The only fatal error: no model, no run.
    let backend = OllamaTagger::from_config(&config.tagger);
    backend
        .ensure_model()
        .await
        .context(format!("POS model '{}' could not be loaded", backend.model()))?;

    let tagger = Tagger::new(backend);
    match tagger.run(&config.paths).await {
        Ok(Some(summary)) => {
            tracing::info!(
                files = summary.files_analyzed,
                sentences = summary.sentences_analyzed,
                failed_sentences = summary.sentences_failed,
                "Tagging finished"
            );
        }
        Ok(None) => {}
        Err(e) => {
            println!("Failed to save results: {:#}", e);
            tracing::error!(error = %e, "Tagging run failed");
        }
    }

    Ok(())
}
