//! Connectivity smoke test for the configured text providers.
//!
//! Reports which credentials are present, lists the Gemini models that
//! accept `generateContent`, and sends a short prompt to each provider.
//! Exits non-zero if any configured provider fails.

use std::process::ExitCode;
use std::time::Duration;

use quandary_ai::gemini::GeminiProvider;
use quandary_ai::openai::OpenAiProvider;
use quandary_ai::{AiConfig, TextProvider};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const TEST_PROMPT: &str = "Reply with one short sentence confirming you can read this.";

/// Show only the ends of a credential.
fn mask(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

async fn probe(provider: &dyn TextProvider) -> bool {
    match provider.generate(TEST_PROMPT).await {
        Ok(text) => {
            tracing::info!(provider = provider.name(), reply = %text, "Provider answered");
            true
        }
        Err(e) => {
            tracing::error!(provider = provider.name(), error = %e, "Provider failed");
            false
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "check_provider=info,quandary_ai=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AiConfig::from_env();
    if !config.any_configured() {
        tracing::error!("Neither GOOGLE_API_KEY nor OPENAI_API_KEY is set");
        return ExitCode::FAILURE;
    }

    let http = match reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "Failed to build HTTP client");
            return ExitCode::FAILURE;
        }
    };

    let mut all_ok = true;

    if let Some(key) = &config.google_api_key {
        tracing::info!(key = %mask(key), model = %config.gemini_model, "Gemini credential found");
        let gemini = GeminiProvider::new(http.clone(), key.clone(), config.gemini_model.clone());

        match gemini.list_models().await {
            Ok(models) => {
                tracing::info!(count = models.len(), "Models supporting generateContent");
                for model in &models {
                    tracing::info!(model = %model.name, "  available");
                }
                let wanted = format!("models/{}", gemini.model());
                if !models.iter().any(|m| m.name == wanted) {
                    tracing::warn!(model = %gemini.model(), "Configured model is not in the list");
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Could not list Gemini models");
                all_ok = false;
            }
        }

        all_ok &= probe(&gemini).await;
    } else {
        tracing::info!("GOOGLE_API_KEY not set, skipping Gemini");
    }

    if let Some(key) = &config.openai_api_key {
        tracing::info!(key = %mask(key), model = %config.openai_model, "OpenAI credential found");
        let openai = OpenAiProvider::new(http, key.clone(), config.openai_model.clone());
        all_ok &= probe(&openai).await;
    } else {
        tracing::info!("OPENAI_API_KEY not set, skipping OpenAI");
    }

    if all_ok {
        tracing::info!("All configured providers are reachable");
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
