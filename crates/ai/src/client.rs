//! Best-effort dilemma generation and decision commentary.
//!
//! Providers are tried in order; the first usable answer wins. Failures
//! are logged and surface to callers as "no result". An optional deadline
//! bounds the whole sequence so callers can fall back in time.

use std::sync::Arc;
use std::time::Duration;

use quandary_core::category::GENERATION_CATEGORIES;
use quandary_core::dilemma::{parse_generated_dilemma, GeneratedDilemma};
use rand::seq::IndexedRandom;

use crate::config::AiConfig;
use crate::error::AiError;
use crate::gemini::GeminiProvider;
use crate::openai::OpenAiProvider;
use crate::prompts::{analysis_prompt, dilemma_prompt};
use crate::provider::TextProvider;

/// Ordered set of text providers.
#[derive(Clone, Default)]
pub struct AiClient {
    providers: Vec<Arc<dyn TextProvider>>,
    /// Upper bound on one completion across every provider.
    deadline: Option<Duration>,
}

impl AiClient {
    pub fn new(providers: Vec<Arc<dyn TextProvider>>) -> Self {
        Self {
            providers,
            deadline: None,
        }
    }

    /// Bound each completion, fallbacks included, by `deadline`.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// A client with no providers; every call yields no result.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Build providers for every configured credential, Gemini first.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        let mut providers: Vec<Arc<dyn TextProvider>> = Vec::new();
        if let Some(key) = &config.google_api_key {
            providers.push(Arc::new(GeminiProvider::new(
                http.clone(),
                key.clone(),
                config.gemini_model.clone(),
            )));
        }
        if let Some(key) = &config.openai_api_key {
            providers.push(Arc::new(OpenAiProvider::new(
                http,
                key.clone(),
                config.openai_model.clone(),
            )));
        }
        Ok(Self::new(providers))
    }

    pub fn is_enabled(&self) -> bool {
        !self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// [`try_providers`](Self::try_providers) within the deadline, if any.
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let Some(deadline) = self.deadline else {
            return self.try_providers(prompt).await;
        };
        match tokio::time::timeout(deadline, self.try_providers(prompt)).await {
            Ok(result) => result,
            Err(_) => Err(AiError::DeadlineExceeded(deadline)),
        }
    }

    /// Send `prompt` to each provider in turn until one answers.
    async fn try_providers(&self, prompt: &str) -> Result<String, AiError> {
        let mut last_error = AiError::NotConfigured;
        for provider in &self.providers {
            match provider.generate(prompt).await {
                Ok(text) => return Ok(text),
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "Text provider failed");
                    last_error = e;
                }
            }
        }
        Err(last_error)
    }

    /// Ask for a dilemma in a random generation category and validate it.
    ///
    /// A response that cannot be parsed is returned as
    /// [`AiError::Malformed`] with the prompt and raw text attached.
    pub async fn try_generate_dilemma(&self) -> Result<GeneratedDilemma, AiError> {
        if !self.is_enabled() {
            return Err(AiError::NotConfigured);
        }

        let category = GENERATION_CATEGORIES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(GENERATION_CATEGORIES[0]);
        let prompt = dilemma_prompt(category);

        let response = self.complete(&prompt).await?;
        parse_generated_dilemma(&response).map_err(|e| AiError::Malformed {
            prompt,
            response,
            reason: e.to_string(),
        })
    }

    /// [`try_generate_dilemma`](Self::try_generate_dilemma), with failures
    /// logged and collapsed to `None`.
    pub async fn generate_dilemma(&self) -> Option<GeneratedDilemma> {
        match self.try_generate_dilemma().await {
            Ok(dilemma) => Some(dilemma),
            Err(AiError::NotConfigured) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Dilemma generation failed");
                None
            }
        }
    }

    /// Commentary on a decision, or `None` if disabled, the scenario is
    /// blank, or every provider failed.
    pub async fn analyze(
        &self,
        scenario: &str,
        chosen_option: &str,
        framework: &str,
    ) -> Option<String> {
        if !self.is_enabled() || scenario.trim().is_empty() {
            return None;
        }

        let prompt = analysis_prompt(scenario, chosen_option, framework);
        match self.complete(&prompt).await {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!(error = %e, "Decision analysis failed");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use quandary_core::framework::EthicalFramework;

    use super::*;

    /// Replies with a fixed text, or fails when `reply` is `None`,
    /// after an optional delay.
    struct ScriptedProvider {
        name: &'static str,
        reply: Option<&'static str>,
        delay: Duration,
        calls: AtomicUsize,
    }

    impl ScriptedProvider {
        fn new(name: &'static str, reply: Option<&'static str>) -> Arc<Self> {
            Self::slow(name, reply, Duration::ZERO)
        }

        fn slow(name: &'static str, reply: Option<&'static str>, delay: Duration) -> Arc<Self> {
            Arc::new(Self {
                name,
                reply,
                delay,
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl TextProvider for ScriptedProvider {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn generate(&self, _prompt: &str) -> Result<String, AiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.reply
                .map(str::to_string)
                .ok_or(AiError::EmptyResponse(self.name))
        }
    }

    fn client_of(providers: &[&Arc<ScriptedProvider>]) -> AiClient {
        AiClient::new(
            providers
                .iter()
                .map(|p| Arc::clone(*p) as Arc<dyn TextProvider>)
                .collect(),
        )
    }

    const VALID: &str = r#"```json
{"category": "technology", "scenario": "An app can predict illness from typing patterns.",
 "options": [{"text": "Ship it with consent screens", "ethical_value": "autonomy"},
             {"text": "Hold it back until regulated", "ethical_value": "paternalism"}]}
```"#;

    #[tokio::test]
    async fn disabled_client_yields_nothing() {
        let client = AiClient::disabled();
        assert!(!client.is_enabled());
        assert_matches!(client.try_generate_dilemma().await, Err(AiError::NotConfigured));
        assert!(client.analyze("scenario", "option", "autonomy").await.is_none());
    }

    #[tokio::test]
    async fn fenced_json_is_accepted() {
        let client = client_of(&[&ScriptedProvider::new("fake", Some(VALID))]);
        let dilemma = client.generate_dilemma().await.unwrap();
        assert_eq!(dilemma.category, "technology");
        assert_eq!(dilemma.options.len(), 2);
        assert_eq!(dilemma.options[1].ethical_value, EthicalFramework::Paternalism);
    }

    #[tokio::test]
    async fn malformed_output_carries_the_exchange() {
        let client = client_of(&[&ScriptedProvider::new("fake", Some("Sure! Here's a dilemma."))]);
        assert_matches!(
            client.try_generate_dilemma().await,
            Err(AiError::Malformed { prompt, response, .. }) => {
                assert!(prompt.contains("ethical dilemma"));
                assert_eq!(response, "Sure! Here's a dilemma.");
            }
        );
        assert!(client.generate_dilemma().await.is_none());
    }

    #[tokio::test]
    async fn alternate_provider_is_used_after_failure() {
        let primary = ScriptedProvider::new("primary", None);
        let alternate = ScriptedProvider::new("alternate", Some("Thoughtful commentary."));
        let client = client_of(&[&primary, &alternate]);

        let analysis = client.analyze("A scenario", "An option", "deontology").await;
        assert_eq!(analysis.as_deref(), Some("Thoughtful commentary."));
        assert_eq!(primary.calls.load(Ordering::SeqCst), 1);
        assert_eq!(alternate.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn alternate_is_not_called_when_primary_answers() {
        let primary = ScriptedProvider::new("primary", Some("First."));
        let alternate = ScriptedProvider::new("alternate", Some("Second."));
        let client = client_of(&[&primary, &alternate]);

        assert_eq!(client.analyze("s", "o", "autonomy").await.as_deref(), Some("First."));
        assert_eq!(alternate.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn deadline_bounds_the_whole_fallback_chain() {
        let primary = ScriptedProvider::slow("primary", None, Duration::from_millis(400));
        let alternate = ScriptedProvider::slow("alternate", None, Duration::from_millis(400));
        let client = client_of(&[&primary, &alternate]).with_deadline(Duration::from_millis(100));

        let started = std::time::Instant::now();
        assert_matches!(
            client.try_generate_dilemma().await,
            Err(AiError::DeadlineExceeded(limit)) if limit == Duration::from_millis(100)
        );
        assert!(started.elapsed() < Duration::from_millis(400));
        assert_eq!(alternate.calls.load(Ordering::SeqCst), 0);
        assert!(client.analyze("A scenario", "An option", "autonomy").await.is_none());
    }

    #[tokio::test]
    async fn answer_within_deadline_is_kept() {
        let provider = ScriptedProvider::slow("fake", Some("Quick."), Duration::from_millis(10));
        let client = client_of(&[&provider]).with_deadline(Duration::from_secs(5));
        assert_eq!(client.analyze("s", "o", "autonomy").await.as_deref(), Some("Quick."));
    }

    #[tokio::test]
    async fn blank_scenario_skips_analysis() {
        let provider = ScriptedProvider::new("fake", Some("unused"));
        let client = client_of(&[&provider]);
        assert!(client.analyze("   ", "option", "autonomy").await.is_none());
        assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn from_config_orders_gemini_first() {
        let config = AiConfig {
            google_api_key: Some("g".into()),
            openai_api_key: Some("o".into()),
            ..AiConfig::default()
        };
        let client = AiClient::from_config(&config).unwrap();
        assert_eq!(client.provider_names(), vec!["gemini", "openai"]);

        let none = AiClient::from_config(&AiConfig::default()).unwrap();
        assert!(!none.is_enabled());
    }
}
