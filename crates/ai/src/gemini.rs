//! Google Gemini `generateContent` provider.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::AiError;
use crate::provider::{ensure_success, extract_text, TextProvider};

const PROVIDER: &str = "gemini";
const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// HTTP client for the Gemini REST API.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<ModelInfo>,
}

/// A model entry from `GET /models`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

impl ModelInfo {
    pub fn supports_generate_content(&self) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == "generateContent")
    }
}

impl GeminiProvider {
    pub fn new(client: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            client,
            api_key,
            model,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Models available to this key that accept `generateContent`.
    pub async fn list_models(&self) -> Result<Vec<ModelInfo>, AiError> {
        let response = self
            .client
            .get(format!("{BASE_URL}/models"))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await?;

        let list: ModelList = ensure_success(PROVIDER, response).await?.json().await?;
        Ok(list
            .models
            .into_iter()
            .filter(ModelInfo::supports_generate_content)
            .collect())
    }
}

#[async_trait]
impl TextProvider for GeminiProvider {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn generate(&self, prompt: &str) -> Result<String, AiError> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(format!("{BASE_URL}/models/{}:generateContent", self.model))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let json: serde_json::Value = ensure_success(PROVIDER, response).await?.json().await?;
        extract_text(PROVIDER, &json, "/candidates/0/content/parts/0/text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_list_keeps_only_generate_content() {
        let raw = r#"{"models": [
            {"name": "models/gemini-2.5-flash", "supportedGenerationMethods": ["generateContent", "countTokens"]},
            {"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]},
            {"name": "models/legacy"}
        ]}"#;
        let list: ModelList = serde_json::from_str(raw).unwrap();
        let usable: Vec<&str> = list
            .models
            .iter()
            .filter(|m| m.supports_generate_content())
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(usable, vec!["models/gemini-2.5-flash"]);
    }
}
