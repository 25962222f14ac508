use async_trait::async_trait;

use crate::error::AiError;

/// A hosted model that turns a prompt into text.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Short provider name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Send `prompt` and return the model's text, trimmed.
    async fn generate(&self, prompt: &str) -> Result<String, AiError>;
}

/// Ensure the response has a success status code, returning it unchanged
/// or an [`AiError::Api`] carrying the status and body text.
pub(crate) async fn ensure_success(
    provider: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, AiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(AiError::Api {
            provider,
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Pull the text at `pointer` out of a provider's JSON response.
pub(crate) fn extract_text(
    provider: &'static str,
    json: &serde_json::Value,
    pointer: &str,
) -> Result<String, AiError> {
    json.pointer(pointer)
        .and_then(|v| v.as_str())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .ok_or(AiError::EmptyResponse(provider))
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    #[test]
    fn extract_text_trims_content() {
        let body = json!({"choices": [{"message": {"content": "  hello \n"}}]});
        let text = extract_text("openai", &body, "/choices/0/message/content").unwrap();
        assert_eq!(text, "hello");
    }

    #[test]
    fn extract_text_rejects_missing_or_blank() {
        let blank = json!({"choices": [{"message": {"content": "   "}}]});
        assert_matches!(
            extract_text("openai", &blank, "/choices/0/message/content"),
            Err(AiError::EmptyResponse("openai"))
        );
        assert_matches!(
            extract_text("gemini", &json!({}), "/candidates/0/content/parts/0/text"),
            Err(AiError::EmptyResponse("gemini"))
        );
    }
}
