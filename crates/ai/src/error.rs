use std::time::Duration;

/// Errors from the text provider layer.
#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No provider credential is configured.
    #[error("No text provider is configured")]
    NotConfigured,

    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("{provider} API error ({status}): {body}")]
    Api {
        provider: &'static str,
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The providers together did not answer within the client's deadline.
    #[error("Text providers did not answer within {0:?}")]
    DeadlineExceeded(Duration),

    /// The provider answered without any text.
    #[error("{0} returned an empty response")]
    EmptyResponse(&'static str),

    /// The provider's text could not be used. Carries the exchange so the
    /// caller can keep it for diagnosis.
    #[error("Unusable provider response: {reason}")]
    Malformed {
        prompt: String,
        response: String,
        reason: String,
    },
}
