/// Provider configuration loaded from environment variables.
///
/// A provider is enabled only when its API key is set and non-blank.
#[derive(Debug, Clone)]
pub struct AiConfig {
    /// Credential for the primary provider (Gemini).
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    /// Credential for the alternate provider (OpenAI).
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    /// HTTP timeout for provider calls, in seconds.
    pub timeout_secs: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            gemini_model: "gemini-2.5-flash".into(),
            openai_api_key: None,
            openai_model: "gpt-4o-mini".into(),
            timeout_secs: 30,
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

impl AiConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default            |
    /// |-------------------|--------------------|
    /// | `GOOGLE_API_KEY`  | unset              |
    /// | `GEMINI_MODEL`    | `gemini-2.5-flash` |
    /// | `OPENAI_API_KEY`  | unset              |
    /// | `OPENAI_MODEL`    | `gpt-4o-mini`      |
    /// | `AI_TIMEOUT_SECS` | `30`               |
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let timeout_secs: u64 = std::env::var("AI_TIMEOUT_SECS")
            .unwrap_or_else(|_| defaults.timeout_secs.to_string())
            .parse()
            .expect("AI_TIMEOUT_SECS must be a valid u64");

        Self {
            google_api_key: non_blank(std::env::var("GOOGLE_API_KEY").ok()),
            gemini_model: non_blank(std::env::var("GEMINI_MODEL").ok())
                .unwrap_or(defaults.gemini_model),
            openai_api_key: non_blank(std::env::var("OPENAI_API_KEY").ok()),
            openai_model: non_blank(std::env::var("OPENAI_MODEL").ok())
                .unwrap_or(defaults.openai_model),
            timeout_secs,
        }
    }

    pub fn any_configured(&self) -> bool {
        self.google_api_key.is_some() || self.openai_api_key.is_some()
    }
}
