//! Cached provider-generated dilemmas.

/// DTO for caching a generated dilemma.
#[derive(Debug, Clone)]
pub struct CreateCachedDilemma {
    pub scenario: String,
    pub options_json: String,
    pub category: String,
    pub image_url: String,
}
