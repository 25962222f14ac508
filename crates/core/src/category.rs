//! Dilemma categories.
//!
//! Categories stay plain strings because generated dilemmas may carry any
//! category the provider returns; the constants below are the ones the
//! catalogs and achievement rules know about.

pub const CATEGORY_CLASSIC: &str = "classic";
pub const CATEGORY_MEDICINE: &str = "medicine";
pub const CATEGORY_TECHNOLOGY: &str = "technology";
pub const CATEGORY_ENVIRONMENT: &str = "environment";
pub const CATEGORY_BUSINESS: &str = "business";
pub const CATEGORY_SOCIETY: &str = "society";
pub const CATEGORY_EDUCATION: &str = "education";
pub const CATEGORY_POLITICS: &str = "politics";
pub const CATEGORY_GENERAL: &str = "general";

/// Categories a player must cover for the explorer achievement.
pub const CORE_CATEGORIES: [&str; 6] = [
    CATEGORY_CLASSIC,
    CATEGORY_MEDICINE,
    CATEGORY_TECHNOLOGY,
    CATEGORY_ENVIRONMENT,
    CATEGORY_BUSINESS,
    CATEGORY_SOCIETY,
];

/// Categories offered to the provider when generating a new dilemma.
pub const GENERATION_CATEGORIES: [&str; 7] = [
    CATEGORY_MEDICINE,
    CATEGORY_TECHNOLOGY,
    CATEGORY_ENVIRONMENT,
    CATEGORY_BUSINESS,
    CATEGORY_SOCIETY,
    CATEGORY_EDUCATION,
    CATEGORY_POLITICS,
];

/// Lowercase, trim and translate legacy category names.
///
/// Blank input becomes [`CATEGORY_GENERAL`]. Unknown categories pass
/// through lowercased.
pub fn normalize_category(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let mapped = match lowered.as_str() {
        "" => CATEGORY_GENERAL,
        "clásico" | "clasico" => CATEGORY_CLASSIC,
        "medicina" => CATEGORY_MEDICINE,
        "tecnología" | "tecnologia" => CATEGORY_TECHNOLOGY,
        "medio ambiente" => CATEGORY_ENVIRONMENT,
        "negocios" => CATEGORY_BUSINESS,
        "sociedad" => CATEGORY_SOCIETY,
        "educación" | "educacion" => CATEGORY_EDUCATION,
        "política" | "politica" => CATEGORY_POLITICS,
        _ => return lowered,
    };
    mapped.to_string()
}
