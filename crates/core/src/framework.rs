//! The six ethical framework tags attached to every dilemma option.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A philosophical stance an option represents.
///
/// The wire form is the lowercase English name. Labels written by earlier
/// Spanish-language releases are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EthicalFramework {
    #[serde(alias = "utilitarianismo", alias = "utilitarismo")]
    Utilitarianism,
    #[serde(alias = "deontologia", alias = "deontología")]
    Deontology,
    #[serde(alias = "autonomia", alias = "autonomía")]
    Autonomy,
    #[serde(alias = "paternalismo")]
    Paternalism,
    #[serde(alias = "ecocentrismo")]
    Ecocentrism,
    #[serde(alias = "antropocentrismo")]
    Anthropocentrism,
}

impl EthicalFramework {
    /// Every framework, in catalog order.
    pub const ALL: [EthicalFramework; 6] = [
        Self::Utilitarianism,
        Self::Deontology,
        Self::Autonomy,
        Self::Paternalism,
        Self::Ecocentrism,
        Self::Anthropocentrism,
    ];

    /// Canonical wire/database value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utilitarianism => "utilitarianism",
            Self::Deontology => "deontology",
            Self::Autonomy => "autonomy",
            Self::Paternalism => "paternalism",
            Self::Ecocentrism => "ecocentrism",
            Self::Anthropocentrism => "anthropocentrism",
        }
    }

    /// Parse a label case-insensitively, accepting legacy aliases.
    pub fn parse(label: &str) -> Result<Self, CoreError> {
        let normalized = label.trim().to_lowercase();
        let framework = match normalized.as_str() {
            "utilitarianism" | "utilitarianismo" | "utilitarismo" => Self::Utilitarianism,
            "deontology" | "deontologia" | "deontología" => Self::Deontology,
            "autonomy" | "autonomia" | "autonomía" => Self::Autonomy,
            "paternalism" | "paternalismo" => Self::Paternalism,
            "ecocentrism" | "ecocentrismo" => Self::Ecocentrism,
            "anthropocentrism" | "antropocentrismo" => Self::Anthropocentrism,
            _ => {
                return Err(CoreError::Validation(format!(
                    "Unknown ethical framework '{label}'. Must be one of: {}",
                    Self::ALL.map(|f| f.as_str()).join(", ")
                )))
            }
        };
        Ok(framework)
    }
}

impl std::fmt::Display for EthicalFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalize a free-form framework label for storage.
///
/// Known labels collapse to their canonical value; anything else is kept
/// trimmed and lowercased so stats still group it consistently.
pub fn normalize_framework_label(label: &str) -> String {
    match EthicalFramework::parse(label) {
        Ok(framework) => framework.as_str().to_string(),
        Err(_) => label.trim().to_lowercase(),
    }
}
