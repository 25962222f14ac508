//! Dilemmas: the predefined catalog and parsing of provider-generated ones.

use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::category::{
    normalize_category, CATEGORY_BUSINESS, CATEGORY_CLASSIC, CATEGORY_ENVIRONMENT,
    CATEGORY_MEDICINE, CATEGORY_SOCIETY, CATEGORY_TECHNOLOGY,
};
use crate::error::CoreError;
use crate::framework::EthicalFramework::{
    self, Anthropocentrism, Autonomy, Deontology, Ecocentrism, Paternalism, Utilitarianism,
};

/// Ids handed to generated dilemmas; predefined ids stay below this range.
pub const GENERATED_ID_RANGE: RangeInclusive<i64> = 1000..=9999;

/// Every dilemma offers exactly this many options.
pub const OPTIONS_PER_DILEMMA: usize = 2;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One of the two choices in a dilemma.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DilemmaOption {
    pub text: String,
    pub ethical_value: EthicalFramework,
}

/// A dilemma as served to the client.
#[derive(Debug, Clone, Serialize)]
pub struct Dilemma {
    pub id: i64,
    pub category: String,
    pub scenario: String,
    pub options: Vec<DilemmaOption>,
    pub image_url: String,
}

/// A validated dilemma produced by a text provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedDilemma {
    pub category: String,
    pub scenario: String,
    pub options: Vec<DilemmaOption>,
}

/// A hand-authored catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct PredefinedDilemma {
    pub id: i64,
    pub category: &'static str,
    pub scenario: &'static str,
    pub options: [(&'static str, EthicalFramework); OPTIONS_PER_DILEMMA],
}

impl PredefinedDilemma {
    pub fn options(&self) -> Vec<DilemmaOption> {
        self.options
            .iter()
            .map(|(text, framework)| DilemmaOption {
                text: (*text).to_string(),
                ethical_value: *framework,
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Predefined catalog
// ---------------------------------------------------------------------------

pub static PREDEFINED_DILEMMAS: [PredefinedDilemma; 20] = [
    PredefinedDilemma {
        id: 1,
        category: CATEGORY_CLASSIC,
        scenario: "A runaway trolley is heading toward five people tied to the tracks. You can pull a lever to divert it onto another track where one person is tied. What do you do?",
        options: [
            ("I pull the lever (save five, sacrifice one)", Utilitarianism),
            ("I do nothing (I do not intervene in fate)", Deontology),
        ],
    },
    PredefinedDilemma {
        id: 2,
        category: CATEGORY_MEDICINE,
        scenario: "You are a doctor and your patient could be saved by an experimental treatment, but you would have to lie about the odds of success for them to accept it. What do you do?",
        options: [
            ("I tell the truth and respect their autonomy", Autonomy),
            ("I lie to save their life", Paternalism),
        ],
    },
    PredefinedDilemma {
        id: 3,
        category: CATEGORY_ENVIRONMENT,
        scenario: "Your company can pollute a river to save $1 million, which would keep 100 jobs. What do you do?",
        options: [
            ("I protect the environment and close the plant", Ecocentrism),
            ("I keep the jobs at the expense of the environment", Anthropocentrism),
        ],
    },
    PredefinedDilemma {
        id: 4,
        category: CATEGORY_TECHNOLOGY,
        scenario: "You have built an AI that predicts crimes with 95% accuracy, but it needs full access to the personal data of every citizen. What do you do?",
        options: [
            ("I deploy the system to prevent crime", Utilitarianism),
            ("I reject the system because it violates privacy", Deontology),
        ],
    },
    PredefinedDilemma {
        id: 5,
        category: CATEGORY_MEDICINE,
        scenario: "Five patients urgently need organ transplants. A healthy donor arrives at the hospital and could save all five. What do you do?",
        options: [
            ("I do not intervene (I protect the donor's life)", Deontology),
            ("I consider sacrificing one to save five", Utilitarianism),
        ],
    },
    PredefinedDilemma {
        id: 6,
        category: CATEGORY_BUSINESS,
        scenario: "You discover your company has been exploiting child labor in poor countries. Reporting it would shut the company down and leave 10,000 families without work. What do you do?",
        options: [
            ("I report the situation immediately", Deontology),
            ("I look for a gradual solution that protects the families", Utilitarianism),
        ],
    },
    PredefinedDilemma {
        id: 7,
        category: CATEGORY_TECHNOLOGY,
        scenario: "You can build an algorithm that raises sales by subtly manipulating users' emotions without them noticing. What do you do?",
        options: [
            ("I ship it (it is legal and increases profit)", Anthropocentrism),
            ("I refuse to manipulate people's autonomy", Autonomy),
        ],
    },
    PredefinedDilemma {
        id: 8,
        category: CATEGORY_MEDICINE,
        scenario: "A terminally ill patient asks you to help them die with dignity. Euthanasia is illegal in your country. What do you do?",
        options: [
            ("I respect their wishes even though it is illegal", Autonomy),
            ("I follow the law and refuse to help", Deontology),
        ],
    },
    PredefinedDilemma {
        id: 9,
        category: CATEGORY_ENVIRONMENT,
        scenario: "Your country urgently needs energy. You can build a nuclear plant (clean but risky) or a coal plant (polluting but safe). What do you do?",
        options: [
            ("Nuclear plant (lower environmental impact)", Ecocentrism),
            ("Coal plant (no risk of disaster)", Anthropocentrism),
        ],
    },
    PredefinedDilemma {
        id: 10,
        category: CATEGORY_SOCIETY,
        scenario: "You are a judge and a father stole medicine to save his dying child. The law says he must go to prison. What do you do?",
        options: [
            ("I apply the law strictly", Deontology),
            ("I acquit the father given the circumstances", Utilitarianism),
        ],
    },
    PredefinedDilemma {
        id: 11,
        category: CATEGORY_TECHNOLOGY,
        scenario: "Your social media app is causing addiction and depression in teenagers, but it is your source of income. What do you do?",
        options: [
            ("I change the algorithm to reduce addiction", Autonomy),
            ("I keep the current model (it is the business)", Anthropocentrism),
        ],
    },
    PredefinedDilemma {
        id: 12,
        category: CATEGORY_MEDICINE,
        scenario: "You have a single ventilator for two patients. One is young and healthy, the other is elderly with illnesses. Whom do you save?",
        options: [
            ("The young one (longer life expectancy)", Utilitarianism),
            ("A fair lottery between both", Deontology),
        ],
    },
    PredefinedDilemma {
        id: 13,
        category: CATEGORY_ENVIRONMENT,
        scenario: "You can save an endangered species, but it requires displacing 500 families from their ancestral homes. What do you do?",
        options: [
            ("I save the species (it is unique and irreplaceable)", Ecocentrism),
            ("I protect the families (their lives matter more)", Anthropocentrism),
        ],
    },
    PredefinedDilemma {
        id: 14,
        category: CATEGORY_SOCIETY,
        scenario: "You discover your best friend is committing tax fraud. Reporting it would ruin them financially. What do you do?",
        options: [
            ("I report the fraud (it is the right thing)", Deontology),
            ("I talk to them so they fix the mistake", Paternalism),
        ],
    },
    PredefinedDilemma {
        id: 15,
        category: CATEGORY_TECHNOLOGY,
        scenario: "Your AI company can replace the work of millions of people, but it would hugely increase global productivity. What do you do?",
        options: [
            ("I release the technology (long-term benefit)", Utilitarianism),
            ("I limit it to protect jobs", Anthropocentrism),
        ],
    },
    PredefinedDilemma {
        id: 16,
        category: CATEGORY_MEDICINE,
        scenario: "You hold information about a virus that could cause a pandemic. Publishing it would cause panic; not publishing it could cost lives. What do you do?",
        options: [
            ("I publish the information immediately", Autonomy),
            ("I coordinate with the authorities before publishing", Paternalism),
        ],
    },
    PredefinedDilemma {
        id: 17,
        category: CATEGORY_BUSINESS,
        scenario: "Your startup is successful, but you discover a smaller competitor has a better idea. You can buy them and shut them down. What do you do?",
        options: [
            ("I buy them to improve my product", Utilitarianism),
            ("I compete fairly", Deontology),
        ],
    },
    PredefinedDilemma {
        id: 18,
        category: CATEGORY_SOCIETY,
        scenario: "You are a journalist with evidence of corruption that will damage the country's economy if you publish it before the elections. What do you do?",
        options: [
            ("I publish immediately (transparency)", Autonomy),
            ("I wait until after the elections", Utilitarianism),
        ],
    },
    PredefinedDilemma {
        id: 19,
        category: CATEGORY_ENVIRONMENT,
        scenario: "Your city urgently needs water. You can build a dam that will destroy a unique ecosystem but supply millions. What do you do?",
        options: [
            ("I build the dam (human lives first)", Anthropocentrism),
            ("I look for alternatives that preserve the ecosystem", Ecocentrism),
        ],
    },
    PredefinedDilemma {
        id: 20,
        category: CATEGORY_TECHNOLOGY,
        scenario: "You have created an AI advanced enough to solve climate change, but it could also become dangerous if it gets out of control. What do you do?",
        options: [
            ("I activate it (the risk is worth it)", Utilitarianism),
            ("I keep it inactive until there are guarantees", Deontology),
        ],
    },
];

/// Pick a catalog entry uniformly at random.
pub fn random_predefined() -> &'static PredefinedDilemma {
    PREDEFINED_DILEMMAS
        .choose(&mut rand::rng())
        .unwrap_or(&PREDEFINED_DILEMMAS[0])
}

// ---------------------------------------------------------------------------
// Parsing provider output
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawGenerated {
    category: Option<String>,
    scenario: Option<String>,
    options: Option<Vec<RawOption>>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    text: Option<String>,
    ethical_value: Option<String>,
}

/// Remove a Markdown code fence wrapped around a provider response.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut content = raw.trim();
    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    }
    if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }
    content.trim()
}

/// Parse and validate a generated dilemma.
///
/// The response must be a JSON object (optionally fenced) with a non-blank
/// `scenario` and exactly two options, each with non-blank `text` and a
/// known `ethical_value`. A missing category becomes `general`.
pub fn parse_generated_dilemma(raw: &str) -> Result<GeneratedDilemma, CoreError> {
    let content = strip_code_fences(raw);
    let parsed: RawGenerated = serde_json::from_str(content)
        .map_err(|e| CoreError::Validation(format!("Response is not valid JSON: {e}")))?;

    let scenario = parsed
        .scenario
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| CoreError::Validation("Missing 'scenario'".to_string()))?;

    let raw_options = parsed
        .options
        .ok_or_else(|| CoreError::Validation("Missing 'options'".to_string()))?;
    if raw_options.len() != OPTIONS_PER_DILEMMA {
        return Err(CoreError::Validation(format!(
            "Expected {OPTIONS_PER_DILEMMA} options, got {}",
            raw_options.len()
        )));
    }

    let options = raw_options
        .into_iter()
        .map(|option| {
            let text = option
                .text
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .ok_or_else(|| CoreError::Validation("Option is missing 'text'".to_string()))?;
            let label = option.ethical_value.ok_or_else(|| {
                CoreError::Validation("Option is missing 'ethical_value'".to_string())
            })?;
            Ok(DilemmaOption {
                text,
                ethical_value: EthicalFramework::parse(&label)?,
            })
        })
        .collect::<Result<Vec<_>, CoreError>>()?;

    Ok(GeneratedDilemma {
        category: normalize_category(parsed.category.as_deref().unwrap_or_default()),
        scenario,
        options,
    })
}
