//! Prompt templates sent to the text providers.

use quandary_core::framework::EthicalFramework;

/// Instruction asking for one dilemma in `category` as a strict JSON object.
pub fn dilemma_prompt(category: &str) -> String {
    let labels = EthicalFramework::ALL
        .iter()
        .map(EthicalFramework::as_str)
        .collect::<Vec<_>>()
        .join("|");

    format!(
        r#"Generate a unique, realistic ethical dilemma in the category '{category}'.

The dilemma must be:
- Realistic and current
- Thought-provoking
- Offering two clear options that represent different ethical frameworks
- Written in English

Exact JSON format:
{{
    "category": "{category}",
    "scenario": "Detailed description of the ethical dilemma (2-4 sentences)",
    "options": [
        {{
            "text": "First option (at most 100 characters)",
            "ethical_value": "{labels}"
        }},
        {{
            "text": "Second option (at most 100 characters)",
            "ethical_value": "{labels}"
        }}
    ]
}}

IMPORTANT: Reply with the JSON ONLY. No additional text, no markdown, no explanations."#
    )
}

/// Instruction asking for short commentary on a player's choice.
pub fn analysis_prompt(scenario: &str, chosen_option: &str, framework: &str) -> String {
    format!(
        r#"Analyze this ethical decision and give constructive feedback in English (150 words at most):

Dilemma: {scenario}

Chosen option: {chosen_option}
Ethical framework: {framework}

Provide:
1. A brief explanation of the ethical framework applied
2. Strengths of this decision
3. Alternative considerations
4. A closing reflection

Be constructive, educational and objective. Do not judge the decision as "right" or "wrong"; explore its ethical implications instead."#
    )
}
