//! Achievement catalog and rule evaluation.
//!
//! Rules are evaluated against a [`PlayerHistory`] pre-loaded by the
//! caller; this module never touches the database.

use std::collections::HashSet;

use crate::category::{normalize_category, CORE_CATEGORIES};
use crate::error::CoreError;
use crate::framework::EthicalFramework;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Rule type names as stored in `achievements.achievement_type`.
pub const TYPE_QUANTITY: &str = "quantity";
pub const TYPE_DIVERSITY_CATEGORIES: &str = "diversity_categories";
pub const TYPE_DIVERSITY_FRAMEWORKS: &str = "diversity_frameworks";
pub const TYPE_CONSISTENCY: &str = "consistency";
pub const TYPE_SPECIAL: &str = "special";

/// Prefixes of `special` rule parameters.
pub const SPECIAL_ANALYSES: &str = "analyses";
pub const SPECIAL_SESSION: &str = "session";

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// The condition under which an achievement unlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementRule {
    /// Lifetime decisions >= N.
    Quantity(u32),
    /// Every core category answered at least once.
    DiversityCategories,
    /// Every ethical framework chosen at least once.
    DiversityFrameworks,
    /// Decisions tagged with `framework` >= `count`.
    Consistency {
        framework: EthicalFramework,
        count: u32,
    },
    /// Decisions carrying a non-blank AI analysis >= N.
    Analyses(u32),
    /// Decisions inside the current game >= N.
    Session(u32),
}

fn parse_threshold(raw: &str, context: &str) -> Result<u32, CoreError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| CoreError::Validation(format!("Invalid threshold '{raw}' in {context}")))
}

impl AchievementRule {
    /// Parse a rule from its stored `(achievement_type, condition_value)` pair.
    pub fn parse(kind: &str, condition: Option<&str>) -> Result<Self, CoreError> {
        let require_condition = || {
            condition.ok_or_else(|| {
                CoreError::Validation(format!("Rule type '{kind}' requires a condition value"))
            })
        };

        match kind {
            TYPE_QUANTITY => Ok(Self::Quantity(parse_threshold(require_condition()?, kind)?)),
            TYPE_DIVERSITY_CATEGORIES => Ok(Self::DiversityCategories),
            TYPE_DIVERSITY_FRAMEWORKS => Ok(Self::DiversityFrameworks),
            TYPE_CONSISTENCY => {
                let raw = require_condition()?;
                let (label, count) = raw.split_once(':').ok_or_else(|| {
                    CoreError::Validation(format!("Consistency rule '{raw}' must be 'framework:N'"))
                })?;
                Ok(Self::Consistency {
                    framework: EthicalFramework::parse(label)?,
                    count: parse_threshold(count, kind)?,
                })
            }
            TYPE_SPECIAL => {
                let raw = require_condition()?;
                match raw.split_once(':') {
                    Some((SPECIAL_ANALYSES, n)) => Ok(Self::Analyses(parse_threshold(n, raw)?)),
                    Some((SPECIAL_SESSION, n)) => Ok(Self::Session(parse_threshold(n, raw)?)),
                    _ => Err(CoreError::Validation(format!(
                        "Unknown special rule '{raw}'"
                    ))),
                }
            }
            other => Err(CoreError::Validation(format!(
                "Unknown achievement type '{other}'"
            ))),
        }
    }

    /// The stored `achievement_type` value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Quantity(_) => TYPE_QUANTITY,
            Self::DiversityCategories => TYPE_DIVERSITY_CATEGORIES,
            Self::DiversityFrameworks => TYPE_DIVERSITY_FRAMEWORKS,
            Self::Consistency { .. } => TYPE_CONSISTENCY,
            Self::Analyses(_) | Self::Session(_) => TYPE_SPECIAL,
        }
    }

    /// The stored `condition_value`, if the rule has one.
    pub fn condition(&self) -> Option<String> {
        match self {
            Self::Quantity(n) => Some(n.to_string()),
            Self::DiversityCategories | Self::DiversityFrameworks => None,
            Self::Consistency { framework, count } => Some(format!("{framework}:{count}")),
            Self::Analyses(n) => Some(format!("{SPECIAL_ANALYSES}:{n}")),
            Self::Session(n) => Some(format!("{SPECIAL_SESSION}:{n}")),
        }
    }

    pub fn is_satisfied(&self, history: &PlayerHistory) -> bool {
        match *self {
            Self::Quantity(n) => history.total() >= u64::from(n),
            Self::DiversityCategories => {
                let used = history.categories();
                CORE_CATEGORIES.iter().all(|c| used.contains(*c))
            }
            Self::DiversityFrameworks => {
                let used = history.frameworks();
                EthicalFramework::ALL.iter().all(|f| used.contains(f))
            }
            Self::Consistency { framework, count } => {
                history.framework_count(framework) >= u64::from(count)
            }
            Self::Analyses(n) => history.analyses_count() >= u64::from(n),
            Self::Session(n) => history
                .session_decisions
                .is_some_and(|session| session >= u64::from(n)),
        }
    }
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// The parts of a recorded decision that rules look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecisionFact {
    pub framework: Option<EthicalFramework>,
    pub category: Option<String>,
    pub has_analysis: bool,
}

impl DecisionFact {
    /// Build a fact from stored column values, tolerating legacy labels.
    pub fn from_stored(
        framework: Option<&str>,
        category: Option<&str>,
        analysis: Option<&str>,
    ) -> Self {
        Self {
            framework: framework.and_then(|f| EthicalFramework::parse(f).ok()),
            category: category
                .filter(|c| !c.trim().is_empty())
                .map(normalize_category),
            has_analysis: analysis.is_some_and(|a| !a.trim().is_empty()),
        }
    }
}

/// Everything a player has decided, plus the size of the current game.
#[derive(Debug, Clone, Default)]
pub struct PlayerHistory {
    pub decisions: Vec<DecisionFact>,
    /// Decisions in the game being evaluated; `None` outside a game.
    pub session_decisions: Option<u64>,
}

impl PlayerHistory {
    pub fn new(decisions: Vec<DecisionFact>, session_decisions: Option<u64>) -> Self {
        Self {
            decisions,
            session_decisions,
        }
    }

    pub fn total(&self) -> u64 {
        self.decisions.len() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn framework_count(&self, framework: EthicalFramework) -> u64 {
        self.decisions
            .iter()
            .filter(|d| d.framework == Some(framework))
            .count() as u64
    }

    pub fn analyses_count(&self) -> u64 {
        self.decisions.iter().filter(|d| d.has_analysis).count() as u64
    }

    pub fn categories(&self) -> HashSet<&str> {
        self.decisions
            .iter()
            .filter_map(|d| d.category.as_deref())
            .collect()
    }

    pub fn frameworks(&self) -> HashSet<EthicalFramework> {
        self.decisions.iter().filter_map(|d| d.framework).collect()
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// A fixed achievement definition.
#[derive(Debug, Clone, Copy)]
pub struct AchievementDefinition {
    pub code: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub rule: AchievementRule,
}

const fn def(
    code: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
    rule: AchievementRule,
) -> AchievementDefinition {
    AchievementDefinition {
        code,
        name,
        description,
        icon,
        rule,
    }
}

const fn consistency(framework: EthicalFramework) -> AchievementRule {
    AchievementRule::Consistency {
        framework,
        count: 5,
    }
}

/// The achievement catalog, in seeding (and evaluation) order.
pub static ACHIEVEMENT_CATALOG: [AchievementDefinition; 15] = [
    def(
        "first_dilemma",
        "First Step",
        "Complete your first ethical dilemma",
        "🎯",
        AchievementRule::Quantity(1),
    ),
    def(
        "ten_dilemmas",
        "Decisive",
        "Complete 10 ethical dilemmas",
        "🔟",
        AchievementRule::Quantity(10),
    ),
    def(
        "twenty_five_dilemmas",
        "Thinker",
        "Complete 25 ethical dilemmas",
        "📚",
        AchievementRule::Quantity(25),
    ),
    def(
        "fifty_dilemmas",
        "Philosopher",
        "Complete 50 ethical dilemmas",
        "🧠",
        AchievementRule::Quantity(50),
    ),
    def(
        "hundred_dilemmas",
        "Ethics Master",
        "Complete 100 ethical dilemmas",
        "👑",
        AchievementRule::Quantity(100),
    ),
    def(
        "explorer",
        "Explorer",
        "Answer dilemmas from every category",
        "🗺️",
        AchievementRule::DiversityCategories,
    ),
    def(
        "philosopher",
        "Complete Philosopher",
        "Use every ethical framework",
        "🎓",
        AchievementRule::DiversityFrameworks,
    ),
    def(
        "utilitarian",
        "Utilitarian",
        "Choose utilitarianism 5 times",
        "⚖️",
        consistency(EthicalFramework::Utilitarianism),
    ),
    def(
        "deontologist",
        "Deontologist",
        "Choose deontology 5 times",
        "📜",
        consistency(EthicalFramework::Deontology),
    ),
    def(
        "autonomous",
        "Champion of Autonomy",
        "Choose autonomy 5 times",
        "🕊️",
        consistency(EthicalFramework::Autonomy),
    ),
    def(
        "paternalist",
        "Paternalist",
        "Choose paternalism 5 times",
        "🛡️",
        consistency(EthicalFramework::Paternalism),
    ),
    def(
        "ecocentrist",
        "Ecocentrist",
        "Choose ecocentrism 5 times",
        "🌱",
        consistency(EthicalFramework::Ecocentrism),
    ),
    def(
        "anthropocentrist",
        "Anthropocentrist",
        "Choose anthropocentrism 5 times",
        "👥",
        consistency(EthicalFramework::Anthropocentrism),
    ),
    def(
        "thinker",
        "Deep Thinker",
        "Complete 10 AI analyses",
        "💭",
        AchievementRule::Analyses(10),
    ),
    def(
        "speedster",
        "Speedster",
        "Complete 10 dilemmas in a single session",
        "⚡",
        AchievementRule::Session(10),
    ),
];

/// Codes of the entries whose rules are newly satisfied.
///
/// Entries already in `unlocked` are skipped; order follows `entries`.
pub fn newly_satisfied<'a, I>(
    entries: I,
    unlocked: &HashSet<String>,
    history: &PlayerHistory,
) -> Vec<&'a str>
where
    I: IntoIterator<Item = (&'a str, AchievementRule)>,
{
    entries
        .into_iter()
        .filter(|(code, _)| !unlocked.contains(*code))
        .filter(|(_, rule)| rule.is_satisfied(history))
        .map(|(code, _)| code)
        .collect()
}
