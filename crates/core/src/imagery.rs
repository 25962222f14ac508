//! Image selection for dilemmas and ethical frameworks.
//!
//! Selection is a pure function of the scenario text and category: a
//! keyword scan over a per-category table first, then a stable hash into
//! the category's image bank.

use crate::category::{
    normalize_category, CATEGORY_BUSINESS, CATEGORY_CLASSIC, CATEGORY_EDUCATION,
    CATEGORY_ENVIRONMENT, CATEGORY_MEDICINE, CATEGORY_POLITICS,
    CATEGORY_SOCIETY, CATEGORY_TECHNOLOGY,
};
use crate::framework::EthicalFramework;
use crate::hashing::stable_index;

/// A keyword with its hand-enumerated variants and the image it selects.
#[derive(Debug, Clone, Copy)]
pub struct KeywordImage {
    pub keyword: &'static str,
    pub variants: &'static [&'static str],
    pub url: &'static str,
}

impl KeywordImage {
    fn matches(&self, scenario_lower: &str) -> bool {
        scenario_lower.contains(self.keyword)
            || self.variants.iter().any(|v| scenario_lower.contains(v))
    }
}

const fn kw(
    keyword: &'static str,
    variants: &'static [&'static str],
    url: &'static str,
) -> KeywordImage {
    KeywordImage {
        keyword,
        variants,
        url,
    }
}

// ---------------------------------------------------------------------------
// Keyword tables (ordered; first match wins)
// ---------------------------------------------------------------------------

static MEDICINE_KEYWORDS: &[KeywordImage] = &[
    kw("hospital", &["hospitals", "clinic"], "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?w=800"),
    kw("medication", &["medications", "medicine", "drug", "pharmaceutical", "experimental treatment"], "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=800"),
    kw("patient", &["patients"], "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=800"),
    kw("doctor", &["doctors", "physician", "surgeon", "nurse"], "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=800"),
    kw("treatment", &["treatments", "therapy", "therapies"], "https://images.unsplash.com/photo-1559757175-0eb30cd8c063?w=800"),
    kw("emergency", &["emergencies", "urgent", "urgently"], "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800"),
    kw("resources", &["resource", "limited", "allocate", "allocation", "distribute", "scarce"], "https://images.unsplash.com/photo-1551601651-2a8555f1a136?w=800"),
    kw("health", &["healthy", "healthcare"], "https://images.unsplash.com/photo-1579154204601-01588f351e67?w=800"),
];

static TECHNOLOGY_KEYWORDS: &[KeywordImage] = &[
    kw("artificial intelligence", &["an ai", " ai ", "ai company", "machine learning"], "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800"),
    kw("algorithm", &["algorithms"], "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800"),
    kw("data", &["personal data", "information", "database"], "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800"),
    kw("privacy", &["surveillance", "private"], "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800"),
    kw("social media", &["social network", "social networks", "network"], "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800"),
    kw("app", &["apps", "application", "applications"], "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=800"),
];

static ENVIRONMENT_KEYWORDS: &[KeywordImage] = &[
    kw("nature", &["natural"], "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800"),
    kw("pollution", &["pollute", "polluting", "contamination", "contaminate"], "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800"),
    kw("trees", &["tree", "forest", "forests", "deforestation"], "https://images.unsplash.com/photo-1511497584788-876760111969?w=800"),
    kw("animals", &["animal", "species", "wildlife"], "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800"),
    kw("energy", &["nuclear", "coal", "power plant", "solar"], "https://images.unsplash.com/photo-1466611653911-95081537e5b7?w=800"),
    kw("ecosystem", &["ecosystems"], "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?w=800"),
];

static BUSINESS_KEYWORDS: &[KeywordImage] = &[
    kw("company", &["companies", "corporation", "startup", "firm"], "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?w=800"),
    kw("work", &["jobs", "job", "employees", "workers"], "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?w=800"),
    kw("money", &["profit", "profits", "revenue", "$"], "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e?w=800"),
    kw("office", &["offices"], "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800"),
];

static SOCIETY_KEYWORDS: &[KeywordImage] = &[
    kw("people", &["person", "citizens"], "https://images.unsplash.com/photo-1521737852567-6949f3f9f2b5?w=800"),
    kw("community", &["communities", "neighborhood"], "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800"),
    kw("family", &["families", "father", "mother", "child"], "https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=800"),
    kw("justice", &["judge", "law", "court", "prison"], "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?w=800"),
];

static CLASSIC_KEYWORDS: &[KeywordImage] = &[
    kw("trolley", &["trolleys", "train", "trains"], "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?w=800"),
    kw("tracks", &["track", "rails"], "https://images.unsplash.com/photo-1517817748493-49b5541a82ad?w=800"),
    kw("decision", &["decisions", "decide"], "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800"),
    kw("choice", &["choices", "choose"], "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=800"),
];

// ---------------------------------------------------------------------------
// Image banks (hash fallback)
// ---------------------------------------------------------------------------

static MEDICINE_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1519494026892-80bbd2d6fd0d?w=800",
    "https://images.unsplash.com/photo-1587854692152-cbe660dbde88?w=800",
    "https://images.unsplash.com/photo-1576091160399-112ba8d25d1f?w=800",
    "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?w=800",
    "https://images.unsplash.com/photo-1559757175-0eb30cd8c063?w=800",
    "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800",
    "https://images.unsplash.com/photo-1551601651-2a8555f1a136?w=800",
    "https://images.unsplash.com/photo-1579154204601-01588f351e67?w=800",
];

static TECHNOLOGY_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800",
    "https://images.unsplash.com/photo-1635070041078-e363dbe005cb?w=800",
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800",
    "https://images.unsplash.com/photo-1563013544-824ae1b704d3?w=800",
    "https://images.unsplash.com/photo-1518770660439-4636190af475?w=800",
    "https://images.unsplash.com/photo-1519389950473-47ba0277781c?w=800",
];

static ENVIRONMENT_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=800",
    "https://images.unsplash.com/photo-1581094794329-c8112a89af12?w=800",
    "https://images.unsplash.com/photo-1511497584788-876760111969?w=800",
    "https://images.unsplash.com/photo-1472214103451-9374bd1c798e?w=800",
    "https://images.unsplash.com/photo-1466611653911-95081537e5b7?w=800",
    "https://images.unsplash.com/photo-1518531933037-91b2f5f229cc?w=800",
];

static BUSINESS_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?w=800",
    "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?w=800",
    "https://images.unsplash.com/photo-1579621970563-ebec7560ff3e?w=800",
    "https://images.unsplash.com/photo-1497366216548-37526070297c?w=800",
    "https://images.unsplash.com/photo-1552664730-d307ca884978?w=800",
];

static SOCIETY_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1521737852567-6949f3f9f2b5?w=800",
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800",
    "https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=800",
    "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?w=800",
    "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=800",
];

static CLASSIC_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1544620347-c4fd4a3d5957?w=800",
    "https://images.unsplash.com/photo-1517817748493-49b5541a82ad?w=800",
    "https://images.unsplash.com/photo-1454165804606-c3d57bc86b40?w=800",
    "https://images.unsplash.com/photo-1481627834876-b7833e8f5570?w=800",
];

static EDUCATION_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?w=800",
    "https://images.unsplash.com/photo-1522202176988-66273c2fd55f?w=800",
    "https://images.unsplash.com/photo-1434030216411-0b793f4b4173?w=800",
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?w=800",
];

static POLITICS_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1582213782179-e0d53f98f2ca?w=800",
    "https://images.unsplash.com/photo-1543269865-cbf427effbad?w=800",
    "https://images.unsplash.com/photo-1571019613454-1cb2f99b2d8b?w=800",
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800",
];

pub static GENERAL_BANK: &[&str] = &[
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=800",
    "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?w=800",
    "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=800",
    "https://images.unsplash.com/photo-1516321318423-f06f85e504b3?w=800",
];

/// One conceptual image per ethical framework.
pub static FRAMEWORK_IMAGES: [(EthicalFramework, &str); 6] = [
    (EthicalFramework::Utilitarianism, "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=600"),
    (EthicalFramework::Deontology, "https://images.unsplash.com/photo-1589829545856-d10d557cf95f?w=600"),
    (EthicalFramework::Autonomy, "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=600"),
    (EthicalFramework::Paternalism, "https://images.unsplash.com/photo-1511632765486-a01980e01a18?w=600"),
    (EthicalFramework::Ecocentrism, "https://images.unsplash.com/photo-1441974231531-c6227db76b6e?w=600"),
    (EthicalFramework::Anthropocentrism, "https://images.unsplash.com/photo-1521737852567-6949f3f9f2b5?w=600"),
];

// ---------------------------------------------------------------------------
// Lookup
// ---------------------------------------------------------------------------

fn keyword_table(category: &str) -> Option<&'static [KeywordImage]> {
    match category {
        CATEGORY_MEDICINE => Some(MEDICINE_KEYWORDS),
        CATEGORY_TECHNOLOGY => Some(TECHNOLOGY_KEYWORDS),
        CATEGORY_ENVIRONMENT => Some(ENVIRONMENT_KEYWORDS),
        CATEGORY_BUSINESS => Some(BUSINESS_KEYWORDS),
        CATEGORY_SOCIETY => Some(SOCIETY_KEYWORDS),
        CATEGORY_CLASSIC => Some(CLASSIC_KEYWORDS),
        _ => None,
    }
}

fn image_bank(category: &str) -> &'static [&'static str] {
    match category {
        CATEGORY_MEDICINE => MEDICINE_BANK,
        CATEGORY_TECHNOLOGY => TECHNOLOGY_BANK,
        CATEGORY_ENVIRONMENT => ENVIRONMENT_BANK,
        CATEGORY_BUSINESS => BUSINESS_BANK,
        CATEGORY_SOCIETY => SOCIETY_BANK,
        CATEGORY_CLASSIC => CLASSIC_BANK,
        CATEGORY_EDUCATION => EDUCATION_BANK,
        CATEGORY_POLITICS => POLITICS_BANK,
        _ => GENERAL_BANK,
    }
}

/// Pick the picture for a dilemma.
///
/// Same `(scenario, category)` always yields the same URL.
pub fn image_for(scenario: &str, category: &str) -> &'static str {
    let category = normalize_category(category);
    let scenario_lower = scenario.to_lowercase();

    if let Some(table) = keyword_table(&category) {
        if let Some(entry) = table.iter().find(|entry| entry.matches(&scenario_lower)) {
            return entry.url;
        }
    }

    let bank = image_bank(&category);
    bank[stable_index(scenario, bank.len())]
}

/// Picture shown next to the analysis of a decision.
///
/// Unknown labels fall back to the first general image.
pub fn framework_image(label: &str) -> &'static str {
    EthicalFramework::parse(label)
        .ok()
        .and_then(|framework| {
            FRAMEWORK_IMAGES
                .iter()
                .find(|(f, _)| *f == framework)
                .map(|(_, url)| *url)
        })
        .unwrap_or(GENERAL_BANK[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_wins_over_hash() {
        let url = image_for("The patient refuses surgery.", "medicine");
        assert_eq!(url, MEDICINE_KEYWORDS[2].url);
    }

    #[test]
    fn first_keyword_in_table_order_wins() {
        // Mentions both "hospital" and "patient"; hospital comes first.
        let url = image_for("A patient arrives at the hospital.", "Medicine");
        assert_eq!(url, MEDICINE_KEYWORDS[0].url);
    }

    #[test]
    fn variants_match() {
        let url = image_for("A runaway train barrels on.", "classic");
        assert_eq!(url, CLASSIC_KEYWORDS[0].url);
    }

    #[test]
    fn legacy_category_names_use_the_same_table() {
        assert_eq!(
            image_for("A patient waits.", "medicina"),
            image_for("A patient waits.", "medicine")
        );
    }

    #[test]
    fn hash_fallback_is_deterministic_and_in_bank() {
        let scenario = "Zzz qqq xyzzy";
        let first = image_for(scenario, "education");
        for _ in 0..10 {
            assert_eq!(image_for(scenario, "education"), first);
        }
        assert!(EDUCATION_BANK.contains(&first));
    }

    #[test]
    fn unknown_category_uses_general_bank() {
        let url = image_for("Something else entirely", "astrology");
        assert!(GENERAL_BANK.contains(&url));
    }

    #[test]
    fn every_framework_has_an_image() {
        for framework in EthicalFramework::ALL {
            let url = framework_image(framework.as_str());
            assert!(FRAMEWORK_IMAGES.iter().any(|(_, u)| *u == url));
        }
    }

    #[test]
    fn unknown_framework_falls_back_to_general() {
        assert_eq!(framework_image("stoicism"), GENERAL_BANK[0]);
        assert_eq!(framework_image("deontologia"), FRAMEWORK_IMAGES[1].1);
    }
}
