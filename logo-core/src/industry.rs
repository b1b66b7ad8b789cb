//! Industry categories, their static design patterns and the keyword classifier.
//!
//! Classification is an ordered list of `(category, keywords)` rules tested in
//! sequence with plain substring containment. The first rule that matches wins,
//! with one override: a healthcare match that also contains a technology keyword
//! resolves to [`IndustryCategory::Healthtech`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;

/// Fixed set of industries the engine has design vocabulary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryCategory {
    /// Hospitals, clinics, care providers.
    Healthcare,
    /// Healthcare delivered through software.
    Healthtech,
    /// Florists, gardens, botanicals.
    Floral,
    /// Restaurants, bakeries, food service.
    Food,
    /// Spas, salons, cosmetics.
    Beauty,
    /// General technology and software.
    Technology,
    /// Payments, banking, investment.
    Fintech,
    /// Machine learning and data science.
    AiMl,
    /// Security products and services.
    Cybersecurity,
    /// Crypto and distributed ledgers.
    Blockchain,
    /// Online and physical retail.
    Ecommerce,
    /// Subscription software and cloud services.
    Saas,
    /// Schools, courses, training.
    Education,
}

/// Coarse grouping used when a generator only distinguishes a few icon families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryFamily {
    /// Software, data and security.
    Tech,
    /// Health, care and wellness.
    Health,
    /// Money, commerce and ledgers.
    Finance,
    /// Everything else.
    General,
}

/// Static design vocabulary bound to an industry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DesignPattern {
    /// Symbols that read as this industry.
    pub symbols: &'static [&'static str],
    /// Preferred shape vocabulary.
    pub shapes: &'static [&'static str],
    /// Named color themes.
    pub color_themes: &'static [&'static str],
    /// Textures and fill patterns.
    pub textures: &'static [&'static str],
    /// Overall style label.
    pub style: &'static str,
    /// Keywords the classifier matches on.
    pub keywords: &'static [&'static str],
}

const FLORAL_KEYWORDS: &[&str] = &[
    "flower", "floral", "bouquet", "bloom", "petal", "rose", "garden", "florist", "botanical",
    "blossom", "plant",
];
const FOOD_KEYWORDS: &[&str] = &[
    "food", "restaurant", "dining", "cuisine", "chef", "culinary", "meal", "recipe", "kitchen",
    "cafe", "bakery",
];
const BEAUTY_KEYWORDS: &[&str] = &[
    "beauty", "spa", "salon", "cosmetic", "skincare", "wellness", "massage", "facial", "makeup",
];
const HEALTHCARE_KEYWORDS: &[&str] = &[
    "health", "medical", "hospital", "clinic", "pharma", "wellness", "doctor", "patient",
    "medicine", "therapy", "care",
];
const TECH_KEYWORDS: &[&str] = &[
    "tech", "digital", "ai", "platform", "app", "software", "technology",
];
const AI_ML_KEYWORDS: &[&str] = &[
    "ai", "ml", "machine learning", "artificial intelligence", "neural", "deep learning",
    "data science",
];
const FINTECH_KEYWORDS: &[&str] = &[
    "finance", "fintech", "banking", "payment", "money", "trading", "investment", "wallet",
    "transaction",
];
const SECURITY_KEYWORDS: &[&str] = &[
    "security", "cyber", "protection", "defense", "encryption", "firewall", "antivirus", "threat",
];
const BLOCKCHAIN_KEYWORDS: &[&str] = &[
    "blockchain", "crypto", "bitcoin", "ethereum", "web3", "defi", "nft", "token",
];
const ECOMMERCE_KEYWORDS: &[&str] = &[
    "commerce", "shop", "retail", "marketplace", "store", "ecommerce", "e-commerce", "shopping",
    "cart",
];
const SAAS_KEYWORDS: &[&str] = &[
    "saas", "software", "cloud", "platform", "service", "subscription", "b2b",
];
const EDUCATION_KEYWORDS: &[&str] = &[
    "education", "learning", "school", "training", "course", "university", "student", "teach",
];

/// Classification rules in priority order.
const CLASSIFICATION_ORDER: &[(IndustryCategory, &[&str])] = &[
    (IndustryCategory::Floral, FLORAL_KEYWORDS),
    (IndustryCategory::Food, FOOD_KEYWORDS),
    (IndustryCategory::Beauty, BEAUTY_KEYWORDS),
    (IndustryCategory::Healthcare, HEALTHCARE_KEYWORDS),
    (IndustryCategory::AiMl, AI_ML_KEYWORDS),
    (IndustryCategory::Fintech, FINTECH_KEYWORDS),
    (IndustryCategory::Cybersecurity, SECURITY_KEYWORDS),
    (IndustryCategory::Blockchain, BLOCKCHAIN_KEYWORDS),
    (IndustryCategory::Ecommerce, ECOMMERCE_KEYWORDS),
    (IndustryCategory::Saas, SAAS_KEYWORDS),
    (IndustryCategory::Education, EDUCATION_KEYWORDS),
    (IndustryCategory::Technology, TECH_KEYWORDS),
];

fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

/// Map free-text industry or description to a category.
///
/// Never fails: text matching no rule classifies as [`IndustryCategory::Saas`].
#[must_use]
pub fn classify(industry_text: &str) -> IndustryCategory {
    let lower = industry_text.to_lowercase();

    for &(category, keywords) in CLASSIFICATION_ORDER {
        if !contains_any(&lower, keywords) {
            continue;
        }
        if category == IndustryCategory::Healthcare && contains_any(&lower, TECH_KEYWORDS) {
            return IndustryCategory::Healthtech;
        }
        return category;
    }

    IndustryCategory::Saas
}

impl IndustryCategory {
    /// Every category, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Healthcare,
        Self::Healthtech,
        Self::Floral,
        Self::Food,
        Self::Beauty,
        Self::Technology,
        Self::Fintech,
        Self::AiMl,
        Self::Cybersecurity,
        Self::Blockchain,
        Self::Ecommerce,
        Self::Saas,
        Self::Education,
    ];

    /// Stable `snake_case` identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Healthcare => "healthcare",
            Self::Healthtech => "healthtech",
            Self::Floral => "floral",
            Self::Food => "food",
            Self::Beauty => "beauty",
            Self::Technology => "technology",
            Self::Fintech => "fintech",
            Self::AiMl => "ai_ml",
            Self::Cybersecurity => "cybersecurity",
            Self::Blockchain => "blockchain",
            Self::Ecommerce => "ecommerce",
            Self::Saas => "saas",
            Self::Education => "education",
        }
    }

    /// Coarse icon family.
    #[must_use]
    pub const fn family(self) -> IndustryFamily {
        match self {
            Self::Technology | Self::AiMl | Self::Saas | Self::Cybersecurity => {
                IndustryFamily::Tech
            }
            Self::Healthcare | Self::Healthtech | Self::Beauty => IndustryFamily::Health,
            Self::Fintech | Self::Blockchain | Self::Ecommerce => IndustryFamily::Finance,
            Self::Floral | Self::Food | Self::Education => IndustryFamily::General,
        }
    }

    /// Fixed sophistication constant feeding the design complexity score.
    #[must_use]
    pub const fn sophistication(self) -> f32 {
        match self {
            Self::AiMl => 0.95,
            Self::Technology => 0.9,
            Self::Healthtech | Self::Cybersecurity | Self::Blockchain => 0.85,
            Self::Fintech => 0.8,
            Self::Saas => 0.75,
            Self::Healthcare | Self::Beauty => 0.7,
            Self::Ecommerce | Self::Education => 0.65,
            Self::Floral | Self::Food => 0.6,
        }
    }

    /// Primary, secondary and accent used when the caller supplies fewer than three colors.
    #[must_use]
    pub const fn default_triad(self) -> [Rgba; 3] {
        match self {
            Self::Healthcare => [
                Rgba::rgb(0x0E, 0xA5, 0xE9),
                Rgba::rgb(0x10, 0xB9, 0x81),
                Rgba::rgb(0xFF, 0xFF, 0xFF),
            ],
            Self::Healthtech => [
                Rgba::rgb(0x06, 0xB6, 0xD4),
                Rgba::rgb(0x3B, 0x82, 0xF6),
                Rgba::rgb(0x10, 0xB9, 0x81),
            ],
            Self::Floral => [
                Rgba::rgb(0xEC, 0x48, 0x99),
                Rgba::rgb(0x10, 0xB9, 0x81),
                Rgba::rgb(0xA8, 0x55, 0xF7),
            ],
            Self::Food => [
                Rgba::rgb(0xEF, 0x44, 0x44),
                Rgba::rgb(0xF9, 0x73, 0x16),
                Rgba::rgb(0x10, 0xB9, 0x81),
            ],
            Self::Beauty => [
                Rgba::rgb(0xA8, 0x55, 0xF7),
                Rgba::rgb(0x06, 0xB6, 0xD4),
                Rgba::rgb(0xEC, 0x48, 0x99),
            ],
            Self::Technology => [
                Rgba::rgb(0x63, 0x66, 0xF1),
                Rgba::rgb(0x8B, 0x5C, 0xF6),
                Rgba::rgb(0xEC, 0x48, 0x99),
            ],
            Self::AiMl => [
                Rgba::rgb(0x8B, 0x5C, 0xF6),
                Rgba::rgb(0x63, 0x66, 0xF1),
                Rgba::rgb(0x06, 0xB6, 0xD4),
            ],
            Self::Fintech => [
                Rgba::rgb(0x0E, 0xA5, 0xE9),
                Rgba::rgb(0x10, 0xB9, 0x81),
                Rgba::rgb(0xF5, 0x9E, 0x0B),
            ],
            Self::Cybersecurity => [
                Rgba::rgb(0x3B, 0x82, 0xF6),
                Rgba::rgb(0xEF, 0x44, 0x44),
                Rgba::rgb(0x10, 0xB9, 0x81),
            ],
            Self::Blockchain => [
                Rgba::rgb(0xF5, 0x9E, 0x0B),
                Rgba::rgb(0x8B, 0x5C, 0xF6),
                Rgba::rgb(0x06, 0xB6, 0xD4),
            ],
            Self::Ecommerce => [
                Rgba::rgb(0xF9, 0x73, 0x16),
                Rgba::rgb(0xEF, 0x44, 0x44),
                Rgba::rgb(0x10, 0xB9, 0x81),
            ],
            Self::Saas => [
                Rgba::rgb(0x0E, 0xA5, 0xE9),
                Rgba::rgb(0x8B, 0x5C, 0xF6),
                Rgba::rgb(0x10, 0xB9, 0x81),
            ],
            Self::Education => [
                Rgba::rgb(0x25, 0x63, 0xEB),
                Rgba::rgb(0xF5, 0x9E, 0x0B),
                Rgba::rgb(0x10, 0xB9, 0x81),
            ],
        }
    }

    /// Static design vocabulary for this industry.
    #[must_use]
    pub const fn pattern(self) -> &'static DesignPattern {
        match self {
            Self::Healthcare => &HEALTHCARE_PATTERN,
            Self::Healthtech => &HEALTHTECH_PATTERN,
            Self::Floral => &FLORAL_PATTERN,
            Self::Food => &FOOD_PATTERN,
            Self::Beauty => &BEAUTY_PATTERN,
            Self::Technology => &TECHNOLOGY_PATTERN,
            Self::Fintech => &FINTECH_PATTERN,
            Self::AiMl => &AI_ML_PATTERN,
            Self::Cybersecurity => &SECURITY_PATTERN,
            Self::Blockchain => &BLOCKCHAIN_PATTERN,
            Self::Ecommerce => &ECOMMERCE_PATTERN,
            Self::Saas => &SAAS_PATTERN,
            Self::Education => &EDUCATION_PATTERN,
        }
    }
}

impl fmt::Display for IndustryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

const HEALTHCARE_PATTERN: DesignPattern = DesignPattern {
    symbols: &["medical_cross", "heart", "stethoscope", "shield", "pulse"],
    shapes: &["circle", "shield", "octagon", "cross"],
    color_themes: &["medical_blue", "healing_green", "clean_white"],
    textures: &["pulse_lines", "concentric_rings"],
    style: "trustworthy",
    keywords: HEALTHCARE_KEYWORDS,
};

const HEALTHTECH_PATTERN: DesignPattern = DesignPattern {
    symbols: &["medical_chip", "digital_heart", "pulse", "cross"],
    shapes: &["hexagon", "circle", "rounded_square"],
    color_themes: &["cyan_tech", "clinical_blue", "vital_green"],
    textures: &["circuits", "waveforms"],
    style: "innovative",
    keywords: HEALTHCARE_KEYWORDS,
};

const FLORAL_PATTERN: DesignPattern = DesignPattern {
    symbols: &["rose", "leaf", "petal", "wreath", "stem"],
    shapes: &["organic", "circle", "curve"],
    color_themes: &["blush_pink", "leaf_green", "lavender"],
    textures: &["petals", "vines"],
    style: "organic",
    keywords: FLORAL_KEYWORDS,
};

const FOOD_PATTERN: DesignPattern = DesignPattern {
    symbols: &["chef_hat", "fork", "spoon", "plate", "steam"],
    shapes: &["circle", "dome", "rounded"],
    color_themes: &["tomato_red", "warm_orange", "fresh_green"],
    textures: &["steam_curls", "garnish"],
    style: "warm",
    keywords: FOOD_KEYWORDS,
};

const BEAUTY_PATTERN: DesignPattern = DesignPattern {
    symbols: &["lotus", "butterfly", "spa_stone", "ripple"],
    shapes: &["organic", "ellipse", "curve"],
    color_themes: &["orchid", "aqua", "rose"],
    textures: &["ripples", "soft_gradients"],
    style: "elegant",
    keywords: BEAUTY_KEYWORDS,
};

const TECHNOLOGY_PATTERN: DesignPattern = DesignPattern {
    symbols: &["circuit", "node", "hexagon", "chip"],
    shapes: &["hexagon", "circle", "grid"],
    color_themes: &["indigo", "violet", "magenta"],
    textures: &["circuits", "spokes"],
    style: "modern",
    keywords: TECH_KEYWORDS,
};

const FINTECH_PATTERN: DesignPattern = DesignPattern {
    symbols: &["vault", "growth_chart", "lock", "coin"],
    shapes: &["diamond", "shield", "square"],
    color_themes: &["trust_blue", "money_green", "gold"],
    textures: &["chart_lines", "dot_border"],
    style: "trustworthy",
    keywords: FINTECH_KEYWORDS,
};

const AI_ML_PATTERN: DesignPattern = DesignPattern {
    symbols: &["neural_network", "node", "brain", "core"],
    shapes: &["circle", "hexagon", "network"],
    color_themes: &["violet", "indigo", "cyan"],
    textures: &["connections", "glow"],
    style: "futuristic",
    keywords: AI_ML_KEYWORDS,
};

const SECURITY_PATTERN: DesignPattern = DesignPattern {
    symbols: &["fortress", "lock", "shield", "key"],
    shapes: &["pentagon", "shield", "ring"],
    color_themes: &["steel_blue", "alert_red", "safe_green"],
    textures: &["encryption_rings", "grid"],
    style: "strong",
    keywords: SECURITY_KEYWORDS,
};

const BLOCKCHAIN_PATTERN: DesignPattern = DesignPattern {
    symbols: &["cube", "chain", "node", "ledger"],
    shapes: &["cube", "hexagon", "link"],
    color_themes: &["gold", "violet", "cyan"],
    textures: &["chain_links", "lattice"],
    style: "decentralized",
    keywords: BLOCKCHAIN_KEYWORDS,
};

const ECOMMERCE_PATTERN: DesignPattern = DesignPattern {
    symbols: &["shopping_bag", "price_tag", "cart"],
    shapes: &["trapezoid", "rounded_square", "tag"],
    color_themes: &["orange", "red", "green"],
    textures: &["stripes", "dots"],
    style: "friendly",
    keywords: ECOMMERCE_KEYWORDS,
};

const SAAS_PATTERN: DesignPattern = DesignPattern {
    symbols: &["cloud", "infinity", "layers", "sync"],
    shapes: &["cloud", "circle", "loop"],
    color_themes: &["sky_blue", "violet", "green"],
    textures: &["layers", "flow_lines"],
    style: "clean",
    keywords: SAAS_KEYWORDS,
};

const EDUCATION_PATTERN: DesignPattern = DesignPattern {
    symbols: &["book", "graduation_cap", "light_bulb", "pencil"],
    shapes: &["rectangle", "circle", "shield"],
    color_themes: &["royal_blue", "amber", "green"],
    textures: &["pages", "rays"],
    style: "approachable",
    keywords: EDUCATION_KEYWORDS,
};
