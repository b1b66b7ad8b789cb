//! Design vocabulary shared by the generators and their callers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::industry::IndustryCategory;

/// Number of structural sub-variants each category and industry template offers.
pub const SUB_VARIANT_COUNT: u8 = 3;

/// The six generic logo archetypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoCategory {
    /// The company name set as the mark.
    Wordmark,
    /// Initials as the mark.
    Lettermark,
    /// An industry icon with the name.
    Pictorial,
    /// Non-figurative geometry with the name.
    Abstract,
    /// Icon and name in a fixed arrangement.
    Combination,
    /// Name enclosed by a badge or seal.
    Emblem,
}

impl LogoCategory {
    /// Every category in canonical order.
    pub const ALL: [Self; 6] = [
        Self::Wordmark,
        Self::Lettermark,
        Self::Pictorial,
        Self::Abstract,
        Self::Combination,
        Self::Emblem,
    ];

    /// Stable `snake_case` identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Wordmark => "wordmark",
            Self::Lettermark => "lettermark",
            Self::Pictorial => "pictorial",
            Self::Abstract => "abstract",
            Self::Combination => "combination",
            Self::Emblem => "emblem",
        }
    }
}

/// Composition family used to render a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Engine {
    /// Diverse generic categories, one per variation.
    #[default]
    Category,
    /// Industry-specific templates with numbered compositions.
    Industry,
    /// Premium compositions with monogram effects.
    Premium,
}

impl Engine {
    /// Stable `snake_case` identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Industry => "industry",
            Self::Premium => "premium",
        }
    }
}

impl FromStr for Engine {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "category" => Ok(Self::Category),
            "industry" => Ok(Self::Industry),
            "premium" => Ok(Self::Premium),
            other => Err(CoreError::UnknownDesign(other.to_string())),
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Premium compositions, each a single hand-designed layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PremiumComposition {
    /// Hexagon, node graph and gradient rays.
    TechInnovation,
    /// Layered shield with rising arrows and a dotted border.
    FinancialTrust,
    /// Heart, cross and rings.
    HealthcareExcellence,
    /// Layered shield, lock and security pattern.
    SecurityShield,
    /// Ringed badge with stars.
    UniversalBadge,
}

impl PremiumComposition {
    /// Every composition in rotation order.
    pub const ALL: [Self; 5] = [
        Self::TechInnovation,
        Self::FinancialTrust,
        Self::HealthcareExcellence,
        Self::SecurityShield,
        Self::UniversalBadge,
    ];

    /// Composition that best matches an industry.
    #[must_use]
    pub const fn for_industry(industry: IndustryCategory) -> Self {
        match industry {
            IndustryCategory::Technology
            | IndustryCategory::AiMl
            | IndustryCategory::Saas
            | IndustryCategory::Blockchain => Self::TechInnovation,
            IndustryCategory::Fintech | IndustryCategory::Ecommerce => Self::FinancialTrust,
            IndustryCategory::Healthcare
            | IndustryCategory::Healthtech
            | IndustryCategory::Beauty => Self::HealthcareExcellence,
            IndustryCategory::Cybersecurity => Self::SecurityShield,
            IndustryCategory::Floral | IndustryCategory::Food | IndustryCategory::Education => {
                Self::UniversalBadge
            }
        }
    }

    /// Composition `steps` places after `self` in rotation order.
    #[must_use]
    pub fn rotated(self, steps: usize) -> Self {
        let start = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(start + steps) % Self::ALL.len()]
    }

    /// Stable `snake_case` identifier.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::TechInnovation => "tech_innovation",
            Self::FinancialTrust => "financial_trust",
            Self::HealthcareExcellence => "healthcare_excellence",
            Self::SecurityShield => "security_shield",
            Self::UniversalBadge => "universal_badge",
        }
    }
}

/// The code path a variation is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "engine", content = "name", rename_all = "snake_case")]
pub enum Design {
    /// A generic category.
    Category(LogoCategory),
    /// An industry template.
    Industry(IndustryCategory),
    /// A premium composition.
    Premium(PremiumComposition),
}

impl Design {
    /// Engine this design belongs to.
    #[must_use]
    pub const fn engine(self) -> Engine {
        match self {
            Self::Category(_) => Engine::Category,
            Self::Industry(_) => Engine::Industry,
            Self::Premium(_) => Engine::Premium,
        }
    }

    /// Identifier of the design within its engine.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Category(c) => c.key(),
            Self::Industry(i) => i.key(),
            Self::Premium(p) => p.key(),
        }
    }
}

/// A design plus the sub-variant selected within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DesignChoice {
    /// Code path.
    pub design: Design,
    /// Sub-variant, always `< SUB_VARIANT_COUNT`.
    pub sub_variant: u8,
}

impl DesignChoice {
    /// Pair a design with the sub-variant for a variation index.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn new(design: Design, variation: usize) -> Self {
        Self {
            design,
            sub_variant: (variation % usize::from(SUB_VARIANT_COUNT)) as u8,
        }
    }

    /// `engine/name/sub_variant`, used in cache keys and metrics labels.
    #[must_use]
    pub fn tag(&self) -> String {
        format!(
            "{}/{}/{}",
            self.design.engine().key(),
            self.design.name(),
            self.sub_variant
        )
    }
}

impl fmt::Display for DesignChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_parses_case_insensitively() {
        assert_eq!("Premium".parse::<Engine>().unwrap(), Engine::Premium);
        assert_eq!(" industry ".parse::<Engine>().unwrap(), Engine::Industry);
        assert!(matches!(
            "vector".parse::<Engine>(),
            Err(CoreError::UnknownDesign(name)) if name == "vector"
        ));
    }

    #[test]
    fn premium_rotation_wraps() {
        let start = PremiumComposition::SecurityShield;
        assert_eq!(start.rotated(0), start);
        assert_eq!(start.rotated(1), PremiumComposition::UniversalBadge);
        assert_eq!(start.rotated(2), PremiumComposition::TechInnovation);
        assert_eq!(start.rotated(5), start);
    }

    #[test]
    fn choice_tag_and_sub_variant() {
        let choice = DesignChoice::new(Design::Category(LogoCategory::Emblem), 4);
        assert_eq!(choice.sub_variant, 1);
        assert_eq!(choice.tag(), "category/emblem/1");

        let template = DesignChoice::new(Design::Industry(IndustryCategory::AiMl), 2);
        assert_eq!(template.to_string(), "industry/ai_ml/2");
    }

    #[test]
    fn design_serializes_with_engine_tag() {
        let design = Design::Premium(PremiumComposition::FinancialTrust);
        let json = serde_json::to_value(design).unwrap();
        assert_eq!(json["engine"], "premium");
        assert_eq!(json["name"], "financial_trust");
    }
}
