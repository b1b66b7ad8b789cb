//! Per-call design context: initials, complexity score, approach label and scale.

use serde::{Deserialize, Serialize};

use crate::industry::IndustryCategory;

/// Style complexity constants, matched against the style hint in this order.
const STYLE_COMPLEXITY: &[(&str, f32)] = &[
    ("minimal", 0.3),
    ("modern", 0.6),
    ("professional", 0.8),
    ("premium", 0.9),
    ("luxury", 0.95),
    ("corporate", 0.7),
];

/// Complexity used when the style hint matches no keyword.
const DEFAULT_STYLE_COMPLEXITY: f32 = 0.6;

/// Name length at which the length factor saturates.
const NAME_LENGTH_SATURATION: f32 = 10.0;

/// Name length that maps to a scale factor of exactly 1.
const REFERENCE_NAME_LENGTH: f32 = 12.0;

/// Bucketed overall design direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignApproach {
    /// Complexity above 0.8.
    SophisticatedPremium,
    /// Complexity above 0.6.
    ProfessionalModern,
    /// Complexity above 0.4.
    CleanContemporary,
    /// Everything else.
    MinimalElegant,
}

impl DesignApproach {
    /// Bucket a complexity score.
    #[must_use]
    pub fn from_complexity(score: f32) -> Self {
        if score > 0.8 {
            Self::SophisticatedPremium
        } else if score > 0.6 {
            Self::ProfessionalModern
        } else if score > 0.4 {
            Self::CleanContemporary
        } else {
            Self::MinimalElegant
        }
    }
}

/// Derived, ephemeral metadata for one generation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignContext {
    /// Up to two uppercase initials.
    pub initials: String,
    /// Resolved industry.
    pub industry: IndustryCategory,
    /// Style hint as supplied.
    pub style: String,
    /// Variation index within the batch.
    pub variation: usize,
    /// Complexity score in `0..=1`.
    pub complexity: f32,
    /// Approach bucket derived from `complexity`.
    pub approach: DesignApproach,
    /// Typography scale, `0.7..=1.3`, larger for short names.
    pub scale_factor: f32,
}

/// Company initials.
///
/// Two or more words give the first letter of the first two words; a single
/// word gives its first two characters. Output is uppercased and never padded,
/// so `"X"` stays `"X"`.
#[must_use]
pub fn initials(company_name: &str) -> String {
    let words: Vec<&str> = company_name.split_whitespace().collect();
    let letters: Vec<char> = match words.as_slice() {
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
        [only] => only.chars().take(2).collect(),
        [] => Vec::new(),
    };
    letters.into_iter().flat_map(char::to_uppercase).collect()
}

/// Style complexity for a free-text style hint.
#[must_use]
pub fn style_complexity(style_hint: &str) -> f32 {
    let lower = style_hint.to_lowercase();
    STYLE_COMPLEXITY
        .iter()
        .find(|(keyword, _)| lower.contains(keyword))
        .map_or(DEFAULT_STYLE_COMPLEXITY, |&(_, score)| score)
}

/// Build the design context for one generation call.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze(
    company_name: &str,
    industry: IndustryCategory,
    style_hint: &str,
    variation: usize,
) -> DesignContext {
    let name_len = company_name.chars().count() as f32;
    let length_factor = (name_len / NAME_LENGTH_SATURATION).min(1.0);
    let complexity =
        (length_factor + industry.sophistication() + style_complexity(style_hint)) / 3.0;
    let scale_factor = (REFERENCE_NAME_LENGTH / name_len.max(1.0)).clamp(0.7, 1.3);

    DesignContext {
        initials: initials(company_name),
        industry,
        style: style_hint.to_string(),
        variation,
        complexity,
        approach: DesignApproach::from_complexity(complexity),
        scale_factor,
    }
}
