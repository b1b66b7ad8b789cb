//! Input validation for logo requests.
//!
//! Only lengths and ranges are checked here. Malformed hex colors are not an
//! error: the palette builder substitutes a default for them.

use logo_core::Engine;
use thiserror::Error;

/// Maximum company name length in characters.
pub const MAX_COMPANY_NAME_LEN: usize = 100;
/// Maximum industry description length in characters.
pub const MAX_INDUSTRY_LEN: usize = 200;
/// Maximum number of brand colors.
pub const MAX_COLORS: usize = 3;
/// Maximum length of a single color string.
pub const MAX_COLOR_LEN: usize = 16;
/// Maximum style hint length in characters.
pub const MAX_STYLE_LEN: usize = 64;
/// Fewest variations a request may ask for.
pub const MIN_VARIATIONS: usize = 1;
/// Most variations a request may ask for.
pub const MAX_VARIATIONS: usize = 10;

/// Validation error types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Company name is empty after trimming.
    #[error("company_name must not be empty")]
    CompanyNameEmpty,
    /// Company name exceeds maximum length.
    #[error("company_name too long (max {MAX_COMPANY_NAME_LEN} chars)")]
    CompanyNameTooLong,
    /// Industry description exceeds maximum length.
    #[error("industry too long (max {MAX_INDUSTRY_LEN} chars)")]
    IndustryTooLong,
    /// More colors than the palette uses.
    #[error("too many colors (max {MAX_COLORS})")]
    TooManyColors,
    /// A color string exceeds maximum length.
    #[error("color too long (max {MAX_COLOR_LEN} chars)")]
    ColorTooLong,
    /// Style hint exceeds maximum length.
    #[error("style too long (max {MAX_STYLE_LEN} chars)")]
    StyleTooLong,
    /// Variation count outside the allowed range.
    #[error("num_variations must be between {MIN_VARIATIONS} and {MAX_VARIATIONS}, got {0}")]
    VariationsOutOfRange(usize),
    /// Engine name not recognised.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),
}

impl ValidationError {
    /// Field name used as the metrics label.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::CompanyNameEmpty | Self::CompanyNameTooLong => "company_name",
            Self::IndustryTooLong => "industry",
            Self::TooManyColors | Self::ColorTooLong => "colors",
            Self::StyleTooLong => "style",
            Self::VariationsOutOfRange(_) => "num_variations",
            Self::UnknownEngine(_) => "engine",
        }
    }
}

/// Validate a company name.
///
/// # Errors
///
/// Returns [`ValidationError::CompanyNameEmpty`] for blank names and
/// [`ValidationError::CompanyNameTooLong`] past 100 characters.
pub fn validate_company_name(name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::CompanyNameEmpty);
    }
    if trimmed.chars().count() > MAX_COMPANY_NAME_LEN {
        return Err(ValidationError::CompanyNameTooLong);
    }
    Ok(())
}

/// Validate an industry description. Empty is allowed.
///
/// # Errors
///
/// Returns [`ValidationError::IndustryTooLong`] past 200 characters.
pub fn validate_industry(industry: &str) -> Result<(), ValidationError> {
    if industry.chars().count() > MAX_INDUSTRY_LEN {
        return Err(ValidationError::IndustryTooLong);
    }
    Ok(())
}

/// Validate the brand color list.
///
/// # Errors
///
/// Returns [`ValidationError::TooManyColors`] for more than three entries and
/// [`ValidationError::ColorTooLong`] for an oversized entry.
pub fn validate_colors<S: AsRef<str>>(colors: &[S]) -> Result<(), ValidationError> {
    if colors.len() > MAX_COLORS {
        return Err(ValidationError::TooManyColors);
    }
    if colors.iter().any(|c| c.as_ref().len() > MAX_COLOR_LEN) {
        return Err(ValidationError::ColorTooLong);
    }
    Ok(())
}

/// Validate the style hint.
///
/// # Errors
///
/// Returns [`ValidationError::StyleTooLong`] past 64 characters.
pub fn validate_style(style: &str) -> Result<(), ValidationError> {
    if style.chars().count() > MAX_STYLE_LEN {
        return Err(ValidationError::StyleTooLong);
    }
    Ok(())
}

/// Validate the requested variation count.
///
/// # Errors
///
/// Returns [`ValidationError::VariationsOutOfRange`] outside `1..=10`.
pub fn validate_num_variations(n: usize) -> Result<(), ValidationError> {
    if (MIN_VARIATIONS..=MAX_VARIATIONS).contains(&n) {
        Ok(())
    } else {
        Err(ValidationError::VariationsOutOfRange(n))
    }
}

/// Parse an optional engine name.
///
/// # Errors
///
/// Returns [`ValidationError::UnknownEngine`] for unrecognised names.
pub fn parse_engine(engine: Option<&str>) -> Result<Option<Engine>, ValidationError> {
    engine
        .map(|name| {
            name.parse::<Engine>()
                .map_err(|_| ValidationError::UnknownEngine(name.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_name_bounds() {
        assert!(validate_company_name("Rose Garden").is_ok());
        assert!(validate_company_name("X").is_ok());
        assert_eq!(validate_company_name("   "), Err(ValidationError::CompanyNameEmpty));
        assert!(validate_company_name(&"a".repeat(100)).is_ok());
        assert_eq!(
            validate_company_name(&"a".repeat(101)),
            Err(ValidationError::CompanyNameTooLong)
        );
    }

    #[test]
    fn test_company_name_counts_characters_not_bytes() {
        assert!(validate_company_name(&"é".repeat(100)).is_ok());
    }

    #[test]
    fn test_industry_may_be_empty() {
        assert!(validate_industry("").is_ok());
        assert_eq!(validate_industry(&"x".repeat(201)), Err(ValidationError::IndustryTooLong));
    }

    #[test]
    fn test_colors() {
        assert!(validate_colors::<&str>(&[]).is_ok());
        assert!(validate_colors(&["#EC4899", "#10B981", "#A855F7"]).is_ok());
        assert!(validate_colors(&["not a color"]).is_ok());
        assert_eq!(validate_colors(&["#000"; 4]), Err(ValidationError::TooManyColors));
        assert_eq!(validate_colors(&["#0000000000000000000"]), Err(ValidationError::ColorTooLong));
    }

    #[test]
    fn test_num_variations_range() {
        assert!(validate_num_variations(1).is_ok());
        assert!(validate_num_variations(10).is_ok());
        assert_eq!(validate_num_variations(0), Err(ValidationError::VariationsOutOfRange(0)));
        assert_eq!(validate_num_variations(11), Err(ValidationError::VariationsOutOfRange(11)));
    }

    #[test]
    fn test_parse_engine() {
        assert_eq!(parse_engine(None), Ok(None));
        assert_eq!(parse_engine(Some("Premium")), Ok(Some(Engine::Premium)));
        assert_eq!(
            parse_engine(Some("ultra")),
            Err(ValidationError::UnknownEngine("ultra".to_string()))
        );
    }

    #[test]
    fn test_field_labels() {
        assert_eq!(ValidationError::TooManyColors.field(), "colors");
        assert_eq!(ValidationError::VariationsOutOfRange(0).field(), "num_variations");
        assert_eq!(ValidationError::CompanyNameEmpty.to_string(), "company_name must not be empty");
    }
}
