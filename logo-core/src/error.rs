//! Error types for core logo operations.

use thiserror::Error;

/// Result type for core logo operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core logo operations.
///
/// Palette building never surfaces these; they exist for callers that want
/// strict parsing (for example request validation at a service boundary).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A color string was not `#RGB` or `#RRGGBB` hex.
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),

    /// Unknown engine or category name.
    #[error("Unknown design name: {0}")]
    UnknownDesign(String),
}
