//! Renderer error types.

use thiserror::Error;

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Errors that can occur while rendering a single logo.
///
/// None of these escape a batch: the orchestrator replaces the failed
/// variation with a fallback render.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Canvas allocation failed (zero or oversized dimensions).
    #[error("Canvas allocation failed: {0}")]
    Canvas(String),

    /// The company name has no visible characters.
    #[error("Company name is empty")]
    EmptyName,

    /// Text could not be laid out.
    #[error("Text layout failed: {0}")]
    Text(String),

    /// Encoding the finished canvas failed.
    #[error("Export failed: {0}")]
    Export(String),

    /// A render step reported failure.
    #[error("Render step failed: {0}")]
    Fault(String),
}
