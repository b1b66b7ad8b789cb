//! API route handlers.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use logo_core::{DesignPattern, Engine, IndustryCategory, IndustryFamily, Rgba};
use logo_renderer::{LogoRequest, VariationOutcome};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::metrics;
use crate::validation::{
    parse_engine, validate_colors, validate_company_name, validate_industry,
    validate_num_variations, validate_style, ValidationError,
};
use crate::AppState;

/// Variations produced when a request does not say.
pub const DEFAULT_VARIATIONS: usize = 3;

fn default_variations() -> usize {
    DEFAULT_VARIATIONS
}

/// Body of `POST /api/logos`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateLogosRequest {
    /// Company name, 1-100 characters.
    pub company_name: String,
    /// Free-form industry description.
    #[serde(default)]
    pub industry: String,
    /// Up to three hex colors.
    #[serde(default)]
    pub colors: Vec<String>,
    /// Number of variations, 1-10.
    #[serde(default = "default_variations")]
    pub num_variations: usize,
    /// `category`, `industry` or `premium`.
    #[serde(default)]
    pub engine: Option<String>,
    /// Style hint such as `minimal` or `luxury`.
    #[serde(default)]
    pub style: Option<String>,
}

impl GenerateLogosRequest {
    /// Validate every field and build the renderer request.
    ///
    /// # Errors
    ///
    /// Returns the first failing field.
    pub fn into_logo_request(self) -> Result<LogoRequest, ValidationError> {
        validate_company_name(&self.company_name)?;
        validate_industry(&self.industry)?;
        validate_colors(&self.colors)?;
        validate_num_variations(self.num_variations)?;
        if let Some(style) = &self.style {
            validate_style(style)?;
        }
        let engine = parse_engine(self.engine.as_deref())?;

        let mut request = LogoRequest::new(self.company_name.trim(), self.industry)
            .with_colors(self.colors)
            .with_variations(self.num_variations);
        if let Some(engine) = engine {
            request = request.with_engine(engine);
        }
        if let Some(style) = self.style {
            request = request.with_style(style);
        }
        Ok(request)
    }
}

/// Per-variation metadata returned alongside the images.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariationSummary {
    /// Position in the batch.
    pub index: usize,
    /// Engine the variation was planned with.
    pub engine: Engine,
    /// Design name within the engine.
    pub design: String,
    /// Structural sub-variant.
    pub sub_variant: u8,
    /// Served from the cache.
    pub cached: bool,
    /// Replaced by the fallback render.
    pub fallback: bool,
}

impl From<&VariationOutcome> for VariationSummary {
    fn from(outcome: &VariationOutcome) -> Self {
        Self {
            index: outcome.index,
            engine: outcome.choice.design.engine(),
            design: outcome.choice.design.name().to_string(),
            sub_variant: outcome.choice.sub_variant,
            cached: outcome.cached,
            fallback: outcome.fallback,
        }
    }
}

/// Body returned by `POST /api/logos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateLogosResponse {
    /// Identifier for log correlation.
    pub generation_id: String,
    /// Base64 PNGs without a MIME prefix, one per variation.
    pub images: Vec<String>,
    /// Metadata for each image, same order.
    pub variations: Vec<VariationSummary>,
}

/// Generate a batch of logo variations.
#[tracing::instrument(
    name = "generate_logos",
    skip(state, payload),
    fields(generation_id = tracing::field::Empty)
)]
pub async fn generate_logos(
    State(state): State<AppState>,
    payload: Result<Json<GenerateLogosRequest>, JsonRejection>,
) -> Result<Json<GenerateLogosResponse>, ApiError> {
    let started = Instant::now();
    let Json(body) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let request = body
        .into_logo_request()
        .inspect_err(|err| metrics::record_validation_failure(err.field()))?;

    let generation_id = uuid::Uuid::new_v4().to_string();
    tracing::Span::current().record("generation_id", generation_id.as_str());
    let engine = request.engine.unwrap_or(state.studio.config().default_engine);

    let studio = Arc::clone(&state.studio);
    let outcomes = tokio::task::spawn_blocking(move || studio.generate_variations(&request))
        .await
        .map_err(|err| ApiError::Internal(format!("generation task failed: {err}")))?;

    let variations: Vec<VariationSummary> = outcomes.iter().map(VariationSummary::from).collect();
    for outcome in &outcomes {
        metrics::record_variation(&outcome.choice.tag(), outcome.cached, outcome.fallback);
    }
    metrics::record_generation(engine.key(), started.elapsed().as_secs_f64());
    tracing::info!(
        variations = variations.len(),
        fallbacks = variations.iter().filter(|v| v.fallback).count(),
        elapsed_ms = started.elapsed().as_millis(),
        "generated logos"
    );

    Ok(Json(GenerateLogosResponse {
        generation_id,
        images: outcomes.into_iter().map(|o| o.image).collect(),
        variations,
    }))
}

/// One entry of `GET /api/industries`.
#[derive(Debug, Clone, Serialize)]
pub struct IndustrySummary {
    /// Stable identifier.
    pub key: &'static str,
    /// Icon family.
    pub family: IndustryFamily,
    /// Sophistication used in the complexity score.
    pub sophistication: f32,
    /// Default brand triad as hex.
    pub default_colors: Vec<String>,
    /// Design vocabulary.
    pub pattern: &'static DesignPattern,
}

impl From<IndustryCategory> for IndustrySummary {
    fn from(industry: IndustryCategory) -> Self {
        Self {
            key: industry.key(),
            family: industry.family(),
            sophistication: industry.sophistication(),
            default_colors: industry.default_triad().into_iter().map(Rgba::to_hex).collect(),
            pattern: industry.pattern(),
        }
    }
}

/// List every industry with its design vocabulary.
#[tracing::instrument(name = "list_industries")]
pub async fn list_industries() -> Json<Vec<IndustrySummary>> {
    Json(IndustryCategory::ALL.into_iter().map(IndustrySummary::from).collect())
}
