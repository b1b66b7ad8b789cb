//! The public entry point: configuration, requests and batch generation.

use std::sync::Arc;

use logo_core::{
    analyze, build_palette, classify, ColorSystem, DesignChoice, Engine, IndustryCategory,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use crate::cache::{CacheStats, KeyParts, LogoCacheConfig, LogoKey, SyncLogoCache};
use crate::canvas::Canvas;
use crate::error::RenderResult;
use crate::export::{encode_png, to_base64, PngCompression};
use crate::generators::{render_design, RenderContext};
use crate::orchestrator::{fallback_or_placeholder, plan_variations};
use crate::text::{FontBook, FontConfig};

/// Default output side length in pixels.
pub const DEFAULT_CANVAS_SIZE: u32 = 1000;

/// Style hint used when a request gives none.
pub const DEFAULT_STYLE: &str = "modern";

/// Configuration for a [`LogoStudio`].
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Output side length in pixels.
    pub canvas_size: u32,
    /// Cache successful renders.
    pub cache_enabled: bool,
    /// Cache bounds.
    pub cache: LogoCacheConfig,
    /// Font discovery.
    pub fonts: FontConfig,
    /// PNG compression level.
    pub compression: PngCompression,
    /// Pins the category shuffle; `None` shuffles from entropy.
    pub shuffle_seed: Option<u64>,
    /// Engine used when a request names none.
    pub default_engine: Engine,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            canvas_size: DEFAULT_CANVAS_SIZE,
            cache_enabled: true,
            cache: LogoCacheConfig::default(),
            fonts: FontConfig::default(),
            compression: PngCompression::default(),
            shuffle_seed: None,
            default_engine: Engine::default(),
        }
    }
}

/// One logo-generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoRequest {
    /// Company name.
    pub company_name: String,
    /// Free-form industry description.
    pub industry: String,
    /// Up to three hex colors; malformed entries fall back silently.
    pub colors: Vec<String>,
    /// Number of variations to produce.
    pub num_variations: usize,
    /// Composition family; the studio default when `None`.
    pub engine: Option<Engine>,
    /// Style hint feeding the complexity score.
    pub style: String,
}

impl LogoRequest {
    /// A single-variation request with industry colors.
    pub fn new(company_name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            industry: industry.into(),
            colors: Vec::new(),
            num_variations: 1,
            engine: None,
            style: DEFAULT_STYLE.to_string(),
        }
    }

    /// Set the brand colors.
    #[must_use]
    pub fn with_colors<I, S>(mut self, colors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.colors = colors.into_iter().map(Into::into).collect();
        self
    }

    /// Set the number of variations.
    #[must_use]
    pub fn with_variations(mut self, n: usize) -> Self {
        self.num_variations = n;
        self
    }

    /// Pin the engine.
    #[must_use]
    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Set the style hint.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }
}

/// One slot of a generated batch.
#[derive(Debug, Clone, Serialize)]
pub struct VariationOutcome {
    /// Position in the batch.
    pub index: usize,
    /// Design the slot was planned with.
    pub choice: DesignChoice,
    /// Base64 PNG, no MIME prefix.
    pub image: String,
    /// Served from the cache.
    pub cached: bool,
    /// The planned design failed and the fallback was used.
    pub fallback: bool,
}

/// Palette and industry resolved once per request.
struct Resolved<'a> {
    request: &'a LogoRequest,
    industry: IndustryCategory,
    colors: ColorSystem,
}

/// Logo generator with its fonts and cache.
#[derive(Debug)]
pub struct LogoStudio {
    config: StudioConfig,
    fonts: Arc<FontBook>,
    cache: Option<SyncLogoCache>,
}

impl LogoStudio {
    /// Load fonts and build a studio.
    #[must_use]
    pub fn new(config: StudioConfig) -> Self {
        let fonts = Arc::new(FontBook::load(&config.fonts));
        Self::with_fonts(config, fonts)
    }

    /// Build a studio around an already loaded font book.
    #[must_use]
    pub fn with_fonts(config: StudioConfig, fonts: Arc<FontBook>) -> Self {
        let cache = config
            .cache_enabled
            .then(|| SyncLogoCache::with_config(config.cache.clone()));
        Self { config, fonts, cache }
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Shared font book.
    #[must_use]
    pub fn fonts(&self) -> &Arc<FontBook> {
        &self.fonts
    }

    /// Cache statistics, when caching is enabled.
    #[must_use]
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().and_then(SyncLogoCache::stats)
    }

    /// The designs a batch for `request` would use.
    #[must_use]
    pub fn plan(&self, request: &LogoRequest) -> Vec<DesignChoice> {
        let engine = request.engine.unwrap_or(self.config.default_engine);
        let industry = classify(&request.industry);
        let mut rng = match self.config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        plan_variations(engine, industry, request.num_variations, &mut rng)
    }

    /// Render one variation with a given design, without any fallback.
    ///
    /// The output is a pure function of the request, `choice` and
    /// `variation` for a fixed font environment.
    ///
    /// # Errors
    ///
    /// Returns the first render or export error.
    pub fn generate(
        &self,
        request: &LogoRequest,
        choice: DesignChoice,
        variation: usize,
    ) -> RenderResult<String> {
        let resolved = self.resolve(request);
        let cache = self.cache.as_ref();
        let (image, _) = self.render_slot(&resolved, choice, variation, &render_design, cache)?;
        Ok(image.to_string())
    }

    /// Generate exactly `request.num_variations` logos.
    ///
    /// Never fails: a variation that cannot be rendered is replaced by the
    /// fallback logo, and a fallback that cannot be rendered by a 1×1
    /// placeholder.
    #[must_use]
    pub fn generate_variations(&self, request: &LogoRequest) -> Vec<VariationOutcome> {
        self.generate_batch(request, &render_design, self.cache.as_ref())
    }

    /// [`generate_variations`](Self::generate_variations) with a custom
    /// render step in place of the built-in generators.
    ///
    /// Custom renders never read or fill the cache.
    #[must_use]
    pub fn generate_variations_with<F>(
        &self,
        request: &LogoRequest,
        render: F,
    ) -> Vec<VariationOutcome>
    where
        F: Fn(&mut Canvas, &RenderContext) -> RenderResult<()>,
    {
        self.generate_batch(request, &render, None)
    }

    #[tracing::instrument(
        name = "generate_variations",
        skip(self, request, render, cache),
        fields(
            company = %request.company_name,
            n = request.num_variations,
            cached = cache.is_some()
        )
    )]
    fn generate_batch<F>(
        &self,
        request: &LogoRequest,
        render: &F,
        cache: Option<&SyncLogoCache>,
    ) -> Vec<VariationOutcome>
    where
        F: Fn(&mut Canvas, &RenderContext) -> RenderResult<()>,
    {
        let resolved = self.resolve(request);
        let plan = self.plan(request);
        tracing::debug!(
            industry = resolved.industry.key(),
            "planned {} variations",
            plan.len()
        );

        plan.into_iter()
            .enumerate()
            .map(|(index, choice)| match self.render_slot(&resolved, choice, index, render, cache) {
                Ok((image, cached)) => VariationOutcome {
                    index,
                    choice,
                    image: image.to_string(),
                    cached,
                    fallback: false,
                },
                Err(err) => {
                    tracing::warn!(
                        index,
                        design = %choice,
                        %err,
                        "variation failed; using fallback"
                    );
                    VariationOutcome {
                        index,
                        choice,
                        image: fallback_or_placeholder(
                            &request.company_name,
                            self.config.canvas_size,
                            &self.fonts,
                            self.config.compression,
                        ),
                        cached: false,
                        fallback: true,
                    }
                }
            })
            .collect()
    }

    fn resolve<'a>(&self, request: &'a LogoRequest) -> Resolved<'a> {
        let industry = classify(&request.industry);
        Resolved {
            request,
            industry,
            colors: build_palette(&request.colors, industry),
        }
    }

    fn render_slot<F>(
        &self,
        resolved: &Resolved<'_>,
        choice: DesignChoice,
        variation: usize,
        render: &F,
        cache: Option<&SyncLogoCache>,
    ) -> RenderResult<(Arc<str>, bool)>
    where
        F: Fn(&mut Canvas, &RenderContext) -> RenderResult<()>,
    {
        let request = resolved.request;
        let colors = resolved.colors;
        let key = LogoKey::derive(&KeyParts {
            company: &request.company_name,
            industry: resolved.industry,
            colors: [colors.primary, colors.secondary, colors.accent],
            choice,
            variation,
            style: &request.style,
            canvas_size: self.config.canvas_size,
            compression: self.config.compression,
        });
        let ctx = RenderContext {
            company: request.company_name.clone(),
            colors,
            context: analyze(
                &request.company_name,
                resolved.industry,
                &request.style,
                variation,
            ),
            choice,
            seed: key.seed(),
        };

        let draw = || -> RenderResult<String> {
            let size = self.config.canvas_size;
            let mut canvas = Canvas::new(size, Arc::clone(&self.fonts))?;
            render(&mut canvas, &ctx)?;
            let png = encode_png(canvas.pixmap(), self.config.compression)?;
            Ok(to_base64(&png))
        };

        match cache {
            Some(cache) => cache.get_or_try_generate(&key, draw),
            None => draw().map(|image| (Arc::from(image), false)),
        }
    }
}
