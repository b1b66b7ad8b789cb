//! Variation planning and the fallback chain.
//!
//! A batch of `n` variations is planned up front so every slot gets a
//! different code path where one exists. When a slot fails to render it is
//! replaced by [`render_fallback`]; when even that fails the caller gets
//! [`PLACEHOLDER_PNG_BASE64`].

use std::sync::Arc;

use logo_core::{
    initials, BlendMode, Design, DesignChoice, Engine, IndustryCategory, LogoCategory,
    PremiumComposition, Rgba,
};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::canvas::Canvas;
use crate::error::RenderResult;
use crate::export::{encode_png, to_base64, PngCompression};
use crate::shapes::fill_radial;
use crate::text::{FontBook, FontWeight};
use crate::typography::text_with_shadow;

/// A transparent 1×1 PNG, base64-encoded.
pub const PLACEHOLDER_PNG_BASE64: &str = concat!(
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mNk",
    "+M9QDwADhgGAWjR9awAAAABJRU5ErkJggg==",
);

/// Outer radius of the fallback disc.
const FALLBACK_RADIUS: f32 = 300.0;
/// Radius decrement between fallback rings.
const FALLBACK_STEP: f32 = 5.0;
const FALLBACK_OUTER: Rgba = Rgba::INDIGO;
const FALLBACK_INNER: Rgba = Rgba::rgb(59, 130, 246);
const FALLBACK_TEXT_SIZE: f32 = 180.0;

/// Choose the design for each of `n` slots.
///
/// The category engine shuffles the six categories once and walks them in
/// order, so no two slots share a category while `n <= 6`. Industry
/// templates cycle their compositions. Premium starts at the composition
/// matched to `industry` and rotates through the rest.
pub fn plan_variations<R: Rng + ?Sized>(
    engine: Engine,
    industry: IndustryCategory,
    n: usize,
    rng: &mut R,
) -> Vec<DesignChoice> {
    match engine {
        Engine::Category => {
            let mut categories = LogoCategory::ALL;
            categories.shuffle(rng);
            (0..n)
                .map(|i| DesignChoice::new(Design::Category(categories[i % categories.len()]), i))
                .collect()
        }
        Engine::Industry => (0..n)
            .map(|i| DesignChoice::new(Design::Industry(industry), i))
            .collect(),
        Engine::Premium => {
            let matched = PremiumComposition::for_industry(industry);
            (0..n)
                .map(|i| DesignChoice::new(Design::Premium(matched.rotated(i)), i))
                .collect()
        }
    }
}

/// Render the fallback logo: a blended disc with the company's initials.
///
/// # Errors
///
/// Returns an error if the canvas cannot be allocated or the image cannot be
/// encoded.
#[tracing::instrument(skip(fonts))]
pub fn render_fallback(
    company: &str,
    canvas_size: u32,
    fonts: &Arc<FontBook>,
    compression: PngCompression,
) -> RenderResult<String> {
    let mut canvas = Canvas::new(canvas_size, Arc::clone(fonts))?;
    let center = canvas.center();
    fill_radial(
        &mut canvas,
        center,
        FALLBACK_RADIUS,
        FALLBACK_STEP,
        FALLBACK_OUTER,
        FALLBACK_INNER,
        BlendMode::Gamma,
    );

    let letters = initials(company);
    if !letters.is_empty() {
        text_with_shadow(
            &mut canvas,
            &letters,
            center,
            FALLBACK_TEXT_SIZE,
            FontWeight::Bold,
            Rgba::WHITE,
            Rgba::rgba(0, 0, 0, 100),
        )?;
    }

    let png = encode_png(canvas.pixmap(), compression)?;
    Ok(to_base64(&png))
}

/// [`render_fallback`], or the placeholder when that fails too.
#[must_use]
pub fn fallback_or_placeholder(
    company: &str,
    canvas_size: u32,
    fonts: &Arc<FontBook>,
    compression: PngCompression,
) -> String {
    render_fallback(company, canvas_size, fonts, compression).unwrap_or_else(|err| {
        tracing::error!(%err, "fallback render failed; returning placeholder");
        PLACEHOLDER_PNG_BASE64.to_string()
    })
}
