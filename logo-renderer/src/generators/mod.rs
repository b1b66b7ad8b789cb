//! Composition layer.
//!
//! A [`RenderContext`] carries everything one variation needs: the company
//! name, its resolved palette and design context, the chosen design and a
//! seed for any randomness. [`render_design`] dispatches to the category,
//! industry or premium family and paints a complete logo.
//!
//! ```text
//!                 render_design
//!                       │
//!       ┌───────────────┼────────────────┐
//!       ▼               ▼                ▼
//!   category         industry         premium
//!  (6 × 3 subs)    (templates × 3)  (5 compositions)
//!       └───────────────┼────────────────┘
//!                       ▼
//!          primitives + shapes + typography
//! ```

pub mod category;
pub mod industry;
pub mod premium;

use logo_core::{ColorSystem, Design, DesignChoice, DesignContext, IndustryFamily, Rgba};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::canvas::{Bounds, Canvas, Point, DESIGN_SIZE};
use crate::error::{RenderError, RenderResult};
use crate::primitives::{commerce, medical, tech};
use crate::text::FontWeight;
use crate::typography::{draw_name_block, fit_name, text_with_shadow};

/// Widest a name may be set, leaving a margin on each side.
pub const NAME_MAX_WIDTH: f32 = 860.0;

/// Default font size for names beneath an icon.
pub const NAME_SIZE: f32 = 96.0;

/// Everything needed to render one variation.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Company name as supplied.
    pub company: String,
    /// Fully populated palette.
    pub colors: ColorSystem,
    /// Initials, industry and typography scale.
    pub context: DesignContext,
    /// Code path and sub-variant.
    pub choice: DesignChoice,
    /// Seed for particles and patterns.
    pub seed: u64,
}

impl RenderContext {
    /// A fresh generator seeded for this variation.
    #[must_use]
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Initials, or the trimmed name when it yields none.
    #[must_use]
    pub fn monogram(&self) -> &str {
        if self.context.initials.is_empty() {
            self.company.trim()
        } else {
            &self.context.initials
        }
    }
}

/// Paint the design chosen in `ctx` onto `canvas`.
///
/// # Errors
///
/// Returns [`RenderError::EmptyName`] for a blank company name and propagates
/// text layout failures.
#[tracing::instrument(name = "render_design", skip(canvas, ctx), fields(design = %ctx.choice))]
pub fn render_design(canvas: &mut Canvas, ctx: &RenderContext) -> RenderResult<()> {
    if ctx.company.trim().is_empty() {
        return Err(RenderError::EmptyName);
    }
    match ctx.choice.design {
        Design::Category(category) => category::render(canvas, ctx, category),
        Design::Industry(industry) => {
            industry::render(canvas, ctx, industry);
            Ok(())
        }
        Design::Premium(composition) => premium::render(canvas, ctx, composition),
    }
}

/// Flood the whole canvas with `color`.
pub(crate) fn background(canvas: &mut Canvas, color: Rgba) {
    canvas.fill_rect(Bounds::new(0.0, 0.0, DESIGN_SIZE, DESIGN_SIZE), color);
}

/// Company name in the palette's text color, centered on `center`.
pub(crate) fn name_at(
    canvas: &mut Canvas,
    ctx: &RenderContext,
    center: Point,
    size: f32,
) -> RenderResult<Bounds> {
    draw_name_block(
        canvas,
        &ctx.company,
        center,
        size,
        NAME_MAX_WIDTH,
        FontWeight::Bold,
        ctx.colors.text,
    )
}

/// Company name with a stacked shadow, split over two lines when long.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn shadowed_name(
    canvas: &mut Canvas,
    ctx: &RenderContext,
    center: Point,
    size: f32,
    color: Rgba,
) -> RenderResult<Bounds> {
    let fit = fit_name(canvas, &ctx.company, size, FontWeight::Bold, NAME_MAX_WIDTH)?;
    let advance = fit.size * 1.15;
    let first_y = center.y - advance * (fit.lines.len() as f32 - 1.0) / 2.0;
    let mut block = Bounds::new(center.x, center.y, center.x, center.y);
    for (i, line) in fit.lines.iter().enumerate() {
        let line_center = Point::new(center.x, first_y + advance * i as f32);
        let b = text_with_shadow(
            canvas,
            line,
            line_center,
            fit.size,
            FontWeight::Bold,
            color,
            ctx.colors.shadow,
        )?;
        block = Bounds::new(
            block.left.min(b.left),
            block.top.min(b.top),
            block.right.max(b.right),
            block.bottom.max(b.bottom),
        );
    }
    Ok(block)
}

/// Icon signature shared by every family icon.
pub(crate) type Icon = fn(&mut Canvas, Point, f32, &ColorSystem);

/// The three pictorial icons for an industry family.
pub(crate) fn family_icons(family: IndustryFamily) -> [Icon; 3] {
    match family {
        IndustryFamily::Tech => [
            tech::circuit_board_icon,
            tech::digital_cube_icon,
            tech::network_nodes_icon,
        ],
        IndustryFamily::Health => [
            medical::medical_cross_icon,
            medical::heartbeat_icon,
            medical::wellness_leaf_icon,
        ],
        IndustryFamily::Finance => [
            commerce::growth_bars,
            commerce::secure_vault_icon,
            commerce::currency_flow_icon,
        ],
        IndustryFamily::General => [
            commerce::diamond_gem,
            commerce::building_icon,
            commerce::growth_arrow_icon,
        ],
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use logo_core::{analyze, build_palette, classify, DesignChoice};

    use super::RenderContext;
    use crate::canvas::Canvas;
    use crate::text::FontBook;

    pub fn context(
        company: &str,
        industry: &str,
        design: logo_core::Design,
        variation: usize,
    ) -> RenderContext {
        let category = classify(industry);
        RenderContext {
            company: company.to_string(),
            colors: build_palette::<&str>(&[], category),
            context: analyze(company, category, "modern", variation),
            choice: DesignChoice::new(design, variation),
            seed: 42,
        }
    }

    pub fn canvas() -> Canvas {
        Canvas::new(120, Arc::new(FontBook::builtin())).unwrap()
    }

    /// Pixels that are neither transparent nor plain white background.
    pub fn painted(canvas: &Canvas) -> usize {
        canvas
            .pixmap()
            .pixels()
            .iter()
            .filter(|p| p.alpha() > 0 && !(p.red() == 255 && p.green() == 255 && p.blue() == 255))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use logo_core::{Design, LogoCategory};

    use super::test_support::{canvas, context};
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        let ctx = context("   ", "tech", Design::Category(LogoCategory::Wordmark), 0);
        let mut c = canvas();
        assert!(matches!(render_design(&mut c, &ctx), Err(RenderError::EmptyName)));
    }

    #[test]
    fn monogram_falls_back_to_name() {
        let mut ctx = context("Acme", "tech", Design::Category(LogoCategory::Lettermark), 0);
        assert_eq!(ctx.monogram(), "AC");
        ctx.context.initials.clear();
        assert_eq!(ctx.monogram(), "Acme");
    }

    #[test]
    fn same_seed_same_rng() {
        use rand::Rng;
        let ctx = context("Acme", "tech", Design::Category(LogoCategory::Abstract), 0);
        let a: u64 = ctx.rng().gen();
        let b: u64 = ctx.rng().gen();
        assert_eq!(a, b);
    }
}
