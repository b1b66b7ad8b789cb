//! The six generic categories, three structural sub-variants each.

use logo_core::{BlendMode, LogoCategory};

use super::{
    background, family_icons, name_at, shadowed_name, RenderContext, NAME_MAX_WIDTH, NAME_SIZE,
};
use crate::canvas::{Bounds, Canvas, Point};
use crate::error::RenderResult;
use crate::primitives::abstract_art;
use crate::shapes::{
    fill_layered, fill_with_shadow, stroke_shape, HeraldicShield, Layers, RegularPolygon, CIRCLE,
};
use crate::text::FontWeight;
use crate::typography::{draw_centered_text, draw_name_block, monogram_with_effects};

const POINTY_HEXAGON: RegularPolygon = RegularPolygon {
    sides: 6,
    rotation: -90.0,
};

/// Render `category` using the sub-variant in `ctx`.
pub(crate) fn render(
    canvas: &mut Canvas,
    ctx: &RenderContext,
    category: LogoCategory,
) -> RenderResult<()> {
    background(canvas, logo_core::Rgba::WHITE);
    let sub = ctx.choice.sub_variant;
    tracing::debug!(category = category.key(), sub, "rendering category design");
    match category {
        LogoCategory::Wordmark => wordmark(canvas, ctx, sub),
        LogoCategory::Lettermark => lettermark(canvas, ctx, sub),
        LogoCategory::Pictorial => pictorial(canvas, ctx, sub),
        LogoCategory::Abstract => abstract_mark(canvas, ctx, sub),
        LogoCategory::Combination => combination(canvas, ctx, sub),
        LogoCategory::Emblem => emblem(canvas, ctx, sub),
    }
}

fn wordmark(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) -> RenderResult<()> {
    let colors = &ctx.colors;
    let center = canvas.center();
    match sub {
        0 => {
            shadowed_name(canvas, ctx, center, 170.0, colors.primary)?;
        }
        1 => {
            let block = draw_name_block(
                canvas,
                &ctx.company,
                center.offset(0.0, -30.0),
                150.0,
                NAME_MAX_WIDTH,
                FontWeight::Bold,
                colors.primary,
            )?;
            let bar = Bounds::new(
                block.left,
                block.bottom + 30.0,
                block.right,
                block.bottom + 50.0,
            );
            canvas.fill_rounded_rect(bar, 10.0, colors.accent);
            let dot = Point::new(bar.right + 30.0, bar.center().y);
            canvas.fill_circle(dot, 12.0, colors.secondary);
        }
        _ => {
            let panel = Bounds::centered(center, 900.0, 400.0);
            canvas.fill_rounded_rect(panel.translate(10.0, 12.0), 48.0, colors.shadow);
            canvas.fill_rounded_rect(panel, 48.0, colors.secondary);
            canvas.stroke_rounded_rect(panel, 48.0, colors.accent, 8.0);
            let weight = FontWeight::Bold;
            draw_name_block(canvas, &ctx.company, center, 130.0, 780.0, weight, colors.neutral)?;
        }
    }
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn lettermark(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) -> RenderResult<()> {
    let colors = &ctx.colors;
    let center = canvas.center().offset(0.0, -60.0);
    let monogram = ctx.monogram().to_string();
    match sub {
        0 => {
            let layers = Layers::linear(20, 0.02);
            fill_layered(canvas, &CIRCLE, center, 300.0, colors.primary, colors.secondary, layers);
            canvas.fill_circle(center, 220.0, colors.neutral);
            let size = 220.0 * ctx.context.scale_factor.min(1.0);
            monogram_with_effects(canvas, &monogram, center, size, colors, colors.primary)?;
        }
        1 => {
            let letters: Vec<String> = monogram.chars().map(String::from).collect();
            let rows = letters.len().max(1);
            let step = 360.0 / rows as f32;
            let top = center.y - step * (rows - 1) as f32 / 2.0;
            for (i, letter) in letters.iter().enumerate() {
                let color = if i % 2 == 0 { colors.primary } else { colors.secondary };
                let y = top + step * i as f32;
                let at = Point::new(center.x, y);
                draw_centered_text(canvas, letter, at, 220.0, FontWeight::Bold, color)?;
            }
            for side in [-1.0, 1.0] {
                let rule = Bounds::centered(center.offset(side * 190.0, 0.0), 24.0, 380.0);
                canvas.fill_rounded_rect(rule, 12.0, colors.accent);
            }
        }
        _ => {
            let left = center.offset(-90.0, 0.0);
            let right = center.offset(90.0, 0.0);
            canvas.stroke_circle(left, 200.0, colors.primary, 28.0);
            canvas.stroke_circle(right, 200.0, colors.secondary, 28.0);
            let mut chars = monogram.chars();
            let first = chars.next().map(String::from).unwrap_or_default();
            let second: String = chars.collect();
            let weight = FontWeight::Bold;
            let at = left.offset(-30.0, 0.0);
            draw_centered_text(canvas, &first, at, 230.0, weight, colors.primary)?;
            if !second.is_empty() {
                let at = right.offset(30.0, 0.0);
                let color = colors.secondary.with_alpha(220);
                draw_centered_text(canvas, &second, at, 230.0, weight, color)?;
            }
        }
    }
    name_at(canvas, ctx, Point::new(500.0, 860.0), 72.0)?;
    Ok(())
}

fn pictorial(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) -> RenderResult<()> {
    let icons = family_icons(ctx.context.industry.family());
    let icon = icons[usize::from(sub) % icons.len()];
    canvas.fill_circle(Point::new(500.0, 400.0), 300.0, ctx.colors.light_primary.with_alpha(70));
    icon(canvas, Point::new(500.0, 400.0), 220.0, &ctx.colors);
    name_at(canvas, ctx, Point::new(500.0, 810.0), NAME_SIZE)?;
    Ok(())
}

fn abstract_mark(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) -> RenderResult<()> {
    let center = Point::new(500.0, 400.0);
    match sub {
        0 => abstract_art::flowing_waves(canvas, center, 330.0, &ctx.colors, &mut ctx.rng()),
        1 => abstract_art::geometric_spiral(canvas, center, 300.0, &ctx.colors),
        _ => abstract_art::crystal_structure(canvas, center, 230.0, &ctx.colors),
    }
    name_at(canvas, ctx, Point::new(500.0, 820.0), NAME_SIZE)?;
    Ok(())
}

fn combination(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) -> RenderResult<()> {
    let icons = family_icons(ctx.context.industry.family());
    let icon = icons[(usize::from(sub) + 1) % icons.len()];
    match sub {
        0 => {
            icon(canvas, Point::new(500.0, 360.0), 200.0, &ctx.colors);
            name_at(canvas, ctx, Point::new(500.0, 780.0), 110.0)?;
        }
        1 => {
            icon(canvas, Point::new(210.0, 500.0), 140.0, &ctx.colors);
            canvas.line(Point::new(390.0, 380.0), Point::new(390.0, 620.0), ctx.colors.accent, 8.0);
            draw_name_block(
                canvas,
                &ctx.company,
                Point::new(680.0, 500.0),
                100.0,
                540.0,
                FontWeight::Bold,
                ctx.colors.text,
            )?;
        }
        _ => {
            let block = draw_name_block(
                canvas,
                &ctx.company,
                Point::new(560.0, 500.0),
                110.0,
                720.0,
                FontWeight::Bold,
                ctx.colors.primary,
            )?;
            let mini = Point::new((block.left - 80.0).max(70.0), 500.0);
            icon(canvas, mini, 55.0, &ctx.colors);
            let underline = Bounds::new(
                block.left,
                block.bottom + 24.0,
                block.right,
                block.bottom + 36.0,
            );
            canvas.fill_rounded_rect(underline, 6.0, ctx.colors.accent);
        }
    }
    Ok(())
}

fn emblem(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) -> RenderResult<()> {
    let colors = &ctx.colors;
    let center = Point::new(500.0, 430.0);
    let monogram = ctx.monogram().to_string();
    match sub {
        0 => {
            let shield = HeraldicShield::Crest;
            fill_with_shadow(canvas, &shield, center, 330.0, colors.dark_primary, colors.shadow, 4);
            let layers = Layers::gamma(25, 0.02);
            fill_layered(canvas, &shield, center, 300.0, colors.primary, colors.secondary, layers);
            stroke_shape(canvas, &shield, center, 300.0, colors.accent, 8.0);
            let at = center.offset(0.0, -20.0);
            draw_centered_text(canvas, &monogram, at, 200.0, FontWeight::Bold, colors.neutral)?;
        }
        1 => {
            canvas.fill_circle(center, 320.0, colors.primary);
            canvas.stroke_circle(center, 280.0, colors.neutral, 10.0);
            let inner = colors.secondary.blend(colors.primary, 0.3, BlendMode::Linear);
            canvas.fill_circle(center, 200.0, inner);
            for i in 0..8u8 {
                let p = center.polar(240.0, f32::from(i) * 45.0 - 90.0);
                abstract_art::star(canvas, p, 22.0, colors.accent);
            }
            draw_centered_text(canvas, &monogram, center, 170.0, FontWeight::Bold, colors.neutral)?;
        }
        _ => {
            fill_layered(
                canvas,
                &POINTY_HEXAGON,
                center,
                330.0,
                colors.dark_primary,
                colors.primary,
                Layers::linear(30, 0.015),
            );
            stroke_shape(canvas, &POINTY_HEXAGON, center, 270.0, colors.accent, 10.0);
            draw_centered_text(canvas, &monogram, center, 190.0, FontWeight::Bold, colors.neutral)?;
        }
    }
    name_at(canvas, ctx, Point::new(500.0, 880.0), 72.0)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use logo_core::{Design, LogoCategory};

    use super::super::test_support::{canvas, context, painted};
    use super::*;

    #[test]
    fn every_category_and_sub_variant_renders() {
        for category in LogoCategory::ALL {
            for variation in 0..3 {
                let design = Design::Category(category);
                let ctx = context("Tech Flow AI", "ai software", design, variation);
                let mut c = canvas();
                render(&mut c, &ctx, category).unwrap();
                assert!(painted(&c) > 0, "{category:?} sub {variation} painted nothing");
            }
        }
    }

    #[test]
    fn sub_variants_are_structurally_different() {
        let frames: Vec<Vec<u8>> = (0..3)
            .map(|v| {
                let design = Design::Category(LogoCategory::Emblem);
                let ctx = context("Rose Garden", "floral", design, v);
                let mut c = canvas();
                render(&mut c, &ctx, LogoCategory::Emblem).unwrap();
                c.pixmap().data().to_vec()
            })
            .collect();
        assert_ne!(frames[0], frames[1]);
        assert_ne!(frames[1], frames[2]);
        assert_ne!(frames[0], frames[2]);
    }

    #[test]
    fn single_letter_lettermarks_render() {
        for variation in 0..3 {
            let ctx = context("X", "saas", Design::Category(LogoCategory::Lettermark), variation);
            let mut c = canvas();
            render(&mut c, &ctx, LogoCategory::Lettermark).unwrap();
        }
    }
}
