//! Premium compositions: a layered badge, a monogram with effects and the
//! name, framed according to the sub-variant.

use logo_core::{BlendMode, PremiumComposition};

use super::{background, name_at, RenderContext};
use crate::canvas::{Bounds, Canvas, Point, DESIGN_SIZE};
use crate::error::RenderResult;
use crate::primitives::{abstract_art, commerce, medical, tech};
use crate::shapes::{
    fill_layered, fill_radial, fill_with_shadow, stroke_shape, HeraldicShield, Layers,
    MedicalShield, CIRCLE, HEXAGON,
};
use crate::typography::monogram_with_effects;

const BADGE: Point = Point::new(500.0, 410.0);

/// Base monogram size before the name-length scale factor is applied.
const MONOGRAM_SIZE: f32 = 170.0;

/// Render `composition`, framed by the sub-variant in `ctx`.
pub(crate) fn render(
    canvas: &mut Canvas,
    ctx: &RenderContext,
    composition: PremiumComposition,
) -> RenderResult<()> {
    let c = &ctx.colors;
    background(canvas, c.neutral);
    frame(canvas, ctx, ctx.choice.sub_variant);
    tracing::debug!(composition = composition.key(), "rendering premium composition");

    match composition {
        PremiumComposition::TechInnovation => {
            tech::gradient_rays(canvas, BADGE, 340.0, 16, c.light_primary, c.accent);
            tech::tech_hexagon(canvas, BADGE, 250.0, c.primary, c.secondary);
            tech::spokes(canvas, BADGE, 200.0, 240.0, 6, c.highlight, 6.0);
        }
        PremiumComposition::FinancialTrust => {
            commerce::vault_shield(canvas, BADGE, 300.0, c.dark_primary, c.primary);
            stroke_shape(canvas, &commerce::VAULT_DIAMOND, BADGE, 300.0, c.accent, 8.0);
            canvas.stroke_circle(BADGE, 150.0, c.accent.with_alpha(200), 6.0);
        }
        PremiumComposition::HealthcareExcellence => {
            fill_with_shadow(canvas, &MedicalShield, BADGE, 290.0, c.dark_primary, c.shadow, 4);
            fill_layered(
                canvas,
                &MedicalShield,
                BADGE,
                270.0,
                c.primary,
                c.secondary,
                Layers::gamma(30, 0.02),
            );
            medical::cross(canvas, BADGE.offset(0.0, -190.0), 30.0, c.neutral);
        }
        PremiumComposition::SecurityShield => {
            let shield = HeraldicShield::Classic;
            fill_with_shadow(canvas, &shield, BADGE, 300.0, c.dark_primary, c.shadow, 4);
            fill_layered(
                canvas,
                &shield,
                BADGE,
                280.0,
                c.dark_primary,
                c.primary,
                Layers::gamma(35, 0.015),
            );
            stroke_shape(canvas, &shield, BADGE, 280.0, c.accent, 10.0);
            canvas.stroke_circle(BADGE.offset(0.0, -20.0), 170.0, c.accent.with_alpha(140), 4.0);
        }
        PremiumComposition::UniversalBadge => {
            fill_radial(canvas, BADGE, 310.0, 5.0, c.dark_primary, c.primary, BlendMode::Gamma);
            abstract_art::concentric_rings(canvas, BADGE, 290.0, 3, c);
            for i in 0..5u8 {
                let p = BADGE.polar(245.0, -90.0 + 72.0 * f32::from(i));
                abstract_art::star(canvas, p, 20.0, c.accent);
            }
        }
    }

    let size = MONOGRAM_SIZE * ctx.context.scale_factor;
    let anchor = BADGE.offset(0.0, -10.0);
    monogram_with_effects(canvas, ctx.monogram(), anchor, size, c, c.neutral)?;
    name_at(canvas, ctx, Point::new(500.0, 850.0), 84.0)?;
    Ok(())
}

/// Sub-variant 0 leaves the page plain, 1 adds a rounded border, 2 adds
/// corner hexagons and a base rule.
fn frame(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {}
        1 => {
            let border = Bounds::new(30.0, 30.0, DESIGN_SIZE - 30.0, DESIGN_SIZE - 30.0);
            canvas.stroke_rounded_rect(border, 60.0, c.primary, 12.0);
            let inner = Bounds::new(50.0, 50.0, DESIGN_SIZE - 50.0, DESIGN_SIZE - 50.0);
            canvas.stroke_rounded_rect(inner, 45.0, c.accent, 4.0);
        }
        _ => {
            for corner in [
                Point::new(80.0, 80.0),
                Point::new(DESIGN_SIZE - 80.0, 80.0),
                Point::new(80.0, DESIGN_SIZE - 80.0),
                Point::new(DESIGN_SIZE - 80.0, DESIGN_SIZE - 80.0),
            ] {
                let layers = Layers::linear(8, 0.06);
                fill_layered(canvas, &HEXAGON, corner, 40.0, c.secondary, c.accent, layers);
            }
            canvas.fill_rect(Bounds::new(200.0, 930.0, 800.0, 940.0), c.primary);
            let knot = Point::new(500.0, 935.0);
            let layers = Layers::linear(4, 0.2);
            fill_layered(canvas, &CIRCLE, knot, 14.0, c.accent, c.highlight, layers);
        }
    }
}

#[cfg(test)]
mod tests {
    use logo_core::Design;

    use super::super::test_support::{canvas, context, painted};
    use super::*;

    #[test]
    fn every_composition_and_frame_renders() {
        for composition in PremiumComposition::ALL {
            for variation in 0..3 {
                let design = Design::Premium(composition);
                let ctx = context("Northwind Capital", "fintech", design, variation);
                let mut c = canvas();
                render(&mut c, &ctx, composition).unwrap();
                assert!(painted(&c) > 0);
            }
        }
    }

    #[test]
    fn frames_change_the_image() {
        let render_sub = |v| {
            let design = Design::Premium(PremiumComposition::UniversalBadge);
            let ctx = context("Acme", "saas", design, v);
            let mut c = canvas();
            render(&mut c, &ctx, PremiumComposition::UniversalBadge).unwrap();
            c.pixmap().data().to_vec()
        };
        assert_ne!(render_sub(0), render_sub(1));
        assert_ne!(render_sub(1), render_sub(2));
    }
}
