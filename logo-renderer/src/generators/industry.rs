//! Industry templates, three compositions per industry.
//!
//! Templates are pure marks: no background and no name, everything laid out
//! around the canvas center.

use logo_core::{ColorSystem, IndustryCategory, Rgba};

use super::RenderContext;
use crate::canvas::{Bounds, Canvas, Point};
use crate::primitives::{abstract_art, botanical, commerce, culinary, learning, medical, tech};
use crate::shapes::{
    fill_layered, stroke_shape, HeraldicShield, Layers, MedicalShield, CIRCLE, HEXAGON, OCTAGON,
};

const CENTER: Point = Point::new(500.0, 500.0);

/// Leaf green used on the zen stones.
const ZEN_LEAF: Rgba = Rgba::rgb(0x10, 0xB9, 0x81);

/// Render the template for `industry` using the sub-variant in `ctx`.
pub(crate) fn render(canvas: &mut Canvas, ctx: &RenderContext, industry: IndustryCategory) {
    let sub = ctx.choice.sub_variant;
    tracing::debug!(industry = industry.key(), sub, "rendering industry template");
    match industry {
        IndustryCategory::Healthcare => healthcare(canvas, ctx, sub),
        IndustryCategory::Healthtech => healthtech(canvas, ctx, sub),
        IndustryCategory::Floral => floral(canvas, ctx, sub),
        IndustryCategory::Food => food(canvas, ctx, sub),
        IndustryCategory::Beauty => beauty(canvas, ctx, sub),
        IndustryCategory::Technology | IndustryCategory::AiMl => technology(canvas, ctx, sub),
        IndustryCategory::Fintech => fintech(canvas, ctx, sub),
        IndustryCategory::Cybersecurity => cybersecurity(canvas, ctx, sub),
        IndustryCategory::Blockchain => blockchain(canvas, ctx, sub),
        IndustryCategory::Ecommerce => ecommerce(canvas, ctx, sub),
        IndustryCategory::Saas => saas(canvas, ctx, sub),
        IndustryCategory::Education => education(canvas, ctx, sub),
    }
}

/// Gradient disc of `radius` shrinking by `layers`.
fn disc(canvas: &mut Canvas, radius: f32, from: Rgba, to: Rgba, layers: Layers) {
    fill_layered(canvas, &CIRCLE, CENTER, radius, from, to, layers);
}

/// Spokes from `inner` to `outer` with a dot of `dot` radius at each tip.
#[allow(clippy::cast_precision_loss)]
fn dotted_spokes(
    canvas: &mut Canvas,
    inner: f32,
    outer: f32,
    count: usize,
    color: Rgba,
    width: f32,
    dot: f32,
) {
    tech::spokes(canvas, CENTER, inner, outer, count, color, width);
    for i in 0..count {
        let tip = CENTER.polar(outer, 360.0 / count as f32 * i as f32);
        canvas.fill_circle(tip, dot, color);
    }
}

fn healthcare(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            medical::medical_shield(canvas, CENTER, 350.0, c.primary, c.secondary);
            medical::stethoscope(canvas, CENTER, 280.0, Rgba::WHITE);
        }
        1 => {
            disc(canvas, 350.0, c.primary, c.secondary, Layers::linear(30, 0.015));
            medical::heart(canvas, CENTER.offset(0.0, -50.0), 200.0, Rgba::WHITE);
            medical::pulse_line(canvas, CENTER.offset(0.0, 180.0), 280.0, c.accent);
            medical::cross(canvas, CENTER.offset(0.0, -50.0), 100.0, c.accent);
        }
        _ => {
            let layers = Layers::linear(35, 0.018);
            fill_layered(canvas, &OCTAGON, CENTER, 340.0, c.primary, c.secondary, layers);
            medical::cross(canvas, CENTER, 160.0, Rgba::WHITE);
        }
    }
}

fn healthtech(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            tech::tech_hexagon(canvas, CENTER, 320.0, c.primary, c.secondary);
            medical::digital_health_wave(canvas, CENTER, 280.0, c.accent);
            tech::mini_circuits(canvas, CENTER, 350.0, c.secondary.with_alpha(100));
            medical::medical_chip(canvas, CENTER, 140.0, Rgba::WHITE);
        }
        1 => {
            medical::medical_shield(canvas, CENTER, 330.0, c.primary, c.secondary);
            tech::mini_circuits(canvas, CENTER, 380.0, c.accent.with_alpha(140));
            medical::heart(canvas, CENTER, 150.0, Rgba::WHITE);
            medical::pulse_line(canvas, CENTER.offset(0.0, 20.0), 200.0, c.accent);
        }
        _ => {
            disc(canvas, 350.0, c.secondary, c.primary, Layers::linear(30, 0.015));
            medical::medical_chip(canvas, CENTER, 170.0, Rgba::WHITE);
            medical::digital_health_wave(canvas, CENTER.offset(0.0, 250.0), 300.0, c.accent);
        }
    }
}

fn floral(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            for side in [-1.0, 1.0] {
                let at = CENTER.offset(side * 200.0, 100.0);
                botanical::leaf(canvas, at, 120.0, 60.0, side * 30.0, c.secondary);
            }
            botanical::rose(canvas, CENTER, 280.0, c.primary, c.accent);
            for side in [-1.0, 1.0] {
                let at = CENTER.offset(side * 180.0, -180.0);
                botanical::simple_flower(canvas, at, 80.0, c.accent);
            }
        }
        1 => {
            for i in 0..12u8 {
                let angle = f32::from(i) * 30.0;
                let at = CENTER.polar(320.0, angle);
                botanical::leaf(canvas, at, 100.0, 45.0, angle + 90.0, c.secondary);
            }
            botanical::simple_flower(canvas, CENTER.offset(0.0, -60.0), 140.0, c.primary);
            botanical::simple_flower(canvas, CENTER.offset(-90.0, 40.0), 120.0, c.accent);
            botanical::simple_flower(canvas, CENTER.offset(90.0, 40.0), 120.0, c.primary);
        }
        _ => {
            let stem = Bounds::new(CENTER.x - 10.0, CENTER.y, CENTER.x + 10.0, CENTER.y + 280.0);
            canvas.fill_rect(stem, c.secondary);
            let left = CENTER.offset(-80.0, 100.0);
            botanical::leaf(canvas, left, 100.0, 50.0, -20.0, c.secondary);
            let right = CENTER.offset(80.0, 140.0);
            botanical::leaf(canvas, right, 100.0, 50.0, 20.0, c.secondary);
            let bloom = CENTER.offset(0.0, -40.0);
            botanical::detailed_flower(canvas, bloom, 250.0, c.primary, c.accent);
        }
    }
}

fn food(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            let hat = CENTER.offset(0.0, -80.0);
            culinary::chef_hat(canvas, hat, 240.0, Rgba::WHITE, c.primary);
            culinary::fork(canvas, CENTER.offset(-80.0, 140.0), 200.0, c.secondary, -30.0);
            culinary::spoon(canvas, CENTER.offset(80.0, 140.0), 200.0, c.secondary, 30.0);
        }
        1 => {
            disc(canvas, 350.0, c.primary, c.secondary, Layers::linear(25, 0.02));
            for side in [-1.0, 1.0] {
                let at = CENTER.offset(side * 100.0, -50.0);
                botanical::leaf(canvas, at, 90.0, 40.0, side * 15.0, c.accent);
            }
            botanical::simple_flower(canvas, CENTER, 100.0, c.accent);
            let cutlery = Rgba::WHITE.with_alpha(200);
            culinary::fork(canvas, CENTER.offset(-280.0, 0.0), 180.0, cutlery, 90.0);
            culinary::knife(canvas, CENTER.offset(280.0, 0.0), 180.0, cutlery, 90.0);
        }
        _ => {
            culinary::serving_dome(canvas, CENTER, 300.0, c.primary, c.secondary);
            for (dx, dy) in [(-80.0, -180.0), (0.0, -200.0), (80.0, -180.0)] {
                culinary::steam(canvas, CENTER.offset(dx, dy), c.accent);
            }
        }
    }
}

fn beauty(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            botanical::lotus(canvas, CENTER, 300.0, c.primary, c.secondary);
            botanical::ripples(canvas, CENTER, 380.0, c.secondary);
        }
        1 => {
            let wings = CENTER.offset(0.0, -80.0);
            botanical::butterfly(canvas, wings, 280.0, c.primary, c.accent);
            botanical::simple_flower(canvas, CENTER.offset(-100.0, 180.0), 100.0, c.accent);
            botanical::simple_flower(canvas, CENTER.offset(100.0, 180.0), 100.0, c.secondary);
        }
        _ => {
            botanical::spa_stone(canvas, CENTER.offset(0.0, 120.0), 280.0, 100.0, c.primary);
            botanical::spa_stone(canvas, CENTER, 240.0, 90.0, c.secondary);
            botanical::spa_stone(canvas, CENTER.offset(0.0, -100.0), 200.0, 80.0, c.accent);
            botanical::leaf(canvas, CENTER.offset(0.0, -180.0), 160.0, 70.0, 0.0, ZEN_LEAF);
        }
    }
}

fn technology(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            tech::neural_network(canvas, CENTER, 350.0, c.primary, c.secondary);
            tech::tech_core(canvas, CENTER, 180.0, c.accent);
            tech::connection_nodes(canvas, CENTER, 300.0, c.secondary, 8);
        }
        1 => {
            tech::tech_hexagon(canvas, CENTER, 340.0, c.primary, c.secondary);
            tech::mini_circuits(canvas, CENTER, 360.0, c.secondary.with_alpha(120));
            dotted_spokes(canvas, 100.0, 160.0, 6, c.accent, 10.0, 15.0);
        }
        _ => {
            disc(canvas, 360.0, c.primary, c.secondary, Layers::linear(40, 0.015));
            dotted_spokes(canvas, 0.0, 280.0, 12, c.accent, 6.0, 20.0);
        }
    }
}

fn fintech(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            commerce::vault_shield(canvas, CENTER, 340.0, c.primary, c.secondary);
            commerce::growth_chart(canvas, CENTER, 250.0, c.accent);
            tech::secure_lock(canvas, CENTER.offset(0.0, -80.0), 120.0, Rgba::WHITE);
        }
        1 => {
            disc(canvas, 340.0, c.secondary, c.primary, Layers::linear(30, 0.02));
            commerce::growth_bars(canvas, CENTER.offset(0.0, 20.0), 320.0, &neutral_marks(c));
            commerce::growth_chart(canvas, CENTER, 260.0, c.accent);
        }
        _ => {
            commerce::infinity(canvas, CENTER, 300.0, c.primary);
            commerce::coin(canvas, CENTER, 120.0, c);
        }
    }
}

fn cybersecurity(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            tech::fortress_shield(canvas, CENTER, 360.0, c.primary, c.secondary);
            tech::encryption_layers(canvas, CENTER, 320.0, c.secondary, 120);
            tech::secure_lock(canvas, CENTER, 150.0, Rgba::WHITE);
        }
        1 => tech::security_badge(canvas, CENTER, 320.0, c),
        _ => {
            let shield = HeraldicShield::Classic;
            let layers = Layers::gamma(30, 0.015);
            fill_layered(canvas, &shield, CENTER, 340.0, c.dark_primary, c.primary, layers);
            let grid = Bounds::centered(CENTER.offset(0.0, -20.0), 340.0, 340.0);
            tech::security_pattern(canvas, grid, 8, ctx.seed, c.accent.with_alpha(170));
            stroke_shape(canvas, &shield, CENTER, 340.0, c.accent, 10.0);
        }
    }
}

fn blockchain(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            tech::blockchain_cubes(canvas, CENTER, 320.0, c.primary, c.secondary);
            tech::chain_links(canvas, CENTER, 350.0, c.accent);
            tech::connection_nodes(canvas, CENTER, 380.0, c.secondary, 6);
        }
        1 => {
            tech::connection_nodes(canvas, CENTER, 320.0, c.secondary, 6);
            abstract_art::crystal_structure(canvas, CENTER, 170.0, c);
        }
        _ => {
            let layers = Layers::linear(35, 0.018);
            fill_layered(canvas, &HEXAGON, CENTER, 340.0, c.primary, c.secondary, layers);
            tech::chain_links(canvas, CENTER, 220.0, Rgba::WHITE.with_alpha(230));
        }
    }
}

fn ecommerce(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            commerce::shopping_bag(canvas, CENTER, 340.0, c.primary, c.secondary);
            commerce::price_tag(canvas, CENTER.offset(120.0, -120.0), 80.0, c.accent);
        }
        1 => {
            disc(canvas, 330.0, c.primary, c.secondary, Layers::linear(25, 0.02));
            commerce::price_tag(canvas, CENTER.offset(0.0, -130.0), 260.0, c.accent);
        }
        _ => {
            disc(canvas, 330.0, c.primary, c.secondary, Layers::linear(25, 0.02));
            commerce::triple_arrows(canvas, CENTER, 210.0, &neutral_marks(c));
        }
    }
}

fn saas(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => {
            commerce::cloud_layers(canvas, CENTER, 340.0, c.primary, c.secondary);
            commerce::infinity(canvas, CENTER, 200.0, c.accent);
        }
        1 => {
            tech::gradient_rays(canvas, CENTER, 360.0, 12, c.light_primary, c.accent);
            commerce::cloud(canvas, CENTER.offset(0.0, 20.0), 230.0, c.primary);
            tech::spokes(canvas, CENTER.offset(0.0, 70.0), 0.0, 70.0, 3, Rgba::WHITE, 12.0);
        }
        _ => {
            disc(canvas, 350.0, c.primary, c.secondary, Layers::linear(30, 0.015));
            commerce::infinity(canvas, CENTER, 260.0, Rgba::WHITE);
        }
    }
}

fn education(canvas: &mut Canvas, ctx: &RenderContext, sub: u8) {
    let c = &ctx.colors;
    match sub {
        0 => learning::open_book(canvas, CENTER, 320.0, c),
        1 => {
            stroke_shape(canvas, &MedicalShield, CENTER, 360.0, c.light_primary, 10.0);
            learning::graduation_cap(canvas, CENTER, 280.0, c);
        }
        _ => learning::light_bulb(canvas, CENTER, 260.0, c),
    }
}

/// Palette for marks drawn over a filled disc: brand roles swapped for light tones.
fn neutral_marks(colors: &ColorSystem) -> ColorSystem {
    ColorSystem {
        primary: colors.neutral,
        secondary: colors.highlight,
        accent: colors.light_primary,
        ..*colors
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use logo_core::Design;

    use super::super::test_support::{canvas, context, painted};
    use super::*;
    use crate::text::FontBook;

    fn rendered(industry: IndustryCategory, sub: usize) -> Canvas {
        let ctx = context("Acme", industry.key(), Design::Industry(industry), sub);
        let mut c = Canvas::new(100, Arc::new(FontBook::builtin())).unwrap();
        render(&mut c, &ctx, industry);
        c
    }

    fn rgba(canvas: &Canvas, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = canvas.pixmap().pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    #[test]
    fn every_industry_template_renders_all_compositions() {
        for industry in IndustryCategory::ALL {
            for variation in 0..3 {
                let design = Design::Industry(industry);
                let ctx = context("Acme Labs", industry.key(), design, variation);
                let mut c = canvas();
                render(&mut c, &ctx, industry);
                assert!(painted(&c) > 0, "{industry:?} composition {variation}");
            }
        }
    }

    #[test]
    fn compositions_differ_structurally() {
        let industries = [
            IndustryCategory::Floral,
            IndustryCategory::Fintech,
            IndustryCategory::Saas,
        ];
        for industry in industries {
            let frames: Vec<Vec<u8>> = (0..3)
                .map(|v| rendered(industry, v).pixmap().data().to_vec())
                .collect();
            assert_ne!(frames[0], frames[1]);
            assert_ne!(frames[0], frames[2]);
            assert_ne!(frames[1], frames[2]);
        }
    }

    #[test]
    fn templates_leave_the_corners_transparent() {
        for industry in IndustryCategory::ALL {
            for sub in 0..3 {
                let c = rendered(industry, sub);
                assert_eq!(rgba(&c, 0, 0).3, 0, "{industry:?} composition {sub}");
                assert_eq!(rgba(&c, 99, 99).3, 0, "{industry:?} composition {sub}");
            }
        }
    }

    #[test]
    fn healthcare_stethoscope_sits_on_the_shield() {
        let c = rendered(IndustryCategory::Healthcare, 0);
        // White ear tips at (388, 430) and (612, 430) over the shield.
        assert_eq!(rgba(&c, 39, 43), (255, 255, 255, 255));
        assert_eq!(rgba(&c, 61, 43), (255, 255, 255, 255));
        // Shield shows between the ear tubes.
        let between = rgba(&c, 50, 43);
        assert_eq!(between.3, 255);
        assert_ne!((between.0, between.1, between.2), (255, 255, 255));
    }

    #[test]
    fn floral_wreath_has_twelve_leaves() {
        let c = rendered(IndustryCategory::Floral, 1);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pixel = |p: Point| ((p.x / 10.0) as u32, (p.y / 10.0) as u32);
        for i in 0..12u8 {
            let angle = f32::from(i) * 30.0;
            let inside = CENTER.polar(320.0, angle).polar(10.0, angle + 90.0);
            let (x, y) = pixel(inside);
            assert!(rgba(&c, x, y).3 > 0, "leaf {i}");
            let (x, y) = pixel(CENTER.polar(320.0, angle + 15.0));
            assert_eq!(rgba(&c, x, y).3, 0, "gap after leaf {i}");
        }
    }

    #[test]
    fn food_dome_has_three_steam_wisps() {
        let c = rendered(IndustryCategory::Food, 2);
        // Wisps start at y 320 and 300 and rise 100 units.
        for x in [42, 50, 58] {
            let column = (18..32).any(|y| rgba(&c, x, y).3 > 0 || rgba(&c, x + 1, y).3 > 0);
            assert!(column, "wisp near x {x}");
        }
        // Nothing between the wisps.
        assert_eq!(rgba(&c, 46, 25).3, 0);
    }

    #[test]
    fn ecommerce_bag_carries_the_tag() {
        let design = Design::Industry(IndustryCategory::Ecommerce);
        let ctx = context("Acme", "ecommerce", design, 0);
        let c = rendered(IndustryCategory::Ecommerce, 0);
        // The tag hangs from (620, 380); its body right of the bag's top edge.
        let tag = rgba(&c, 66, 40);
        let accent = ctx.colors.accent;
        assert_eq!((tag.0, tag.1, tag.2), (accent.r, accent.g, accent.b));
        // Below the bag's bottom edge at y 785.6 is empty.
        assert_eq!(rgba(&c, 50, 80).3, 0);
    }
}
