//! Finance, retail and cloud-software motifs.

use logo_core::{BlendMode, ColorSystem, Rgba};

use crate::canvas::{Bounds, Canvas, Point};
use crate::primitives::tech;
use crate::shapes::{
    fill_layered, fill_shape, lemniscate_points, stroke_shape, Diamond, Layers, Tag, Trapezoid,
};

/// Vault shield outline: a diamond 0.7 times as wide as it is tall.
pub const VAULT_DIAMOND: Diamond = Diamond { aspect: 0.7 };

/// Layer schedule of the vault shield.
pub const VAULT_LAYERS: Layers = Layers::linear(30, 0.02);

/// Shopping bag body: narrow top at `-0.36 * size`, full-width bottom at `0.84 * size`.
pub const SHOPPING_BAG: Trapezoid = Trapezoid {
    top_half_width: 0.6,
    bottom_half_width: 1.0,
    top: -0.36,
    bottom: 0.84,
};

/// Layer schedule of the shopping bag body.
pub const BAG_LAYERS: Layers = Layers::linear(30, 0.02);

/// Diamond-shaped vault shield layered from `primary` to `secondary`.
pub fn vault_shield(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    fill_layered(canvas, &VAULT_DIAMOND, center, size, primary, secondary, VAULT_LAYERS);
}

/// Rising bars with heights 30%, 50%, 70%, 100% of `size`.
#[allow(clippy::cast_precision_loss)]
pub fn growth_bars(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    const HEIGHTS: [f32; 4] = [0.3, 0.5, 0.7, 1.0];
    let bar = size * 0.3;
    let gap = size * 0.12;
    let total = HEIGHTS.len() as f32 * bar + (HEIGHTS.len() - 1) as f32 * gap;
    let floor = center.y + size * 0.5;
    for (i, h) in HEIGHTS.iter().enumerate() {
        let left = center.x - total / 2.0 + i as f32 * (bar + gap);
        let t = i as f32 / (HEIGHTS.len() - 1) as f32;
        let color = colors.secondary.blend(colors.primary, t, BlendMode::Linear);
        let column = Bounds::new(left, floor - size * h, left + bar, floor);
        canvas.fill_rounded_rect(column, bar * 0.15, color);
    }
}

/// Chart line climbing from lower left to upper right, capped by an arrow head.
pub fn growth_chart(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    let points = [
        center.offset(-size, size * 0.5),
        center.offset(-size * 0.5, 0.0),
        center.offset(0.0, -size * 0.3),
        center.offset(size * 0.5, -size * 0.5),
        center.offset(size, -size),
    ];
    canvas.polyline(&points, color, 12.0);
    let tip = points[4];
    canvas.fill_polygon(&[tip, tip.offset(-40.0, 30.0), tip.offset(-30.0, 40.0)], color);
}

fn arrow_head(canvas: &mut Canvas, from: Point, tip: Point, length: f32, color: Rgba) {
    let angle = (tip.y - from.y).atan2(tip.x - from.x).to_degrees();
    let left = tip.polar(length, angle + 150.0);
    let right = tip.polar(length, angle - 150.0);
    canvas.fill_polygon(&[tip, left, right], color);
}

/// Shopping bag: layered trapezoid body with a translucent white handle over the top edge.
pub fn shopping_bag(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    fill_layered(canvas, &SHOPPING_BAG, center, size, primary, secondary, BAG_LAYERS);
    let top = center.y + SHOPPING_BAG.top * size;
    canvas.arc(
        Point::new(center.x, top - 30.0),
        size * 0.4,
        50.0,
        180.0,
        0.0,
        Rgba::WHITE.with_alpha(200),
        12.0,
    );
}

/// Price tag hanging from `anchor` with a white eyelet.
pub fn price_tag(canvas: &mut Canvas, anchor: Point, size: f32, color: Rgba) {
    fill_shape(canvas, &Tag, anchor, size, color);
    canvas.fill_circle(anchor.offset(-size * 0.5, size * 0.5), size * 0.2, Rgba::WHITE);
}

/// Cloud of overlapping puffs on a flat base.
pub fn cloud(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    for (dx, dy, r) in [(-0.5, 0.1, 0.38), (0.0, -0.15, 0.52), (0.5, 0.05, 0.42)] {
        canvas.fill_circle(center.offset(size * dx, size * dy), size * r, color);
    }
    let base = Bounds::new(
        center.x - size * 0.85,
        center.y,
        center.x + size * 0.9,
        center.y + size * 0.45,
    );
    canvas.fill_rounded_rect(base, size * 0.22, color);
}

/// Three five-puff clouds stacked 40 units apart, shading toward `secondary`.
pub fn cloud_layers(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    const PUFFS: [(f32, f32, f32); 5] = [
        (-0.5, 0.0, 0.4),
        (0.0, -30.0, 0.5),
        (0.5, 0.0, 0.4),
        (-0.2, 20.0, 0.35),
        (0.2, 20.0, 0.35),
    ];
    for (idx, offset) in [0.0, 40.0, 80.0].into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let color = primary.blend(secondary, idx as f32 / 3.0, BlendMode::Linear);
        for (dx, dy, r) in PUFFS {
            canvas.fill_circle(center.offset(size * dx, offset + dy), size * r, color);
        }
    }
}

/// Infinity symbol: a closed lemniscate sampled every 2 degrees, 25 units thick.
pub fn infinity(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    let mut points = lemniscate_points(center, size, 180);
    if let Some(first) = points.first().copied() {
        points.push(first);
    }
    canvas.polyline(&points, color, 25.0);
}

/// Coin: rim, face and a vertical currency stroke.
pub fn coin(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    canvas.fill_circle(center.offset(size * 0.06, size * 0.06), size, colors.shadow);
    canvas.fill_circle(center, size, colors.accent.darken(0.15));
    canvas.fill_circle(center, size * 0.82, colors.accent);
    let stroke = size * 0.1;
    let upper = center.offset(0.0, -size * 0.18);
    let lower = center.offset(0.0, size * 0.18);
    canvas.arc(upper, size * 0.28, size * 0.2, 0.0, 270.0, colors.neutral, stroke);
    canvas.arc(lower, size * 0.28, size * 0.2, 180.0, 90.0, colors.neutral, stroke);
    canvas.line_butt(
        center.offset(0.0, -size * 0.6),
        center.offset(0.0, size * 0.6),
        colors.neutral,
        size * 0.07,
    );
}

/// Vault shield with a dial and handle spokes.
pub fn secure_vault_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    vault_shield(canvas, center, size, colors.dark_primary, colors.primary);
    stroke_shape(canvas, &VAULT_DIAMOND, center, size, colors.accent, size * 0.025);
    canvas.fill_circle(center, size * 0.3, colors.neutral);
    canvas.stroke_circle(center, size * 0.3, colors.dark_primary, size * 0.04);
    tech::spokes(
        canvas,
        center,
        size * 0.05,
        size * 0.25,
        6,
        colors.dark_primary,
        size * 0.04,
    );
}

/// Two coins joined by flowing arrows.
pub fn currency_flow_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    coin(canvas, center.offset(-size * 0.5, size * 0.3), size * 0.4, colors);
    coin(canvas, center.offset(size * 0.5, -size * 0.3), size * 0.4, colors);
    let r = size * 0.75;
    let stroke = size * 0.07;
    for (start, color) in [(200.0, colors.primary), (20.0, colors.secondary)] {
        canvas.arc(center, r, r, start, start + 90.0, color, stroke);
        arrow_head(
            canvas,
            center.polar(r, start + 80.0),
            center.polar(r, start + 92.0),
            size * 0.2,
            color,
        );
    }
}

/// Three parallel arrows stepping up and to the right.
pub fn triple_arrows(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let palette = [colors.primary, colors.secondary, colors.accent];
    for (i, color) in palette.into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let shift = (i as f32 - 1.0) * size * 0.35;
        let from = center.offset(-size * 0.7 + shift, size * 0.5 - shift * 0.2);
        let tip = center.offset(size * 0.4 + shift, -size * 0.5 - shift * 0.2);
        canvas.line(from, tip, color, size * 0.09);
        arrow_head(canvas, from, tip, size * 0.25, color);
    }
}

/// Office building with a grid of windows.
#[allow(clippy::cast_precision_loss)]
pub fn building_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let tower = Bounds::new(
        center.x - size * 0.45,
        center.y - size,
        center.x + size * 0.45,
        center.y + size,
    );
    let wing = Bounds::new(
        center.x + size * 0.45,
        center.y - size * 0.3,
        center.x + size * 0.85,
        center.y + size,
    );
    canvas.fill_rect(wing, colors.dark_primary);
    canvas.fill_rect(tower, colors.primary);
    for row in 0..6 {
        for col in 0..3 {
            let x = tower.left + size * (0.12 + 0.27 * col as f32);
            let y = tower.top + size * (0.15 + 0.3 * row as f32);
            let window = Bounds::new(x, y, x + size * 0.14, y + size * 0.16);
            canvas.fill_rect(window, colors.highlight);
        }
    }
    let door = Bounds::new(
        center.x - size * 0.1,
        center.y + size * 0.7,
        center.x + size * 0.1,
        center.y + size,
    );
    canvas.fill_rect(door, colors.neutral_dark);
}

/// Faceted gem: crown and pavilion with facet lines.
pub fn diamond_gem(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let table_l = center.offset(-size * 0.45, -size * 0.55);
    let table_r = center.offset(size * 0.45, -size * 0.55);
    let girdle_l = center.offset(-size, -size * 0.15);
    let girdle_r = center.offset(size, -size * 0.15);
    let culet = center.offset(0.0, size);
    let inner_l = center.offset(-size * 0.35, -size * 0.15);
    let inner_r = center.offset(size * 0.35, -size * 0.15);
    canvas.fill_polygon(&[table_l, table_r, girdle_r, girdle_l], colors.light_primary);
    canvas.fill_polygon(&[girdle_l, girdle_r, culet], colors.primary);
    canvas.fill_polygon(&[girdle_l, inner_l, culet], colors.dark_primary);
    let facet = colors.highlight.with_alpha(200);
    for p in [table_l, table_r] {
        canvas.line(p, center.offset(0.0, -size * 0.15), facet, size * 0.02);
    }
    canvas.line(inner_l, culet, facet, size * 0.02);
    canvas.line(inner_r, culet, facet, size * 0.02);
}

/// Bold upward arrow on a rounded square.
pub fn growth_arrow_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let tile = Bounds::centered(center, size * 2.0, size * 2.0);
    canvas.fill_rounded_rect(tile, size * 0.3, colors.primary);
    let shaft = [
        center.offset(-size * 0.15, size * 0.7),
        center.offset(-size * 0.15, -size * 0.1),
        center.offset(-size * 0.45, -size * 0.1),
        center.offset(0.0, -size * 0.7),
        center.offset(size * 0.45, -size * 0.1),
        center.offset(size * 0.15, -size * 0.1),
        center.offset(size * 0.15, size * 0.7),
    ];
    canvas.fill_polygon(&shaft, colors.neutral);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use logo_core::{build_palette, IndustryCategory};

    use super::*;
    use crate::shapes::Shape;
    use crate::text::FontBook;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    fn colors() -> ColorSystem {
        build_palette::<&str>(&[], IndustryCategory::Fintech)
    }

    fn canvas() -> Canvas {
        Canvas::new(100, Arc::new(FontBook::builtin())).unwrap()
    }

    fn rgba(canvas: &Canvas, x: u32, y: u32) -> (u8, u8, u8, u8) {
        let p = canvas.pixmap().pixel(x, y).unwrap();
        (p.red(), p.green(), p.blue(), p.alpha())
    }

    fn near(p: Point, x: f32, y: f32) -> bool {
        (p.x - x).abs() < 1e-3 && (p.y - y).abs() < 1e-3
    }

    #[test]
    fn shopping_bag_is_a_layered_trapezoid() {
        assert_eq!(BAG_LAYERS, Layers::linear(30, 0.02));
        let body = SHOPPING_BAG.outline(Point::new(500.0, 500.0), 340.0);
        assert_eq!(body.len(), 4);
        assert!(near(body[0], 296.0, 377.6));
        assert!(near(body[1], 704.0, 377.6));
        assert!(near(body[2], 840.0, 785.6));
        assert!(near(body[3], 160.0, 785.6));

        let mut c = canvas();
        shopping_bag(&mut c, Point::new(500.0, 500.0), 340.0, RED, BLUE);
        // Wide at the bottom, narrow at the top.
        let (r, _, b, a) = rgba(&c, 17, 77);
        assert!(a > 0 && r > b);
        assert_eq!(rgba(&c, 20, 40).3, 0);
        // Innermost layers reach the secondary color.
        let (r, _, b, _) = rgba(&c, 50, 50);
        assert!(b > r);
        // Handle arcs over the top edge, open underneath.
        assert!(rgba(&c, 50, 29).3 > 0);
        assert_eq!(rgba(&c, 50, 33).3, 0);
    }

    #[test]
    fn vault_shield_is_a_narrow_diamond() {
        assert_eq!(VAULT_LAYERS, Layers::linear(30, 0.02));
        let mut c = canvas();
        vault_shield(&mut c, Point::new(500.0, 500.0), 340.0, RED, BLUE);
        let (r, _, b, a) = rgba(&c, 50, 20);
        assert!(a > 0 && r > b);
        let (r, _, b, _) = rgba(&c, 50, 50);
        assert!(b > r);
        assert_eq!(rgba(&c, 20, 50).3, 0);
    }

    #[test]
    fn price_tag_cut_corner_and_eyelet() {
        let mut c = canvas();
        price_tag(&mut c, Point::new(500.0, 400.0), 200.0, RED);
        assert_eq!(rgba(&c, 40, 50), (255, 255, 255, 255));
        assert_eq!(rgba(&c, 55, 45), (255, 0, 0, 255));
        assert_eq!(rgba(&c, 68, 42).3, 0);
        assert!(rgba(&c, 68, 50).3 > 0);
    }

    #[test]
    fn cloud_layers_shade_downward() {
        let mut c = canvas();
        cloud_layers(&mut c, Point::new(500.0, 500.0), 340.0, RED, BLUE);
        assert_eq!(rgba(&c, 50, 31), (255, 0, 0, 255));
        let (r, _, b, _) = rgba(&c, 50, 70);
        assert!(b > r);
        assert_eq!(rgba(&c, 50, 28).3, 0);
    }

    #[test]
    fn growth_chart_climbs_to_upper_right() {
        let mut c = canvas();
        growth_chart(&mut c, Point::new(500.0, 500.0), 250.0, RED);
        assert!(rgba(&c, 37, 50).3 > 0);
        assert!(rgba(&c, 75, 25).3 > 0);
        assert_eq!(rgba(&c, 30, 30).3, 0);
        assert_eq!(rgba(&c, 70, 70).3, 0);
    }

    #[test]
    fn growth_bars_rise_left_to_right() {
        let mut c = canvas();
        growth_bars(&mut c, Point::new(500.0, 500.0), 600.0, &colors());
        // The first bar reaches 30% of size above the floor at y = 800.
        assert_eq!(rgba(&c, 15, 40).3, 0);
        assert!(rgba(&c, 85, 40).3 > 0);
    }

    #[test]
    fn infinity_is_closed_and_hollow_at_lobes() {
        let mut c = canvas();
        infinity(&mut c, Point::new(500.0, 500.0), 400.0, Rgba::BLACK);
        assert!(rgba(&c, 50, 50).3 > 0);
        assert_eq!(rgba(&c, 70, 50).3, 0);
    }

    #[test]
    fn commerce_icons_paint() {
        let icons: [fn(&mut Canvas, Point, f32, &ColorSystem); 7] = [
            coin,
            secure_vault_icon,
            currency_flow_icon,
            triple_arrows,
            building_icon,
            diamond_gem,
            growth_arrow_icon,
        ];
        for icon in icons {
            let mut c = Canvas::new(80, Arc::new(FontBook::builtin())).unwrap();
            icon(&mut c, Point::new(500.0, 500.0), 250.0, &colors());
            assert!(c.pixmap().pixels().iter().any(|p| p.alpha() > 0));
        }
    }
}
