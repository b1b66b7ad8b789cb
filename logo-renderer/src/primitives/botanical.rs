//! Floral, beauty and wellness motifs.

use std::f32::consts::PI;

use logo_core::{BlendMode, Rgba};

use crate::canvas::{Canvas, Point};

/// Half-ellipse leaf of `length` along its axis, bulging `width / 2` to one side.
///
/// At `angle` 0 the axis is vertical and the bulge points right.
#[must_use]
pub fn leaf_outline(center: Point, length: f32, width: f32, angle: f32) -> Vec<Point> {
    (0..20u8)
        .map(|i| {
            let t = f32::from(i) / 19.0 * PI;
            center
                .offset(t.sin() * width / 2.0, t.cos() * length / 2.0)
                .rotate_about(center, angle)
        })
        .collect()
}

/// Filled leaf, see [`leaf_outline`].
pub fn leaf(canvas: &mut Canvas, center: Point, length: f32, width: f32, angle: f32, color: Rgba) {
    canvas.fill_polygon(&leaf_outline(center, length, width, angle), color);
}

/// Rose seen from above: five petal rings, fewer and tighter toward the middle.
pub fn rose(canvas: &mut Canvas, center: Point, size: f32, primary: Rgba, accent: Rgba) {
    for layer in 0..5u8 {
        let l = f32::from(layer);
        let petals = 8 - layer;
        let petal_size = size * (1.0 - l * 0.15);
        let color = primary.blend(accent, l / 5.0, BlendMode::Linear);
        for i in 0..petals {
            let angle = 360.0 / f32::from(petals) * f32::from(i) + l * 15.0;
            let petal = center.polar(petal_size * 0.3, angle);
            canvas.fill_ellipse(petal, petal_size * 0.2, petal_size * 0.3, color);
        }
    }
    canvas.fill_circle(center, 25.0, accent);
}

/// Five round petals around a darker center.
pub fn simple_flower(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    for i in 0..5u8 {
        let petal = center.polar(size * 0.35, 72.0 * f32::from(i) - 90.0);
        canvas.fill_circle(petal, size * 0.4, color);
    }
    canvas.fill_circle(center, size * 0.2, color.darken(0.3));
}

/// Eight outer petals, six offset inner petals and a white center.
pub fn detailed_flower(canvas: &mut Canvas, center: Point, size: f32, primary: Rgba, accent: Rgba) {
    for i in 0..8u8 {
        let petal = center.polar(size * 0.4, 45.0 * f32::from(i));
        canvas.fill_circle(petal, size * 0.25, primary);
    }
    for i in 0..6u8 {
        let petal = center.polar(size * 0.25, 60.0 * f32::from(i) + 30.0);
        canvas.fill_circle(petal, size * 0.175, accent);
    }
    canvas.fill_circle(center, 30.0, Rgba::WHITE);
}

/// Lotus from above: eight outer petals, six inner petals and a white heart.
pub fn lotus(canvas: &mut Canvas, center: Point, size: f32, primary: Rgba, secondary: Rgba) {
    for i in 0..8u8 {
        let petal = center.polar(size * 0.45, 45.0 * f32::from(i));
        canvas.fill_circle(petal, size * 0.25, primary);
    }
    for i in 0..6u8 {
        let petal = center.polar(size * 0.28, 60.0 * f32::from(i) + 30.0);
        canvas.fill_circle(petal, size * 0.19, secondary);
    }
    canvas.fill_circle(center, size * 0.12, Rgba::WHITE);
}

/// Butterfly with upper wings in `primary`, lower wings in `accent` and a dark body.
pub fn butterfly(canvas: &mut Canvas, center: Point, size: f32, primary: Rgba, accent: Rgba) {
    let body = Rgba::rgb(50, 50, 50);
    for side in [-1.0, 1.0] {
        canvas.fill_ellipse(
            center.offset(side * size * 0.35, -size * 0.1),
            size * 0.25,
            size * 0.3,
            primary,
        );
    }
    for side in [-1.0, 1.0] {
        canvas.fill_ellipse(
            center.offset(side * size * 0.275, size * 0.25),
            size * 0.225,
            size * 0.25,
            accent,
        );
    }
    let half_body = size * 0.3;
    canvas.fill_ellipse(center, size * 0.08, half_body, body);
    for side in [-1.0, 1.0] {
        canvas.line_butt(
            center.offset(side * 5.0, -half_body),
            center.offset(side * 20.0, -half_body - 40.0),
            body,
            3.0,
        );
    }
}

/// Smooth stone: fifteen shrinking ellipses, each a little darker.
pub fn spa_stone(canvas: &mut Canvas, center: Point, width: f32, height: f32, color: Rgba) {
    for layer in 0..15u8 {
        let l = f32::from(layer);
        let scale = 1.0 - l * 0.03;
        let shade = color.darken(l / 15.0 * 0.3);
        canvas.fill_ellipse(center, width * scale / 2.0, height * scale / 2.0, shade);
    }
}

/// Three thin rings 40 units apart, fading outward from `radius`.
pub fn ripples(canvas: &mut Canvas, center: Point, radius: f32, color: Rgba) {
    for i in 0..3u8 {
        let r = radius + 40.0 * f32::from(i);
        canvas.stroke_circle(center, r, color.with_alpha(150 - 40 * i), 3.0);
    }
}
