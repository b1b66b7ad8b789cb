//! Abstract motifs: waves, spirals, crystals and rings.

use logo_core::{BlendMode, ColorSystem, Rgba};
use rand::Rng;

use crate::canvas::{Canvas, Point};
use crate::shapes::{fill_layered, fill_shape, wave_points, Crystal, Layers, FIVE_POINT_STAR};

/// Number of particles scattered over the wave field.
pub const WAVE_PARTICLES: usize = 15;

/// Three translucent wave bands with particles drawn from `rng`.
#[allow(clippy::cast_precision_loss)]
pub fn flowing_waves<R: Rng + ?Sized>(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    colors: &ColorSystem,
    rng: &mut R,
) {
    if size <= 0.0 {
        return;
    }
    let bands = [colors.primary, colors.secondary, colors.accent];
    for (i, color) in bands.into_iter().enumerate() {
        let i = i as f32;
        let start = center.offset(-size, -size * 0.3 + i * size * 0.3);
        let mut band = wave_points(start, size * 2.0, size * 0.15, 1.5, i * 1.1, 120);
        let lower: Vec<Point> = band.iter().rev().map(|p| p.offset(0.0, size * 0.22)).collect();
        band.extend(lower);
        canvas.fill_polygon(&band, color.with_alpha(150));
    }
    for _ in 0..WAVE_PARTICLES {
        let x = rng.gen_range(-size..size);
        let y = rng.gen_range(-size * 0.6..size * 0.8);
        let r = rng.gen_range(size * 0.015..size * 0.045);
        canvas.fill_circle(center.offset(x, y), r, colors.highlight.with_alpha(200));
    }
}

/// Points of the geometric spiral: radius starts at 5 and grows 5% every 12 degrees.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn spiral_points(center: Point, max_radius: f32) -> Vec<Point> {
    let mut points = Vec::new();
    let mut radius = 5.0f32;
    let mut angle = 0.0f32;
    while radius <= max_radius {
        points.push(center.polar(radius, angle));
        radius *= 1.05;
        angle += 12.0;
    }
    points
}

/// Spiral of dots growing outward and shifting from primary to accent.
#[allow(clippy::cast_precision_loss)]
pub fn geometric_spiral(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let points = spiral_points(center, size);
    canvas.polyline(&points, colors.light_primary.with_alpha(160), size * 0.015);
    let count = points.len().max(1) as f32;
    for (i, p) in points.iter().enumerate() {
        let t = i as f32 / count;
        let color = colors.primary.blend(colors.accent, t, BlendMode::Gamma);
        canvas.fill_circle(*p, size * (0.01 + 0.05 * t), color);
    }
}

/// Three nested crystals with a central facet.
#[allow(clippy::cast_precision_loss)]
pub fn crystal_structure(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let tones = [colors.dark_primary, colors.primary, colors.light_primary];
    for (i, tone) in tones.into_iter().enumerate() {
        let scale = 1.0 - 0.28 * i as f32;
        let layers = Layers::linear(10, 0.01);
        fill_layered(canvas, &Crystal, center, size * scale, tone, tone.lighten(0.2), layers);
    }
    canvas.line(
        center.offset(0.0, -size * 1.2),
        center.offset(0.0, size * 1.2),
        colors.highlight.with_alpha(170),
        size * 0.015,
    );
    let facet = colors.highlight.with_alpha(120);
    canvas.line(center.polar(size, -30.0), center.polar(size, 150.0), facet, size * 0.01);
    canvas.line(center.polar(size, 30.0), center.polar(size, 210.0), facet, size * 0.01);
}

/// Five-point star.
pub fn star(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    fill_shape(canvas, &FIVE_POINT_STAR, center, size, color);
}

/// Evenly spaced outline rings, alternating two colors.
pub fn concentric_rings(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    rings: u8,
    colors: &ColorSystem,
) {
    let rings = rings.max(1);
    for i in 0..rings {
        let r = size * f32::from(rings - i) / f32::from(rings);
        let color = if i % 2 == 0 { colors.primary } else { colors.secondary };
        canvas.stroke_circle(center, r, color, size * 0.03);
    }
}
