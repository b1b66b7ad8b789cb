//! Healthcare motifs: crosses, hearts, pulse lines and the stethoscope.

use std::f32::consts::PI;

use logo_core::{ColorSystem, Rgba};

use crate::canvas::{Bounds, Canvas, Point};
use crate::primitives::botanical;
use crate::shapes::{fill_layered, fill_shape, Heart, Layers, MedicalShield};

/// Layer schedule of the medical shield badge.
pub const SHIELD_LAYERS: Layers = Layers::linear(30, 0.02);

/// Pulse trace vertices: `x` in half-widths from the center, `y` in design units.
pub const PULSE_TRACE: [(f32, f32); 10] = [
    (-1.0, 0.0),
    (-0.6, 0.0),
    (-0.4, -60.0),
    (-0.2, 60.0),
    (0.0, 0.0),
    (0.2, 0.0),
    (0.4, -80.0),
    (0.6, 40.0),
    (0.8, 0.0),
    (1.0, 0.0),
];

/// Plus-shaped cross with arm thickness `size / 3`.
pub fn cross(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    let t = (size / 3.0).floor();
    canvas.fill_rect(Bounds::centered(center, t, size * 2.0), color);
    canvas.fill_rect(Bounds::centered(center, size * 2.0, t), color);
}

/// Parametric heart.
pub fn heart(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    fill_shape(canvas, &Heart, center, size, color);
}

/// Pulse trace spanning `half_width` either side of `center`, spikes scaled by `amplitude`.
#[must_use]
pub fn pulse_points(center: Point, half_width: f32, amplitude: f32) -> Vec<Point> {
    PULSE_TRACE
        .iter()
        .map(|&(u, v)| center.offset(u * half_width, v * amplitude))
        .collect()
}

/// Heartbeat line, `width` to either side of `center`.
pub fn pulse_line(canvas: &mut Canvas, center: Point, width: f32, color: Rgba) {
    canvas.polyline(&pulse_points(center, width, 1.0), color, 8.0);
}

/// Stethoscope: ear tips, two arched tubes, a stem and a ringed chest piece.
pub fn stethoscope(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    let ear = size * 0.15;
    let spacing = size * 0.4;
    canvas.fill_circle(center.offset(-spacing, -size * 0.4 + ear), ear, color);
    canvas.fill_circle(center.offset(spacing, -size * 0.4 + ear), ear, color);

    let arch = |t: f32| -size * 0.3 + (t * PI).sin() * size * 0.2;
    for i in 0..20u8 {
        let t = f32::from(i) / 19.0;
        let next = t + 0.05;
        for side in [-1.0, 1.0] {
            let from = center.offset(side * spacing * (1.0 - t), arch(t));
            let to = center.offset(side * spacing * (1.0 - next), arch(next));
            canvas.line_butt(from, to, color, 12.0);
        }
    }

    canvas.line_butt(
        center.offset(0.0, -size * 0.1),
        center.offset(0.0, size * 0.3),
        color,
        14.0,
    );
    let chest = size * 0.25;
    let chest_center = center.offset(0.0, size * 0.3 + chest);
    canvas.fill_circle(chest_center, chest, color);
    canvas.stroke_circle(chest_center, chest * 0.6, Rgba::rgb(100, 100, 100), 4.0);
}

/// Six-point medical shield, layered from `primary` to `secondary`.
pub fn medical_shield(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    fill_layered(
        canvas,
        &MedicalShield,
        center,
        size,
        primary,
        secondary,
        SHIELD_LAYERS,
    );
}

/// Chip outline with four pins above and below and a heart on the die.
pub fn medical_chip(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    canvas.stroke_rect(Bounds::centered(center, size * 2.0, size * 2.0), color, 8.0);
    for i in 0..4u8 {
        let x = -size - 20.0 + f32::from(i) * 15.0;
        canvas.line_butt(
            center.offset(x, -size),
            center.offset(x, -size - 25.0),
            color,
            6.0,
        );
        canvas.line_butt(
            center.offset(x, size),
            center.offset(x, size + 25.0),
            color,
            6.0,
        );
    }
    heart(canvas, center, (size / 2.0).floor(), color);
}

/// Modulated sine trace `width` to either side of `center`.
pub fn digital_health_wave(canvas: &mut Canvas, center: Point, width: f32, color: Rgba) {
    let points: Vec<Point> = (0..100u8)
        .map(|i| {
            let i = f32::from(i);
            let y = 40.0 * (i * 0.3).sin() * (i * 0.1).cos();
            center.offset(-width + i * width * 2.0 / 100.0, y)
        })
        .collect();
    canvas.polyline(&points, color, 12.0);
}

/// Heartbeat icon: a heart with a pulse line across it.
pub fn heartbeat_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    heart(canvas, center, size, colors.primary);
    let trace = pulse_points(center.offset(0.0, -size * 0.05), size * 0.8, size / 250.0);
    canvas.polyline(&trace, colors.neutral, size * 0.07);
}

/// Wellness leaf icon: a soft disc behind a tilted leaf.
pub fn wellness_leaf_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    canvas.fill_circle(center, size, colors.light_primary.with_alpha(120));
    botanical::leaf(
        canvas,
        center,
        size * 1.5,
        size * 0.9,
        35.0,
        colors.secondary,
    );
    canvas.line(
        center.offset(-size * 0.45, size * 0.55),
        center.offset(size * 0.4, -size * 0.6),
        colors.dark_primary,
        size * 0.05,
    );
}

/// Medical cross icon: rounded tile holding a bold cross.
pub fn medical_cross_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let tile = Bounds::centered(center, size * 2.0, size * 2.0);
    canvas.fill_rounded_rect(
        tile.translate(size * 0.06, size * 0.06),
        size * 0.35,
        colors.shadow,
    );
    canvas.fill_rounded_rect(tile, size * 0.35, colors.primary);
    cross(canvas, center, size * 0.65, colors.neutral);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use logo_core::{build_palette, IndustryCategory};

    use super::*;
    use crate::text::FontBook;

    fn canvas() -> Canvas {
        Canvas::new(100, Arc::new(FontBook::builtin())).unwrap()
    }

    fn alpha(canvas: &Canvas, x: u32, y: u32) -> u8 {
        canvas.pixmap().pixel(x, y).unwrap().alpha()
    }

    #[test]
    fn cross_covers_center_not_corner() {
        let mut canvas = canvas();
        let center = canvas.center();
        cross(&mut canvas, center, 300.0, Rgba::BLACK);
        assert_eq!(alpha(&canvas, 50, 50), 255);
        assert_eq!(alpha(&canvas, 25, 25), 0);
    }

    #[test]
    fn stethoscope_has_ears_arches_and_chest_piece() {
        let mut canvas = canvas();
        stethoscope(&mut canvas, Point::new(500.0, 500.0), 280.0, Rgba::BLACK);
        // Ear tips at x = 500 -/+ 112, y = 430.
        assert!(alpha(&canvas, 39, 43) > 0);
        assert!(alpha(&canvas, 61, 43) > 0);
        assert_eq!(alpha(&canvas, 50, 43), 0);
        assert_eq!(alpha(&canvas, 50, 30), 0);
        // Lowest point of the left arch near (444, 472).
        assert!(alpha(&canvas, 44, 47) > 0);
        // Chest piece centered at (500, 654) below the stem.
        assert_eq!(alpha(&canvas, 50, 65), 255);
        assert!(alpha(&canvas, 50, 52) > 0);
    }

    #[test]
    fn medical_shield_layers_toward_secondary() {
        assert_eq!(SHIELD_LAYERS, Layers::linear(30, 0.02));
        let mut canvas = canvas();
        medical_shield(
            &mut canvas,
            Point::new(500.0, 500.0),
            350.0,
            Rgba::rgb(255, 0, 0),
            Rgba::rgb(0, 0, 255),
        );
        let top = canvas.pixmap().pixel(50, 16).unwrap();
        assert!(top.red() > top.blue());
        let middle = canvas.pixmap().pixel(50, 50).unwrap();
        assert!(middle.blue() > middle.red());
        assert_eq!(alpha(&canvas, 5, 50), 0);
    }

    #[test]
    fn pulse_trace_peaks_right_of_center() {
        let points = pulse_points(Point::new(500.0, 500.0), 280.0, 1.0);
        assert_eq!(points.len(), 10);
        assert_eq!(points[0], Point::new(220.0, 500.0));
        assert_eq!(points[9], Point::new(780.0, 500.0));
        let peak = points
            .iter()
            .min_by(|a, b| a.y.total_cmp(&b.y))
            .unwrap();
        assert!((peak.x - 612.0).abs() < 1e-3);
        assert!((peak.y - 420.0).abs() < 1e-3);
    }

    #[test]
    fn medical_chip_is_hollow_with_heart() {
        let mut canvas = canvas();
        medical_chip(&mut canvas, Point::new(500.0, 500.0), 140.0, Rgba::BLACK);
        // Outline at x = 360, heart at the center, empty between.
        assert!(alpha(&canvas, 36, 50) > 0);
        assert!(alpha(&canvas, 50, 50) > 0);
        assert_eq!(alpha(&canvas, 39, 40), 0);
        // Pins above the top edge.
        assert!(alpha(&canvas, 34, 34) > 0);
    }

    #[test]
    fn every_medical_icon_paints() {
        let colors = build_palette::<&str>(&[], IndustryCategory::Healthcare);
        let icons: [fn(&mut Canvas, Point, f32, &ColorSystem); 3] =
            [heartbeat_icon, wellness_leaf_icon, medical_cross_icon];
        for icon in icons {
            let mut canvas = Canvas::new(64, Arc::new(FontBook::builtin())).unwrap();
            let center = canvas.center();
            icon(&mut canvas, center, 200.0, &colors);
            assert!(canvas.pixmap().pixels().iter().any(|p| p.alpha() > 0));
        }
    }
}
