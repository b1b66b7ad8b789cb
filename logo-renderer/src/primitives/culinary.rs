//! Food and restaurant motifs.

use std::f32::consts::TAU;

use logo_core::{BlendMode, Rgba};

use crate::canvas::{Bounds, Canvas, Point};

/// Layer count of the serving dome arcs; each is 2% narrower than the last.
pub const DOME_ARCS: u8 = 25;

/// Chef hat: a round puff over a band in `accent`.
pub fn chef_hat(canvas: &mut Canvas, center: Point, size: f32, white: Rgba, accent: Rgba) {
    let puff = size * 0.8;
    canvas.fill_circle(center, puff, white);
    let band = Bounds::new(
        center.x - size * 0.6,
        center.y + puff - 20.0,
        center.x + size * 0.6,
        center.y + puff + size * 0.4,
    );
    canvas.fill_rect(band, accent);
}

/// Rectangle `half_width` wide either side of the axis, from `top` to `bottom`
/// along it, rotated by `angle` about `center`.
fn bar(center: Point, half_width: f32, top: f32, bottom: f32, angle: f32) -> [Point; 4] {
    [
        center.offset(-half_width, top).rotate_about(center, angle),
        center.offset(half_width, top).rotate_about(center, angle),
        center.offset(half_width, bottom).rotate_about(center, angle),
        center.offset(-half_width, bottom).rotate_about(center, angle),
    ]
}

/// Fork of `length`: a handle and three prongs below it, rotated by `angle`.
pub fn fork(canvas: &mut Canvas, center: Point, length: f32, color: Rgba, angle: f32) {
    let handle = length * 0.3;
    canvas.fill_polygon(&bar(center, 12.0, -handle, handle, angle), color);
    for i in 0..3u8 {
        let prong = center.offset((f32::from(i) - 1.0) * 20.0, 0.0);
        let points = bar(prong, 5.0, handle, handle + length * 0.4, 0.0)
            .map(|p| p.rotate_about(center, angle));
        canvas.fill_polygon(&points, color);
    }
}

/// Spoon of `length`: a handle and a round bowl below it, rotated by `angle`.
pub fn spoon(canvas: &mut Canvas, center: Point, length: f32, color: Rgba, angle: f32) {
    let handle = length * 0.3;
    canvas.fill_polygon(&bar(center, 8.0, -handle, handle, angle), color);
    let bowl = length * 0.2;
    let bowl_center = center.offset(0.0, handle + bowl).rotate_about(center, angle);
    canvas.fill_circle(bowl_center, bowl, color);
}

/// Knife of `length`: a handle and a pointed blade below it, rotated by `angle`.
pub fn knife(canvas: &mut Canvas, center: Point, length: f32, color: Rgba, angle: f32) {
    let handle = length * 0.25;
    canvas.fill_polygon(&bar(center, 12.0, -handle, handle, angle), color);
    let blade = [
        center.offset(-8.0, handle),
        center.offset(8.0, handle),
        center.offset(0.0, handle + length * 0.5),
    ]
    .map(|p| p.rotate_about(center, angle));
    canvas.fill_polygon(&blade, color);
}

/// Cloche: nested half-ellipse arcs on a flat base, with a white knob above.
pub fn serving_dome(canvas: &mut Canvas, center: Point, size: f32, primary: Rgba, secondary: Rgba) {
    for layer in 0..DOME_ARCS {
        let l = f32::from(layer);
        let color = primary.blend(secondary, l / f32::from(DOME_ARCS), BlendMode::Linear);
        let scale = 1.0 - l * 0.02;
        let rx = size * scale / 2.0;
        let ry = size * 0.6 * scale;
        canvas.arc(center, rx, ry, 0.0, 180.0, color, 8.0);
    }
    let base = Bounds::new(
        center.x - size * 0.6,
        center.y - 10.0,
        center.x + size * 0.6,
        center.y + 30.0,
    );
    canvas.fill_rect(base, secondary);
    canvas.fill_circle(center.offset(0.0, -size * 0.6 - 20.0), 20.0, Rgba::WHITE);
}

/// One wisp of steam rising 100 units from `start`, swaying 30 to each side.
#[must_use]
pub fn steam_points(start: Point) -> Vec<Point> {
    (0..15u8)
        .map(|i| {
            let t = f32::from(i) / 14.0;
            start.offset((t * TAU).sin() * 30.0, -t * 100.0)
        })
        .collect()
}

/// Steam wisp, see [`steam_points`].
pub fn steam(canvas: &mut Canvas, start: Point, color: Rgba) {
    for pair in steam_points(start).windows(2) {
        canvas.line_butt(pair[0], pair[1], color, 4.0);
    }
}
