//! Technology, security and blockchain motifs.

use logo_core::{BlendMode, ColorSystem, Rgba};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::canvas::{Bounds, Canvas, Point};
use crate::shapes::{
    fill_layered, fill_shape, stroke_shape, Layers, RegularPolygon, FORTRESS, HEXAGON, OCTAGON,
};

/// Layer schedule of the tech hexagon.
pub const HEXAGON_LAYERS: Layers = Layers::linear(40, 0.015);

/// Layer schedule of the fortress shield.
pub const FORTRESS_LAYERS: Layers = Layers::linear(35, 0.018);

/// Nodes per column of the neural network motif.
pub const NEURAL_LAYERS: [usize; 3] = [4, 6, 4];

/// Hexagon layered from `primary` into `secondary`.
pub fn tech_hexagon(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    fill_layered(canvas, &HEXAGON, center, size, primary, secondary, HEXAGON_LAYERS);
}

/// Point-up pentagon layered from `primary` into `secondary`.
pub fn fortress_shield(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    fill_layered(canvas, &FORTRESS, center, size, primary, secondary, FORTRESS_LAYERS);
}

/// Sixteen radial ticks from `0.7 * radius` out to `radius`, each ending in a dot.
#[allow(clippy::cast_precision_loss)]
pub fn mini_circuits(canvas: &mut Canvas, center: Point, radius: f32, color: Rgba) {
    for i in 0..16 {
        let angle = 22.5 * i as f32;
        let end = center.polar(radius, angle);
        canvas.line_butt(center.polar(radius * 0.7, angle), end, color, 4.0);
        canvas.fill_circle(end, 8.0, color);
    }
}

/// Sixteen right-angled traces radiating from `center`, each ending in a pad.
#[allow(clippy::cast_precision_loss)]
pub fn circuit_traces(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    for i in 0..16 {
        let angle = 22.5 * i as f32;
        let reach = if i % 2 == 0 { size } else { size * 0.75 };
        let start = center.polar(size * 0.35, angle);
        let bend = center.polar(reach * 0.7, angle);
        let turn = if i % 4 < 2 { 45.0 } else { -45.0 };
        let end = bend.polar(reach * 0.3, angle + turn);
        canvas.polyline(&[start, bend, end], color, size * 0.025);
        canvas.fill_circle(end, size * 0.04, color);
    }
}

/// Node centers of the neural network: columns at `-size`, `0` and `size`,
/// each spread evenly over `2 * size` vertically.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn neural_nodes(center: Point, size: f32) -> Vec<Vec<Point>> {
    NEURAL_LAYERS
        .iter()
        .enumerate()
        .map(|(col, &count)| {
            let x = center.x - size + size * col as f32;
            let spacing = size * 2.0 / (count + 1) as f32;
            (0..count)
                .map(|row| Point::new(x, center.y - size + (row + 1) as f32 * spacing))
                .collect()
        })
        .collect()
}

/// Neural network: nodes shaded down each column, every node wired to the next column.
#[allow(clippy::cast_precision_loss)]
pub fn neural_network(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    let columns = neural_nodes(center, size);
    for (col, nodes) in columns.iter().enumerate() {
        for (row, node) in nodes.iter().enumerate() {
            let t = row as f32 / nodes.len() as f32;
            let color = primary.blend(secondary, t, BlendMode::Linear);
            canvas.fill_circle(*node, 15.0, color);
            if let Some(next) = columns.get(col + 1) {
                for target in next {
                    canvas.line_butt(*node, *target, color.with_alpha(100), 3.0);
                }
            }
        }
    }
}

/// Glowing core: twenty discs shrinking to half size as they fade out.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn tech_core(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    for i in 0..20u8 {
        let p = f32::from(i) / 20.0;
        let alpha = (255.0 * (1.0 - p)) as u8;
        canvas.fill_circle(center, size * (1.0 - p * 0.5), color.with_alpha(alpha));
    }
}

/// `count` nodes on a circle of `radius`, each wired back to the center.
#[allow(clippy::cast_precision_loss)]
pub fn connection_nodes(
    canvas: &mut Canvas,
    center: Point,
    radius: f32,
    color: Rgba,
    count: usize,
) {
    let count = count.max(1);
    for i in 0..count {
        let node = center.polar(radius, 360.0 / count as f32 * i as f32);
        canvas.fill_circle(node, 20.0, color);
        canvas.line_butt(center, node, color.with_alpha(150), 4.0);
    }
}

/// Straight spokes from an inner to an outer radius.
#[allow(clippy::cast_precision_loss)]
pub fn spokes(
    canvas: &mut Canvas,
    center: Point,
    inner: f32,
    outer: f32,
    count: usize,
    color: Rgba,
    width: f32,
) {
    for i in 0..count {
        let angle = 360.0 * i as f32 / count.max(1) as f32;
        canvas.line(center.polar(inner, angle), center.polar(outer, angle), color, width);
    }
}

/// Circuit board icon: square board, traces, chip.
pub fn circuit_board_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let board = Bounds::centered(center, size * 2.0, size * 2.0);
    canvas.fill_rounded_rect(board, size * 0.2, colors.dark_primary);
    circuit_traces(canvas, center, size * 0.9, colors.accent);
    let chip = Bounds::centered(center, size * 0.7, size * 0.7);
    canvas.fill_rounded_rect(chip, size * 0.08, colors.primary);
    canvas.stroke_rounded_rect(chip, size * 0.08, colors.highlight, size * 0.03);
}

/// Isometric cube with three shaded faces.
pub fn digital_cube_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let top = center.polar(size, -90.0);
    let upper_right = center.polar(size, -30.0);
    let lower_right = center.polar(size, 30.0);
    let bottom = center.polar(size, 90.0);
    let lower_left = center.polar(size, 150.0);
    let upper_left = center.polar(size, 210.0);
    canvas.fill_polygon(&[top, upper_right, center, upper_left], colors.light_primary);
    canvas.fill_polygon(&[upper_right, lower_right, bottom, center], colors.primary);
    canvas.fill_polygon(&[upper_left, center, bottom, lower_left], colors.dark_primary);
    for edge in [(center, top), (center, lower_right), (center, lower_left)] {
        canvas.line(edge.0, edge.1, colors.highlight.with_alpha(180), size * 0.02);
    }
}

/// Network nodes icon: hub with six satellites.
pub fn network_nodes_icon(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    connection_nodes(canvas, center, size * 0.85, colors.secondary, 6);
    canvas.fill_circle(center, size * 0.28, colors.primary);
    canvas.stroke_circle(center, size * 0.28, colors.dark_primary, size * 0.04);
}

/// Padlock: rounded body hanging below `center`, shackle above, dark keyhole.
pub fn secure_lock(canvas: &mut Canvas, center: Point, size: f32, color: Rgba) {
    let half_width = size * 0.7;
    let body = Bounds::new(
        center.x - half_width,
        center.y,
        center.x + half_width,
        center.y + size * 1.2,
    );
    canvas.fill_rounded_rect(body, 20.0, color);

    let shackle = Bounds::new(
        center.x - half_width * 0.6,
        center.y - size,
        center.x + half_width * 0.6,
        center.y + 20.0,
    );
    canvas.arc(
        shackle.center(),
        shackle.width() / 2.0,
        shackle.height() / 2.0,
        180.0,
        0.0,
        color,
        15.0,
    );

    let keyhole = Rgba::BLACK.blend(color, 0.3, BlendMode::Linear);
    canvas.fill_ellipse(center.offset(0.0, size * 0.48 + 15.0), 15.0, 15.0, keyhole);
}

/// Six concentric rings 40 units apart, each 15 alpha fainter going inward.
pub fn encryption_layers(canvas: &mut Canvas, center: Point, radius: f32, color: Rgba, alpha: u8) {
    for i in 0..6u8 {
        let r = radius - 40.0 * f32::from(i);
        let faded = color.with_alpha(alpha.saturating_sub(15 * i));
        canvas.stroke_circle(center, r, faded, 8.0);
    }
}

/// Centers of the five blockchain cubes: four corners then the middle.
#[must_use]
pub fn cube_centers(center: Point, size: f32) -> [Point; 5] {
    let d = size * 0.6;
    [
        center.offset(-d, -d),
        center.offset(d, -d),
        center.offset(-d, d),
        center.offset(d, d),
        center,
    ]
}

/// Five extruded cubes, shaded from `primary` to `secondary` in drawing order.
pub fn blockchain_cubes(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    primary: Rgba,
    secondary: Rgba,
) {
    const HALF: f32 = 80.0;
    const DEPTH: f32 = 40.0;
    for (idx, c) in cube_centers(center, size).into_iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let face = primary.blend(secondary, idx as f32 / 5.0, BlendMode::Linear);
        canvas.fill_rect(Bounds::centered(c, HALF * 2.0, HALF * 2.0), face);
        let top = [
            c.offset(-HALF, -HALF),
            c.offset(0.0, -HALF - DEPTH),
            c.offset(HALF + DEPTH, -HALF - DEPTH),
            c.offset(HALF, -HALF),
        ];
        canvas.fill_polygon(&top, face.lighten(0.3));
        let side = [
            c.offset(HALF, -HALF),
            c.offset(HALF + DEPTH, -HALF - DEPTH),
            c.offset(HALF + DEPTH, HALF - DEPTH),
            c.offset(HALF, HALF),
        ];
        canvas.fill_polygon(&side, face.darken(0.2));
    }
}

/// Ring of eight straight links on a circle of `radius`, a round joint at each vertex.
#[allow(clippy::cast_precision_loss)]
pub fn chain_links(canvas: &mut Canvas, center: Point, radius: f32, color: Rgba) {
    for i in 0..8 {
        let from = center.polar(radius, 45.0 * i as f32);
        let to = center.polar(radius, 45.0 * (i + 1) as f32);
        canvas.line_butt(from, to, color, 10.0);
        canvas.fill_circle(from, 15.0, color);
    }
}

/// Field of small squares, about a third of them lit, chosen by `seed`.
#[allow(clippy::cast_precision_loss)]
pub fn security_pattern(canvas: &mut Canvas, bounds: Bounds, cells: u32, seed: u64, color: Rgba) {
    let cells = cells.max(1);
    let cell_w = bounds.width() / cells as f32;
    let cell_h = bounds.height() / cells as f32;
    let mut rng = StdRng::seed_from_u64(seed);
    for row in 0..cells {
        for col in 0..cells {
            if rng.gen_bool(0.35) {
                let x = bounds.left + cell_w * col as f32;
                let y = bounds.top + cell_h * row as f32;
                let cell = Bounds::new(
                    x + cell_w * 0.15,
                    y + cell_h * 0.15,
                    x + cell_w * 0.85,
                    y + cell_h * 0.85,
                );
                canvas.fill_rect(cell, color);
            }
        }
    }
}

/// Tapering rays fanning out behind a mark.
#[allow(clippy::cast_precision_loss)]
pub fn gradient_rays(
    canvas: &mut Canvas,
    center: Point,
    size: f32,
    count: usize,
    from: Rgba,
    to: Rgba,
) {
    let count = count.max(1);
    for i in 0..count {
        let t = i as f32 / count as f32;
        let angle = 360.0 * t;
        let half = 180.0 / count as f32 * 0.4;
        let tip_a = center.polar(size, angle - half);
        let tip_b = center.polar(size, angle + half);
        let color = from.blend(to, t, BlendMode::Gamma).with_alpha(150);
        canvas.fill_polygon(&[center, tip_a, tip_b], color);
    }
}

/// Octagonal badge holding a keyhole.
pub fn security_badge(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    fill_layered(
        canvas,
        &OCTAGON,
        center,
        size,
        colors.dark_primary,
        colors.primary,
        Layers::gamma(25, 0.02),
    );
    let inner = RegularPolygon {
        sides: 8,
        rotation: 22.5,
    };
    stroke_shape(canvas, &inner, center, size * 0.8, colors.accent, size * 0.03);
    fill_shape(canvas, &HEXAGON, center, size * 0.35, colors.neutral);
    canvas.fill_circle(center.offset(0.0, -size * 0.05), size * 0.1, colors.dark_primary);
    canvas.fill_polygon(
        &[
            center.offset(-size * 0.06, 0.0),
            center.offset(size * 0.06, 0.0),
            center.offset(size * 0.09, size * 0.2),
            center.offset(-size * 0.09, size * 0.2),
        ],
        colors.dark_primary,
    );
}
