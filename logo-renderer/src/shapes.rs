//! Closed outline shapes and the fill effects shared by all of them.
//!
//! A [`Shape`] only knows how to produce its outline for a center and size.
//! Layered gradient fills, drop shadows and outlines are written once here and
//! work for every shape.

use std::f32::consts::{PI, TAU};

use logo_core::{BlendMode, Rgba};

use crate::canvas::{Canvas, Point};

/// Anything that can produce a closed outline.
pub trait Shape {
    /// Outline vertices for a shape of nominal radius `size` around `center`.
    fn outline(&self, center: Point, size: f32) -> Vec<Point>;
}

/// Regular polygon with `sides` vertices, first vertex at `rotation` degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    /// Vertex count.
    pub sides: usize,
    /// Angle of the first vertex, degrees clockwise from 3 o'clock.
    pub rotation: f32,
}

/// Hexagon with 60 degree steps starting at 3 o'clock.
pub const HEXAGON: RegularPolygon = RegularPolygon {
    sides: 6,
    rotation: 0.0,
};

/// Octagon with flat top and bottom.
pub const OCTAGON: RegularPolygon = RegularPolygon {
    sides: 8,
    rotation: 22.5,
};

/// Point-up pentagon used for fortress shields.
pub const FORTRESS: RegularPolygon = RegularPolygon {
    sides: 5,
    rotation: -90.0,
};

/// Circle approximated by a 96-gon.
pub const CIRCLE: RegularPolygon = RegularPolygon {
    sides: 96,
    rotation: 0.0,
};

#[allow(clippy::cast_precision_loss)]
impl Shape for RegularPolygon {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        let step = 360.0 / self.sides.max(3) as f32;
        (0..self.sides.max(3))
            .map(|i| center.polar(size, self.rotation + step * i as f32))
            .collect()
    }
}

/// Star with alternating outer and inner vertices, first point straight up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Number of points.
    pub points: usize,
    /// Inner radius as a fraction of the outer radius.
    pub inner_ratio: f32,
}

/// Classic five-point star.
pub const FIVE_POINT_STAR: Star = Star {
    points: 5,
    inner_ratio: 0.4,
};

#[allow(clippy::cast_precision_loss)]
impl Shape for Star {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        let count = self.points.max(2) * 2;
        let step = 360.0 / count as f32;
        (0..count)
            .map(|i| {
                let radius = if i % 2 == 0 { size } else { size * self.inner_ratio };
                center.polar(radius, -90.0 + step * i as f32)
            })
            .collect()
    }
}

/// Six-vertex medical shield: alternating full and 0.7 radius, starting at 12 o'clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MedicalShield;

#[allow(clippy::cast_precision_loss)]
impl Shape for MedicalShield {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        (0..6)
            .map(|i| {
                let radius = if i % 2 == 0 { size } else { size * 0.7 };
                center.polar(radius, -90.0 + 60.0 * i as f32)
            })
            .collect()
    }
}

/// Hand-authored heraldic shield outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeraldicShield {
    /// Eight vertices, flat top with squared shoulders.
    Classic,
    /// Ten vertices, peaked top with rounded flanks.
    Crest,
}

const CLASSIC_SHIELD: [(f32, f32); 8] = [
    (-0.8, -0.9),
    (0.0, -1.0),
    (0.8, -0.9),
    (0.8, 0.1),
    (0.5, 0.6),
    (0.0, 1.0),
    (-0.5, 0.6),
    (-0.8, 0.1),
];

const CREST_SHIELD: [(f32, f32); 10] = [
    (0.0, -1.0),
    (0.6, -0.85),
    (0.85, -0.5),
    (0.8, 0.1),
    (0.5, 0.65),
    (0.0, 1.0),
    (-0.5, 0.65),
    (-0.8, 0.1),
    (-0.85, -0.5),
    (-0.6, -0.85),
];

impl Shape for HeraldicShield {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        let ratios: &[(f32, f32)] = match self {
            Self::Classic => &CLASSIC_SHIELD,
            Self::Crest => &CREST_SHIELD,
        };
        ratios
            .iter()
            .map(|&(x, y)| center.offset(x * size, y * size))
            .collect()
    }
}

/// Four-point diamond; `aspect` narrows the horizontal half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diamond {
    /// Half-width as a fraction of half-height.
    pub aspect: f32,
}

impl Shape for Diamond {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        vec![
            center.offset(0.0, -size),
            center.offset(size * self.aspect, 0.0),
            center.offset(0.0, size),
            center.offset(-size * self.aspect, 0.0),
        ]
    }
}

/// Parametric heart, `x = 16 sin^3 t`, `y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t`.
///
/// Normalized by 16 so `size` is the half-width of the heart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heart;

#[allow(clippy::cast_precision_loss)]
impl Shape for Heart {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        (0..360)
            .map(|i| {
                let t = (i as f32).to_radians();
                let x = 16.0 * t.sin().powi(3);
                let y = 13.0 * t.cos()
                    - 5.0 * (2.0 * t).cos()
                    - 2.0 * (3.0 * t).cos()
                    - (4.0 * t).cos();
                center.offset(size * x / 16.0, -size * y / 16.0)
            })
            .collect()
    }
}

/// Trapezoid with horizontal top and bottom edges. All fields are fractions of `size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    /// Top half-width.
    pub top_half_width: f32,
    /// Bottom half-width.
    pub bottom_half_width: f32,
    /// Vertical offset of the top edge from the center (negative is up).
    pub top: f32,
    /// Vertical offset of the bottom edge from the center.
    pub bottom: f32,
}

impl Shape for Trapezoid {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        vec![
            center.offset(-size * self.top_half_width, size * self.top),
            center.offset(size * self.top_half_width, size * self.top),
            center.offset(size * self.bottom_half_width, size * self.bottom),
            center.offset(-size * self.bottom_half_width, size * self.bottom),
        ]
    }
}

/// Elongated six-point crystal with alternating long and short vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crystal;

#[allow(clippy::cast_precision_loss)]
impl Shape for Crystal {
    fn outline(&self, center: Point, size: f32) -> Vec<Point> {
        (0..6)
            .map(|i| {
                let radius = if i % 2 == 0 { size } else { size * 0.75 };
                let p = center.polar(radius, -90.0 + 60.0 * i as f32);
                Point::new(p.x, center.y + (p.y - center.y) * 1.2)
            })
            .collect()
    }
}

/// Price tag hanging from the middle of its top edge, cut diagonally on the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag;

impl Shape for Tag {
    fn outline(&self, anchor: Point, size: f32) -> Vec<Point> {
        vec![
            anchor.offset(-size, 0.0),
            anchor.offset(size * 0.5, 0.0),
            anchor.offset(size, size * 0.5),
            anchor.offset(size * 0.5, size),
            anchor.offset(-size, size),
        ]
    }
}

/// Layer schedule for a gradient-like stacked fill.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layers {
    /// Number of scaled copies drawn.
    pub count: u32,
    /// Scale reduction per copy (0.015 = 1.5%).
    pub step: f32,
    /// Color interpolation mode.
    pub blend: BlendMode,
}

impl Layers {
    /// Linear-blended schedule.
    #[must_use]
    pub const fn linear(count: u32, step: f32) -> Self {
        Self {
            count,
            step,
            blend: BlendMode::Linear,
        }
    }

    /// Gamma-blended schedule.
    #[must_use]
    pub const fn gamma(count: u32, step: f32) -> Self {
        Self {
            count,
            step,
            blend: BlendMode::Gamma,
        }
    }
}

/// Fill a shape once.
pub fn fill_shape<S: Shape + ?Sized>(
    canvas: &mut Canvas,
    shape: &S,
    center: Point,
    size: f32,
    color: Rgba,
) {
    canvas.fill_polygon(&shape.outline(center, size), color);
}

/// Outline a shape.
pub fn stroke_shape<S: Shape + ?Sized>(
    canvas: &mut Canvas,
    shape: &S,
    center: Point,
    size: f32,
    color: Rgba,
    width: f32,
) {
    canvas.stroke_polygon(&shape.outline(center, size), color, width);
}

/// Fill `layers.count` copies of a shape, each `layers.step` smaller than the
/// last, colored from `from` to `to` by `layer / count`.
#[allow(clippy::cast_precision_loss)]
pub fn fill_layered<S: Shape + ?Sized>(
    canvas: &mut Canvas,
    shape: &S,
    center: Point,
    size: f32,
    from: Rgba,
    to: Rgba,
    layers: Layers,
) {
    for i in 0..layers.count {
        let t = i as f32 / layers.count as f32;
        let scale = (1.0 - layers.step * i as f32).max(0.0);
        if scale <= 0.0 {
            break;
        }
        let color = from.blend(to, t, layers.blend);
        canvas.fill_polygon(&shape.outline(center, size * scale), color);
    }
}

/// Offset copies beneath a shape, furthest and faintest first, then the shape itself.
#[allow(clippy::cast_precision_loss)]
pub fn fill_with_shadow<S: Shape + ?Sized>(
    canvas: &mut Canvas,
    shape: &S,
    center: Point,
    size: f32,
    color: Rgba,
    shadow: Rgba,
    depth: u8,
) {
    let depth = depth.max(1);
    for d in (1..=depth).rev() {
        let offset = f32::from(d) * 3.0;
        let alpha = f32::from(shadow.a) * f32::from(depth - d + 1) / f32::from(depth) / 3.0;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let faded = shadow.with_alpha(alpha as u8);
        canvas.fill_polygon(&shape.outline(center.offset(offset, offset), size), faded);
    }
    canvas.fill_polygon(&shape.outline(center, size), color);
}

/// Fill concentric circles from `outer` radius inward, blending `from` to `to`.
#[allow(clippy::cast_precision_loss)]
pub fn fill_radial(
    canvas: &mut Canvas,
    center: Point,
    outer: f32,
    step: f32,
    from: Rgba,
    to: Rgba,
    blend: BlendMode,
) {
    if step <= 0.0 || outer <= 0.0 {
        return;
    }
    let mut radius = outer;
    while radius > 0.0 {
        let t = 1.0 - radius / outer;
        canvas.fill_circle(center, radius, from.blend(to, t, blend));
        radius -= step;
    }
}

/// Points of a sine wave across `width` starting at `start`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn wave_points(
    start: Point,
    width: f32,
    amplitude: f32,
    cycles: f32,
    phase: f32,
    samples: usize,
) -> Vec<Point> {
    let samples = samples.max(2);
    (0..=samples)
        .map(|i| {
            let u = i as f32 / samples as f32;
            let angle = u * cycles * TAU + phase;
            Point::new(start.x + u * width, start.y + amplitude * angle.sin())
        })
        .collect()
}

/// Lemniscate outline, `x = cos t / (1 + sin^2 t)`, `y = sin t cos t / (1 + sin^2 t)`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn lemniscate_points(center: Point, size: f32, samples: usize) -> Vec<Point> {
    (0..samples.max(8))
        .map(|i| {
            let t = i as f32 * 2.0 * PI / samples.max(8) as f32;
            let denom = 1.0 + t.sin().powi(2);
            center.offset(size * t.cos() / denom, size * t.sin() * t.cos() / denom)
        })
        .collect()
}
