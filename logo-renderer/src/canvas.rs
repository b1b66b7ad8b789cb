//! Raster drawing surface.
//!
//! Every generator draws in a fixed 1000x1000 design space; the canvas maps
//! it onto the configured pixel size with a uniform scale transform, so
//! layouts are written once regardless of output resolution.

use std::sync::Arc;

use logo_core::Rgba;
use tiny_skia::{
    BlendMode, FillRule, LineCap, LineJoin, Paint, Path, PathBuilder, Pixmap, PixmapPaint,
    PremultipliedColorU8, Rect, Stroke, Transform,
};

use crate::error::{RenderError, RenderResult};
use crate::text::{FontBook, FontWeight, TextLayout};

/// Side length of the design space every layout is authored in.
pub const DESIGN_SIZE: f32 = 1000.0;

/// A point in design space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal position, growing right.
    pub x: f32,
    /// Vertical position, growing down.
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Translate by `(dx, dy)`.
    #[must_use]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Point at `radius` from `self`, `degrees` clockwise from 3 o'clock.
    #[must_use]
    pub fn polar(self, radius: f32, degrees: f32) -> Self {
        let rad = degrees.to_radians();
        Self::new(self.x + radius * rad.cos(), self.y + radius * rad.sin())
    }

    /// Linear interpolation toward `other`.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Rotate about `pivot` by `degrees` clockwise.
    #[must_use]
    pub fn rotate_about(self, pivot: Self, degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Self::new(pivot.x + dx * cos - dy * sin, pivot.y + dx * sin + dy * cos)
    }
}

/// Axis-aligned box in design space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Right edge.
    pub right: f32,
    /// Bottom edge.
    pub bottom: f32,
}

impl Bounds {
    /// Box from its edges.
    #[must_use]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box of the given size centered on `center`.
    #[must_use]
    pub fn centered(center: Point, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            center.x + width / 2.0,
            center.y + height / 2.0,
        )
    }

    /// Width.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Same box moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(self, dx: f32, dy: f32) -> Self {
        Self::new(self.left + dx, self.top + dy, self.right + dx, self.bottom + dy)
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    fn to_rect(self) -> Option<Rect> {
        Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Sample a quadratic Bezier curve into `segments + 1` points.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn quadratic(start: Point, control: Point, end: Point, segments: usize) -> Vec<Point> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let t = i as f32 / segments as f32;
            let a = start.lerp(control, t);
            let b = control.lerp(end, t);
            a.lerp(b, t)
        })
        .collect()
}

/// Points of an ellipse rotated by `rotation` degrees.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ellipse_points(
    center: Point,
    rx: f32,
    ry: f32,
    rotation: f32,
    segments: usize,
) -> Vec<Point> {
    let segments = segments.max(8);
    (0..segments)
        .map(|i| {
            let t = (i as f32 / segments as f32) * std::f32::consts::TAU;
            Point::new(center.x + rx * t.cos(), center.y + ry * t.sin())
                .rotate_about(center, rotation)
        })
        .collect()
}

fn paint(color: Rgba) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, color.a);
    paint.anti_alias = true;
    paint
}

fn polygon_path(points: &[Point], close: bool) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x, first.y);
    for p in rest {
        pb.line_to(p.x, p.y);
    }
    if close {
        pb.close();
    }
    pb.finish()
}

fn oval_path(center: Point, rx: f32, ry: f32) -> Option<Path> {
    let rect = Rect::from_xywh(center.x - rx, center.y - ry, rx * 2.0, ry * 2.0)?;
    PathBuilder::from_oval(rect)
}

fn rounded_rect_path(bounds: Bounds, radius: f32) -> Option<Path> {
    let r = radius
        .min(bounds.width() / 2.0)
        .min(bounds.height() / 2.0)
        .max(0.0);
    let Bounds {
        left,
        top,
        right,
        bottom,
    } = bounds;
    let mut pb = PathBuilder::new();
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.quad_to(right, top, right, top + r);
    pb.line_to(right, bottom - r);
    pb.quad_to(right, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.quad_to(left, bottom, left, bottom - r);
    pb.line_to(left, top + r);
    pb.quad_to(left, top, left + r, top);
    pb.close();
    pb.finish()
}

/// Drawing surface for one logo.
pub struct Canvas {
    pixmap: Pixmap,
    scale: f32,
    fonts: Arc<FontBook>,
}

impl Canvas {
    /// Allocate a transparent square canvas of `pixel_size` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Canvas`] if the pixmap cannot be allocated.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(pixel_size: u32, fonts: Arc<FontBook>) -> RenderResult<Self> {
        let pixmap = Pixmap::new(pixel_size, pixel_size).ok_or_else(|| {
            RenderError::Canvas(format!("cannot allocate {pixel_size}x{pixel_size} pixmap"))
        })?;
        Ok(Self {
            pixmap,
            scale: pixel_size as f32 / DESIGN_SIZE,
            fonts,
        })
    }

    /// Center of the design space.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(DESIGN_SIZE / 2.0, DESIGN_SIZE / 2.0)
    }

    /// Output side length in pixels.
    #[must_use]
    pub fn pixel_size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Read access to the pixels.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Give up the canvas, keeping its pixels.
    #[must_use]
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    fn transform(&self) -> Transform {
        Transform::from_scale(self.scale, self.scale)
    }

    fn fill_path(&mut self, path: Option<Path>, color: Rgba) {
        if let Some(path) = path {
            let transform = self.transform();
            self.pixmap
                .fill_path(&path, &paint(color), FillRule::Winding, transform, None);
        }
    }

    fn stroke_path(&mut self, path: Option<Path>, color: Rgba, width: f32, cap: LineCap) {
        if let Some(path) = path {
            let stroke = Stroke {
                width,
                line_cap: cap,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };
            let transform = self.transform();
            self.pixmap
                .stroke_path(&path, &paint(color), &stroke, transform, None);
        }
    }

    fn erase_path(&mut self, path: Option<Path>) {
        if let Some(path) = path {
            let mut eraser = paint(Rgba::BLACK);
            eraser.blend_mode = BlendMode::Clear;
            let transform = self.transform();
            self.pixmap
                .fill_path(&path, &eraser, FillRule::Winding, transform, None);
        }
    }

    /// Fill a closed polygon.
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        if points.len() >= 3 {
            self.fill_path(polygon_path(points, true), color);
        }
    }

    /// Outline a closed polygon.
    pub fn stroke_polygon(&mut self, points: &[Point], color: Rgba, width: f32) {
        if points.len() >= 2 {
            self.stroke_path(polygon_path(points, true), color, width, LineCap::Round);
        }
    }

    /// Punch a transparent polygon.
    pub fn erase_polygon(&mut self, points: &[Point]) {
        if points.len() >= 3 {
            self.erase_path(polygon_path(points, true));
        }
    }

    /// Open polyline with round caps and joins.
    pub fn polyline(&mut self, points: &[Point], color: Rgba, width: f32) {
        if points.len() >= 2 {
            self.stroke_path(polygon_path(points, false), color, width, LineCap::Round);
        }
    }

    /// Straight line with round caps.
    pub fn line(&mut self, from: Point, to: Point, color: Rgba, width: f32) {
        self.polyline(&[from, to], color, width);
    }

    /// Straight line with square-cut ends.
    pub fn line_butt(&mut self, from: Point, to: Point, color: Rgba, width: f32) {
        self.stroke_path(polygon_path(&[from, to], false), color, width, LineCap::Butt);
    }

    /// Fill an axis-aligned ellipse.
    pub fn fill_ellipse(&mut self, center: Point, rx: f32, ry: f32, color: Rgba) {
        self.fill_path(oval_path(center, rx, ry), color);
    }

    /// Outline an axis-aligned ellipse.
    pub fn stroke_ellipse(&mut self, center: Point, rx: f32, ry: f32, color: Rgba, width: f32) {
        self.stroke_path(oval_path(center, rx, ry), color, width, LineCap::Butt);
    }

    /// Fill a circle.
    pub fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.fill_ellipse(center, radius, radius, color);
    }

    /// Outline a circle.
    pub fn stroke_circle(&mut self, center: Point, radius: f32, color: Rgba, width: f32) {
        self.stroke_ellipse(center, radius, radius, color, width);
    }

    /// Punch a transparent circle.
    pub fn erase_circle(&mut self, center: Point, radius: f32) {
        self.erase_path(oval_path(center, radius, radius));
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, bounds: Bounds, color: Rgba) {
        self.fill_path(bounds.to_rect().map(PathBuilder::from_rect), color);
    }

    /// Outline a rectangle.
    pub fn stroke_rect(&mut self, bounds: Bounds, color: Rgba, width: f32) {
        let path = bounds.to_rect().map(PathBuilder::from_rect);
        self.stroke_path(path, color, width, LineCap::Square);
    }

    /// Fill a rectangle with rounded corners.
    pub fn fill_rounded_rect(&mut self, bounds: Bounds, radius: f32, color: Rgba) {
        self.fill_path(rounded_rect_path(bounds, radius), color);
    }

    /// Outline a rectangle with rounded corners.
    pub fn stroke_rounded_rect(&mut self, bounds: Bounds, radius: f32, color: Rgba, width: f32) {
        self.stroke_path(rounded_rect_path(bounds, radius), color, width, LineCap::Butt);
    }

    /// Elliptical arc from `start` to `end` degrees (clockwise from 3 o'clock).
    ///
    /// An `end` smaller than `start` wraps through 360.
    #[allow(
        clippy::too_many_arguments,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn arc(
        &mut self,
        center: Point,
        rx: f32,
        ry: f32,
        start: f32,
        end: f32,
        color: Rgba,
        width: f32,
    ) {
        let end = if end < start { end + 360.0 } else { end };
        let steps = ((end - start).abs().ceil() as usize).max(2);
        let points: Vec<Point> = (0..=steps)
            .map(|i| {
                let deg = start + (end - start) * i as f32 / steps as f32;
                let rad = deg.to_radians();
                Point::new(center.x + rx * rad.cos(), center.y + ry * rad.sin())
            })
            .collect();
        self.stroke_path(polygon_path(&points, false), color, width, LineCap::Butt);
    }

    /// Rasterize text at `size` design units.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Text`] if the text cannot be rasterized.
    pub fn layout_text(
        &self,
        text: &str,
        size: f32,
        weight: FontWeight,
    ) -> RenderResult<TextLayout> {
        self.fonts.layout(text, size, weight, self.scale)
    }

    /// Draw laid-out text with its ink box's top-left corner at `top_left`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn draw_text(&mut self, layout: &TextLayout, top_left: Point, color: Rgba) {
        let Some(coverage) = layout.coverage() else {
            return;
        };

        let mut tinted = coverage.clone();
        for px in tinted.pixels_mut() {
            let alpha = mul_u8(px.alpha(), color.a);
            *px = PremultipliedColorU8::from_rgba(
                mul_u8(color.r, alpha),
                mul_u8(color.g, alpha),
                mul_u8(color.b, alpha),
                alpha,
            )
            .unwrap_or(PremultipliedColorU8::TRANSPARENT);
        }

        let x = (top_left.x * self.scale - TextLayout::pad()).round() as i32;
        let y = (top_left.y * self.scale - TextLayout::pad()).round() as i32;
        self.pixmap.draw_pixmap(
            x,
            y,
            tinted.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}

#[allow(clippy::cast_possible_truncation)]
fn mul_u8(a: u8, b: u8) -> u8 {
    ((u16::from(a) * u16::from(b) + 127) / 255) as u8
}
