//! Text placement: centered text, stacked shadows, monograms and name fitting.
//!
//! All positions and sizes are in design units. Text is centered on its ink
//! box, so a line of capitals and a line with descenders sit on the same
//! visual center.

use logo_core::{ColorSystem, Rgba};

use crate::canvas::{Bounds, Canvas, Point};
use crate::error::RenderResult;
use crate::text::FontWeight;

/// Names longer than this (in characters) are split over two lines when possible.
pub const SPLIT_THRESHOLD: usize = 12;

/// Font size never shrinks below this when fitting a name.
pub const MIN_FONT_SIZE: f32 = 12.0;

/// Shrink factor applied per fitting step.
const SHRINK: f32 = 0.9;

/// Line advance as a multiple of font size.
const LINE_HEIGHT: f32 = 1.15;

/// Offsets of the dark outline drawn around monogram letters.
const OUTLINE: [(f32, f32); 8] = [
    (-2.0, 0.0),
    (2.0, 0.0),
    (0.0, -2.0),
    (0.0, 2.0),
    (-2.0, -2.0),
    (2.0, 2.0),
    (-2.0, 2.0),
    (2.0, -2.0),
];

/// Draw `text` centered on `center`, returning its ink box.
///
/// # Errors
///
/// Returns an error if the text cannot be laid out.
pub fn draw_centered_text(
    canvas: &mut Canvas,
    text: &str,
    center: Point,
    size: f32,
    weight: FontWeight,
    color: Rgba,
) -> RenderResult<Bounds> {
    let layout = canvas.layout_text(text, size, weight)?;
    let bounds = Bounds::centered(center, layout.width(), layout.height());
    canvas.draw_text(&layout, Point::new(bounds.left, bounds.top), color);
    Ok(bounds)
}

/// Centered text over six stacked shadow copies.
///
/// Copies are drawn at offsets 6 down to 1, each with alpha proportional to
/// its offset, then the solid text on top.
///
/// # Errors
///
/// Returns an error if the text cannot be laid out.
pub fn text_with_shadow(
    canvas: &mut Canvas,
    text: &str,
    center: Point,
    size: f32,
    weight: FontWeight,
    color: Rgba,
    shadow: Rgba,
) -> RenderResult<Bounds> {
    let layout = canvas.layout_text(text, size, weight)?;
    let bounds = Bounds::centered(center, layout.width(), layout.height());
    let origin = Point::new(bounds.left, bounds.top);
    for offset in (1..=6u8).rev() {
        let alpha = u16::from(shadow.a) * u16::from(offset) / 6;
        let faded = shadow.with_alpha(u8::try_from(alpha).unwrap_or(u8::MAX));
        let d = f32::from(offset);
        canvas.draw_text(&layout, origin.offset(d, d), faded);
    }
    canvas.draw_text(&layout, origin, color);
    Ok(bounds)
}

/// Monogram with an eight-step soft shadow, a two-unit outline in
/// `dark_primary`, and the letters in `color`.
///
/// # Errors
///
/// Returns an error if the text cannot be laid out.
pub fn monogram_with_effects(
    canvas: &mut Canvas,
    initials: &str,
    center: Point,
    size: f32,
    colors: &ColorSystem,
    color: Rgba,
) -> RenderResult<Bounds> {
    let layout = canvas.layout_text(initials, size, FontWeight::Bold)?;
    let bounds = Bounds::centered(center, layout.width(), layout.height());
    let origin = Point::new(bounds.left, bounds.top);

    for offset in (1..=8u8).rev() {
        let alpha = 80 * u16::from(offset) / 8;
        let shade = colors.shadow.with_alpha(u8::try_from(alpha).unwrap_or(u8::MAX));
        let d = f32::from(offset);
        canvas.draw_text(&layout, origin.offset(d, d), shade);
    }
    for (dx, dy) in OUTLINE {
        canvas.draw_text(&layout, origin.offset(dx, dy), colors.dark_primary);
    }
    canvas.draw_text(&layout, origin, color);
    Ok(bounds)
}

/// Lines and font size chosen for a company name.
#[derive(Debug, Clone, PartialEq)]
pub struct NameFit {
    /// One or two lines of text.
    pub lines: Vec<String>,
    /// Font size in design units.
    pub size: f32,
}

/// Split a long multi-word name at its word midpoint.
///
/// Names of at most [`SPLIT_THRESHOLD`] characters, or single words, stay on
/// one line.
#[must_use]
pub fn split_name(name: &str) -> Vec<String> {
    let name = name.trim();
    let words: Vec<&str> = name.split_whitespace().collect();
    if name.chars().count() > SPLIT_THRESHOLD && words.len() >= 2 {
        let mid = words.len() / 2;
        vec![words[..mid].join(" "), words[mid..].join(" ")]
    } else {
        vec![name.to_string()]
    }
}

/// Choose lines and a font size so every line fits `max_width`.
///
/// Starts at `size` and shrinks by 10% per step, stopping at
/// [`MIN_FONT_SIZE`] even if the text still overflows.
///
/// # Errors
///
/// Returns an error if the text cannot be laid out.
pub fn fit_name(
    canvas: &Canvas,
    name: &str,
    size: f32,
    weight: FontWeight,
    max_width: f32,
) -> RenderResult<NameFit> {
    let lines = split_name(name);
    let mut size = size.max(MIN_FONT_SIZE);
    loop {
        let mut widest = 0.0f32;
        for line in &lines {
            widest = widest.max(canvas.layout_text(line, size, weight)?.width());
        }
        if widest <= max_width || size <= MIN_FONT_SIZE {
            break;
        }
        size = (size * SHRINK).max(MIN_FONT_SIZE);
    }
    tracing::trace!(lines = lines.len(), size, "fitted name");
    Ok(NameFit { lines, size })
}

/// Draw a fitted name centered on `center`, one or two lines, returning the block bounds.
///
/// # Errors
///
/// Returns an error if the text cannot be laid out.
#[allow(clippy::cast_precision_loss)]
pub fn draw_name_block(
    canvas: &mut Canvas,
    name: &str,
    center: Point,
    size: f32,
    max_width: f32,
    weight: FontWeight,
    color: Rgba,
) -> RenderResult<Bounds> {
    let fit = fit_name(canvas, name, size, weight, max_width)?;
    let advance = fit.size * LINE_HEIGHT;
    let first_y = center.y - advance * (fit.lines.len() as f32 - 1.0) / 2.0;
    let mut block = Bounds::new(center.x, center.y, center.x, center.y);
    for (i, line) in fit.lines.iter().enumerate() {
        let line_center = Point::new(center.x, first_y + advance * i as f32);
        let b = draw_centered_text(canvas, line, line_center, fit.size, weight, color)?;
        block = Bounds::new(
            block.left.min(b.left),
            block.top.min(b.top),
            block.right.max(b.right),
            block.bottom.max(b.bottom),
        );
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use proptest::prelude::*;

    use super::*;
    use crate::text::FontBook;

    fn canvas() -> Canvas {
        Canvas::new(200, Arc::new(FontBook::builtin())).unwrap()
    }

    #[test]
    fn long_multi_word_names_split_at_midpoint() {
        assert_eq!(split_name("Tech Flow AI Labs"), vec!["Tech Flow", "AI Labs"]);
        assert_eq!(split_name("Rose Garden Co"), vec!["Rose", "Garden Co"]);
        assert_eq!(split_name("Rose Garden"), vec!["Rose Garden"]);
        assert_eq!(split_name("Supercalifragilistic"), vec!["Supercalifragilistic"]);
    }

    #[test]
    fn fit_shrinks_until_it_fits() {
        let c = canvas();
        let fit = fit_name(&c, "WIDE NAME", 200.0, FontWeight::Bold, 300.0).unwrap();
        assert!(fit.size < 200.0);
        let width = c.layout_text("WIDE NAME", fit.size, FontWeight::Bold).unwrap().width();
        assert!(width <= 300.0 || (fit.size - MIN_FONT_SIZE).abs() < f32::EPSILON);
    }

    #[test]
    fn fit_never_goes_below_minimum() {
        let c = canvas();
        let long = "An Extremely Long Company Name Indeed";
        let fit = fit_name(&c, long, 100.0, FontWeight::Regular, 1.0).unwrap();
        assert!((fit.size - MIN_FONT_SIZE).abs() < f32::EPSILON);
        assert_eq!(fit.lines.len(), 2);
    }

    #[test]
    fn centered_text_straddles_center() {
        let mut c = canvas();
        let center = Point::new(500.0, 500.0);
        let b = draw_centered_text(&mut c, "AB", center, 150.0, FontWeight::Bold, Rgba::BLACK)
            .unwrap();
        assert!(b.left < 500.0 && b.right > 500.0);
        assert!((b.center().x - 500.0).abs() < 1e-3);
    }

    #[test]
    fn two_line_block_is_taller_than_one() {
        let mut a = canvas();
        let mut b = canvas();
        let center = Point::new(500.0, 500.0);
        let block = |c: &mut Canvas, name: &str| {
            draw_name_block(c, name, center, 80.0, 900.0, FontWeight::Bold, Rgba::BLACK).unwrap()
        };
        let one = block(&mut a, "Rose Garden");
        let two = block(&mut b, "Rose Garden Flowers");
        assert!(two.height() > one.height());
    }

    #[test]
    fn monogram_paints_pixels() {
        let mut c = canvas();
        let colors = logo_core::build_palette::<&str>(&[], logo_core::IndustryCategory::Saas);
        let center = Point::new(500.0, 500.0);
        monogram_with_effects(&mut c, "TF", center, 300.0, &colors, colors.neutral).unwrap();
        assert!(c.pixmap().pixels().iter().any(|p| p.alpha() == 255));
    }

    proptest! {
        #[test]
        fn prop_split_keeps_every_word(name in "[A-Za-z]{1,9}( [A-Za-z]{1,9}){0,5}") {
            let lines = split_name(&name);
            prop_assert!(lines.len() == 1 || lines.len() == 2);
            let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
            let words: Vec<&str> = name.split_whitespace().collect();
            prop_assert_eq!(rejoined, words);
        }
    }
}
