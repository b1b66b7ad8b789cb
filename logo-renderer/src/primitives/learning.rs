//! Education motifs.

use logo_core::ColorSystem;

use crate::canvas::{quadratic, Bounds, Canvas, Point};

/// Open book: two curved pages meeting at a spine.
#[allow(clippy::cast_precision_loss)]
pub fn open_book(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let spine_top = center.offset(0.0, -size * 0.45);
    let spine_bottom = center.offset(0.0, size * 0.6);
    for side in [-1.0f32, 1.0] {
        let outer_top = center.offset(side * size, -size * 0.6);
        let outer_bottom = center.offset(side * size, size * 0.45);
        let top_bend = center.offset(side * size * 0.5, -size * 0.75);
        let mut page = quadratic(spine_top, top_bend, outer_top, 16);
        page.push(outer_bottom);
        let bottom_bend = center.offset(side * size * 0.5, size * 0.3);
        page.extend(quadratic(outer_bottom, bottom_bend, spine_bottom, 16));
        let fill = if side < 0.0 { colors.primary } else { colors.secondary };
        canvas.fill_polygon(&page, fill);
        canvas.stroke_polygon(&page, colors.dark_primary, size * 0.03);
        for line in 1..4 {
            let y = -size * 0.35 + size * 0.2 * line as f32;
            canvas.line(
                center.offset(side * size * 0.2, y),
                center.offset(side * size * 0.8, y - size * 0.08),
                colors.neutral.with_alpha(200),
                size * 0.025,
            );
        }
    }
    canvas.line(spine_top, spine_bottom, colors.dark_primary, size * 0.05);
}

/// Mortarboard with a tassel.
pub fn graduation_cap(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let board = [
        center.offset(0.0, -size * 0.55),
        center.offset(size, -size * 0.1),
        center.offset(0.0, size * 0.35),
        center.offset(-size, -size * 0.1),
    ];
    let skull = Bounds::new(
        center.x - size * 0.55,
        center.y,
        center.x + size * 0.55,
        center.y + size * 0.55,
    );
    canvas.fill_rounded_rect(skull, size * 0.2, colors.dark_primary);
    canvas.fill_polygon(&board, colors.primary);
    let knot = center.offset(0.0, -size * 0.1);
    let drop = center.offset(size * 0.75, size * 0.15);
    canvas.line(knot, center.offset(size * 0.75, -size * 0.1), colors.accent, size * 0.04);
    canvas.line(center.offset(size * 0.75, -size * 0.1), drop, colors.accent, size * 0.04);
    canvas.fill_circle(knot, size * 0.07, colors.accent);
    canvas.fill_ellipse(drop.offset(0.0, size * 0.1), size * 0.06, size * 0.12, colors.accent);
}

/// Light bulb with filament and base rings.
pub fn light_bulb(canvas: &mut Canvas, center: Point, size: f32, colors: &ColorSystem) {
    let glow = colors.highlight.with_alpha(60);
    canvas.fill_circle(center.offset(0.0, -size * 0.2), size * 0.95, glow);
    canvas.fill_circle(center.offset(0.0, -size * 0.2), size * 0.7, colors.accent);
    let neck = [
        center.offset(-size * 0.45, size * 0.2),
        center.offset(size * 0.45, size * 0.2),
        center.offset(size * 0.3, size * 0.6),
        center.offset(-size * 0.3, size * 0.6),
    ];
    canvas.fill_polygon(&neck, colors.accent);
    let filament = [
        center.offset(-size * 0.2, size * 0.4),
        center.offset(-size * 0.1, -size * 0.2),
        center.offset(0.0, size * 0.05),
        center.offset(size * 0.1, -size * 0.2),
        center.offset(size * 0.2, size * 0.4),
    ];
    canvas.polyline(&filament, colors.dark_primary, size * 0.04);
    for i in 0..3u8 {
        let y = center.y + size * (0.68 + 0.12 * f32::from(i));
        canvas.fill_rounded_rect(
            Bounds::new(center.x - size * 0.3, y, center.x + size * 0.3, y + size * 0.08),
            size * 0.04,
            colors.neutral_dark,
        );
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use logo_core::{build_palette, IndustryCategory};

    use super::*;
    use crate::text::FontBook;

    #[test]
    fn education_icons_paint_their_center() {
        let colors = build_palette::<&str>(&[], IndustryCategory::Education);
        let icons: [fn(&mut Canvas, Point, f32, &ColorSystem); 3] =
            [open_book, graduation_cap, light_bulb];
        for icon in icons {
            let mut c = Canvas::new(100, Arc::new(FontBook::builtin())).unwrap();
            icon(&mut c, Point::new(500.0, 500.0), 300.0, &colors);
            assert!(c.pixmap().pixel(50, 50).unwrap().alpha() > 0);
        }
    }
}
