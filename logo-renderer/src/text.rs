//! Font discovery and text rasterization.
//!
//! Fonts are discovered once per [`FontBook`] and shared behind an `Arc`.
//! Text is shaped through a one-element SVG document (usvg/resvg) into a
//! coverage pixmap; when no usable face exists a built-in 5x7 bitmap font is
//! used instead, so text rendering never depends on the host environment.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tiny_skia::{Paint, Pixmap, Rect, Transform};
use usvg::fontdb;

use crate::error::{RenderError, RenderResult};

/// Families tried, in order, when choosing the face used for logo text.
const PREFERRED_FAMILIES: &[&str] = &[
    "Arial",
    "Calibri",
    "Tahoma",
    "Segoe UI",
    "Helvetica",
    "DejaVu Sans",
    "Liberation Sans",
    "Noto Sans",
    "Roboto",
];

/// Subdirectory depth searched below each font directory.
const SEARCH_DEPTH: usize = 3;

/// Transparent border around rasterized text, in pixels.
const TEXT_PAD: f32 = 2.0;

/// Font weight for logo text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

impl FontWeight {
    fn svg_value(self) -> &'static str {
        match self {
            Self::Regular => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Where fonts are looked for.
#[derive(Debug, Clone)]
pub struct FontConfig {
    /// Directories searched for `preferred_files`.
    pub search_dirs: Vec<PathBuf>,
    /// Font file names loaded when found (case-insensitive).
    pub preferred_files: Vec<String>,
    /// Also load every system font.
    pub load_system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        let mut search_dirs = vec![
            PathBuf::from("/usr/share/fonts"),
            PathBuf::from("/usr/local/share/fonts"),
            PathBuf::from("/Library/Fonts"),
            PathBuf::from("/System/Library/Fonts"),
            PathBuf::from("C:\\Windows\\Fonts"),
        ];
        if let Some(home) = std::env::var_os("HOME") {
            search_dirs.push(Path::new(&home).join(".fonts"));
            search_dirs.push(Path::new(&home).join(".local/share/fonts"));
        }

        Self {
            search_dirs,
            preferred_files: [
                "arial.ttf",
                "arialbd.ttf",
                "calibri.ttf",
                "calibrib.ttf",
                "tahoma.ttf",
                "tahomabd.ttf",
                "DejaVuSans.ttf",
                "DejaVuSans-Bold.ttf",
                "LiberationSans-Regular.ttf",
                "LiberationSans-Bold.ttf",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            load_system_fonts: true,
        }
    }
}

impl FontConfig {
    /// No font discovery at all; every string uses the bitmap font.
    #[must_use]
    pub fn builtin_only() -> Self {
        Self {
            search_dirs: Vec::new(),
            preferred_files: Vec::new(),
            load_system_fonts: false,
        }
    }
}

/// Loaded font faces plus the family chosen for logo text.
pub struct FontBook {
    db: Arc<fontdb::Database>,
    family: Option<String>,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.db.len())
            .field("family", &self.family)
            .finish()
    }
}

impl FontBook {
    /// Discover fonts according to `config`.
    #[must_use]
    pub fn load(config: &FontConfig) -> Self {
        let mut db = fontdb::Database::new();

        for name in &config.preferred_files {
            let found = config
                .search_dirs
                .iter()
                .find_map(|dir| find_font_file(dir, name, SEARCH_DEPTH));
            if let Some(path) = found {
                match db.load_font_file(&path) {
                    Ok(()) => tracing::debug!(path = %path.display(), "loaded font"),
                    Err(err) => {
                        tracing::warn!(path = %path.display(), %err, "font file unreadable");
                    }
                }
            }
        }

        if config.load_system_fonts {
            db.load_system_fonts();
        }

        let family = choose_family(&db);
        match &family {
            Some(name) => tracing::info!(family = %name, faces = db.len(), "font book ready"),
            None => tracing::warn!("no font faces found; using built-in bitmap font"),
        }

        Self {
            db: Arc::new(db),
            family,
        }
    }

    /// A font book with no faces (bitmap font only).
    #[must_use]
    pub fn builtin() -> Self {
        Self::load(&FontConfig::builtin_only())
    }

    /// Family used for logo text, if any face was found.
    #[must_use]
    pub fn family(&self) -> Option<&str> {
        self.family.as_deref()
    }

    /// Number of loaded faces.
    #[must_use]
    pub fn face_count(&self) -> usize {
        self.db.len()
    }

    /// Rasterize `text` at `size * scale` pixels.
    ///
    /// `scale` converts design units to pixels; the returned layout reports
    /// its extent back in design units.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Text`] if the coverage pixmap cannot be allocated.
    pub fn layout(
        &self,
        text: &str,
        size: f32,
        weight: FontWeight,
        scale: f32,
    ) -> RenderResult<TextLayout> {
        let px_size = (size * scale).max(1.0);
        if text.trim().is_empty() {
            return Ok(TextLayout::empty(scale));
        }

        if let Some(family) = &self.family {
            match self.layout_outline(text, px_size, weight, family, scale) {
                Ok(Some(layout)) => return Ok(layout),
                Ok(None) => tracing::debug!(text, "no glyphs shaped; using bitmap font"),
                Err(err) => tracing::debug!(text, %err, "outline text failed; using bitmap font"),
            }
        }

        layout_bitmap(text, px_size, scale)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    fn layout_outline(
        &self,
        text: &str,
        px_size: f32,
        weight: FontWeight,
        family: &str,
        scale: f32,
    ) -> RenderResult<Option<TextLayout>> {
        let svg = text_document(text, px_size, weight, family);
        let mut opt = usvg::Options::default();
        opt.fontdb = Arc::clone(&self.db);
        opt.font_family = family.to_string();

        let tree = usvg::Tree::from_str(&svg, &opt)
            .map_err(|e| RenderError::Text(format!("SVG parsing failed: {e}")))?;
        if !tree.root().has_children() {
            return Ok(None);
        }

        let bbox = tree.root().abs_bounding_box();
        if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return Ok(None);
        }

        let px_w = (bbox.width() + 2.0 * TEXT_PAD).ceil() as u32;
        let px_h = (bbox.height() + 2.0 * TEXT_PAD).ceil() as u32;
        let mut pixmap = Pixmap::new(px_w, px_h)
            .ok_or_else(|| RenderError::Text(format!("cannot allocate {px_w}x{px_h} text")))?;

        let transform = Transform::from_translate(TEXT_PAD - bbox.x(), TEXT_PAD - bbox.y());
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        Ok(Some(TextLayout {
            coverage: Some(pixmap),
            ink_width: bbox.width(),
            ink_height: bbox.height(),
            scale,
        }))
    }
}

/// A rasterized string: black coverage plus its ink extent.
#[derive(Debug, Clone)]
pub struct TextLayout {
    coverage: Option<Pixmap>,
    ink_width: f32,
    ink_height: f32,
    scale: f32,
}

impl TextLayout {
    fn empty(scale: f32) -> Self {
        Self {
            coverage: None,
            ink_width: 0.0,
            ink_height: 0.0,
            scale,
        }
    }

    /// Ink width in design units.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.ink_width / self.scale
    }

    /// Ink height in design units.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.ink_height / self.scale
    }

    /// True when nothing would be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coverage.is_none()
    }

    pub(crate) fn coverage(&self) -> Option<&Pixmap> {
        self.coverage.as_ref()
    }

    pub(crate) const fn pad() -> f32 {
        TEXT_PAD
    }
}

fn choose_family(db: &fontdb::Database) -> Option<String> {
    let has_family = |name: &str| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family == name))
    };

    PREFERRED_FAMILIES
        .iter()
        .find(|name| has_family(name))
        .map(|name| (*name).to_string())
        .or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(family, _)| family.clone()))
        })
}

fn find_font_file(dir: &Path, name: &str, depth: usize) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut subdirs = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if depth > 0 {
                subdirs.push(path);
            }
            continue;
        }
        let matches = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.eq_ignore_ascii_case(name));
        if matches {
            return Some(path);
        }
    }

    subdirs.sort();
    subdirs
        .iter()
        .find_map(|sub| find_font_file(sub, name, depth - 1))
}

/// One-element SVG document holding `text`, sized with room to spare.
#[allow(clippy::cast_precision_loss)]
fn text_document(text: &str, px_size: f32, weight: FontWeight, family: &str) -> String {
    let doc_w = (px_size * (text.chars().count() as f32 + 2.0)).ceil();
    let doc_h = (px_size * 2.0).ceil();
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{doc_w}\" height=\"{doc_h}\">\
         <text x=\"0\" y=\"{px_size}\" font-family=\"{}\" font-size=\"{px_size}\" \
         font-weight=\"{}\" fill=\"#000000\">{}</text></svg>",
        escape_xml(family),
        weight.svg_value(),
        escape_xml(text),
    )
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

// 5x7 glyphs, one byte per row, bit 4 is the leftmost column.
const GLYPH_UNKNOWN: [u8; 7] = [0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04];

fn glyph(c: char) -> [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'B' => [0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E],
        'C' => [0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E],
        'D' => [0x1E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x1E],
        'E' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F],
        'F' => [0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10],
        'G' => [0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F],
        'H' => [0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'I' => [0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'J' => [0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C],
        'K' => [0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11],
        'L' => [0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F],
        'M' => [0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11],
        'N' => [0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11],
        'O' => [0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'P' => [0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10],
        'Q' => [0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D],
        'R' => [0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11],
        'S' => [0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E],
        'T' => [0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'V' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04],
        'W' => [0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A],
        'X' => [0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11],
        'Y' => [0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04],
        'Z' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F],
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        ' ' => [0; 7],
        '&' => [0x0C, 0x12, 0x14, 0x08, 0x15, 0x12, 0x0D],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        '+' => [0x00, 0x04, 0x04, 0x1F, 0x04, 0x04, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C],
        ',' => [0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08],
        '\'' => [0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00],
        '!' => [0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04],
        '/' => [0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00],
        '@' => [0x0E, 0x11, 0x17, 0x15, 0x17, 0x10, 0x0E],
        _ => GLYPH_UNKNOWN,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn layout_bitmap(text: &str, px_size: f32, scale: f32) -> RenderResult<TextLayout> {
    let cell = (px_size / 8.0).max(1.0);
    let count = text.chars().count();
    let ink_width = (count * 6 - 1) as f32 * cell;
    let ink_height = 7.0 * cell;

    let px_w = (ink_width + 2.0 * TEXT_PAD).ceil() as u32;
    let px_h = (ink_height + 2.0 * TEXT_PAD).ceil() as u32;
    let mut pixmap = Pixmap::new(px_w, px_h)
        .ok_or_else(|| RenderError::Text(format!("cannot allocate {px_w}x{px_h} text")))?;

    let mut paint = Paint::default();
    paint.set_color_rgba8(0, 0, 0, 255);
    paint.anti_alias = false;

    for (index, c) in text.chars().enumerate() {
        let origin_x = TEXT_PAD + (index * 6) as f32 * cell;
        for (row, bits) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if bits & (0x10 >> col) == 0 {
                    continue;
                }
                let x = origin_x + col as f32 * cell;
                let y = TEXT_PAD + row as f32 * cell;
                if let Some(rect) = Rect::from_xywh(x, y, cell, cell) {
                    pixmap.fill_rect(rect, &paint, Transform::identity(), None);
                }
            }
        }
    }

    Ok(TextLayout {
        coverage: Some(pixmap),
        ink_width,
        ink_height,
        scale,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_book_has_no_family() {
        let book = FontBook::builtin();
        assert!(book.family().is_none());
        assert_eq!(book.face_count(), 0);
    }

    #[test]
    fn bitmap_layout_measures_glyph_cells() {
        let book = FontBook::builtin();
        let layout = book.layout("AB", 80.0, FontWeight::Bold, 1.0).unwrap();
        // 80px -> 10px cells; two glyphs = 11 cells wide, 7 tall.
        assert!((layout.width() - 110.0).abs() < f32::EPSILON);
        assert!((layout.height() - 70.0).abs() < f32::EPSILON);
        assert!(!layout.is_empty());
    }

    #[test]
    fn layout_reports_design_units() {
        let book = FontBook::builtin();
        let full = book.layout("ACME", 80.0, FontWeight::Regular, 1.0).unwrap();
        let half = book.layout("ACME", 80.0, FontWeight::Regular, 0.5).unwrap();
        assert!((full.width() - half.width()).abs() < 1.0);
    }

    #[test]
    fn blank_text_is_empty() {
        let book = FontBook::builtin();
        let layout = book.layout("   ", 40.0, FontWeight::Regular, 1.0).unwrap();
        assert!(layout.is_empty());
        assert!(layout.width().abs() < f32::EPSILON);
    }

    #[test]
    fn unknown_characters_still_render() {
        let book = FontBook::builtin();
        let layout = book.layout("é☃", 16.0, FontWeight::Regular, 1.0).unwrap();
        let coverage = layout.coverage().unwrap();
        assert!(coverage.pixels().iter().any(|p| p.alpha() > 0));
    }

    #[test]
    fn escape_xml_handles_markup() {
        assert_eq!(escape_xml("A&B <C>"), "A&amp;B &lt;C&gt;");
    }

    #[test]
    fn text_document_escapes_and_sizes() {
        let svg = text_document("R&D", 40.0, FontWeight::Bold, "Noto \"Sans\"");
        let head = "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"200\" height=\"80\">";
        assert!(svg.starts_with(head));
        assert!(svg.contains("font-family=\"Noto &quot;Sans&quot;\""));
        assert!(svg.contains("font-weight=\"bold\""));
        assert!(svg.ends_with(">R&amp;D</text></svg>"));
    }

    #[test]
    fn missing_search_dirs_are_ignored() {
        let config = FontConfig {
            search_dirs: vec![PathBuf::from("/definitely/not/a/font/dir")],
            preferred_files: vec!["arial.ttf".to_string()],
            load_system_fonts: false,
        };
        let book = FontBook::load(&config);
        assert!(book.family().is_none());
    }
}
