//! PNG export and base64 transport encoding.

use base64::Engine as _;
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::ImageEncoder;
use serde::{Deserialize, Serialize};
use tiny_skia::Pixmap;

use crate::error::{RenderError, RenderResult};

/// MIME prefix added by [`to_data_uri`].
pub const DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// PNG compression level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    /// Fastest encode, largest files.
    Fast,
    /// Balanced.
    #[default]
    Default,
    /// Smallest files.
    Best,
}

impl PngCompression {
    /// Stable identifier, used in cache keys.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Default => "default",
            Self::Best => "best",
        }
    }

    const fn codec(self) -> CompressionType {
        match self {
            Self::Fast => CompressionType::Fast,
            Self::Default => CompressionType::Default,
            Self::Best => CompressionType::Best,
        }
    }
}

/// Encode a finished pixmap as PNG bytes.
///
/// tiny-skia stores premultiplied color; channels are demultiplied before
/// encoding.
///
/// # Errors
///
/// Returns [`RenderError::Export`] if the encoder rejects the image.
pub fn encode_png(pixmap: &Pixmap, compression: PngCompression) -> RenderResult<Vec<u8>> {
    let (width, height) = (pixmap.width(), pixmap.height());
    let mut rgba = Vec::with_capacity(pixmap.pixels().len() * 4);
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        rgba.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    let mut buf = Vec::new();
    PngEncoder::new_with_quality(&mut buf, compression.codec(), FilterType::Adaptive)
        .write_image(&rgba, width, height, image::ExtendedColorType::Rgba8)
        .map_err(|e| RenderError::Export(format!("PNG encoding failed: {e}")))?;
    Ok(buf)
}

/// Standard-alphabet base64 without a MIME prefix.
#[must_use]
pub fn to_base64(bytes: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(bytes)
}

/// Prefix a base64 PNG for direct use in an `<img src>`.
#[must_use]
pub fn to_data_uri(base64_png: &str) -> String {
    format!("{DATA_URI_PREFIX}{base64_png}")
}

#[cfg(test)]
mod tests {
    use tiny_skia::{Color, Pixmap};

    use super::*;

    #[test]
    fn encodes_decodable_png() {
        let mut pixmap = Pixmap::new(16, 8).unwrap();
        pixmap.fill(Color::from_rgba8(236, 72, 153, 255));
        let png = encode_png(&pixmap, PngCompression::Default).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

        let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (16, 8));
        assert_eq!(decoded.get_pixel(3, 3).0, [236, 72, 153, 255]);
    }

    #[test]
    fn translucent_pixels_are_demultiplied() {
        let mut pixmap = Pixmap::new(2, 2).unwrap();
        pixmap.fill(Color::from_rgba8(200, 100, 0, 128));
        let png = encode_png(&pixmap, PngCompression::Fast).unwrap();
        let px = image::load_from_memory(&png).unwrap().to_rgba8().get_pixel(0, 0).0;
        assert_eq!(px[3], 128);
        assert!(px[0].abs_diff(200) <= 2, "red was {}", px[0]);
        assert!(px[1].abs_diff(100) <= 2, "green was {}", px[1]);
    }

    #[test]
    fn base64_has_no_prefix_and_data_uri_does() {
        let encoded = to_base64(b"logo");
        assert_eq!(encoded, "bG9nbw==");
        assert_eq!(to_data_uri(&encoded), "data:image/png;base64,bG9nbw==");
    }

    #[test]
    fn compression_keys_are_distinct() {
        assert_eq!(PngCompression::default().key(), "default");
        assert_ne!(PngCompression::Fast.key(), PngCompression::Best.key());
    }
}
