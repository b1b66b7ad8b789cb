//! RGBA colors, hex parsing and the two blend modes used by the drawing code.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

/// How two colors are interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlendMode {
    /// Straight per-channel interpolation in sRGB space.
    #[default]
    Linear,
    /// Interpolate in linear light (gamma 2.2), then re-encode.
    Gamma,
}

const GAMMA: f32 = 2.2;

impl Rgba {
    /// Fallback color for unparseable input (`#6366F1`).
    pub const INDIGO: Self = Self::rgb(0x63, 0x66, 0xF1);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with explicit alpha.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB` or `#RRGGBB` (case-insensitive, `#` optional).
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidColor`] if the string is not 3 or 6 hex digits.
    pub fn parse_hex(input: &str) -> CoreResult<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let invalid = || CoreError::InvalidColor(input.to_string());

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map_err(|_| invalid());
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        match digits.len() {
            3 => Ok(Self::rgb(nibble(0)? * 17, nibble(1)? * 17, nibble(2)? * 17)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            _ => Err(invalid()),
        }
    }

    /// Parse a hex color, substituting [`Rgba::INDIGO`] when the input is malformed.
    #[must_use]
    pub fn parse_or_default(input: &str) -> Self {
        Self::parse_hex(input).unwrap_or_else(|err| {
            tracing::debug!(%err, "substituting default color");
            Self::INDIGO
        })
    }

    /// Same color with a different alpha.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Move each color channel toward white by `factor` (0..=1). Alpha is kept.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn lighten(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let ch = |c: u8| (f32::from(c) + (255.0 - f32::from(c)) * f) as u8;
        Self::rgba(ch(self.r), ch(self.g), ch(self.b), self.a)
    }

    /// Scale each color channel by `1 - factor`. Alpha is kept.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn darken(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let ch = |c: u8| (f32::from(c) * (1.0 - f)) as u8;
        Self::rgba(ch(self.r), ch(self.g), ch(self.b), self.a)
    }

    /// Add `delta` to each color channel, saturating at 0 and 255.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn shift(self, delta: i16) -> Self {
        let ch = |c: u8| (i16::from(c) + delta).clamp(0, 255) as u8;
        Self::rgba(ch(self.r), ch(self.g), ch(self.b), self.a)
    }

    /// Interpolate toward `other` by `t` (0 = self, 1 = other).
    ///
    /// Channels are truncated back to integers. Alpha always blends linearly.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn blend(self, other: Self, t: f32, mode: BlendMode) -> Self {
        let t = t.clamp(0.0, 1.0);
        let linear = |a: u8, b: u8| (f32::from(a) * (1.0 - t) + f32::from(b) * t) as u8;
        let gamma = |a: u8, b: u8| {
            let la = (f32::from(a) / 255.0).powf(GAMMA);
            let lb = (f32::from(b) / 255.0).powf(GAMMA);
            let mixed = (la * (1.0 - t) + lb * t).powf(1.0 / GAMMA);
            (mixed * 255.0).clamp(0.0, 255.0) as u8
        };
        let mix = |a: u8, b: u8| match mode {
            BlendMode::Linear => linear(a, b),
            BlendMode::Gamma => gamma(a, b),
        };
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            linear(self.a, other.a),
        )
    }

    /// `#RRGGBB` representation (alpha omitted).
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::INDIGO
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            f.write_str(&self.to_hex())
        } else {
            write!(f, "{}{:02X}", self.to_hex(), self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Rgba::parse_hex("#EC4899").unwrap(), Rgba::rgb(0xEC, 0x48, 0x99));
        assert_eq!(Rgba::parse_hex("ec4899").unwrap(), Rgba::rgb(0xEC, 0x48, 0x99));
        assert_eq!(Rgba::parse_hex("#fA0").unwrap(), Rgba::rgb(0xFF, 0xAA, 0x00));
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#", "#12", "#12345", "#GGGGGG", "blue", "#1234567", "#é12"] {
            assert!(Rgba::parse_hex(bad).is_err(), "{bad} should not parse");
            assert_eq!(Rgba::parse_or_default(bad), Rgba::INDIGO);
        }
    }

    #[test]
    fn lighten_and_darken_follow_fixed_factors() {
        let c = Rgba::rgb(100, 200, 0);
        assert_eq!(c.lighten(0.3), Rgba::rgb(146, 216, 76));
        assert_eq!(c.darken(0.5), Rgba::rgb(50, 100, 0));
        assert_eq!(c.lighten(0.0), c);
        assert_eq!(c.darken(1.0), Rgba::BLACK);
    }

    #[test]
    fn shift_saturates() {
        let c = Rgba::rgb(50, 150, 250);
        assert_eq!(c.shift(-100), Rgba::rgb(0, 50, 150));
        assert_eq!(c.shift(80), Rgba::rgb(130, 230, 255));
    }

    #[test]
    fn linear_blend_endpoints_and_midpoint() {
        let a = Rgba::rgb(0, 0, 0);
        let b = Rgba::rgb(200, 100, 50);
        assert_eq!(a.blend(b, 0.0, BlendMode::Linear), a);
        assert_eq!(a.blend(b, 1.0, BlendMode::Linear), b);
        assert_eq!(a.blend(b, 0.5, BlendMode::Linear), Rgba::rgb(100, 50, 25));
    }

    #[test]
    fn gamma_blend_is_brighter_at_midpoint() {
        let a = Rgba::BLACK;
        let b = Rgba::WHITE;
        let linear = a.blend(b, 0.5, BlendMode::Linear);
        let gamma = a.blend(b, 0.5, BlendMode::Gamma);
        assert!(gamma.r > linear.r);
        assert_eq!(a.blend(b, 1.0, BlendMode::Gamma).r, 255);
    }

    #[test]
    fn display_includes_alpha_only_when_translucent() {
        assert_eq!(Rgba::INDIGO.to_string(), "#6366F1");
        assert_eq!(Rgba::INDIGO.with_alpha(0x80).to_string(), "#6366F180");
    }

    proptest! {
        #[test]
        fn prop_parse_or_default_is_total(input in ".*") {
            let c = Rgba::parse_or_default(&input);
            prop_assert_eq!(c.a, 255);
        }

        #[test]
        fn prop_six_digit_hex_round_trips(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let c = Rgba::rgb(r, g, b);
            prop_assert_eq!(Rgba::parse_hex(&c.to_hex()).unwrap(), c);
            prop_assert_eq!(Rgba::parse_hex(&c.to_hex().to_lowercase()).unwrap(), c);
        }

        #[test]
        fn prop_blend_stays_between_endpoints(
            a in any::<u8>(), b in any::<u8>(), t in 0.0f32..=1.0,
        ) {
            let mixed = Rgba::rgb(a, a, a).blend(Rgba::rgb(b, b, b), t, BlendMode::Linear);
            prop_assert!(mixed.r >= a.min(b) && mixed.r <= a.max(b));
        }
    }
}
