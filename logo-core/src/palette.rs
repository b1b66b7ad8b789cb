//! Palette building: caller colors plus industry defaults become a full [`ColorSystem`].

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::industry::IndustryCategory;

/// Lighten/darken factor for the derived primary tints.
pub const TINT_FACTOR: f32 = 0.3;

/// Channel offset applied to the primary for the shadow role.
const SHADOW_SHIFT: i16 = -100;
/// Alpha of the shadow role.
const SHADOW_ALPHA: u8 = 180;
/// Channel offset applied to the primary for the highlight role.
const HIGHLIGHT_SHIFT: i16 = 80;

/// A fully populated, named palette for a single generation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSystem {
    /// Dominant brand color.
    pub primary: Rgba,
    /// Supporting brand color.
    pub secondary: Rgba,
    /// Highlight/accent brand color.
    pub accent: Rgba,
    /// Near-white used for panels and knock-outs.
    pub neutral: Rgba,
    /// Near-black used for outlines and deep shadows.
    pub neutral_dark: Rgba,
    /// Body text color.
    pub text: Rgba,
    /// Translucent darker primary for drop shadows.
    pub shadow: Rgba,
    /// Brighter primary for glints.
    pub highlight: Rgba,
    /// Primary lightened toward white.
    pub light_primary: Rgba,
    /// Primary darkened toward black.
    pub dark_primary: Rgba,
    /// Gradient start color.
    pub gradient_start: Rgba,
    /// Gradient end color.
    pub gradient_end: Rgba,
}

impl ColorSystem {
    /// Derive every role from a primary/secondary/accent triad.
    #[must_use]
    pub fn from_triad(primary: Rgba, secondary: Rgba, accent: Rgba) -> Self {
        Self {
            primary,
            secondary,
            accent,
            neutral: Rgba::rgb(248, 250, 252),
            neutral_dark: Rgba::rgb(15, 23, 42),
            text: Rgba::rgb(30, 41, 59),
            shadow: primary.shift(SHADOW_SHIFT).with_alpha(SHADOW_ALPHA),
            highlight: primary.shift(HIGHLIGHT_SHIFT),
            light_primary: primary.lighten(TINT_FACTOR),
            dark_primary: primary.darken(TINT_FACTOR),
            gradient_start: primary,
            gradient_end: secondary,
        }
    }

    /// The three brand colors in slot order.
    #[must_use]
    pub const fn brand(&self) -> [Rgba; 3] {
        [self.primary, self.secondary, self.accent]
    }
}

/// Build a palette from up to three caller colors, backfilled by the industry triad.
///
/// Only the first three entries of `colors` are considered. A malformed entry
/// becomes the default indigo for its slot; it never fails the call.
#[must_use]
pub fn build_palette<S: AsRef<str>>(colors: &[S], industry: IndustryCategory) -> ColorSystem {
    let mut triad = industry.default_triad();
    for (slot, raw) in triad.iter_mut().zip(colors.iter()) {
        *slot = Rgba::parse_or_default(raw.as_ref());
    }
    let [primary, secondary, accent] = triad;
    ColorSystem::from_triad(primary, secondary, accent)
}
