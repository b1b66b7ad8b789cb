//! # Saorsa Logo Core
//!
//! Pure data model for the procedural logo engine. Nothing in this crate
//! touches pixels; the renderer consumes these types.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                  logo-core                   │
//! ├──────────────────────┬───────────────────────┤
//! │  Color System        │  Industry Classifier  │
//! │  - hex parsing       │  - ordered keywords   │
//! │  - lighten / darken  │  - healthtech rule    │
//! │  - linear / gamma    │  - design patterns    │
//! ├──────────────────────┴───────────────────────┤
//! │  Design Context      │  Design Vocabulary    │
//! │  - initials          │  - categories         │
//! │  - complexity        │  - engines            │
//! │  - scale factor      │  - premium layouts    │
//! └──────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod color;
pub mod context;
pub mod design;
pub mod error;
pub mod industry;
pub mod palette;

pub use color::{BlendMode, Rgba};
pub use context::{analyze, initials, style_complexity, DesignApproach, DesignContext};
pub use design::{Design, DesignChoice, Engine, LogoCategory, PremiumComposition, SUB_VARIANT_COUNT};
pub use error::{CoreError, CoreResult};
pub use industry::{classify, DesignPattern, IndustryCategory, IndustryFamily};
pub use palette::{build_palette, ColorSystem};

/// Logo core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
