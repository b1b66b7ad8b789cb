//! # Saorsa Logo Renderer
//!
//! Procedural raster logos built on tiny-skia. Every design is drawn in a
//! 1000×1000 design space and scaled to the requested pixel size.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     LogoStudio                       │
//! │   classify → palette → plan → render → PNG → base64  │
//! ├──────────────┬───────────────────┬───────────────────┤
//! │ Orchestrator │    Generators     │   Cache           │
//! │ - shuffle    │ - category (6×3)  │ - SHA-256 keys    │
//! │ - fallback   │ - industry (×3)   │ - LRU bound       │
//! │ - placeholder│ - premium (5)     │ - hit/miss stats  │
//! ├──────────────┴───────────────────┴───────────────────┤
//! │   Primitives · Shapes · Typography · Canvas · Fonts  │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use logo_renderer::{LogoRequest, LogoStudio, StudioConfig};
//!
//! let studio = LogoStudio::new(StudioConfig::default());
//! let request = LogoRequest::new("Rose Garden", "floral bouquet shop")
//!     .with_colors(["#EC4899", "#10B981", "#A855F7"])
//!     .with_variations(3);
//! for outcome in studio.generate_variations(&request) {
//!     println!("{}: {} bytes of base64", outcome.choice, outcome.image.len());
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cache;
pub mod canvas;
pub mod error;
pub mod export;
pub mod generators;
pub mod orchestrator;
pub mod primitives;
pub mod shapes;
pub mod studio;
pub mod text;
pub mod typography;

pub use cache::{CacheStats, LogoCache, LogoCacheConfig, LogoKey, SyncLogoCache, GENERATOR_VERSION};
pub use canvas::{Bounds, Canvas, Point, DESIGN_SIZE};
pub use error::{RenderError, RenderResult};
pub use export::{encode_png, to_base64, to_data_uri, PngCompression};
pub use generators::{render_design, RenderContext};
pub use orchestrator::{plan_variations, render_fallback, PLACEHOLDER_PNG_BASE64};
pub use shapes::Shape;
pub use studio::{LogoRequest, LogoStudio, StudioConfig, VariationOutcome, DEFAULT_CANVAS_SIZE};
pub use text::{FontBook, FontConfig, FontWeight};

/// Renderer version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
