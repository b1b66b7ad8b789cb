//! Primitive drawing library.
//!
//! Each primitive paints one icon or motif onto a [`Canvas`](crate::canvas::Canvas)
//! around a center point, with every proportion derived from a single `size`.
//! Primitives never allocate canvases and never fail; degenerate geometry is
//! skipped by the canvas itself.
//!
//! ```text
//! ┌────────────┬────────────┬────────────┬────────────┐
//! │  medical   │ botanical  │  culinary  │    tech    │
//! ├────────────┼────────────┼────────────┼────────────┤
//! │  commerce  │  abstract  │  learning  │            │
//! └────────────┴────────────┴────────────┴────────────┘
//! ```

pub mod abstract_art;
pub mod botanical;
pub mod commerce;
pub mod culinary;
pub mod learning;
pub mod medical;
pub mod tech;
