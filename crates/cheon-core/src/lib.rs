//! Core types for the cheon cloth effect.
//!
//! Shared leaf types used by every crate in the workspace: 2-D geometry,
//! grid configuration, field tuning, colors and palettes, and the pointer
//! easing presets.

mod color;
mod geometry;
mod grid;
mod palette;
mod speed;
mod tuning;

pub use color::Rgb;
pub use geometry::{PointerState, Size, Vec2};
pub use grid::GridConfig;
pub use palette::Palette;
pub use speed::EaseSpeed;
pub use tuning::FieldTuning;
