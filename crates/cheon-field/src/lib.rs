//! Pointer-reactive displacement field rendering for the cheon effect.
//!
//! A fixed logical grid of rounded cells is recomputed every frame: cells
//! near the pointer displace toward it and shrink, the silhouette is
//! rasterized onto the terminal as an alpha mask, and an angular gradient
//! is composited through that mask.

mod displace;
mod frame;
mod gradient;
mod layout;
mod raster;

pub use displace::displace;
pub use frame::{CellQuad, compute_frame};
pub use gradient::AngularGradient;
pub use layout::{cell_size, grid_height, rest_center};
pub use raster::{Scene, UNITS_PER_COL, UNITS_PER_ROW, container_size, render};
