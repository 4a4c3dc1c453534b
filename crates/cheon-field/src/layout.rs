//! Grid layout: the rest geometry of every cell.
//!
//! Cells tile the container horizontally between `padding` side margins
//! with `spacing` gaps; the grid block as a whole is centered vertically.

use cheon_core::{GridConfig, Size, Vec2};

/// Edge length of a cell at the given container size.
///
/// Uniform across the grid: the horizontal span left after padding and
/// inter-cell gaps, divided evenly between columns.
pub fn cell_size(cfg: &GridConfig, container: Size) -> f32 {
    (container.width - 2.0 * cfg.padding - cfg.spacing * (cfg.cols as f32 - 1.0))
        / cfg.cols as f32
}

/// Total height of the grid block for the given cell size.
pub fn grid_height(cfg: &GridConfig, cell: f32) -> f32 {
    cfg.rows as f32 * (cell + cfg.spacing) - cfg.spacing
}

/// Rest center of the cell at `(row, col)`.
pub fn rest_center(cfg: &GridConfig, container: Size, cell: f32, row: u16, col: u16) -> Vec2 {
    let x = col as f32 * (cell + cfg.spacing) + cell / 2.0 + cfg.padding;
    let y = row as f32 * (cell + cfg.spacing)
        + cell / 2.0
        + (container.height - grid_height(cfg, cell)) / 2.0;
    Vec2::new(x, y)
}
