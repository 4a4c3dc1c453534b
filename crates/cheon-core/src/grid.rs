//! Grid configuration.

/// Immutable grid shape, fixed for the lifetime of the view.
///
/// `rows` and `cols` must be greater than zero; a degenerate config
/// produces degenerate geometry rather than an error. The config layer
/// sanitizes its own input, so values arriving here are already valid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Number of cell rows.
    pub rows: u16,
    /// Number of cell columns.
    pub cols: u16,
    /// Margin between the grid and the container edge, in logical units.
    pub padding: f32,
    /// Gap between adjacent cells, in logical units.
    pub spacing: f32,
    /// Corner radius of each cell.
    pub corner_radius: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 12,
            cols: 20,
            padding: 24.0,
            spacing: 2.4,
            corner_radius: 5.0,
        }
    }
}
