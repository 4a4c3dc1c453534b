//! Per-frame quad computation: one rounded rectangle per cell.

use cheon_core::{FieldTuning, GridConfig, PointerState, Size, Vec2};

use crate::displace::displace;
use crate::layout;

/// One rendered cell: a rounded rectangle centered at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellQuad {
    /// Rendered center in logical units.
    pub center: Vec2,
    /// Rendered edge length.
    pub size: f32,
    /// Corner radius, clamped to half the edge when sampling.
    pub radius: f32,
}

impl CellQuad {
    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let half = self.size / 2.0;
        (
            Vec2::new(self.center.x - half, self.center.y - half),
            Vec2::new(self.center.x + half, self.center.y + half),
        )
    }

    /// Signed distance from `p` to the rounded-rectangle boundary.
    /// Negative inside, positive outside.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        let half = self.size / 2.0;
        let r = self.radius.min(half);
        let qx = (p.x - self.center.x).abs() - (half - r);
        let qy = (p.y - self.center.y).abs() - (half - r);
        let outside = Vec2::new(qx.max(0.0), qy.max(0.0)).length();
        outside + qx.max(qy).min(0.0) - r
    }

    /// Whether `p` lies inside the rounded rectangle.
    pub fn contains(&self, p: Vec2) -> bool {
        self.signed_distance(p) <= 0.0
    }

    /// Blend between two quads: `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &CellQuad, t: f32) -> CellQuad {
        CellQuad {
            center: self.center.lerp(other.center, t),
            size: self.size + (other.size - self.size) * t,
            radius: self.radius + (other.radius - self.radius) * t,
        }
    }
}

/// Compute the rendered quad for every cell, row-major.
pub fn compute_frame(
    cfg: &GridConfig,
    tuning: &FieldTuning,
    container: Size,
    pointer: PointerState,
) -> Vec<CellQuad> {
    let cell = layout::cell_size(cfg, container);
    let mut quads = Vec::with_capacity(cfg.rows as usize * cfg.cols as usize);

    for row in 0..cfg.rows {
        for col in 0..cfg.cols {
            let rest = layout::rest_center(cfg, container, cell, row, col);
            let (center, size) = displace(rest, cell, pointer, tuning);
            quads.push(CellQuad {
                center,
                size,
                radius: cfg.corner_radius,
            });
        }
    }

    quads
}
