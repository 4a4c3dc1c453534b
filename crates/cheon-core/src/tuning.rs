//! Tuning constants for the displacement field.

/// Visual tuning for pointer influence. All distances are logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldTuning {
    /// Influence radius: beyond this distance the pointer no longer
    /// displaces a cell.
    pub max_distance: f32,
    /// Fraction of the pointer delta applied as displacement at full
    /// strength.
    pub force_factor: f32,
    /// Falloff shaping exponent for displacement strength.
    pub falloff: f32,
    /// Distance at which cell size recovers to its rest value.
    pub scale_reference: f32,
    /// Lower bound on the size scale next to the pointer.
    pub scale_floor: f32,
}

impl Default for FieldTuning {
    fn default() -> Self {
        Self {
            max_distance: 180.0,
            force_factor: 0.7,
            falloff: 2.4,
            scale_reference: 80.0,
            scale_floor: 0.2,
        }
    }
}
