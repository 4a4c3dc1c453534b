//! The pure displacement function.
//!
//! Pointer proximity pushes a cell toward the pointer and shrinks it.
//! Same inputs always produce the same outputs; smoothing and easing
//! belong to the caller.

use cheon_core::{FieldTuning, PointerState, Vec2};

/// Displace one cell. Returns the rendered center and size for this frame.
///
/// Identity when no pointer is active. Inside the influence radius the
/// cell moves toward the pointer by a strength that falls off with
/// distance; size shrinks near the pointer whether or not the cell was
/// displaced.
pub fn displace(
    rest: Vec2,
    rest_size: f32,
    pointer: PointerState,
    tuning: &FieldTuning,
) -> (Vec2, f32) {
    let Some(touch) = pointer else {
        return (rest, rest_size);
    };

    let delta = touch - rest;
    let distance = delta.length();

    let mut center = rest;
    if distance < tuning.max_distance {
        let strength = (1.0 - distance / tuning.max_distance).powf(tuning.falloff);
        center = rest + delta * (strength * tuning.force_factor);
    }

    let scale = (distance / tuning.scale_reference).clamp(tuning.scale_floor, 1.0);

    (center, rest_size * scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: f32 = 35.32;

    fn rest() -> Vec2 {
        Vec2::new(400.0, 240.0)
    }

    #[test]
    fn test_absent_pointer_is_identity() {
        let (center, size) = displace(rest(), SIZE, None, &FieldTuning::default());
        assert_eq!(center, rest());
        assert_eq!(size, SIZE);
    }

    #[test]
    fn test_pointer_on_rest_center_keeps_position_at_minimum_scale() {
        let tuning = FieldTuning::default();
        let (center, size) = displace(rest(), SIZE, Some(rest()), &tuning);
        // Distance zero: full strength applied to a zero delta.
        assert_eq!(center, rest());
        assert!((size - SIZE * tuning.scale_floor).abs() < 1e-4);
    }

    #[test]
    fn test_beyond_influence_radius_position_is_unchanged() {
        let tuning = FieldTuning::default();
        let touch = Some(rest() + Vec2::new(tuning.max_distance + 10.0, 0.0));
        let (center, size) = displace(rest(), SIZE, touch, &tuning);
        assert_eq!(center, rest());
        // Size scaling still applies, saturated at 1.0 out here.
        assert_eq!(size, SIZE);
    }

    #[test]
    fn test_displacement_pulls_toward_pointer() {
        let tuning = FieldTuning::default();
        let touch = rest() + Vec2::new(60.0, 0.0);
        let (center, _) = displace(rest(), SIZE, Some(touch), &tuning);
        assert!(center.x > rest().x);
        assert!(center.x < touch.x);
        assert_eq!(center.y, rest().y);
    }

    #[test]
    fn test_strength_falls_off_with_distance() {
        let tuning = FieldTuning::default();
        let mut previous_ratio = f32::INFINITY;
        for distance in [10.0_f32, 40.0, 80.0, 120.0, 160.0, 179.0] {
            let touch = rest() + Vec2::new(distance, 0.0);
            let (center, _) = displace(rest(), SIZE, Some(touch), &tuning);
            let ratio = (center - rest()).length() / distance;
            assert!(
                ratio <= previous_ratio + 1e-5,
                "ratio grew at distance {distance}"
            );
            previous_ratio = ratio;
        }
    }

    #[test]
    fn test_scale_is_clamped() {
        let tuning = FieldTuning::default();
        for distance in [0.0_f32, 5.0, 16.0, 40.0, 80.0, 300.0] {
            let touch = rest() + Vec2::new(distance, 0.0);
            let (_, size) = displace(rest(), SIZE, Some(touch), &tuning);
            let scale = size / SIZE;
            assert!(scale >= tuning.scale_floor - 1e-5);
            assert!(scale <= 1.0 + 1e-5);
        }
    }
}
