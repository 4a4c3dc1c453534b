//! Angular (sweep) gradient sampling for the overlay pass.

use cheon_core::{Rgb, Vec2};

/// A multi-stop sweep gradient around a center point.
///
/// Stops are spaced evenly over one revolution starting at the positive
/// x axis; a closed sweep repeats the first color as the last stop.
#[derive(Debug, Clone)]
pub struct AngularGradient {
    center: Vec2,
    stops: Vec<Rgb>,
}

impl AngularGradient {
    pub fn new(center: Vec2, stops: Vec<Rgb>) -> Self {
        Self { center, stops }
    }

    /// Color at `p`, by its angle around the gradient center.
    pub fn sample(&self, p: Vec2) -> Rgb {
        let d = p - self.center;
        let turn = d.y.atan2(d.x) / std::f32::consts::TAU;
        self.sample_turn(turn)
    }

    /// Color at `turn` revolutions around the sweep; wraps outside `[0, 1)`.
    pub fn sample_turn(&self, turn: f32) -> Rgb {
        match self.stops.len() {
            0 => Rgb::default(),
            1 => self.stops[0],
            n => {
                let scaled = turn.rem_euclid(1.0) * (n - 1) as f32;
                let idx = (scaled as usize).min(n - 2);
                let t = scaled - idx as f32;
                self.stops[idx].lerp(self.stops[idx + 1], t)
            }
        }
    }
}
