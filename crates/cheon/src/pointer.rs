//! Eased pointer tracking.
//!
//! The displacement function is pure; smoothing lives here. The tracker
//! chases the raw pointer with an exponential ease and keeps an intensity
//! envelope that rises while a button is held and decays after release,
//! so the cloth relaxes back to rest instead of snapping.

use cheon_core::{EaseSpeed, Vec2};

/// Envelope level below which the pointer is dropped entirely.
const REST_EPSILON: f32 = 0.01;

/// Smoothed pointer state fed to the renderer each frame.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Raw pointer target from the input boundary.
    target: Option<Vec2>,
    /// Eased position handed to the renderer.
    position: Option<Vec2>,
    /// Rest-to-displaced blend level.
    intensity: f32,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin or continue an interaction at `p`.
    pub fn press(&mut self, p: Vec2) {
        if self.position.is_none() {
            self.position = Some(p);
        }
        self.target = Some(p);
    }

    /// End the interaction; the envelope decays from here.
    pub fn release(&mut self) {
        self.target = None;
    }

    /// Advance easing by `dt` seconds.
    pub fn advance(&mut self, dt: f32, speed: EaseSpeed) {
        match self.target {
            Some(target) => {
                let chase = 1.0 - (-dt * speed.chase_rate()).exp();
                if let Some(position) = self.position.as_mut() {
                    *position = position.lerp(target, chase);
                }
                let rise = 1.0 - (-dt * speed.rise_rate()).exp();
                self.intensity += (1.0 - self.intensity) * rise;
            }
            None => {
                let decay = 1.0 - (-dt * speed.decay_rate()).exp();
                self.intensity -= self.intensity * decay;
                if self.intensity < REST_EPSILON {
                    self.intensity = 0.0;
                    self.position = None;
                }
            }
        }
    }

    /// Eased pointer position, if an interaction is live or still relaxing.
    pub fn position(&self) -> Option<Vec2> {
        self.position
    }

    /// Rest-to-displaced blend level in `[0, 1]`.
    pub fn intensity(&self) -> f32 {
        self.intensity
    }
}
