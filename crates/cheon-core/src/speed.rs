//! Pointer easing presets.

/// How quickly the cloth chases the pointer and relaxes after release.
///
/// All rates are exponential smoothing rates per second: the eased value
/// covers `1 - e^-rate` of the remaining gap each second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EaseSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl EaseSpeed {
    /// Rate at which the eased pointer chases the raw pointer.
    pub fn chase_rate(self) -> f32 {
        match self {
            Self::Slow => 8.0,
            Self::Medium => 14.0,
            Self::Fast => 24.0,
        }
    }

    /// Rate at which the intensity envelope rises while the pointer is held.
    pub fn rise_rate(self) -> f32 {
        match self {
            Self::Slow => 5.0,
            Self::Medium => 9.0,
            Self::Fast => 16.0,
        }
    }

    /// Rate at which the envelope decays back to rest after release.
    pub fn decay_rate(self) -> f32 {
        match self {
            Self::Slow => 2.5,
            Self::Medium => 4.5,
            Self::Fast => 8.0,
        }
    }

    /// Cycle to the next speed.
    pub fn next(self) -> Self {
        match self {
            Self::Slow => Self::Medium,
            Self::Medium => Self::Fast,
            Self::Fast => Self::Slow,
        }
    }

    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Medium => "medium",
            Self::Fast => "fast",
        }
    }

    /// Look up a speed by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "slow" => Some(Self::Slow),
            "medium" => Some(Self::Medium),
            "fast" => Some(Self::Fast),
            _ => None,
        }
    }
}
