//! Gradient palettes for the overlay pass.

use crate::color::Rgb;

/// Built-in gradient palettes.
///
/// Stop lists close the sweep by repeating the first color at the end, so
/// the angular gradient wraps without a seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// The classic cloth gradient: red, teal, blue, sea green, indigo.
    #[default]
    Spectrum,
    /// Deep blues rising to foam green.
    Ocean,
    /// Smoldering reds and golds.
    Ember,
    /// Neutral grays.
    Mono,
}

impl Palette {
    /// Gradient stops for this palette.
    pub fn stops(self) -> Vec<Rgb> {
        let hex: &[&str] = match self {
            Self::Spectrum => &["FF3B30", "30B0C7", "007AFF", "6A9D94", "5856D6", "FF3B30"],
            Self::Ocean => &["0B1D3A", "1C5D99", "3FA7D6", "96E6B3", "0B1D3A"],
            Self::Ember => &["2B0A02", "C1292E", "F15A22", "FFB400", "2B0A02"],
            Self::Mono => &["3A3A3C", "8E8E93", "E5E5EA", "3A3A3C"],
        };
        hex.iter().map(|h| Rgb::from_hex(h)).collect()
    }

    /// Cycle to the next palette.
    pub fn next(self) -> Self {
        match self {
            Self::Spectrum => Self::Ocean,
            Self::Ocean => Self::Ember,
            Self::Ember => Self::Mono,
            Self::Mono => Self::Spectrum,
        }
    }

    /// Short display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Spectrum => "spectrum",
            Self::Ocean => "ocean",
            Self::Ember => "ember",
            Self::Mono => "mono",
        }
    }

    /// Look up a palette by its display name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "spectrum" => Some(Self::Spectrum),
            "ocean" => Some(Self::Ocean),
            "ember" => Some(Self::Ember),
            "mono" => Some(Self::Mono),
            _ => None,
        }
    }
}
