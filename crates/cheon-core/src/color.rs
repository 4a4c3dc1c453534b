//! RGB color with hex parsing for palettes and gradients.

use ratatui::style::Color;

/// A color with components normalized to 0.0-1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string: `"#RRGGBB"` or `"RGB"` shorthand, the `#`
    /// optional, surrounding whitespace trimmed. Three-character codes
    /// expand by duplicating each digit. Anything not covered by that form
    /// yields the zero-initialized color; parsing never fails.
    pub fn from_hex(hex: &str) -> Self {
        let clean = hex.trim().replace('#', "");
        let clean = if clean.len() == 3 {
            clean.chars().flat_map(|c| [c, c]).collect()
        } else {
            clean
        };

        let rgb = if clean.len() == 6 {
            u32::from_str_radix(&clean, 16).unwrap_or(0)
        } else {
            0
        };

        Self {
            r: ((rgb >> 16) & 0xFF) as f32 / 255.0,
            g: ((rgb >> 8) & 0xFF) as f32 / 255.0,
            b: (rgb & 0xFF) as f32 / 255.0,
        }
    }

    /// Linear interpolation from `self` (`t = 0`) to `other` (`t = 1`).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        }
    }

    /// Convert to a terminal color.
    pub fn to_color(self) -> Color {
        Color::Rgb(
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(color: Rgb, r: f32, g: f32, b: f32) {
        assert!((color.r - r).abs() < 1e-3, "r: {} vs {}", color.r, r);
        assert!((color.g - g).abs() < 1e-3, "g: {} vs {}", color.g, g);
        assert!((color.b - b).abs() < 1e-3, "b: {} vs {}", color.b, b);
    }

    #[test]
    fn test_parse_full_hex() {
        assert_close(Rgb::from_hex("#FF0000"), 1.0, 0.0, 0.0);
        assert_close(Rgb::from_hex("00FF00"), 0.0, 1.0, 0.0);
    }

    #[test]
    fn test_parse_shorthand_expands() {
        assert_eq!(Rgb::from_hex("F00"), Rgb::from_hex("#FF0000"));
        assert_eq!(Rgb::from_hex("#abc"), Rgb::from_hex("AABBCC"));
    }

    #[test]
    fn test_parse_sea_green() {
        assert_close(Rgb::from_hex("6A9D94"), 0.416, 0.616, 0.580);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(Rgb::from_hex("  #FF0000\n"), Rgb::from_hex("FF0000"));
    }

    #[test]
    fn test_malformed_defaults_to_zero() {
        assert_eq!(Rgb::from_hex("not a color"), Rgb::default());
        assert_eq!(Rgb::from_hex(""), Rgb::default());
        assert_eq!(Rgb::from_hex("#12"), Rgb::default());
    }

    #[test]
    fn test_to_color_scales_to_bytes() {
        assert_eq!(Rgb::new(1.0, 0.0, 0.5).to_color(), Color::Rgb(255, 0, 127));
    }
}
