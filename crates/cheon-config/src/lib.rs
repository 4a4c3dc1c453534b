//! Configuration loading for the cheon cloth effect.
//!
//! Reads `config.toml` from the platform config directory. Every section
//! and key is optional; a missing file means built-in defaults, and a
//! malformed file is reported as an error before the terminal is taken
//! over.

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use cheon_core::{EaseSpeed, FieldTuning, GridConfig, Palette, Rgb};

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub grid: GridSection,
    pub field: FieldSection,
    pub colors: ColorSection,
    pub animation: AnimationSection,
}

/// `[grid]` section: grid shape and cell styling.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GridSection {
    pub rows: u16,
    pub cols: u16,
    pub padding: f32,
    pub spacing: f32,
    pub corner_radius: f32,
}

impl Default for GridSection {
    fn default() -> Self {
        let grid = GridConfig::default();
        Self {
            rows: grid.rows,
            cols: grid.cols,
            padding: grid.padding,
            spacing: grid.spacing,
            corner_radius: grid.corner_radius,
        }
    }
}

/// `[field]` section: displacement tuning.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FieldSection {
    pub max_distance: f32,
    pub force_factor: f32,
    pub falloff: f32,
    pub scale_reference: f32,
    pub scale_floor: f32,
}

impl Default for FieldSection {
    fn default() -> Self {
        let tuning = FieldTuning::default();
        Self {
            max_distance: tuning.max_distance,
            force_factor: tuning.force_factor,
            falloff: tuning.falloff,
            scale_reference: tuning.scale_reference,
            scale_floor: tuning.scale_floor,
        }
    }
}

/// `[colors]` section: gradient palette selection.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ColorSection {
    /// Named preset palette.
    pub palette: Option<String>,
    /// Custom gradient stops as hex strings; overrides `palette` when at
    /// least two stops are given.
    pub stops: Vec<String>,
}

/// `[animation]` section: pointer easing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnimationSection {
    pub speed: Option<String>,
}

impl Config {
    /// Load the config file, falling back to defaults when none exists.
    pub fn load() -> color_eyre::Result<Self> {
        let Some(path) = Self::path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(&path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    /// Path of the config file, if a home directory can be resolved.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "cheon").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Grid configuration, with degenerate dimensions sanitized here and
    /// only here; the layout itself keeps its caller contract.
    pub fn grid(&self) -> GridConfig {
        GridConfig {
            rows: self.grid.rows.max(1),
            cols: self.grid.cols.max(1),
            padding: self.grid.padding,
            spacing: self.grid.spacing,
            corner_radius: self.grid.corner_radius,
        }
    }

    /// Displacement field tuning.
    pub fn tuning(&self) -> FieldTuning {
        FieldTuning {
            max_distance: self.field.max_distance,
            force_factor: self.field.force_factor,
            falloff: self.field.falloff,
            scale_reference: self.field.scale_reference,
            scale_floor: self.field.scale_floor,
        }
    }

    /// Starting palette preset. Unknown names fall back to the default.
    pub fn palette(&self) -> Palette {
        self.colors
            .palette
            .as_deref()
            .and_then(Palette::from_name)
            .unwrap_or_default()
    }

    /// Gradient stops: the custom hex stops when configured, else the
    /// preset's. Malformed hex entries become the zero color rather than
    /// an error.
    pub fn stops(&self) -> Vec<Rgb> {
        if self.colors.stops.len() >= 2 {
            self.colors.stops.iter().map(|s| Rgb::from_hex(s)).collect()
        } else {
            self.palette().stops()
        }
    }

    /// Pointer easing speed. Unknown names fall back to the default.
    pub fn speed(&self) -> EaseSpeed {
        self.animation
            .speed
            .as_deref()
            .and_then(EaseSpeed::from_name)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_core_defaults() {
        let config = Config::default();
        assert_eq!(config.grid(), GridConfig::default());
        assert_eq!(config.tuning(), FieldTuning::default());
        assert_eq!(config.palette(), Palette::default());
        assert_eq!(config.speed(), EaseSpeed::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults_elsewhere() {
        let config: Config = toml::from_str(
            r#"
            [grid]
            rows = 8

            [animation]
            speed = "fast"
            "#,
        )
        .unwrap();

        assert_eq!(config.grid().rows, 8);
        assert_eq!(config.grid().cols, GridConfig::default().cols);
        assert_eq!(config.tuning(), FieldTuning::default());
        assert_eq!(config.speed(), EaseSpeed::Fast);
    }

    #[test]
    fn test_degenerate_grid_is_sanitized() {
        let config: Config = toml::from_str("[grid]\nrows = 0\ncols = 0\n").unwrap();
        assert_eq!(config.grid().rows, 1);
        assert_eq!(config.grid().cols, 1);
    }

    #[test]
    fn test_custom_stops_override_palette() {
        let config: Config = toml::from_str(
            r##"
            [colors]
            palette = "ocean"
            stops = ["#FF0000", "00FF00", "bad", "#FF0000"]
            "##,
        )
        .unwrap();

        let stops = config.stops();
        assert_eq!(stops.len(), 4);
        assert_eq!(stops[0], Rgb::from_hex("FF0000"));
        // Malformed entries parse to the zero color, never an error.
        assert_eq!(stops[2], Rgb::default());
    }

    #[test]
    fn test_single_custom_stop_falls_back_to_palette() {
        let config: Config = toml::from_str(
            r##"
            [colors]
            palette = "ember"
            stops = ["#FF0000"]
            "##,
        )
        .unwrap();

        assert_eq!(config.stops(), Palette::Ember.stops());
    }

    #[test]
    fn test_unknown_names_fall_back() {
        let config: Config = toml::from_str(
            r#"
            [colors]
            palette = "nonexistent"

            [animation]
            speed = "warp"
            "#,
        )
        .unwrap();

        assert_eq!(config.palette(), Palette::default());
        assert_eq!(config.speed(), EaseSpeed::default());
    }
}
