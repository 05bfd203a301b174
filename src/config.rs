// src/config.rs

//! Defines the configuration structures for `mandel-term`.
//!
//! Every field has a default, and the defaults reproduce the fixed program:
//! a 1000x1000 raster with an iteration cap of 1000 over the
//! `[-2.5, 1.0] x [-1.0, 1.0]` viewport, drawn with `" .+*"`.
//!
//! A JSON file named by the `MANDEL_TERM_CONFIG` environment variable may
//! override any subset of fields. Without it the defaults are used as-is.

use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::density::Palette;
use crate::renderer::RasterSize;
use crate::viewport::Viewport;

/// Environment variable naming an optional JSON configuration file.
pub const CONFIG_PATH_ENV: &str = "MANDEL_TERM_CONFIG";

/// Process-wide configuration, loaded on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration for a rendering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)] // Apply default values for the entire struct if a field is missing.
pub struct Config {
    /// Raster dimensions and iteration budget.
    pub raster: RasterConfig,
    /// Region of the complex plane mapped onto the raster.
    pub viewport: Viewport,
    /// Characters for the four density levels, lightest first.
    pub palette: Palette,
}

// --- Raster Configuration ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RasterConfig {
    /// Number of columns (characters per line).
    pub width: usize,
    /// Number of rows (lines).
    pub height: usize,
    /// Iteration cap per sample point.
    pub max_iter: u32,
}

impl Default for RasterConfig {
    fn default() -> Self {
        RasterConfig {
            width: 1000,
            height: 1000,
            max_iter: 1000,
        }
    }
}

impl From<RasterConfig> for RasterSize {
    fn from(cfg: RasterConfig) -> Self {
        RasterSize::new(cfg.width, cfg.height, cfg.max_iter)
    }
}

impl Config {
    /// Parses a configuration from JSON, filling missing fields with defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).context("Failed to parse configuration JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses the JSON file at `path`.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Loads from `MANDEL_TERM_CONFIG` if set, otherwise returns the defaults.
    ///
    /// A file that cannot be loaded is logged and ignored.
    pub fn load_or_default() -> Self {
        let Some(path) = std::env::var_os(CONFIG_PATH_ENV) else {
            return Config::default();
        };
        let path = Path::new(&path);
        match Self::load_from_path(path) {
            Ok(config) => {
                info!("Configuration loaded from {}", path.display());
                config
            }
            Err(e) => {
                warn!("{:#}. Falling back to default configuration.", e);
                Config::default()
            }
        }
    }

    /// Rejects values the renderer cannot draw.
    pub fn validate(&self) -> Result<()> {
        RasterSize::from(self.raster).validate()?;
        self.viewport.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{Config, RasterConfig};
    use crate::density::Palette;
    use crate::viewport::Viewport;
    use std::path::Path;
    use test_log::test;

    #[test]
    fn defaults_match_fixed_program() {
        let config = Config::default();
        assert_eq!(
            config.raster,
            RasterConfig {
                width: 1000,
                height: 1000,
                max_iter: 1000
            }
        );
        assert_eq!(config.viewport, Viewport::new(-2.5, 1.0, -1.0, 1.0));
        assert_eq!(config.palette, Palette::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_is_all_defaults() {
        assert_eq!(Config::from_json_str("{}").unwrap(), Config::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            Config::from_json_str(r#"{"raster": {"width": 80}, "viewport": {"xmin": -2.0}}"#)
                .unwrap();
        assert_eq!(config.raster.width, 80);
        assert_eq!(config.raster.height, 1000);
        assert_eq!(config.raster.max_iter, 1000);
        assert_eq!(config.viewport.xmin, -2.0);
        assert_eq!(config.viewport.xmax, 1.0);
    }

    #[test]
    fn palette_override() {
        let config = Config::from_json_str(r#"{"palette": "_-=#"}"#).unwrap();
        assert_eq!(config.palette.chars(), ['_', '-', '=', '#']);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_json_str(r#"{"raster": {"width": 0}}"#).is_err());
        assert!(Config::from_json_str(r#"{"raster": {"max_iter": -5}}"#).is_err());
        assert!(Config::from_json_str(r#"{"viewport": {"ymin": 2.0}}"#).is_err());
        assert!(Config::from_json_str(r#"{"palette": "**"}"#).is_err());
        assert!(Config::from_json_str("not json").is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = Config::load_from_path(Path::new("/nonexistent/mandel-term.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/mandel-term.json"));
    }

    #[test]
    fn serializes_back_to_json() {
        let json = serde_json::to_string(&Config::default()).unwrap();
        assert_eq!(Config::from_json_str(&json).unwrap(), Config::default());
    }
}
