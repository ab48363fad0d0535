//! Configuration management for output and plotting parameters
//!
//! This module provides runtime configuration loading from JSON files,
//! so numeric formatting, artifact naming, strict sampling tolerance and the
//! plotting tool can be adjusted without recompilation.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::series::Delimiter;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "fft_spectrum.json";

/// Complete application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub plot: PlotConfig,
}

/// Sampling validation parameters
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SamplingConfig {
    /// Allowed deviation of a time delta from the period, relative to the period.
    /// Only consulted in strict mode.
    pub relative_tolerance: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            relative_tolerance: 1e-6,
        }
    }
}

/// Result table formatting and naming
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Digits after the decimal point in scientific notation
    pub precision: usize,
    /// Column separator for the result tables
    pub delimiter: Delimiter,
    /// Suffix appended to the input basename for the magnitude table
    pub magnitude_suffix: String,
    /// Suffix appended to the input basename for the phase table
    pub phase_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 18,
            delimiter: Delimiter::Whitespace,
            magnitude_suffix: "_fft.dat".to_string(),
            phase_suffix: "_phase.dat".to_string(),
        }
    }
}

/// External plotting tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlotConfig {
    /// Plotting program, invoked as `<program> <script>`
    pub program: String,
    /// Image viewer, invoked as `<viewer> <image>` unless silent
    pub viewer: String,
    pub font_size: u32,
    pub xlabel: String,
    pub image_suffix: String,
    pub script_suffix: String,
}

impl Default for PlotConfig {
    fn default() -> Self {
        let viewer = if cfg!(target_os = "macos") {
            "open"
        } else {
            "xdg-open"
        };
        Self {
            program: "gnuplot".to_string(),
            viewer: viewer.to_string(),
            font_size: 24,
            xlabel: "Frequency".to_string(),
            image_suffix: "_fft.eps".to_string(),
            script_suffix: "_fft.gp".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// The parsed configuration, or the defaults if the file doesn't exist or
    /// the JSON is invalid
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => {
                    log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                    config
                }
                Err(err) => {
                    log::warn!(
                        "[Config] Failed to parse JSON from {:?}: {}. Using defaults.",
                        path.as_ref(),
                        err
                    );
                    Self::default()
                }
            },
            Err(err) => {
                log::debug!(
                    "[Config] No config file at {:?} ({}). Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load a configuration file the caller named explicitly
    ///
    /// Unlike [`AppConfig::load_from_file`], a missing or invalid file is an
    /// error rather than a silent fallback to defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        log::info!("[Config] Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration from the working directory
    pub fn load() -> Self {
        Self::load_from_file(DEFAULT_CONFIG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.sampling.relative_tolerance, 1e-6);
        assert_eq!(config.output.precision, 18);
        assert_eq!(config.output.delimiter, Delimiter::Whitespace);
        assert_eq!(config.output.magnitude_suffix, "_fft.dat");
        assert_eq!(config.output.phase_suffix, "_phase.dat");
        assert_eq!(config.plot.program, "gnuplot");
        assert_eq!(config.plot.font_size, 24);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = AppConfig::default();
        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"output": {"precision": 6, "delimiter": "comma"}}"#).unwrap();
        assert_eq!(parsed.output.precision, 6);
        assert_eq!(parsed.output.delimiter, Delimiter::Comma);
        assert_eq!(parsed.output.phase_suffix, "_phase.dat");
        assert_eq!(parsed.plot, PlotConfig::default());
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = AppConfig::load_from_file("/nonexistent/fft_spectrum.json");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_json_falls_back_to_defaults() {
        let path = std::env::temp_dir().join(format!(
            "fft-spectrum-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "{ not json").unwrap();
        let config = AppConfig::load_from_file(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let err = AppConfig::from_file("/nonexistent/typo.json").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/typo.json"));
    }

    #[test]
    fn test_explicit_file_must_parse() {
        let path = std::env::temp_dir().join(format!(
            "fft-spectrum-strict-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"output": {"precision": "six"}}"#).unwrap();
        let result = AppConfig::from_file(&path);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_file_loads_values() {
        let path = std::env::temp_dir().join(format!(
            "fft-spectrum-good-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"output": {"precision": 4}}"#).unwrap();
        let config = AppConfig::from_file(&path);
        let _ = fs::remove_file(&path);
        assert_eq!(config.unwrap().output.precision, 4);
    }
}
