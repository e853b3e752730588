//! Segue configuration system
//!
//! This crate provides centralized configuration management for Segue,
//! loading settings from `segue.toml` as an alternative to environment
//! variables.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use segue_core::Timeout;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The config file could not be parsed.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for Segue
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SegueConfig {
    /// Transition timing and marker settings
    pub transition: TransitionConfig,
    /// Demo application settings
    pub demo: DemoConfig,
}

/// Transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Enter/exit durations: a bare number or an `{enter, exit}` table
    pub timeout: Timeout,
    /// Marker-name base used by the class-decorating wrapper
    pub class: String,
    /// Frame delay override for hosts not rendering at 60 Hz
    pub frame_delay_ms: Option<f32>,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How long the element stays fully entered before the demo hides it
    pub hold_ms: f32,
    /// Number of show/hide cycles to run
    pub cycles: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            timeout: Timeout::uniform(300.0),
            class: "fade".to_string(),
            frame_delay_ms: None,
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            hold_ms: 400.0,
            cycles: 2,
        }
    }
}

impl SegueConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the segue.toml configuration file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (segue.toml in the
    /// current directory) or return default configuration if file doesn't
    /// exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("segue.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("SEGUE_TIMEOUT") {
            if let Ok(ms) = val.parse::<f32>() {
                self.transition.timeout = Timeout::uniform(ms);
            }
        }
        if let (Ok(enter), Ok(exit)) = (
            std::env::var("SEGUE_ENTER_MS"),
            std::env::var("SEGUE_EXIT_MS"),
        ) {
            if let (Ok(enter), Ok(exit)) = (enter.parse::<f32>(), exit.parse::<f32>()) {
                self.transition.timeout = Timeout::per_direction(enter, exit);
            }
        }
        if let Ok(class) = std::env::var("SEGUE_CLASS") {
            self.transition.class = class;
        }
        if let Ok(val) = std::env::var("SEGUE_FRAME_DELAY_MS") {
            if let Ok(delay) = val.parse::<f32>() {
                self.transition.frame_delay_ms = Some(delay);
            }
        }

        // Demo settings
        if let Ok(val) = std::env::var("SEGUE_HOLD_MS") {
            if let Ok(hold) = val.parse::<f32>() {
                self.demo.hold_ms = hold;
            }
        }
        if let Ok(val) = std::env::var("SEGUE_CYCLES") {
            if let Ok(cycles) = val.parse::<u32>() {
                self.demo.cycles = cycles;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from segue.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
