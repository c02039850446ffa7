//! Editor configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use tracing::Level;

use crate::consts::DEFAULT_ZOOM_STEP;

pub const ZOOM_STEP_VAR: &str = "SHAPEBOARD_ZOOM_STEP";
pub const LOG_VAR: &str = "SHAPEBOARD_LOG";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number greater than 1.0, got {value:?}")]
    InvalidZoomStep { var: &'static str, value: String },
    #[error("{var} must be one of trace, debug, info, warn, error; got {value:?}")]
    InvalidLogLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Zoom factor applied per wheel notch.
    pub zoom_step: f64,
    /// Maximum tracing level emitted by the binary.
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self { zoom_step: DEFAULT_ZOOM_STEP, log_level: Level::INFO }
    }
}

impl Config {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `SHAPEBOARD_ZOOM_STEP`: wheel zoom factor, must exceed 1.0 (default 1.1)
    /// - `SHAPEBOARD_LOG`: `trace`, `debug`, `info` (default), `warn`, or `error`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a set variable does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `lookup` yields a value that does not parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let zoom_step = match lookup(ZOOM_STEP_VAR) {
            Some(raw) => parse_zoom_step(&raw)?,
            None => DEFAULT_ZOOM_STEP,
        };
        let log_level = match lookup(LOG_VAR) {
            Some(raw) => parse_log_level(&raw)?,
            None => Level::INFO,
        };
        Ok(Self { zoom_step, log_level })
    }
}

fn parse_zoom_step(raw: &str) -> Result<f64, ConfigError> {
    match raw.trim().parse::<f64>() {
        Ok(step) if step.is_finite() && step > 1.0 => Ok(step),
        _ => Err(ConfigError::InvalidZoomStep { var: ZOOM_STEP_VAR, value: raw.to_string() }),
    }
}

fn parse_log_level(raw: &str) -> Result<Level, ConfigError> {
    Level::from_str(raw.trim())
        .map_err(|_| ConfigError::InvalidLogLevel { var: LOG_VAR, value: raw.to_string() })
}
