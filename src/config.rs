// src/config.rs
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming an optional JSON config file.
pub const CONFIG_ENV: &str = "VIBESENSE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tunables for the simulated sensor. Every field has a default, so a config
/// file only needs the keys it wants to override.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub window_capacity: usize,
    pub tick_period_ms: u64,
    /// Phase advance per tick, in radians.
    pub phase_step: f64,
    pub amplitude: f64,
    pub baseline_jitter: f64,
    pub burst_jitter: f64,
    pub burst_cycle: u64,
    pub burst_threshold: u64,
    pub connect_delay_ms: u64,
    pub log_capacity: usize,
    pub pulse_intensity: f32,
    pub pulse_sharpness: f32,
    pub export_dir: PathBuf,
    pub jitter_seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_capacity: 300,
            tick_period_ms: 30,
            phase_step: 0.2,
            amplitude: 0.2,
            baseline_jitter: 0.05,
            burst_jitter: 0.5,
            burst_cycle: 100,
            burst_threshold: 80,
            connect_delay_ms: 2000,
            log_capacity: 5,
            pulse_intensity: 1.0,
            pulse_sharpness: 1.0,
            export_dir: PathBuf::from("exports"),
            jitter_seed: None,
        }
    }
}

impl DemoConfig {
    /// Reads the file named by `VIBESENSE_CONFIG`, or returns the defaults
    /// when the variable is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(Path::new(&path)),
            None => Ok(Self::default()),
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_capacity == 0 {
            return Err(ConfigError::Invalid("window_capacity must be > 0".into()));
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::Invalid("tick_period_ms must be > 0".into()));
        }
        if self.log_capacity == 0 {
            return Err(ConfigError::Invalid("log_capacity must be > 0".into()));
        }
        if self.burst_cycle == 0 {
            return Err(ConfigError::Invalid("burst_cycle must be > 0".into()));
        }
        if !(0.0..=1.0).contains(&self.pulse_intensity) || !(0.0..=1.0).contains(&self.pulse_sharpness) {
            return Err(ConfigError::Invalid(
                "pulse intensity and sharpness must be within [0, 1]".into(),
            ));
        }
        if self.baseline_jitter < 0.0 || self.burst_jitter < 0.0 {
            return Err(ConfigError::Invalid("jitter bounds must be non-negative".into()));
        }
        Ok(())
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    pub fn connect_delay(&self) -> Duration {
        Duration::from_millis(self.connect_delay_ms)
    }

    pub fn sample_rate_hz(&self) -> f64 {
        1000.0 / self.tick_period_ms as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DemoConfig::default();
        config.validate().unwrap();
        assert_eq!(config.tick_period(), Duration::from_millis(30));
        assert_eq!(config.connect_delay(), Duration::from_secs(2));
        assert!((config.sample_rate_hz() - 33.333).abs() < 1e-3);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: DemoConfig =
            serde_json::from_str(r#"{"log_capacity": 8, "jitter_seed": 7}"#).unwrap();
        assert_eq!(config.log_capacity, 8);
        assert_eq!(config.jitter_seed, Some(7));
        assert_eq!(config.window_capacity, 300);
    }

    #[test]
    fn rejects_bad_values() {
        let config = DemoConfig { tick_period_ms: 0, ..DemoConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        let config = DemoConfig { pulse_intensity: 1.5, ..DemoConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = DemoConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
