//! Configuration system for predswitch.
//!
//! Load the evaluation policy and benchmark settings from TOML or YAML so the
//! same binary can run strict or permissive switches and differently sized
//! benchmarks without code changes.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use predswitch_config::SwitchConfig;
//! use predswitch_core::EvaluationPolicy;
//!
//! let config = SwitchConfig::from_toml_str(r#"
//!     policy = "strict"
//!
//!     [benchmark]
//!     iterations = 10000
//!     run_count = 5
//! "#).unwrap();
//!
//! assert_eq!(config.policy, EvaluationPolicy::Strict);
//! assert_eq!(config.benchmark_settings().iterations, 10_000);
//! assert_eq!(config.benchmark_settings().warmup_count, 1);
//! ```
//!
//! Use the default config when the file is missing:
//!
//! ```
//! use predswitch_config::SwitchConfig;
//!
//! let config = SwitchConfig::load("predswitch.toml").unwrap_or_default();
//! // Proceeds with defaults if the file doesn't exist
//! ```

use std::path::{Path, PathBuf};

use predswitch_core::{EvaluationPolicy, Switch};
use serde::{Deserialize, Serialize};
use thiserror::Error;


/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level predswitch configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SwitchConfig {
    /// Re-evaluation policy for switches built from this config.
    #[serde(default)]
    pub policy: EvaluationPolicy,

    /// Benchmark settings; defaults apply when absent.
    #[serde(default)]
    pub benchmark: Option<BenchmarkSettings>,
}

impl SwitchConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the evaluation policy.
    pub fn with_policy(mut self, policy: EvaluationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the benchmark settings.
    pub fn with_benchmark(mut self, settings: BenchmarkSettings) -> Self {
        self.benchmark = Some(settings);
        self
    }

    /// Returns the benchmark settings, or the defaults if none were given.
    pub fn benchmark_settings(&self) -> BenchmarkSettings {
        self.benchmark.clone().unwrap_or_default()
    }

    /// Checks value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for zero iterations, zero runs, or an
    /// empty input range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.benchmark {
            Some(settings) => settings.validate(),
            None => Ok(()),
        }
    }

    /// Creates an infallible switch that uses the configured policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use predswitch_config::SwitchConfig;
    /// use predswitch_core::{EvaluationPolicy, SwitchError};
    ///
    /// let config = SwitchConfig::new().with_policy(EvaluationPolicy::Strict);
    /// let mut switch = config.switch(5);
    /// switch.add_case(|v: &i32| *v > 0, || {});
    ///
    /// assert!(switch.evaluate().is_ok());
    /// assert!(matches!(switch.evaluate(), Err(SwitchError::AlreadyEvaluated)));
    /// ```
    pub fn switch<'a, T>(&self, value: T) -> Switch<'a, T> {
        Switch::new(value).with_policy(self.policy)
    }
}

/// Benchmark run settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct BenchmarkSettings {
    /// Benchmark name used in reports.
    pub name: String,

    /// Switch evaluations per measured run.
    pub iterations: usize,

    /// Unmeasured runs before measurement starts.
    pub warmup_count: usize,

    /// Measured runs per contender.
    pub run_count: usize,

    /// Seed for the input generator.
    pub random_seed: u64,

    /// Smallest generated input value (inclusive).
    pub value_min: i64,

    /// Largest generated input value (inclusive).
    pub value_max: i64,

    /// CSV report destination.
    pub csv_output: Option<PathBuf>,

    /// Markdown report destination.
    pub markdown_output: Option<PathBuf>,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        Self {
            name: "integer ranges".to_string(),
            iterations: 1_000_000,
            warmup_count: 1,
            run_count: 3,
            random_seed: 42,
            value_min: -50,
            value_max: 150,
            csv_output: None,
            markdown_output: None,
        }
    }
}

impl BenchmarkSettings {
    /// Checks that the settings describe a runnable benchmark.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.iterations == 0 {
            return Err(ConfigError::Invalid(
                "benchmark.iterations must be greater than zero".to_string(),
            ));
        }
        if self.run_count == 0 {
            return Err(ConfigError::Invalid(
                "benchmark.run_count must be greater than zero".to_string(),
            ));
        }
        if self.value_min > self.value_max {
            return Err(ConfigError::Invalid(format!(
                "benchmark.value_min ({}) exceeds benchmark.value_max ({})",
                self.value_min, self.value_max
            )));
        }
        Ok(())
    }
}
