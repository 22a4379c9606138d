//! Benchmark configuration.

use std::path::{Path, PathBuf};

use predswitch_config::{BenchmarkSettings, ConfigError};

/// Configuration for a benchmark run.
///
/// Controls input size, warmup iterations, measurement runs, the input
/// generator seed and range, and optional output paths.
///
/// # Example
///
/// ```
/// use predswitch_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new("My Benchmark")
///     .with_warmup_count(3)
///     .with_run_count(10);
///
/// assert_eq!(config.name(), "My Benchmark");
/// assert_eq!(config.warmup_count(), 3);
/// assert_eq!(config.run_count(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    name: String,
    iterations: usize,
    warmup_count: usize,
    run_count: usize,
    random_seed: u64,
    value_min: i64,
    value_max: i64,
    csv_output_path: Option<PathBuf>,
    markdown_output_path: Option<PathBuf>,
}

impl BenchmarkConfig {
    /// Creates a new benchmark configuration with the given name.
    ///
    /// Defaults:
    /// - iterations: 1,000,000
    /// - warmup_count: 1
    /// - run_count: 3
    /// - random_seed: 42
    /// - value range: -50..=150
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new("Test Benchmark");
    /// assert_eq!(config.iterations(), 1_000_000);
    /// assert_eq!(config.value_range(), (-50, 150));
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            iterations: 1_000_000,
            warmup_count: 1,
            run_count: 3,
            random_seed: 42,
            value_min: -50,
            value_max: 150,
            csv_output_path: None,
            markdown_output_path: None,
        }
    }

    /// Creates a configuration from loaded settings.
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_benchmark::BenchmarkConfig;
    /// use predswitch_config::SwitchConfig;
    ///
    /// let settings = SwitchConfig::from_toml_str(r#"
    ///     [benchmark]
    ///     name = "from toml"
    ///     run_count = 7
    /// "#).unwrap().benchmark_settings();
    ///
    /// let config = BenchmarkConfig::from_settings(&settings);
    /// assert_eq!(config.name(), "from toml");
    /// assert_eq!(config.run_count(), 7);
    /// ```
    pub fn from_settings(settings: &BenchmarkSettings) -> Self {
        Self {
            name: settings.name.clone(),
            iterations: settings.iterations,
            warmup_count: settings.warmup_count,
            run_count: settings.run_count,
            random_seed: settings.random_seed,
            value_min: settings.value_min,
            value_max: settings.value_max,
            csv_output_path: settings.csv_output.clone(),
            markdown_output_path: settings.markdown_output.clone(),
        }
    }

    /// Sets the number of switch evaluations per run.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the number of warmup iterations (not measured).
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Sets the number of measurement runs.
    pub fn with_run_count(mut self, count: usize) -> Self {
        self.run_count = count;
        self
    }

    /// Sets the input generator seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = seed;
        self
    }

    /// Sets the inclusive input range.
    pub fn with_value_range(mut self, min: i64, max: i64) -> Self {
        self.value_min = min;
        self.value_max = max;
        self
    }

    /// Sets the output path for CSV export.
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_benchmark::BenchmarkConfig;
    /// use std::path::Path;
    ///
    /// let config = BenchmarkConfig::new("Test")
    ///     .with_csv_output("results.csv");
    /// assert_eq!(config.csv_output_path(), Some(Path::new("results.csv")));
    /// ```
    pub fn with_csv_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.csv_output_path = Some(path.into());
        self
    }

    /// Sets the output path for Markdown report.
    pub fn with_markdown_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.markdown_output_path = Some(path.into());
        self
    }

    /// Converts back into settings, e.g. for validation or serialization.
    pub fn to_settings(&self) -> BenchmarkSettings {
        BenchmarkSettings {
            name: self.name.clone(),
            iterations: self.iterations,
            warmup_count: self.warmup_count,
            run_count: self.run_count,
            random_seed: self.random_seed,
            value_min: self.value_min,
            value_max: self.value_max,
            csv_output: self.csv_output_path.clone(),
            markdown_output: self.markdown_output_path.clone(),
        }
    }

    /// Applies the same checks as [`BenchmarkSettings::validate`].
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_benchmark::BenchmarkConfig;
    ///
    /// assert!(BenchmarkConfig::new("ok").validate().is_ok());
    /// assert!(BenchmarkConfig::new("inverted").with_value_range(5, 1).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.to_settings().validate()
    }

    /// Returns the benchmark name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the number of evaluations per run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the number of warmup iterations.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the number of measurement runs.
    pub fn run_count(&self) -> usize {
        self.run_count
    }

    /// Returns the input generator seed.
    pub fn random_seed(&self) -> u64 {
        self.random_seed
    }

    /// Returns the inclusive input range as `(min, max)`.
    pub fn value_range(&self) -> (i64, i64) {
        (self.value_min, self.value_max)
    }

    /// Returns the CSV output path, if set.
    pub fn csv_output_path(&self) -> Option<&Path> {
        self.csv_output_path.as_deref()
    }

    /// Returns the Markdown output path, if set.
    pub fn markdown_output_path(&self) -> Option<&Path> {
        self.markdown_output_path.as_deref()
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::from_settings(&BenchmarkSettings::default())
    }
}
