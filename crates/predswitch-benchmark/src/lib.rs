//! Benchmarking framework for predswitch.
//!
//! This crate measures what a runtime switch costs compared with the
//! equivalent hand-written `if`/`else` chain.
//!
//! # Overview
//!
//! The benchmarking framework allows you to:
//! - Run a baseline and a candidate over the same seeded inputs
//! - Execute warmup runs before measurement
//! - Check that both contenders produced identical side effects
//! - Export results to CSV and Markdown
//!
//! # Example
//!
//! ```
//! use predswitch_benchmark::BenchmarkConfig;
//!
//! // Configure a benchmark run
//! let config = BenchmarkConfig::new("Integer Ranges")
//!     .with_iterations(10_000)
//!     .with_warmup_count(2)
//!     .with_run_count(5)
//!     .with_csv_output("results.csv")
//!     .with_markdown_output("report.md");
//!
//! assert_eq!(config.name(), "Integer Ranges");
//! assert_eq!(config.warmup_count(), 2);
//! assert_eq!(config.run_count(), 5);
//! ```
//!
//! Running the bundled integer-range scenario:
//!
//! ```
//! use predswitch_benchmark::{scenarios, BenchmarkConfig, MarkdownReport};
//!
//! let config = BenchmarkConfig::new("Integer Ranges")
//!     .with_iterations(1_000)
//!     .with_warmup_count(0)
//!     .with_run_count(1);
//! let result = scenarios::integer_ranges(config).unwrap().run();
//!
//! assert!(result.checksums_agree());
//! assert!(MarkdownReport::to_string(&result).contains("# Benchmark: Integer Ranges"));
//! ```

mod config;
mod report;
mod result;
mod runner;
mod sink;

pub mod scenarios;

pub use config::BenchmarkConfig;
pub use predswitch_config::ConfigError;
pub use report::{write_reports, CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, BenchmarkRun, Contender};
pub use runner::Benchmark;
pub use sink::Sink;
