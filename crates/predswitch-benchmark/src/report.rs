//! Report generation for benchmark results.

use std::fmt::{self, Write as _};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, Contender};

const CONTENDERS: [Contender; 2] = [Contender::Baseline, Contender::Candidate];

/// CSV exporter for benchmark results.
///
/// One row per measured run, with columns for contender, run index, wall
/// time, iterations, time per dispatch and sink checksum.
///
/// # Example
///
/// ```
/// use predswitch_benchmark::{BenchmarkResult, BenchmarkRun, Contender, CsvExporter};
/// use std::time::Duration;
///
/// let mut result = BenchmarkResult::new("Test", "if/else", "switch", 1000);
/// result.add_run(BenchmarkRun {
///     contender: Contender::Candidate,
///     run_index: 0,
///     duration: Duration::from_micros(100),
///     iterations: 1000,
///     checksum: 42,
/// });
///
/// let csv = CsvExporter::to_string(&result);
/// assert!(csv.starts_with("contender,run_index,time_us"));
/// assert!(csv.contains("switch,0,100,1000,100.00,42"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports benchmark result to CSV string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &BenchmarkResult, output: &mut String) -> fmt::Result {
        writeln!(
            output,
            "contender,run_index,time_us,iterations,ns_per_iter,checksum"
        )?;

        for run in &result.runs {
            writeln!(
                output,
                "{},{},{},{},{:.2},{}",
                result.contender_name(run.contender),
                run.run_index,
                run.duration.as_micros(),
                run.iterations,
                run.ns_per_iter(),
                run.checksum,
            )?;
        }
        Ok(())
    }

    /// Exports benchmark result to a CSV file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes benchmark result as CSV to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Markdown report generator.
///
/// Generates human-readable Markdown reports from benchmark results,
/// including a per-contender summary and a table of individual runs.
///
/// # Example
///
/// ```
/// use predswitch_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let result = BenchmarkResult::new("Test", "if/else", "switch", 10);
/// let md = MarkdownReport::to_string(&result);
/// assert!(md.contains("# Benchmark: Test"));
/// assert!(md.contains("*No runs completed.*"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(result: &BenchmarkResult) -> String {
        let mut output = String::new();
        let _ = Self::render(result, &mut output);
        output
    }

    fn render(result: &BenchmarkResult, output: &mut String) -> fmt::Result {
        writeln!(output, "# Benchmark: {}", result.name)?;
        writeln!(output)?;

        writeln!(output, "- **Baseline**: {}", result.baseline_name)?;
        writeln!(output, "- **Candidate**: {}", result.candidate_name)?;
        writeln!(output, "- **Iterations per run**: {}", result.iterations)?;
        writeln!(
            output,
            "- **Runs**: {}",
            result.run_count(Contender::Candidate)
        )?;
        writeln!(output)?;

        writeln!(output, "## Summary")?;
        writeln!(output)?;

        if result.runs.is_empty() {
            writeln!(output, "*No runs completed.*")?;
            return Ok(());
        }

        writeln!(
            output,
            "| Contender | Avg Time (ms) | Min Time (ms) | Max Time (ms) | ns/iter |"
        )?;
        writeln!(
            output,
            "|-----------|---------------|---------------|---------------|---------|"
        )?;
        for contender in CONTENDERS {
            writeln!(
                output,
                "| {} | {:.3} | {:.3} | {:.3} | {:.2} |",
                result.contender_name(contender),
                result.avg_time(contender).as_secs_f64() * 1000.0,
                result.min_time(contender).as_secs_f64() * 1000.0,
                result.max_time(contender).as_secs_f64() * 1000.0,
                result.avg_ns_per_iter(contender),
            )?;
        }
        writeln!(output)?;
        writeln!(
            output,
            "**Slowdown**: {:.2}x ({} relative to {})",
            result.slowdown(),
            result.candidate_name,
            result.baseline_name
        )?;
        writeln!(
            output,
            "**Checksums**: {}",
            if result.checksums_agree() {
                "agree"
            } else {
                "DIFFER"
            }
        )?;
        writeln!(output)?;

        writeln!(output, "## Run Details")?;
        writeln!(output)?;
        writeln!(output, "| Run | Contender | Time (ms) | ns/iter | Checksum |")?;
        writeln!(output, "|-----|-----------|-----------|---------|----------|")?;
        for run in &result.runs {
            writeln!(
                output,
                "| {} | {} | {:.3} | {:.2} | {} |",
                run.run_index,
                result.contender_name(run.contender),
                run.duration.as_secs_f64() * 1000.0,
                run.ns_per_iter(),
                run.checksum,
            )?;
        }
        Ok(())
    }

    /// Writes Markdown report to a file.
    pub fn to_file(result: &BenchmarkResult, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(result))
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(result: &BenchmarkResult, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(result).as_bytes())
    }
}

/// Writes the CSV and Markdown reports to the paths set in `config`.
///
/// Paths that are not set are skipped.
pub fn write_reports(result: &BenchmarkResult, config: &BenchmarkConfig) -> io::Result<()> {
    if let Some(path) = config.csv_output_path() {
        CsvExporter::to_file(result, path)?;
    }
    if let Some(path) = config.markdown_output_path() {
        MarkdownReport::to_file(result, path)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::result::BenchmarkRun;

    fn sample() -> BenchmarkResult {
        let mut result = BenchmarkResult::new("ranges", "if/else", "switch", 1000);
        for (contender, micros) in [(Contender::Baseline, 100), (Contender::Candidate, 150)] {
            result.add_run(BenchmarkRun {
                contender,
                run_index: 0,
                duration: Duration::from_micros(micros),
                iterations: 1000,
                checksum: 99,
            });
        }
        result
    }

    #[test]
    fn test_csv_rows() {
        let csv = CsvExporter::to_string(&sample());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "if/else,0,100,1000,100.00,99");
        assert_eq!(lines[2], "switch,0,150,1000,150.00,99");
    }

    #[test]
    fn test_markdown_sections() {
        let md = MarkdownReport::to_string(&sample());
        assert!(md.contains("## Summary"));
        assert!(md.contains("## Run Details"));
        assert!(md.contains("**Slowdown**: 1.50x (switch relative to if/else)"));
        assert!(md.contains("**Checksums**: agree"));
        assert!(md.contains("| switch | 0.150 | 0.150 | 0.150 | 150.00 |"));
    }

    #[test]
    fn test_write_to_writer() {
        let mut buffer = Vec::new();
        CsvExporter::write(&sample(), &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("contender,"));
    }

    #[test]
    fn test_write_reports_to_configured_paths() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("bench.csv");
        let md = dir.path().join("bench.md");
        let config = BenchmarkConfig::new("ranges")
            .with_csv_output(&csv)
            .with_markdown_output(&md);

        write_reports(&sample(), &config).unwrap();

        assert!(fs::read_to_string(&csv).unwrap().contains("switch,0,150"));
        assert!(fs::read_to_string(&md).unwrap().contains("# Benchmark: ranges"));
    }

    #[test]
    fn test_write_reports_skips_unset_paths() {
        let config = BenchmarkConfig::new("ranges");
        assert!(write_reports(&sample(), &config).is_ok());
    }
}
