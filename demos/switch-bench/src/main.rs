//! Switch Benchmark
//!
//! Compares `switch!` (or the runtime builder) against the equivalent
//! `if`/`else` chain over seeded random integers and prints a Markdown report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use predswitch_benchmark::{scenarios, write_reports, BenchmarkConfig, MarkdownReport};
use predswitch_config::SwitchConfig;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// TOML configuration file with a `[benchmark]` table.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Switch evaluations per measured run.
    #[arg(short, long)]
    iterations: Option<usize>,
    /// Measured runs per contender.
    #[arg(short, long)]
    runs: Option<usize>,
    /// Seed for the input generator.
    #[arg(short, long)]
    seed: Option<u64>,
    /// Write the CSV report here.
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the Markdown report here.
    #[arg(long)]
    markdown: Option<PathBuf>,
    /// Benchmark the runtime builder instead of the macro.
    #[arg(long)]
    builder: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => {
            eprintln!("error: baseline and switch produced different side effects");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

// Returns whether both contenders agreed.
fn run(args: Args) -> Result<bool, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => SwitchConfig::load(path)?,
        None => SwitchConfig::default(),
    };

    let mut settings = config.benchmark_settings();
    if let Some(iterations) = args.iterations {
        settings.iterations = iterations;
    }
    if let Some(runs) = args.runs {
        settings.run_count = runs;
    }
    if let Some(seed) = args.seed {
        settings.random_seed = seed;
    }
    if args.csv.is_some() {
        settings.csv_output = args.csv;
    }
    if args.markdown.is_some() {
        settings.markdown_output = args.markdown;
    }
    settings.validate()?;

    predswitch::console::init();

    let bench_config = BenchmarkConfig::from_settings(&settings);
    let result = if args.builder {
        scenarios::integer_ranges_builder(bench_config.clone())?.run()
    } else {
        scenarios::integer_ranges(bench_config.clone())?.run()
    };

    println!();
    print!("{}", MarkdownReport::to_string(&result));
    write_reports(&result, &bench_config)?;

    Ok(result.checksums_agree())
}
