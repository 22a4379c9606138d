//! Colorful console output for predswitch benchmarks.
//!
//! Provides a custom `tracing` layer that formats benchmark events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (benchmark start/end, measured runs)
//! - **DEBUG**: Warmup runs and rejected re-evaluations
//! - **TRACE**: Per-evaluation dispatch outcomes

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static BENCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_DIRECTIVES: &str = "predswitch=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the predswitch banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SwitchConsoleLayer)
            .try_init();
    });
}

// Marks the start of a benchmark for elapsed time tracking.
fn mark_bench_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    BENCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since benchmark start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = BENCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
                    _               _ _       _
 _ __  _ __ ___  __| |_____      _(_) |_ ___| |__
| '_ \| '__/ _ \/ _` / __\ \ /\ / / | __/ __| '_ \
| |_) | | |  __/ (_| \__ \ V  V /| | || (__| | | |
| .__/|_|  \___|\__,_|___/ \_/\_/ |_|\__\___|_| |_|
|_|
"#;

    let version_line = format!("      v{} - Runtime Predicate Dispatch\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats benchmark events with colors.
pub struct SwitchConsoleLayer;

impl<S: Subscriber> Layer<S> for SwitchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("predswitch") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    name: Option<String>,
    contender: Option<String>,
    iterations: Option<u64>,
    warmup_count: Option<u64>,
    run_count: Option<u64>,
    run: Option<u64>,
    duration_us: Option<u64>,
    ns_per_iter: Option<f64>,
    baseline_avg_us: Option<f64>,
    switch_avg_us: Option<f64>,
    slowdown: Option<f64>,
    checksums_agree: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "name" => self.name = Some(s),
            "contender" => self.contender = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "iterations" => self.iterations = Some(value),
            "warmup_count" => self.warmup_count = Some(value),
            "run_count" => self.run_count = Some(value),
            "run" => self.run = Some(value),
            "duration_us" => self.duration_us = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "ns_per_iter" => self.ns_per_iter = Some(value),
            "baseline_avg_us" => self.baseline_avg_us = Some(value),
            "switch_avg_us" => self.switch_avg_us = Some(value),
            "slowdown" => self.slowdown = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "checksums_agree" {
            self.checksums_agree = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "name" => self.name = Some(value.to_string()),
            "contender" => self.contender = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "bench_start" => format_bench_start(v),
        "run_end" => format_run_end(v),
        "bench_end" => format_bench_end(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_bench_start(v: &EventVisitor) -> String {
    mark_bench_start();
    let name = v.name.as_deref().unwrap_or("benchmark");

    format!(
        "{} {} {} │ {} iterations │ {} warmups │ {} runs",
        format_elapsed(),
        "▶".bright_green().bold(),
        name.white().bold(),
        v.iterations
            .unwrap_or(0)
            .to_formatted_string(&Locale::en)
            .bright_yellow(),
        v.warmup_count.unwrap_or(0).bright_yellow(),
        v.run_count.unwrap_or(0).bright_yellow(),
    )
}

fn format_run_end(v: &EventVisitor) -> String {
    let contender = v.contender.as_deref().unwrap_or("?");
    let duration = v.duration_us.unwrap_or(0);

    format!(
        "{} {} {:<8} run {:>3} │ {} │ {} ns/iter",
        format_elapsed(),
        "◀".bright_blue(),
        contender.white().bold(),
        v.run.unwrap_or(0),
        format_duration_us(duration).yellow(),
        format!("{:.2}", v.ns_per_iter.unwrap_or(0.0))
            .bright_magenta()
            .bold(),
    )
}

fn format_bench_end(v: &EventVisitor) -> String {
    let name = v.name.as_deref().unwrap_or("benchmark");
    let agree = v.checksums_agree.unwrap_or(false);

    let status = if agree {
        "CHECKSUMS AGREE".bright_green().bold().to_string()
    } else {
        "CHECKSUMS DIFFER".bright_red().bold().to_string()
    };

    format!(
        "{} {} {} complete │ if/else {} │ switch {} │ {} │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        name.white().bold(),
        format_duration_us(v.baseline_avg_us.unwrap_or(0.0) as u64).yellow(),
        format_duration_us(v.switch_avg_us.unwrap_or(0.0) as u64).yellow(),
        format_slowdown(v.slowdown.unwrap_or(1.0)),
        status
    )
}

fn format_duration_us(us: u64) -> String {
    if us < 1000 {
        format!("{}µs", us)
    } else if us < 1_000_000 {
        format!("{:.2}ms", us as f64 / 1000.0)
    } else {
        format!("{:.2}s", us as f64 / 1_000_000.0)
    }
}

fn format_slowdown(ratio: f64) -> String {
    let text = format!("{:.2}x", ratio);
    if ratio <= 1.05 {
        text.bright_green().to_string()
    } else if ratio <= 2.0 {
        text.yellow().to_string()
    } else {
        text.bright_red().to_string()
    }
}
