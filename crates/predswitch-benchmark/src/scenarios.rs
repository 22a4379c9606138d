//! Ready-made benchmark workloads.
//!
//! Each scenario pairs an `if`/`else` chain with the equivalent `switch!`
//! and records the same work ids, so their checksums must agree.

use predswitch::{switch, Switch};
use predswitch_config::ConfigError;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use crate::config::BenchmarkConfig;
use crate::runner::Benchmark;
use crate::sink::Sink;

/// Work id for values in `0..=100`.
pub const IN_RANGE: u64 = 1;
/// Work id for values above 100.
pub const BIG: u64 = 2;
/// Work id for negative values.
pub const NEGATIVE: u64 = 3;
/// Work id for the fallback branch.
pub const OTHER: u64 = 4;

/// The integer-range workload dispatched through `switch!`.
///
/// Inputs are uniform in the configured range. Three ranges map to work ids
/// 1-3; anything else records 4.
///
/// # Errors
///
/// Returns [`ConfigError::Invalid`] if `config` fails
/// [`BenchmarkConfig::validate`], e.g. for an inverted value range.
pub fn integer_ranges(
    config: BenchmarkConfig,
) -> Result<
    Benchmark<i64, impl Fn(&mut ChaCha8Rng) -> i64, impl Fn(&i64, &Sink), impl Fn(&i64, &Sink)>,
    ConfigError,
> {
    config.validate()?;
    let (min, max) = config.value_range();
    let benchmark = Benchmark::new(
        config,
        move |rng: &mut ChaCha8Rng| rng.random_range(min..=max),
        ranges_if_else,
        |value: &i64, sink: &Sink| {
            switch!(*value {
                case (0..=100).contains(val) => { sink.record(IN_RANGE); }
                case *val > 100 => { sink.record(BIG); }
                case *val < 0 => { sink.record(NEGATIVE); }
                default => { sink.record(OTHER); }
            });
        },
    )
    .with_names("if/else", "switch!");
    Ok(benchmark)
}

/// The integer-range workload dispatched through a runtime-built [`Switch`].
///
/// Measures the builder API, which boxes each branch, rather than the macro.
/// Validates `config` like [`integer_ranges`].
pub fn integer_ranges_builder(
    config: BenchmarkConfig,
) -> Result<
    Benchmark<i64, impl Fn(&mut ChaCha8Rng) -> i64, impl Fn(&i64, &Sink), impl Fn(&i64, &Sink)>,
    ConfigError,
> {
    config.validate()?;
    let (min, max) = config.value_range();
    let benchmark = Benchmark::new(
        config,
        move |rng: &mut ChaCha8Rng| rng.random_range(min..=max),
        ranges_if_else,
        |value: &i64, sink: &Sink| {
            let outcome = Switch::new(*value)
                .case(|v: &i64| (0..=100).contains(v), || sink.record(IN_RANGE))
                .case(|v: &i64| *v > 100, || sink.record(BIG))
                .case(|v: &i64| *v < 0, || sink.record(NEGATIVE))
                .otherwise(|| sink.record(OTHER))
                .run();
            if let Err(err) = outcome {
                warn!(event = "dispatch_failed", error = %err);
            }
        },
    )
    .with_names("if/else", "Switch");
    Ok(benchmark)
}

fn ranges_if_else(value: &i64, sink: &Sink) {
    let value = *value;
    if (0..=100).contains(&value) {
        sink.record(IN_RANGE);
    } else if value > 100 {
        sink.record(BIG);
    } else if value < 0 {
        sink.record(NEGATIVE);
    } else {
        sink.record(OTHER);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> BenchmarkConfig {
        BenchmarkConfig::new("ranges")
            .with_iterations(2_000)
            .with_warmup_count(0)
            .with_run_count(2)
    }

    #[test]
    fn test_macro_matches_if_else() {
        let result = integer_ranges(small()).unwrap().run();
        assert!(result.checksums_agree());
        assert_eq!(result.candidate_name, "switch!");
    }

    #[test]
    fn test_builder_matches_if_else() {
        let result = integer_ranges_builder(small()).unwrap().run();
        assert!(result.checksums_agree());
    }

    #[test]
    fn test_inputs_stay_in_range() {
        let benchmark = integer_ranges(small().with_value_range(-5, 5)).unwrap();
        assert!(benchmark.inputs().iter().all(|v| (-5..=5).contains(v)));
    }

    #[test]
    fn test_single_value_range() {
        let benchmark = integer_ranges(small().with_value_range(7, 7)).unwrap();
        assert!(benchmark.inputs().iter().all(|v| *v == 7));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let config = BenchmarkConfig::new("x")
            .with_iterations(1)
            .with_value_range(5, 1);
        assert!(matches!(
            integer_ranges(config.clone()),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            integer_ranges_builder(config),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_zero_iterations_are_rejected() {
        assert!(integer_ranges(small().with_iterations(0)).is_err());
    }

    #[test]
    fn test_if_else_work_ids() {
        let sink = Sink::new();
        for (value, expected) in [(50, IN_RANGE), (0, IN_RANGE), (101, BIG), (-1, NEGATIVE)] {
            ranges_if_else(&value, &sink);
            assert_eq!(sink.last(), expected);
        }
    }
}
