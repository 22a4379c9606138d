//! Benchmark runner.
//!
//! Logging levels:
//! - **INFO**: benchmark start/end and each measured run
//! - **DEBUG**: warmup runs

use std::hint::black_box;
use std::marker::PhantomData;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::result::{BenchmarkResult, BenchmarkRun, Contender};
use crate::sink::Sink;

/// Baseline-versus-candidate benchmark runner.
///
/// Inputs are generated once per `run()` from the configured seed, then
/// every warmup and measured run of both contenders walks the same inputs.
/// All closures are stored as concrete generic type parameters to avoid
/// virtual dispatch overhead in the measured loop.
///
/// # Type Parameters
///
/// * `T` - The input type
/// * `G` - Input generator: `Fn(&mut ChaCha8Rng) -> T`
/// * `B` - Baseline: `Fn(&T, &Sink)`
/// * `C` - Candidate: `Fn(&T, &Sink)`
///
/// # Example
///
/// ```
/// use predswitch_benchmark::{Benchmark, BenchmarkConfig, Sink};
/// use rand::Rng;
/// use rand_chacha::ChaCha8Rng;
///
/// let config = BenchmarkConfig::new("parity")
///     .with_iterations(100)
///     .with_warmup_count(0)
///     .with_run_count(2);
///
/// let benchmark = Benchmark::new(
///     config,
///     |rng: &mut ChaCha8Rng| rng.random_range(0..10u64),
///     |n: &u64, sink: &Sink| if n % 2 == 0 { sink.record(0) } else { sink.record(1) },
///     |n: &u64, sink: &Sink| sink.record(n % 2),
/// );
///
/// let result = benchmark.run();
/// assert_eq!(result.runs.len(), 4);
/// assert!(result.checksums_agree());
/// ```
pub struct Benchmark<T, G, B, C>
where
    G: Fn(&mut ChaCha8Rng) -> T,
    B: Fn(&T, &Sink),
    C: Fn(&T, &Sink),
{
    config: BenchmarkConfig,
    baseline_name: String,
    candidate_name: String,
    generator: G,
    baseline: B,
    candidate: C,
    _phantom: PhantomData<fn() -> T>,
}

impl<T, G, B, C> Benchmark<T, G, B, C>
where
    G: Fn(&mut ChaCha8Rng) -> T,
    B: Fn(&T, &Sink),
    C: Fn(&T, &Sink),
{
    /// Creates a new benchmark.
    ///
    /// # Arguments
    ///
    /// * `config` - Benchmark configuration (iterations, warmups, runs, seed)
    /// * `generator` - Produces one input from the seeded RNG
    /// * `baseline` - Reference dispatch, usually an `if`/`else` chain
    /// * `candidate` - Dispatch under test
    pub fn new(config: BenchmarkConfig, generator: G, baseline: B, candidate: C) -> Self {
        Self {
            config,
            baseline_name: "if/else".to_string(),
            candidate_name: "switch".to_string(),
            generator,
            baseline,
            candidate,
            _phantom: PhantomData,
        }
    }

    /// Sets the display names used in logs and reports.
    pub fn with_names(
        mut self,
        baseline: impl Into<String>,
        candidate: impl Into<String>,
    ) -> Self {
        self.baseline_name = baseline.into();
        self.candidate_name = candidate.into();
        self
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Generates the input sequence for the configured seed.
    pub fn inputs(&self) -> Vec<T> {
        let mut rng = ChaCha8Rng::seed_from_u64(self.config.random_seed());
        (0..self.config.iterations())
            .map(|_| (self.generator)(&mut rng))
            .collect()
    }

    /// Runs the benchmark and returns aggregated results.
    ///
    /// Executes warmup runs first (not measured), then measurement runs.
    /// Each measured run times the baseline and then the candidate.
    pub fn run(&self) -> BenchmarkResult {
        let config = &self.config;
        info!(
            event = "bench_start",
            name = config.name(),
            iterations = config.iterations() as u64,
            warmup_count = config.warmup_count() as u64,
            run_count = config.run_count() as u64,
        );

        let inputs = self.inputs();

        for warmup in 0..config.warmup_count() {
            let (baseline, _) = Self::measure(&self.baseline, &inputs);
            let (candidate, _) = Self::measure(&self.candidate, &inputs);
            debug!(
                event = "warmup_end",
                run = warmup as u64,
                baseline_us = baseline.as_micros() as u64,
                candidate_us = candidate.as_micros() as u64,
            );
        }

        let mut result = BenchmarkResult::new(
            config.name(),
            &self.baseline_name,
            &self.candidate_name,
            inputs.len(),
        );

        for run_index in 0..config.run_count() {
            let (duration, checksum) = Self::measure(&self.baseline, &inputs);
            result.add_run(self.record(Contender::Baseline, run_index, duration, checksum));

            let (duration, checksum) = Self::measure(&self.candidate, &inputs);
            result.add_run(self.record(Contender::Candidate, run_index, duration, checksum));
        }

        info!(
            event = "bench_end",
            name = config.name(),
            baseline_avg_us = result.avg_time(Contender::Baseline).as_secs_f64() * 1e6,
            switch_avg_us = result.avg_time(Contender::Candidate).as_secs_f64() * 1e6,
            slowdown = result.slowdown(),
            checksums_agree = result.checksums_agree(),
        );

        result
    }

    fn record(
        &self,
        contender: Contender,
        run_index: usize,
        duration: Duration,
        checksum: u64,
    ) -> BenchmarkRun {
        let run = BenchmarkRun {
            contender,
            run_index,
            duration,
            iterations: self.config.iterations(),
            checksum,
        };
        let contender_name = match contender {
            Contender::Baseline => self.baseline_name.as_str(),
            Contender::Candidate => self.candidate_name.as_str(),
        };
        info!(
            event = "run_end",
            contender = contender_name,
            run = run_index as u64,
            duration_us = duration.as_micros() as u64,
            ns_per_iter = run.ns_per_iter(),
        );
        run
    }

    // Times one pass over the inputs with a fresh sink.
    fn measure<F>(dispatch: &F, inputs: &[T]) -> (Duration, u64)
    where
        F: Fn(&T, &Sink),
    {
        let sink = Sink::new();
        let start = Instant::now();
        for input in inputs {
            dispatch(black_box(input), &sink);
        }
        let elapsed = start.elapsed();
        (elapsed, black_box(sink.checksum()))
    }
}
