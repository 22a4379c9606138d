//! Benchmark result types.

use std::fmt;
use std::time::Duration;

/// Which side of the comparison a run measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contender {
    /// The hand-written `if`/`else` chain.
    Baseline,
    /// The switch under test.
    Candidate,
}

impl fmt::Display for Contender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contender::Baseline => write!(f, "baseline"),
            Contender::Candidate => write!(f, "candidate"),
        }
    }
}

/// Result of a single measured run of one contender.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkRun {
    /// Contender measured.
    pub contender: Contender,
    /// Run index (0-based).
    pub run_index: usize,
    /// Wall time for all iterations.
    pub duration: Duration,
    /// Inputs dispatched.
    pub iterations: usize,
    /// Sink checksum after the run.
    pub checksum: u64,
}

impl BenchmarkRun {
    /// Returns the mean time per dispatch in nanoseconds.
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_benchmark::{BenchmarkRun, Contender};
    /// use std::time::Duration;
    ///
    /// let run = BenchmarkRun {
    ///     contender: Contender::Candidate,
    ///     run_index: 0,
    ///     duration: Duration::from_micros(2),
    ///     iterations: 1000,
    ///     checksum: 0,
    /// };
    ///
    /// assert!((run.ns_per_iter() - 2.0).abs() < 1e-9);
    /// ```
    pub fn ns_per_iter(&self) -> f64 {
        if self.iterations == 0 {
            0.0
        } else {
            self.duration.as_nanos() as f64 / self.iterations as f64
        }
    }
}

/// Aggregated results from both contenders.
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    /// Benchmark name.
    pub name: String,
    /// Display name of the baseline.
    pub baseline_name: String,
    /// Display name of the candidate.
    pub candidate_name: String,
    /// Inputs per run.
    pub iterations: usize,
    /// Individual runs, in execution order.
    pub runs: Vec<BenchmarkRun>,
}

impl BenchmarkResult {
    /// Creates a new benchmark result.
    pub fn new(
        name: impl Into<String>,
        baseline_name: impl Into<String>,
        candidate_name: impl Into<String>,
        iterations: usize,
    ) -> Self {
        Self {
            name: name.into(),
            baseline_name: baseline_name.into(),
            candidate_name: candidate_name.into(),
            iterations,
            runs: Vec::new(),
        }
    }

    /// Adds a run to the results.
    pub fn add_run(&mut self, run: BenchmarkRun) {
        self.runs.push(run);
    }

    /// Returns the number of measured runs of one contender.
    pub fn run_count(&self, contender: Contender) -> usize {
        self.runs_of(contender).count()
    }

    /// Returns the runs of one contender.
    pub fn runs_of(&self, contender: Contender) -> impl Iterator<Item = &BenchmarkRun> + '_ {
        self.runs.iter().filter(move |run| run.contender == contender)
    }

    /// Returns the display name of a contender.
    pub fn contender_name(&self, contender: Contender) -> &str {
        match contender {
            Contender::Baseline => &self.baseline_name,
            Contender::Candidate => &self.candidate_name,
        }
    }

    /// Returns the average run time of one contender.
    ///
    /// # Example
    ///
    /// ```
    /// use predswitch_benchmark::{BenchmarkResult, BenchmarkRun, Contender};
    /// use std::time::Duration;
    ///
    /// let mut result = BenchmarkResult::new("Test", "if/else", "switch", 10);
    /// for (run_index, ms) in [(0, 100), (1, 200)] {
    ///     result.add_run(BenchmarkRun {
    ///         contender: Contender::Baseline,
    ///         run_index,
    ///         duration: Duration::from_millis(ms),
    ///         iterations: 10,
    ///         checksum: 7,
    ///     });
    /// }
    ///
    /// assert_eq!(result.avg_time(Contender::Baseline), Duration::from_millis(150));
    /// assert_eq!(result.avg_time(Contender::Candidate), Duration::ZERO);
    /// ```
    pub fn avg_time(&self, contender: Contender) -> Duration {
        let count = self.run_count(contender);
        if count == 0 {
            return Duration::ZERO;
        }
        let total: Duration = self.runs_of(contender).map(|r| r.duration).sum();
        total / count as u32
    }

    /// Returns the minimum run time of one contender.
    pub fn min_time(&self, contender: Contender) -> Duration {
        self.runs_of(contender)
            .map(|r| r.duration)
            .min()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the maximum run time of one contender.
    pub fn max_time(&self, contender: Contender) -> Duration {
        self.runs_of(contender)
            .map(|r| r.duration)
            .max()
            .unwrap_or(Duration::ZERO)
    }

    /// Returns the average nanoseconds per dispatch of one contender.
    pub fn avg_ns_per_iter(&self, contender: Contender) -> f64 {
        let count = self.run_count(contender);
        if count == 0 {
            return 0.0;
        }
        let total: f64 = self.runs_of(contender).map(|r| r.ns_per_iter()).sum();
        total / count as f64
    }

    /// Returns candidate time divided by baseline time.
    ///
    /// Values above 1.0 mean the candidate is slower. Returns 1.0 when either
    /// side has no measured time.
    pub fn slowdown(&self) -> f64 {
        let baseline = self.avg_time(Contender::Baseline).as_secs_f64();
        let candidate = self.avg_time(Contender::Candidate).as_secs_f64();
        if baseline == 0.0 || candidate == 0.0 {
            1.0
        } else {
            candidate / baseline
        }
    }

    /// Returns true if every run of both contenders left the same checksum.
    ///
    /// Both contenders see the same inputs, so any difference means they
    /// dispatched differently. Returns false when either side has no runs.
    pub fn checksums_agree(&self) -> bool {
        if self.run_count(Contender::Baseline) == 0 || self.run_count(Contender::Candidate) == 0 {
            return false;
        }
        let first = self.runs[0].checksum;
        self.runs.iter().all(|run| run.checksum == first)
    }
}
