//! The fixed benchmark sweep: self-check, thread schedule and timed runs.

pub mod timing;

use crate::error::Result;
use crate::matrix::storage::Matrix;
use crate::multiply;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;
use timing::Elapsed;
use tracing::warn;

/// Environment variable that pins the random seed for reproducible sweeps.
pub const SEED_ENV: &str = "MATMUL_SEED";

/// What the sweep runs. The defaults are the benchmark; there are no flags.
#[derive(Debug, Clone)]
pub struct SweepConfig {
    /// Square matrix sizes, in order.
    pub sizes: Vec<usize>,
    /// The schedule starts at `max(cpu_count, thread_floor)` threads.
    pub thread_floor: usize,
    /// Random entries are drawn from `[0, value_bound)`.
    pub value_bound: i32,
    /// `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 100, 1000, 2000, 5000],
            thread_floor: 64,
            value_bound: 100,
            seed: None,
        }
    }
}

impl SweepConfig {
    /// Defaults, with the seed taken from `MATMUL_SEED` when it parses as `u64`.
    pub fn from_env() -> Self {
        let seed = match std::env::var(SEED_ENV) {
            Ok(raw) => match raw.trim().parse::<u64>() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    warn!(value = %raw, error = %e, "ignoring unparsable {}", SEED_ENV);
                    None
                }
            },
            Err(_) => None,
        };
        Self {
            seed,
            ..Self::default()
        }
    }

    /// The process-wide generator for this sweep.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Thread counts to run per size: halving from `max(cpu_count, floor)`
    /// while above 1, then 0 for the sequential baseline.
    ///
    /// ```
    /// use matmul_threads::sweep::SweepConfig;
    ///
    /// let cfg = SweepConfig::default();
    /// assert_eq!(cfg.thread_schedule(8), vec![64, 32, 16, 8, 4, 2, 0]);
    /// ```
    pub fn thread_schedule(&self, cpu_count: usize) -> Vec<usize> {
        let mut schedule = Vec::new();
        let mut t = cpu_count.max(self.thread_floor);
        while t > 1 {
            schedule.push(t);
            t /= 2;
        }
        schedule.push(0);
        schedule
    }
}

/// Logical CPUs available to this process, 1 if it can't be determined.
pub fn cpu_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// One timed multiplication, printed as a single benchmark line.
#[derive(Debug, Clone, Copy)]
pub struct RunReport {
    pub cpu_count: usize,
    pub threads: usize,
    pub size: usize,
    pub elapsed: Elapsed,
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:3}cpu {:3}threads {:4}*{:<4} {}",
            self.cpu_count, self.threads, self.size, self.size, self.elapsed
        )
    }
}

/// Square a fresh random `size × size` matrix with `threads` threads
/// (0 = sequential) and time only the multiplication.
pub fn run_one(
    cfg: &SweepConfig,
    rng: &mut StdRng,
    cpu_count: usize,
    size: usize,
    threads: usize,
) -> Result<RunReport> {
    let a = Matrix::random(size, size, cfg.value_bound, rng)?;
    let (product, elapsed) = timing::time(|| multiply(&a, &a, threads));
    product?;
    Ok(RunReport {
        cpu_count,
        threads,
        size,
        elapsed,
    })
}

/// Results of squaring the check matrix three ways.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub sequential: Matrix,
    pub single_thread: Matrix,
    pub multi_thread: Matrix,
}

impl CheckReport {
    pub fn is_consistent(&self) -> bool {
        self.sequential == self.single_thread && self.sequential == self.multi_thread
    }
}

/// The fixed operand used by [`self_check`].
pub fn check_matrix() -> Result<Matrix> {
    Matrix::from_vec(3, 3, vec![25, 26, 90, 14, 36, 1, 3, 9, 6])
}

/// Square [`check_matrix`] sequentially, on 1 thread and on `threads` threads.
pub fn self_check(threads: usize) -> Result<CheckReport> {
    let m = check_matrix()?;
    Ok(CheckReport {
        sequential: multiply(&m, &m, 0)?,
        single_thread: multiply(&m, &m, 1)?,
        multi_thread: multiply(&m, &m, threads.max(1))?,
    })
}
