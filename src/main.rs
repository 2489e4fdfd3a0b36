//! Benchmark runner: sequential vs. partitioned multiplication.
//!
//! Prints one line per run to stdout. Logs go to stderr (`RUST_LOG`).

use matmul_threads::sweep::{self, SweepConfig};
use std::io::Write;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> matmul_threads::Result<ExitCode> {
    let cfg = SweepConfig::from_env();
    let cpus = sweep::cpu_count();

    let check = sweep::self_check(cpus)?;
    if !check.is_consistent() {
        error!("sequential and threaded results disagree");
        println!("{}", check.sequential);
        println!("{}", check.single_thread);
        print!("{}", check.multi_thread);
        return Ok(ExitCode::FAILURE);
    }
    info!(cpus, "self-check passed");

    let mut rng = cfg.rng();
    let schedule = cfg.thread_schedule(cpus);
    info!(sizes = ?cfg.sizes, ?schedule, seed = ?cfg.seed, "starting sweep");

    let stdout = std::io::stdout();
    for &size in &cfg.sizes {
        for &threads in &schedule {
            let report = sweep::run_one(&cfg, &mut rng, cpus, size, threads)?;
            let mut out = stdout.lock();
            // A closed pipe just ends the benchmark early.
            if writeln!(out, "{report}").and_then(|_| out.flush()).is_err() {
                return Ok(ExitCode::SUCCESS);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
