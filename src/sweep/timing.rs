use std::fmt;
use std::time::{Duration, Instant};

/// Wall-clock duration of one run, split the way the benchmark prints it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Elapsed {
    pub secs: u64,
    pub millis: u32,
    pub micros: u32,
    pub nanos: u32,
    pub total_nanos: u128,
}

impl From<Duration> for Elapsed {
    fn from(d: Duration) -> Self {
        let sub = d.subsec_nanos();
        Self {
            secs: d.as_secs(),
            millis: sub / 1_000_000,
            micros: (sub / 1_000) % 1_000,
            nanos: sub % 1_000,
            total_nanos: d.as_nanos(),
        }
    }
}

/// `  1s 234ms 567us 891ns   1234567891`
impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:3}s {:3}ms {:3}us {:3}ns {:12}",
            self.secs, self.millis, self.micros, self.nanos, self.total_nanos
        )
    }
}

/// Run `f` once and measure it on the monotonic clock.
pub fn time<T>(f: impl FnOnce() -> T) -> (T, Elapsed) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed().into())
}
