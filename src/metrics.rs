//! Instrumentation harness.
//!
//! Every algorithm run is wrapped by [`measure`], which reads an injected
//! [`Clock`] before and after the run. Counting comparisons stays the
//! algorithm's job: it receives a [`Comparisons`] counter and ticks it once per
//! ordering decision, and the harness only reads the final value.

use cuneiform::cuneiform;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::time::{Duration, Instant};

/// A source of monotonic timestamps.
///
/// Timestamps are durations since an arbitrary origin fixed by the clock.
/// Tests substitute a scripted clock to make elapsed times deterministic.
pub trait Clock {
    /// Returns the current timestamp.
    fn now(&self) -> Duration;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

/// [`Clock`] backed by [`std::time::Instant`].
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock whose origin is the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Comparison counter handed to each algorithm by [`measure`].
// Cache-aligned so the hot counter never shares a line with the data being sorted.
#[cuneiform]
#[derive(Debug)]
pub struct Comparisons {
    count: u64,
}

impl Comparisons {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self { count: 0 }
    }

    /// Records one ordering decision.
    #[inline(always)]
    pub fn tick(&mut self) {
        self.count += 1;
    }

    /// Returns the number of comparisons recorded so far.
    pub fn get(&self) -> u64 {
        self.count
    }
}

impl Default for Comparisons {
    fn default() -> Self {
        Self::new()
    }
}

/// Cost of one algorithm invocation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Number of ordering decisions made.
    pub comparisons: u64,
    /// Wall-clock time between the first comparison and the last swap.
    pub elapsed: Duration,
}

impl Add for Metrics {
    type Output = Metrics;

    fn add(self, rhs: Metrics) -> Metrics {
        Metrics {
            comparisons: self.comparisons + rhs.comparisons,
            elapsed: self.elapsed + rhs.elapsed,
        }
    }
}

impl AddAssign for Metrics {
    fn add_assign(&mut self, rhs: Metrics) {
        *self = *self + rhs;
    }
}

impl Sum for Metrics {
    fn sum<I: Iterator<Item = Metrics>>(iter: I) -> Metrics {
        iter.fold(Metrics::default(), Add::add)
    }
}

/// Runs `run` between two clock readings.
///
/// `run` receives a fresh [`Comparisons`] counter. The returned [`Metrics`]
/// carries the counter's final value and the elapsed time, which saturates at
/// zero if the clock ever reads backwards.
///
/// # Examples
///
/// ```
/// use towersort::metrics::{measure, MonotonicClock};
///
/// let clock = MonotonicClock::new();
/// let (sum, metrics) = measure(&clock, |counter| {
///     counter.tick();
///     counter.tick();
///     2 + 2
/// });
/// assert_eq!(sum, 4);
/// assert_eq!(metrics.comparisons, 2);
/// ```
pub fn measure<C, R, F>(clock: &C, run: F) -> (R, Metrics)
where
    C: Clock + ?Sized,
    F: FnOnce(&mut Comparisons) -> R,
{
    let mut counter = Comparisons::new();
    let start = clock.now();
    let output = run(&mut counter);
    let end = clock.now();
    let metrics = Metrics {
        comparisons: counter.get(),
        elapsed: end.saturating_sub(start),
    };
    (output, metrics)
}
