//! Timing and reporting for strategy comparisons.
//!
//! ## Purpose
//!
//! This module measures wall-clock time around a filter run and renders the
//! two-line summary printed for each strategy: a count/timing line followed
//! by a preview sample of the primes found.
//!
//! ## Design notes
//!
//! * **Display-only**: Previews never alter the result they describe.
//! * **Unordered results**: `SortedBelow` sorts a filtered copy, which is how
//!   a parallel result is shown.
//!
//! ## Non-goals
//!
//! * This module does not read input or write to stdout itself.

// External dependencies
use num_traits::PrimInt;
use std::fmt::{Display, Formatter, Result};
use std::time::{Duration, Instant};

// Export dependencies from primes crate
use primes::internals::engine::output::PrimeResult;

// ============================================================================
// Timing
// ============================================================================

/// Run `f`, returning its output and the elapsed wall-clock time.
pub fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let out = f();
    (out, start.elapsed())
}

// ============================================================================
// Preview Selection
// ============================================================================

/// Which primes to show under the summary line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preview<T> {
    /// The first `n` primes as stored.
    Head(usize),

    /// Every prime strictly below the bound, ascending.
    SortedBelow(T),
}

// ============================================================================
// Strategy Report
// ============================================================================

/// Summary of one strategy run.
#[derive(Debug, Clone)]
pub struct StrategyReport<'a, T> {
    /// Label shown at the start of the summary line.
    pub label: &'a str,

    /// Result being reported.
    pub result: &'a PrimeResult<T>,

    /// Wall-clock time of the run.
    pub elapsed: Duration,

    /// Sample shown under the summary line.
    pub preview: Preview<T>,
}

impl<'a, T: PrimInt> StrategyReport<'a, T> {
    /// Create a report.
    pub fn new(
        label: &'a str,
        result: &'a PrimeResult<T>,
        elapsed: Duration,
        preview: Preview<T>,
    ) -> Self {
        Self {
            label,
            result,
            elapsed,
            preview,
        }
    }

    /// Values selected by the preview.
    pub fn sample(&self) -> Vec<T> {
        match self.preview {
            Preview::Head(n) => self.result.head(n).to_vec(),
            Preview::SortedBelow(bound) => self.result.sorted_below(bound),
        }
    }
}

impl<T: PrimInt + Display> Display for StrategyReport<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(
            f,
            "{:<17} | Total prime numbers : {} | Time Taken : {} ms.",
            self.label,
            self.result.count(),
            self.elapsed.as_millis()
        )?;

        let sample = self.sample();
        for (i, value) in sample.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{value}")?;
        }

        Ok(())
    }
}
