//! Phase timing
//!
//! Every benchmark phase is measured with [`Instant`], which is monotonic:
//! wall-clock adjustments cannot make a phase appear to run backwards, so a
//! recorded duration is never negative.

use serde::{Serialize, Serializer};
use std::fmt;
use std::time::{Duration, Instant};

/// Decimal places kept when reporting milliseconds
pub const MILLIS_PRECISION: i32 = 4;

/// Elapsed time of one benchmark phase, in milliseconds
///
/// Serializes as a plain JSON number rounded to [`MILLIS_PRECISION`]
/// decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Millis(f64);

impl Millis {
    /// Convert a measured duration
    pub fn from_duration(elapsed: Duration) -> Self {
        let scale = 10f64.powi(MILLIS_PRECISION);
        let ms = elapsed.as_secs_f64() * 1000.0;
        Self((ms * scale).round() / scale)
    }

    /// Milliseconds as a float
    pub fn as_f64(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4} ms", self.0)
    }
}

impl Serialize for Millis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

/// Run `phase` and measure how long it took
///
/// Errors from the phase are returned untouched; a failed phase has no timing.
pub fn timed<T, E>(phase: impl FnOnce() -> Result<T, E>) -> Result<(T, Millis), E> {
    let start = Instant::now();
    let value = phase()?;
    Ok((value, Millis::from_duration(start.elapsed())))
}
