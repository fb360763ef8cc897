//! Partial sums of the Leibniz series
//!
//! The series `1 - 1/3 + 1/5 - 1/7 + ...` converges to pi/4. Everything in
//! this module computes the sum of its first `n` terms,
//! `sum_{i=0}^{n-1} (-1)^i / (2i + 1)`, in double precision.
//!
//! Two summation orders are provided:
//!
//! - [`Strategy::Pairwise`] (canonical): adds `1/(4p+1) - 1/(4p+3)` for each
//!   complete pair of terms, then the trailing positive term when `n` is odd.
//! - [`Strategy::Alternating`]: adds each term with a flipping sign. Kept as a
//!   cross-check for the pairwise order.
//!
//! The two agree up to floating-point rounding order.

use crate::error::SeriesError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Summation order used to evaluate a partial sum
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Pairs of terms grouped before accumulation (default)
    #[default]
    Pairwise,
    /// One signed term per accumulation
    Alternating,
}

impl Strategy {
    /// Sum the first `n` terms using this strategy.
    ///
    /// Fails with [`SeriesError::InvalidArgument`] when `n` is negative.
    pub fn sum(self, n: i64) -> Result<f64, SeriesError> {
        if n < 0 {
            return Err(SeriesError::InvalidArgument { n });
        }
        Ok(match self {
            Strategy::Pairwise => pairwise_sum(n),
            Strategy::Alternating => alternating_sum(n),
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Pairwise => "pairwise",
            Strategy::Alternating => "alternating",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Parsing for callers without the `clap` feature
impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pairwise" => Ok(Strategy::Pairwise),
            "alternating" => Ok(Strategy::Alternating),
            other => Err(format!(
                "unknown strategy '{}' (expected 'pairwise' or 'alternating')",
                other
            )),
        }
    }
}

/// Sum the first `n` terms of the Leibniz series.
///
/// This is the canonical evaluation (pairwise order). `n = 0` is the empty
/// sum and yields exactly `0.0`; `n = 1` yields exactly `1.0`. Negative `n`
/// is rejected rather than mapped to zero.
pub fn leibniz_sum(n: i64) -> Result<f64, SeriesError> {
    Strategy::Pairwise.sum(n)
}

/// Pairwise order. Caller guarantees `n >= 0`.
fn pairwise_sum(n: i64) -> f64 {
    let mut total = 0.0;
    for p in 0..n / 2 {
        let base = 4.0 * p as f64;
        total += 1.0 / (base + 1.0) - 1.0 / (base + 3.0);
    }
    // Unpaired last term has even index n-1, so it is positive: 1/(2(n-1)+1)
    if n % 2 == 1 {
        total += 1.0 / (2.0 * n as f64 - 1.0);
    }
    total
}

/// Alternating order. Caller guarantees `n >= 0`.
fn alternating_sum(n: i64) -> f64 {
    let mut total = 0.0;
    let mut sign = 1.0;
    for i in 0..n {
        total += sign / (2.0 * i as f64 + 1.0);
        sign = -sign;
    }
    total
}
