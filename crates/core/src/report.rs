//! Report records and their line format
//!
//! One [`Approximation`] is produced per evaluated term count. Its `Display`
//! form is the report line:
//!
//! ```text
//! n=1     approx_pi=4.000000 error=8.584073e-01
//! ```

use std::f64::consts::PI;
use std::fmt;

/// Digits after the decimal point for both `approx_pi` and `error`
pub const REPORT_PRECISION: usize = 6;

/// Width of the left-justified term count column
pub const TERM_COUNT_WIDTH: usize = 5;

/// One evaluated term count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Approximation {
    /// Number of series terms summed
    pub n: i64,
    /// Four times the partial sum
    pub approx_pi: f64,
    /// `|approx_pi - pi|`
    pub error: f64,
}

impl Approximation {
    /// Build the record for `n` terms from their partial sum.
    pub fn from_partial_sum(n: i64, partial: f64) -> Self {
        let approx_pi = 4.0 * partial;
        Approximation {
            n,
            approx_pi,
            error: (approx_pi - PI).abs(),
        }
    }
}

impl fmt::Display for Approximation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={:<width$} approx_pi={:.prec$} error={}",
            self.n,
            self.approx_pi,
            format_scientific(self.error, REPORT_PRECISION),
            width = TERM_COUNT_WIDTH,
            prec = REPORT_PRECISION,
        )
    }
}

/// Format `value` in scientific notation with `precision` fractional digits
/// and a signed exponent of at least two digits (`1.234500e-03`).
///
/// Rust's `{:e}` writes `1.2345e-3`; the report format pads the exponent.
/// Non-finite values are written as `{:e}` renders them.
pub fn format_scientific(value: f64, precision: usize) -> String {
    let raw = format!("{:.*e}", precision, value);
    let Some((mantissa, exponent)) = raw.split_once('e') else {
        return raw;
    };
    match exponent.parse::<i32>() {
        Ok(exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.unsigned_abs())
        }
        Err(_) => raw,
    }
}
