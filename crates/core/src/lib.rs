//! Leibniz Core: partial sums of the Leibniz series for pi
//!
//! Sums the first `n` terms of `1 - 1/3 + 1/5 - 1/7 + ...`, scales by four to
//! approximate pi, and reports the absolute error against
//! [`std::f64::consts::PI`].
//!
//! # Modules
//!
//! - `series`: the summation itself ([`leibniz_sum`], [`Strategy`])
//! - `report`: per-count records and the report line format
//! - `config`: which term counts to evaluate, optionally from TOML
//! - `driver`: evaluates a [`RunConfig`] and writes the report
//! - `error`: error types for all of the above
//!
//! # Example
//!
//! ```
//! use leibniz_core::{RunConfig, driver};
//!
//! let mut out = Vec::new();
//! driver::run(&RunConfig::new().with_terms([1]), &mut out)?;
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "n=1     approx_pi=4.000000 error=8.584073e-01\n"
//! );
//! # Ok::<(), leibniz_core::DriverError>(())
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod report;
pub mod series;

pub use config::{DEFAULT_TERMS, RunConfig};
pub use error::{ConfigError, DriverError, SeriesError};
pub use report::{Approximation, format_scientific};
pub use series::{Strategy, leibniz_sum};
