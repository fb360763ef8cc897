//! Evaluation driver
//!
//! Walks the configured term counts in order, evaluates each one, and writes
//! one report line per count. The first invalid count stops the run and is
//! returned to the caller; lines already written for earlier counts stay
//! written.

use crate::config::RunConfig;
use crate::error::{DriverError, SeriesError};
use crate::report::Approximation;
use crate::series::Strategy;
use std::io::Write;
use tracing::{debug, info};

/// Evaluate a single term count.
pub fn evaluate(n: i64, strategy: Strategy) -> Result<Approximation, SeriesError> {
    let partial = strategy.sum(n)?;
    let record = Approximation::from_partial_sum(n, partial);
    debug!(
        n,
        partial,
        approx_pi = record.approx_pi,
        error = record.error,
        "evaluated partial sum"
    );
    Ok(record)
}

/// Evaluate every term count in `config` and write the report to `out`.
///
/// Returns the records in the order they were written.
pub fn run<W: Write>(
    config: &RunConfig,
    out: &mut W,
) -> Result<Vec<Approximation>, DriverError> {
    info!(
        terms = config.terms.len(),
        strategy = %config.strategy,
        "starting Leibniz run"
    );

    let mut records = Vec::with_capacity(config.terms.len());
    for &n in &config.terms {
        let record = evaluate(n, config.strategy)?;
        writeln!(out, "{}", record)?;
        records.push(record);
    }
    out.flush()?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(
        config: &RunConfig,
    ) -> (Result<Vec<Approximation>, DriverError>, String) {
        let mut out = Vec::new();
        let result = run(config, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_default_report() {
        let (result, output) = run_to_string(&RunConfig::default());
        assert_eq!(result.unwrap().len(), 5);
        assert_eq!(
            output,
            "n=1     approx_pi=4.000000 error=8.584073e-01\n\
             n=5     approx_pi=3.339683 error=1.980899e-01\n\
             n=10    approx_pi=3.041840 error=9.975303e-02\n\
             n=50    approx_pi=3.121595 error=1.999800e-02\n\
             n=100   approx_pi=3.131593 error=9.999750e-03\n"
        );
    }

    #[test]
    fn test_records_follow_configured_order() {
        let config = RunConfig::new().with_terms([100, 1, 0]);
        let (result, output) = run_to_string(&config);
        let ns: Vec<i64> = result.unwrap().iter().map(|r| r.n).collect();
        assert_eq!(ns, vec![100, 1, 0]);
        assert_eq!(output.lines().count(), 3);
        assert_eq!(
            output.lines().last(),
            Some("n=0     approx_pi=0.000000 error=3.141593e+00")
        );
    }

    #[test]
    fn test_empty_terms_writes_nothing() {
        let (result, output) = run_to_string(&RunConfig::new().with_terms([]));
        assert!(result.unwrap().is_empty());
        assert!(output.is_empty());
    }

    #[test]
    fn test_invalid_term_stops_run() {
        let config = RunConfig::new().with_terms([1, -7, 5]);
        let (result, output) = run_to_string(&config);

        match result {
            Err(DriverError::Series(SeriesError::InvalidArgument { n })) => assert_eq!(n, -7),
            other => panic!("expected InvalidArgument for -7, got {:?}", other),
        }
        // Only the line before the failing count was written
        assert_eq!(output, "n=1     approx_pi=4.000000 error=8.584073e-01\n");
    }

    #[test]
    fn test_alternating_strategy_report() {
        let config = RunConfig::new()
            .with_terms([1, 5, 100])
            .with_strategy(Strategy::Alternating);
        let (result, output) = run_to_string(&config);
        assert_eq!(result.unwrap().len(), 3);
        // Rounding order differences do not reach the sixth printed digit
        assert_eq!(
            output,
            "n=1     approx_pi=4.000000 error=8.584073e-01\n\
             n=5     approx_pi=3.339683 error=1.980899e-01\n\
             n=100   approx_pi=3.131593 error=9.999750e-03\n"
        );
    }

    #[test]
    fn test_evaluate_matches_run() {
        let single = evaluate(50, Strategy::Pairwise).unwrap();
        let config = RunConfig::new().with_terms([50]);
        let (result, _) = run_to_string(&config);
        assert_eq!(result.unwrap(), vec![single]);
    }

    #[test]
    fn test_write_failure_is_io_error() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let result = run(&RunConfig::default(), &mut Closed);
        assert!(matches!(result, Err(DriverError::Io(_))));
    }
}
