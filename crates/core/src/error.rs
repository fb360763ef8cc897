//! Error types for series evaluation, configuration loading, and reporting.

use std::fmt;
use std::path::PathBuf;

/// Error returned when a partial sum cannot be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// The requested term count was negative
    InvalidArgument { n: i64 },
}

impl fmt::Display for SeriesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesError::InvalidArgument { n } => {
                write!(f, "invalid term count {}: must be non-negative", n)
            }
        }
    }
}

impl std::error::Error for SeriesError {}

/// Error type for a driver run.
///
/// Evaluation failures and write failures on the output stream both
/// propagate through `?`.
#[derive(Debug)]
pub enum DriverError {
    /// A term count in the run was rejected
    Series(SeriesError),
    /// Writing a report line failed
    Io(std::io::Error),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Series(e) => write!(f, "{}", e),
            DriverError::Io(e) => write!(f, "failed to write report: {}", e),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Series(e) => Some(e),
            DriverError::Io(e) => Some(e),
        }
    }
}

impl From<SeriesError> for DriverError {
    fn from(e: SeriesError) -> Self {
        DriverError::Series(e)
    }
}

impl From<std::io::Error> for DriverError {
    fn from(e: std::io::Error) -> Self {
        DriverError::Io(e)
    }
}

/// Error loading a run configuration file.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The file contents were not valid configuration TOML
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::Parse(msg) => write!(f, "failed to parse config: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::Parse(_) => None,
        }
    }
}
