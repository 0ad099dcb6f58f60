//! Startup failures: the phase before the event loop and `tracing` are
//! running, where diagnostics must work on their own (spec §7).

use std::fmt;
use std::path::PathBuf;

/// A failure that prevents the event loop from ever starting.
///
/// Surfaced on stderr and mapped to a non-zero exit code by `main` (spec
/// §6 — missing/invalid CLI argument and failure to open either log file).
#[derive(Debug)]
#[non_exhaustive]
pub enum StartupError {
    /// A sink log file (`output.log` or `debug.log`) could not be created
    /// and truncated.
    LogFileOpen { path: PathBuf, source: std::io::Error },

    /// A sink write failed once the event loop was already running. Not
    /// part of the spec's normal failure taxonomy (§6 only defines startup
    /// and decode failures), but a write to a closed pipe or a full disk
    /// has to go somewhere, so it is reported the same way.
    SinkWrite(std::io::Error),
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::LogFileOpen { path, source } => {
                write!(f, "failed to open log file {}: {source}", path.display())
            }
            StartupError::SinkWrite(source) => write!(f, "failed writing to a sink: {source}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::LogFileOpen { source, .. } => Some(source),
            StartupError::SinkWrite(source) => Some(source),
        }
    }
}
