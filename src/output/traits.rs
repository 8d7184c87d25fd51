//! Report sink trait and output errors
//!
//! A sink is anywhere a finished report goes: the console, a file handed to
//! the host environment, and so on. Sinks only see complete reports; a failed
//! run never reaches them.

use crate::output::report::Report;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report to {target}: {source}")]
    Write {
        target: String,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for report sinks
pub trait ReportSink {
    /// Short human-readable name, used in logs
    fn name(&self) -> &str;

    /// Writes the report to this sink
    fn emit(&self, report: &Report) -> OutputResult<()>;
}

/// Emits the report to each sink in order, stopping at the first failure
pub fn emit_all(report: &Report, sinks: &[Box<dyn ReportSink>]) -> OutputResult<()> {
    for sink in sinks {
        tracing::debug!("Emitting report to {}", sink.name());
        sink.emit(report)?;
    }
    Ok(())
}
