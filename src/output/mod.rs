//! Output module for assembling and emitting reports
//!
//! This module handles:
//! - Assembling the final [`Report`] from fetch facts, metrics and score
//! - Serializing it as pretty-printed JSON
//! - Writing it to one or more [`ReportSink`]s

mod console;
mod json_file;
mod report;
mod traits;

pub use console::{write_report, ConsoleSink};
pub use json_file::JsonFileSink;
pub use report::{HttpSummary, Report};
pub use traits::{emit_all, OutputError, OutputResult, ReportSink};

use crate::config::OutputConfig;

/// Builds the sinks described by the output configuration
///
/// The file sink comes first so the host channel is written before the echo.
pub fn sinks_from_config(config: &OutputConfig) -> Vec<Box<dyn ReportSink>> {
    let mut sinks: Vec<Box<dyn ReportSink>> = Vec::new();

    if let Some(path) = &config.report_path {
        sinks.push(Box::new(JsonFileSink::new(path)));
    }

    if config.echo {
        sinks.push(Box::new(ConsoleSink::new()));
    }

    sinks
}
