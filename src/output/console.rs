//! Console report sink
//!
//! Echoes the pretty-printed report to stdout. Logs go to stderr, so stdout
//! carries nothing but the report and can be piped straight into `jq`.

use crate::output::report::Report;
use crate::output::traits::{OutputError, OutputResult, ReportSink};
use std::io::Write;

/// Sink that prints the report to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl ReportSink for ConsoleSink {
    fn name(&self) -> &str {
        "stdout"
    }

    fn emit(&self, report: &Report) -> OutputResult<()> {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        write_report(report, &mut handle).map_err(|e| match e {
            OutputError::Write { source, .. } => OutputError::Write {
                target: self.name().to_string(),
                source,
            },
            other => other,
        })
    }
}

/// Writes the pretty JSON report followed by a newline
pub fn write_report<W: Write>(report: &Report, writer: &mut W) -> OutputResult<()> {
    let json = report.to_pretty_json()?;
    writeln!(writer, "{}", json)
        .and_then(|_| writer.flush())
        .map_err(|source| OutputError::Write {
            target: "writer".to_string(),
            source,
        })
}
