//! JSON file report sink
//!
//! This is the host-facing output channel: the calling environment points the
//! probe at a path and reads the report back from there.

use crate::output::report::Report;
use crate::output::traits::{OutputError, OutputResult, ReportSink};
use std::path::{Path, PathBuf};

/// Sink that writes the report to a file, replacing any previous content
#[derive(Debug, Clone)]
pub struct JsonFileSink {
    path: PathBuf,
    name: String,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: std::io::Error) -> OutputError {
        OutputError::Write {
            target: self.name.clone(),
            source,
        }
    }
}

impl ReportSink for JsonFileSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn emit(&self, report: &Report) -> OutputResult<()> {
        let json = report.to_pretty_json()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
            }
        }

        std::fs::write(&self.path, format!("{}\n", json)).map_err(|e| self.write_error(e))?;
        tracing::info!("Report written to {}", self.name);
        Ok(())
    }
}
