//! Audit module: the single-page pipeline
//!
//! URL → fetch → extract → score → report. Everything after the fetch is
//! synchronous.

mod auditor;

pub use auditor::Auditor;

use crate::config::Config;
use crate::output::Report;
use crate::ProbeError;

/// Runs a complete audit of one URL
///
/// This is the main library entry point. It builds a client from `config`,
/// fetches the page, and returns the finished report. Any failure is returned
/// as an error and no report is produced.
///
/// # Arguments
///
/// * `raw_url` - The URL to audit; `https://` is assumed when no scheme is given
/// * `config` - The probe configuration
///
/// # Returns
///
/// * `Ok(Report)` - Audit completed
/// * `Err(ProbeError)` - Audit failed
pub async fn audit(raw_url: &str, config: &Config) -> Result<Report, ProbeError> {
    Auditor::new(config)?.audit(raw_url).await
}
