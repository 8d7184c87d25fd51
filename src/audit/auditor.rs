//! Audit orchestration
//!
//! Runs the linear pipeline for one URL:
//! - Normalizing the input URL
//! - Fetching the page
//! - Extracting metrics and scoring them
//! - Assembling the report
//!
//! A transport failure ends the run before any analysis happens.

use crate::analysis::{extract, score, score_breakdown};
use crate::config::Config;
use crate::fetch::{build_http_client, fetch_page};
use crate::output::Report;
use crate::url::normalize_input_url;
use crate::ProbeError;
use reqwest::Client;

/// Runs page audits with a shared HTTP client
pub struct Auditor {
    client: Client,
}

impl Auditor {
    /// Creates a new auditor instance
    ///
    /// # Arguments
    ///
    /// * `config` - The probe configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Auditor)` - Successfully created auditor
    /// * `Err(ProbeError)` - The HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, ProbeError> {
        let client = build_http_client(&config.fetch)?;
        Ok(Self { client })
    }

    /// Audits a single page and returns its report
    ///
    /// Non-2xx responses are analyzed like any other page; whatever body the
    /// server sent is what gets scored.
    pub async fn audit(&self, raw_url: &str) -> Result<Report, ProbeError> {
        let input = normalize_input_url(raw_url)?;
        tracing::info!("Auditing {}", input.as_str());

        let page = fetch_page(&self.client, input.parsed.as_str()).await?;
        tracing::info!("HTTP {} in {}ms", page.status, page.time_ms);

        if !page.is_success() {
            tracing::warn!(
                "Non-success status {} for {}, analyzing returned body anyway",
                page.status,
                input.as_str()
            );
        }

        let metrics = extract(&page.body);
        for outcome in score_breakdown(&metrics) {
            tracing::debug!(
                "Rule {}: {}",
                outcome.rule.as_str(),
                if outcome.passed { "pass" } else { "fail" }
            );
        }
        let seo_score = score(&metrics);

        if !metrics.is_complete() {
            tracing::info!("Issues: {}", metrics.issues.join("; "));
        }
        tracing::info!("SEO score: {}", seo_score);

        Ok(Report::assemble(input.display, &page, metrics, seo_score))
    }
}
