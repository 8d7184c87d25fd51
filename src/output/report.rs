//! The report emitted at the end of a run

use crate::analysis::PageMetrics;
use crate::fetch::FetchedPage;
use crate::output::traits::OutputResult;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};

/// HTTP facts carried into the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HttpSummary {
    pub status: u16,
    pub time_ms: u64,
}

impl From<&FetchedPage> for HttpSummary {
    fn from(page: &FetchedPage) -> Self {
        Self {
            status: page.status,
            time_ms: page.time_ms,
        }
    }
}

/// Complete result of one probe run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// The probed URL, scheme-defaulted
    pub url: String,

    /// When the report was assembled
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,

    pub http: HttpSummary,
    pub metrics: PageMetrics,
    pub seo_score: u8,
}

impl Report {
    /// Assembles a report stamped with the current time
    pub fn assemble(
        url: impl Into<String>,
        page: &FetchedPage,
        metrics: PageMetrics,
        seo_score: u8,
    ) -> Self {
        Self::assemble_at(url, page, metrics, seo_score, Utc::now())
    }

    /// Assembles a report with an explicit timestamp
    pub fn assemble_at(
        url: impl Into<String>,
        page: &FetchedPage,
        metrics: PageMetrics,
        seo_score: u8,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            url: url.into(),
            timestamp,
            http: HttpSummary::from(page),
            metrics,
            seo_score,
        }
    }

    /// Timestamp in the form written to the report
    pub fn timestamp_string(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Serializes the report as JSON indented by two spaces
    pub fn to_pretty_json(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// ISO-8601 in UTC with milliseconds, e.g. `2026-10-16T09:30:00.123Z`
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_timestamp<S>(timestamp: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(timestamp))
}
