//! Page analysis: metric extraction and scoring
//!
//! Both steps are pure functions over in-memory data. [`extract`] turns raw
//! HTML into [`PageMetrics`]; [`score`] reduces those metrics to a number.

mod extractor;
mod metrics;
mod scorer;

pub use extractor::extract;
pub use metrics::{
    collect_issues, OpenGraph, PageMetrics, ISSUE_MISSING_H1, ISSUE_MISSING_META_DESCRIPTION,
    ISSUE_MISSING_TITLE,
};
pub use scorer::{
    score, score_breakdown, RuleOutcome, ScoreRule, LINKS_COUNT_THRESHOLD, POINTS_PER_RULE,
    WORD_COUNT_THRESHOLD,
};

/// Extracts metrics from `html` and scores them in one step
///
/// # Example
///
/// ```
/// use seo_probe::analysis::analyze;
///
/// let (metrics, score) = analyze("");
/// assert_eq!(metrics.issues.len(), 3);
/// assert_eq!(score, 0);
/// ```
pub fn analyze(html: &str) -> (PageMetrics, u8) {
    let metrics = extract(html);
    let seo_score = score(&metrics);
    (metrics, seo_score)
}
