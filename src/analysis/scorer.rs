//! SEO scoring
//!
//! Five independent checks, each worth a fixed number of points. There is no
//! weighting or partial credit, so the score is always a multiple of
//! [`POINTS_PER_RULE`] between 0 and 100.

use crate::analysis::metrics::PageMetrics;

/// Points awarded for each passing rule
pub const POINTS_PER_RULE: u8 = 20;

/// Body word count must be strictly greater than this
pub const WORD_COUNT_THRESHOLD: usize = 300;

/// Number of links must be strictly greater than this
pub const LINKS_COUNT_THRESHOLD: usize = 5;

/// The individual scoring rules, in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreRule {
    HasTitle,
    HasMetaDescription,
    HasH1,
    EnoughWords,
    EnoughLinks,
}

impl ScoreRule {
    /// All rules in evaluation order
    pub const ALL: [ScoreRule; 5] = [
        ScoreRule::HasTitle,
        ScoreRule::HasMetaDescription,
        ScoreRule::HasH1,
        ScoreRule::EnoughWords,
        ScoreRule::EnoughLinks,
    ];

    /// Returns true if the metrics satisfy this rule
    pub fn passes(&self, metrics: &PageMetrics) -> bool {
        match self {
            Self::HasTitle => !metrics.title.is_empty(),
            Self::HasMetaDescription => !metrics.meta_desc.is_empty(),
            Self::HasH1 => !metrics.h1.is_empty(),
            Self::EnoughWords => metrics.word_count > WORD_COUNT_THRESHOLD,
            Self::EnoughLinks => metrics.links_count > LINKS_COUNT_THRESHOLD,
        }
    }

    /// Short name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HasTitle => "title",
            Self::HasMetaDescription => "meta_description",
            Self::HasH1 => "h1",
            Self::EnoughWords => "word_count",
            Self::EnoughLinks => "links_count",
        }
    }
}

/// Outcome of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleOutcome {
    pub rule: ScoreRule,
    pub passed: bool,
}

impl RuleOutcome {
    /// Points this outcome contributes to the score
    pub fn points(&self) -> u8 {
        if self.passed {
            POINTS_PER_RULE
        } else {
            0
        }
    }
}

/// Evaluates every rule against the metrics
pub fn score_breakdown(metrics: &PageMetrics) -> Vec<RuleOutcome> {
    ScoreRule::ALL
        .iter()
        .map(|rule| RuleOutcome {
            rule: *rule,
            passed: rule.passes(metrics),
        })
        .collect()
}

/// Computes the SEO score for the metrics
///
/// # Example
///
/// ```
/// use seo_probe::analysis::{extract, score};
///
/// let metrics = extract("<title>Hi</title><h1>Hi</h1>");
/// assert_eq!(score(&metrics), 40);
/// ```
pub fn score(metrics: &PageMetrics) -> u8 {
    score_breakdown(metrics)
        .iter()
        .map(RuleOutcome::points)
        .sum()
}
