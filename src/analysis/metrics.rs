use serde::{Deserialize, Serialize};

/// Issue recorded when the page has no usable `<title>`
pub const ISSUE_MISSING_TITLE: &str = "Missing <title>";

/// Issue recorded when the page has no usable meta description
pub const ISSUE_MISSING_META_DESCRIPTION: &str = "Missing meta description";

/// Issue recorded when the page has no usable `<h1>`
pub const ISSUE_MISSING_H1: &str = "Missing H1";

/// On-page SEO signals extracted from one HTML document
///
/// Required text fields are empty strings when absent; the optional fields
/// are `None`. Scoring and issue detection only look at the required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Trimmed text of the first `<title>`
    pub title: String,

    /// Verbatim `content` of the first `meta[name=description]`
    #[serde(rename = "metaDesc")]
    pub meta_desc: String,

    /// Trimmed text of the first `<h1>`
    pub h1: String,

    pub h2_count: usize,
    pub imgs_count: usize,
    pub links_count: usize,

    /// Whitespace-delimited tokens in the body text
    pub word_count: usize,

    /// Missing-element findings, always in title, description, H1 order
    pub issues: Vec<String>,

    pub canonical: Option<String>,
    pub robots: Option<String>,
    pub og: OpenGraph,
}

/// Open Graph fields used for social sharing previews
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenGraph {
    #[serde(rename = "ogTitle")]
    pub og_title: Option<String>,

    #[serde(rename = "ogImage")]
    pub og_image: Option<String>,
}

impl PageMetrics {
    /// Returns true if no issue was recorded
    pub fn is_complete(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Builds the issue list for the given required fields
///
/// Checks run in a fixed order so the output is reproducible.
pub fn collect_issues(title: &str, meta_desc: &str, h1: &str) -> Vec<String> {
    [
        (title, ISSUE_MISSING_TITLE),
        (meta_desc, ISSUE_MISSING_META_DESCRIPTION),
        (h1, ISSUE_MISSING_H1),
    ]
    .into_iter()
    .filter(|(value, _)| value.is_empty())
    .map(|(_, issue)| issue.to_string())
    .collect()
}
