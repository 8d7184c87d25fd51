use serde::Deserialize;

/// Default maximum number of redirects followed for the page fetch
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Main configuration structure for SEO Probe
///
/// Every section is optional; an empty file yields the defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// HTTP fetch configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FetchConfig {
    /// User-Agent header sent with the page request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Maximum number of redirects to follow before giving up
    #[serde(rename = "max-redirects", default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            max_redirects: default_max_redirects(),
        }
    }
}

/// Report output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// File the JSON report is written to, if any
    #[serde(rename = "report-path", default)]
    pub report_path: Option<String>,

    /// Whether the report is echoed to stdout
    #[serde(default = "default_echo")]
    pub echo: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: None,
            echo: default_echo(),
        }
    }
}

fn default_user_agent() -> String {
    format!("seo-probe/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_redirects() -> usize {
    DEFAULT_MAX_REDIRECTS
}

fn default_echo() -> bool {
    true
}
