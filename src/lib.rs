//! SEO Probe: a one-shot on-page SEO auditor
//!
//! This crate fetches a single web page, extracts a fixed set of on-page SEO
//! signals from its HTML, and scores the page on a 0-100 scale. The result is
//! one JSON report per run.

pub mod analysis;
pub mod audit;
pub mod config;
pub mod fetch;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for SEO Probe operations
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Invalid URL: {0}")]
    Url(#[from] UrlError),

    #[error(transparent)]
    Fetch(#[from] fetch::FetchError),

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// URL-specific errors
#[derive(Debug, Error)]
pub enum UrlError {
    #[error("URL is empty")]
    Empty,

    #[error("Failed to parse URL: {0}")]
    Parse(String),

    #[error("Missing domain in URL")]
    MissingDomain,
}

/// Result type alias for SEO Probe operations
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for URL operations
pub type UrlResult<T> = std::result::Result<T, UrlError>;

// Re-export commonly used types
pub use crate::analysis::{extract, score, PageMetrics};
pub use crate::audit::{audit, Auditor};
pub use crate::config::Config;
pub use crate::output::Report;
pub use crate::url::{normalize_input_url, InputUrl};
