//! HTTP fetcher implementation
//!
//! This module handles the single page request of a probe run:
//! - Building the HTTP client with the configured user agent
//! - GET with a fixed timeout
//! - Capturing status, elapsed time, headers and body
//! - Classifying transport failures
//!
//! Every HTTP status is a successful fetch. Only failures to get a response at
//! all (DNS, connect, timeout, broken body) are errors.

use crate::config::FetchConfig;
use reqwest::{redirect::Policy, Client};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Fixed timeout for the whole request, body included
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Transport-level fetch failures
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} timed out after {}s", FETCH_TIMEOUT.as_secs())]
    Timeout { url: String },

    #[error("Connection to {url} failed: {message}")]
    Connect { url: String, message: String },

    #[error("Failed to read response body from {url}: {message}")]
    Body { url: String, message: String },

    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
}

/// A fetched page, whatever its status code
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code
    pub status: u16,

    /// Milliseconds from sending the request to having the full body
    pub time_ms: u64,

    /// Response headers, lowercase names; repeated headers joined with ", "
    pub headers: BTreeMap<String, String>,

    /// Response body decoded as text
    pub body: String,
}

impl FetchedPage {
    /// Returns true for 2xx responses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Looks up a header by name, case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use seo_probe::config::FetchConfig;
/// use seo_probe::fetch::build_http_client;
///
/// let client = build_http_client(&FetchConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(FETCH_TIMEOUT)
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a page with a single GET request
///
/// No retries are attempted. The timeout covers connecting, waiting for the
/// response and reading the body.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
///
/// # Returns
///
/// * `Ok(FetchedPage)` - A response was received, any status code
/// * `Err(FetchError)` - No usable response
pub async fn fetch_page(client: &Client, url: &str) -> Result<FetchedPage, FetchError> {
    let start = Instant::now();

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| classify_error(url, e))?;

    let status = response.status().as_u16();
    let headers = collect_headers(response.headers());

    let body = response.text().await.map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
            }
        } else {
            FetchError::Body {
                url: url.to_string(),
                message: e.to_string(),
            }
        }
    })?;

    let time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::debug!(
        "Fetched {} -> {} ({} bytes in {}ms)",
        url,
        status,
        body.len(),
        time_ms
    );

    Ok(FetchedPage {
        status,
        time_ms,
        headers,
        body,
    })
}

/// Maps a request error onto the fetch error taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            message: error.to_string(),
        }
    } else {
        FetchError::Request {
            url,
            message: error.to_string(),
        }
    }
}

/// Copies headers into an ordered map, skipping non-text values
fn collect_headers(headers: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut collected: BTreeMap<String, String> = BTreeMap::new();

    for (name, value) in headers {
        let Ok(value) = value.to_str() else {
            continue;
        };

        collected
            .entry(name.as_str().to_string())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    collected
}
