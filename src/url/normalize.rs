use crate::UrlError;
use ::url::Url;

/// Scheme prefixed to inputs that carry neither `http://` nor `https://`
const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// A caller-supplied URL after scheme defaulting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputUrl {
    /// The input as reported back to the caller: trimmed and scheme-prefixed,
    /// otherwise untouched
    pub display: String,

    /// The parsed form used for the request
    pub parsed: Url,
}

impl InputUrl {
    /// Returns the string used in the report
    pub fn as_str(&self) -> &str {
        &self.display
    }
}

/// Normalizes a caller-supplied URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject if nothing remains
/// 2. If the input has no `http://` or `https://` scheme (checked
///    case-insensitively), prefix `https://`
/// 3. Parse the result; reject if malformed
/// 4. Reject URLs without a host
///
/// Only the scheme is defaulted. The path, query and fragment are kept as
/// given, and no trailing slash is added to the display form.
///
/// # Examples
///
/// ```
/// use seo_probe::url::normalize_input_url;
///
/// let url = normalize_input_url("example.com/blog").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/blog");
///
/// let url = normalize_input_url("http://example.com").unwrap();
/// assert_eq!(url.as_str(), "http://example.com");
/// ```
pub fn normalize_input_url(raw: &str) -> Result<InputUrl, UrlError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let display = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME_PREFIX, trimmed)
    };

    let parsed = Url::parse(&display).map_err(|e| UrlError::Parse(e.to_string()))?;

    match parsed.host_str() {
        Some(host) if !host.is_empty() => {}
        _ => return Err(UrlError::MissingDomain),
    }

    Ok(InputUrl { display, parsed })
}

/// Returns true if the string starts with `http://` or `https://`, any case
fn has_http_scheme(s: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        s.get(..scheme.len())
            .map(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .unwrap_or(false)
    })
}
