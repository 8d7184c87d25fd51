//! HTML metric extraction
//!
//! Parsing goes through html5ever (via `scraper`), which recovers from
//! unclosed tags, missing doctypes and bad nesting the way browsers do. Any
//! input string yields a document, so extraction itself cannot fail.

use crate::analysis::metrics::{collect_issues, OpenGraph, PageMetrics};
use scraper::{ElementRef, Html, Selector};

/// Extracts on-page SEO metrics from an HTML document
///
/// # Extraction Rules
///
/// - `title`, `h1`: trimmed text of the first matching element
/// - `metaDesc`: verbatim `content` of the first `meta[name="description"]`
/// - `h2_count`, `imgs_count`, `links_count`: every matching element, whether
///   or not it carries `src` / `href`
/// - `word_count`: body text nodes joined with no separator, then split on
///   whitespace
/// - `canonical`, `robots`, `og`: `None` when the element or attribute is
///   missing or empty
///
/// # Example
///
/// ```
/// use seo_probe::analysis::extract;
///
/// let html = r#"<html><head><title>Hi</title></head><body><h1>Hi</h1><p>word word word</p></body></html>"#;
/// let metrics = extract(html);
/// assert_eq!(metrics.title, "Hi");
/// assert_eq!(metrics.word_count, 3);
/// assert_eq!(metrics.issues, vec!["Missing meta description"]);
/// ```
pub fn extract(html: &str) -> PageMetrics {
    let document = Html::parse_document(html);

    let title = first_text(&document, "title");
    let meta_desc = first_attr(&document, r#"meta[name="description"]"#, "content")
        .unwrap_or_default();
    let h1 = first_text(&document, "h1");

    let issues = collect_issues(&title, &meta_desc, &h1);

    PageMetrics {
        h2_count: count(&document, "h2"),
        imgs_count: count(&document, "img"),
        links_count: count(&document, "a"),
        word_count: body_word_count(&document),
        issues,
        canonical: optional_attr(&document, r#"link[rel="canonical"]"#, "href"),
        robots: optional_attr(&document, r#"meta[name="robots"]"#, "content"),
        og: OpenGraph {
            og_title: optional_attr(&document, r#"meta[property="og:title"]"#, "content"),
            og_image: optional_attr(&document, r#"meta[property="og:image"]"#, "content"),
        },
        title,
        meta_desc,
        h1,
    }
}

/// Returns the first element matching `css`, if any
fn first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

/// Trimmed text of the first element matching `css`, or an empty string
fn first_text(document: &Html, css: &str) -> String {
    first(document, css)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Verbatim attribute of the first element matching `css`
///
/// Later matches are not consulted even when the first one lacks the
/// attribute.
fn first_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    first(document, css)
        .and_then(|element| element.value().attr(attr))
        .map(str::to_string)
}

/// Like [`first_attr`], but an empty value counts as absent
fn optional_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    first_attr(document, css, attr).filter(|value| !value.is_empty())
}

/// Number of elements matching `css`
fn count(document: &Html, css: &str) -> usize {
    Selector::parse(css)
        .map(|selector| document.select(&selector).count())
        .unwrap_or(0)
}

/// Counts whitespace-delimited tokens in the body text
///
/// Text nodes are concatenated as-is, so `<h1>Hi</h1><p>there</p>` reads as
/// the single token `Hithere`.
fn body_word_count(document: &Html) -> usize {
    first(document, "body")
        .map(|body| body.text().collect::<String>().split_whitespace().count())
        .unwrap_or(0)
}
