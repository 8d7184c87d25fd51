//! Integration tests for the audit pipeline
//!
//! These tests use wiremock to serve pages and run the full
//! fetch → extract → score → report cycle end-to-end.

use seo_probe::config::{Config, FetchConfig, OutputConfig};
use seo_probe::fetch::FetchError;
use seo_probe::output::{emit_all, sinks_from_config};
use seo_probe::{audit, Auditor, ProbeError};
use std::time::Duration;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with the given user agent and no echo
fn create_test_config(user_agent: &str) -> Config {
    Config {
        fetch: FetchConfig {
            user_agent: user_agent.to_string(),
            ..FetchConfig::default()
        },
        output: OutputConfig {
            report_path: None,
            echo: false,
        },
    }
}

/// A page that passes every scoring rule
fn complete_page() -> String {
    let links: String = (1..=6)
        .map(|i| format!(r#"<a href="/page{}">Page {}</a> "#, i, i))
        .collect();
    let body_text = "lorem ".repeat(301);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <title>  Complete Page  </title>
  <meta name="description" content="A page with everything">
  <meta name="robots" content="index, follow">
  <link rel="canonical" href="https://example.com/complete">
  <meta property="og:title" content="Complete">
  <meta property="og:image" content="https://example.com/og.png">
</head>
<body>
  <h1>Welcome</h1>
  <h2>One</h2><h2>Two</h2>
  <img src="/a.png"><img>
  <p>{}</p>
  <nav>{}</nav>
</body>
</html>"#,
        body_text, links
    )
}

#[tokio::test]
async fn test_full_audit_complete_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(complete_page())
                .insert_header("content-type", "text/html; charset=utf-8"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let url = format!("{}/", mock_server.uri());
    let report = audit(&url, &create_test_config("TestProbe/1.0"))
        .await
        .expect("Audit failed");

    assert_eq!(report.url, url);
    assert_eq!(report.http.status, 200);
    assert_eq!(report.seo_score, 100);

    let m = &report.metrics;
    assert_eq!(m.title, "Complete Page");
    assert_eq!(m.meta_desc, "A page with everything");
    assert_eq!(m.h1, "Welcome");
    assert_eq!(m.h2_count, 2);
    assert_eq!(m.imgs_count, 2);
    assert_eq!(m.links_count, 6);
    assert!(m.word_count > 300, "word_count was {}", m.word_count);
    assert!(m.issues.is_empty());
    assert_eq!(m.canonical.as_deref(), Some("https://example.com/complete"));
    assert_eq!(m.robots.as_deref(), Some("index, follow"));
    assert_eq!(m.og.og_title.as_deref(), Some("Complete"));
    assert_eq!(m.og.og_image.as_deref(), Some("https://example.com/og.png"));
}

#[tokio::test]
async fn test_reference_page_scores_forty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/hi"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><head><title>Hi</title></head><body><h1>Hi</h1><p>word word word</p></body></html>"#,
        ))
        .mount(&mock_server)
        .await;

    let auditor = Auditor::new(&create_test_config("TestProbe/1.0")).unwrap();
    let report = auditor
        .audit(&format!("{}/hi", mock_server.uri()))
        .await
        .expect("Audit failed");

    assert_eq!(report.metrics.word_count, 3);
    assert_eq!(report.metrics.issues, vec!["Missing meta description"]);
    assert_eq!(report.seo_score, 40);
}

#[tokio::test]
async fn test_non_success_status_is_analyzed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_string(
            "<html><head><title>Not Found</title></head><body><h1>404</h1></body></html>",
        ))
        .mount(&mock_server)
        .await;

    let report = audit(
        &format!("{}/missing", mock_server.uri()),
        &create_test_config("TestProbe/1.0"),
    )
    .await
    .expect("A 404 response should still produce a report");

    assert_eq!(report.http.status, 404);
    assert_eq!(report.metrics.title, "Not Found");
    assert_eq!(report.metrics.issues, vec!["Missing meta description"]);
    assert_eq!(report.seo_score, 40);
}

#[tokio::test]
async fn test_server_error_with_empty_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let report = audit(&mock_server.uri(), &create_test_config("TestProbe/1.0"))
        .await
        .expect("A 503 response should still produce a report");

    assert_eq!(report.http.status, 503);
    assert_eq!(report.metrics.word_count, 0);
    assert_eq!(
        report.metrics.issues,
        vec!["Missing <title>", "Missing meta description", "Missing H1"]
    );
    assert_eq!(report.seo_score, 0);
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("user-agent", "ProbeUnderTest/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<title>UA</title>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = audit(&mock_server.uri(), &create_test_config("ProbeUnderTest/2.0"))
        .await
        .expect("Audit failed");

    assert_eq!(report.metrics.title, "UA");
}

#[tokio::test]
async fn test_redirect_is_followed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Moved here</h1>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let report = audit(
        &format!("{}/old", mock_server.uri()),
        &create_test_config("TestProbe/1.0"),
    )
    .await
    .expect("Audit failed");

    assert_eq!(report.http.status, 200);
    assert_eq!(report.metrics.h1, "Moved here");
    // The report keeps the URL the caller asked for
    assert!(report.url.ends_with("/old"));
}

#[tokio::test]
async fn test_redirect_limit_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/loop"))
        .respond_with(ResponseTemplate::new(302).insert_header("location", "/loop"))
        .mount(&mock_server)
        .await;

    let mut config = create_test_config("TestProbe/1.0");
    config.fetch.max_redirects = 2;

    let result = audit(&format!("{}/loop", mock_server.uri()), &config).await;
    assert!(matches!(result, Err(ProbeError::Fetch(_))));
}

#[tokio::test]
async fn test_connection_refused_yields_no_report() {
    // Reserve a port, then free it so nothing is listening there
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let result = audit(
        &format!("http://127.0.0.1:{}/", port),
        &create_test_config("TestProbe/1.0"),
    )
    .await;

    match result {
        Err(ProbeError::Fetch(e)) => {
            assert!(matches!(e, FetchError::Connect { .. }), "unexpected: {e}");
            assert!(!e.to_string().is_empty());
        }
        other => panic!("Expected fetch error, got {:?}", other.map(|r| r.seo_score)),
    }
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<title>Too late</title>")
                .set_delay(Duration::from_secs(12)),
        )
        .mount(&mock_server)
        .await;

    let result = audit(&mock_server.uri(), &create_test_config("TestProbe/1.0")).await;

    assert!(matches!(
        result,
        Err(ProbeError::Fetch(FetchError::Timeout { .. }))
    ));
}

#[tokio::test]
async fn test_invalid_url_is_terminal() {
    let result = audit("", &create_test_config("TestProbe/1.0")).await;
    assert!(matches!(result, Err(ProbeError::Url(_))));
}

#[tokio::test]
async fn test_report_written_to_file_sink() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<title>Saved</title><meta name="description" content="desc"><h1>H</h1>"#,
        ))
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let report_path = dir.path().join("out").join("report.json");

    let mut config = create_test_config("TestProbe/1.0");
    config.output.report_path = Some(report_path.display().to_string());

    let report = audit(&mock_server.uri(), &config).await.expect("Audit failed");
    emit_all(&report, &sinks_from_config(&config.output)).expect("Emit failed");

    let content = std::fs::read_to_string(&report_path).unwrap();
    assert_eq!(content, format!("{}\n", report.to_pretty_json().unwrap()));

    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["seo_score"], 60);
    assert_eq!(value["metrics"]["metaDesc"], "desc");
    assert!(value["timestamp"].as_str().unwrap().ends_with('Z'));
    assert!(value["http"]["time_ms"].is_u64());
}
