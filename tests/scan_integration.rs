//! Integration tests for run_scan
//!
//! These tests serve pages from a local wiremock server and check the rendered
//! report, the output file and the transport failure paths.

use site_recon::{run_scan, Config, LogFormat, LogLevel, ReportDestination, ScanError, ScanType};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta http-equiv="Strict-Transport-Security" content="max-age=31536000">
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
  <script src="//cdn.jsdelivr.net/npm/jquery-3.5.1.min.js"></script>
  <script src="https://www.googletagmanager.com/gtag/js?id=G-TEST"></script>
  <script src="/js/jquery.js"></script>
</head>
<body><p>Hello</p></body>
</html>"#;

async fn serve(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn test_config(url: String, scan_type: ScanType, output: &std::path::Path) -> Config {
    Config {
        url,
        scan_type,
        output: Some(output.to_path_buf()),
        timeout_seconds: 5,
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_tech_scan_writes_report_file() {
    let server = serve(PAGE).await;
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("report.txt");

    let outcome = run_scan(test_config(server.uri(), ScanType::Tech, &output))
        .await
        .expect("scan succeeds");

    assert_eq!(outcome.destination, ReportDestination::File(output.clone()));
    let written = std::fs::read_to_string(&output).expect("report file");
    assert_eq!(written, outcome.text);

    assert!(written.contains("[+] Detected Technologies"));
    assert!(written.contains("JavaScript Libraries:\n  - jQuery\n"));
    assert!(written.contains("CSS Frameworks:\n  - Bootstrap\n"));
    assert!(written.contains("Analytics:\n  - Google Analytics\n"));
    assert!(written.contains("Security:\n  - HSTS\n"));
    assert!(!written.contains("[!]"));
    // The banner is terminal-only
    assert!(!written.contains("site_recon v"));
}

#[tokio::test]
async fn test_wp_scan_has_only_vulnerabilities() {
    let server = serve(PAGE).await;
    let output = NamedTempFile::new().expect("temp file");

    let outcome = run_scan(test_config(server.uri(), ScanType::Wp, output.path()))
        .await
        .expect("scan succeeds");

    assert!(outcome.report.technologies.is_none());
    assert!(outcome.text.contains("[!] WordPress Plugin Vulnerabilities"));
    assert!(outcome.text.contains("CRITICAL (3):"));
    assert!(!outcome.text.contains("[+] Detected Technologies"));
}

#[tokio::test]
async fn test_full_scan_without_matches_is_verbose() {
    let server = serve("<html><head><title>plain</title></head></html>").await;
    let output = NamedTempFile::new().expect("temp file");
    let mut config = test_config(server.uri(), ScanType::Full, output.path());
    config.verbose = true;

    let outcome = run_scan(config).await.expect("scan succeeds");

    assert!(outcome.text.contains("No technologies detected."));
    assert!(outcome.text.contains("[!] WordPress Plugin Vulnerabilities"));
    assert!(outcome.text.contains("[*] Scan Details"));
    assert!(outcome.text.contains("Total vulnerabilities: 12"));
}

#[tokio::test]
async fn test_custom_signature_catalog() {
    let server = serve(r#"<script src="/static/acme-widget.min.js"></script>"#).await;
    let output = NamedTempFile::new().expect("temp file");
    let mut signatures = NamedTempFile::new().expect("temp file");
    write!(
        signatures,
        r#"[{{"category": "Internal", "technologies": [{{"name": "Acme Widget", "patterns": ["ACME-WIDGET"]}}]}}]"#
    )
    .expect("write catalog");

    let mut config = test_config(server.uri(), ScanType::Tech, output.path());
    config.signatures = Some(signatures.path().to_path_buf());

    let outcome = run_scan(config).await.expect("scan succeeds");
    assert!(outcome.text.contains("Internal:\n  - Acme Widget\n"));
}

#[tokio::test]
async fn test_invalid_signature_catalog_is_unexpected_error() {
    let server = serve(PAGE).await;
    let output = NamedTempFile::new().expect("temp file");
    let mut signatures = NamedTempFile::new().expect("temp file");
    write!(signatures, "not json").expect("write catalog");

    let mut config = test_config(server.uri(), ScanType::Tech, output.path());
    config.signatures = Some(signatures.path().to_path_buf());

    match run_scan(config).await {
        Err(e @ ScanError::Unexpected(_)) => assert_eq!(e.exit_code(), 1),
        other => panic!("Expected unexpected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_aborts_without_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let dir = TempDir::new().expect("temp dir");
    let output = dir.path().join("report.txt");

    let err = run_scan(test_config(server.uri(), ScanType::Full, &output))
        .await
        .expect_err("500 must fail the scan");

    assert!(matches!(err, ScanError::Transport { .. }));
    assert!(err.is_transport());
    assert_eq!(err.exit_code(), 1);
    assert!(!output.exists(), "no report is written after a fetch failure");
}

#[tokio::test]
async fn test_wp_scan_still_fetches_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;
    let output = NamedTempFile::new().expect("temp file");

    let err = run_scan(test_config(server.uri(), ScanType::Wp, output.path()))
        .await
        .expect_err("fetch failure aborts every scan type");
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_connection_refused() {
    // Bind then drop a listener to get a port nothing is listening on
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
        listener.local_addr().expect("addr").port()
    };
    let output = NamedTempFile::new().expect("temp file");

    match run_scan(test_config(
        format!("http://127.0.0.1:{port}/"),
        ScanType::Tech,
        output.path(),
    ))
    .await
    {
        Err(ScanError::Transport { url, .. }) => {
            assert_eq!(url, format!("http://127.0.0.1:{port}/"));
        }
        other => panic!("Expected transport error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_invalid_url_makes_no_request() {
    let output = NamedTempFile::new().expect("temp file");
    match run_scan(test_config(
        "not a valid url!!!".to_string(),
        ScanType::Full,
        output.path(),
    ))
    .await
    {
        Err(e @ ScanError::InvalidUrl(_)) => assert!(e.is_transport()),
        other => panic!("Expected invalid URL, got {other:?}"),
    }
}

#[tokio::test]
async fn test_upper_case_scheme_reaches_the_right_host() {
    let server = serve(PAGE).await;
    let output = NamedTempFile::new().expect("temp file");
    let target = server.uri().replacen("http://", "HTTP://", 1);

    let outcome = run_scan(test_config(target.clone(), ScanType::Tech, output.path()))
        .await
        .expect("scan succeeds");
    assert_eq!(outcome.report.target, target);
    assert!(outcome.text.contains("JavaScript Libraries:\n  - jQuery\n"));
}

#[tokio::test]
async fn test_non_http_scheme_is_invalid_url() {
    let output = NamedTempFile::new().expect("temp file");
    match run_scan(test_config(
        "ftp://example.com".to_string(),
        ScanType::Full,
        output.path(),
    ))
    .await
    {
        Err(ScanError::InvalidUrl(input)) => assert_eq!(input, "ftp://example.com"),
        other => panic!("Expected invalid URL, got {other:?}"),
    }
}
