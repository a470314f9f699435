//! Exit status and stream checks against the built binary.

use tokio::process::Command;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_site_recon"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("binary runs")
}

#[tokio::test]
async fn test_success_exits_zero_and_prints_report() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<script src="/js/jquery.min.js"></script>"#),
        )
        .mount(&server)
        .await;

    let output = run(&["scan", "-u", &server.uri(), "-t", "tech"]).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("site_recon v"));
    assert!(stdout.contains("JavaScript Libraries:\n  - jQuery\n"));
}

#[tokio::test]
async fn test_file_output_keeps_stdout_to_banner() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;
    let dir = tempfile::TempDir::new().expect("temp dir");
    let report = dir.path().join("report.txt");
    let report_arg = report.to_string_lossy().to_string();

    let output = run(&["scan", "-u", &server.uri(), "-o", &report_arg]).await;
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout.contains("Report written to"));
    assert!(!stdout.contains("[+] Detected Technologies"));
    let written = std::fs::read_to_string(&report).expect("report file");
    assert!(written.contains("No technologies detected."));
    assert!(written.contains("[!] WordPress Plugin Vulnerabilities"));
}

#[tokio::test]
async fn test_unresolvable_host_exits_one() {
    let output = run(&["scan", "-u", "http://nonexistent.invalid", "-t", "tech"]).await;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("site_recon error"));
    assert!(stderr.contains("nonexistent.invalid"));
    assert!(!stdout.contains("Site Recon Report"), "no report after a fetch failure");
}

#[tokio::test]
async fn test_server_error_exits_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let output = run(&["scan", "-u", &server.uri(), "-t", "wp"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("502"));
}

#[tokio::test]
async fn test_invalid_url_exits_one() {
    let output = run(&["scan", "-u", "not a valid url!!!"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid target URL"));
}

#[tokio::test]
async fn test_unwritable_output_exits_one() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .mount(&server)
        .await;

    let output = run(&[
        "scan",
        "-u",
        &server.uri(),
        "-o",
        "/nonexistent-site-recon-dir/report.txt",
    ])
    .await;
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to write report"));
}
