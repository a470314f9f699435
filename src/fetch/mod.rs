//! Page fetching.
//!
//! One GET per scan: no retries, reqwest's default redirect policy, and any
//! non-2xx status treated like a transport failure.

use log::info;

use crate::error_handling::{transport_error, ScanError};

/// Browser-like Accept header sent with the page request.
const ACCEPT_HTML: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// Fetches `url` and returns the response body as text.
///
/// Timeout and User-Agent come from the client (see `init_client`).
///
/// # Errors
///
/// Returns a categorized `ScanError::Transport` on connection failure, timeout,
/// non-2xx status, or an unreadable body.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String, ScanError> {
    info!("Fetching {url}");

    let response = client
        .get(url)
        .header(reqwest::header::ACCEPT, ACCEPT_HTML)
        .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
        .send()
        .await
        .map_err(|e| transport_error(url, e))?;

    let status = response.status();
    let final_url = response.url().to_string();
    let response = response
        .error_for_status()
        .map_err(|e| transport_error(url, e))?;

    let body = response.text().await.map_err(|e| transport_error(url, e))?;
    info!(
        "Fetched {final_url} ({status}, {} bytes)",
        body.len()
    );

    Ok(body)
}
