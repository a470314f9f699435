//! Transport error categorization.

use super::types::{ScanError, TransportErrorKind};

/// Categorizes a `reqwest::Error` into a `TransportErrorKind`.
///
/// Status errors are checked first so that a non-2xx response is reported as
/// such even when reqwest also flags it as a request error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> TransportErrorKind {
    if error.is_status() || error.status().is_some() {
        return TransportErrorKind::HttpRequestStatusError;
    }

    if error.is_builder() {
        TransportErrorKind::HttpRequestBuilderError
    } else if error.is_redirect() {
        TransportErrorKind::HttpRequestRedirectError
    } else if error.is_timeout() {
        TransportErrorKind::HttpRequestTimeoutError
    } else if error.is_connect() {
        TransportErrorKind::HttpRequestConnectError
    } else if error.is_request() {
        TransportErrorKind::HttpRequestRequestError
    } else if error.is_body() {
        TransportErrorKind::HttpRequestBodyError
    } else if error.is_decode() {
        TransportErrorKind::HttpRequestDecodeError
    } else {
        TransportErrorKind::HttpRequestOtherError
    }
}

/// Wraps a `reqwest::Error` for `url` into a categorized `ScanError::Transport`.
pub fn transport_error(url: &str, error: reqwest::Error) -> ScanError {
    ScanError::Transport {
        url: url.to_string(),
        kind: categorize_reqwest_error(&error),
        source: error,
    }
}
