//! Error types for transport operations.

/// Errors that can occur while executing an HTTP request.
///
/// Non-2xx responses are not errors at this layer; they are captured and
/// returned so callers always see the status code and body.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// HTTP request failed at the network level (connect, timeout, read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
}
