//! Transport data types: configuration and captured responses.

use std::time::Duration;

/// Configuration for a [`Remote`](crate::Remote) client.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Timeout applied to each request.
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

/// The captured outcome of one HTTP request.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    /// HTTP status code.
    pub status_code: u16,
    /// Value of the `Content-Type` response header, empty if absent.
    pub content_type: String,
    /// Response body as text.
    pub body: String,
    /// All response headers in received order.
    pub headers: Vec<(String, String)>,
    /// Wall-clock time the request took.
    pub time_taken: Duration,
}

impl RemoteResponse {
    /// Whether the status code is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }

    /// Look up a response header by name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
