//! HTTP client used to deliver signed envelopes to Learnosity endpoints.

use std::collections::HashMap;
use std::time::Instant;

use reqwest::header::CONTENT_TYPE;

use crate::error::RemoteError;
use crate::types::{RemoteConfig, RemoteResponse};

/// HTTP transport for Learnosity endpoints.
///
/// One blocking request per invocation with the configured timeout. No
/// retries, no request coalescing. Responses are captured for every HTTP
/// status so the caller always sees the status code and body.
#[derive(Debug, Clone)]
pub struct Remote {
    /// Client configuration.
    config: RemoteConfig,
    /// Underlying HTTP client.
    client: reqwest::Client,
}

impl Remote {
    /// Create a new transport with the given configuration.
    pub fn new(config: RemoteConfig) -> Result<Self, RemoteError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { config, client })
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &RemoteConfig {
        &self.config
    }

    /// POST form-encoded fields to a URL and capture the outcome.
    pub async fn post(
        &self,
        url: &str,
        fields: &HashMap<String, String>,
    ) -> Result<RemoteResponse, RemoteError> {
        let form = normalize_fields(fields);
        let start = Instant::now();
        let response = self.client.post(url).form(&form).send().await?;
        capture(response, start).await
    }

    /// GET a URL with optional query fields and capture the outcome.
    pub async fn get(
        &self,
        url: &str,
        query: Option<&HashMap<String, String>>,
    ) -> Result<RemoteResponse, RemoteError> {
        let start = Instant::now();
        let mut request = self.client.get(url);
        if let Some(query) = query {
            request = request.query(&normalize_fields(query));
        }
        let response = request.send().await?;
        capture(response, start).await
    }
}

/// Read status, headers, and body out of a response.
async fn capture(
    response: reqwest::Response,
    start: Instant,
) -> Result<RemoteResponse, RemoteError> {
    let status_code = response.status().as_u16();
    let headers = response
        .headers()
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let body = response.text().await?;

    Ok(RemoteResponse {
        status_code,
        content_type,
        body,
        headers,
        time_taken: start.elapsed(),
    })
}

/// Strip backslashes from field values before encoding, a normalization
/// rule of the remote API.
fn normalize_fields(fields: &HashMap<String, String>) -> HashMap<String, String> {
    fields
        .iter()
        .map(|(key, value)| (key.clone(), value.replace('\\', "")))
        .collect()
}
