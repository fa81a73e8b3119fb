//! Data API types: configuration and the string-typed result record.

use serde::{Deserialize, Serialize};

use learnosity_remote::RemoteConfig;

/// Configuration for a [`DataClient`](crate::DataClient).
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// Endpoint URL (e.g. `https://data.learnosity.com/v1/itembank/items`).
    pub url: String,
    /// Transport configuration.
    pub remote: RemoteConfig,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            url: "https://data.learnosity.com/v1".to_string(),
            remote: RemoteConfig::default(),
        }
    }
}

/// Result of a Data API call with every field rendered as a string, for
/// direct serialization to callers expecting string-typed API responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResult {
    /// Response body.
    pub body: String,
    /// Response content type.
    #[serde(rename = "contentType")]
    pub content_type: String,
    /// HTTP status code.
    #[serde(rename = "statusCode")]
    pub status_code: String,
    /// Whole seconds the request took.
    #[serde(rename = "timeTaken")]
    pub time_taken: String,
}
