//! Error types for Data API operations.

/// Errors that can occur when calling the Data API.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// Request validation or signing failed.
    #[error("request error: {0}")]
    Request(#[from] learnosity_request::RequestError),

    /// Transport failed at the network level.
    #[error("transport error: {0}")]
    Remote(#[from] learnosity_remote::RemoteError),

    /// Failed to serialize the security packet into form parameters.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
