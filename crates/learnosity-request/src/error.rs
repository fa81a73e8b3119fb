//! Error types for request validation and signing.

/// Errors that can occur while validating or signing a request.
///
/// Every validation failure is detected synchronously, before any hashing
/// or network work happens.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// The service name was empty.
    #[error("the `service` argument was empty")]
    EmptyService,

    /// The service name is not one of the supported services.
    #[error("service `{0}` is not valid")]
    UnknownService(String),

    /// The consumer key was missing or blank.
    #[error("consumer key must be provided")]
    MissingConsumerKey,

    /// The shared secret was missing or blank.
    #[error("must provide a valid `secret`")]
    MissingSecret,

    /// The questions service requires a user id.
    #[error("if using the questions API, a user id needs to be specified")]
    MissingUserId,

    /// A request body field did not have the expected type.
    #[error("request body field `{field}` has an unexpected type")]
    UnexpectedBodyField {
        /// Name of the offending field.
        field: String,
    },

    /// Failed to serialize the request body or envelope.
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
