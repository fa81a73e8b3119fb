#![deny(missing_docs)]

//! # learnosity-remote
//!
//! HTTP transport adapter for Learnosity endpoints.
//!
//! This crate executes one form-encoded POST or GET per invocation and
//! captures the outcome (status code, content type, body, elapsed time)
//! without interpreting it. Retry policy and response schema validation
//! belong to callers.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//! use learnosity_remote::{Remote, RemoteConfig};
//!
//! # async fn example() -> Result<(), learnosity_remote::RemoteError> {
//! let remote = Remote::new(RemoteConfig::default())?;
//!
//! let mut fields = HashMap::new();
//! fields.insert("security".to_string(), "{}".to_string());
//! let response = remote.post("https://data.learnosity.com/v1", &fields).await?;
//! println!("{} {}", response.status_code, response.body);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use client::Remote;
pub use error::RemoteError;
pub use types::{RemoteConfig, RemoteResponse};
