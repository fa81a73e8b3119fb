#![deny(missing_docs)]

//! Learnosity SDK - Complete SDK.
//!
//! Re-exports all Learnosity SDK components for convenient single-crate usage.

pub use learnosity_data as data;
pub use learnosity_remote as remote;
pub use learnosity_request as request;
