#![deny(missing_docs)]

//! # learnosity-data
//!
//! Client for the Learnosity Data API: signs request parameters with
//! `learnosity-request`, posts them with `learnosity-remote`, and wraps the
//! outcome into a string-typed result record.
//!
//! # Example
//!
//! ```no_run
//! use learnosity_data::{DataClient, DataConfig};
//! use learnosity_request::SecurityPacket;
//!
//! # async fn example() -> Result<(), learnosity_data::DataError> {
//! let client = DataClient::new(DataConfig {
//!     url: "https://data.learnosity.com/v1/itembank/items".to_string(),
//!     ..Default::default()
//! })?;
//!
//! let security = SecurityPacket {
//!     consumer_key: "my-consumer-key".to_string(),
//!     ..Default::default()
//! };
//! let result = client.request_json(security, "my-secret", None, None).await?;
//! println!("{} {}", result.status_code, result.body);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;


pub use client::DataClient;
pub use error::DataError;
pub use types::{ApiResult, DataConfig};
