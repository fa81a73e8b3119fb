#![deny(missing_docs)]

//! # learnosity-request
//!
//! Signed request and envelope construction for the Learnosity API family.
//!
//! Given a [`SecurityPacket`], a shared secret, and an optional request
//! body, this crate derives a SHA-256 signature over a service-dependent
//! ordered set of fields and assembles the service-specific payload
//! envelope. Everything here is pure and synchronous; delivering the
//! envelope over HTTP is handled by `learnosity-remote`.
//!
//! # Example
//!
//! ```
//! use learnosity_request::{Request, SecurityPacket, Service};
//!
//! # fn example() -> Result<(), learnosity_request::RequestError> {
//! let security = SecurityPacket {
//!     consumer_key: "yis0TYCu7U9V4o7M".to_string(),
//!     user_id: Some("12345678".to_string()),
//!     ..Default::default()
//! };
//!
//! let request = Request::new(Service::Questions, security, "my-secret", None)?;
//! println!("{}", request.generate()?);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod hash;
pub mod request;
pub mod service;
pub mod timestamp;
pub mod types;


pub use error::RequestError;
pub use request::Request;
pub use service::Service;
pub use types::SecurityPacket;
