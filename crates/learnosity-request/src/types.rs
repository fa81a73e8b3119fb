//! Security packet: the identity bundle hashed into request signatures.

use serde::{Deserialize, Serialize};

/// The identity bundle for a signed Learnosity request.
///
/// `timestamp` holds an already-formatted `YYYYMMDD-HHMM` string (see
/// [`crate::timestamp`]); when unset it is resolved exactly once during
/// request construction, so every signature within one build observes the
/// identical value. `signature` is computed by the SDK and must not be
/// supplied by callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityPacket {
    /// Consumer key identifying the caller. Required.
    pub consumer_key: String,

    /// Domain the request is served from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Timestamp formatted as `YYYYMMDD-HHMM` (UTC, minute precision).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    /// User the request is scoped to. Required for the questions service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    /// Signature over the packet, the secret, and per-service extras.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
}
