//! Data API client: signs form parameters and posts them.

use std::collections::HashMap;

use serde_json::{Map, Value};

use learnosity_request::{Request, SecurityPacket, Service};
use learnosity_remote::{Remote, RemoteResponse};

use crate::error::DataError;
use crate::types::{ApiResult, DataConfig};

/// Client for the Learnosity Data API.
#[derive(Debug, Clone)]
pub struct DataClient {
    /// Client configuration.
    config: DataConfig,
    /// Underlying transport.
    remote: Remote,
}

impl DataClient {
    /// Create a new Data API client with the given configuration.
    pub fn new(config: DataConfig) -> Result<Self, DataError> {
        let remote = Remote::new(config.remote.clone())?;
        Ok(Self { config, remote })
    }

    /// Sign and post a request, returning the captured transport outcome.
    ///
    /// Two parameter shapes exist. Without an action (or without a request
    /// body) the form carries the stringified signed security packet and an
    /// empty `request`. With both an action and a body it additionally
    /// carries `action` and `request`, and the signature covers both.
    pub async fn request(
        &self,
        security: SecurityPacket,
        secret: &str,
        request_body: Option<Map<String, Value>>,
        action: Option<String>,
    ) -> Result<RemoteResponse, DataError> {
        let params = build_params(security, secret, request_body, action)?;
        let response = self.remote.post(&self.config.url, &params).await?;
        Ok(response)
    }

    /// Sign and post a request, wrapping the outcome into the string-typed
    /// [`ApiResult`] record.
    pub async fn request_json(
        &self,
        security: SecurityPacket,
        secret: &str,
        request_body: Option<Map<String, Value>>,
        action: Option<String>,
    ) -> Result<ApiResult, DataError> {
        let response = self.request(security, secret, request_body, action).await?;
        Ok(ApiResult {
            body: response.body,
            content_type: response.content_type,
            status_code: response.status_code.to_string(),
            time_taken: response.time_taken.as_secs().to_string(),
        })
    }
}

/// Assemble the form parameters for one Data API call.
fn build_params(
    security: SecurityPacket,
    secret: &str,
    request_body: Option<Map<String, Value>>,
    action: Option<String>,
) -> Result<HashMap<String, String>, DataError> {
    let mut params = HashMap::new();
    match (action, request_body) {
        (Some(action), Some(body)) => {
            let request = Request::with_action(
                Service::Data,
                security,
                secret,
                Some(body),
                Some(action.clone()),
            )?;
            params.insert(
                "security".to_string(),
                serde_json::to_string(request.security())?,
            );
            params.insert("action".to_string(), action);
            params.insert("request".to_string(), request.request_string().to_string());
        }
        _ => {
            // An action without a body (or a body without an action) signs
            // and posts the bare security packet.
            let request = Request::new(Service::Data, security, secret, None)?;
            params.insert(
                "security".to_string(),
                serde_json::to_string(request.security())?,
            );
            params.insert("request".to_string(), String::new());
        }
    }
    Ok(params)
}
