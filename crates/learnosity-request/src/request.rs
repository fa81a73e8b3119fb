//! Signed request construction: validation, per-service body
//! transformations, signature building, and envelope shaping.

use serde_json::{json, Map, Value};

use crate::error::RequestError;
use crate::hash::hash_values;
use crate::service::Service;
use crate::timestamp;
use crate::types::SecurityPacket;

/// Domain used for the embedded Questions signature when neither the outer
/// security packet nor the activity block names one.
const DEFAULT_ASSESS_DOMAIN: &str = "assess.learnosity.com";

/// Body key holding the embedded Questions API activity in assess requests.
const QUESTIONS_ACTIVITY_KEY: &str = "questionsApiActivity";

/// A validated, signed request for one of the Learnosity services.
///
/// Construction validates the inputs, resolves the timestamp once, applies
/// the per-service body transformations, and computes the signature. The
/// caller's body is moved in; transformations happen on the owned copy and
/// are observable through [`Request::request_body`], never through aliasing
/// of caller state.
#[derive(Debug, Clone)]
pub struct Request {
    service: Service,
    security: SecurityPacket,
    secret: String,
    request_body: Option<Map<String, Value>>,
    request_string: String,
    action: Option<String>,
}

impl Request {
    /// Build a signed request without an action verb.
    pub fn new(
        service: Service,
        security: SecurityPacket,
        secret: impl Into<String>,
        request_body: Option<Map<String, Value>>,
    ) -> Result<Self, RequestError> {
        Self::with_action(service, security, secret, request_body, None)
    }

    /// Build a signed request with an optional action verb (`get`, `set`, ...).
    ///
    /// A non-empty action becomes the final signature part and, for services
    /// whose envelope carries one, an `action` envelope key.
    pub fn with_action(
        service: Service,
        security: SecurityPacket,
        secret: impl Into<String>,
        request_body: Option<Map<String, Value>>,
        action: Option<String>,
    ) -> Result<Self, RequestError> {
        let mut request = Request {
            service,
            security,
            secret: secret.into(),
            request_body,
            request_string: String::new(),
            action: action.filter(|a| !a.is_empty()),
        };

        request.validate()?;
        request.apply_service_rules()?;

        // Serialized after the transformations so the envelope's request
        // string carries the embedded security fields and hashed users.
        if let Some(body) = &request.request_body {
            request.request_string = serde_json::to_string(body)?;
        }

        let signature = request.build_signature();
        request.security.signature = Some(signature);
        Ok(request)
    }

    /// Which service this request targets.
    pub fn service(&self) -> Service {
        self.service
    }

    /// The security packet, including the computed signature.
    pub fn security(&self) -> &SecurityPacket {
        &self.security
    }

    /// The computed signature as lowercase hex.
    pub fn signature(&self) -> &str {
        self.security.signature.as_deref().unwrap_or_default()
    }

    /// The request body after per-service transformations.
    pub fn request_body(&self) -> Option<&Map<String, Value>> {
        self.request_body.as_ref()
    }

    /// The serialized request body, or an empty string when there is none.
    pub fn request_string(&self) -> &str {
        &self.request_string
    }

    /// The action verb, if one was given.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// The service-specific payload shape for this request.
    ///
    /// - `data`: `security` (stringified packet), `action`, and `request`
    ///   keys are always present, possibly as empty strings.
    /// - `assess`, `author`, `items`, `reports`: structured `security`, with
    ///   `action`/`request` only when non-empty.
    /// - `questions`: flat map of `consumer_key`, `timestamp`, `user_id`,
    ///   `signature` (no `domain` key), plus `request` when non-empty.
    /// - `events`: structured `security`, with the body string under
    ///   `config` when non-empty.
    pub fn envelope(&self) -> Result<Value, RequestError> {
        let envelope = match self.service {
            Service::Data => json!({
                "security": serde_json::to_string(&self.security)?,
                "action": self.action.clone().unwrap_or_default(),
                "request": &self.request_string,
            }),
            Service::Assess | Service::Author | Service::Items | Service::Reports => {
                let mut output = Map::new();
                output.insert("security".to_string(), serde_json::to_value(&self.security)?);
                if let Some(action) = &self.action {
                    output.insert("action".to_string(), Value::String(action.clone()));
                }
                if !self.request_string.is_empty() {
                    output.insert(
                        "request".to_string(),
                        Value::String(self.request_string.clone()),
                    );
                }
                Value::Object(output)
            }
            Service::Questions => {
                // The flat questions envelope is handed to a client-side
                // component; the domain never appears in it.
                let mut output = Map::new();
                output.insert(
                    "consumer_key".to_string(),
                    Value::String(self.security.consumer_key.clone()),
                );
                output.insert(
                    "timestamp".to_string(),
                    Value::String(self.security.timestamp.clone().unwrap_or_default()),
                );
                output.insert(
                    "user_id".to_string(),
                    Value::String(self.security.user_id.clone().unwrap_or_default()),
                );
                output.insert(
                    "signature".to_string(),
                    Value::String(self.security.signature.clone().unwrap_or_default()),
                );
                if !self.request_string.is_empty() {
                    output.insert(
                        "request".to_string(),
                        Value::String(self.request_string.clone()),
                    );
                }
                Value::Object(output)
            }
            Service::Events => {
                let mut output = Map::new();
                output.insert("security".to_string(), serde_json::to_value(&self.security)?);
                if !self.request_string.is_empty() {
                    output.insert(
                        "config".to_string(),
                        Value::String(self.request_string.clone()),
                    );
                }
                Value::Object(output)
            }
        };
        Ok(envelope)
    }

    /// The envelope serialized to a JSON string.
    pub fn generate(&self) -> Result<String, RequestError> {
        Ok(serde_json::to_string(&self.envelope()?)?)
    }

    fn validate(&mut self) -> Result<(), RequestError> {
        if self.security.consumer_key.trim().is_empty() {
            return Err(RequestError::MissingConsumerKey);
        }
        if self.secret.trim().is_empty() {
            return Err(RequestError::MissingSecret);
        }
        if self.service == Service::Questions
            && self
                .security
                .user_id
                .as_deref()
                .unwrap_or_default()
                .trim()
                .is_empty()
        {
            return Err(RequestError::MissingUserId);
        }

        // Resolved exactly once; every signature computed during this build
        // observes the same string.
        if self.security.timestamp.is_none() {
            self.security.timestamp = Some(timestamp::now());
        }
        Ok(())
    }

    fn apply_service_rules(&mut self) -> Result<(), RequestError> {
        match self.service {
            Service::Assess => self.embed_questions_security(),
            Service::Items => {
                self.adopt_body_user_id();
                Ok(())
            }
            Service::Events => self.hash_event_users(),
            _ => Ok(()),
        }
    }

    /// The Assess API carries a block destined for the Questions API. That
    /// block gets its own security fields and a signature scoped to itself,
    /// so a client-side component can verify it without the outer secret.
    fn embed_questions_security(&mut self) -> Result<(), RequestError> {
        let Some(body) = self.request_body.as_mut() else {
            return Ok(());
        };
        let Some(activity_value) = body.get_mut(QUESTIONS_ACTIVITY_KEY) else {
            return Ok(());
        };
        let activity =
            activity_value
                .as_object_mut()
                .ok_or_else(|| RequestError::UnexpectedBodyField {
                    field: QUESTIONS_ACTIVITY_KEY.to_string(),
                })?;

        // Outer domain wins, then the activity's own, then the default.
        let domain = match &self.security.domain {
            Some(domain) if !domain.is_empty() => domain.clone(),
            _ => match activity.get("domain") {
                Some(value) => value
                    .as_str()
                    .ok_or_else(|| RequestError::UnexpectedBodyField {
                        field: "domain".to_string(),
                    })?
                    .to_string(),
                None => DEFAULT_ASSESS_DOMAIN.to_string(),
            },
        };

        let timestamp = self.security.timestamp.clone().unwrap_or_default();
        let user_id = self.security.user_id.clone().unwrap_or_default();
        let signature = hash_values(&[
            &self.security.consumer_key,
            &domain,
            &timestamp,
            &user_id,
            &self.secret,
        ]);

        activity.insert(
            "consumer_key".to_string(),
            Value::String(self.security.consumer_key.clone()),
        );
        activity.insert("timestamp".to_string(), Value::String(timestamp));
        activity.insert("user_id".to_string(), Value::String(user_id));
        activity.insert("signature".to_string(), Value::String(signature));
        Ok(())
    }

    /// The Items API lets the body carry the user id; the security packet
    /// adopts it when the caller did not set one.
    fn adopt_body_user_id(&mut self) {
        if self
            .security
            .user_id
            .as_deref()
            .is_some_and(|user_id| !user_id.is_empty())
        {
            return;
        }
        if let Some(user_id) = self
            .request_body
            .as_ref()
            .and_then(|body| body.get("user_id"))
            .and_then(Value::as_str)
        {
            self.security.user_id = Some(user_id.to_string());
        }
    }

    /// The Events API never receives raw user identifiers: a `users` array
    /// is replaced by a map from each identifier to its keyed digest.
    fn hash_event_users(&mut self) -> Result<(), RequestError> {
        let Some(body) = self.request_body.as_mut() else {
            return Ok(());
        };
        let hashed = match body.get("users") {
            None => return Ok(()),
            Some(Value::Array(users)) => {
                let mut hashed = Map::new();
                for user in users {
                    let id = user
                        .as_str()
                        .ok_or_else(|| RequestError::UnexpectedBodyField {
                            field: "users".to_string(),
                        })?;
                    hashed.insert(
                        id.to_string(),
                        Value::String(hash_values(&[id, &self.secret])),
                    );
                }
                hashed
            }
            Some(_) => {
                return Err(RequestError::UnexpectedBodyField {
                    field: "users".to_string(),
                })
            }
        };
        body.insert("users".to_string(), Value::Object(hashed));
        Ok(())
    }

    /// Assemble the ordered signature parts and hash them.
    ///
    /// The order is load-bearing: consumer key, domain, timestamp, user id,
    /// secret, request string (only for services that sign the body), then
    /// action. Absent or empty sources are skipped; the secret never is.
    fn build_signature(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        if !self.security.consumer_key.is_empty() {
            parts.push(&self.security.consumer_key);
        }
        if let Some(domain) = self.security.domain.as_deref() {
            if !domain.is_empty() {
                parts.push(domain);
            }
        }
        if let Some(ts) = self.security.timestamp.as_deref() {
            parts.push(ts);
        }
        if let Some(user_id) = self.security.user_id.as_deref() {
            if !user_id.is_empty() {
                parts.push(user_id);
            }
        }

        parts.push(&self.secret);

        if self.service.signs_request_body() && !self.request_string.is_empty() {
            parts.push(&self.request_string);
        }
        if let Some(action) = self.action.as_deref() {
            parts.push(action);
        }

        hash_values(&parts)
    }
}
