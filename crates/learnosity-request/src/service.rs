//! The closed set of Learnosity services and their signing rules.

use std::fmt;
use std::str::FromStr;

use crate::error::RequestError;

/// A Learnosity API service.
///
/// Each service has its own rules for which fields enter the request
/// signature and how the outgoing envelope is shaped. The set is closed:
/// matching on `Service` is exhaustive, and parsing rejects any other name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Assess API. Carries an embedded, independently signed Questions block.
    Assess,
    /// Author API.
    Author,
    /// Data API.
    Data,
    /// Items API. May adopt the user id from the request body.
    Items,
    /// Questions API. Requires a user id and uses a flat public envelope.
    Questions,
    /// Reports API.
    Reports,
    /// Events API. Replaces raw user identifiers with keyed digests.
    Events,
}

impl Service {
    /// All supported services.
    pub const ALL: [Service; 7] = [
        Service::Assess,
        Service::Author,
        Service::Data,
        Service::Items,
        Service::Questions,
        Service::Reports,
        Service::Events,
    ];

    /// The lowercase service name used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Service::Assess => "assess",
            Service::Author => "author",
            Service::Data => "data",
            Service::Items => "items",
            Service::Questions => "questions",
            Service::Reports => "reports",
            Service::Events => "events",
        }
    }

    /// Whether the serialized request body is included in the signature.
    ///
    /// Assess and questions never sign the body. Events signs nothing of the
    /// body at the top level either; its per-user hashing happens inside the
    /// body instead.
    pub fn signs_request_body(self) -> bool {
        matches!(
            self,
            Service::Author | Service::Data | Service::Items | Service::Reports
        )
    }
}

impl FromStr for Service {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(RequestError::EmptyService);
        }
        match s {
            "assess" => Ok(Service::Assess),
            "author" => Ok(Service::Author),
            "data" => Ok(Service::Data),
            "items" => Ok(Service::Items),
            "questions" => Ok(Service::Questions),
            "reports" => Ok(Service::Reports),
            "events" => Ok(Service::Events),
            other => Err(RequestError::UnknownService(other.to_string())),
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_names() {
        for service in Service::ALL {
            assert_eq!(service.as_str().parse::<Service>().unwrap(), service);
        }
    }

    #[test]
    fn test_parse_empty() {
        let err = "".parse::<Service>().unwrap_err();
        assert!(matches!(err, RequestError::EmptyService));

        let err = "   ".parse::<Service>().unwrap_err();
        assert!(matches!(err, RequestError::EmptyService));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "grading".parse::<Service>().unwrap_err();
        assert!(matches!(err, RequestError::UnknownService(name) if name == "grading"));
    }

    #[test]
    fn test_body_signing_rules() {
        assert!(Service::Author.signs_request_body());
        assert!(Service::Data.signs_request_body());
        assert!(Service::Items.signs_request_body());
        assert!(Service::Reports.signs_request_body());

        assert!(!Service::Assess.signs_request_body());
        assert!(!Service::Questions.signs_request_body());
        assert!(!Service::Events.signs_request_body());
    }
}
