use thiserror::Error;

use crate::domain::{EventId, UserId};

/// Caller-correctable validation failures.
///
/// Every variant aborts its operation before any write occurs. The
/// `Display` messages are what the transport layer surfaces to the caller;
/// retrying without changing the request will fail again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidRequest {
    #[error("invalid event id")]
    UnknownEvent { event_id: EventId },

    #[error("invalid user id")]
    UnknownUser { user_id: UserId },

    #[error("vote of {magnitude} exceeds remaining budget {remaining}")]
    BudgetExceeded { magnitude: u32, remaining: u32 },

    #[error("trade amount not enough")]
    AmountNotEnough { offered: u32, held: u32 },
}

/// Unexpected failure at the store boundary.
///
/// Should not occur on valid input against a healthy store. The
/// transaction that hit it is rolled back; retry policy belongs to the
/// caller, not the core.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("store backend failure: {0}")]
    Backend(String),
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Error returned by the vote and buy operations.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    InvalidRequest(#[from] InvalidRequest),

    #[error("store failure: {0}")]
    Fault(#[from] StoreError),
}

impl ServiceError {
    /// Whether this failure is correctable by the caller.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, ServiceError::InvalidRequest(_))
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_request_messages_match_wire_contract() {
        let err = InvalidRequest::UnknownEvent {
            event_id: EventId::new(7),
        };
        assert_eq!(err.to_string(), "invalid event id");

        let err = InvalidRequest::AmountNotEnough {
            offered: 100,
            held: 200,
        };
        assert_eq!(err.to_string(), "trade amount not enough");
    }

    #[test]
    fn service_error_classifies_faults() {
        let invalid: ServiceError = InvalidRequest::UnknownUser {
            user_id: UserId::new(1),
        }
        .into();
        assert!(invalid.is_invalid_request());

        let fault: ServiceError = StoreError::Backend("connection reset".into()).into();
        assert!(!fault.is_invalid_request());
    }
}
