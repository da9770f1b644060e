// src/error.rs
//! Error taxonomy surfaced to callers - nothing here is retried automatically

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnhancerError {
    /// No resume document selected; detected before any network activity.
    #[error("no resume document selected")]
    MissingInput,

    /// A submission for the same workflow is still in flight.
    #[error("{operation} request already in flight")]
    OperationInFlight { operation: &'static str },

    /// Transport error, timeout, or non-2xx status from the service.
    #[error("{operation} request failed: {message}")]
    RequestFailure {
        operation: &'static str,
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("failed to decode {operation} response: {message}")]
    DecodeFailure {
        operation: &'static str,
        message: String,
    },
}

impl EnhancerError {
    pub fn request(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::RequestFailure {
            operation,
            message: err.to_string(),
        }
    }

    pub fn decode(operation: &'static str, err: impl std::fmt::Display) -> Self {
        Self::DecodeFailure {
            operation,
            message: err.to_string(),
        }
    }
}
