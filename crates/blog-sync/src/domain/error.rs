//! Client Errors
//!
//! Failures of remote calls and draft checks.

use std::fmt;

use thiserror::Error;

use super::record::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    /// Transport failure or an unexpected HTTP status
    #[error("network error: {0}")]
    Network(String),

    #[error("record {0} not found")]
    NotFound(RecordId),

    #[error("invalid draft: {0}")]
    Validation(String),

    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Remote operation a failure is reported against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Like,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Load => "load",
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Like => "like",
            Operation::Delete => "delete",
        };
        f.write_str(name)
    }
}

/// A failed call, shown to the user as an error notification
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{operation} failed: {reason}")]
pub struct RequestFailed {
    pub operation: Operation,
    pub reason: ClientError,
}

impl RequestFailed {
    pub fn new(operation: Operation, reason: ClientError) -> Self {
        Self { operation, reason }
    }
}
