//! Error types for the petstore client.
//!
//! # Design
//! Transport failures and status assertions get dedicated variants because
//! callers treat them very differently: a transport error means the call never
//! completed, while `StatusAssertion` is an explicit check carrying both the
//! expected and actual codes. JSON parse failures of response bodies are
//! deliberately NOT represented here — the recorder and handlers absorb them
//! into flags instead of raising.

use std::fmt;

/// Errors returned by `PetstoreClient` operations and assertions.
#[derive(Debug)]
pub enum ApiError {
    /// The underlying HTTP transport failed; the call never completed.
    Transport(String),

    /// The request payload could not be serialized to JSON.
    Serialization(String),

    /// `assert_status` found a different status than expected.
    StatusAssertion { expected: u16, actual: u16 },

    /// An assertion or handler was invoked before any call was recorded.
    NoResponseRecorded,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Serialization(msg) => write!(f, "serialization failed: {msg}"),
            ApiError::StatusAssertion { expected, actual } => {
                write!(f, "expected status {expected}, got {actual}")
            }
            ApiError::NoResponseRecorded => write!(f, "no response recorded yet"),
        }
    }
}

impl std::error::Error for ApiError {}
