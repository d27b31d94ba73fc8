//! Validation errors for identifiers, references and catalog lookups
//!
//! These are the type-level failures. The codec maps them onto its own
//! taxonomy (`MalformedBody`, `IncompleteMessage`, `UnknownMessageType`).

use thiserror::Error;

/// Errors raised while constructing or looking up protocol types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Fixed-width field received the wrong number of bytes
    #[error("Invalid {field} length: expected {expected} bytes, got {got}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        got: usize,
    },

    /// Identity string contains characters outside the identity alphabet
    #[error("Invalid identity '{value}': {reason}")]
    InvalidIdentity { value: String, reason: &'static str },

    /// Builder was finalized before every required field was set
    #[error("Incomplete {structure}: required field '{field}' is not set")]
    MissingField {
        structure: &'static str,
        field: &'static str,
    },

    /// Wire type code is not registered in the catalog
    #[error("Unknown message type {code:#04x}")]
    UnknownMessageType { code: u8 },

    /// Wire value does not name a known forward-secrecy version
    #[error("Unknown forward security version {raw:#06x}")]
    UnknownForwardSecurityVersion { raw: u16 },

    /// Wire value does not name a known delivery receipt status
    #[error("Unknown delivery receipt status {raw:#04x}")]
    UnknownReceiptStatus { raw: u8 },
}

impl ValidationError {
    pub fn invalid_length(field: &'static str, expected: usize, got: usize) -> Self {
        Self::InvalidLength {
            field,
            expected,
            got,
        }
    }

    pub fn missing_field(structure: &'static str, field: &'static str) -> Self {
        Self::MissingField { structure, field }
    }
}
