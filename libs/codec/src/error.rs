//! Codec errors for CSP message bodies
//!
//! Every failure is local to one message and is returned to the caller; the
//! codec never substitutes an empty or partial value. Variants carry enough
//! context (type, field, offset, expected and actual sizes) to diagnose a bad
//! peer from a single log line.

use csp_types::{CspMessageType, ForwardSecurityVersion, ValidationError};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    /// Type code is not registered in the catalog
    #[error("Unknown message type {code:#04x}: not registered in the message type catalog")]
    UnknownMessageType { code: u8 },

    /// Body bytes do not match the layout of their declared type
    #[error("Malformed {message_type} body at offset {offset}: {reason} (body: {body_len} bytes)")]
    MalformedBody {
        message_type: CspMessageType,
        offset: usize,
        reason: String,
        body_len: usize,
    },

    /// A required field was never set before encoding
    #[error("Incomplete {structure}: required field '{field}' is not set")]
    IncompleteMessage {
        structure: &'static str,
        field: &'static str,
    },

    /// Session negotiated an older version than the type requires
    #[error("Forward security version {negotiated} is below {required} required by {message_type}")]
    UnsupportedForwardSecurityVersion {
        message_type: CspMessageType,
        required: ForwardSecurityVersion,
        negotiated: ForwardSecurityVersion,
    },

    /// Encoded body exceeds the configured limit
    #[error("Payload too large: {size} bytes exceeds limit {limit} for {message_type}")]
    PayloadTooLarge {
        message_type: CspMessageType,
        size: usize,
        limit: usize,
    },

    /// Field holds a value the wire format cannot express
    #[error("Invalid {field} in {message_type}: {reason}")]
    InvalidField {
        message_type: CspMessageType,
        field: &'static str,
        reason: String,
    },

    /// Identifier or reference failed validation outside a body decode
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(ValidationError),

    /// Padded container framing is broken
    #[error("Malformed container: {reason} (container: {container_len} bytes)")]
    MalformedContainer { reason: String, container_len: usize },
}

impl CodecError {
    pub fn malformed_body(
        message_type: CspMessageType,
        offset: usize,
        reason: impl Into<String>,
        body_len: usize,
    ) -> Self {
        Self::MalformedBody {
            message_type,
            offset,
            reason: reason.into(),
            body_len,
        }
    }

    pub fn incomplete(structure: &'static str, field: &'static str) -> Self {
        Self::IncompleteMessage { structure, field }
    }

    pub fn invalid_field(
        message_type: CspMessageType,
        field: &'static str,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            message_type,
            field,
            reason: reason.into(),
        }
    }

    pub fn payload_too_large(message_type: CspMessageType, size: usize, limit: usize) -> Self {
        Self::PayloadTooLarge {
            message_type,
            size,
            limit,
        }
    }

    pub fn malformed_container(reason: impl Into<String>, container_len: usize) -> Self {
        Self::MalformedContainer {
            reason: reason.into(),
            container_len,
        }
    }

    /// Map a type-level validation failure found while decoding a body
    pub fn from_validation(
        error: ValidationError,
        message_type: CspMessageType,
        offset: usize,
        body_len: usize,
    ) -> Self {
        match error {
            ValidationError::UnknownMessageType { code } => Self::UnknownMessageType { code },
            ValidationError::MissingField { structure, field } => {
                Self::IncompleteMessage { structure, field }
            }
            other => Self::malformed_body(message_type, offset, other.to_string(), body_len),
        }
    }

    /// Short stable label for log fields
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownMessageType { .. } => "unknown_message_type",
            Self::MalformedBody { .. } => "malformed_body",
            Self::IncompleteMessage { .. } => "incomplete_message",
            Self::UnsupportedForwardSecurityVersion { .. } => "unsupported_fs_version",
            Self::PayloadTooLarge { .. } => "payload_too_large",
            Self::InvalidField { .. } => "invalid_field",
            Self::InvalidIdentifier(_) => "invalid_identifier",
            Self::MalformedContainer { .. } => "malformed_container",
        }
    }
}

impl From<ValidationError> for CodecError {
    /// Failures outside a body decode (builders, raw code lookups)
    fn from(error: ValidationError) -> Self {
        match error {
            ValidationError::UnknownMessageType { code } => Self::UnknownMessageType { code },
            ValidationError::MissingField { structure, field } => {
                Self::IncompleteMessage { structure, field }
            }
            other => Self::InvalidIdentifier(other),
        }
    }
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;
