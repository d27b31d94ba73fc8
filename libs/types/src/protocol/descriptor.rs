//! Per-type behavioral descriptors
//!
//! ## Purpose
//!
//! A [`MessageTypeDescriptor`] bundles everything the send and receive
//! pipelines need to know about a message type without looking at a message
//! instance: push hints, replay protection, multi-device reflection, receipts,
//! blocking policy and the minimum forward-secrecy version. Descriptors are
//! `'static` and live in [`crate::catalog`].
//!
//! ## Integration Points
//!
//! - **Codec**: [`BodySize`] is checked before a body is parsed
//! - **Dispatch**: flags drive the inbound and outbound plans
//! - **Envelope**: [`crate::EnvelopeFlags::for_descriptor`] derives the
//!   default envelope flag byte

use crate::protocol::forward_security::ForwardSecurityVersion;
use crate::protocol::message_type::CspMessageType;
use serde::Serialize;
use std::fmt;

/// How long the chat server keeps a message for an offline recipient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MessageLifetime {
    /// Queued until delivered
    Indefinite,
    /// Queued for a short time only
    Brief,
    /// Delivered only to an online recipient, never queued or acknowledged
    Ephemeral,
}

/// Whether a type addresses one contact or a group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConversationScope {
    Direct,
    Group,
}

/// Size constraint on an encoded body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BodySize {
    /// Exactly this many bytes
    Fixed(usize),
    /// Inclusive range
    Bounded { min: usize, max: usize },
}

impl BodySize {
    #[inline]
    pub fn admits(&self, len: usize) -> bool {
        match *self {
            BodySize::Fixed(size) => len == size,
            BodySize::Bounded { min, max } => len >= min && len <= max,
        }
    }

    pub fn min(&self) -> usize {
        match *self {
            BodySize::Fixed(size) => size,
            BodySize::Bounded { min, .. } => min,
        }
    }

    pub fn max(&self) -> usize {
        match *self {
            BodySize::Fixed(size) => size,
            BodySize::Bounded { max, .. } => max,
        }
    }
}

impl fmt::Display for BodySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodySize::Fixed(size) => write!(f, "{} bytes", size),
            BodySize::Bounded { min, max } => write!(f, "{}..={} bytes", min, max),
        }
    }
}

/// Marks a type kept only for interoperability with older clients
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Deprecation {
    /// Type senders should use instead, if any
    pub replacement: Option<CspMessageType>,
}

/// Static behavioral flag bundle of a message type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MessageTypeDescriptor {
    pub message_type: CspMessageType,
    /// Stable, lowercase name used in logs and audit tables
    pub name: &'static str,
    pub scope: ConversationScope,
    pub lifetime: MessageLifetime,
    pub body_size: BodySize,

    /// Ask the server to send a push notification
    pub sends_push: bool,
    /// Record the nonce and drop messages whose nonce was seen before
    pub protects_against_replay: bool,
    /// Reflect received messages to the other devices of the account
    pub reflects_incoming: bool,
    /// Reflect sent messages to the other devices of the account
    pub reflects_outgoing: bool,
    /// Reflect the "sent" state update once the server acknowledged
    pub reflects_sent_update: bool,
    /// Answer with a `received` delivery receipt
    pub sends_automatic_delivery_receipt: bool,
    /// Move the conversation to the top of the list
    pub bumps_last_update: bool,
    /// Process even when the sender is blocked
    pub exempt_from_blocking: bool,
    /// Unknown senders become a direct contact
    pub creates_implicit_direct_contact: bool,
    /// The sender's nickname/profile picture may be attached
    pub allows_user_profile_distribution: bool,
    /// `None` means the type may use any session version, or none at all
    pub minimum_forward_security_version: Option<ForwardSecurityVersion>,

    pub deprecated: Option<Deprecation>,
}

impl MessageTypeDescriptor {
    #[inline(always)]
    pub fn code(&self) -> u8 {
        self.message_type.code()
    }

    pub fn is_group(&self) -> bool {
        self.scope == ConversationScope::Group
    }

    pub fn is_deprecated(&self) -> bool {
        self.deprecated.is_some()
    }

    pub fn replacement(&self) -> Option<CspMessageType> {
        self.deprecated.and_then(|d| d.replacement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_size_admits() {
        let fixed = BodySize::Fixed(76);
        assert!(fixed.admits(76));
        assert!(!fixed.admits(75));
        assert!(!fixed.admits(77));

        let bounded = BodySize::Bounded { min: 1, max: 10 };
        assert!(!bounded.admits(0));
        assert!(bounded.admits(1));
        assert!(bounded.admits(10));
        assert!(!bounded.admits(11));
        assert_eq!(bounded.min(), 1);
        assert_eq!(bounded.max(), 10);
        assert_eq!(bounded.to_string(), "1..=10 bytes");
    }
}
