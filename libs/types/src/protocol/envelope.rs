//! Envelope flag byte
//!
//! The chat server reads a flag byte in the (unencrypted) message envelope.
//! Defaults are derived from the type descriptor; a message may add
//! [`EnvelopeFlags::NO_DELIVERY_RECEIPTS`] on top.

use crate::protocol::descriptor::{MessageLifetime, MessageTypeDescriptor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnvelopeFlags(u8);

impl EnvelopeFlags {
    pub const NONE: Self = Self(0x00);
    /// Server sends a push notification to an offline recipient
    pub const SEND_PUSH: Self = Self(0x01);
    /// Drop instead of queueing when the recipient is offline
    pub const NO_SERVER_QUEUING: Self = Self(0x02);
    /// Server does not acknowledge the message to the sender
    pub const NO_SERVER_ACK: Self = Self(0x04);
    /// Message is part of a group conversation
    pub const GROUP: Self = Self(0x10);
    /// Server may discard the message after a short time
    pub const SHORT_LIVED: Self = Self(0x20);
    /// Recipient must not answer with automatic delivery receipts
    pub const NO_DELIVERY_RECEIPTS: Self = Self(0x80);

    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    /// Default flags for every message of the described type
    pub fn for_descriptor(descriptor: &MessageTypeDescriptor) -> Self {
        let mut flags = Self::NONE;
        if descriptor.sends_push {
            flags.insert(Self::SEND_PUSH);
        }
        match descriptor.lifetime {
            MessageLifetime::Indefinite => {}
            MessageLifetime::Brief => flags.insert(Self::SHORT_LIVED),
            MessageLifetime::Ephemeral => {
                flags.insert(Self::NO_SERVER_QUEUING | Self::NO_SERVER_ACK)
            }
        }
        if descriptor.is_group() {
            flags.insert(Self::GROUP);
        }
        flags
    }
}

impl BitOr for EnvelopeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for EnvelopeFlags {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for EnvelopeFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CspMessageType;

    #[test]
    fn test_text_defaults_to_push_only() {
        let flags = EnvelopeFlags::for_descriptor(CspMessageType::Text.descriptor());
        assert_eq!(flags, EnvelopeFlags::SEND_PUSH);
    }

    #[test]
    fn test_group_text_sets_group_flag() {
        let flags = EnvelopeFlags::for_descriptor(CspMessageType::GroupText.descriptor());
        assert_eq!(flags.bits(), 0x11);
    }

    #[test]
    fn test_ephemeral_types_skip_queueing_and_ack() {
        let flags = EnvelopeFlags::for_descriptor(CspMessageType::TypingIndicator.descriptor());
        assert!(flags.contains(EnvelopeFlags::NO_SERVER_QUEUING));
        assert!(flags.contains(EnvelopeFlags::NO_SERVER_ACK));
        assert!(!flags.contains(EnvelopeFlags::SEND_PUSH));
    }

    #[test]
    fn test_calls_are_short_lived() {
        let flags = EnvelopeFlags::for_descriptor(CspMessageType::CallOffer.descriptor());
        assert_eq!(flags, EnvelopeFlags::SEND_PUSH | EnvelopeFlags::SHORT_LIVED);
    }
}
