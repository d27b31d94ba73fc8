//! Wire message type codes
//!
//! ## Purpose
//!
//! The first byte of every end-to-end container names the message type. The
//! registry is append-only: a code keeps its structural meaning forever, and
//! behavioral corrections are made by registering a new code.
//!
//! Codes are grouped by range: `0x01..=0x1a` direct content and contact
//! control, `0x41..=0x54` groups, `0x60..=0x64` calls, `0x80..=0x94` receipts
//! and message updates, `0xa0` forward secrecy, `0xfc..=0xff` control.

use crate::protocol::catalog;
use crate::protocol::descriptor::MessageTypeDescriptor;
use crate::ValidationError;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};
use std::fmt;

#[repr(u8)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    TryFromPrimitive,
    IntoPrimitive,
    Serialize,
    Deserialize,
)]
pub enum CspMessageType {
    // Direct content (0x01-0x1a)
    Text = 0x01,
    Image = 0x02,
    Location = 0x10,
    Video = 0x13,
    Audio = 0x14,
    PollSetup = 0x15,
    PollVote = 0x16,
    File = 0x17,
    ContactSetProfilePicture = 0x18,
    ContactDeleteProfilePicture = 0x19,
    ContactRequestProfilePicture = 0x1a,

    // Groups (0x41-0x54)
    GroupText = 0x41,
    GroupLocation = 0x42,
    GroupImage = 0x43,
    GroupVideo = 0x44,
    GroupAudio = 0x45,
    GroupFile = 0x46,
    GroupSetup = 0x4a,
    GroupName = 0x4b,
    GroupLeave = 0x4c,
    GroupJoinRequest = 0x4d,
    GroupJoinResponse = 0x4e,
    GroupCallStart = 0x4f,
    GroupSetProfilePicture = 0x50,
    GroupSyncRequest = 0x51,
    GroupPollSetup = 0x52,
    GroupPollVote = 0x53,
    GroupDeleteProfilePicture = 0x54,

    // Calls (0x60-0x64)
    CallOffer = 0x60,
    CallAnswer = 0x61,
    CallIceCandidate = 0x62,
    CallHangup = 0x63,
    CallRinging = 0x64,

    // Receipts and message updates (0x80-0x94)
    DeliveryReceipt = 0x80,
    GroupDeliveryReceipt = 0x81,
    Reaction = 0x82,
    GroupReaction = 0x83,
    TypingIndicator = 0x90,
    EditMessage = 0x91,
    DeleteMessage = 0x92,
    GroupEditMessage = 0x93,
    GroupDeleteMessage = 0x94,

    // Forward secrecy
    ForwardSecurityEnvelope = 0xa0,

    // Control (0xfc-0xff)
    Empty = 0xfc,
    WebSessionResume = 0xfe,
    AuthToken = 0xff,
}

impl CspMessageType {
    /// Every registered type in ascending code order
    pub const ALL: [CspMessageType; 46] = [
        Self::Text,
        Self::Image,
        Self::Location,
        Self::Video,
        Self::Audio,
        Self::PollSetup,
        Self::PollVote,
        Self::File,
        Self::ContactSetProfilePicture,
        Self::ContactDeleteProfilePicture,
        Self::ContactRequestProfilePicture,
        Self::GroupText,
        Self::GroupLocation,
        Self::GroupImage,
        Self::GroupVideo,
        Self::GroupAudio,
        Self::GroupFile,
        Self::GroupSetup,
        Self::GroupName,
        Self::GroupLeave,
        Self::GroupJoinRequest,
        Self::GroupJoinResponse,
        Self::GroupCallStart,
        Self::GroupSetProfilePicture,
        Self::GroupSyncRequest,
        Self::GroupPollSetup,
        Self::GroupPollVote,
        Self::GroupDeleteProfilePicture,
        Self::CallOffer,
        Self::CallAnswer,
        Self::CallIceCandidate,
        Self::CallHangup,
        Self::CallRinging,
        Self::DeliveryReceipt,
        Self::GroupDeliveryReceipt,
        Self::Reaction,
        Self::GroupReaction,
        Self::TypingIndicator,
        Self::EditMessage,
        Self::DeleteMessage,
        Self::GroupEditMessage,
        Self::GroupDeleteMessage,
        Self::ForwardSecurityEnvelope,
        Self::Empty,
        Self::WebSessionResume,
        Self::AuthToken,
    ];

    #[inline(always)]
    pub fn code(self) -> u8 {
        self.into()
    }

    pub fn from_code(code: u8) -> Result<Self, ValidationError> {
        Self::try_from(code).map_err(|_| ValidationError::UnknownMessageType { code })
    }

    /// Behavioral flags of this type
    pub fn descriptor(self) -> &'static MessageTypeDescriptor {
        catalog::descriptor_of(self)
    }
}

impl fmt::Display for CspMessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#04x})", self.descriptor().name, self.code())
    }
}
