//! Message bodies and their binary codecs
//!
//! ## Purpose
//!
//! [`MessageBody`] has exactly one variant per registered
//! [`CspMessageType`]; the variant alone determines the type code, so a
//! message can never disagree with its own descriptor.
//!
//! Each payload type implements [`BodyCodec`]. Group variants wrap their
//! direct counterpart in [`Grouped`], which prefixes the creator identity and
//! group id.
//!
//! ## Layout Rules
//!
//! Fixed-width fields are concatenated in declared order with widths from
//! `csp_types::constants`; integers are little-endian. A trailing
//! variable-width field (text, JSON, opaque payload) runs to the end of the
//! body. Decoding consumes the whole body or fails.

mod call;
mod file;
mod group;
mod media;
mod opaque;
mod poll;
mod receipt;
mod text;

pub use call::CallBody;
pub use file::{FileBody, RenderingType};
pub use group::{GroupNameBody, GroupSetProfilePictureBody, GroupSetupBody};
pub use media::{LegacyAudioBody, LegacyImageBody, LegacyVideoBody};
pub use opaque::OpaquePayload;
pub use poll::{PollSetupBody, PollVoteBody, PollVoteChoice};
pub use receipt::{DeliveryReceiptBody, TypingIndicatorBody};
pub use text::{LocationBody, TextBody};

use crate::config::CodecLimits;
use crate::error::CodecResult;
use crate::wire::{BodyReader, BodyWriter};
use csp_types::{BlobReference, CspMessageType, GroupId, GroupReference};

/// Binary codec of one body payload
pub trait BodyCodec: Sized {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()>;

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self>;

    /// Checks run before encoding; catches unset or unencodable fields
    fn validate(&self, _message_type: CspMessageType, _limits: &CodecLimits) -> CodecResult<()> {
        Ok(())
    }
}

/// Group variant of a direct payload
#[derive(Debug, Clone, PartialEq)]
pub struct Grouped<T> {
    pub group: GroupReference,
    pub content: T,
}

impl<T> Grouped<T> {
    pub fn new(group: GroupReference, content: T) -> Self {
        Self { group, content }
    }
}

impl<T: BodyCodec> BodyCodec for Grouped<T> {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_group_reference(&self.group);
        self.content.encode(writer)
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let group = reader.read_group_reference()?;
        let content = T::decode(reader)?;
        Ok(Self { group, content })
    }

    fn validate(&self, message_type: CspMessageType, limits: &CodecLimits) -> CodecResult<()> {
        self.content.validate(message_type, limits)
    }
}

impl BodyCodec for GroupReference {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_group_reference(self);
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        reader.read_group_reference()
    }
}

impl BodyCodec for GroupId {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_bytes(self.as_bytes());
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        Ok(GroupId::new(reader.take_array("group id")?))
    }
}

/// Declares [`MessageBody`] and its per-variant dispatch
///
/// Variant names must equal the [`CspMessageType`] variant they encode; the
/// generated `match` over `CspMessageType` is exhaustive, so a type without a
/// body fails to compile.
macro_rules! message_bodies {
    (
        payload { $( $(#[$doc:meta])* $variant:ident($body:ty), )* }
        empty { $( $(#[$unit_doc:meta])* $unit:ident, )* }
    ) => {
        #[derive(Debug, Clone, PartialEq)]
        pub enum MessageBody {
            $( $(#[$doc])* $variant($body), )*
            $( $(#[$unit_doc])* $unit, )*
        }

        impl MessageBody {
            pub fn message_type(&self) -> CspMessageType {
                match self {
                    $( Self::$variant(_) => CspMessageType::$variant, )*
                    $( Self::$unit => CspMessageType::$unit, )*
                }
            }

            pub(crate) fn validate(&self, limits: &CodecLimits) -> CodecResult<()> {
                let message_type = self.message_type();
                match self {
                    $( Self::$variant(body) => body.validate(message_type, limits), )*
                    $( Self::$unit => Ok(()), )*
                }
            }

            pub(crate) fn encode_into(&self, writer: &mut BodyWriter) -> CodecResult<()> {
                match self {
                    $( Self::$variant(body) => body.encode(writer), )*
                    $( Self::$unit => Ok(()), )*
                }
            }

            pub(crate) fn decode_from(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
                match reader.message_type() {
                    $( CspMessageType::$variant => <$body>::decode(reader).map(Self::$variant), )*
                    $( CspMessageType::$unit => Ok(Self::$unit), )*
                }
            }
        }
    };
}

message_bodies! {
    payload {
        Text(TextBody),
        /// Superseded by [`MessageBody::File`]
        Image(LegacyImageBody),
        Location(LocationBody),
        /// Superseded by [`MessageBody::File`]
        Video(LegacyVideoBody),
        /// Superseded by [`MessageBody::File`]
        Audio(LegacyAudioBody),
        PollSetup(PollSetupBody),
        PollVote(PollVoteBody),
        File(FileBody),
        ContactSetProfilePicture(BlobReference),

        GroupText(Grouped<TextBody>),
        GroupLocation(Grouped<LocationBody>),
        /// Superseded by [`MessageBody::GroupFile`]
        GroupImage(Grouped<BlobReference>),
        /// Superseded by [`MessageBody::GroupFile`]
        GroupVideo(Grouped<LegacyVideoBody>),
        /// Superseded by [`MessageBody::GroupFile`]
        GroupAudio(Grouped<LegacyAudioBody>),
        GroupFile(Grouped<FileBody>),
        /// Sent by the creator; the group creator is the sender
        GroupSetup(GroupSetupBody),
        /// Sent by the creator; the group creator is the sender
        GroupName(GroupNameBody),
        GroupLeave(GroupReference),
        GroupJoinRequest(OpaquePayload),
        GroupJoinResponse(OpaquePayload),
        GroupCallStart(Grouped<OpaquePayload>),
        /// Sent by the creator; the group creator is the sender
        GroupSetProfilePicture(GroupSetProfilePictureBody),
        GroupSyncRequest(GroupReference),
        GroupPollSetup(Grouped<PollSetupBody>),
        GroupPollVote(Grouped<PollVoteBody>),
        /// Sent by the creator; the group creator is the sender
        GroupDeleteProfilePicture(GroupId),

        CallOffer(CallBody),
        CallAnswer(CallBody),
        CallIceCandidate(CallBody),
        CallHangup(CallBody),
        CallRinging(CallBody),

        DeliveryReceipt(DeliveryReceiptBody),
        GroupDeliveryReceipt(Grouped<DeliveryReceiptBody>),
        Reaction(OpaquePayload),
        GroupReaction(Grouped<OpaquePayload>),
        TypingIndicator(TypingIndicatorBody),
        EditMessage(OpaquePayload),
        DeleteMessage(OpaquePayload),
        GroupEditMessage(Grouped<OpaquePayload>),
        GroupDeleteMessage(Grouped<OpaquePayload>),

        ForwardSecurityEnvelope(OpaquePayload),
        WebSessionResume(OpaquePayload),
        AuthToken(OpaquePayload),
    }
    empty {
        ContactDeleteProfilePicture,
        ContactRequestProfilePicture,
        /// Keeps a forward-secrecy session alive without user-visible effect
        Empty,
    }
}

impl MessageBody {
    /// Group reference carried in the body, if the body names one
    ///
    /// Creator-sent control only carries the group id; use
    /// `CspMessage::group_reference` to fill in the sender as creator.
    pub fn embedded_group_reference(&self) -> Option<GroupReference> {
        match self {
            Self::GroupText(g) => Some(g.group),
            Self::GroupLocation(g) => Some(g.group),
            Self::GroupImage(g) => Some(g.group),
            Self::GroupVideo(g) => Some(g.group),
            Self::GroupAudio(g) => Some(g.group),
            Self::GroupFile(g) => Some(g.group),
            Self::GroupCallStart(g) => Some(g.group),
            Self::GroupPollSetup(g) => Some(g.group),
            Self::GroupPollVote(g) => Some(g.group),
            Self::GroupDeliveryReceipt(g) => Some(g.group),
            Self::GroupReaction(g) => Some(g.group),
            Self::GroupEditMessage(g) => Some(g.group),
            Self::GroupDeleteMessage(g) => Some(g.group),
            Self::GroupLeave(reference) | Self::GroupSyncRequest(reference) => Some(*reference),
            _ => None,
        }
    }

    /// Group id of creator-sent control messages
    pub fn creator_group_id(&self) -> Option<GroupId> {
        match self {
            Self::GroupSetup(body) => Some(body.group_id),
            Self::GroupName(body) => Some(body.group_id),
            Self::GroupSetProfilePicture(body) => Some(body.group_id),
            Self::GroupDeleteProfilePicture(group_id) => Some(*group_id),
            _ => None,
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::BodyCodec;
    use crate::error::CodecResult;
    use crate::wire::{BodyReader, BodyWriter};
    use csp_types::CspMessageType;

    pub fn encode<T: BodyCodec>(message_type: CspMessageType, body: &T) -> Vec<u8> {
        let mut writer = BodyWriter::new(message_type);
        body.encode(&mut writer).unwrap();
        writer.into_bytes()
    }

    pub fn decode<T: BodyCodec>(message_type: CspMessageType, bytes: &[u8]) -> CodecResult<T> {
        let mut reader = BodyReader::new(message_type, bytes);
        let body = T::decode(&mut reader)?;
        reader.finish()?;
        Ok(body)
    }
}
