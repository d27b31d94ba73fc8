//! Message entity
//!
//! A [`CspMessage`] is routing metadata plus a [`MessageBody`]. The message
//! type is always derived from the body variant, and every behavioral flag
//! is read from that type's descriptor.

use crate::body::MessageBody;
use chrono::{DateTime, Utc};
use csp_types::{
    CspMessageType, EnvelopeFlags, GroupReference, Identity, MessageId, MessageTypeDescriptor,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageMetadata {
    pub from: Identity,
    pub to: Identity,
    pub message_id: MessageId,
    pub created_at: DateTime<Utc>,
    /// Per-message additions to the descriptor's default envelope flags
    pub extra_flags: EnvelopeFlags,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CspMessage {
    pub metadata: MessageMetadata,
    pub body: MessageBody,
}

impl CspMessage {
    pub fn new(metadata: MessageMetadata, body: MessageBody) -> Self {
        Self { metadata, body }
    }

    #[inline]
    pub fn message_type(&self) -> CspMessageType {
        self.body.message_type()
    }

    #[inline]
    pub fn descriptor(&self) -> &'static MessageTypeDescriptor {
        self.message_type().descriptor()
    }

    /// Group this message belongs to
    ///
    /// Creator-sent control (setup, name, profile picture) only carries the
    /// group id; the sender is the creator.
    pub fn group_reference(&self) -> Option<GroupReference> {
        self.body.embedded_group_reference().or_else(|| {
            self.body
                .creator_group_id()
                .map(|group_id| GroupReference::new(self.metadata.from, group_id))
        })
    }

    /// Envelope flag byte: descriptor defaults plus per-message additions
    pub fn envelope_flags(&self) -> EnvelopeFlags {
        EnvelopeFlags::for_descriptor(self.descriptor()) | self.metadata.extra_flags
    }

    /// Whether the recipient should answer with a `received` receipt
    pub fn expects_delivery_receipt(&self) -> bool {
        self.descriptor().sends_automatic_delivery_receipt
            && !self
                .metadata
                .extra_flags
                .contains(EnvelopeFlags::NO_DELIVERY_RECEIPTS)
    }
}
