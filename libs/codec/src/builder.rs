//! Message construction
//!
//! [`CspMessageBuilder`] collects metadata and a body and refuses to build
//! while a required field is missing. Message id and timestamp default to a
//! fresh random id and the current time.

use crate::body::MessageBody;
use crate::error::{CodecError, CodecResult};
use crate::message::{CspMessage, MessageMetadata};
use chrono::{DateTime, Utc};
use csp_types::{EnvelopeFlags, Identity, MessageId};

#[derive(Debug, Clone, Default)]
pub struct CspMessageBuilder {
    from: Option<Identity>,
    to: Option<Identity>,
    message_id: Option<MessageId>,
    created_at: Option<DateTime<Utc>>,
    extra_flags: EnvelopeFlags,
    body: Option<MessageBody>,
}

impl CspMessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sender(mut self, identity: Identity) -> Self {
        self.from = Some(identity);
        self
    }

    pub fn to(mut self, identity: Identity) -> Self {
        self.to = Some(identity);
        self
    }

    pub fn message_id(mut self, message_id: MessageId) -> Self {
        self.message_id = Some(message_id);
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Suppress automatic delivery receipts for this message only
    pub fn no_delivery_receipts(mut self) -> Self {
        self.extra_flags.insert(EnvelopeFlags::NO_DELIVERY_RECEIPTS);
        self
    }

    pub fn body(mut self, body: MessageBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn is_complete(&self) -> bool {
        self.from.is_some() && self.to.is_some() && self.body.is_some()
    }

    pub fn build(self) -> CodecResult<CspMessage> {
        let from = self
            .from
            .ok_or_else(|| CodecError::incomplete("message", "from"))?;
        let to = self.to.ok_or_else(|| CodecError::incomplete("message", "to"))?;
        let body = self
            .body
            .ok_or_else(|| CodecError::incomplete("message", "body"))?;

        Ok(CspMessage::new(
            MessageMetadata {
                from,
                to,
                message_id: self.message_id.unwrap_or_else(MessageId::random),
                created_at: self.created_at.unwrap_or_else(Utc::now),
                extra_flags: self.extra_flags,
            },
            body,
        ))
    }
}
