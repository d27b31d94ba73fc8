//! Delivery receipts and typing indicators

use super::BodyCodec;
use crate::config::CodecLimits;
use crate::error::{CodecError, CodecResult};
use crate::wire::{BodyReader, BodyWriter};
use csp_types::constants::MESSAGE_ID_LEN;
use csp_types::{CspMessageType, DeliveryReceiptStatus, MessageId};

/// Status byte followed by one or more acknowledged message ids
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceiptBody {
    pub status: DeliveryReceiptStatus,
    pub message_ids: Vec<MessageId>,
}

impl DeliveryReceiptBody {
    pub fn new(status: DeliveryReceiptStatus, message_ids: Vec<MessageId>) -> Self {
        Self {
            status,
            message_ids,
        }
    }
}

impl BodyCodec for DeliveryReceiptBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_u8(self.status.into());
        for id in &self.message_ids {
            writer.put_bytes(id.as_bytes());
        }
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let raw_status = reader.read_u8("status")?;
        let status = DeliveryReceiptStatus::from_wire(raw_status)
            .map_err(|e| reader.malformed(e.to_string()))?;

        if reader.remaining() == 0 || reader.remaining() % MESSAGE_ID_LEN != 0 {
            return Err(reader.malformed(format!(
                "message id list of {} bytes is not a non-empty multiple of {}",
                reader.remaining(),
                MESSAGE_ID_LEN
            )));
        }
        let mut message_ids = Vec::with_capacity(reader.remaining() / MESSAGE_ID_LEN);
        while reader.remaining() > 0 {
            message_ids.push(MessageId::new(reader.take_array("message id")?));
        }
        Ok(Self {
            status,
            message_ids,
        })
    }

    fn validate(&self, _message_type: CspMessageType, _limits: &CodecLimits) -> CodecResult<()> {
        if self.message_ids.is_empty() {
            return Err(CodecError::incomplete("delivery receipt", "message_ids"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingIndicatorBody {
    pub is_typing: bool,
}

impl BodyCodec for TypingIndicatorBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_u8(u8::from(self.is_typing));
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        match reader.read_u8("typing flag")? {
            0 => Ok(Self { is_typing: false }),
            1 => Ok(Self { is_typing: true }),
            other => Err(reader.malformed(format!("typing flag must be 0 or 1, got {}", other))),
        }
    }
}
