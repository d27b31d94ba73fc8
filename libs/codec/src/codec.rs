//! Body and container encoding entry points
//!
//! [`CspCodec`] applies the configured [`CodecLimits`] around the per-type
//! body codecs. Encoding validates first and never emits a partial body;
//! decoding checks the descriptor's size constraint before parsing and
//! rejects trailing bytes.

use crate::body::MessageBody;
use crate::config::CodecLimits;
use crate::container;
use crate::error::{CodecError, CodecResult};
use crate::message::{CspMessage, MessageMetadata};
use crate::wire::{BodyReader, BodyWriter};
use csp_types::CspMessageType;
use rand::Rng;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default)]
pub struct CspCodec {
    limits: CodecLimits,
}

impl CspCodec {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &CodecLimits {
        &self.limits
    }

    /// Encode a body; its type is implied by the variant
    pub fn encode_body(&self, body: &MessageBody) -> CodecResult<Vec<u8>> {
        let message_type = body.message_type();
        let descriptor = message_type.descriptor();

        body.validate(&self.limits)?;

        let mut writer = BodyWriter::new(message_type);
        body.encode_into(&mut writer)?;
        let bytes = writer.into_bytes();

        let limit = descriptor.body_size.max().min(self.limits.max_body_len);
        if bytes.len() < descriptor.body_size.min() {
            return Err(CodecError::incomplete(descriptor.name, "body"));
        }
        if bytes.len() > limit || !descriptor.body_size.admits(bytes.len()) {
            return Err(CodecError::payload_too_large(message_type, bytes.len(), limit));
        }

        trace!(message_type = %message_type, len = bytes.len(), "encoded message body");
        Ok(bytes)
    }

    /// Decode a body of a known type
    pub fn decode_body(&self, message_type: CspMessageType, body: &[u8]) -> CodecResult<MessageBody> {
        self.decode_body_inner(message_type, body).map_err(|e| {
            debug!(
                message_type = %message_type,
                len = body.len(),
                kind = e.kind(),
                error = %e,
                "rejected message body"
            );
            e
        })
    }

    fn decode_body_inner(&self, message_type: CspMessageType, body: &[u8]) -> CodecResult<MessageBody> {
        let descriptor = message_type.descriptor();

        if body.len() > self.limits.max_body_len {
            return Err(CodecError::malformed_body(
                message_type,
                0,
                format!("body exceeds limit of {} bytes", self.limits.max_body_len),
                body.len(),
            ));
        }
        if !descriptor.body_size.admits(body.len()) {
            return Err(CodecError::malformed_body(
                message_type,
                0,
                format!("expected {}, got {}", descriptor.body_size, body.len()),
                body.len(),
            ));
        }

        let mut reader = BodyReader::new(message_type, body);
        let decoded = MessageBody::decode_from(&mut reader)?;
        reader.finish()?;
        Ok(decoded)
    }

    /// Decode a body whose type code has not been resolved yet
    pub fn decode_raw(&self, type_code: u8, body: &[u8]) -> CodecResult<MessageBody> {
        let message_type = CspMessageType::from_code(type_code).map_err(|_| {
            debug!(type_code, len = body.len(), "rejected unknown message type");
            CodecError::UnknownMessageType { code: type_code }
        })?;
        self.decode_body(message_type, body)
    }

    /// Frame a body as `type ‖ body ‖ padding` with random padding
    pub fn encode_container<R: Rng + ?Sized>(
        &self,
        body: &MessageBody,
        rng: &mut R,
    ) -> CodecResult<Vec<u8>> {
        let bytes = self.encode_body(body)?;
        let padding = container::random_padding_len(rng, bytes.len(), self.limits.min_padded_len);
        container::pad(body.message_type().code(), &bytes, padding)
    }

    /// Parse a padded container into its body
    pub fn decode_container(&self, container: &[u8]) -> CodecResult<MessageBody> {
        let (type_code, body) = container::unpad(container).map_err(|e| {
            debug!(len = container.len(), error = %e, "rejected container");
            e
        })?;
        self.decode_raw(type_code, body)
    }

    pub fn encode_message<R: Rng + ?Sized>(
        &self,
        message: &CspMessage,
        rng: &mut R,
    ) -> CodecResult<Vec<u8>> {
        self.encode_container(&message.body, rng)
    }

    /// Rebuild a message from envelope metadata and its decrypted container
    pub fn decode_message(
        &self,
        metadata: MessageMetadata,
        container: &[u8],
    ) -> CodecResult<CspMessage> {
        let body = self.decode_container(container)?;
        Ok(CspMessage::new(metadata, body))
    }
}

/// Encode with default limits
pub fn encode_body(body: &MessageBody) -> CodecResult<Vec<u8>> {
    CspCodec::default().encode_body(body)
}

/// Decode with default limits
pub fn decode_body(message_type: CspMessageType, body: &[u8]) -> CodecResult<MessageBody> {
    CspCodec::default().decode_body(message_type, body)
}
