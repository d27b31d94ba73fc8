//! Opaque payloads
//!
//! Reactions, edits, deletes, group call starts, the forward-secrecy envelope
//! and a few control messages carry payloads encoded by other protocol layers
//! (mostly protobuf). They are transported verbatim.

use super::BodyCodec;
use crate::config::CodecLimits;
use crate::error::{CodecError, CodecResult};
use crate::wire::{BodyReader, BodyWriter};
use csp_types::CspMessageType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaquePayload(pub Vec<u8>);

impl OpaquePayload {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl BodyCodec for OpaquePayload {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_bytes(&self.0);
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let bytes = reader.rest();
        if bytes.is_empty() {
            return Err(reader.malformed("payload is empty"));
        }
        Ok(Self(bytes.to_vec()))
    }

    fn validate(&self, _message_type: CspMessageType, _limits: &CodecLimits) -> CodecResult<()> {
        if self.0.is_empty() {
            return Err(CodecError::incomplete("opaque payload", "payload"));
        }
        Ok(())
    }
}
