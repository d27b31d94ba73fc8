//! Body output buffer

use byteorder::{ByteOrder, LittleEndian};
use crate::error::{CodecError, CodecResult};
use crate::wire::layout::GroupReferenceLayout;
use csp_types::{CspMessageType, GroupReference, Identity};
use serde::Serialize;
use zerocopy::AsBytes;

/// Output buffer for one message body
#[derive(Debug)]
pub struct BodyWriter {
    message_type: CspMessageType,
    buf: Vec<u8>,
}

impl BodyWriter {
    pub fn new(message_type: CspMessageType) -> Self {
        Self {
            message_type,
            buf: Vec::with_capacity(64),
        }
    }

    pub fn message_type(&self) -> CspMessageType {
        self.message_type
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn put_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub fn put_u8(&mut self, value: u8) {
        self.buf.push(value);
    }

    pub fn put_u16_le(&mut self, value: u16) {
        let mut raw = [0u8; 2];
        LittleEndian::write_u16(&mut raw, value);
        self.buf.extend_from_slice(&raw);
    }

    pub fn put_u32_le(&mut self, value: u32) {
        let mut raw = [0u8; 4];
        LittleEndian::write_u32(&mut raw, value);
        self.buf.extend_from_slice(&raw);
    }

    pub fn put_identity(&mut self, identity: &Identity) {
        self.buf.extend_from_slice(identity.as_bytes());
    }

    pub fn put_group_reference(&mut self, reference: &GroupReference) {
        self.put_layout(&GroupReferenceLayout::from(reference));
    }

    pub fn put_layout<T: AsBytes>(&mut self, layout: &T) {
        self.buf.extend_from_slice(layout.as_bytes());
    }

    pub fn put_json<T: Serialize>(&mut self, field: &'static str, value: &T) -> CodecResult<()> {
        serde_json::to_writer(&mut self.buf, value)
            .map_err(|e| CodecError::invalid_field(self.message_type, field, e.to_string()))
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
