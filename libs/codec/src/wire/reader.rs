//! Body input cursor

use byteorder::{ByteOrder, LittleEndian};
use crate::error::{CodecError, CodecResult};
use crate::wire::layout::GroupReferenceLayout;
use csp_types::{CspMessageType, GroupReference, Identity};
use serde::de::DeserializeOwned;
use zerocopy::FromBytes;

/// Bounds-checked cursor over one message body
///
/// Every read validates that the requested width is available before
/// consuming it; nothing past the end of the body is ever touched.
#[derive(Debug)]
pub struct BodyReader<'a> {
    message_type: CspMessageType,
    body: &'a [u8],
    offset: usize,
}

impl<'a> BodyReader<'a> {
    pub fn new(message_type: CspMessageType, body: &'a [u8]) -> Self {
        Self {
            message_type,
            body,
            offset: 0,
        }
    }

    pub fn message_type(&self) -> CspMessageType {
        self.message_type
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.body.len() - self.offset
    }

    /// `MalformedBody` at the current offset
    pub fn malformed(&self, reason: impl Into<String>) -> CodecError {
        CodecError::malformed_body(self.message_type, self.offset, reason, self.body.len())
    }

    /// `MalformedBody` at an earlier offset, for fields judged after reading
    pub fn malformed_at(&self, offset: usize, reason: impl Into<String>) -> CodecError {
        CodecError::malformed_body(self.message_type, offset, reason, self.body.len())
    }

    pub fn take(&mut self, len: usize, field: &'static str) -> CodecResult<&'a [u8]> {
        if self.remaining() < len {
            return Err(self.malformed(format!(
                "{} needs {} bytes, {} remaining",
                field,
                len,
                self.remaining()
            )));
        }
        let slice = &self.body[self.offset..self.offset + len];
        self.offset += len;
        Ok(slice)
    }

    pub fn take_array<const N: usize>(&mut self, field: &'static str) -> CodecResult<[u8; N]> {
        let slice = self.take(N, field)?;
        let mut out = [0u8; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    pub fn read_u8(&mut self, field: &'static str) -> CodecResult<u8> {
        Ok(self.take(1, field)?[0])
    }

    pub fn read_u16_le(&mut self, field: &'static str) -> CodecResult<u16> {
        Ok(LittleEndian::read_u16(self.take(2, field)?))
    }

    pub fn read_u32_le(&mut self, field: &'static str) -> CodecResult<u32> {
        Ok(LittleEndian::read_u32(self.take(4, field)?))
    }

    pub fn read_identity(&mut self, field: &'static str) -> CodecResult<Identity> {
        let start = self.offset;
        let bytes = self.take(Identity::LEN, field)?;
        Identity::from_bytes(bytes).map_err(|e| {
            CodecError::from_validation(e, self.message_type, start, self.body.len())
        })
    }

    pub fn read_group_reference(&mut self) -> CodecResult<GroupReference> {
        let start = self.offset;
        let layout: GroupReferenceLayout = self.read_layout("group reference")?;
        GroupReference::try_from(layout).map_err(|e| {
            CodecError::from_validation(e, self.message_type, start, self.body.len())
        })
    }

    /// Fixed-width zerocopy layout
    pub fn read_layout<T: FromBytes>(&mut self, field: &'static str) -> CodecResult<T> {
        let bytes = self.take(std::mem::size_of::<T>(), field)?;
        T::read_from(bytes).ok_or_else(|| self.malformed(format!("{} has wrong width", field)))
    }

    /// Everything up to the end of the body
    pub fn rest(&mut self) -> &'a [u8] {
        let slice = &self.body[self.offset..];
        self.offset = self.body.len();
        slice
    }

    pub fn rest_utf8(&mut self, field: &'static str) -> CodecResult<&'a str> {
        let start = self.offset;
        let bytes = self.rest();
        std::str::from_utf8(bytes).map_err(|e| {
            CodecError::malformed_body(
                self.message_type,
                start + e.valid_up_to(),
                format!("{} is not valid UTF-8", field),
                self.body.len(),
            )
        })
    }

    pub fn rest_json<T: DeserializeOwned>(&mut self, field: &'static str) -> CodecResult<T> {
        let start = self.offset;
        let bytes = self.rest();
        serde_json::from_slice(bytes).map_err(|e| {
            CodecError::malformed_body(
                self.message_type,
                start,
                format!("{} is not valid JSON: {}", field, e),
                self.body.len(),
            )
        })
    }

    /// Fails if any bytes were left unread
    pub fn finish(self) -> CodecResult<()> {
        if self.remaining() != 0 {
            return Err(self.malformed(format!("{} trailing bytes", self.remaining())));
        }
        Ok(())
    }
}
