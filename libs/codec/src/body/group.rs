//! Group control bodies sent by the group creator
//!
//! The creator is the sender of these messages, so only the group id is on
//! the wire.

use super::BodyCodec;
use crate::config::CodecLimits;
use crate::error::{CodecError, CodecResult};
use crate::wire::{BodyReader, BodyWriter};
use csp_types::constants::IDENTITY_LEN;
use csp_types::{BlobReference, CspMessageType, GroupId, Identity};

/// Full member list, excluding the creator; an empty list dissolves the group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSetupBody {
    pub group_id: GroupId,
    pub members: Vec<Identity>,
}

impl BodyCodec for GroupSetupBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_bytes(self.group_id.as_bytes());
        for member in &self.members {
            writer.put_identity(member);
        }
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let group_id = GroupId::new(reader.take_array("group id")?);
        if reader.remaining() % IDENTITY_LEN != 0 {
            return Err(reader.malformed(format!(
                "member list of {} bytes is not a multiple of {}",
                reader.remaining(),
                IDENTITY_LEN
            )));
        }
        let mut members = Vec::with_capacity(reader.remaining() / IDENTITY_LEN);
        while reader.remaining() > 0 {
            let offset = reader.offset();
            let member = reader.read_identity("member")?;
            if members.contains(&member) {
                return Err(reader.malformed_at(offset, format!("{} listed twice", member)));
            }
            members.push(member);
        }
        Ok(Self { group_id, members })
    }

    fn validate(&self, message_type: CspMessageType, _limits: &CodecLimits) -> CodecResult<()> {
        for (index, member) in self.members.iter().enumerate() {
            if self.members[..index].contains(member) {
                return Err(CodecError::invalid_field(
                    message_type,
                    "members",
                    format!("{} listed twice", member),
                ));
            }
        }
        Ok(())
    }
}

/// New group name; may be empty
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupNameBody {
    pub group_id: GroupId,
    pub name: String,
}

impl BodyCodec for GroupNameBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_bytes(self.group_id.as_bytes());
        writer.put_bytes(self.name.as_bytes());
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let group_id = GroupId::new(reader.take_array("group id")?);
        let name = reader.rest_utf8("group name")?.to_string();
        Ok(Self { group_id, name })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSetProfilePictureBody {
    pub group_id: GroupId,
    pub picture: BlobReference,
}

impl BodyCodec for GroupSetProfilePictureBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_bytes(self.group_id.as_bytes());
        self.picture.encode(writer)
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let group_id = GroupId::new(reader.take_array("group id")?);
        let picture = BlobReference::decode(reader)?;
        Ok(Self { group_id, picture })
    }
}
