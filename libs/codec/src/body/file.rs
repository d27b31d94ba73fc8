//! File message body
//!
//! A UTF-8 JSON object with single-letter keys:
//!
//! | key | field |
//! |-----|-------|
//! | `b` | blob id, hex |
//! | `t` | thumbnail blob id, hex (optional) |
//! | `k` | blob key, hex |
//! | `m` | media type |
//! | `p` | thumbnail media type (optional) |
//! | `n` | file name (optional) |
//! | `s` | file size in bytes |
//! | `j` | rendering type: 0 file, 1 media, 2 sticker |
//! | `i` | legacy rendering flag, 1 for media |
//! | `d` | caption (optional, never blank) |
//! | `c` | correlation id (optional) |
//! | `x` | metadata object (optional) |

use super::BodyCodec;
use crate::config::CodecLimits;
use crate::error::{CodecError, CodecResult};
use crate::wire::{BodyReader, BodyWriter};
use csp_types::{BlobId, BlobKey, CspMessageType};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RenderingType {
    #[default]
    File,
    Media,
    Sticker,
}

impl RenderingType {
    fn to_wire(self) -> u8 {
        match self {
            Self::File => 0,
            Self::Media => 1,
            Self::Sticker => 2,
        }
    }

    fn from_wire(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Self::File),
            1 => Some(Self::Media),
            2 => Some(Self::Sticker),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileBody {
    pub blob_id: BlobId,
    pub thumbnail_blob_id: Option<BlobId>,
    pub encryption_key: BlobKey,
    pub media_type: String,
    pub thumbnail_media_type: Option<String>,
    pub file_name: Option<String>,
    pub file_size: u64,
    pub rendering_type: RenderingType,
    pub caption: Option<String>,
    pub correlation_id: Option<String>,
    pub metadata: Option<Map<String, Value>>,
}

impl FileBody {
    pub fn new(
        blob_id: BlobId,
        encryption_key: BlobKey,
        media_type: impl Into<String>,
        file_size: u64,
    ) -> Self {
        Self {
            blob_id,
            thumbnail_blob_id: None,
            encryption_key,
            media_type: media_type.into(),
            thumbnail_media_type: None,
            file_name: None,
            file_size,
            rendering_type: RenderingType::File,
            caption: None,
            correlation_id: None,
            metadata: None,
        }
    }

    /// Blank captions are dropped
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        let caption = caption.into();
        self.caption = if caption.trim().is_empty() {
            None
        } else {
            Some(caption)
        };
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_thumbnail(mut self, blob_id: BlobId, media_type: impl Into<String>) -> Self {
        self.thumbnail_blob_id = Some(blob_id);
        self.thumbnail_media_type = Some(media_type.into());
        self
    }

    pub fn with_rendering_type(mut self, rendering_type: RenderingType) -> Self {
        self.rendering_type = rendering_type;
        self
    }
}

#[derive(Serialize, Deserialize)]
struct FileJson {
    #[serde(rename = "b")]
    blob_id: String,
    #[serde(rename = "t", default, skip_serializing_if = "Option::is_none")]
    thumbnail_blob_id: Option<String>,
    #[serde(rename = "k")]
    encryption_key: String,
    #[serde(rename = "m")]
    media_type: String,
    #[serde(rename = "p", default, skip_serializing_if = "Option::is_none")]
    thumbnail_media_type: Option<String>,
    #[serde(rename = "n", default, skip_serializing_if = "Option::is_none")]
    file_name: Option<String>,
    #[serde(rename = "s")]
    file_size: u64,
    #[serde(rename = "j", default)]
    rendering_type: u8,
    #[serde(rename = "i", default)]
    legacy_rendering: u8,
    #[serde(rename = "d", default, skip_serializing_if = "Option::is_none")]
    caption: Option<String>,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    correlation_id: Option<String>,
    #[serde(rename = "x", default, skip_serializing_if = "Option::is_none")]
    metadata: Option<Map<String, Value>>,
}

fn decode_hex<const N: usize>(reader: &BodyReader<'_>, field: &str, raw: &str) -> CodecResult<[u8; N]> {
    let bytes = hex::decode(raw)
        .map_err(|e| reader.malformed(format!("{} is not hex: {}", field, e)))?;
    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| {
        reader.malformed(format!(
            "{} must be {} bytes, got {}",
            field,
            N,
            bytes.len()
        ))
    })
}

impl BodyCodec for FileBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        let json = FileJson {
            blob_id: hex::encode(self.blob_id.as_bytes()),
            thumbnail_blob_id: self.thumbnail_blob_id.map(|id| hex::encode(id.as_bytes())),
            encryption_key: hex::encode(self.encryption_key.as_bytes()),
            media_type: self.media_type.clone(),
            thumbnail_media_type: self.thumbnail_media_type.clone(),
            file_name: self.file_name.clone(),
            file_size: self.file_size,
            rendering_type: self.rendering_type.to_wire(),
            legacy_rendering: u8::from(self.rendering_type == RenderingType::Media),
            caption: self.caption.clone(),
            correlation_id: self.correlation_id.clone(),
            metadata: self.metadata.clone(),
        };
        writer.put_json("file descriptor", &json)
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let json: FileJson = reader.rest_json("file descriptor")?;

        let blob_id = BlobId::new(decode_hex(reader, "blob id", &json.blob_id)?);
        let encryption_key = BlobKey::new(decode_hex(reader, "blob key", &json.encryption_key)?);
        let thumbnail_blob_id = match json.thumbnail_blob_id.as_deref() {
            Some(raw) => Some(BlobId::new(decode_hex(reader, "thumbnail blob id", raw)?)),
            None => None,
        };
        let rendering_type = RenderingType::from_wire(json.rendering_type).ok_or_else(|| {
            reader.malformed(format!("unknown rendering type {}", json.rendering_type))
        })?;

        Ok(Self {
            blob_id,
            thumbnail_blob_id,
            encryption_key,
            media_type: json.media_type,
            thumbnail_media_type: json.thumbnail_media_type,
            file_name: json.file_name,
            file_size: json.file_size,
            rendering_type,
            caption: json.caption.filter(|c| !c.trim().is_empty()),
            correlation_id: json.correlation_id,
            metadata: json.metadata,
        })
    }

    fn validate(&self, message_type: CspMessageType, _limits: &CodecLimits) -> CodecResult<()> {
        if self.media_type.is_empty() {
            return Err(CodecError::incomplete("file message", "media_type"));
        }
        if self.caption.as_deref().is_some_and(|c| c.trim().is_empty()) {
            return Err(CodecError::invalid_field(
                message_type,
                "caption",
                "blank caption; leave it unset instead",
            ));
        }
        if self.thumbnail_blob_id.is_none() && self.thumbnail_media_type.is_some() {
            return Err(CodecError::invalid_field(
                message_type,
                "thumbnail_media_type",
                "set without a thumbnail blob",
            ));
        }
        Ok(())
    }
}
