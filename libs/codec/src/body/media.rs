//! Fixed-layout media bodies
//!
//! Blob references and the legacy image/audio/video messages that predate the
//! JSON file message. They stay decodable so history from older clients keeps
//! working.

use super::BodyCodec;
use crate::error::CodecResult;
use crate::wire::layout::{
    BlobReferenceLayout, LegacyAudioLayout, LegacyImageLayout, LegacyVideoLayout,
};
use crate::wire::{BodyReader, BodyWriter};
use csp_types::{BlobId, BlobKey, BlobReference, Nonce};
use zerocopy::byteorder::{U16, U32};

impl BodyCodec for BlobReference {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_layout(&BlobReferenceLayout::from(self));
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let layout: BlobReferenceLayout = reader.read_layout("blob reference")?;
        Ok(layout.into())
    }
}

/// Legacy image: the blob key is derived from the message box, only the
/// nonce travels here
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyImageBody {
    pub blob_id: BlobId,
    pub size: u32,
    pub nonce: Nonce,
}

impl BodyCodec for LegacyImageBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_layout(&LegacyImageLayout {
            blob_id: self.blob_id.into_inner(),
            size: U32::new(self.size),
            nonce: self.nonce.into_inner(),
        });
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let layout: LegacyImageLayout = reader.read_layout("image")?;
        Ok(Self {
            blob_id: BlobId::new(layout.blob_id),
            size: layout.size.get(),
            nonce: Nonce::new(layout.nonce),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyAudioBody {
    pub duration_secs: u16,
    pub blob: BlobReference,
}

impl BodyCodec for LegacyAudioBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_layout(&LegacyAudioLayout {
            duration: U16::new(self.duration_secs),
            blob: BlobReferenceLayout::from(&self.blob),
        });
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let layout: LegacyAudioLayout = reader.read_layout("audio")?;
        Ok(Self {
            duration_secs: layout.duration.get(),
            blob: layout.blob.into(),
        })
    }
}

/// Legacy video: video and thumbnail share one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegacyVideoBody {
    pub duration_secs: u16,
    pub video_blob_id: BlobId,
    pub video_size: u32,
    pub thumbnail_blob_id: BlobId,
    pub thumbnail_size: u32,
    pub encryption_key: BlobKey,
}

impl LegacyVideoBody {
    pub fn video(&self) -> BlobReference {
        BlobReference::new(self.video_blob_id, self.video_size, self.encryption_key)
    }

    pub fn thumbnail(&self) -> BlobReference {
        BlobReference::new(
            self.thumbnail_blob_id,
            self.thumbnail_size,
            self.encryption_key,
        )
    }
}

impl BodyCodec for LegacyVideoBody {
    fn encode(&self, writer: &mut BodyWriter) -> CodecResult<()> {
        writer.put_layout(&LegacyVideoLayout {
            duration: U16::new(self.duration_secs),
            video_blob_id: self.video_blob_id.into_inner(),
            video_size: U32::new(self.video_size),
            thumbnail_blob_id: self.thumbnail_blob_id.into_inner(),
            thumbnail_size: U32::new(self.thumbnail_size),
            encryption_key: self.encryption_key.into_inner(),
        });
        Ok(())
    }

    fn decode(reader: &mut BodyReader<'_>) -> CodecResult<Self> {
        let layout: LegacyVideoLayout = reader.read_layout("video")?;
        Ok(Self {
            duration_secs: layout.duration.get(),
            video_blob_id: BlobId::new(layout.video_blob_id),
            video_size: layout.video_size.get(),
            thumbnail_blob_id: BlobId::new(layout.thumbnail_blob_id),
            thumbnail_size: layout.thumbnail_size.get(),
            encryption_key: BlobKey::new(layout.encryption_key),
        })
    }
}
