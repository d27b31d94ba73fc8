//! Fixed-width body layouts
//!
//! All fields are byte arrays or unaligned little-endian integers, so the
//! structs have alignment 1, contain no padding, and `size_of` equals the wire
//! width. Widths come from [`csp_types::constants`].

use csp_types::constants::{
    BLOB_ID_LEN, BLOB_KEY_LEN, GROUP_ID_LEN, IDENTITY_LEN, NONCE_LEN,
};
use csp_types::{BlobId, BlobKey, BlobReference, GroupId, GroupReference, Identity, ValidationError};
use zerocopy::byteorder::{LittleEndian, U16, U32};
use zerocopy::{AsBytes, FromBytes, FromZeroes, Unaligned};

/// Creator identity followed by group id
#[repr(C)]
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct GroupReferenceLayout {
    pub creator: [u8; IDENTITY_LEN],
    pub group_id: [u8; GROUP_ID_LEN],
}

impl From<&GroupReference> for GroupReferenceLayout {
    fn from(reference: &GroupReference) -> Self {
        Self {
            creator: *reference.creator.as_bytes(),
            group_id: reference.group_id.into_inner(),
        }
    }
}

impl TryFrom<GroupReferenceLayout> for GroupReference {
    type Error = ValidationError;

    fn try_from(layout: GroupReferenceLayout) -> Result<Self, Self::Error> {
        Ok(GroupReference::new(
            Identity::from_bytes(&layout.creator)?,
            GroupId::new(layout.group_id),
        ))
    }
}

/// Blob id, size (u32 LE), key
#[repr(C)]
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct BlobReferenceLayout {
    pub blob_id: [u8; BLOB_ID_LEN],
    pub size: U32<LittleEndian>,
    pub encryption_key: [u8; BLOB_KEY_LEN],
}

impl From<&BlobReference> for BlobReferenceLayout {
    fn from(reference: &BlobReference) -> Self {
        Self {
            blob_id: reference.blob_id.into_inner(),
            size: U32::new(reference.size),
            encryption_key: reference.encryption_key.into_inner(),
        }
    }
}

impl From<BlobReferenceLayout> for BlobReference {
    fn from(layout: BlobReferenceLayout) -> Self {
        BlobReference::new(
            BlobId::new(layout.blob_id),
            layout.size.get(),
            BlobKey::new(layout.encryption_key),
        )
    }
}

/// Legacy image: blob id, size, nonce. The key travels in the box of the
/// message itself.
#[repr(C)]
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct LegacyImageLayout {
    pub blob_id: [u8; BLOB_ID_LEN],
    pub size: U32<LittleEndian>,
    pub nonce: [u8; NONCE_LEN],
}

/// Legacy audio: duration in seconds, then the blob reference
#[repr(C)]
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct LegacyAudioLayout {
    pub duration: U16<LittleEndian>,
    pub blob: BlobReferenceLayout,
}

/// Legacy video: duration, video blob, thumbnail blob, one shared key
#[repr(C)]
#[derive(Debug, Clone, Copy, AsBytes, FromBytes, FromZeroes, Unaligned)]
pub struct LegacyVideoLayout {
    pub duration: U16<LittleEndian>,
    pub video_blob_id: [u8; BLOB_ID_LEN],
    pub video_size: U32<LittleEndian>,
    pub thumbnail_blob_id: [u8; BLOB_ID_LEN],
    pub thumbnail_size: U32<LittleEndian>,
    pub encryption_key: [u8; BLOB_KEY_LEN],
}
