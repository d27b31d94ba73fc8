//! Blob references
//!
//! Media is not carried inside a message. The sender uploads the encrypted
//! payload to the blob server and the message carries a [`BlobReference`]:
//! the blob id, the encrypted byte size and the symmetric key.
//!
//! Transfers go through a [`BlobStore`] implementation owned by the embedding
//! application; nothing in this workspace performs network I/O.

use crate::{BlobId, BlobKey, ValidationError};
use serde::{Deserialize, Serialize};

/// Complete, immutable reference to an uploaded blob
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlobReference {
    pub blob_id: BlobId,
    /// Encrypted size in bytes
    pub size: u32,
    pub encryption_key: BlobKey,
}

impl BlobReference {
    pub const fn new(blob_id: BlobId, size: u32, encryption_key: BlobKey) -> Self {
        Self {
            blob_id,
            size,
            encryption_key,
        }
    }

    pub fn builder() -> BlobReferenceBuilder {
        BlobReferenceBuilder::default()
    }
}

/// Incrementally collects the parts of a [`BlobReference`]
///
/// Used while an upload is in flight: the key is known before the blob id
/// and size are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlobReferenceBuilder {
    blob_id: Option<BlobId>,
    size: Option<u32>,
    encryption_key: Option<BlobKey>,
}

impl BlobReferenceBuilder {
    pub fn blob_id(mut self, blob_id: BlobId) -> Self {
        self.blob_id = Some(blob_id);
        self
    }

    pub fn size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn encryption_key(mut self, key: BlobKey) -> Self {
        self.encryption_key = Some(key);
        self
    }

    /// True once id, size and key are all set
    pub fn is_complete(&self) -> bool {
        self.blob_id.is_some() && self.size.is_some() && self.encryption_key.is_some()
    }

    pub fn build(self) -> Result<BlobReference, ValidationError> {
        let blob_id = self
            .blob_id
            .ok_or_else(|| ValidationError::missing_field("blob reference", "blob_id"))?;
        let size = self
            .size
            .ok_or_else(|| ValidationError::missing_field("blob reference", "size"))?;
        let encryption_key = self
            .encryption_key
            .ok_or_else(|| ValidationError::missing_field("blob reference", "encryption_key"))?;

        Ok(BlobReference::new(blob_id, size, encryption_key))
    }
}

/// Blob server client consumed by media pipelines
pub trait BlobStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Download the encrypted blob
    fn fetch(&self, blob_id: &BlobId) -> Result<Vec<u8>, Self::Error>;

    /// Upload an encrypted blob and return the id assigned by the server
    fn store(&self, data: &[u8]) -> Result<BlobId, Self::Error>;
}
