//! Protocol constants
//!
//! Field widths and size limits shared by every body layout. Codec code must
//! take widths from here instead of repeating literals.

/// Account identity, ASCII
pub const IDENTITY_LEN: usize = 8;

pub const MESSAGE_ID_LEN: usize = 8;

pub const GROUP_ID_LEN: usize = 16;

/// Creator identity followed by group id
pub const GROUP_REFERENCE_LEN: usize = IDENTITY_LEN + GROUP_ID_LEN;

pub const BLOB_ID_LEN: usize = 16;

pub const BLOB_KEY_LEN: usize = 32;

/// Blob size field, u32 little-endian
pub const BLOB_SIZE_LEN: usize = 4;

/// Blob id, size and key
pub const BLOB_REFERENCE_LEN: usize = BLOB_ID_LEN + BLOB_SIZE_LEN + BLOB_KEY_LEN;

pub const BALLOT_ID_LEN: usize = 8;

pub const NONCE_LEN: usize = 24;

/// Media duration field of legacy audio and video messages, u16 little-endian
pub const MEDIA_DURATION_LEN: usize = 2;

/// Maximum size of a transport packet
pub const MAX_PKT_LEN: usize = 8192;

/// Upper bound of the random padding appended to every container
pub const OVERHEAD_MAXPADDING: usize = 255;

/// Authenticator added by one NaCl box, nonce excluded
pub const OVERHEAD_NACL_BOX: usize = 16;

/// Transport packet header
pub const OVERHEAD_PKT_HDR: usize = 4;

/// End-to-end message header
pub const OVERHEAD_MSG_HDR: usize = 88;

/// Type byte inside the boxed container
pub const OVERHEAD_BOX_HDR: usize = 1;

/// Largest body that still fits a packet after transport, header, type byte
/// and maximum padding overhead
///
/// Two boxes apply: app-to-server and end-to-end.
pub const MAX_MESSAGE_LEN: usize = MAX_PKT_LEN
    - OVERHEAD_NACL_BOX * 2
    - OVERHEAD_PKT_HDR
    - OVERHEAD_MSG_HDR
    - OVERHEAD_BOX_HDR
    - OVERHEAD_MAXPADDING;

/// Text limit in UTF-8 bytes enforced when composing messages
pub const MAX_TEXT_MESSAGE_LEN: usize = 6000;

/// Containers are padded to at least this many bytes
pub const MIN_MESSAGE_PADDED_LEN: usize = 32;
