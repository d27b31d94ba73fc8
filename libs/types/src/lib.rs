//! # CSP Types
//!
//! Shared type system for the end-to-end message framework of the chat server
//! protocol (CSP): identifiers, group and blob references, and the closed
//! catalog of message types together with their behavioral flags.
//!
//! ## Design Philosophy
//!
//! - **Fixed Widths**: Every identifier wraps a byte array whose width comes
//!   from [`protocol::constants`], so a wrong-length value cannot be built
//! - **Data-Driven Catalog**: Per-type behavior lives in a single static table
//!   of [`MessageTypeDescriptor`]s, never in per-message code
//! - **Append-Only Registry**: Wire codes are never reused or reinterpreted;
//!   superseded types stay registered with a deprecation marker
//!
//! ## Quick Start
//!
//! ```rust
//! use csp_types::{catalog, CspMessageType, ForwardSecurityVersion};
//!
//! let descriptor = catalog::descriptor(0x43).unwrap();
//! assert_eq!(descriptor.message_type, CspMessageType::GroupImage);
//! assert!(descriptor.protects_against_replay);
//! assert_eq!(
//!     descriptor.minimum_forward_security_version,
//!     Some(ForwardSecurityVersion::V1_2)
//! );
//! ```
//!
//! ## Integration Points
//!
//! - **csp-codec**: Body encoding/decoding keyed by [`CspMessageType`]
//! - **Send/receive pipelines**: Read descriptor flags to decide push,
//!   reflection, receipts and forward-secrecy gating

pub mod common;
pub mod protocol;

pub use common::errors::ValidationError;
pub use common::identifiers::{
    BallotId, BlobId, BlobKey, GroupId, Identity, MessageId, Nonce,
};
pub use protocol::blob::{BlobReference, BlobReferenceBuilder, BlobStore};
pub use protocol::catalog;
pub use protocol::constants;
pub use protocol::descriptor::{
    BodySize, ConversationScope, Deprecation, MessageLifetime, MessageTypeDescriptor,
};
pub use protocol::envelope::EnvelopeFlags;
pub use protocol::forward_security::{ForwardSecuritySession, ForwardSecurityVersion};
pub use protocol::group::GroupReference;
pub use protocol::message_type::CspMessageType;
pub use protocol::receipt::DeliveryReceiptStatus;

/// Result type for type-level validation
pub type Result<T> = std::result::Result<T, ValidationError>;
