//! # CSP Message Codec
//!
//! ## Purpose
//!
//! The "Rules" layer of the CSP message framework:
//! - Binary body codec for every registered message type
//! - Message entity and builder on top of the body variants
//! - Padded end-to-end container framing (`type ‖ body ‖ padding`)
//! - Flag dispatch: forward-secrecy gating, blocking and replay policy
//!
//! ## Architecture Role
//!
//! ```text
//! csp-types → [csp-codec] → send/receive pipelines
//!     ↑            ↓                 ↓
//! Catalog     Encode/Decode     Encryption, transport,
//! Identifiers Dispatch plans    persistence
//! ```
//!
//! ## Integration Points
//!
//! - **Send pipeline**: [`CspMessageBuilder`] → [`Dispatcher::plan_outbound`]
//!   → [`CspCodec::encode_message`] → encryption
//! - **Receive pipeline**: decryption → [`CspCodec::decode_message`] →
//!   [`Dispatcher::admit_inbound`]
//! - **Configuration**: [`CodecLimits`] and [`ReplayGuardSettings`] are
//!   loaded by `csp-config`
//!
//! ## What This Crate Does NOT Contain
//! - Encryption, key management or session negotiation
//! - Transport, persistence or blob upload
//!
//! ## Example
//!
//! ```rust
//! use csp_codec::{decode_body, encode_body, MessageBody, TextBody};
//! use csp_types::CspMessageType;
//!
//! let body = MessageBody::Text(TextBody::new("hello"));
//! let bytes = encode_body(&body).unwrap();
//! assert_eq!(bytes, b"hello");
//! assert_eq!(decode_body(CspMessageType::Text, &bytes).unwrap(), body);
//! ```

pub mod body;
pub mod builder;
pub mod codec;
pub mod config;
pub mod container;
pub mod dispatch;
pub mod error;
pub mod message;
pub mod replay;
pub mod wire;

pub use body::{
    BodyCodec, CallBody, DeliveryReceiptBody, FileBody, GroupNameBody,
    GroupSetProfilePictureBody, GroupSetupBody, Grouped, LegacyAudioBody, LegacyImageBody,
    LegacyVideoBody, LocationBody, MessageBody, OpaquePayload, PollSetupBody, PollVoteBody,
    PollVoteChoice, RenderingType, TextBody, TypingIndicatorBody,
};
pub use builder::CspMessageBuilder;
pub use codec::{decode_body, encode_body, CspCodec};
pub use config::{CodecLimits, ReplayGuardSettings};
pub use dispatch::{
    ensure_forward_security, DispatchError, DispatchResult, Dispatcher, InboundContext,
    InboundPlan, OutboundPlan,
};
pub use error::{CodecError, CodecResult};
pub use message::{CspMessage, MessageMetadata};
pub use replay::{InMemoryReplayGuard, ReplayGuard};
pub use wire::{BodyReader, BodyWriter};
