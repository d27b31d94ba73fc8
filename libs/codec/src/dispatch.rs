//! # Flag Dispatch
//!
//! ## Purpose
//!
//! Turns a message's catalog descriptor into the concrete steps the send and
//! receive pipelines take. Nothing here inspects the body: every decision is
//! a lookup on the type's [`MessageTypeDescriptor`] plus the session and
//! contact state handed in by the caller.
//!
//! ## Inbound Order
//!
//! 1. Forward-secrecy gate against the negotiated session version
//! 2. Replay check for types that protect against replay
//! 3. Blocked senders are dropped unless the type is exempt from blocking
//!
//! The replay check records the nonce, so a message dropped for a blocked
//! sender still consumes it and stays a replay after the sender is
//! unblocked. A message failing the gate consumes nothing.
//!
//! ## Integration Points
//!
//! - **Send pipeline**: [`Dispatcher::plan_outbound`] before encryption
//! - **Receive pipeline**: [`Dispatcher::admit_inbound`] after decryption

use crate::error::CodecError;
use crate::message::CspMessage;
use crate::replay::ReplayGuard;
use csp_types::{
    CspMessageType, EnvelopeFlags, ForwardSecuritySession, ForwardSecurityVersion, Identity,
    MessageTypeDescriptor, Nonce,
};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DispatchError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// Sender is blocked and the type does not bypass blocking
    #[error("Dropped {message_type} from blocked sender {sender}")]
    SenderBlocked {
        sender: Identity,
        message_type: CspMessageType,
    },

    /// Nonce was already used by an earlier message
    #[error("Replayed {message_type}: nonce {nonce} was already used")]
    ReplayDetected {
        message_type: CspMessageType,
        nonce: Nonce,
    },
}

pub type DispatchResult<T> = std::result::Result<T, DispatchError>;

/// Fail if `negotiated` is below the type's forward-secrecy minimum
///
/// Types without a minimum are never carried inside a forward-secrecy
/// session and always pass.
pub fn ensure_forward_security(
    message_type: CspMessageType,
    negotiated: ForwardSecurityVersion,
) -> Result<(), CodecError> {
    match message_type.descriptor().minimum_forward_security_version {
        Some(required) if negotiated < required => {
            Err(CodecError::UnsupportedForwardSecurityVersion {
                message_type,
                required,
                negotiated,
            })
        }
        _ => Ok(()),
    }
}

/// Per-message receive state supplied by the pipeline
#[derive(Clone, Copy)]
pub struct InboundContext<'a> {
    pub nonce: Nonce,
    /// Session the message arrived through, if it was FS-encapsulated
    pub session: Option<&'a dyn ForwardSecuritySession>,
    pub sender_blocked: bool,
}

impl<'a> InboundContext<'a> {
    pub fn new(nonce: Nonce) -> Self {
        Self {
            nonce,
            session: None,
            sender_blocked: false,
        }
    }

    pub fn with_session(mut self, session: &'a dyn ForwardSecuritySession) -> Self {
        self.session = Some(session);
        self
    }

    pub fn with_sender_blocked(mut self, blocked: bool) -> Self {
        self.sender_blocked = blocked;
        self
    }
}

/// Steps the receive pipeline runs for an admitted message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InboundPlan {
    pub message_type: CspMessageType,
    pub reflect_incoming: bool,
    pub send_delivery_receipt: bool,
    pub bump_last_update: bool,
    pub create_implicit_contact: bool,
}

/// Steps the send pipeline runs for an outgoing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutboundPlan {
    pub message_type: CspMessageType,
    pub envelope_flags: EnvelopeFlags,
    pub reflect_outgoing: bool,
    pub reflect_sent_update: bool,
    /// Nonce must be recorded so the message can never be accepted twice
    pub protect_nonce: bool,
    pub bump_last_update: bool,
    pub attach_user_profile: bool,
}

pub struct Dispatcher<G: ReplayGuard> {
    guard: G,
}

impl<G: ReplayGuard> Dispatcher<G> {
    pub fn new(guard: G) -> Self {
        Self { guard }
    }

    pub fn guard(&self) -> &G {
        &self.guard
    }

    /// Plan the sending of `message`, recording its nonce if protected
    pub fn plan_outbound(
        &self,
        message: &CspMessage,
        nonce: &Nonce,
        session: Option<&dyn ForwardSecuritySession>,
    ) -> DispatchResult<OutboundPlan> {
        let descriptor = message.descriptor();
        if let Some(session) = session {
            ensure_forward_security(descriptor.message_type, session.negotiated_version())?;
        }

        if descriptor.protects_against_replay && !self.guard.check_and_record(nonce) {
            warn!(message_type = %descriptor.message_type, %nonce, "refusing to reuse nonce");
            return Err(DispatchError::ReplayDetected {
                message_type: descriptor.message_type,
                nonce: *nonce,
            });
        }

        let plan = OutboundPlan {
            message_type: descriptor.message_type,
            envelope_flags: message.envelope_flags(),
            reflect_outgoing: descriptor.reflects_outgoing,
            reflect_sent_update: descriptor.reflects_sent_update,
            protect_nonce: descriptor.protects_against_replay,
            bump_last_update: descriptor.bumps_last_update,
            attach_user_profile: descriptor.allows_user_profile_distribution,
        };
        debug!(message_type = %plan.message_type, flags = %plan.envelope_flags, "planned outbound message");
        Ok(plan)
    }

    /// Admit a received message or reject it
    pub fn admit_inbound(
        &self,
        message: &CspMessage,
        context: &InboundContext<'_>,
    ) -> DispatchResult<InboundPlan> {
        let descriptor = message.descriptor();
        let message_type = descriptor.message_type;

        if let Some(session) = context.session {
            ensure_forward_security(message_type, session.negotiated_version()).map_err(|e| {
                warn!(%message_type, sender = %message.metadata.from, error = %e, "rejected by forward security gate");
                e
            })?;
        }

        if descriptor.protects_against_replay && !self.guard.check_and_record(&context.nonce) {
            warn!(%message_type, sender = %message.metadata.from, nonce = %context.nonce, "replay detected");
            return Err(DispatchError::ReplayDetected {
                message_type,
                nonce: context.nonce,
            });
        }

        if context.sender_blocked && !descriptor.exempt_from_blocking {
            debug!(%message_type, sender = %message.metadata.from, "dropped message from blocked sender");
            return Err(DispatchError::SenderBlocked {
                sender: message.metadata.from,
                message_type,
            });
        }

        Ok(inbound_plan(descriptor, message))
    }
}

fn inbound_plan(descriptor: &MessageTypeDescriptor, message: &CspMessage) -> InboundPlan {
    InboundPlan {
        message_type: descriptor.message_type,
        reflect_incoming: descriptor.reflects_incoming,
        send_delivery_receipt: message.expects_delivery_receipt(),
        bump_last_update: descriptor.bumps_last_update,
        create_implicit_contact: descriptor.creates_implicit_direct_contact,
    }
}
