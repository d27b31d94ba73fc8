//! Flag dispatch integration tests
//!
//! Every plan is a pure function of the descriptor plus caller state, so the
//! same message type must always produce the same plan.

mod common;

use common::{group, message, sample_bodies};
use csp_codec::{
    ensure_forward_security, CodecError, DispatchError, Dispatcher, Grouped, InMemoryReplayGuard,
    InboundContext, MessageBody, ReplayGuard, TextBody,
};
use csp_types::{
    CspMessageType, EnvelopeFlags, ForwardSecuritySession, ForwardSecurityVersion, Nonce,
};

struct Session(ForwardSecurityVersion);

impl ForwardSecuritySession for Session {
    fn negotiated_version(&self) -> ForwardSecurityVersion {
        self.0
    }
}

fn nonce(seed: u8) -> Nonce {
    Nonce::new([seed; 24])
}

#[test]
fn test_outbound_plan_is_deterministic_per_type() {
    for body in sample_bodies() {
        let msg = message("SENDER01", body);
        let first = Dispatcher::new(InMemoryReplayGuard::new(4))
            .plan_outbound(&msg, &nonce(1), None)
            .unwrap();
        let second = Dispatcher::new(InMemoryReplayGuard::new(4))
            .plan_outbound(&msg, &nonce(2), None)
            .unwrap();

        assert_eq!(first.envelope_flags, second.envelope_flags);
        assert_eq!(first.reflect_outgoing, second.reflect_outgoing);
        assert_eq!(first.attach_user_profile, second.attach_user_profile);

        let descriptor = msg.descriptor();
        assert_eq!(first.protect_nonce, descriptor.protects_against_replay);
        assert_eq!(
            first.envelope_flags.contains(EnvelopeFlags::SEND_PUSH),
            descriptor.sends_push
        );
        assert_eq!(
            first.envelope_flags.contains(EnvelopeFlags::GROUP),
            descriptor.is_group()
        );
    }
}

#[test]
fn test_replay_protected_types_never_leave_unprotected() {
    let dispatcher = Dispatcher::new(InMemoryReplayGuard::new(128));
    for (seed, body) in sample_bodies().into_iter().enumerate() {
        let msg = message("SENDER01", body);
        let n = nonce(seed as u8);
        let plan = dispatcher.plan_outbound(&msg, &n, None).unwrap();
        if msg.descriptor().protects_against_replay {
            assert!(plan.protect_nonce);
            assert!(dispatcher.guard().contains(&n));
        } else {
            assert!(!plan.protect_nonce);
        }
    }
}

#[test]
fn test_forward_security_gate_on_every_type() {
    for message_type in CspMessageType::ALL {
        let minimum = message_type.descriptor().minimum_forward_security_version;
        for negotiated in [
            ForwardSecurityVersion::V1_0,
            ForwardSecurityVersion::V1_1,
            ForwardSecurityVersion::V1_2,
        ] {
            let result = ensure_forward_security(message_type, negotiated);
            match minimum {
                Some(required) if negotiated < required => assert_eq!(
                    result,
                    Err(CodecError::UnsupportedForwardSecurityVersion {
                        message_type,
                        required,
                        negotiated,
                    })
                ),
                _ => assert!(result.is_ok(), "{} rejected at {}", message_type, negotiated),
            }
        }
    }
}

#[test]
fn test_group_text_needs_v1_2_session() {
    let dispatcher = Dispatcher::new(InMemoryReplayGuard::new(16));
    let msg = message(
        "SENDER01",
        MessageBody::GroupText(Grouped::new(group(), TextBody::new("hi"))),
    );

    let old = Session(ForwardSecurityVersion::V1_1);
    let context = InboundContext::new(nonce(1)).with_session(&old);
    assert!(matches!(
        dispatcher.admit_inbound(&msg, &context),
        Err(DispatchError::Codec(
            CodecError::UnsupportedForwardSecurityVersion { .. }
        ))
    ));
    // Rejected before the replay check
    assert!(!dispatcher.guard().contains(&nonce(1)));

    let current = Session(ForwardSecurityVersion::V1_2);
    let context = InboundContext::new(nonce(1)).with_session(&current);
    let plan = dispatcher.admit_inbound(&msg, &context).unwrap();
    assert_eq!(plan.message_type, CspMessageType::GroupText);
    assert!(!plan.send_delivery_receipt);
}

#[test]
fn test_exempt_types_pass_blocking() {
    let dispatcher = Dispatcher::new(InMemoryReplayGuard::new(128));
    for (seed, body) in sample_bodies().into_iter().enumerate() {
        let msg = message("SENDER01", body);
        let context = InboundContext::new(nonce(seed as u8)).with_sender_blocked(true);
        let result = dispatcher.admit_inbound(&msg, &context);
        if msg.descriptor().exempt_from_blocking {
            assert!(result.is_ok(), "{} should bypass blocking", msg.message_type());
        } else {
            assert!(matches!(result, Err(DispatchError::SenderBlocked { .. })));
        }
    }
}

#[test]
fn test_inbound_replay_detected() {
    let dispatcher = Dispatcher::new(InMemoryReplayGuard::new(16));
    let msg = message("SENDER01", MessageBody::Text(TextBody::new("once")));
    let context = InboundContext::new(nonce(9));

    let plan = dispatcher.admit_inbound(&msg, &context).unwrap();
    assert!(plan.send_delivery_receipt);
    assert!(plan.create_implicit_contact);

    let err = dispatcher.admit_inbound(&msg, &context).unwrap_err();
    assert_eq!(
        err,
        DispatchError::ReplayDetected {
            message_type: CspMessageType::Text,
            nonce: nonce(9),
        }
    );
}

#[test]
fn test_blocked_message_stays_replay_after_unblock() {
    let dispatcher = Dispatcher::new(InMemoryReplayGuard::new(16));
    let msg = message("SENDER01", MessageBody::Text(TextBody::new("while blocked")));

    let blocked = InboundContext::new(nonce(12)).with_sender_blocked(true);
    assert!(matches!(
        dispatcher.admit_inbound(&msg, &blocked),
        Err(DispatchError::SenderBlocked { .. })
    ));
    assert!(dispatcher.guard().contains(&nonce(12)));

    let unblocked = InboundContext::new(nonce(12));
    assert!(matches!(
        dispatcher.admit_inbound(&msg, &unblocked),
        Err(DispatchError::ReplayDetected { .. })
    ));
}

#[test]
fn test_no_delivery_receipts_override() {
    let mut msg = message("SENDER01", MessageBody::Text(TextBody::new("quiet")));
    msg.metadata.extra_flags = EnvelopeFlags::NO_DELIVERY_RECEIPTS;

    let dispatcher = Dispatcher::new(InMemoryReplayGuard::new(16));
    let outbound = dispatcher.plan_outbound(&msg, &nonce(1), None).unwrap();
    assert!(outbound.envelope_flags.contains(EnvelopeFlags::NO_DELIVERY_RECEIPTS));
    assert!(outbound.envelope_flags.contains(EnvelopeFlags::SEND_PUSH));

    let inbound = dispatcher
        .admit_inbound(&msg, &InboundContext::new(nonce(2)))
        .unwrap();
    assert!(!inbound.send_delivery_receipt);
}
