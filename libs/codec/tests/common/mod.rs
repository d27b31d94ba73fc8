//! Shared fixtures for codec integration tests

#![allow(dead_code)]

use chrono::DateTime;
use csp_codec::{
    CallBody, CspMessage, DeliveryReceiptBody, FileBody, GroupNameBody,
    GroupSetProfilePictureBody, GroupSetupBody, Grouped, LegacyAudioBody, LegacyImageBody,
    LegacyVideoBody, LocationBody, MessageBody, MessageMetadata, OpaquePayload, PollSetupBody,
    PollVoteBody, PollVoteChoice, TextBody, TypingIndicatorBody,
};
use csp_types::{
    BallotId, BlobId, BlobKey, BlobReference, DeliveryReceiptStatus, EnvelopeFlags, GroupId,
    GroupReference, Identity, MessageId, Nonce,
};
use serde_json::{json, Map, Value};

pub fn identity(raw: &str) -> Identity {
    raw.parse().unwrap()
}

pub fn group() -> GroupReference {
    GroupReference::new(identity("ABCDEFGH"), GroupId::new([0u8; 16]))
}

pub fn blob() -> BlobReference {
    BlobReference::new(BlobId::new([0x01; 16]), 1024, BlobKey::new([0x02; 32]))
}

fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

fn ballot() -> PollSetupBody {
    PollSetupBody {
        ballot_id: BallotId::new([0x0b; 8]),
        definition: object(json!({
            "d": "Lunch?",
            "s": 0,
            "c": [{ "i": 0, "n": "Pizza" }, { "i": 1, "n": "Sushi" }]
        })),
    }
}

fn vote() -> PollVoteBody {
    PollVoteBody {
        ballot_creator: identity("ABCDEFGH"),
        ballot_id: BallotId::new([0x0b; 8]),
        votes: vec![PollVoteChoice(0, 1), PollVoteChoice(1, 0)],
    }
}

fn location() -> LocationBody {
    LocationBody::new(47.3769, 8.5417)
        .with_accuracy(15.0)
        .with_name("Zurich HB")
        .with_address("Bahnhofplatz\n8001 Zurich")
}

fn file() -> FileBody {
    FileBody::new(
        BlobId::new([0x05; 16]),
        BlobKey::new([0x06; 32]),
        "application/pdf",
        48_213,
    )
    .with_file_name("report.pdf")
    .with_caption("Q3 numbers")
}

fn video() -> LegacyVideoBody {
    LegacyVideoBody {
        duration_secs: 42,
        video_blob_id: BlobId::new([0x07; 16]),
        video_size: 2_000_000,
        thumbnail_blob_id: BlobId::new([0x08; 16]),
        thumbnail_size: 8_000,
        encryption_key: BlobKey::new([0x09; 32]),
    }
}

fn audio() -> LegacyAudioBody {
    LegacyAudioBody {
        duration_secs: 12,
        blob: blob(),
    }
}

fn call(extra: Value) -> CallBody {
    let mut payload = object(json!({ "callId": 42 }));
    payload.extend(object(extra));
    CallBody::new(payload)
}

fn receipt() -> DeliveryReceiptBody {
    DeliveryReceiptBody::new(
        DeliveryReceiptStatus::Read,
        vec![MessageId::new([1; 8]), MessageId::new([2; 8])],
    )
}

fn opaque(bytes: &[u8]) -> OpaquePayload {
    OpaquePayload::new(bytes.to_vec())
}

/// One representative body per registered message type
pub fn sample_bodies() -> Vec<MessageBody> {
    let g = group();
    vec![
        MessageBody::Text(TextBody::new("hello")),
        MessageBody::Image(LegacyImageBody {
            blob_id: BlobId::new([0x03; 16]),
            size: 52_000,
            nonce: Nonce::new([0x04; 24]),
        }),
        MessageBody::Location(location()),
        MessageBody::Video(video()),
        MessageBody::Audio(audio()),
        MessageBody::PollSetup(ballot()),
        MessageBody::PollVote(vote()),
        MessageBody::File(file()),
        MessageBody::ContactSetProfilePicture(blob()),
        MessageBody::ContactDeleteProfilePicture,
        MessageBody::ContactRequestProfilePicture,
        MessageBody::GroupText(Grouped::new(g, TextBody::new("hi all"))),
        MessageBody::GroupLocation(Grouped::new(g, location())),
        MessageBody::GroupImage(Grouped::new(g, blob())),
        MessageBody::GroupVideo(Grouped::new(g, video())),
        MessageBody::GroupAudio(Grouped::new(g, audio())),
        MessageBody::GroupFile(Grouped::new(g, file())),
        MessageBody::GroupSetup(GroupSetupBody {
            group_id: g.group_id,
            members: vec![identity("MEMBER01"), identity("MEMBER02")],
        }),
        MessageBody::GroupName(GroupNameBody {
            group_id: g.group_id,
            name: "Climbing".to_string(),
        }),
        MessageBody::GroupLeave(g),
        MessageBody::GroupJoinRequest(opaque(b"join-request")),
        MessageBody::GroupJoinResponse(opaque(b"join-response")),
        MessageBody::GroupCallStart(Grouped::new(g, opaque(b"call-start"))),
        MessageBody::GroupSetProfilePicture(GroupSetProfilePictureBody {
            group_id: g.group_id,
            picture: blob(),
        }),
        MessageBody::GroupSyncRequest(g),
        MessageBody::GroupPollSetup(Grouped::new(g, ballot())),
        MessageBody::GroupPollVote(Grouped::new(g, vote())),
        MessageBody::GroupDeleteProfilePicture(g.group_id),
        MessageBody::CallOffer(call(json!({ "offer": { "sdpType": "offer", "sdp": "v=0" } }))),
        MessageBody::CallAnswer(call(json!({ "action": 1 }))),
        MessageBody::CallIceCandidate(call(json!({ "candidates": [] }))),
        MessageBody::CallHangup(call(json!({}))),
        MessageBody::CallRinging(call(json!({}))),
        MessageBody::DeliveryReceipt(receipt()),
        MessageBody::GroupDeliveryReceipt(Grouped::new(g, receipt())),
        MessageBody::Reaction(opaque(b"reaction")),
        MessageBody::GroupReaction(Grouped::new(g, opaque(b"reaction"))),
        MessageBody::TypingIndicator(TypingIndicatorBody { is_typing: true }),
        MessageBody::EditMessage(opaque(b"edit")),
        MessageBody::DeleteMessage(opaque(b"delete")),
        MessageBody::GroupEditMessage(Grouped::new(g, opaque(b"edit"))),
        MessageBody::GroupDeleteMessage(Grouped::new(g, opaque(b"delete"))),
        MessageBody::ForwardSecurityEnvelope(opaque(b"fs-envelope")),
        MessageBody::Empty,
        MessageBody::WebSessionResume(opaque(b"resume")),
        MessageBody::AuthToken(opaque(b"token")),
    ]
}

pub fn message(from: &str, body: MessageBody) -> CspMessage {
    CspMessage::new(
        MessageMetadata {
            from: identity(from),
            to: identity("RECEIVER"),
            message_id: MessageId::new([0x2a; 8]),
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            extra_flags: EnvelopeFlags::NONE,
        },
        body,
    )
}
