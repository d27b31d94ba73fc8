//! Message type catalog
//!
//! ## Purpose
//!
//! The single table mapping every registered [`CspMessageType`] to its
//! [`MessageTypeDescriptor`]. Pipelines read flags from here; nothing computes
//! them per message.
//!
//! Rows are built from a handful of family templates (direct content, group
//! content, group control, message update, control) and then override only
//! what differs, so the table reads as a list of deviations.
//!
//! ## Integration Points
//!
//! - [`descriptor`] resolves a raw wire code, failing for unregistered codes
//! - [`descriptor_of`] resolves an already-typed code and cannot fail
//! - [`render_markdown_table`] prints the whole table for protocol audits

use crate::protocol::constants::{
    BALLOT_ID_LEN, BLOB_ID_LEN, BLOB_KEY_LEN, BLOB_REFERENCE_LEN, BLOB_SIZE_LEN, GROUP_ID_LEN,
    GROUP_REFERENCE_LEN, IDENTITY_LEN, MAX_MESSAGE_LEN, MEDIA_DURATION_LEN, MESSAGE_ID_LEN,
    NONCE_LEN,
};
use crate::protocol::descriptor::{
    BodySize, ConversationScope, Deprecation, MessageLifetime, MessageTypeDescriptor,
};
use crate::protocol::forward_security::ForwardSecurityVersion::{self, V1_0, V1_1, V1_2};
use crate::protocol::message_type::CspMessageType::{self, *};
use crate::ValidationError;

const fn at_least(min: usize) -> BodySize {
    BodySize::Bounded {
        min,
        max: MAX_MESSAGE_LEN,
    }
}

const fn deprecated_for(replacement: Option<CspMessageType>) -> Option<Deprecation> {
    Some(Deprecation { replacement })
}

/// User-visible 1:1 content
const fn direct_content(
    message_type: CspMessageType,
    name: &'static str,
    body_size: BodySize,
) -> MessageTypeDescriptor {
    MessageTypeDescriptor {
        message_type,
        name,
        scope: ConversationScope::Direct,
        lifetime: MessageLifetime::Indefinite,
        body_size,
        sends_push: true,
        protects_against_replay: true,
        reflects_incoming: true,
        reflects_outgoing: true,
        reflects_sent_update: true,
        sends_automatic_delivery_receipt: true,
        bumps_last_update: true,
        exempt_from_blocking: false,
        creates_implicit_direct_contact: true,
        allows_user_profile_distribution: true,
        minimum_forward_security_version: Some(V1_0),
        deprecated: None,
    }
}

/// User-visible group content; groups never send automatic receipts
const fn group_content(
    message_type: CspMessageType,
    name: &'static str,
    body_size: BodySize,
) -> MessageTypeDescriptor {
    MessageTypeDescriptor {
        scope: ConversationScope::Group,
        sends_automatic_delivery_receipt: false,
        creates_implicit_direct_contact: false,
        minimum_forward_security_version: Some(V1_2),
        ..direct_content(message_type, name, body_size)
    }
}

/// Group membership and metadata control
const fn group_control(
    message_type: CspMessageType,
    name: &'static str,
    body_size: BodySize,
) -> MessageTypeDescriptor {
    MessageTypeDescriptor {
        sends_push: false,
        reflects_sent_update: false,
        bumps_last_update: false,
        exempt_from_blocking: true,
        allows_user_profile_distribution: false,
        ..group_content(message_type, name, body_size)
    }
}

/// Updates to earlier messages: receipts, reactions, edits, deletes
const fn message_update(
    message_type: CspMessageType,
    name: &'static str,
    body_size: BodySize,
) -> MessageTypeDescriptor {
    MessageTypeDescriptor {
        reflects_sent_update: false,
        sends_automatic_delivery_receipt: false,
        bumps_last_update: false,
        creates_implicit_direct_contact: false,
        minimum_forward_security_version: Some(V1_1),
        ..direct_content(message_type, name, body_size)
    }
}

/// Protocol control without user-visible effect
const fn control(
    message_type: CspMessageType,
    name: &'static str,
    body_size: BodySize,
) -> MessageTypeDescriptor {
    MessageTypeDescriptor {
        message_type,
        name,
        scope: ConversationScope::Direct,
        lifetime: MessageLifetime::Indefinite,
        body_size,
        sends_push: false,
        protects_against_replay: true,
        reflects_incoming: false,
        reflects_outgoing: false,
        reflects_sent_update: false,
        sends_automatic_delivery_receipt: false,
        bumps_last_update: false,
        exempt_from_blocking: false,
        creates_implicit_direct_contact: false,
        allows_user_profile_distribution: false,
        minimum_forward_security_version: None,
        deprecated: None,
    }
}

const LEGACY_VIDEO_LEN: usize =
    MEDIA_DURATION_LEN + 2 * (BLOB_ID_LEN + BLOB_SIZE_LEN) + BLOB_KEY_LEN;
const LEGACY_AUDIO_LEN: usize = MEDIA_DURATION_LEN + BLOB_REFERENCE_LEN;
const LEGACY_IMAGE_LEN: usize = BLOB_ID_LEN + BLOB_SIZE_LEN + NONCE_LEN;
const POLL_SETUP_MIN: usize = BALLOT_ID_LEN + 2;
const POLL_VOTE_MIN: usize = IDENTITY_LEN + BALLOT_ID_LEN + 2;
const RECEIPT_MIN: usize = 1 + MESSAGE_ID_LEN;

// Direct content
static TEXT: MessageTypeDescriptor = direct_content(Text, "text", at_least(1));
static IMAGE: MessageTypeDescriptor = MessageTypeDescriptor {
    deprecated: deprecated_for(Some(File)),
    ..direct_content(Image, "image", BodySize::Fixed(LEGACY_IMAGE_LEN))
};
static LOCATION: MessageTypeDescriptor = direct_content(Location, "location", at_least(3));
static VIDEO: MessageTypeDescriptor = MessageTypeDescriptor {
    deprecated: deprecated_for(Some(File)),
    ..direct_content(Video, "video", BodySize::Fixed(LEGACY_VIDEO_LEN))
};
static AUDIO: MessageTypeDescriptor = MessageTypeDescriptor {
    deprecated: deprecated_for(Some(File)),
    ..direct_content(Audio, "audio", BodySize::Fixed(LEGACY_AUDIO_LEN))
};
static POLL_SETUP: MessageTypeDescriptor =
    direct_content(PollSetup, "poll-setup", at_least(POLL_SETUP_MIN));
static POLL_VOTE: MessageTypeDescriptor = MessageTypeDescriptor {
    reflects_sent_update: false,
    sends_automatic_delivery_receipt: false,
    bumps_last_update: false,
    ..direct_content(PollVote, "poll-vote", at_least(POLL_VOTE_MIN))
};
static FILE: MessageTypeDescriptor = direct_content(File, "file", at_least(2));
static CONTACT_SET_PROFILE_PICTURE: MessageTypeDescriptor = MessageTypeDescriptor {
    reflects_incoming: true,
    reflects_outgoing: true,
    minimum_forward_security_version: Some(V1_0),
    ..control(
        ContactSetProfilePicture,
        "contact-set-profile-picture",
        BodySize::Fixed(BLOB_REFERENCE_LEN),
    )
};
static CONTACT_DELETE_PROFILE_PICTURE: MessageTypeDescriptor = MessageTypeDescriptor {
    reflects_incoming: true,
    reflects_outgoing: true,
    minimum_forward_security_version: Some(V1_0),
    ..control(
        ContactDeleteProfilePicture,
        "contact-delete-profile-picture",
        BodySize::Fixed(0),
    )
};
static CONTACT_REQUEST_PROFILE_PICTURE: MessageTypeDescriptor = MessageTypeDescriptor {
    minimum_forward_security_version: Some(V1_0),
    ..control(
        ContactRequestProfilePicture,
        "contact-request-profile-picture",
        BodySize::Fixed(0),
    )
};

// Group content
static GROUP_TEXT: MessageTypeDescriptor =
    group_content(GroupText, "group-text", at_least(GROUP_REFERENCE_LEN + 1));
static GROUP_LOCATION: MessageTypeDescriptor =
    group_content(GroupLocation, "group-location", at_least(GROUP_REFERENCE_LEN + 3));
static GROUP_IMAGE: MessageTypeDescriptor = MessageTypeDescriptor {
    deprecated: deprecated_for(Some(GroupFile)),
    ..group_content(
        GroupImage,
        "group-image",
        BodySize::Fixed(GROUP_REFERENCE_LEN + BLOB_REFERENCE_LEN),
    )
};
static GROUP_VIDEO: MessageTypeDescriptor = MessageTypeDescriptor {
    deprecated: deprecated_for(Some(GroupFile)),
    ..group_content(
        GroupVideo,
        "group-video",
        BodySize::Fixed(GROUP_REFERENCE_LEN + LEGACY_VIDEO_LEN),
    )
};
static GROUP_AUDIO: MessageTypeDescriptor = MessageTypeDescriptor {
    deprecated: deprecated_for(Some(GroupFile)),
    ..group_content(
        GroupAudio,
        "group-audio",
        BodySize::Fixed(GROUP_REFERENCE_LEN + LEGACY_AUDIO_LEN),
    )
};
static GROUP_FILE: MessageTypeDescriptor =
    group_content(GroupFile, "group-file", at_least(GROUP_REFERENCE_LEN + 2));
static GROUP_POLL_SETUP: MessageTypeDescriptor = group_content(
    GroupPollSetup,
    "group-poll-setup",
    at_least(GROUP_REFERENCE_LEN + POLL_SETUP_MIN),
);
static GROUP_POLL_VOTE: MessageTypeDescriptor = MessageTypeDescriptor {
    reflects_sent_update: false,
    bumps_last_update: false,
    ..group_content(
        GroupPollVote,
        "group-poll-vote",
        at_least(GROUP_REFERENCE_LEN + POLL_VOTE_MIN),
    )
};
static GROUP_CALL_START: MessageTypeDescriptor = MessageTypeDescriptor {
    reflects_sent_update: false,
    ..group_content(
        GroupCallStart,
        "group-call-start",
        at_least(GROUP_REFERENCE_LEN + 1),
    )
};

// Group control. Creator-sent control carries only the group id.
static GROUP_SETUP: MessageTypeDescriptor = MessageTypeDescriptor {
    sends_push: true,
    ..group_control(GroupSetup, "group-setup", at_least(GROUP_ID_LEN))
};
static GROUP_NAME: MessageTypeDescriptor =
    group_control(GroupName, "group-name", at_least(GROUP_ID_LEN));
static GROUP_LEAVE: MessageTypeDescriptor =
    group_control(GroupLeave, "group-leave", BodySize::Fixed(GROUP_REFERENCE_LEN));
static GROUP_JOIN_REQUEST: MessageTypeDescriptor = MessageTypeDescriptor {
    sends_push: true,
    exempt_from_blocking: false,
    minimum_forward_security_version: None,
    deprecated: deprecated_for(None),
    ..group_control(GroupJoinRequest, "group-join-request", at_least(1))
};
static GROUP_JOIN_RESPONSE: MessageTypeDescriptor = MessageTypeDescriptor {
    exempt_from_blocking: false,
    minimum_forward_security_version: None,
    deprecated: deprecated_for(None),
    ..group_control(GroupJoinResponse, "group-join-response", at_least(1))
};
static GROUP_SET_PROFILE_PICTURE: MessageTypeDescriptor = group_control(
    GroupSetProfilePicture,
    "group-set-profile-picture",
    BodySize::Fixed(GROUP_ID_LEN + BLOB_REFERENCE_LEN),
);
static GROUP_SYNC_REQUEST: MessageTypeDescriptor = MessageTypeDescriptor {
    reflects_incoming: false,
    reflects_outgoing: false,
    ..group_control(
        GroupSyncRequest,
        "group-sync-request",
        BodySize::Fixed(GROUP_REFERENCE_LEN),
    )
};
static GROUP_DELETE_PROFILE_PICTURE: MessageTypeDescriptor = group_control(
    GroupDeleteProfilePicture,
    "group-delete-profile-picture",
    BodySize::Fixed(GROUP_ID_LEN),
);

// Calls
static CALL_OFFER: MessageTypeDescriptor = MessageTypeDescriptor {
    lifetime: MessageLifetime::Brief,
    ..message_update(CallOffer, "call-offer", at_least(2))
};
static CALL_ANSWER: MessageTypeDescriptor = MessageTypeDescriptor {
    lifetime: MessageLifetime::Brief,
    ..message_update(CallAnswer, "call-answer", at_least(2))
};
static CALL_ICE_CANDIDATE: MessageTypeDescriptor = MessageTypeDescriptor {
    sends_push: false,
    lifetime: MessageLifetime::Brief,
    reflects_incoming: false,
    reflects_outgoing: false,
    ..message_update(CallIceCandidate, "call-ice-candidate", at_least(2))
};
static CALL_HANGUP: MessageTypeDescriptor = MessageTypeDescriptor {
    lifetime: MessageLifetime::Brief,
    ..message_update(CallHangup, "call-hangup", at_least(2))
};
static CALL_RINGING: MessageTypeDescriptor = MessageTypeDescriptor {
    sends_push: false,
    lifetime: MessageLifetime::Brief,
    ..message_update(CallRinging, "call-ringing", at_least(2))
};

// Receipts and message updates
static DELIVERY_RECEIPT: MessageTypeDescriptor = MessageTypeDescriptor {
    sends_push: false,
    allows_user_profile_distribution: false,
    minimum_forward_security_version: Some(V1_0),
    ..message_update(DeliveryReceipt, "delivery-receipt", at_least(RECEIPT_MIN))
};
static GROUP_DELIVERY_RECEIPT: MessageTypeDescriptor = MessageTypeDescriptor {
    sends_push: false,
    scope: ConversationScope::Group,
    allows_user_profile_distribution: false,
    minimum_forward_security_version: Some(V1_2),
    ..message_update(
        GroupDeliveryReceipt,
        "group-delivery-receipt",
        at_least(GROUP_REFERENCE_LEN + RECEIPT_MIN),
    )
};
static REACTION: MessageTypeDescriptor = message_update(Reaction, "reaction", at_least(1));
static GROUP_REACTION: MessageTypeDescriptor = MessageTypeDescriptor {
    scope: ConversationScope::Group,
    minimum_forward_security_version: Some(V1_2),
    ..message_update(GroupReaction, "group-reaction", at_least(GROUP_REFERENCE_LEN + 1))
};
static TYPING_INDICATOR: MessageTypeDescriptor = MessageTypeDescriptor {
    lifetime: MessageLifetime::Ephemeral,
    protects_against_replay: false,
    minimum_forward_security_version: Some(V1_0),
    ..control(TypingIndicator, "typing-indicator", BodySize::Fixed(1))
};
static EDIT_MESSAGE: MessageTypeDescriptor =
    message_update(EditMessage, "edit-message", at_least(1));
static DELETE_MESSAGE: MessageTypeDescriptor =
    message_update(DeleteMessage, "delete-message", at_least(1));
static GROUP_EDIT_MESSAGE: MessageTypeDescriptor = MessageTypeDescriptor {
    scope: ConversationScope::Group,
    minimum_forward_security_version: Some(V1_2),
    ..message_update(
        GroupEditMessage,
        "group-edit-message",
        at_least(GROUP_REFERENCE_LEN + 1),
    )
};
static GROUP_DELETE_MESSAGE: MessageTypeDescriptor = MessageTypeDescriptor {
    scope: ConversationScope::Group,
    minimum_forward_security_version: Some(V1_2),
    ..message_update(
        GroupDeleteMessage,
        "group-delete-message",
        at_least(GROUP_REFERENCE_LEN + 1),
    )
};

// Forward secrecy and control
static FORWARD_SECURITY_ENVELOPE: MessageTypeDescriptor = MessageTypeDescriptor {
    sends_push: true,
    exempt_from_blocking: true,
    ..control(ForwardSecurityEnvelope, "forward-security-envelope", at_least(1))
};
static EMPTY: MessageTypeDescriptor = MessageTypeDescriptor {
    exempt_from_blocking: true,
    minimum_forward_security_version: Some(V1_1),
    ..control(Empty, "empty", BodySize::Fixed(0))
};
static WEB_SESSION_RESUME: MessageTypeDescriptor = MessageTypeDescriptor {
    lifetime: MessageLifetime::Ephemeral,
    exempt_from_blocking: true,
    ..control(WebSessionResume, "web-session-resume", at_least(1))
};
static AUTH_TOKEN: MessageTypeDescriptor = MessageTypeDescriptor {
    lifetime: MessageLifetime::Ephemeral,
    exempt_from_blocking: true,
    ..control(AuthToken, "auth-token", at_least(1))
};

/// Descriptor of an already-typed code
pub fn descriptor_of(message_type: CspMessageType) -> &'static MessageTypeDescriptor {
    match message_type {
        Text => &TEXT,
        Image => &IMAGE,
        Location => &LOCATION,
        Video => &VIDEO,
        Audio => &AUDIO,
        PollSetup => &POLL_SETUP,
        PollVote => &POLL_VOTE,
        File => &FILE,
        ContactSetProfilePicture => &CONTACT_SET_PROFILE_PICTURE,
        ContactDeleteProfilePicture => &CONTACT_DELETE_PROFILE_PICTURE,
        ContactRequestProfilePicture => &CONTACT_REQUEST_PROFILE_PICTURE,
        GroupText => &GROUP_TEXT,
        GroupLocation => &GROUP_LOCATION,
        GroupImage => &GROUP_IMAGE,
        GroupVideo => &GROUP_VIDEO,
        GroupAudio => &GROUP_AUDIO,
        GroupFile => &GROUP_FILE,
        GroupSetup => &GROUP_SETUP,
        GroupName => &GROUP_NAME,
        GroupLeave => &GROUP_LEAVE,
        GroupJoinRequest => &GROUP_JOIN_REQUEST,
        GroupJoinResponse => &GROUP_JOIN_RESPONSE,
        GroupCallStart => &GROUP_CALL_START,
        GroupSetProfilePicture => &GROUP_SET_PROFILE_PICTURE,
        GroupSyncRequest => &GROUP_SYNC_REQUEST,
        GroupPollSetup => &GROUP_POLL_SETUP,
        GroupPollVote => &GROUP_POLL_VOTE,
        GroupDeleteProfilePicture => &GROUP_DELETE_PROFILE_PICTURE,
        CallOffer => &CALL_OFFER,
        CallAnswer => &CALL_ANSWER,
        CallIceCandidate => &CALL_ICE_CANDIDATE,
        CallHangup => &CALL_HANGUP,
        CallRinging => &CALL_RINGING,
        DeliveryReceipt => &DELIVERY_RECEIPT,
        GroupDeliveryReceipt => &GROUP_DELIVERY_RECEIPT,
        Reaction => &REACTION,
        GroupReaction => &GROUP_REACTION,
        TypingIndicator => &TYPING_INDICATOR,
        EditMessage => &EDIT_MESSAGE,
        DeleteMessage => &DELETE_MESSAGE,
        GroupEditMessage => &GROUP_EDIT_MESSAGE,
        GroupDeleteMessage => &GROUP_DELETE_MESSAGE,
        ForwardSecurityEnvelope => &FORWARD_SECURITY_ENVELOPE,
        Empty => &EMPTY,
        WebSessionResume => &WEB_SESSION_RESUME,
        AuthToken => &AUTH_TOKEN,
    }
}

/// Descriptor for a raw wire code
pub fn descriptor(code: u8) -> Result<&'static MessageTypeDescriptor, ValidationError> {
    CspMessageType::from_code(code).map(descriptor_of)
}

/// All descriptors in ascending code order
pub fn descriptors() -> impl Iterator<Item = &'static MessageTypeDescriptor> {
    CspMessageType::ALL.iter().map(|t| descriptor_of(*t))
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

fn fs_label(version: Option<ForwardSecurityVersion>) -> String {
    version.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Whole catalog as a Markdown table, one row per code
pub fn render_markdown_table() -> String {
    let mut out = String::from(
        "| Code | Name | Scope | Lifetime | Body | Push | Replay | Reflect In | Reflect Out \
         | Sent Update | Receipt | Bump | Block Exempt | Implicit Contact | Profile \
         | Min FS | Deprecated |\n",
    );
    out.push_str(
        "|------|------|-------|----------|------|------|--------|------------|-------------\
         |-------------|---------|------|--------------|------------------|---------\
         |--------|------------|\n",
    );

    for d in descriptors() {
        let deprecated = match d.deprecated {
            None => "no".to_string(),
            Some(Deprecation { replacement: None }) => "yes".to_string(),
            Some(Deprecation {
                replacement: Some(replacement),
            }) => format!("yes, use {}", descriptor_of(replacement).name),
        };

        out.push_str(&format!(
            "| {:#04x} | {} | {:?} | {:?} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
            d.code(),
            d.name,
            d.scope,
            d.lifetime,
            d.body_size,
            yes_no(d.sends_push),
            yes_no(d.protects_against_replay),
            yes_no(d.reflects_incoming),
            yes_no(d.reflects_outgoing),
            yes_no(d.reflects_sent_update),
            yes_no(d.sends_automatic_delivery_receipt),
            yes_no(d.bumps_last_update),
            yes_no(d.exempt_from_blocking),
            yes_no(d.creates_implicit_direct_contact),
            yes_no(d.allows_user_profile_distribution),
            fs_label(d.minimum_forward_security_version),
            deprecated,
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_own_row() {
        for message_type in CspMessageType::ALL {
            assert_eq!(descriptor_of(message_type).message_type, message_type);
        }
        assert_eq!(descriptors().count(), CspMessageType::ALL.len());
    }

    #[test]
    fn test_names_are_unique() {
        let mut names: Vec<&str> = descriptors().map(|d| d.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CspMessageType::ALL.len());
    }

    #[test]
    fn test_unknown_code() {
        assert_eq!(
            descriptor(0x03),
            Err(ValidationError::UnknownMessageType { code: 0x03 })
        );
    }

    #[test]
    fn test_text_sets_every_flag() {
        let text = descriptor(0x01).unwrap();
        assert!(text.sends_push);
        assert!(text.protects_against_replay);
        assert!(text.reflects_incoming && text.reflects_outgoing && text.reflects_sent_update);
        assert!(text.sends_automatic_delivery_receipt);
        assert!(text.bumps_last_update);
        assert!(text.creates_implicit_direct_contact);
        assert!(text.allows_user_profile_distribution);
        assert!(!text.exempt_from_blocking);
        assert_eq!(text.lifetime, MessageLifetime::Indefinite);
    }

    #[test]
    fn test_group_image_flags() {
        let d = descriptor_of(GroupImage);
        assert!(d.sends_push);
        assert!(d.protects_against_replay);
        assert!(d.reflects_incoming && d.reflects_outgoing && d.reflects_sent_update);
        assert!(d.bumps_last_update);
        assert!(d.allows_user_profile_distribution);
        assert!(!d.sends_automatic_delivery_receipt);
        assert!(!d.exempt_from_blocking);
        assert!(!d.creates_implicit_direct_contact);
        assert_eq!(d.minimum_forward_security_version, Some(V1_2));
        assert_eq!(d.body_size, BodySize::Fixed(76));
        assert_eq!(d.replacement(), Some(GroupFile));
    }

    #[test]
    fn test_reaction_flags() {
        let d = descriptor_of(Reaction);
        assert!(d.sends_push);
        assert!(d.reflects_incoming && d.reflects_outgoing);
        assert!(!d.reflects_sent_update);
        assert!(!d.sends_automatic_delivery_receipt);
        assert!(!d.bumps_last_update);
        assert!(!d.creates_implicit_direct_contact);
        assert_eq!(d.minimum_forward_security_version, Some(V1_1));
    }

    #[test]
    fn test_web_session_resume_flags() {
        let d = descriptor_of(WebSessionResume);
        assert_eq!(d.lifetime, MessageLifetime::Ephemeral);
        assert!(d.exempt_from_blocking);
        assert!(d.protects_against_replay);
        assert!(!d.sends_push);
        assert!(!d.reflects_incoming && !d.reflects_outgoing && !d.reflects_sent_update);
        assert!(!d.allows_user_profile_distribution);
    }

    #[test]
    fn test_group_scope_matches_fs_lattice() {
        // Group support arrived with forward security 1.2
        for d in descriptors().filter(|d| d.is_group() && !d.is_deprecated()) {
            assert_eq!(d.minimum_forward_security_version, Some(V1_2), "{}", d.name);
        }
    }

    #[test]
    fn test_markdown_table_lists_every_code() {
        let table = render_markdown_table();
        assert_eq!(table.lines().count(), CspMessageType::ALL.len() + 2);
        assert!(table.contains("| 0x43 | group-image | Group |"));
        assert!(table.contains("yes, use group-file"));
    }
}
