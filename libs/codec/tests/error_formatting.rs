//! Error messages carry enough context to diagnose a bad peer

use csp_codec::{decode_body, CodecError, DispatchError, OpaquePayload};
use csp_types::{CspMessageType, ForwardSecurityVersion, Nonce};

#[test]
fn test_unknown_type_shows_hex_code() {
    let err = CodecError::UnknownMessageType { code: 0x03 };
    assert_eq!(
        err.to_string(),
        "Unknown message type 0x03: not registered in the message type catalog"
    );
    assert_eq!(err.kind(), "unknown_message_type");
}

#[test]
fn test_malformed_body_names_type_and_offset() {
    let err = decode_body(CspMessageType::GroupImage, &[0u8; 75]).unwrap_err();
    let text = err.to_string();
    assert!(text.contains("group-image (0x43)"), "{text}");
    assert!(text.contains("offset 0"), "{text}");
    assert!(text.contains("75 bytes"), "{text}");
    assert_eq!(err.kind(), "malformed_body");
}

#[test]
fn test_incomplete_names_field() {
    let err = CodecError::incomplete("blob reference", "encryption_key");
    assert_eq!(
        err.to_string(),
        "Incomplete blob reference: required field 'encryption_key' is not set"
    );
}

#[test]
fn test_forward_security_versions_printed() {
    let err = CodecError::UnsupportedForwardSecurityVersion {
        message_type: CspMessageType::GroupText,
        required: ForwardSecurityVersion::V1_2,
        negotiated: ForwardSecurityVersion::V1_0,
    };
    let text = err.to_string();
    assert!(text.contains("1.0"), "{text}");
    assert!(text.contains("1.2"), "{text}");
    assert!(text.contains("group-text"), "{text}");
}

#[test]
fn test_dispatch_error_wraps_codec_error_transparently() {
    let codec = CodecError::payload_too_large(CspMessageType::Text, 7000, 6000);
    let wrapped = DispatchError::from(codec.clone());
    assert_eq!(wrapped.to_string(), codec.to_string());

    let replay = DispatchError::ReplayDetected {
        message_type: CspMessageType::Text,
        nonce: Nonce::new([0xab; 24]),
    };
    assert!(replay.to_string().contains(&"ab".repeat(24)));
}

#[test]
fn test_empty_opaque_payload_is_incomplete() {
    let err = csp_codec::encode_body(&csp_codec::MessageBody::Reaction(OpaquePayload::new(
        Vec::new(),
    )))
    .unwrap_err();
    assert_eq!(err.kind(), "incomplete_message");
}
