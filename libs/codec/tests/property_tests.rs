//! Codec Property Tests
//!
//! Properties that must hold for any input: decoding arbitrary bytes returns
//! an error instead of panicking, and well-formed bodies survive a round trip.

use csp_codec::{
    decode_body, encode_body, CspCodec, GroupSetupBody, Grouped, MessageBody, TextBody,
};
use csp_types::{BlobId, BlobKey, BlobReference, CspMessageType, GroupId, GroupReference, Identity};
use proptest::prelude::*;

fn identity() -> impl Strategy<Value = Identity> {
    "[A-Z0-9]{8}".prop_map(|raw| raw.parse().unwrap())
}

fn group_reference() -> impl Strategy<Value = GroupReference> {
    (identity(), any::<[u8; 16]>())
        .prop_map(|(creator, id)| GroupReference::new(creator, GroupId::new(id)))
}

proptest! {
    #[test]
    fn decode_never_panics(
        index in 0usize..CspMessageType::ALL.len(),
        bytes in proptest::collection::vec(any::<u8>(), 0..512),
    ) {
        let _ = decode_body(CspMessageType::ALL[index], &bytes);
    }

    #[test]
    fn container_decode_never_panics(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let _ = CspCodec::default().decode_container(&bytes);
    }

    #[test]
    fn text_round_trip(text in "\\PC{1,200}") {
        let body = MessageBody::Text(TextBody::new(text));
        let bytes = encode_body(&body).unwrap();
        prop_assert_eq!(decode_body(CspMessageType::Text, &bytes).unwrap(), body);
    }

    #[test]
    fn group_image_is_always_76_bytes(
        group in group_reference(),
        blob_id in any::<[u8; 16]>(),
        size in any::<u32>(),
        key in any::<[u8; 32]>(),
    ) {
        let blob = BlobReference::new(BlobId::new(blob_id), size, BlobKey::new(key));
        let body = MessageBody::GroupImage(Grouped::new(group, blob));
        let bytes = encode_body(&body).unwrap();

        prop_assert_eq!(bytes.len(), 76);
        prop_assert_eq!(&bytes[40..44], &size.to_le_bytes()[..]);
        prop_assert_eq!(decode_body(CspMessageType::GroupImage, &bytes).unwrap(), body);
    }

    #[test]
    fn group_setup_member_list_round_trip(
        id in any::<[u8; 16]>(),
        members in proptest::collection::btree_set(identity(), 0..20),
    ) {
        let body = MessageBody::GroupSetup(GroupSetupBody {
            group_id: GroupId::new(id),
            members: members.into_iter().collect(),
        });
        let bytes = encode_body(&body).unwrap();
        prop_assert_eq!(bytes.len(), 16 + 8 * body_member_count(&body));
        prop_assert_eq!(decode_body(CspMessageType::GroupSetup, &bytes).unwrap(), body);
    }
}

fn body_member_count(body: &MessageBody) -> usize {
    match body {
        MessageBody::GroupSetup(setup) => setup.members.len(),
        _ => 0,
    }
}
