//! Encode/decode throughput for representative bodies
//!
//! Covers the fixed-layout path (group image), the text path and the JSON
//! path (file), plus the error path for truncated input.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csp_codec::{CodecError, CspCodec, FileBody, Grouped, MessageBody, TextBody};
use csp_types::{BlobId, BlobKey, BlobReference, CspMessageType, GroupId, GroupReference};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn group_image() -> MessageBody {
    let group = GroupReference::new(
        "ABCDEFGH".parse().expect("valid identity"),
        GroupId::new([0u8; 16]),
    );
    let blob = BlobReference::new(BlobId::new([0x01; 16]), 1024, BlobKey::new([0x02; 32]));
    MessageBody::GroupImage(Grouped::new(group, blob))
}

fn file() -> MessageBody {
    MessageBody::File(
        FileBody::new(BlobId::new([5; 16]), BlobKey::new([6; 32]), "image/jpeg", 120_000)
            .with_file_name("IMG_0001.jpg")
            .with_caption("sunset"),
    )
}

fn bench_encode(c: &mut Criterion) {
    let codec = CspCodec::default();
    let mut group = c.benchmark_group("encode_body");

    let image = group_image();
    let text = MessageBody::Text(TextBody::new("x".repeat(512)));
    let file = file();

    group.bench_function("group_image", |b| {
        b.iter(|| black_box(codec.encode_body(black_box(&image))))
    });
    group.bench_function("text_512", |b| {
        b.iter(|| black_box(codec.encode_body(black_box(&text))))
    });
    group.bench_function("file_json", |b| {
        b.iter(|| black_box(codec.encode_body(black_box(&file))))
    });

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let codec = CspCodec::default();
    let mut group = c.benchmark_group("decode_body");

    let image = codec.encode_body(&group_image()).expect("encodable");
    let file = codec.encode_body(&file()).expect("encodable");

    group.bench_function("group_image", |b| {
        b.iter(|| black_box(codec.decode_body(CspMessageType::GroupImage, black_box(&image))))
    });
    group.bench_function("file_json", |b| {
        b.iter(|| black_box(codec.decode_body(CspMessageType::File, black_box(&file))))
    });
    group.bench_function("truncated_group_image", |b| {
        b.iter(|| {
            match codec.decode_body(CspMessageType::GroupImage, black_box(&image[..75])) {
                Err(CodecError::MalformedBody { .. }) => {}
                _ => panic!("Expected MalformedBody error"),
            }
        })
    });

    group.finish();
}

fn bench_container(c: &mut Criterion) {
    let codec = CspCodec::default();
    let body = group_image();
    let mut rng = StdRng::seed_from_u64(0);
    let framed = codec.encode_container(&body, &mut rng).expect("encodable");

    let mut group = c.benchmark_group("container");
    group.bench_function("encode", |b| {
        b.iter(|| black_box(codec.encode_container(black_box(&body), &mut rng)))
    });
    group.bench_function("decode", |b| {
        b.iter(|| black_box(codec.decode_container(black_box(&framed))))
    });
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_container);
criterion_main!(benches);
