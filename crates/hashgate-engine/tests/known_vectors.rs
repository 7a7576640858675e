//! # Published Digest Vectors and Incremental Equivalence
//!
//! Checks the guarded handles against the published SHA-256 test vectors
//! and against the `sha2` crate directly for arbitrary input splits.

use hashgate_engine::{DynHasher, HashAlgorithm, Hasher, HasherState, StateView};
use proptest::prelude::*;
use sha2::{Digest as _, Sha256};

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";
const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";
const TWO_BLOCK_SHA256: &str = "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1";

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn dyn_digest(pieces: &[&[u8]]) -> String {
    let mut h = DynHasher::new(HashAlgorithm::Sha256).unwrap();
    for piece in pieces {
        h.update(piece).unwrap();
    }
    h.finish_vec().unwrap().to_hex()
}

#[test]
fn empty_input_digest() {
    assert_eq!(dyn_digest(&[b"".as_slice()]), EMPTY_SHA256);
}

#[test]
fn abc_digest() {
    assert_eq!(dyn_digest(&[b"abc".as_slice()]), ABC_SHA256);
}

#[test]
fn two_block_message_digest() {
    let msg = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
    assert_eq!(dyn_digest(&[msg.as_slice()]), TWO_BLOCK_SHA256);
    let (head, tail) = msg.split_at(17);
    assert_eq!(dyn_digest(&[head, b"".as_slice(), tail]), TWO_BLOCK_SHA256);
}

#[test]
fn million_a_digest() {
    let chunk = [b'a'; 1000];
    let mut h = Hasher::new(HashAlgorithm::Sha256)
        .unwrap()
        .update(&chunk)
        .unwrap();
    for _ in 1..1000 {
        h.update(&chunk).unwrap();
    }
    let (_, digest) = h.finish().unwrap();
    assert_eq!(
        digest.to_hex(),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn digest_size_after_create_and_reset() {
    let mut h = DynHasher::new(HashAlgorithm::Sha256).unwrap();
    assert_eq!(h.digest_size(), 32);
    h.update(b"x").unwrap();
    h.finish_vec().unwrap();
    h.reset().unwrap();
    assert_eq!(h.digest_size(), 32);
    assert_eq!(h.state(), HasherState::Reset);
}

#[test]
fn digest_matches_published_hex_through_slice_api() {
    let mut h = DynHasher::new(HashAlgorithm::Sha256).unwrap();
    h.update(b"abc").unwrap();
    let mut out = [0u8; 32];
    h.finish(&mut out).unwrap();
    assert_eq!(hex(&out), ABC_SHA256);
}

proptest! {
    #[test]
    fn reset_round_trip_is_idempotent(data in proptest::collection::vec(any::<u8>(), 0..512)) {
        let mut h = DynHasher::new(HashAlgorithm::Sha256).unwrap();
        h.update(&data).unwrap();
        let first = h.finish_vec().unwrap();
        h.reset().unwrap();
        h.update(&data).unwrap();
        let second = h.finish_vec().unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn split_updates_equal_whole_update(
        data in proptest::collection::vec(any::<u8>(), 0..512),
        split in any::<prop::sample::Index>(),
    ) {
        let at = split.index(data.len() + 1);
        let (x, y) = data.split_at(at);
        let split_digest = dyn_digest(&[x, y]);
        let whole_digest = dyn_digest(&[data.as_slice()]);
        prop_assert_eq!(&split_digest, &whole_digest);
        prop_assert_eq!(whole_digest, hex(&Sha256::digest(&data)));
    }

    #[test]
    fn typestate_agrees_with_runtime_handle(data in proptest::collection::vec(any::<u8>(), 0..256)) {
        let (_, typed) = Hasher::new(HashAlgorithm::Sha256)
            .unwrap()
            .update(&data)
            .unwrap()
            .finish()
            .unwrap();
        prop_assert_eq!(typed.to_hex(), dyn_digest(&[data.as_slice()]));
    }
}
