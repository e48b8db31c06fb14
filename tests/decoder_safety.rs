mod common;

use common::{encode, pack_codes, sample_text};
use lzw12::{decode, decode_with_config, DecodeConfig, LzwError, TrailingBytePolicy};
use rand::Rng;

#[test]
fn empty_input_fails() {
    assert!(matches!(decode(&[]), Err(LzwError::MalformedInput(_))));
}

#[test]
fn lone_byte_has_no_codes() {
    // The byte is dropped, leaving nothing to decode.
    assert!(matches!(decode(&[0x41]), Err(LzwError::MalformedInput(_))));
}

#[test]
fn trailing_byte_ignored_by_default() {
    let mut packed = encode(b"ab");
    packed.push(0x99);
    assert_eq!(decode(&packed).unwrap(), b"ab");
}

#[test]
fn trailing_byte_rejected_on_request() {
    let mut packed = encode(b"ab");
    packed.push(0x99);
    let config = DecodeConfig {
        trailing_byte: TrailingBytePolicy::Reject,
    };
    let err = decode_with_config(&packed, &config).unwrap_err();
    assert!(matches!(err, LzwError::MalformedInput(msg) if msg.contains("0x99")));
}

#[test]
fn oversized_tail_code_fails() {
    // 'a' in the first group, then a 16-bit tail of 0x1234
    let mut packed = pack_codes(&[97, 98]);
    packed.extend_from_slice(&[0x12, 0x34]);
    let err = decode(&packed).unwrap_err();
    assert!(matches!(err, LzwError::UndefinedCode { code: 0x1234, position: 2, .. }));
}

#[test]
fn forward_reference_fails() {
    let packed = pack_codes(&[97, 98, 300, 99]);
    assert!(matches!(
        decode(&packed),
        Err(LzwError::UndefinedCode { code: 300, position: 2, next_index: 257 })
    ));
}

#[test]
fn bit_flips_never_panic() {
    let data = sample_text(2_000);
    let packed = encode(&data);
    let total_bits = packed.len() * 8;
    let mut rng = rand::thread_rng();
    let trials = 200u32;
    let mut unchanged = 0u32;
    for _ in 0..trials {
        let mut buf = packed.clone();
        let bit = rng.gen_range(0..total_bits);
        buf[bit / 8] ^= 1u8 << (7 - (bit % 8));
        if matches!(decode(&buf), Ok(out) if out == data) {
            unchanged += 1;
        }
    }
    assert!(unchanged * 10 < trials);
}

#[test]
fn random_bytes_never_panic() {
    let mut rng = rand::thread_rng();
    for _ in 0..200 {
        let len = rng.gen_range(0..600);
        let buf: Vec<u8> = (0..len).map(|_| rng.gen()).collect();
        let _ = decode(&buf);
    }
}
