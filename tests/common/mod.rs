//! Reference 12-bit LZW encoder used to produce test streams.
//!
//! Matches the decoder's conventions: entries 256..4096 are handed out in
//! order, and once the table is full the next emitted code starts a fresh
//! table. Codes are packed two per 3 bytes with an odd last code written as
//! a big-endian 16-bit value.

#![allow(dead_code)]

use std::collections::HashMap;

const BASE_SIZE: u16 = 256;
const MAX_SIZE: u16 = 4096;

fn base_table() -> HashMap<Vec<u8>, u16> {
    (0..BASE_SIZE).map(|i| (vec![i as u8], i)).collect()
}

pub fn encode_codes(data: &[u8]) -> Vec<u16> {
    let mut table = base_table();
    let mut next = BASE_SIZE;
    let mut codes = Vec::new();
    let mut word: Vec<u8> = Vec::new();

    for &byte in data {
        word.push(byte);
        if table.contains_key(&word) {
            continue;
        }
        word.pop();
        codes.push(table[&word]);
        if next < MAX_SIZE {
            let mut entry = word.clone();
            entry.push(byte);
            table.insert(entry, next);
            next += 1;
        } else {
            table = base_table();
            next = BASE_SIZE;
        }
        word.clear();
        word.push(byte);
    }
    if !word.is_empty() {
        codes.push(table[&word]);
    }
    codes
}

pub fn pack_codes(codes: &[u16]) -> Vec<u8> {
    let mut out = Vec::with_capacity(codes.len() * 3 / 2 + 2);
    let mut pairs = codes.chunks_exact(2);
    for pair in &mut pairs {
        let (a, b) = (pair[0], pair[1]);
        out.push((a >> 4) as u8);
        out.push((((a & 0x0F) << 4) | (b >> 8)) as u8);
        out.push((b & 0xFF) as u8);
    }
    if let [last] = *pairs.remainder() {
        out.extend_from_slice(&last.to_be_bytes());
    }
    out
}

pub fn encode(data: &[u8]) -> Vec<u8> {
    pack_codes(&encode_codes(data))
}

/// Deterministic text with enough repetition to exercise long entries.
pub fn sample_text(len: usize) -> Vec<u8> {
    const WORDS: [&str; 8] = [
        "lempel ", "ziv ", "welch ", "code ", "table ", "reset ", "dictionary ", "\n",
    ];
    let mut out = Vec::with_capacity(len);
    let mut state = 0x2545_F491u32;
    while out.len() < len {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        out.extend_from_slice(WORDS[(state % WORDS.len() as u32) as usize].as_bytes());
    }
    out.truncate(len);
    out
}
