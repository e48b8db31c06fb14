//! Splits a packed byte buffer into 12-bit codes.
//!
//! Every 3 bytes carry two codes, MSB first:
//!
//! ```text
//! byte:  [aaaaaaaa] [aaaabbbb] [bbbbbbbb]
//! code:   a = 12 bits           b = 12 bits
//! ```
//!
//! A 2-byte tail (odd number of codes) holds the last code as a plain
//! big-endian 16-bit value. A 1-byte tail carries no code.

use crate::Code;

/// Bytes consumed per pair of codes.
pub const GROUP_BYTES: usize = 3;

/// Number of codes `unpack_codes` yields for a buffer of `len` bytes.
pub fn packed_code_count(len: usize) -> usize {
    let tail = usize::from(len % GROUP_BYTES == 2);
    (len / GROUP_BYTES) * 2 + tail
}

/// First code of a 3-byte group: all of `b0` followed by the high nibble of `b1`.
fn high_code(b0: u8, b1: u8) -> Code {
    ((b0 as Code) << 4) | ((b1 as Code) >> 4)
}

/// Second code of a 3-byte group: low nibble of `b1` followed by all of `b2`.
fn low_code(b1: u8, b2: u8) -> Code {
    (((b1 & 0x0F) as Code) << 8) | b2 as Code
}

/// Unpack `data` into its ordered code sequence.
///
/// Never fails. An empty buffer yields an empty sequence and a single
/// dangling byte (length `% 3 == 1`) is not represented; see
/// [`dangling_byte`].
pub fn unpack_codes(data: &[u8]) -> Vec<Code> {
    let mut codes = Vec::with_capacity(packed_code_count(data.len()));
    let mut groups = data.chunks_exact(GROUP_BYTES);
    for group in &mut groups {
        codes.push(high_code(group[0], group[1]));
        codes.push(low_code(group[1], group[2]));
    }
    if let [penultimate, ultimate] = *groups.remainder() {
        codes.push(Code::from_be_bytes([penultimate, ultimate]));
    }
    codes
}

/// The final byte of `data` when it cannot be part of any code.
pub fn dangling_byte(data: &[u8]) -> Option<u8> {
    match data.len() % GROUP_BYTES {
        1 => data.last().copied(),
        _ => None,
    }
}
