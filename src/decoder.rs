//! Replays a code sequence against a growing [`Dictionary`].
//!
//! The table is rebuilt from the base alphabet each time it fills up, so a
//! stream is a series of generations. The first code of a generation is
//! always a literal and defines nothing; every later code defines one entry,
//! the previous chunk followed by the first byte of the current one. A
//! generation therefore spans `1 + (MAX_SIZE - BASE_SIZE)` codes.

use tracing::{debug, trace};

use crate::dictionary::Dictionary;
use crate::stats::DecodeStats;
use crate::{Code, LzwError};

struct Decoder<'s> {
    dict: Dictionary,
    output: Vec<u8>,
    /// Code of the chunk emitted by the previous step.
    previous: Code,
    stats: &'s mut DecodeStats,
}

impl<'s> Decoder<'s> {
    fn start(first: Code, capacity: usize, stats: &'s mut DecodeStats) -> Result<Self, LzwError> {
        let mut decoder = Self {
            dict: Dictionary::new(),
            output: Vec::with_capacity(capacity),
            previous: first,
            stats,
        };
        decoder.start_generation(0, first)?;
        Ok(decoder)
    }

    /// Emit the literal opening a generation. Nothing is defined yet, so
    /// there is no previous chunk a self-reference could build on.
    fn start_generation(&mut self, position: usize, code: Code) -> Result<(), LzwError> {
        let chunk = self
            .dict
            .get(code)
            .ok_or_else(|| undefined(code, position, &self.dict))?;
        self.output.extend_from_slice(chunk);
        self.previous = code;
        Ok(())
    }

    fn step(&mut self, position: usize, code: Code) -> Result<(), LzwError> {
        if self.dict.is_full() {
            debug!(position, "dictionary full, resetting");
            self.dict.reset();
            self.stats.tick_reset();
            return self.start_generation(position, code);
        }

        let head = match self.dict.get(code) {
            Some(chunk) => {
                let head = first_byte(chunk, position)?;
                self.output.extend_from_slice(chunk);
                head
            }
            None if code == self.dict.next_code() => self.self_reference(position, code)?,
            None => return Err(undefined(code, position, &self.dict)),
        };

        self.dict.define(self.previous, head).ok_or_else(|| {
            LzwError::MalformedInput(format!("could not define entry {code} at position {position}"))
        })?;
        self.previous = code;
        Ok(())
    }

    /// `code` names the slot this step is about to define. Its string is
    /// the previous chunk followed by that chunk's own first byte.
    fn self_reference(&mut self, position: usize, code: Code) -> Result<u8, LzwError> {
        debug_assert_eq!(code, self.dict.next_code());
        trace!(position, code, "self-referencing code");
        self.stats.tick_self_reference();
        let chunk = self
            .dict
            .get(self.previous)
            .ok_or_else(|| undefined(self.previous, position, &self.dict))?;
        let head = first_byte(chunk, position)?;
        self.output.extend_from_slice(chunk);
        self.output.push(head);
        Ok(head)
    }
}

fn first_byte(chunk: &[u8], position: usize) -> Result<u8, LzwError> {
    chunk
        .first()
        .copied()
        .ok_or_else(|| LzwError::MalformedInput(format!("empty chunk at position {position}")))
}

fn undefined(code: Code, position: usize, dict: &Dictionary) -> LzwError {
    LzwError::UndefinedCode {
        code,
        position,
        next_index: dict.next_code(),
    }
}

fn run<'s>(codes: &[Code], stats: &'s mut DecodeStats) -> Result<Decoder<'s>, LzwError> {
    let (&first, rest) = codes
        .split_first()
        .ok_or_else(|| LzwError::MalformedInput("empty code sequence".into()))?;
    let mut decoder = Decoder::start(first, codes.len() * 2, stats)?;
    for (offset, &code) in rest.iter().enumerate() {
        decoder.step(offset + 1, code)?;
    }
    Ok(decoder)
}

/// Decode a complete code sequence.
///
/// Fails on an empty sequence or on any code that is neither defined nor
/// the slot currently being defined. No partial output is returned.
pub fn decode_codes(codes: &[Code]) -> Result<Vec<u8>, LzwError> {
    decode_codes_with_stats(codes, &mut DecodeStats::default())
}

/// Like [`decode_codes`], also recording resets and self-references in `stats`.
pub fn decode_codes_with_stats(
    codes: &[Code],
    stats: &mut DecodeStats,
) -> Result<Vec<u8>, LzwError> {
    stats.codes = codes.len();
    let Decoder { output, .. } = run(codes, stats)?;
    stats.output_bytes = output.len();
    Ok(output)
}
