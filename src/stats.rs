//! Per-decode counters and timing.
//!
//! `DecodeStats` is filled in while a stream is decoded and handed back to
//! the caller next to the output. Nothing in here feeds back into decoding.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::time::Duration;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// Length of the packed input buffer.
    pub input_bytes: usize,
    /// Codes unpacked from the input.
    pub codes: usize,
    /// Times the dictionary filled up and was rebuilt.
    pub resets: usize,
    /// Codes that named the entry being defined.
    pub self_references: usize,
    pub output_bytes: usize,
    pub elapsed_ms: u128,
    /// Hex SHA-256 of the decoded output.
    pub sha256: String,
}

impl DecodeStats {
    pub fn tick_reset(&mut self) {
        self.resets += 1;
    }

    pub fn tick_self_reference(&mut self) {
        self.self_references += 1;
    }

    /// Record wall time and the output digest once decoding has finished.
    pub fn finish(&mut self, output: &[u8], elapsed: Duration) {
        self.output_bytes = output.len();
        self.elapsed_ms = elapsed.as_millis();
        self.sha256 = hex::encode(Sha256::digest(output));
    }

    /// Output size relative to input size, in percent.
    pub fn expansion_percent(&self) -> f64 {
        if self.input_bytes == 0 {
            return 0.0;
        }
        self.output_bytes as f64 * 100.0 / self.input_bytes as f64
    }
}
