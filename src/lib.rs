//! Decoder for fixed-width 12-bit LZW streams.
//!
//! The pipeline has two stages: [`unpack_codes`] splits the packed bytes into
//! 12-bit codes and [`decode_codes`] replays them against a dictionary that
//! is rebuilt whenever all 4096 slots are taken. [`decode`] runs both over a
//! complete in-memory buffer.

use std::time::Instant;
use tracing::{debug, warn};

pub mod config;
pub mod decoder;
pub mod dictionary;
mod error;
pub mod io_utils;
pub mod stats;
pub mod unpack;

pub use config::{DecodeConfig, FileDecoder, TrailingBytePolicy};
pub use decoder::{decode_codes, decode_codes_with_stats};
pub use dictionary::Dictionary;
pub use error::LzwError;
pub use stats::DecodeStats;
pub use unpack::{dangling_byte, unpack_codes};

/// A dictionary code. Packed codes are 12 bits wide; a 16-bit tail code
/// may be larger and is rejected by the decoder if so.
pub type Code = u16;

/// Output of a successful decode together with its statistics.
#[derive(Debug, Clone)]
pub struct Decoded {
    pub output: Vec<u8>,
    pub stats: DecodeStats,
}

impl Decoded {
    /// The output as text, with invalid UTF-8 replaced.
    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.output).into_owned()
    }
}

/// Decode a packed buffer using the default configuration.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, LzwError> {
    decode_with_config(data, &DecodeConfig::default()).map(|d| d.output)
}

/// Decode a packed buffer, honouring `config` and collecting statistics.
pub fn decode_with_config(data: &[u8], config: &DecodeConfig) -> Result<Decoded, LzwError> {
    let start = Instant::now();
    if let Some(byte) = dangling_byte(data) {
        match config.trailing_byte {
            TrailingBytePolicy::Ignore => {
                warn!(byte = %hex::encode([byte]), len = data.len(), "dropping trailing byte")
            }
            TrailingBytePolicy::Reject => {
                return Err(LzwError::MalformedInput(format!(
                    "{} bytes leave a single trailing byte 0x{}",
                    data.len(),
                    hex::encode([byte])
                )))
            }
        }
    }

    let codes = unpack_codes(data);
    let mut stats = DecodeStats {
        input_bytes: data.len(),
        ..DecodeStats::default()
    };
    let output = decode_codes_with_stats(&codes, &mut stats)?;
    stats.finish(&output, start.elapsed());
    debug!(
        codes = stats.codes,
        resets = stats.resets,
        output_bytes = stats.output_bytes,
        "decode complete"
    );
    Ok(Decoded { output, stats })
}
