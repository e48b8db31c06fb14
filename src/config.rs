use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{decode_with_config, Decoded, LzwError};

/// What to do with a lone byte left after the last 3-byte group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrailingBytePolicy {
    /// Drop it and log a warning.
    #[default]
    Ignore,
    /// Fail the decode with [`LzwError::MalformedInput`].
    Reject,
}

/// Runtime configuration for a decode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeConfig {
    pub trailing_byte: TrailingBytePolicy,
}

impl DecodeConfig {
    pub fn from_json(text: &str) -> Result<Self, LzwError> {
        serde_json::from_str(text).map_err(|e| LzwError::Config(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, LzwError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| LzwError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}

/// Decodes files one after another, reading from a replaceable source path.
///
/// Each [`FileDecoder::decode`] reads the whole file into a fresh buffer and
/// runs an independent decode; nothing carries over between calls.
#[derive(Debug, Clone)]
pub struct FileDecoder {
    source: PathBuf,
    config: DecodeConfig,
}

impl FileDecoder {
    pub fn new<P: Into<PathBuf>>(source: P) -> Self {
        Self::with_config(source, DecodeConfig::default())
    }

    pub fn with_config<P: Into<PathBuf>>(source: P, config: DecodeConfig) -> Self {
        Self {
            source: source.into(),
            config,
        }
    }

    pub fn set_source<P: Into<PathBuf>>(&mut self, source: P) {
        self.source = source.into();
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    pub fn decode(&self) -> Result<Decoded, LzwError> {
        let data = std::fs::read(&self.source)?;
        decode_with_config(&data, &self.config)
    }
}
