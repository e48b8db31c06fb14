use thiserror::Error;

use crate::Code;

#[derive(Error, Debug)]
pub enum LzwError {
    /// Stream is structurally unusable (empty code sequence, rejected
    /// dangling byte).
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A code with no dictionary entry that is not the slot currently being
    /// defined.
    #[error("undefined code {code} at position {position} (next free slot {next_index})")]
    UndefinedCode {
        code: Code,
        position: usize,
        next_index: Code,
    },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
