use std::fmt;
use std::io;
use std::path::Path;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        UnexpectedEof => "Input appears truncated. Re-encode the source file.",
        WriteZero => "Disk may be full. Free up space and try again.",
        Other if err.raw_os_error() == Some(28) => "Disk may be full. Free up space and try again.",
        _ => "Check the path and available disk space.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Convert an I/O error into a CLI error with context.
pub fn io_cli_error(operation: &str, path: &Path, err: io::Error) -> CliError {
    CliError {
        msg: format_io_error(operation, path, &err),
        source: Some(Box::new(err)),
    }
}

/// Convert a decode failure for `path` into a CLI error with a hint.
pub fn lzw_cli_error(path: &Path, err: crate::LzwError) -> CliError {
    if let crate::LzwError::Io(io) = err {
        return io_cli_error("reading input file", path, io);
    }
    CliError {
        msg: format!("Failed to decode '{}': {}", path.display(), cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a decode error variant.
pub fn cli_hint(err: &crate::LzwError) -> String {
    use crate::LzwError::*;
    match err {
        MalformedInput(msg) => format!("{msg}. Verify the file is a complete 12-bit LZW stream."),
        UndefinedCode {
            code,
            position,
            next_index,
        } => format!(
            "code {code} at position {position} is not in the dictionary (next slot {next_index}). The stream is corrupt or was not written with 12-bit codes."
        ),
        Config(msg) => format!("{msg}. Invalid configuration."),
        Io(io) => format!("{io}"),
    }
}
