//! Single-integer file reader for procfs/sysfs style files.

use std::fs;
use std::path::Path;

use super::error::ReadError;

/// Read a file holding one decimal integer, optionally padded with whitespace.
pub fn read_u64_file(path: impl AsRef<Path>) -> Result<u64, ReadError> {
    let path = path.as_ref();
    let content = read_trimmed(path)?;

    parse_decimal(&content).map_err(|error| ReadError::Parse {
        path: path.to_path_buf(),
        value: content,
        error,
    })
}

/// Parse an unsigned decimal integer made of ASCII digits only.
///
/// `u64::from_str` also takes a leading `+`; kernel files never carry a sign
/// and one is rejected here.
pub(crate) fn parse_decimal(s: &str) -> Result<u64, String> {
    if s.is_empty() {
        return Err("empty value".to_string());
    }
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err("invalid digit found in string".to_string());
    }
    s.parse::<u64>().map_err(|e| e.to_string())
}

/// Read a file and return its content with surrounding whitespace removed.
///
/// Non-UTF-8 bytes are replaced rather than failing the read, so garbage
/// content surfaces as a parse failure and not as an IO error.
pub(crate) fn read_trimmed(path: &Path) -> Result<String, ReadError> {
    fs::read(path)
        .map(|bytes| String::from_utf8_lossy(&bytes).trim().to_string())
        .map_err(|error| ReadError::Io {
            path: path.to_path_buf(),
            error,
        })
}
