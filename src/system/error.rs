//! Memory limit resolution error types.

use std::fmt;
use std::io;
use std::path::PathBuf;

use super::cgroup::CgroupVersion;

/// Errors from reading a single-integer file.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be read (missing, permission denied, ...).
    Io { path: PathBuf, error: io::Error },
    /// The trimmed content is not an unsigned decimal integer.
    Parse {
        path: PathBuf,
        value: String,
        error: String,
    },
}

impl ReadError {
    /// Check if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, ReadError::Io { .. })
    }

    /// Check if this is a parse error.
    pub fn is_parse(&self) -> bool {
        matches!(self, ReadError::Parse { .. })
    }
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io { path, error } => {
                write!(f, "failed to read '{}': {}", path.display(), error)
            }
            ReadError::Parse { path, value, error } => {
                write!(
                    f,
                    "failed to parse '{}'='{}' as u64: {}",
                    path.display(),
                    value,
                    error
                )
            }
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io { error, .. } => Some(error),
            ReadError::Parse { .. } => None,
        }
    }
}

/// Errors produced by the limit probes and the resolver.
///
/// Cgroup probe errors never leave [`LimitResolver`](super::LimitResolver);
/// callers of the resolver only ever see [`LimitError::HostQueryFailed`].
#[derive(Debug)]
pub enum LimitError {
    /// The cgroup file was unreadable or malformed.
    ProbeUnavailable {
        version: CgroupVersion,
        source: ReadError,
    },

    /// The cgroup exists but explicitly imposes no limit.
    NoLimitConfigured { version: CgroupVersion },

    /// The cgroup file held a value that is not a usable limit.
    InvalidLimit {
        version: CgroupVersion,
        value: String,
    },

    /// The host memory collaborator failed.
    HostQueryFailed(io::Error),
}

impl LimitError {
    /// Check if this is a host query failure.
    pub fn is_host_query_failed(&self) -> bool {
        matches!(self, LimitError::HostQueryFailed(_))
    }

    /// Check if the probe reported an explicit "no limit".
    pub fn is_no_limit(&self) -> bool {
        matches!(self, LimitError::NoLimitConfigured { .. })
    }

    /// Check if the probe had nothing readable.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LimitError::ProbeUnavailable { .. })
    }

    /// Check if the probe read a degenerate value.
    pub fn is_invalid(&self) -> bool {
        matches!(self, LimitError::InvalidLimit { .. })
    }
}

impl fmt::Display for LimitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LimitError::ProbeUnavailable { version, source } => {
                write!(f, "cgroup {}: probe unavailable: {}", version, source)
            }
            LimitError::NoLimitConfigured { version } => {
                write!(f, "cgroup {}: no memory limit set", version)
            }
            LimitError::InvalidLimit { version, value } => {
                write!(f, "cgroup {}: invalid memory limit '{}'", version, value)
            }
            LimitError::HostQueryFailed(error) => {
                write!(f, "failed to get system memory: {}", error)
            }
        }
    }
}

impl std::error::Error for LimitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LimitError::ProbeUnavailable { source, .. } => Some(source),
            LimitError::HostQueryFailed(error) => Some(error),
            _ => None,
        }
    }
}

/// Result type alias for limit operations.
pub type LimitResult<T> = Result<T, LimitError>;
