//! Cgroup memory limit probes.
//!
//! Supports both cgroup v1 and v2 for detecting the memory ceiling
//! in containerized environments (Docker, Kubernetes). Only the default
//! single-hierarchy mount points under `/sys/fs/cgroup` are read.

use std::path::Path;

use tracing::trace;

use super::error::{LimitError, LimitResult};
use super::reader::{parse_decimal, read_trimmed, read_u64_file};

/// cgroup v2 unified memory ceiling.
pub const CGROUP_V2_MEMORY_MAX: &str = "/sys/fs/cgroup/memory.max";

/// cgroup v1 memory controller ceiling.
pub const CGROUP_V1_MEMORY_LIMIT: &str = "/sys/fs/cgroup/memory/memory.limit_in_bytes";

/// cgroup v1 "infinity": `i64::MAX` rounded down to a 4 KiB page.
/// Any value at or above this means no limit is imposed.
pub const CGROUP_V1_NO_LIMIT: u64 = 0x7FFF_FFFF_FFFF_F000;

/// Literal written to `memory.max` when no limit is set.
const CGROUP_V2_NO_LIMIT: &str = "max";

/// Cgroup hierarchy version a probe reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CgroupVersion {
    /// cgroup v2 (unified hierarchy)
    V2,
    /// cgroup v1 (legacy hierarchy)
    V1,
}

impl std::fmt::Display for CgroupVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::V2 => write!(f, "v2"),
            Self::V1 => write!(f, "v1"),
        }
    }
}

/// Read the cgroup v2 memory ceiling from `path`.
///
/// Format: bytes or `max` (unlimited). Zero is rejected as invalid.
pub fn probe_v2(path: &Path) -> LimitResult<u64> {
    let version = CgroupVersion::V2;
    let content = read_trimmed(path)
        .map_err(|source| LimitError::ProbeUnavailable { version, source })?;

    if content == CGROUP_V2_NO_LIMIT {
        return Err(LimitError::NoLimitConfigured { version });
    }

    match parse_decimal(&content) {
        Ok(value) if value > 0 => {
            trace!("cgroup v2 memory.max: {} bytes", value);
            Ok(value)
        }
        _ => Err(LimitError::InvalidLimit {
            version,
            value: content,
        }),
    }
}

/// Read the cgroup v1 memory ceiling from `path`.
///
/// There is no string sentinel in v1: zero or anything at or above
/// [`CGROUP_V1_NO_LIMIT`] means unlimited.
pub fn probe_v1(path: &Path) -> LimitResult<u64> {
    let version = CgroupVersion::V1;
    let value = read_u64_file(path)
        .map_err(|source| LimitError::ProbeUnavailable { version, source })?;

    if value == 0 || value >= CGROUP_V1_NO_LIMIT {
        return Err(LimitError::NoLimitConfigured { version });
    }

    trace!("cgroup v1 memory.limit_in_bytes: {} bytes", value);
    Ok(value)
}
