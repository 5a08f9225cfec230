//! Effective memory ceiling resolution.
//!
//! Probes, in order, stopping at the first usable answer:
//!
//! 1. cgroup v2 `memory.max`
//! 2. cgroup v1 `memory.limit_in_bytes`
//! 3. host total physical memory
//!
//! Cgroup failures of any kind fall through to the next tier. Only a host
//! failure is reported to the caller.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use super::cgroup::{probe_v1, probe_v2, CGROUP_V1_MEMORY_LIMIT, CGROUP_V2_MEMORY_MAX};
use super::error::{LimitError, LimitResult};
use super::host::{DefaultHost, HostMemory};

/// Which tier produced the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LimitSource {
    CgroupV2,
    CgroupV1,
    Host,
}

impl LimitSource {
    /// Whether the limit comes from a container constraint.
    pub fn is_cgroup(&self) -> bool {
        matches!(self, Self::CgroupV2 | Self::CgroupV1)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CgroupV2 => "cgroup_v2",
            Self::CgroupV1 => "cgroup_v1",
            Self::Host => "host",
        }
    }
}

impl fmt::Display for LimitSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolved memory ceiling and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedLimit {
    /// Ceiling in bytes
    pub bytes: u64,
    /// Tier that answered
    pub source: LimitSource,
}

impl fmt::Display for ResolvedLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", format_bytes(self.bytes), self.source)
    }
}

/// Format a byte count for humans using binary units.
///
/// - 1073741824 → "1.0 GB"
/// - 536870912 → "512.0 MB"
/// - 4096 → "4096 bytes"
pub fn format_bytes(bytes: u64) -> String {
    const GB: u64 = 1 << 30;
    const MB: u64 = 1 << 20;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Resolves the effective memory ceiling of the current process.
///
/// Holds only paths and a host collaborator, so it can be shared freely
/// between threads. Every call re-reads the files.
#[derive(Debug, Clone)]
pub struct LimitResolver<H = DefaultHost> {
    v2_path: PathBuf,
    v1_path: PathBuf,
    host: H,
}

impl<H: HostMemory> LimitResolver<H> {
    /// Create a resolver reading the standard cgroup mount points.
    pub fn new(host: H) -> Self {
        Self::with_paths(CGROUP_V2_MEMORY_MAX, CGROUP_V1_MEMORY_LIMIT, host)
    }

    /// Create a resolver reading the given files instead of the standard
    /// mount points (fake trees in tests, foreign roots).
    pub fn with_paths(v2_path: impl Into<PathBuf>, v1_path: impl Into<PathBuf>, host: H) -> Self {
        Self {
            v2_path: v2_path.into(),
            v1_path: v1_path.into(),
            host,
        }
    }

    /// Path of the cgroup v2 `memory.max` file.
    pub fn v2_path(&self) -> &Path {
        &self.v2_path
    }

    /// Path of the cgroup v1 `memory.limit_in_bytes` file.
    pub fn v1_path(&self) -> &Path {
        &self.v1_path
    }

    /// Resolve the ceiling, reporting which tier answered.
    pub fn resolve(&self) -> LimitResult<ResolvedLimit> {
        match probe_v2(&self.v2_path) {
            Ok(bytes) => return Ok(self.found(bytes, LimitSource::CgroupV2)),
            Err(e) => trace!("Skipping cgroup v2: {}", e),
        }

        match probe_v1(&self.v1_path) {
            Ok(bytes) => return Ok(self.found(bytes, LimitSource::CgroupV1)),
            Err(e) => trace!("Skipping cgroup v1: {}", e),
        }

        let bytes = self.probe_host()?;
        Ok(self.found(bytes, LimitSource::Host))
    }

    /// Resolve the ceiling in bytes.
    pub fn resolve_bytes(&self) -> LimitResult<u64> {
        self.resolve().map(|limit| limit.bytes)
    }

    fn probe_host(&self) -> LimitResult<u64> {
        self.host
            .total_memory()
            .map_err(LimitError::HostQueryFailed)
    }

    fn found(&self, bytes: u64, source: LimitSource) -> ResolvedLimit {
        debug!(
            bytes,
            source = source.as_str(),
            "Memory limit resolved: {}",
            format_bytes(bytes)
        );
        ResolvedLimit { bytes, source }
    }
}

impl Default for LimitResolver<DefaultHost> {
    fn default() -> Self {
        Self::new(DefaultHost::default())
    }
}

/// Resolve the effective memory ceiling of the current process in bytes.
///
/// # Example
///
/// ```rust,no_run
/// let limit = memlimit::resolve_memory_limit()?;
/// let cache_budget = limit / 4;
/// # let _ = cache_budget;
/// # Ok::<(), memlimit::LimitError>(())
/// ```
pub fn resolve_memory_limit() -> LimitResult<u64> {
    LimitResolver::<DefaultHost>::default().resolve_bytes()
}
