//! memlimit - Container-aware memory ceiling detection.
//!
//! Resolves how much memory the current process can actually use. Inside a
//! cgroup-constrained container that is the cgroup memory limit, not the
//! host's physical memory, and sizing caches or admission thresholds against
//! the latter gets processes OOM-killed.
//!
//! # Resolution
//!
//! The first usable answer wins:
//!
//! - **cgroup v2**: `/sys/fs/cgroup/memory.max`
//! - **cgroup v1**: `/sys/fs/cgroup/memory/memory.limit_in_bytes`
//! - **host**: total physical memory
//!
//! "No limit" markers (`max` in v2; `0` or the `0x7FFFFFFFFFFFF000` page-rounded
//! infinity in v1) are never returned as limits.
//!
//! # Example
//!
//! ```rust,no_run
//! let limit = memlimit::resolve_memory_limit()?;
//! println!("Memory ceiling: {}", memlimit::system::format_bytes(limit));
//! # Ok::<(), memlimit::LimitError>(())
//! ```

/// Package version from Cargo.toml
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Git commit hash (8 chars) with optional "-dirty" suffix
pub const BUILD_VERSION: &str = env!("BUILD_VERSION");

/// Full version string: "0.1.0 (abc12345)" or "0.1.0 (abc12345-dirty)"
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("BUILD_VERSION"), ")");

pub mod config;
pub mod logging;
pub mod system;

// Re-exports for convenience
pub use config::Config;
pub use system::{resolve_memory_limit, LimitError, LimitResolver, LimitSource, ResolvedLimit};
