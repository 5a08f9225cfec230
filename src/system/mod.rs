//! Container-aware memory ceiling detection.
//!
//! Determines how much memory the current process may actually use, so
//! buffers and caches are sized against the container's cgroup limit rather
//! than the host's physical memory.
//!
//! # Resolution order
//!
//! - **cgroup v2**: `/sys/fs/cgroup/memory.max` (`max` = unlimited)
//! - **cgroup v1**: `/sys/fs/cgroup/memory/memory.limit_in_bytes`
//!   (`0` or >= `0x7FFFFFFFFFFFF000` = unlimited)
//! - **host**: total physical memory
//!
//! # Example
//!
//! ```rust,no_run
//! use memlimit::system::{LimitResolver, LimitSource};
//!
//! let limit = LimitResolver::<memlimit::system::DefaultHost>::default().resolve()?;
//! if limit.source == LimitSource::Host {
//!     println!("No container limit, using host memory: {}", limit);
//! }
//! # Ok::<(), memlimit::LimitError>(())
//! ```

mod cgroup;
mod error;
mod host;
mod reader;
mod resolver;

pub use cgroup::{
    probe_v1, probe_v2, CgroupVersion, CGROUP_V1_MEMORY_LIMIT, CGROUP_V1_NO_LIMIT,
    CGROUP_V2_MEMORY_MAX,
};
pub use error::{LimitError, LimitResult, ReadError};
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub use host::SysconfHost;
pub use host::{DefaultHost, HostMemory, SysinfoHost};
pub use reader::read_u64_file;
pub use resolver::{
    format_bytes, resolve_memory_limit, LimitResolver, LimitSource, ResolvedLimit,
};
