//! Host physical memory collaborators.
//!
//! The host tier is the backstop of the resolver: it has no notion of
//! "no limit" and whatever total it reports is used as-is.

use std::io;

/// Source of the host's total physical memory.
///
/// The resolver takes whatever `Ok` total a host returns, 0 included; only
/// `Err` counts as a failed query. A host that cannot tell "unknown" from a
/// real reading must map the former to an error itself, as [`SysinfoHost`]
/// does for sysinfo's 0.
pub trait HostMemory {
    /// Total physical memory in bytes.
    fn total_memory(&self) -> io::Result<u64>;
}

impl<F> HostMemory for F
where
    F: Fn() -> io::Result<u64>,
{
    fn total_memory(&self) -> io::Result<u64> {
        self()
    }
}

/// Host collaborator used by [`LimitResolver::default`](super::LimitResolver).
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub type DefaultHost = SysconfHost;

/// Host collaborator used by [`LimitResolver::default`](super::LimitResolver).
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub type DefaultHost = SysinfoHost;

/// Physical memory from `sysconf(_SC_PHYS_PAGES) * sysconf(_SC_PAGESIZE)`.
#[cfg(any(target_os = "linux", target_os = "macos"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct SysconfHost;

#[cfg(any(target_os = "linux", target_os = "macos"))]
impl SysconfHost {
    fn sysconf(name: libc::c_int, label: &str) -> io::Result<u64> {
        // SAFETY: sysconf has no memory-safety preconditions
        let value = unsafe { libc::sysconf(name) };
        if value == -1 {
            let error = io::Error::last_os_error();
            return Err(io::Error::new(
                error.kind(),
                format!("sysconf({}): {}", label, error),
            ));
        }

        u64::try_from(value).map_err(|_| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("sysconf({}) returned {}", label, value),
            )
        })
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
impl HostMemory for SysconfHost {
    fn total_memory(&self) -> io::Result<u64> {
        let pages = Self::sysconf(libc::_SC_PHYS_PAGES, "_SC_PHYS_PAGES")?;
        let page_size = Self::sysconf(libc::_SC_PAGESIZE, "_SC_PAGESIZE")?;

        pages.checked_mul(page_size).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{} pages of {} bytes overflows u64", pages, page_size),
            )
        })
    }
}

/// Physical memory from the `sysinfo` crate.
///
/// `sysinfo` reports 0 on platforms it cannot inspect; that is turned into
/// an error here rather than handed back as a total.
#[derive(Debug, Clone, Copy, Default)]
pub struct SysinfoHost;

impl HostMemory for SysinfoHost {
    fn total_memory(&self) -> io::Result<u64> {
        let mut sys = sysinfo::System::new();
        sys.refresh_memory();

        match sys.total_memory() {
            0 => Err(io::Error::new(
                io::ErrorKind::Unsupported,
                "sysinfo reported no physical memory",
            )),
            bytes => Ok(bytes),
        }
    }
}
