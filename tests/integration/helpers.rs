//! Test helpers and utilities

use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use memlimit::system::HostMemory;
use memlimit::LimitResolver;
use tempfile::TempDir;

/// Fake `/sys/fs/cgroup` tree
pub struct FakeCgroup {
    dir: TempDir,
}

#[allow(dead_code)]
impl FakeCgroup {
    /// Create an empty tree: neither cgroup version mounted
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of the v2 `memory.max` file
    pub fn v2_path(&self) -> PathBuf {
        self.dir.path().join("memory.max")
    }

    /// Path of the v1 `memory/memory.limit_in_bytes` file
    pub fn v1_path(&self) -> PathBuf {
        self.dir.path().join("memory").join("memory.limit_in_bytes")
    }

    /// Write the v2 `memory.max` content (the kernel appends a newline)
    pub fn with_v2(self, content: &str) -> Self {
        fs::write(self.v2_path(), format!("{}\n", content)).expect("write memory.max");
        self
    }

    /// Write the v1 `memory.limit_in_bytes` content
    pub fn with_v1(self, content: &str) -> Self {
        let path = self.v1_path();
        fs::create_dir_all(path.parent().unwrap()).expect("create memory/");
        fs::write(path, format!("{}\n", content)).expect("write memory.limit_in_bytes");
        self
    }

    /// Make the v2 path unreadable as a file by turning it into a directory
    pub fn with_v2_directory(self) -> Self {
        fs::create_dir_all(self.v2_path()).expect("create memory.max dir");
        self
    }

    pub fn remove_v2(&self) {
        fs::remove_file(self.v2_path()).expect("remove memory.max");
    }

    /// Resolver over this tree with the given host
    pub fn resolver<H: HostMemory>(&self, host: H) -> LimitResolver<H> {
        LimitResolver::with_paths(self.v2_path(), self.v1_path(), host)
    }
}

/// Scripted host collaborator that counts queries
#[derive(Clone)]
pub struct FakeHost {
    total: Option<u64>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl FakeHost {
    /// Host reporting `total` bytes of physical memory
    pub fn reporting(total: u64) -> Self {
        Self {
            total: Some(total),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Host whose statistics query fails
    pub fn failing() -> Self {
        Self {
            total: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times the host was queried
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl HostMemory for FakeHost {
    fn total_memory(&self) -> io::Result<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.total
            .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "host stats unavailable"))
    }
}
