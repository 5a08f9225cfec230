//! Integration tests for memlimit
//!
//! Each test builds a fake cgroup tree in a temporary directory and points a
//! `LimitResolver` at it, with a scripted host collaborator standing in for
//! the real physical memory query.

mod helpers;

mod fallback;
mod scenarios;
