//! End-to-end resolution scenarios on fake cgroup trees.

use crate::helpers::*;
use memlimit::LimitSource;

/// v2 limit set: returned as-is
#[test]
fn test_v2_limit() {
    let cgroup = FakeCgroup::new().with_v2("2147483648");
    let host = FakeHost::reporting(16_777_216_000);

    let limit = cgroup.resolver(host.clone()).resolve().unwrap();

    assert_eq!(limit.bytes, 2_147_483_648);
    assert_eq!(limit.source, LimitSource::CgroupV2);
    assert_eq!(host.calls(), 0);
}

/// v2 unlimited, v1 limited: v1 answers
#[test]
fn test_v2_max_then_v1_limit() {
    let cgroup = FakeCgroup::new().with_v2("max").with_v1("1073741824");
    let host = FakeHost::reporting(16_777_216_000);

    let limit = cgroup.resolver(host.clone()).resolve().unwrap();

    assert_eq!(limit.bytes, 1_073_741_824);
    assert_eq!(limit.source, LimitSource::CgroupV1);
    assert_eq!(host.calls(), 0);
}

/// v1 reports the page-rounded infinity: host answers
#[test]
fn test_v1_sentinel_falls_through_to_host() {
    let cgroup = FakeCgroup::new().with_v1("9223372036854771712");
    let host = FakeHost::reporting(16_777_216_000);

    let limit = cgroup.resolver(host.clone()).resolve().unwrap();

    assert_eq!(limit.bytes, 16_777_216_000);
    assert_eq!(limit.source, LimitSource::Host);
    assert_eq!(host.calls(), 1);
}

/// No cgroup at all: host total, unmodified
#[test]
fn test_no_cgroup_uses_host() {
    let cgroup = FakeCgroup::new();
    let host = FakeHost::reporting(16_777_216_000);

    let bytes = cgroup.resolver(host).resolve_bytes().unwrap();

    assert_eq!(bytes, 16_777_216_000);
}
