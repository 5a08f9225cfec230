//! Tier ordering and fall-through rules.

use crate::helpers::*;
use memlimit::system::CGROUP_V1_NO_LIMIT;
use memlimit::LimitSource;

/// Any positive v2 value wins, whatever v1 and the host say
#[test]
fn test_v2_positive_values_short_circuit() {
    for n in [1u64, 4096, 268_435_456, CGROUP_V1_NO_LIMIT, u64::MAX] {
        let cgroup = FakeCgroup::new()
            .with_v2(&n.to_string())
            .with_v1("not a number");
        let host = FakeHost::failing();

        let limit = cgroup.resolver(host.clone()).resolve().unwrap();

        assert_eq!(limit.bytes, n);
        assert_eq!(limit.source, LimitSource::CgroupV2);
        assert_eq!(host.calls(), 0);
    }
}

/// v2 `max`, zero, garbage or an unreadable file all defer to v1
#[test]
fn test_v2_unusable_defers_to_v1() {
    let cases = [
        FakeCgroup::new().with_v2("max"),
        FakeCgroup::new().with_v2("0"),
        FakeCgroup::new().with_v2("12G"),
        FakeCgroup::new().with_v2("+2147483648"),
        FakeCgroup::new().with_v2(""),
        FakeCgroup::new().with_v2_directory(),
        FakeCgroup::new(),
    ];

    for cgroup in cases {
        let cgroup = cgroup.with_v1("536870912");
        let host = FakeHost::reporting(1);

        let limit = cgroup.resolver(host.clone()).resolve().unwrap();

        assert_eq!(limit.bytes, 536_870_912);
        assert_eq!(limit.source, LimitSource::CgroupV1);
        assert_eq!(host.calls(), 0);
    }
}

/// v1 values strictly between zero and the sentinel are limits
#[test]
fn test_v1_range() {
    for n in [1u64, 1_073_741_824, CGROUP_V1_NO_LIMIT - 4096, CGROUP_V1_NO_LIMIT - 1] {
        let cgroup = FakeCgroup::new().with_v1(&n.to_string());

        let limit = cgroup.resolver(FakeHost::failing()).resolve().unwrap();

        assert_eq!(limit.bytes, n);
        assert_eq!(limit.source, LimitSource::CgroupV1);
    }
}

/// v1 zero, sentinel, above-sentinel or malformed all defer to the host
#[test]
fn test_v1_unusable_defers_to_host() {
    let sentinel = CGROUP_V1_NO_LIMIT.to_string();
    let above = (CGROUP_V1_NO_LIMIT + 1).to_string();
    let max = u64::MAX.to_string();

    let cases = [
        "0",
        sentinel.as_str(),
        above.as_str(),
        max.as_str(),
        "-1",
        "+1073741824",
        "max",
    ];

    for content in cases {
        let cgroup = FakeCgroup::new().with_v2("max").with_v1(content);
        let host = FakeHost::reporting(8_589_934_592);

        let limit = cgroup.resolver(host.clone()).resolve().unwrap();

        assert_eq!(limit.bytes, 8_589_934_592, "v1 content {:?}", content);
        assert_eq!(limit.source, LimitSource::Host);
        assert_eq!(host.calls(), 1);
    }
}

/// Host-reported zero is passed through; the host tier has no "unlimited"
#[test]
fn test_host_value_is_not_validated() {
    let cgroup = FakeCgroup::new();

    let limit = cgroup.resolver(FakeHost::reporting(0)).resolve().unwrap();

    assert_eq!(limit.bytes, 0);
    assert_eq!(limit.source, LimitSource::Host);
}

/// All tiers failing surfaces the host error, not a cgroup one
#[test]
fn test_total_failure_reports_host_error() {
    let cgroup = FakeCgroup::new().with_v2("max").with_v1("0");
    let host = FakeHost::failing();

    let err = cgroup.resolver(host.clone()).resolve().unwrap_err();

    assert!(err.is_host_query_failed());
    assert_eq!(
        err.to_string(),
        "failed to get system memory: host stats unavailable"
    );
    assert_eq!(host.calls(), 1);
}
