//! Stateless selection algorithms over an interface snapshot.
//!
//! These functions encode the matching policy that decides which
//! interface "wins" when several qualify:
//!
//! - Loopback interfaces never win hardware or IP selection.
//! - Snapshot order breaks ties; the first qualifying record wins.
//! - Name lookup is case-insensitive; the name filters inside hardware
//!   and IP selection are exact, case-sensitive matches.

use crate::iface::{Family, HwAddr, InterfaceRecord};
use std::net::IpAddr;

/// Finds the first record whose name matches `name` case-insensitively.
#[must_use]
pub fn find_by_name<'a>(records: &'a [InterfaceRecord], name: &str) -> Option<&'a InterfaceRecord> {
    records.iter().find(|r| r.name.eq_ignore_ascii_case(name))
}

/// Selects a hardware address from the snapshot.
///
/// With a `name`, the first non-loopback record with that exact name and
/// a hardware address wins. Without one, the first non-loopback record
/// carrying both a hardware address and at least one IP address wins —
/// the first "real" interface.
#[must_use]
pub fn select_hwaddr(records: &[InterfaceRecord], name: Option<&str>) -> Option<HwAddr> {
    records
        .iter()
        .filter(|r| !r.loopback && r.hwaddr.is_some())
        .find(|r| match name {
            Some(name) => r.name == name,
            None => r.has_ip(),
        })
        .and_then(|r| r.hwaddr)
}

/// Selects an IP address from the snapshot.
///
/// Candidates are non-loopback records with at least one IP address,
/// matching `name` exactly when given. The first candidate in snapshot
/// order with an address acceptable to `family` wins; a candidate with
/// no acceptable address is skipped, not terminal. Under [`Family::Any`]
/// a candidate's IPv4 is preferred over its IPv6.
#[must_use]
pub fn select_ip(
    records: &[InterfaceRecord],
    name: Option<&str>,
    family: Family,
) -> Option<IpAddr> {
    records
        .iter()
        .filter(|r| !r.loopback && r.has_ip() && name.is_none_or(|name| r.name == name))
        .find_map(|r| r.ip_for(family))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    fn hw(s: &str) -> HwAddr {
        s.parse().unwrap()
    }

    fn v4(s: &str) -> Ipv4Addr {
        s.parse().unwrap()
    }

    fn v6(s: &str) -> Ipv6Addr {
        s.parse().unwrap()
    }

    fn eth0() -> InterfaceRecord {
        InterfaceRecord::new("eth0")
            .with_hwaddr(hw("aa:bb:cc:dd:ee:ff"))
            .with_ipv4(v4("10.0.0.5"))
    }

    fn lo() -> InterfaceRecord {
        InterfaceRecord::new("lo")
            .loopback()
            .with_ipv4(v4("127.0.0.1"))
    }

    mod find_by_name {
        use super::*;

        #[test]
        fn matches_exact_name() {
            let records = vec![eth0(), lo()];
            assert_eq!(find_by_name(&records, "lo").unwrap().name, "lo");
        }

        #[test]
        fn matches_any_casing() {
            let records = vec![eth0(), lo()];

            assert_eq!(find_by_name(&records, "ETH0").unwrap().name, "eth0");
            assert_eq!(find_by_name(&records, "Eth0").unwrap().name, "eth0");
        }

        #[test]
        fn returns_first_match_in_snapshot_order() {
            let records = vec![
                InterfaceRecord::new("eth0").with_ipv4(v4("10.0.0.1")),
                InterfaceRecord::new("ETH0").with_ipv4(v4("10.0.0.2")),
            ];

            let found = find_by_name(&records, "eth0").unwrap();
            assert_eq!(found.ipv4, Some(v4("10.0.0.1")));
        }

        #[test]
        fn unknown_name_is_none() {
            let records = vec![eth0()];
            assert!(find_by_name(&records, "wlan0").is_none());
        }

        #[test]
        fn finds_loopback_records_too() {
            // Name lookup has no loopback exclusion, unlike address selection
            let records = vec![lo()];
            assert!(find_by_name(&records, "LO").is_some());
        }
    }

    mod select_hwaddr {
        use super::*;

        #[test]
        fn wildcard_picks_first_real_interface() {
            let records = vec![lo(), eth0()];
            assert_eq!(select_hwaddr(&records, None), Some(hw("aa:bb:cc:dd:ee:ff")));
        }

        #[test]
        fn wildcard_skips_loopback() {
            // Even a loopback with a hardware address and an IP never wins
            let records = vec![
                InterfaceRecord::new("lo")
                    .loopback()
                    .with_hwaddr(hw("00:00:00:00:00:00"))
                    .with_ipv4(v4("127.0.0.1")),
            ];
            assert_eq!(select_hwaddr(&records, None), None);
        }

        #[test]
        fn wildcard_requires_an_ip_address() {
            // A link with no IP assigned is not a "real" interface yet
            let down = InterfaceRecord::new("eth1").with_hwaddr(hw("11:22:33:44:55:66"));
            let records = vec![down, eth0()];

            assert_eq!(select_hwaddr(&records, None), Some(hw("aa:bb:cc:dd:ee:ff")));
        }

        #[test]
        fn named_lookup_does_not_require_an_ip() {
            let down = InterfaceRecord::new("eth1").with_hwaddr(hw("11:22:33:44:55:66"));
            let records = vec![down];

            assert_eq!(
                select_hwaddr(&records, Some("eth1")),
                Some(hw("11:22:33:44:55:66"))
            );
        }

        #[test]
        fn named_lookup_is_case_sensitive() {
            let records = vec![eth0()];
            assert_eq!(select_hwaddr(&records, Some("ETH0")), None);
        }

        #[test]
        fn named_lookup_skips_records_without_hwaddr() {
            let records = vec![InterfaceRecord::new("tun0").with_ipv4(v4("10.8.0.1"))];
            assert_eq!(select_hwaddr(&records, Some("tun0")), None);
        }

        #[test]
        fn empty_snapshot_is_none() {
            assert_eq!(select_hwaddr(&[], None), None);
        }
    }

    mod select_ip {
        use super::*;

        #[test]
        fn wildcard_excludes_loopback() {
            let records = vec![lo(), eth0()];
            assert_eq!(
                select_ip(&records, None, Family::Any),
                Some(IpAddr::V4(v4("10.0.0.5")))
            );
        }

        #[test]
        fn only_loopback_is_none() {
            let records = vec![lo()];
            assert_eq!(select_ip(&records, None, Family::Any), None);
        }

        #[test]
        fn v4_request_never_returns_v6() {
            let records = vec![InterfaceRecord::new("eth0").with_ipv6(v6("fe80::1"))];
            assert_eq!(select_ip(&records, None, Family::V4), None);
        }

        #[test]
        fn v6_request_never_returns_v4() {
            let records = vec![eth0()];
            assert_eq!(select_ip(&records, None, Family::V6), None);
        }

        #[test]
        fn v6_request_skips_v4_only_candidate() {
            // A candidate with no acceptable family is skipped, not terminal
            let records = vec![
                eth0(),
                InterfaceRecord::new("eth1").with_ipv6(v6("2001:db8::2")),
            ];

            assert_eq!(
                select_ip(&records, None, Family::V6),
                Some(IpAddr::V6(v6("2001:db8::2")))
            );
        }

        #[test]
        fn any_prefers_v4_within_one_candidate() {
            let records = vec![
                InterfaceRecord::new("eth0")
                    .with_ipv4(v4("10.0.0.5"))
                    .with_ipv6(v6("2001:db8::1")),
            ];

            assert_eq!(
                select_ip(&records, None, Family::Any),
                Some(IpAddr::V4(v4("10.0.0.5")))
            );
        }

        #[test]
        fn any_accepts_v6_only_candidate() {
            let records = vec![InterfaceRecord::new("eth0").with_ipv6(v6("2001:db8::1"))];

            assert_eq!(
                select_ip(&records, None, Family::Any),
                Some(IpAddr::V6(v6("2001:db8::1")))
            );
        }

        #[test]
        fn named_lookup_is_case_sensitive() {
            let records = vec![eth0()];
            assert_eq!(select_ip(&records, Some("ETH0"), Family::Any), None);
        }

        #[test]
        fn named_lookup_filters_candidates() {
            let records = vec![
                eth0(),
                InterfaceRecord::new("eth1").with_ipv4(v4("192.168.1.7")),
            ];

            assert_eq!(
                select_ip(&records, Some("eth1"), Family::Any),
                Some(IpAddr::V4(v4("192.168.1.7")))
            );
        }

        #[test]
        fn first_candidate_in_snapshot_order_wins() {
            let records = vec![
                InterfaceRecord::new("eth0").with_ipv4(v4("10.0.0.5")),
                InterfaceRecord::new("eth1").with_ipv4(v4("192.168.1.7")),
            ];

            assert_eq!(
                select_ip(&records, None, Family::Any),
                Some(IpAddr::V4(v4("10.0.0.5")))
            );
        }
    }
}
