//! POSIX interface enumeration using `getifaddrs`.

use crate::iface::{EnumerateError, HwAddr, InterfaceRecord, InterfaceSource};
use nix::ifaddrs::getifaddrs;
use nix::net::if_::InterfaceFlags;
use nix::sys::socket::SockaddrStorage;

/// POSIX implementation of [`InterfaceSource`] using `getifaddrs`.
///
/// `getifaddrs` yields one entry per (interface, address family) pair;
/// this source merges the entries into one record per interface name,
/// preserving first-seen enumeration order.
///
/// # Example
///
/// ```no_run
/// use ifpeek::iface::{InterfaceSource, platform::UnixSource};
///
/// let source = UnixSource::new();
/// for record in source.enumerate().expect("enumeration failed") {
///     println!("{record}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct UnixSource {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl UnixSource {
    /// Creates a new POSIX interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for UnixSource {
    fn enumerate(&self) -> Result<Vec<InterfaceRecord>, EnumerateError> {
        collect_interfaces()
    }
}

/// Walks the `getifaddrs` list and folds it into per-interface records.
fn collect_interfaces() -> Result<Vec<InterfaceRecord>, EnumerateError> {
    let mut records: Vec<InterfaceRecord> = Vec::new();

    for entry in getifaddrs()? {
        let index = match records.iter().position(|r| r.name == entry.interface_name) {
            Some(index) => index,
            None => {
                let mut record = InterfaceRecord::new(entry.interface_name.clone());
                if entry.flags.contains(InterfaceFlags::IFF_LOOPBACK) {
                    record = record.loopback();
                }
                records.push(record);
                records.len() - 1
            }
        };

        if let Some(address) = &entry.address {
            merge_address(&mut records[index], address);
        }
    }

    Ok(records)
}

/// Folds one sockaddr into its interface record.
///
/// The first address seen for each family wins; later entries for the
/// same (interface, family) pair are ignored.
fn merge_address(record: &mut InterfaceRecord, address: &SockaddrStorage) {
    if let Some(sin) = address.as_sockaddr_in() {
        if record.ipv4.is_none() {
            record.ipv4 = Some(sin.ip());
        }
    } else if let Some(sin6) = address.as_sockaddr_in6() {
        if record.ipv6.is_none() {
            record.ipv6 = Some(sin6.ip());
        }
    } else if let Some(link) = address.as_link_addr() {
        // AF_PACKET on Linux, AF_LINK on the BSDs/macOS
        if record.hwaddr.is_none() {
            if let Some(octets) = link.addr() {
                record.hwaddr = Some(HwAddr::new(octets));
            }
        }
    }
}
