//! Windows interface enumeration using `GetAdaptersAddresses`.

use crate::iface::{EnumerateError, HwAddr, InterfaceRecord, InterfaceSource};
use std::net::{Ipv4Addr, Ipv6Addr};
use windows::Win32::Foundation::WIN32_ERROR;
use windows::Win32::NetworkManagement::IpHelper::{
    GAA_FLAG_SKIP_ANYCAST, GAA_FLAG_SKIP_DNS_SERVER, GAA_FLAG_SKIP_MULTICAST, GetAdaptersAddresses,
    IF_TYPE_SOFTWARE_LOOPBACK, IP_ADAPTER_ADDRESSES_LH,
};
use windows::Win32::Networking::WinSock::{
    AF_INET, AF_INET6, AF_UNSPEC, SOCKADDR_IN, SOCKADDR_IN6,
};

/// Buffer size hint for `GetAdaptersAddresses`.
/// The API will tell us the actual required size if this is insufficient.
const INITIAL_BUFFER_SIZE: u32 = 16384;

/// Windows implementation of [`InterfaceSource`] using `GetAdaptersAddresses`.
///
/// Retrieves every adapter with its physical (MAC) address and the first
/// unicast address of each IP family from the Windows networking stack.
///
/// # Example
///
/// ```no_run
/// use ifpeek::iface::{InterfaceSource, platform::WindowsSource};
///
/// let source = WindowsSource::new();
/// for record in source.enumerate().expect("enumeration failed") {
///     println!("{record}");
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct WindowsSource {
    // Currently no configuration needed, but struct allows future extension
    _private: (),
}

impl WindowsSource {
    /// Creates a new Windows interface source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for WindowsSource {
    fn enumerate(&self) -> Result<Vec<InterfaceRecord>, EnumerateError> {
        collect_interfaces()
    }
}

/// Walks the adapter list returned by `GetAdaptersAddresses`.
fn collect_interfaces() -> Result<Vec<InterfaceRecord>, EnumerateError> {
    let raw_adapters = get_adapter_addresses()?;

    let mut records = Vec::new();
    // SAFETY: GetAdaptersAddresses returns a properly aligned buffer for
    // IP_ADAPTER_ADDRESSES_LH. The Windows API guarantees alignment of the
    // returned data structures.
    #[allow(clippy::cast_ptr_alignment)]
    let mut current = raw_adapters.as_ptr().cast::<IP_ADAPTER_ADDRESSES_LH>();

    // SAFETY: We iterate through a linked list returned by GetAdaptersAddresses.
    // The list is valid as long as the buffer (`raw_adapters`) is alive.
    while !current.is_null() {
        let adapter = unsafe { &*current };

        if let Some(record) = parse_adapter(adapter) {
            records.push(record);
        }

        current = adapter.Next;
    }

    Ok(records)
}

/// Calls `GetAdaptersAddresses` and returns the raw buffer containing adapter data.
///
/// This function handles the two-call pattern:
/// 1. First call with estimated buffer size
/// 2. Retry with exact size if buffer was too small
fn get_adapter_addresses() -> Result<Vec<u8>, EnumerateError> {
    // Flags to skip data we don't need (anycast, multicast, DNS servers)
    let flags = GAA_FLAG_SKIP_ANYCAST | GAA_FLAG_SKIP_MULTICAST | GAA_FLAG_SKIP_DNS_SERVER;
    let family = u32::from(AF_UNSPEC.0); // Get both IPv4 and IPv6

    let mut buffer: Vec<u8> = vec![0u8; INITIAL_BUFFER_SIZE as usize];
    let mut size = INITIAL_BUFFER_SIZE;

    // SAFETY: We provide a valid buffer and size. The function writes adapter
    // information to the buffer and updates `size` with the required length.
    let result = unsafe {
        GetAdaptersAddresses(
            family,
            flags,
            None,
            Some(buffer.as_mut_ptr().cast()),
            &raw mut size,
        )
    };

    handle_api_result(result, &mut buffer, &mut size, flags, family)?;

    Ok(buffer)
}

/// Handles the result of `GetAdaptersAddresses`, potentially retrying with a larger buffer.
fn handle_api_result(
    result: u32,
    buffer: &mut Vec<u8>,
    size: &mut u32,
    flags: windows::Win32::NetworkManagement::IpHelper::GET_ADAPTERS_ADDRESSES_FLAGS,
    family: u32,
) -> Result<(), EnumerateError> {
    use windows::Win32::Foundation::{ERROR_BUFFER_OVERFLOW, NO_ERROR};

    if result == ERROR_BUFFER_OVERFLOW.0 {
        buffer.resize(*size as usize, 0);

        // SAFETY: Same as above, but with correctly sized buffer
        let result = unsafe {
            GetAdaptersAddresses(
                family,
                flags,
                None,
                Some(buffer.as_mut_ptr().cast()),
                &raw mut *size,
            )
        };

        if result != NO_ERROR.0 {
            return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
        }
    } else if result != NO_ERROR.0 {
        return Err(windows::core::Error::from(WIN32_ERROR(result)).into());
    }

    Ok(())
}

/// Parses a single `IP_ADAPTER_ADDRESSES_LH` structure into an [`InterfaceRecord`].
///
/// Returns `None` if the adapter name cannot be read.
fn parse_adapter(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<InterfaceRecord> {
    // Get the friendly name (wide string)
    let name = unsafe { adapter.FriendlyName.to_string().ok()? };

    let mut record = InterfaceRecord::new(name);
    if adapter.IfType == IF_TYPE_SOFTWARE_LOOPBACK {
        record = record.loopback();
    }

    if let Some(hwaddr) = physical_address(adapter) {
        record = record.with_hwaddr(hwaddr);
    }

    let (ipv4, ipv6) = first_unicast_addresses(adapter);
    record.ipv4 = ipv4;
    record.ipv6 = ipv6;

    Some(record)
}

/// Extracts the adapter's physical (MAC) address, if it has one.
///
/// Loopback and tunnel adapters report a zero-length physical address.
fn physical_address(adapter: &IP_ADAPTER_ADDRESSES_LH) -> Option<HwAddr> {
    if adapter.PhysicalAddressLength != 6 {
        return None;
    }
    let mut octets = [0u8; 6];
    octets.copy_from_slice(&adapter.PhysicalAddress[..6]);
    Some(HwAddr::new(octets))
}

/// Collects the first IPv4 and first IPv6 unicast address from an adapter.
///
/// # Safety Note
///
/// The pointer casts to `SOCKADDR_IN` and `SOCKADDR_IN6` are allowed despite
/// alignment concerns because Windows guarantees proper alignment of these
/// structures when returned from the networking APIs.
#[allow(clippy::cast_ptr_alignment)]
fn first_unicast_addresses(
    adapter: &IP_ADAPTER_ADDRESSES_LH,
) -> (Option<Ipv4Addr>, Option<Ipv6Addr>) {
    let mut ipv4 = None;
    let mut ipv6 = None;

    let mut unicast = adapter.FirstUnicastAddress;

    // SAFETY: We iterate through a linked list of unicast addresses.
    // Each address is valid as long as the parent adapter buffer is alive.
    while !unicast.is_null() {
        let addr_entry = unsafe { &*unicast };

        // SAFETY: The Address field contains a valid SOCKET_ADDRESS structure
        // pointing to either SOCKADDR_IN (IPv4) or SOCKADDR_IN6 (IPv6).
        if let Some(sockaddr) = unsafe { addr_entry.Address.lpSockaddr.as_ref() } {
            match sockaddr.sa_family {
                f if f == AF_INET && ipv4.is_none() => {
                    // SAFETY: We verified the family is AF_INET, so this is a valid cast.
                    let sockaddr_in =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN>()) };
                    // SAFETY: sin_addr contains the IPv4 address bytes in network order.
                    let octets = unsafe { sockaddr_in.sin_addr.S_un.S_un_b };
                    ipv4 = Some(Ipv4Addr::new(
                        octets.s_b1,
                        octets.s_b2,
                        octets.s_b3,
                        octets.s_b4,
                    ));
                }
                f if f == AF_INET6 && ipv6.is_none() => {
                    // SAFETY: We verified the family is AF_INET6, so this is a valid cast.
                    let sockaddr_in6 =
                        unsafe { &*(std::ptr::from_ref(sockaddr).cast::<SOCKADDR_IN6>()) };
                    // SAFETY: We verified this is an IPv6 address, so the union field is valid.
                    let octets = unsafe { sockaddr_in6.sin6_addr.u.Byte };
                    ipv6 = Some(Ipv6Addr::from(octets));
                }
                _ => {}
            }
        }

        unicast = unsafe { (*unicast).Next };
    }

    (ipv4, ipv6)
}
