//! Core value types for interface snapshots.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Address family selector for IP lookups.
///
/// # Design Decision
///
/// `Any` is the wildcard: a lookup accepts whichever family a candidate
/// interface carries, preferring IPv4 over IPv6 within one candidate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Family {
    /// Accept IPv4 addresses only.
    V4,
    /// Accept IPv6 addresses only.
    V6,
    /// Accept either family (IPv4 preferred per candidate).
    #[default]
    Any,
}

impl Family {
    /// Returns true if this selector accepts IPv4.
    #[must_use]
    pub const fn includes_v4(self) -> bool {
        matches!(self, Self::V4 | Self::Any)
    }

    /// Returns true if this selector accepts IPv6.
    #[must_use]
    pub const fn includes_v6(self) -> bool {
        matches!(self, Self::V6 | Self::Any)
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
            Self::Any => write!(f, "Any"),
        }
    }
}

/// Error returned when parsing a [`HwAddr`] from a string fails.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid hardware address: {input}")]
pub struct ParseHwAddrError {
    /// The rejected input.
    pub input: String,
}

/// A six-octet link-layer (MAC) hardware address.
///
/// Displays and serializes as lowercase colon-separated hex
/// (`aa:bb:cc:dd:ee:ff`). Parsing accepts `:` or `-` separators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct HwAddr([u8; 6]);

impl HwAddr {
    /// Creates a hardware address from raw octets.
    #[must_use]
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Returns the raw octets.
    #[must_use]
    pub const fn octets(self) -> [u8; 6] {
        self.0
    }
}

impl From<[u8; 6]> for HwAddr {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for HwAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [b0, b1, b2, b3, b4, b5] = self.0;
        write!(f, "{b0:02x}:{b1:02x}:{b2:02x}:{b3:02x}:{b4:02x}:{b5:02x}")
    }
}

impl FromStr for HwAddr {
    type Err = ParseHwAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; 6];
        let mut parts = s.split(|c: char| c == ':' || c == '-');
        for octet in &mut octets {
            *octet = parts
                .next()
                .and_then(|part| u8::from_str_radix(part, 16).ok())
                .ok_or_else(|| ParseHwAddrError {
                    input: s.to_string(),
                })?;
        }
        if parts.next().is_some() {
            return Err(ParseHwAddrError {
                input: s.to_string(),
            });
        }
        Ok(Self(octets))
    }
}

impl Serialize for HwAddr {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A snapshot of a single network interface at one enumeration moment.
///
/// Address fields are explicit options rather than flag-guarded raw
/// storage: an absent address cannot be read by mistake.
///
/// # Equality
///
/// Two records are equal if every field matches, including the loopback
/// marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterfaceRecord {
    /// Interface name (e.g., "eth0", "Ethernet"). Unique within one
    /// snapshot; the OS may reuse names across reloads.
    pub name: String,
    /// True for virtual loopback interfaces.
    pub loopback: bool,
    /// Link-layer address, if the interface has one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hwaddr: Option<HwAddr>,
    /// First IPv4 address assigned to this interface, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv4: Option<Ipv4Addr>,
    /// First IPv6 address assigned to this interface, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipv6: Option<Ipv6Addr>,
}

impl InterfaceRecord {
    /// Creates a record with the given name and no addresses.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            loopback: false,
            hwaddr: None,
            ipv4: None,
            ipv6: None,
        }
    }

    /// Marks this record as a loopback interface.
    #[must_use]
    pub const fn loopback(mut self) -> Self {
        self.loopback = true;
        self
    }

    /// Sets the hardware address.
    #[must_use]
    pub const fn with_hwaddr(mut self, hwaddr: HwAddr) -> Self {
        self.hwaddr = Some(hwaddr);
        self
    }

    /// Sets the IPv4 address.
    #[must_use]
    pub const fn with_ipv4(mut self, ipv4: Ipv4Addr) -> Self {
        self.ipv4 = Some(ipv4);
        self
    }

    /// Sets the IPv6 address.
    #[must_use]
    pub const fn with_ipv6(mut self, ipv6: Ipv6Addr) -> Self {
        self.ipv6 = Some(ipv6);
        self
    }

    /// Returns true if this interface has any IP address (v4 or v6).
    #[must_use]
    pub const fn has_ip(&self) -> bool {
        self.ipv4.is_some() || self.ipv6.is_some()
    }

    /// Returns this interface's address under the given family selector.
    ///
    /// With [`Family::Any`], IPv4 is preferred and IPv6 is the fallback
    /// within this same record. Returns `None` if no address acceptable
    /// to the selector is present.
    #[must_use]
    pub fn ip_for(&self, family: Family) -> Option<IpAddr> {
        if family.includes_v4() {
            if let Some(ipv4) = self.ipv4 {
                return Some(IpAddr::V4(ipv4));
            }
        }
        if family.includes_v6() {
            if let Some(ipv6) = self.ipv6 {
                return Some(IpAddr::V6(ipv6));
            }
        }
        None
    }
}

impl fmt::Display for InterfaceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if self.loopback {
            write!(f, " [loopback]")?;
        }
        if let Some(hwaddr) = self.hwaddr {
            write!(f, "\n    hwaddr: {hwaddr}")?;
        }
        if let Some(ipv4) = self.ipv4 {
            write!(f, "\n    ipv4: {ipv4}")?;
        }
        if let Some(ipv6) = self.ipv6 {
            write!(f, "\n    ipv6: {ipv6}")?;
        }
        Ok(())
    }
}
