//! ifpeek: cached network interface enumeration
//!
//! A library for enumerating a host's network interfaces and querying
//! their hardware (MAC) and IP addresses, with a process-wide cache to
//! avoid repeated expensive OS queries.

pub mod cache;
pub mod iface;
