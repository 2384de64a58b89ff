//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use clap::{Parser, Subcommand};
use ifpeek::iface::Family;

/// ifpeek: query network interfaces
///
/// Enumerates the host's network interfaces and prints their hardware
/// (MAC) and IP addresses.
#[derive(Debug, Parser)]
#[command(name = "ifpeek")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for ifpeek
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all interfaces with their addresses
    List {
        /// Print the snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the hardware (MAC) address of an interface
    ///
    /// Without IFACE, picks the first non-loopback interface that has
    /// both a hardware address and an IP address.
    Hwaddr {
        /// Interface name (exact match)
        iface: Option<String>,
    },
    /// Print an IP address of an interface
    ///
    /// Without IFACE, picks the first non-loopback interface carrying
    /// an address of the requested family.
    Ip {
        /// Interface name (exact match)
        iface: Option<String>,

        /// Select an IPv4 address
        #[arg(short = '4', long = "ipv4", conflicts_with = "ipv6")]
        ipv4: bool,

        /// Select an IPv6 address
        #[arg(short = '6', long = "ipv6")]
        ipv6: bool,
    },
}

impl Cli {
    /// Parses command-line arguments.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Maps the `-4`/`-6` flag pair onto a [`Family`] selector.
///
/// No flag means the wildcard family (IPv4 preferred per candidate).
#[must_use]
pub const fn family_from_flags(ipv4: bool, ipv6: bool) -> Family {
    match (ipv4, ipv6) {
        (true, _) => Family::V4,
        (_, true) => Family::V6,
        _ => Family::Any,
    }
}
