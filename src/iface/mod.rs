//! Interface snapshot model and enumeration backends.
//!
//! This module provides types and traits for:
//! - Representing one interface's snapshot ([`InterfaceRecord`])
//! - Hardware address values ([`HwAddr`])
//! - Address family selection ([`Family`])
//! - Enumerating interfaces ([`InterfaceSource`])
//! - Platform-specific implementations ([`platform`])

mod record;
mod source;
pub mod platform;

pub use record::{Family, HwAddr, InterfaceRecord, ParseHwAddrError};
pub use source::{EnumerateError, InterfaceSource};
