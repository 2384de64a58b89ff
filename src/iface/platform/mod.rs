//! Platform-specific interface enumeration backends.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`InterfaceSource`] trait.
//!
//! # Platform Support
//!
//! - **Unix** (Linux, macOS, the BSDs): uses `getifaddrs` via the `nix` crate.
//! - **Windows**: uses the `GetAdaptersAddresses` API via the `windows` crate.
//! - **Everything else**: a stub that reports [`EnumerateError::Unsupported`].
//!
//! [`InterfaceSource`]: super::InterfaceSource
//! [`EnumerateError::Unsupported`]: super::EnumerateError::Unsupported

#[cfg(unix)]
mod unix;

#[cfg(unix)]
pub use unix::UnixSource;

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsSource;

#[cfg(not(any(unix, windows)))]
mod unsupported;

#[cfg(not(any(unix, windows)))]
pub use unsupported::UnsupportedSource;

// Re-export the selected backend as PlatformSource for convenience
#[cfg(unix)]
pub use unix::UnixSource as PlatformSource;

#[cfg(windows)]
pub use windows::WindowsSource as PlatformSource;

#[cfg(not(any(unix, windows)))]
pub use unsupported::UnsupportedSource as PlatformSource;
