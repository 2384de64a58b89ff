//! Stub source for platforms without an enumeration backend.

use crate::iface::{EnumerateError, InterfaceRecord, InterfaceSource};

/// Fallback [`InterfaceSource`] that always reports the platform as
/// unsupported.
///
/// Returning an error rather than an empty list lets the cache layer
/// distinguish "no interfaces" from "no backend".
#[derive(Debug, Clone, Default)]
pub struct UnsupportedSource {
    _private: (),
}

impl UnsupportedSource {
    /// Creates a new stub source.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl InterfaceSource for UnsupportedSource {
    fn enumerate(&self) -> Result<Vec<InterfaceRecord>, EnumerateError> {
        Err(EnumerateError::Unsupported {
            platform: std::env::consts::OS,
        })
    }
}
