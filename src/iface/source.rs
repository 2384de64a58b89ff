//! Interface enumeration trait and error types.

use super::InterfaceRecord;
use thiserror::Error;

/// Error type for interface enumeration.
///
/// Describes what went wrong without dictating recovery strategy.
/// Callers decide how to handle each error variant.
#[derive(Debug, Error)]
pub enum EnumerateError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// `getifaddrs` call failed (permission, transient OS failure).
    #[cfg(unix)]
    #[error("getifaddrs failed: {0}")]
    Os(#[from] nix::errno::Errno),

    /// No enumeration backend exists for this operating system.
    ///
    /// Distinguishes "no backend" from "no interfaces"; not retryable.
    #[error("interface enumeration is not supported on {platform}")]
    Unsupported {
        /// OS identifier from `std::env::consts::OS`.
        platform: &'static str,
    },

    /// Platform-specific error with a generic message.
    #[error("platform error: {message}")]
    Platform {
        /// Error message describing the platform-specific failure.
        message: String,
    },
}

impl EnumerateError {
    /// Returns true if no backend exists on this platform (not retryable).
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported { .. })
    }
}

/// Trait for enumerating the host's network interfaces.
///
/// # Design
///
/// - The cache layer depends only on this trait
/// - Enables dependency injection for testing with mock implementations
/// - Platform-specific implementations provided in [`super::platform`]
///
/// # Example
///
/// ```ignore
/// use ifpeek::iface::{EnumerateError, InterfaceRecord, InterfaceSource};
///
/// struct MockSource {
///     records: Vec<InterfaceRecord>,
/// }
///
/// impl InterfaceSource for MockSource {
///     fn enumerate(&self) -> Result<Vec<InterfaceRecord>, EnumerateError> {
///         Ok(self.records.clone())
///     }
/// }
/// ```
pub trait InterfaceSource: Send + Sync {
    /// Walks the OS's live interface list and returns one record per
    /// interface, in native enumeration order.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerateError`] when:
    /// - The native call fails (`EnumerateError::WindowsApi` / `EnumerateError::Os`)
    /// - No backend exists for this platform (`EnumerateError::Unsupported`)
    /// - Other platform-specific failures (`EnumerateError::Platform`)
    ///
    /// # Implementation Notes
    ///
    /// - Implementations must return ALL interfaces; selection policy is
    ///   applied by the caller
    /// - Record order is whatever the native facility yields; no re-sorting
    /// - This is a synchronous, potentially slow (I/O-bound) operation
    fn enumerate(&self) -> Result<Vec<InterfaceRecord>, EnumerateError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// A mock source for testing that returns predefined results.
    ///
    /// Uses `Mutex<VecDeque>` to avoid requiring `Clone` on `EnumerateError`.
    struct MockSource {
        results: Mutex<VecDeque<Result<Vec<InterfaceRecord>, EnumerateError>>>,
    }

    impl MockSource {
        fn new(results: Vec<Result<Vec<InterfaceRecord>, EnumerateError>>) -> Self {
            Self {
                results: Mutex::new(results.into()),
            }
        }
    }

    impl InterfaceSource for MockSource {
        fn enumerate(&self) -> Result<Vec<InterfaceRecord>, EnumerateError> {
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(vec![]))
        }
    }

    #[test]
    fn mock_source_returns_predefined_records() {
        let record = InterfaceRecord::new("eth0").with_ipv4("10.0.0.5".parse().unwrap());
        let source = MockSource::new(vec![Ok(vec![record.clone()])]);

        let result = source.enumerate().unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0], record);
    }

    #[test]
    fn mock_source_returns_different_results_on_each_call() {
        let source = MockSource::new(vec![
            Ok(vec![InterfaceRecord::new("eth0")]),
            Ok(vec![InterfaceRecord::new("eth1")]),
        ]);

        let first = source.enumerate().unwrap();
        let second = source.enumerate().unwrap();

        assert_eq!(first[0].name, "eth0");
        assert_eq!(second[0].name, "eth1");
    }

    #[test]
    fn mock_source_can_return_errors() {
        let source = MockSource::new(vec![Err(EnumerateError::Platform {
            message: "test error".to_string(),
        })]);

        let error = source.enumerate().unwrap_err();

        assert!(error.to_string().contains("test error"));
    }

    #[test]
    fn unsupported_is_flagged() {
        let error = EnumerateError::Unsupported { platform: "redox" };

        assert!(error.is_unsupported());
        assert!(error.to_string().contains("redox"));
    }

    #[test]
    fn platform_error_is_not_unsupported() {
        let error = EnumerateError::Platform {
            message: "boom".to_string(),
        };
        assert!(!error.is_unsupported());
    }
}
