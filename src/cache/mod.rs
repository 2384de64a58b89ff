//! Interface cache with reload-or-reuse semantics and the process-wide
//! shared instance.
//!
//! This module provides:
//! - The snapshot cache ([`InterfaceCache`])
//! - Stateless selection algorithms ([`select`])
//! - The lazily-created process-wide cache ([`shared`])

pub mod select;

use std::net::IpAddr;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::iface::platform::PlatformSource;
use crate::iface::{EnumerateError, Family, HwAddr, InterfaceRecord, InterfaceSource};

/// Cache of the host's interface snapshot.
///
/// Owns the sequence of [`InterfaceRecord`]s produced by the backend and
/// decides when to re-enumerate. Reloading replaces the whole snapshot
/// atomically: the new sequence is built off to the side and published
/// with a single swap, so concurrent readers see either the old or the
/// new snapshot, never a mix. Readers hold an [`Arc`] to the snapshot
/// they observed, which a later reload cannot invalidate.
///
/// # Type Parameters
///
/// * `S` - The [`InterfaceSource`] backend (defaults to [`PlatformSource`])
///
/// # Example
///
/// ```no_run
/// use ifpeek::cache::InterfaceCache;
/// use ifpeek::iface::Family;
///
/// let cache = InterfaceCache::new();
/// if let Some(ip) = cache.ip_address(None, Family::V4, false).unwrap() {
///     println!("{ip}");
/// }
/// ```
pub struct InterfaceCache<S = PlatformSource> {
    source: S,
    records: RwLock<Arc<Vec<InterfaceRecord>>>,
}

impl InterfaceCache<PlatformSource> {
    /// Creates an empty cache backed by this platform's native source.
    ///
    /// No enumeration happens here; the first query populates the cache.
    #[must_use]
    pub fn new() -> Self {
        Self::with_source(PlatformSource::new())
    }
}

impl Default for InterfaceCache<PlatformSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> InterfaceCache<S>
where
    S: InterfaceSource,
{
    /// Creates an empty cache with a custom backend.
    ///
    /// This constructor allows injecting a mock source for testing.
    #[must_use]
    pub fn with_source(source: S) -> Self {
        Self {
            source,
            records: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Returns the current snapshot, re-enumerating when required.
    ///
    /// If `reload` is false and a non-empty snapshot is stored, that
    /// snapshot is returned unchanged. If `reload` is true, or nothing
    /// has been stored yet, or the stored snapshot is empty, the backend
    /// runs and its result replaces the stored snapshot.
    ///
    /// Enumeration is a synchronous, potentially slow operation; the
    /// caller blocks for its duration.
    ///
    /// # Errors
    ///
    /// Propagates [`EnumerateError`] from the backend. The stored
    /// snapshot is left untouched on failure.
    pub fn snapshot(&self, reload: bool) -> Result<Arc<Vec<InterfaceRecord>>, EnumerateError> {
        if !reload {
            let current = Arc::clone(&self.records.read());
            if !current.is_empty() {
                return Ok(current);
            }
        }

        let fresh = Arc::new(self.source.enumerate()?);
        *self.records.write() = Arc::clone(&fresh);
        tracing::debug!(interfaces = fresh.len(), "snapshot reloaded");
        Ok(fresh)
    }

    /// Snapshot access for queries: one forced retry before accepting an
    /// empty snapshot as final, but only on the non-forced path.
    ///
    /// Guards against a transient zero-interface enumeration on first use.
    fn loaded(&self, reload: bool) -> Result<Arc<Vec<InterfaceRecord>>, EnumerateError> {
        let snapshot = self.snapshot(reload)?;
        if !reload && snapshot.is_empty() {
            return self.snapshot(true);
        }
        Ok(snapshot)
    }

    /// Looks up an interface by name, case-insensitively.
    ///
    /// Returns an independent copy of the first matching record in
    /// snapshot order, or `Ok(None)` if no interface has that name.
    ///
    /// # Errors
    ///
    /// Propagates [`EnumerateError`] when the snapshot must be (re)loaded
    /// and the backend fails.
    pub fn interface(
        &self,
        name: &str,
        reload: bool,
    ) -> Result<Option<InterfaceRecord>, EnumerateError> {
        let snapshot = self.loaded(reload)?;
        Ok(select::find_by_name(&snapshot, name).cloned())
    }

    /// Selects a hardware address; see [`select::select_hwaddr`] for the
    /// matching policy.
    ///
    /// # Errors
    ///
    /// Propagates [`EnumerateError`] when the snapshot must be (re)loaded
    /// and the backend fails.
    pub fn hardware_address(
        &self,
        name: Option<&str>,
        reload: bool,
    ) -> Result<Option<HwAddr>, EnumerateError> {
        let snapshot = self.loaded(reload)?;
        Ok(select::select_hwaddr(&snapshot, name))
    }

    /// Selects an IP address; see [`select::select_ip`] for the matching
    /// policy.
    ///
    /// # Errors
    ///
    /// Propagates [`EnumerateError`] when the snapshot must be (re)loaded
    /// and the backend fails.
    pub fn ip_address(
        &self,
        name: Option<&str>,
        family: Family,
        reload: bool,
    ) -> Result<Option<IpAddr>, EnumerateError> {
        let snapshot = self.loaded(reload)?;
        Ok(select::select_ip(&snapshot, name, family))
    }

    /// Logs every interface in a freshly reloaded snapshot.
    ///
    /// Diagnostic aid; enumeration failures are logged, not returned.
    pub fn dump(&self) {
        match self.snapshot(true) {
            Ok(snapshot) => {
                for record in snapshot.iter() {
                    tracing::info!("{record}");
                }
            }
            Err(error) => tracing::warn!("interface dump failed: {error}"),
        }
    }
}

static SHARED: OnceLock<InterfaceCache> = OnceLock::new();

/// Returns the process-wide shared cache, creating it on first access.
///
/// Construction is thread-safe and happens at most once; the cache
/// starts empty and is populated lazily by the first query. The backends
/// hold no OS resources between calls, so nothing needs explicit
/// teardown at process exit.
pub fn shared() -> &'static InterfaceCache {
    SHARED.get_or_init(InterfaceCache::new)
}
