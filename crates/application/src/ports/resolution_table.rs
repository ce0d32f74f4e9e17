use hostsdns_domain::{AddressRecord, HostsSnapshot};
use std::sync::Arc;

/// Live hostname table shared between the query path and the reloader.
pub trait ResolutionTablePort: Send + Sync {
    /// Exact-match lookup against the current snapshot.
    fn lookup(&self, name: &str) -> Option<AddressRecord>;

    /// Current table and its source timestamp, observed as one unit.
    fn snapshot(&self) -> Arc<HostsSnapshot>;

    /// Swap in a new snapshot. Readers see either the old or the new one.
    fn replace(&self, snapshot: HostsSnapshot);
}
