use arc_swap::ArcSwap;
use hostsdns_application::ports::ResolutionTablePort;
use hostsdns_domain::{AddressRecord, HostsSnapshot};
use std::sync::Arc;

/// Live resolution table.
///
/// Holds an immutable [`HostsSnapshot`] behind an `ArcSwap`: lookups load the
/// current pointer without locking, `replace` publishes a new one. The table and
/// its timestamp travel together, so no reader can pair one with the other's
/// predecessor.
pub struct ResolutionTable {
    current: ArcSwap<HostsSnapshot>,
}

impl ResolutionTable {
    pub fn new() -> Self {
        Self {
            current: ArcSwap::from_pointee(HostsSnapshot::empty()),
        }
    }

    pub fn len(&self) -> usize {
        self.current.load().table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ResolutionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionTablePort for ResolutionTable {
    #[inline]
    fn lookup(&self, name: &str) -> Option<AddressRecord> {
        self.current.load().table.lookup(name).copied()
    }

    fn snapshot(&self) -> Arc<HostsSnapshot> {
        self.current.load_full()
    }

    fn replace(&self, snapshot: HostsSnapshot) {
        self.current.store(Arc::new(snapshot));
    }
}
