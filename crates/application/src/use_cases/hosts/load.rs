use crate::ports::{HostsSource, ReloadOutcome, ResolutionTablePort};
use hostsdns_domain::{DomainError, HostsSnapshot};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

/// Parses the hosts source and swaps the result into the live table.
pub struct LoadHostsFileUseCase {
    source: Arc<dyn HostsSource>,
    table: Arc<dyn ResolutionTablePort>,
    load_lock: Mutex<()>,
}

impl LoadHostsFileUseCase {
    pub fn new(source: Arc<dyn HostsSource>, table: Arc<dyn ResolutionTablePort>) -> Self {
        Self {
            source,
            table,
            load_lock: Mutex::new(()),
        }
    }

    pub async fn execute(&self) -> Result<ReloadOutcome, DomainError> {
        // Concurrent loads would race on which snapshot lands last.
        let _guard = self.load_lock.lock().await;

        // Stat before reading: an edit landing mid-read leaves the file newer than
        // the stored timestamp and is picked up by the next check.
        let modified_at = self.source.modified_at().await?;
        let parsed = self.source.read_hosts().await?;

        let outcome = ReloadOutcome {
            entries: parsed.table.len(),
            warnings: parsed.warnings.len(),
            source_modified_at: modified_at,
        };

        self.table.replace(HostsSnapshot::new(parsed.table, modified_at));

        info!(
            source = self.source.location(),
            entries = outcome.entries,
            warnings = outcome.warnings,
            "Hosts file loaded"
        );

        Ok(outcome)
    }
}
