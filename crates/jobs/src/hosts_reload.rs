use hostsdns_application::ports::{HostsReloadPort, ReloadOutcome};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 1;

/// What a single monitor tick did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadTick {
    Unchanged,
    Reloaded(ReloadOutcome),
    StatFailed,
    ReloadFailed,
}

/// Polls the hosts file's mtime and reloads the table when it moves forward.
///
/// Every failure is logged and the served table is left as it was; the next
/// tick tries again.
pub struct HostsReloadJob {
    reload: Arc<dyn HostsReloadPort>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl HostsReloadJob {
    pub fn new(reload: Arc<dyn HostsReloadPort>) -> Self {
        Self {
            reload,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting hosts reload job");

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs));
            loop {
                tokio::select! {
                    _ = self.shutdown.cancelled() => {
                        info!("HostsReloadJob: shutting down");
                        break;
                    }
                    _ = interval.tick() => {
                        self.check_and_reload().await;
                    }
                }
            }
        });
    }

    pub async fn check_and_reload(&self) -> ReloadTick {
        match self.reload.is_hosts_file_modified().await {
            Ok(false) => {
                debug!("Hosts file unchanged");
                ReloadTick::Unchanged
            }
            Ok(true) => match self.reload.load_hosts_file().await {
                Ok(outcome) => {
                    info!(
                        entries = outcome.entries,
                        warnings = outcome.warnings,
                        "Hosts file reloaded"
                    );
                    ReloadTick::Reloaded(outcome)
                }
                Err(e) => {
                    error!(error = %e, "Failed to reload hosts file, keeping previous table");
                    ReloadTick::ReloadFailed
                }
            },
            Err(e) => {
                warn!(error = %e, "Failed to check hosts file modification");
                ReloadTick::StatFailed
            }
        }
    }
}
