use crate::ports::{HostsReloadPort, ReloadOutcome};
use crate::use_cases::{CheckHostsModifiedUseCase, LoadHostsFileUseCase};
use async_trait::async_trait;
use hostsdns_domain::DomainError;
use std::sync::Arc;

/// Bundles the load and staleness use cases behind [`HostsReloadPort`].
pub struct HostsReloadService {
    load: Arc<LoadHostsFileUseCase>,
    check_modified: Arc<CheckHostsModifiedUseCase>,
}

impl HostsReloadService {
    pub fn new(
        load: Arc<LoadHostsFileUseCase>,
        check_modified: Arc<CheckHostsModifiedUseCase>,
    ) -> Self {
        Self {
            load,
            check_modified,
        }
    }
}

#[async_trait]
impl HostsReloadPort for HostsReloadService {
    async fn is_hosts_file_modified(&self) -> Result<bool, DomainError> {
        self.check_modified.execute().await
    }

    async fn load_hosts_file(&self) -> Result<ReloadOutcome, DomainError> {
        self.load.execute().await
    }
}
