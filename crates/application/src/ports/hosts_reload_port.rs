use async_trait::async_trait;
use hostsdns_domain::DomainError;
use std::time::SystemTime;

/// Outcome of a successful hosts file load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadOutcome {
    pub entries: usize,
    pub warnings: usize,
    pub source_modified_at: SystemTime,
}

/// Port the reload monitor drives.
#[async_trait]
pub trait HostsReloadPort: Send + Sync {
    /// True when the file is strictly newer than the table being served.
    async fn is_hosts_file_modified(&self) -> Result<bool, DomainError>;

    /// Re-parse the file and replace the table. On error the table is untouched.
    async fn load_hosts_file(&self) -> Result<ReloadOutcome, DomainError>;
}
