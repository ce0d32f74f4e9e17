use async_trait::async_trait;
use hostsdns_domain::{DomainError, ParsedHosts};
use std::time::SystemTime;

/// Where the hostname mappings come from.
#[async_trait]
pub trait HostsSource: Send + Sync {
    /// Human-readable location, used in logs.
    fn location(&self) -> &str;

    /// Current modification time of the source.
    async fn modified_at(&self) -> Result<SystemTime, DomainError>;

    /// Parse the whole source. Bad lines become warnings, not errors.
    async fn read_hosts(&self) -> Result<ParsedHosts, DomainError>;
}
