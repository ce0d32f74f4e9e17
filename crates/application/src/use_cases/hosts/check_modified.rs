use crate::ports::{HostsSource, ResolutionTablePort};
use hostsdns_domain::DomainError;
use std::sync::Arc;

pub struct CheckHostsModifiedUseCase {
    source: Arc<dyn HostsSource>,
    table: Arc<dyn ResolutionTablePort>,
}

impl CheckHostsModifiedUseCase {
    pub fn new(source: Arc<dyn HostsSource>, table: Arc<dyn ResolutionTablePort>) -> Self {
        Self { source, table }
    }

    /// Compares the source's current mtime against the one the live table was built from.
    pub async fn execute(&self) -> Result<bool, DomainError> {
        let current = self.source.modified_at().await?;
        Ok(self.table.snapshot().is_older_than(current))
    }
}
