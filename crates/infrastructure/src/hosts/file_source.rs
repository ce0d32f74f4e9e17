use super::parser::read_hosts_file;
use async_trait::async_trait;
use hostsdns_application::ports::HostsSource;
use hostsdns_domain::{DomainError, ParsedHosts};
use std::io::ErrorKind;
use std::time::SystemTime;
use tokio::fs::{self, OpenOptions};
use tracing::info;

/// Hosts mappings backed by a text file on local disk.
///
/// The file is never locked; external edits are picked up by polling its mtime.
pub struct FileHostsSource {
    path: String,
}

impl FileHostsSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Creates an empty file when nothing exists at the path.
    ///
    /// Returns `true` when a file was created.
    pub async fn ensure_exists(&self) -> Result<bool, DomainError> {
        match fs::metadata(&self.path).await {
            Ok(_) => Ok(false),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                match OpenOptions::new()
                    .write(true)
                    .create_new(true)
                    .open(&self.path)
                    .await
                {
                    Ok(_) => {
                        info!(path = %self.path, "Hosts file created");
                        Ok(true)
                    }
                    Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
                    Err(e) => Err(DomainError::file_access(self.path.clone(), e)),
                }
            }
            Err(e) => Err(DomainError::file_access(self.path.clone(), e)),
        }
    }
}

#[async_trait]
impl HostsSource for FileHostsSource {
    fn location(&self) -> &str {
        &self.path
    }

    async fn modified_at(&self) -> Result<SystemTime, DomainError> {
        let metadata = fs::metadata(&self.path)
            .await
            .map_err(|e| DomainError::file_access(self.path.clone(), e))?;
        metadata
            .modified()
            .map_err(|e| DomainError::file_access(self.path.clone(), e))
    }

    async fn read_hosts(&self) -> Result<ParsedHosts, DomainError> {
        read_hosts_file(&self.path).await
    }
}
