#![allow(dead_code)]

use async_trait::async_trait;
use hostsdns_application::ports::{HostsReloadPort, ReloadOutcome};
use hostsdns_domain::DomainError;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, SystemTime};

pub struct MockHostsReloadPort {
    modified: AtomicBool,
    fail_check: AtomicBool,
    fail_load: AtomicBool,
    check_count: AtomicU64,
    load_count: AtomicU64,
}

impl MockHostsReloadPort {
    pub fn new() -> Self {
        Self {
            modified: AtomicBool::new(false),
            fail_check: AtomicBool::new(false),
            fail_load: AtomicBool::new(false),
            check_count: AtomicU64::new(0),
            load_count: AtomicU64::new(0),
        }
    }

    pub fn set_modified(&self, modified: bool) {
        self.modified.store(modified, Ordering::SeqCst);
    }

    pub fn set_fail_check(&self, fail: bool) {
        self.fail_check.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_load(&self, fail: bool) {
        self.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn check_count(&self) -> u64 {
        self.check_count.load(Ordering::SeqCst)
    }

    pub fn load_count(&self) -> u64 {
        self.load_count.load(Ordering::SeqCst)
    }
}

impl Default for MockHostsReloadPort {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostsReloadPort for MockHostsReloadPort {
    async fn is_hosts_file_modified(&self) -> Result<bool, DomainError> {
        self.check_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_check.load(Ordering::SeqCst) {
            return Err(DomainError::file_access("/mock/hostdns", "mock stat failure"));
        }
        Ok(self.modified.load(Ordering::SeqCst))
    }

    async fn load_hosts_file(&self) -> Result<ReloadOutcome, DomainError> {
        self.load_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_load.load(Ordering::SeqCst) {
            return Err(DomainError::scan("/mock/hostdns", "mock read failure"));
        }
        // A successful load catches the table up with the file.
        self.modified.store(false, Ordering::SeqCst);
        Ok(ReloadOutcome {
            entries: 2,
            warnings: 0,
            source_modified_at: SystemTime::UNIX_EPOCH + Duration::from_secs(1000),
        })
    }
}
