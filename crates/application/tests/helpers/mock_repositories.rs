#![allow(dead_code)]
use async_trait::async_trait;
use hostsdns_application::ports::{HostsSource, ResolutionTablePort};
use hostsdns_domain::{
    AddressRecord, DomainError, HostsSnapshot, HostsTable, HostsWarning, ParsedHosts,
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::{Duration, SystemTime};

pub struct MockHostsSource {
    entries: RwLock<Vec<(String, String)>>,
    warnings: RwLock<Vec<HostsWarning>>,
    modified_at: RwLock<SystemTime>,
    fail_stat: RwLock<bool>,
    fail_read: RwLock<bool>,
    read_call_count: AtomicU64,
}

impl MockHostsSource {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            warnings: RwLock::new(Vec::new()),
            modified_at: RwLock::new(SystemTime::UNIX_EPOCH + Duration::from_secs(1_000)),
            fail_stat: RwLock::new(false),
            fail_read: RwLock::new(false),
            read_call_count: AtomicU64::new(0),
        }
    }

    pub fn with_entry(self, address: &str, hostname: &str) -> Self {
        self.set_entries(&[(address, hostname)]);
        self
    }

    pub fn set_entries(&self, entries: &[(&str, &str)]) {
        *self.entries.write().unwrap() = entries
            .iter()
            .map(|(a, h)| (a.to_string(), h.to_string()))
            .collect();
    }

    pub fn set_warnings(&self, warnings: Vec<HostsWarning>) {
        *self.warnings.write().unwrap() = warnings;
    }

    pub fn touch(&self, secs: u64) {
        let mut at = self.modified_at.write().unwrap();
        *at += Duration::from_secs(secs);
    }

    pub fn modified_at_value(&self) -> SystemTime {
        *self.modified_at.read().unwrap()
    }

    pub fn set_fail_stat(&self, fail: bool) {
        *self.fail_stat.write().unwrap() = fail;
    }

    pub fn set_fail_read(&self, fail: bool) {
        *self.fail_read.write().unwrap() = fail;
    }

    pub fn read_call_count(&self) -> u64 {
        self.read_call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl HostsSource for MockHostsSource {
    fn location(&self) -> &str {
        "mock://hosts"
    }

    async fn modified_at(&self) -> Result<SystemTime, DomainError> {
        if *self.fail_stat.read().unwrap() {
            return Err(DomainError::file_access("mock://hosts", "mock stat failure"));
        }
        Ok(*self.modified_at.read().unwrap())
    }

    async fn read_hosts(&self) -> Result<ParsedHosts, DomainError> {
        self.read_call_count.fetch_add(1, Ordering::Relaxed);
        if *self.fail_read.read().unwrap() {
            return Err(DomainError::scan("mock://hosts", "mock read failure"));
        }

        let mut table = HostsTable::new();
        for (address, hostname) in self.entries.read().unwrap().iter() {
            if let Some(record) = AddressRecord::parse(address) {
                table.insert(hostname, record);
            }
        }

        Ok(ParsedHosts {
            table,
            warnings: self.warnings.read().unwrap().clone(),
        })
    }
}

pub struct InMemoryResolutionTable {
    current: RwLock<Arc<HostsSnapshot>>,
}

impl InMemoryResolutionTable {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(HostsSnapshot::empty())),
        }
    }
}

impl ResolutionTablePort for InMemoryResolutionTable {
    fn lookup(&self, name: &str) -> Option<AddressRecord> {
        self.current.read().unwrap().table.lookup(name).copied()
    }

    fn snapshot(&self) -> Arc<HostsSnapshot> {
        self.current.read().unwrap().clone()
    }

    fn replace(&self, snapshot: HostsSnapshot) {
        *self.current.write().unwrap() = Arc::new(snapshot);
    }
}
