#![allow(dead_code)]
use hostsdns_domain::{AddressRecord, HostsTable};

pub struct HostsTableBuilder {
    entries: Vec<(String, String)>,
}

impl HostsTableBuilder {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn entry(mut self, address: &str, hostname: &str) -> Self {
        self.entries.push((address.to_string(), hostname.to_string()));
        self
    }

    pub fn build(self) -> HostsTable {
        let mut table = HostsTable::new();
        for (address, hostname) in self.entries {
            let record = AddressRecord::parse(&address).unwrap();
            table.insert(&hostname, record);
        }
        table
    }
}
