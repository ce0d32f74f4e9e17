use crate::dns_record::AddressRecord;
use rustc_hash::FxHashMap;
use std::fmt;
use std::time::SystemTime;

/// Hostname to address mapping built from one pass over a hosts file.
///
/// Every hostname is stored twice, bare and with a trailing dot, so that a
/// query for either form resolves identically. Keys are matched exactly and
/// case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsTable {
    entries: FxHashMap<String, AddressRecord>,
}

impl HostsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `hostname` and `hostname.`; a later insert for the same name wins.
    pub fn insert(&mut self, hostname: &str, record: AddressRecord) {
        let bare = hostname.strip_suffix('.').unwrap_or(hostname);
        if bare.is_empty() {
            return;
        }
        self.entries.insert(format!("{}.", bare), record);
        self.entries.insert(bare.to_string(), record);
    }

    pub fn lookup(&self, name: &str) -> Option<&AddressRecord> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of keys, counting the dotted and undotted form separately.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A table together with the modification time of the file it was read from.
///
/// Snapshots are immutable; a reload builds a new one and swaps it in whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostsSnapshot {
    pub table: HostsTable,
    pub source_modified_at: SystemTime,
}

impl HostsSnapshot {
    pub fn new(table: HostsTable, source_modified_at: SystemTime) -> Self {
        Self {
            table,
            source_modified_at,
        }
    }

    /// The snapshot a server holds before its first load. Any real file is newer.
    pub fn empty() -> Self {
        Self::new(HostsTable::new(), SystemTime::UNIX_EPOCH)
    }

    pub fn is_older_than(&self, modified_at: SystemTime) -> bool {
        modified_at > self.source_modified_at
    }
}

impl Default for HostsSnapshot {
    fn default() -> Self {
        Self::empty()
    }
}

/// Non-fatal problem found on a single hosts file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostsWarning {
    /// Fewer than two whitespace-separated fields.
    MalformedEntry { line: usize, content: String },

    /// First field is neither an IPv4 nor an IPv6 literal.
    UnclassifiableAddress { line: usize, address: String },
}

impl HostsWarning {
    pub fn line(&self) -> usize {
        match self {
            HostsWarning::MalformedEntry { line, .. } => *line,
            HostsWarning::UnclassifiableAddress { line, .. } => *line,
        }
    }
}

impl fmt::Display for HostsWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostsWarning::MalformedEntry { line, content } => {
                write!(f, "line {}: invalid hosts file entry: {}", line, content)
            }
            HostsWarning::UnclassifiableAddress { line, address } => {
                write!(f, "line {}: unknown IP address type: {}", line, address)
            }
        }
    }
}

/// Result of parsing a hosts file: the table plus every skipped line.
#[derive(Debug, Clone, Default)]
pub struct ParsedHosts {
    pub table: HostsTable,
    pub warnings: Vec<HostsWarning>,
}
