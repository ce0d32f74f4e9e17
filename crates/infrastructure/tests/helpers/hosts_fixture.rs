#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{Name, RecordType};
use hostsdns_infrastructure::dns::DnsCodec;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

/// A hosts file in a private temp dir whose mtime can be pushed forward.
pub struct HostsFixture {
    _dir: TempDir,
    path: PathBuf,
}

impl HostsFixture {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hostdns");
        std::fs::write(&path, content).unwrap();
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &str {
        self.path.to_str().unwrap()
    }

    /// Rewrite the file and move its mtime `secs` seconds past the current one.
    pub fn rewrite(&self, content: &str, secs: u64) {
        let before = std::fs::metadata(&self.path).unwrap().modified().unwrap();
        std::fs::write(&self.path, content).unwrap();
        self.set_modified(before + Duration::from_secs(secs));
    }

    pub fn set_modified(&self, at: SystemTime) {
        OpenOptions::new()
            .write(true)
            .open(&self.path)
            .unwrap()
            .set_modified(at)
            .unwrap();
    }

    pub fn remove(&self) {
        std::fs::remove_file(&self.path).unwrap();
    }
}

pub fn query_packet(id: u16, name: &str, record_type: RecordType) -> Vec<u8> {
    let mut message = Message::new(id, MessageType::Query, OpCode::Query);
    message.set_recursion_desired(true);
    message.add_query(Query::query(Name::from_str(name).unwrap(), record_type));
    DnsCodec::encode(&message).unwrap()
}
