//! hostsdns Domain Layer
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod hosts_table;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_record::{AddressRecord, RecordKind};
pub use errors::DomainError;
pub use hosts_table::{HostsSnapshot, HostsTable, HostsWarning, ParsedHosts};
