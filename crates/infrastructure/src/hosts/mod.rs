pub mod file_source;
pub mod parser;
pub mod table;

pub use file_source::FileHostsSource;
pub use parser::{parse_hosts, read_hosts_file, HostsParser};
pub use table::ResolutionTable;
