mod hosts_reload_port;
mod hosts_source;
mod resolution_table;

pub use hosts_reload_port::{HostsReloadPort, ReloadOutcome};
pub use hosts_source::HostsSource;
pub use resolution_table::ResolutionTablePort;
