pub mod hosts_reload;
pub mod runner;

pub use hosts_reload::{HostsReloadJob, ReloadTick};
pub use runner::JobRunner;
