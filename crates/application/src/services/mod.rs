pub mod hosts_reload_service;

pub use hosts_reload_service::HostsReloadService;
