use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HostsConfig {
    /// Mapping file served by this resolver. Not the system `/etc/hosts`.
    #[serde(default = "default_hosts_path")]
    pub path: String,

    /// Seconds between modification checks.
    #[serde(default = "default_reload_interval_secs")]
    pub reload_interval_secs: u64,

    /// Create an empty mapping file at startup when none exists.
    #[serde(default = "default_true")]
    pub create_if_missing: bool,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            path: default_hosts_path(),
            reload_interval_secs: default_reload_interval_secs(),
            create_if_missing: true,
        }
    }
}

fn default_hosts_path() -> String {
    "/etc/hostdns".to_string()
}

fn default_reload_interval_secs() -> u64 {
    1
}

fn default_true() -> bool {
    true
}
