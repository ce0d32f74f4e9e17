use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Attach a zeroed A record (root name, TTL 0, 0.0.0.0) to NXDOMAIN answers.
    ///
    /// Off by default: NXDOMAIN responses carry an empty answer section.
    #[serde(default)]
    pub nxdomain_placeholder: bool,
}
