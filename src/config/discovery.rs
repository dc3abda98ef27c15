//! Discovery agent configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::discovery::Registration;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    pub enabled: bool,
    /// Agent HTTP API, `host:port` or URL.
    pub agent_address: String,
    /// Registered name. Falls back to `service.name` when unset.
    pub service_name: Option<String>,
    /// Address other services use to reach this instance.
    pub advertise_address: String,
    pub ttl_secs: u64,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            agent_address: "127.0.0.1:8500".to_string(),
            service_name: None,
            advertise_address: "127.0.0.1".to_string(),
            ttl_secs: 15,
        }
    }
}

impl DiscoveryConfig {
    /// Registration for an instance listening on `port`.
    pub fn registration(&self, default_name: &str, port: u16) -> Registration {
        Registration {
            name: self
                .service_name
                .clone()
                .unwrap_or_else(|| default_name.to_string()),
            address: self.advertise_address.clone(),
            port,
            ttl: Duration::from_secs(self.ttl_secs),
        }
    }
}
