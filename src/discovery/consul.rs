//! Consul agent client over the agent's local HTTP API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::{DiscoveryAgent, DiscoveryError, Registration, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ServiceDefinition<'a> {
    #[serde(rename = "ID")]
    id: &'a str,
    name: &'a str,
    address: &'a str,
    port: u16,
    check: TtlCheck,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct TtlCheck {
    #[serde(rename = "TTL")]
    ttl: String,
}

pub struct ConsulAgent {
    client: Client,
    base_url: String,
}

impl ConsulAgent {
    /// Client for the agent at `address` (`host:port` or a full URL).
    pub fn new(address: &str) -> Result<Self> {
        let base_url = if address.starts_with("http://") || address.starts_with("https://") {
            address.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", address)
        };

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| DiscoveryError::Http(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send(&self, path: &str, request: reqwest::RequestBuilder) -> Result<()> {
        let response = request
            .send()
            .await
            .map_err(|e| DiscoveryError::Http(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(path = %path, "Agent request succeeded");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(DiscoveryError::Agent {
            status: status.as_u16(),
            body: body.chars().take(200).collect(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn update_check(&self, state: &str, check_id: &str, note: &str) -> Result<()> {
        let path = format!("/v1/agent/check/{}/{}", state, check_id);
        let mut request = self.client.put(self.url(&path));
        if !note.is_empty() {
            request = request.query(&[("note", note)]);
        }
        self.send(&path, request).await
    }
}

#[async_trait]
impl DiscoveryAgent for ConsulAgent {
    async fn register(&self, registration: &Registration) -> Result<()> {
        let path = "/v1/agent/service/register";
        let definition = ServiceDefinition {
            id: &registration.name,
            name: &registration.name,
            address: &registration.address,
            port: registration.port,
            check: TtlCheck {
                ttl: registration.ttl_string(),
            },
        };
        let request = self.client.put(self.url(path)).json(&definition);
        self.send(path, request).await
    }

    async fn deregister(&self, service_id: &str) -> Result<()> {
        let path = format!("/v1/agent/service/deregister/{}", service_id);
        let request = self.client.put(self.url(&path));
        self.send(&path, request).await
    }

    async fn pass_ttl(&self, check_id: &str, note: &str) -> Result<()> {
        self.update_check("pass", check_id, note).await
    }

    async fn fail_ttl(&self, check_id: &str, note: &str) -> Result<()> {
        self.update_check("fail", check_id, note).await
    }
}
