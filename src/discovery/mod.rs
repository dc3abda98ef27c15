//! Service registration with a discovery agent.
//!
//! The gateway registers itself with a TTL health check and keeps it alive
//! with a [`heartbeat`] task. [`consul::ConsulAgent`] talks to a local Consul
//! agent; tests use an in-memory agent.

pub mod consul;
pub mod heartbeat;

use std::time::Duration;

use async_trait::async_trait;
use backon::Retryable;
use tracing::{info, warn};

use crate::utils::retry::registration_backoff;

pub use consul::ConsulAgent;
pub use heartbeat::{spawn_heartbeat, HeartbeatHandle};

/// Result type for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoveryError>;

/// Errors that can occur while talking to the discovery agent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiscoveryError {
    #[error("Agent request failed: {0}")]
    Http(String),

    #[error("Agent returned {status}: {body}")]
    Agent { status: u16, body: String },

    #[error("Heartbeat task failed: {0}")]
    Heartbeat(String),
}

impl DiscoveryError {
    /// Transport failures and agent-side 5xx answers are worth retrying.
    pub fn is_retryable(&self) -> bool {
        match self {
            DiscoveryError::Http(_) => true,
            DiscoveryError::Agent { status, .. } => *status >= 500,
            DiscoveryError::Heartbeat(_) => false,
        }
    }
}

/// A service instance as announced to the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub name: String,
    pub address: String,
    pub port: u16,
    pub ttl: Duration,
}

impl Registration {
    /// Id of the TTL check the agent creates for this service.
    pub fn check_id(&self) -> String {
        format!("service:{}", self.name)
    }

    /// TTL as a duration string understood by the agent.
    pub fn ttl_string(&self) -> String {
        format!("{}ms", self.ttl.as_millis())
    }
}

/// Local control API of a discovery agent.
#[async_trait]
pub trait DiscoveryAgent: Send + Sync {
    async fn register(&self, registration: &Registration) -> Result<()>;

    async fn deregister(&self, service_id: &str) -> Result<()>;

    /// Mark a TTL check as passing.
    async fn pass_ttl(&self, check_id: &str, note: &str) -> Result<()>;

    /// Mark a TTL check as failing.
    async fn fail_ttl(&self, check_id: &str, note: &str) -> Result<()>;
}

/// Register with backoff on transient agent failures.
pub async fn register_with_retry(
    agent: &dyn DiscoveryAgent,
    registration: &Registration,
) -> Result<()> {
    (|| async { agent.register(registration).await })
        .retry(registration_backoff())
        .when(DiscoveryError::is_retryable)
        .notify(|err: &DiscoveryError, dur: Duration| {
            warn!(
                service = %registration.name,
                error = %err,
                delay = ?dur,
                "Registration failed, retrying"
            );
        })
        .await?;

    info!(
        service = %registration.name,
        address = %registration.address,
        port = registration.port,
        ttl = %registration.ttl_string(),
        "Registered with discovery agent"
    );
    Ok(())
}

#[cfg(test)]
pub(crate) mod mock {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use super::*;

    /// One recorded agent call.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum AgentCall {
        Register(String),
        Deregister(String),
        Pass(String),
        Fail(String),
    }

    /// In-memory agent recording calls, with injectable failures.
    #[derive(Default)]
    pub struct MockAgent {
        calls: Mutex<Vec<AgentCall>>,
        failing_registrations: AtomicUsize,
        fail_pass: bool,
        fail_fail: bool,
    }

    impl MockAgent {
        /// Reject the next `count` registrations with a 500.
        pub fn with_failing_registrations(self, count: usize) -> Self {
            self.failing_registrations.store(count, Ordering::SeqCst);
            self
        }

        pub fn with_failing_pass(mut self) -> Self {
            self.fail_pass = true;
            self
        }

        pub fn with_failing_fail(mut self) -> Self {
            self.fail_fail = true;
            self
        }

        pub fn calls(&self) -> Vec<AgentCall> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: AgentCall) {
            self.calls.lock().unwrap().push(call);
        }

        fn unavailable() -> DiscoveryError {
            DiscoveryError::Agent {
                status: 500,
                body: "agent unavailable".to_string(),
            }
        }
    }

    #[async_trait]
    impl DiscoveryAgent for MockAgent {
        async fn register(&self, registration: &Registration) -> Result<()> {
            self.record(AgentCall::Register(registration.name.clone()));
            let remaining = self.failing_registrations.load(Ordering::SeqCst);
            if remaining > 0 {
                self.failing_registrations
                    .store(remaining - 1, Ordering::SeqCst);
                return Err(Self::unavailable());
            }
            Ok(())
        }

        async fn deregister(&self, service_id: &str) -> Result<()> {
            self.record(AgentCall::Deregister(service_id.to_string()));
            Ok(())
        }

        async fn pass_ttl(&self, check_id: &str, _note: &str) -> Result<()> {
            self.record(AgentCall::Pass(check_id.to_string()));
            if self.fail_pass {
                return Err(Self::unavailable());
            }
            Ok(())
        }

        async fn fail_ttl(&self, check_id: &str, _note: &str) -> Result<()> {
            self.record(AgentCall::Fail(check_id.to_string()));
            if self.fail_fail {
                return Err(Self::unavailable());
            }
            Ok(())
        }
    }
}
