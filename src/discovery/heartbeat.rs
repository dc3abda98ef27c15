//! TTL heartbeat.
//!
//! Every `ttl / 2` the task reports the check as failing and then passing,
//! so the agent sees a fresh transition each period. A failed "fail" report
//! is only logged. A failed "pass" report ends the task with an error and
//! the owner decides how to shut down.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use super::{DiscoveryAgent, DiscoveryError, Registration, Result};

const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Owner side of a running heartbeat.
pub struct HeartbeatHandle {
    stop: watch::Sender<bool>,
    task: JoinHandle<Result<()>>,
    outcome: Option<Result<()>>,
}

impl HeartbeatHandle {
    /// Ask the task to stop. It exits at its next wake-up.
    pub fn stop(&self) {
        let _ = self.stop.send(true);
    }

    /// Wait for the task to end on its own. Cancel-safe.
    pub async fn wait(&mut self) -> Result<()> {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }
        let outcome = match (&mut self.task).await {
            Ok(result) => result,
            Err(e) => Err(DiscoveryError::Heartbeat(e.to_string())),
        };
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Stop the task and return how it ended.
    pub async fn join(mut self) -> Result<()> {
        self.stop();
        self.wait().await
    }
}

/// Start the heartbeat for `registration`.
pub fn spawn_heartbeat(
    agent: Arc<dyn DiscoveryAgent>,
    registration: &Registration,
) -> HeartbeatHandle {
    let (stop, stopped) = watch::channel(false);
    let check_id = registration.check_id();
    let period = (registration.ttl / 2).max(MIN_PERIOD);

    let task = tokio::spawn(run(agent, check_id, period, stopped));

    HeartbeatHandle {
        stop,
        task,
        outcome: None,
    }
}

async fn run(
    agent: Arc<dyn DiscoveryAgent>,
    check_id: String,
    period: Duration,
    mut stopped: watch::Receiver<bool>,
) -> Result<()> {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately; the check was just registered.
    ticker.tick().await;

    info!(check = %check_id, period = ?period, "Heartbeat started");

    loop {
        tokio::select! {
            changed = stopped.changed() => {
                if changed.is_err() || *stopped.borrow() {
                    info!(check = %check_id, "Heartbeat stopped");
                    return Ok(());
                }
            }
            _ = ticker.tick() => {
                if let Err(e) = agent.fail_ttl(&check_id, "").await {
                    warn!(check = %check_id, error = %e, "Failed to report failing status");
                }
                if let Err(e) = agent.pass_ttl(&check_id, "").await {
                    error!(check = %check_id, error = %e, "Failed to report passing status");
                    return Err(e);
                }
            }
        }
    }
}
