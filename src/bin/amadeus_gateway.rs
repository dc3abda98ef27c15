//! amadeus-gateway: gRPC front for the Amadeus flight and airport search API
//!
//! ## Architecture
//! ```text
//! [Client] -> [amadeus-gateway] -> FlightService -> [provider]
//!                   |
//!                   +--> [discovery agent] (optional, TTL heartbeat)
//! ```
//!
//! ## Configuration
//! - `--config <path>` or AMADEUS_CONFIG: YAML configuration file
//! - AMADEUS__<SECTION>__<KEY>: per-key overrides
//! - AMADEUS_LOG: log filter (default: info)
//!
//! Answers come from provider JSON fixtures under `service.fixtures_dir`.

use std::sync::Arc;

use tonic::transport::Server;
use tonic_health::server::health_reporter;
use tracing::{error, info, warn};

use amadeus_gateway::config::Config;
use amadeus_gateway::discovery::{
    register_with_retry, spawn_heartbeat, ConsulAgent, DiscoveryAgent, HeartbeatHandle,
};
use amadeus_gateway::middleware::Logged;
use amadeus_gateway::proto::service::amadeus_service_server::AmadeusServiceServer;
use amadeus_gateway::server::AmadeusGrpc;
use amadeus_gateway::service::fixture::FixtureService;
use amadeus_gateway::translate::ResponseEncoder;
use amadeus_gateway::transport::{self, grpc_trace_layer, serve_with_shutdown};
use amadeus_gateway::utils::bootstrap::{init_tracing, parse_config_path};

type GatewayServer = AmadeusServiceServer<AmadeusGrpc<Logged<FixtureService>>>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = parse_config_path(std::env::args());
    let config = Config::load(config_path.as_deref()).map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    let service_name = config.service.name.clone();
    info!(service = %service_name, "Starting amadeus-gateway");

    let service = Logged::new(FixtureService::new(&config.service.fixtures_dir));
    let encoder = ResponseEncoder::new(config.encoder.layout());
    info!(
        fixtures = %config.service.fixtures_dir.display(),
        dictionary_layout = ?encoder.layout(),
        "Flight service ready"
    );

    let (mut health, health_service) = health_reporter();
    health.set_serving::<GatewayServer>().await;

    let router = Server::builder()
        .layer(grpc_trace_layer())
        .add_service(health_service)
        .add_service(AmadeusGrpc::new(Arc::new(service), encoder).into_server());

    let listener = transport::bind(&config.transport).await?;
    let local_addr = listener.local_addr()?;

    // Discovery
    let mut registration = None;
    let mut heartbeat: Option<HeartbeatHandle> = None;
    let agent: Option<Arc<dyn DiscoveryAgent>> = if config.discovery.enabled {
        let agent: Arc<dyn DiscoveryAgent> =
            Arc::new(ConsulAgent::new(&config.discovery.agent_address)?);
        let reg = config.discovery.registration(&service_name, local_addr.port());
        register_with_retry(agent.as_ref(), &reg).await?;
        heartbeat = Some(spawn_heartbeat(agent.clone(), &reg));
        registration = Some(reg);
        Some(agent)
    } else {
        info!("Discovery disabled");
        None
    };

    let mut heartbeat_failed = false;
    let shutdown = async {
        match heartbeat.as_mut() {
            Some(handle) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => info!("Shutdown signal received"),
                    outcome = handle.wait() => {
                        if let Err(e) = outcome {
                            error!(error = %e, "Heartbeat failed, shutting down");
                            heartbeat_failed = true;
                        }
                    }
                }
            }
            None => {
                let _ = tokio::signal::ctrl_c().await;
                info!("Shutdown signal received");
            }
        }
    };

    let served = serve_with_shutdown(router, listener, &service_name, shutdown).await;

    if let Some(handle) = heartbeat {
        if let Err(e) = handle.join().await {
            heartbeat_failed = true;
            warn!(error = %e, "Heartbeat ended with error");
        }
    }
    if let (Some(agent), Some(reg)) = (agent, registration) {
        match agent.deregister(&reg.name).await {
            Ok(()) => info!(service = %reg.name, "Deregistered from discovery agent"),
            Err(e) => warn!(service = %reg.name, error = %e, "Failed to deregister"),
        }
    }

    served?;
    if heartbeat_failed {
        return Err("heartbeat lost; discovery registration is stale".into());
    }

    info!("amadeus-gateway stopped");
    Ok(())
}
