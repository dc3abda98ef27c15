//! Test harness: a gateway backed by fixture files.

use std::net::SocketAddr;
use std::sync::Arc;

use tempfile::TempDir;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tonic::transport::{Channel, Server};
use tonic_health::server::health_reporter;

use amadeus_gateway::middleware::Logged;
use amadeus_gateway::proto::service::amadeus_service_client::AmadeusServiceClient;
use amadeus_gateway::proto::service::amadeus_service_server::AmadeusServiceServer;
use amadeus_gateway::server::AmadeusGrpc;
use amadeus_gateway::service::fixture::FixtureService;
use amadeus_gateway::translate::ResponseEncoder;
use amadeus_gateway::transport::{self, grpc_trace_layer, serve_with_shutdown, TransportConfig};

pub const LOW_FARE_SEARCH: &str = r#"{
  "data": [{
    "type": "flight-offer",
    "id": "1539956390004--540268760",
    "offerItems": [{
      "services": [{
        "segments": [{
          "flightSegment": {
            "departure": {"iataCode": "MAD", "terminal": "4S", "at": "2026-11-02T12:40:00+01:00"},
            "arrival": {"iataCode": "JFK", "terminal": "7", "at": "2026-11-02T15:00:00-05:00"},
            "carrierCode": "IB",
            "number": "6251",
            "aircraft": {"code": "346"},
            "operating": {"carrierCode": "IB", "number": "6251"},
            "duration": "0DT8H20M"
          },
          "pricingDetailPerAdult": {
            "travelClass": "ECONOMY",
            "fareClass": "O",
            "availability": 7,
            "fareBasis": "ODNNEAB5"
          }
        }]
      }],
      "price": {"total": "601.92", "totalTaxes": "143.92"},
      "pricePerAdult": {"total": "601.92", "totalTaxes": "143.92"}
    }]
  }],
  "dictionaries": {
    "carriers": {"IB": "IBERIA"},
    "currencies": {"EUR": "EURO"},
    "aircraft": {"346": "AIRBUS INDUSTRIE A340-600"},
    "locations": {
      "MAD": {"subType": "AIRPORT", "detailedName": "ADOLFO SUAREZ BARAJAS"}
    }
  },
  "meta": {
    "links": {"self": "https://test.api.amadeus.com/v1/shopping/flight-offers?origin=MAD&destination=JFK"},
    "currency": "EUR",
    "defaults": {"adults": 1, "nonStop": false}
  }
}"#;

/// A running gateway. Stopped on drop.
pub struct TestGateway {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
    _fixtures: TempDir,
}

impl TestGateway {
    /// Start a gateway answering from `fixtures` (`(operation name, json)`).
    pub async fn start(fixtures: &[(&str, &str)], encoder: ResponseEncoder) -> Self {
        let dir = tempfile::tempdir().unwrap();
        for (operation, json) in fixtures {
            std::fs::write(dir.path().join(format!("{}.json", operation)), json).unwrap();
        }

        let service = Logged::new(FixtureService::new(dir.path()));
        let (mut health, health_service) = health_reporter();
        health
            .set_serving::<AmadeusServiceServer<AmadeusGrpc<Logged<FixtureService>>>>()
            .await;

        let listener = transport::bind(&TransportConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        })
        .await
        .unwrap();
        let addr = listener.local_addr().unwrap();
        let (shutdown, stopped) = oneshot::channel::<()>();

        let router = Server::builder()
            .layer(grpc_trace_layer())
            .add_service(health_service)
            .add_service(AmadeusGrpc::new(Arc::new(service), encoder).into_server());

        let task = tokio::spawn(async move {
            serve_with_shutdown(router, listener, "amadeus-gateway", async {
                let _ = stopped.await;
            })
            .await
            .unwrap();
        });

        Self {
            addr,
            shutdown: Some(shutdown),
            task: Some(task),
            _fixtures: dir,
        }
    }

    pub async fn channel(&self) -> Channel {
        Channel::from_shared(format!("http://{}", self.addr))
            .unwrap()
            .connect()
            .await
            .unwrap()
    }

    pub async fn client(&self) -> AmadeusServiceClient<Channel> {
        AmadeusServiceClient::new(self.channel().await)
    }

    /// Stop the server and wait for it to exit.
    pub async fn stop(mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(task) = self.task.take() {
            task.await.unwrap();
        }
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
    }
}
