//! Test utilities and mock implementations.
//!
//! A recording [`FlightService`] stub and a `tracing` layer that captures
//! events so tests can assert on what was logged.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

use crate::model::{self, Response};
use crate::operation::Operation;
use crate::service::{FlightService, Result, ServiceError};

/// Stub service that records which operations were called.
///
/// Each answer carries one `Data` entry whose `type` is the operation name.
#[derive(Default)]
pub struct RecordingService {
    calls: Mutex<Vec<Operation>>,
    failing: HashSet<Operation>,
    stall: Option<Duration>,
}

impl RecordingService {
    /// Fail every call to `operation` with [`ServiceError::Upstream`].
    pub fn failing(mut self, operation: Operation) -> Self {
        self.failing.insert(operation);
        self
    }

    /// Sleep before answering.
    pub fn stalling(mut self, delay: Duration) -> Self {
        self.stall = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<Operation> {
        self.calls.lock().unwrap().clone()
    }

    async fn answer(&self, operation: Operation) -> Result<Response> {
        self.calls.lock().unwrap().push(operation);
        if let Some(delay) = self.stall {
            tokio::time::sleep(delay).await;
        }
        if self.failing.contains(&operation) {
            return Err(ServiceError::Upstream {
                status: 500,
                message: "provider exploded".to_string(),
            });
        }
        Ok(Response {
            data: vec![model::response::Data {
                r#type: operation.name().to_string(),
                ..Default::default()
            }],
            ..Default::default()
        })
    }
}

#[async_trait]
impl FlightService for RecordingService {
    async fn flight_low_fare_search(
        &self,
        _args: model::FlightLowFareSearchRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightLowFareSearch).await
    }

    async fn flight_inspiration_search(
        &self,
        _args: model::FlightInspirationSearchRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightInspirationSearch).await
    }

    async fn flight_cheapest_date_search(
        &self,
        _args: model::FlightCheapestDateSearchRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightCheapestDateSearch).await
    }

    async fn flight_most_searched_destinations(
        &self,
        _args: model::FlightMostSearchedDestinationsRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightMostSearchedDestinations).await
    }

    async fn flight_most_searched_by_destination(
        &self,
        _args: model::FlightMostSearchedByDestinationRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightMostSearchedByDestination).await
    }

    async fn flight_check_in_links(
        &self,
        _args: model::FlightCheckInLinksRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightCheckInLinks).await
    }

    async fn flight_most_traveled_destinations(
        &self,
        _args: model::FlightMostTraveledDestinationsRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightMostTraveledDestinations).await
    }

    async fn flight_most_booked_destinations(
        &self,
        _args: model::FlightMostBookedDestinationsRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightMostBookedDestinations).await
    }

    async fn flight_busiest_traveling_period(
        &self,
        _args: model::FlightBusiestTravelingPeriodRequest,
    ) -> Result<Response> {
        self.answer(Operation::FlightBusiestTravelingPeriod).await
    }

    async fn airport_nearest_relevant(
        &self,
        _args: model::AirportNearestRelevantRequest,
    ) -> Result<Response> {
        self.answer(Operation::AirportNearestRelevant).await
    }

    async fn airport_and_city_search(
        &self,
        _args: model::AirportAndCitySearchRequest,
    ) -> Result<Response> {
        self.answer(Operation::AirportAndCitySearch).await
    }

    async fn airline_code_lookup(
        &self,
        _args: model::AirlineCodeLookupRequest,
    ) -> Result<Response> {
        self.answer(Operation::AirlineCodeLookup).await
    }
}

/// One captured `tracing` event, fields rendered as strings.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    pub target: String,
    pub fields: HashMap<String, String>,
}

impl CapturedEvent {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

struct FieldVisitor<'a>(&'a mut HashMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0
            .insert(field.name().to_string(), format!("{:?}", value));
    }
}

/// Layer that stores every event it sees.
#[derive(Clone, Default)]
pub struct CaptureLayer {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureLayer {
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Events whose `layer` field equals `layer`.
    pub fn events_in(&self, layer: &str) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.field("layer") == Some(layer))
            .collect()
    }
}

impl<S: Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = HashMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(CapturedEvent {
            target: event.metadata().target().to_string(),
            fields,
        });
    }
}

/// Install a capturing subscriber as the thread default.
///
/// Works with `#[tokio::test]`, which runs on the current thread.
pub fn capture_events() -> (CaptureLayer, tracing::subscriber::DefaultGuard) {
    let layer = CaptureLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    let guard = tracing::subscriber::set_default(subscriber);
    (layer, guard)
}
