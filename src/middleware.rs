//! Endpoint logging.
//!
//! [`Logged`] wraps any [`FlightService`] and emits one structured event per
//! call with the method name, the serialised input and output, the error and
//! the elapsed time:
//!
//! ```ignore
//! let service = Logged::new(FixtureService::new("fixtures"));
//! ```
//!
//! The event fires on every exit path. If the caller drops the call before
//! it completes, the record is emitted with `error = "cancelled"`.

use std::time::Instant;

use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

use crate::model::{self, Response};
use crate::operation::Operation;
use crate::service::{FlightService, Result};

const NULL: &str = "null";
const CANCELLED: &str = "cancelled";

pub struct Logged<S> {
    inner: S,
}

impl<S> Logged<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<unserializable: {}>", e))
}

/// Pending log record for one call. Emitted by [`CallRecord::finish`] or,
/// failing that, on drop.
struct CallRecord {
    method: Operation,
    input: String,
    start: Instant,
    emitted: bool,
}

impl CallRecord {
    fn start<A: Serialize>(method: Operation, args: &A) -> Self {
        Self {
            method,
            input: to_json(args),
            start: Instant::now(),
            emitted: false,
        }
    }

    fn finish(mut self, result: Result<Response>) -> Result<Response> {
        match &result {
            Ok(response) => self.emit(&to_json(response), ""),
            Err(e) => self.emit(NULL, &e.to_string()),
        }
        result
    }

    fn emit(&mut self, output: &str, error: &str) {
        self.emitted = true;
        let took_ms = self.start.elapsed().as_millis() as u64;
        info!(
            layer = "endpoint",
            method = %self.method,
            input = %self.input,
            output = %output,
            error = %error,
            took_ms,
            "endpoint call"
        );
    }
}

impl Drop for CallRecord {
    fn drop(&mut self) {
        if !self.emitted {
            self.emit(NULL, CANCELLED);
        }
    }
}

#[async_trait]
impl<S: FlightService> FlightService for Logged<S> {
    async fn flight_low_fare_search(
        &self,
        args: model::FlightLowFareSearchRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightLowFareSearch, &args);
        record.finish(self.inner.flight_low_fare_search(args).await)
    }

    async fn flight_inspiration_search(
        &self,
        args: model::FlightInspirationSearchRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightInspirationSearch, &args);
        record.finish(self.inner.flight_inspiration_search(args).await)
    }

    async fn flight_cheapest_date_search(
        &self,
        args: model::FlightCheapestDateSearchRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightCheapestDateSearch, &args);
        record.finish(self.inner.flight_cheapest_date_search(args).await)
    }

    async fn flight_most_searched_destinations(
        &self,
        args: model::FlightMostSearchedDestinationsRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightMostSearchedDestinations, &args);
        record.finish(self.inner.flight_most_searched_destinations(args).await)
    }

    async fn flight_most_searched_by_destination(
        &self,
        args: model::FlightMostSearchedByDestinationRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightMostSearchedByDestination, &args);
        record.finish(self.inner.flight_most_searched_by_destination(args).await)
    }

    async fn flight_check_in_links(
        &self,
        args: model::FlightCheckInLinksRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightCheckInLinks, &args);
        record.finish(self.inner.flight_check_in_links(args).await)
    }

    async fn flight_most_traveled_destinations(
        &self,
        args: model::FlightMostTraveledDestinationsRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightMostTraveledDestinations, &args);
        record.finish(self.inner.flight_most_traveled_destinations(args).await)
    }

    async fn flight_most_booked_destinations(
        &self,
        args: model::FlightMostBookedDestinationsRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightMostBookedDestinations, &args);
        record.finish(self.inner.flight_most_booked_destinations(args).await)
    }

    async fn flight_busiest_traveling_period(
        &self,
        args: model::FlightBusiestTravelingPeriodRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::FlightBusiestTravelingPeriod, &args);
        record.finish(self.inner.flight_busiest_traveling_period(args).await)
    }

    async fn airport_nearest_relevant(
        &self,
        args: model::AirportNearestRelevantRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::AirportNearestRelevant, &args);
        record.finish(self.inner.airport_nearest_relevant(args).await)
    }

    async fn airport_and_city_search(
        &self,
        args: model::AirportAndCitySearchRequest,
    ) -> Result<Response> {
        let record = CallRecord::start(Operation::AirportAndCitySearch, &args);
        record.finish(self.inner.airport_and_city_search(args).await)
    }

    async fn airline_code_lookup(&self, args: model::AirlineCodeLookupRequest) -> Result<Response> {
        let record = CallRecord::start(Operation::AirlineCodeLookup, &args);
        record.finish(self.inner.airline_code_lookup(args).await)
    }
}
