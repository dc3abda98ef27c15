//! Offline provider answering from canned provider JSON.
//!
//! Each operation reads `<dir>/<OperationName>.json` on every call, so
//! fixtures can be edited while the gateway runs.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use super::{FlightService, Result, ServiceError};
use crate::model::{self, Response};
use crate::operation::Operation;

pub struct FixtureService {
    dir: PathBuf,
}

impl FixtureService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, operation: Operation) -> PathBuf {
        self.dir.join(format!("{}.json", operation.name()))
    }

    async fn answer(&self, operation: Operation) -> Result<Response> {
        let path = self.path_for(operation);
        let raw = match tokio::fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ServiceError::NotFound(operation));
            }
            Err(e) => {
                return Err(ServiceError::Fixture {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
            }
        };

        debug!(operation = %operation, path = %path.display(), "Serving fixture");

        serde_json::from_slice(&raw).map_err(|e| ServiceError::Fixture {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl FlightService for FixtureService {
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
