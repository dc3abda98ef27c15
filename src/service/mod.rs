//! Flight service interface.
//!
//! The gateway never talks to the provider itself. Everything behind
//! [`FlightService`] is a collaborator: the HTTP client in production, the
//! [`fixture::FixtureService`] offline, or a stub in tests.

pub mod fixture;

use async_trait::async_trait;
use tonic::Status;

use crate::model::{self, Response};
use crate::operation::{Operation, ServiceRequest};

/// Result type for flight service calls.
pub type Result<T> = std::result::Result<T, ServiceError>;

/// Errors that can occur while answering an operation.
///
/// Provider-reported problems normally travel inside
/// [`Response::errors`]; these are the failures that prevent a response from
/// being produced at all.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    #[error("Provider returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Operation not supported: {0}")]
    NotFound(Operation),

    #[error("Fixture {path}: {message}")]
    Fixture { path: String, message: String },
}

impl From<ServiceError> for Status {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unavailable(_) => Status::unavailable(err.to_string()),
            ServiceError::Upstream { .. } => Status::internal(err.to_string()),
            ServiceError::NotFound(_) => Status::unimplemented(err.to_string()),
            ServiceError::Fixture { .. } => Status::internal(err.to_string()),
        }
    }
}

/// One method per operation, each answering with the provider-shaped
/// [`Response`].
#[async_trait]
pub trait FlightService: Send + Sync {
    async fn flight_low_fare_search(
        &self,
        args: model::FlightLowFareSearchRequest,
    ) -> Result<Response>;

    async fn flight_inspiration_search(
        &self,
        args: model::FlightInspirationSearchRequest,
    ) -> Result<Response>;

    async fn flight_cheapest_date_search(
        &self,
        args: model::FlightCheapestDateSearchRequest,
    ) -> Result<Response>;

    async fn flight_most_searched_destinations(
        &self,
        args: model::FlightMostSearchedDestinationsRequest,
    ) -> Result<Response>;

    async fn flight_most_searched_by_destination(
        &self,
        args: model::FlightMostSearchedByDestinationRequest,
    ) -> Result<Response>;

    async fn flight_check_in_links(&self, args: model::FlightCheckInLinksRequest)
        -> Result<Response>;

    async fn flight_most_traveled_destinations(
        &self,
        args: model::FlightMostTraveledDestinationsRequest,
    ) -> Result<Response>;

    async fn flight_most_booked_destinations(
        &self,
        args: model::FlightMostBookedDestinationsRequest,
    ) -> Result<Response>;

    async fn flight_busiest_traveling_period(
        &self,
        args: model::FlightBusiestTravelingPeriodRequest,
    ) -> Result<Response>;

    async fn airport_nearest_relevant(
        &self,
        args: model::AirportNearestRelevantRequest,
    ) -> Result<Response>;

    async fn airport_and_city_search(
        &self,
        args: model::AirportAndCitySearchRequest,
    ) -> Result<Response>;

    async fn airline_code_lookup(&self, args: model::AirlineCodeLookupRequest) -> Result<Response>;
}

/// Route a tagged request to the matching service method.
pub async fn invoke<S>(service: &S, request: ServiceRequest) -> Result<Response>
where
    S: FlightService + ?Sized,
{
    match request {
        ServiceRequest::FlightLowFareSearch(args) => service.flight_low_fare_search(args).await,
        ServiceRequest::FlightInspirationSearch(args) => {
            service.flight_inspiration_search(args).await
        }
        ServiceRequest::FlightCheapestDateSearch(args) => {
            service.flight_cheapest_date_search(args).await
        }
        ServiceRequest::FlightMostSearchedDestinations(args) => {
            service.flight_most_searched_destinations(args).await
        }
        ServiceRequest::FlightMostSearchedByDestination(args) => {
            service.flight_most_searched_by_destination(args).await
        }
        ServiceRequest::FlightCheckInLinks(args) => service.flight_check_in_links(args).await,
        ServiceRequest::FlightMostTraveledDestinations(args) => {
            service.flight_most_traveled_destinations(args).await
        }
        ServiceRequest::FlightMostBookedDestinations(args) => {
            service.flight_most_booked_destinations(args).await
        }
        ServiceRequest::FlightBusiestTravelingPeriod(args) => {
            service.flight_busiest_traveling_period(args).await
        }
        ServiceRequest::AirportNearestRelevant(args) => {
            service.airport_nearest_relevant(args).await
        }
        ServiceRequest::AirportAndCitySearch(args) => service.airport_and_city_search(args).await,
        ServiceRequest::AirlineCodeLookup(args) => service.airline_code_lookup(args).await,
    }
}
