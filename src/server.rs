//! gRPC surface.
//!
//! [`AmadeusGrpc`] implements the generated `AmadeusService` trait. Each RPC
//! decodes its own message type, calls the [`FlightService`] and encodes the
//! answer with the configured [`ResponseEncoder`].
//!
//! Each call also leaves a `debug` record with `layer = "transport"` holding
//! the wire request and the wire response or status.

use std::sync::Arc;
use std::time::Instant;

use tonic::{Code, Request, Response, Status};
use tracing::{debug, error};

use crate::operation::{Operation, RpcRequest};
use crate::proto::service as wire;
use crate::proto::service::amadeus_service_server::{AmadeusService, AmadeusServiceServer};
use crate::proto::types;
use crate::service::{self, FlightService};
use crate::translate::{self, ResponseEncoder, TranslateError};

impl From<TranslateError> for Status {
    fn from(err: TranslateError) -> Self {
        Status::with_details(
            Code::Internal,
            err.to_string(),
            err.exception_bytes().into(),
        )
    }
}

pub struct AmadeusGrpc<S> {
    service: Arc<S>,
    encoder: ResponseEncoder,
}

impl<S: FlightService + 'static> AmadeusGrpc<S> {
    pub fn new(service: Arc<S>, encoder: ResponseEncoder) -> Self {
        Self { service, encoder }
    }

    /// Wrap into the generated tonic server.
    pub fn into_server(self) -> AmadeusServiceServer<Self> {
        AmadeusServiceServer::new(self)
    }

    async fn handle(
        &self,
        operation: Operation,
        request: RpcRequest,
    ) -> Result<Response<types::Response>, Status> {
        let start = Instant::now();
        let input = format!("{:?}", request);
        let result = self.dispatch(operation, request).await;
        let took_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(response) => debug!(
                layer = "transport",
                method = %operation,
                input = %input,
                output = ?response.get_ref(),
                error = "",
                took_ms,
                "rpc call"
            ),
            Err(status) => debug!(
                layer = "transport",
                method = %operation,
                input = %input,
                output = "null",
                error = %status,
                took_ms,
                "rpc call"
            ),
        }
        result
    }

    async fn dispatch(
        &self,
        operation: Operation,
        request: RpcRequest,
    ) -> Result<Response<types::Response>, Status> {
        let args = translate::decode(operation, request).map_err(|e| {
            error!(method = %operation, error = %e, "Request decode failed");
            Status::from(e)
        })?;
        let answer = service::invoke(self.service.as_ref(), args).await?;
        Ok(Response::new(self.encoder.encode(answer)))
    }
}

#[tonic::async_trait]
impl<S: FlightService + 'static> AmadeusService for AmadeusGrpc<S> {
    async fn flight_low_fare_search(
        &self,
        request: Request<wire::FlightLowFareSearchRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightLowFareSearch,
            RpcRequest::FlightLowFareSearch(request.into_inner()),
        )
        .await
    }

    async fn flight_inspiration_search(
        &self,
        request: Request<wire::FlightInspirationSearchRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightInspirationSearch,
            RpcRequest::FlightInspirationSearch(request.into_inner()),
        )
        .await
    }

    async fn flight_cheapest_date_search(
        &self,
        request: Request<wire::FlightCheapestDateSearchRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightCheapestDateSearch,
            RpcRequest::FlightCheapestDateSearch(request.into_inner()),
        )
        .await
    }

    async fn flight_most_searched_destinations(
        &self,
        request: Request<wire::FlightMostSearchedDestinationsRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightMostSearchedDestinations,
            RpcRequest::FlightMostSearchedDestinations(request.into_inner()),
        )
        .await
    }

    async fn flight_most_searched_by_destination(
        &self,
        request: Request<wire::FlightMostSearchedByDestinationRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightMostSearchedByDestination,
            RpcRequest::FlightMostSearchedByDestination(request.into_inner()),
        )
        .await
    }

    async fn flight_check_in_links(
        &self,
        request: Request<wire::FlightCheckInLinksRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightCheckInLinks,
            RpcRequest::FlightCheckInLinks(request.into_inner()),
        )
        .await
    }

    async fn flight_most_traveled_destinations(
        &self,
        request: Request<wire::FlightMostTraveledDestinationsRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightMostTraveledDestinations,
            RpcRequest::FlightMostTraveledDestinations(request.into_inner()),
        )
        .await
    }

    async fn flight_most_booked_destinations(
        &self,
        request: Request<wire::FlightMostBookedDestinationsRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightMostBookedDestinations,
            RpcRequest::FlightMostBookedDestinations(request.into_inner()),
        )
        .await
    }

    async fn flight_busiest_traveling_period(
        &self,
        request: Request<wire::FlightBusiestTravelingPeriodRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::FlightBusiestTravelingPeriod,
            RpcRequest::FlightBusiestTravelingPeriod(request.into_inner()),
        )
        .await
    }

    async fn airport_nearest_relevant(
        &self,
        request: Request<wire::AirportNearestRelevantRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::AirportNearestRelevant,
            RpcRequest::AirportNearestRelevant(request.into_inner()),
        )
        .await
    }

    async fn airport_and_city_search(
        &self,
        request: Request<wire::AirportAndCitySearchRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::AirportAndCitySearch,
            RpcRequest::AirportAndCitySearch(request.into_inner()),
        )
        .await
    }

    async fn airline_code_lookup(
        &self,
        request: Request<wire::AirlineCodeLookupRequest>,
    ) -> Result<Response<types::Response>, Status> {
        self.handle(
            Operation::AirlineCodeLookup,
            RpcRequest::AirlineCodeLookup(request.into_inner()),
        )
        .await
    }
}
