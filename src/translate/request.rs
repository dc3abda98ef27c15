//! Request decoders: wire request message -> service argument struct.
//!
//! Decoding is a lossless field-for-field copy. No validation happens here;
//! the service layer and the provider own that.

use super::TranslateError;
use crate::model;
use crate::operation::{Operation, RpcRequest, ServiceRequest};
use crate::proto::service as wire;

field_map! {
    wire::FlightLowFareSearchRequest => model::FlightLowFareSearchRequest {
        origin,
        destination,
        departure_date,
        return_date,
    }

    wire::FlightInspirationSearchRequest => model::FlightInspirationSearchRequest {
        origin,
        max_price,
    }

    wire::FlightCheapestDateSearchRequest => model::FlightCheapestDateSearchRequest {
        origin,
        destination,
    }

    wire::FlightMostSearchedDestinationsRequest => model::FlightMostSearchedDestinationsRequest {
        origin_city_code,
        search_period,
        market_country_code,
    }

    wire::FlightMostSearchedByDestinationRequest => model::FlightMostSearchedByDestinationRequest {
        origin_city_code,
        destination_city_code,
        search_period,
        market_country_code,
    }

    wire::FlightCheckInLinksRequest => model::FlightCheckInLinksRequest {
        airline_code,
    }

    wire::FlightMostTraveledDestinationsRequest => model::FlightMostTraveledDestinationsRequest {
        origin_city_code,
        period,
    }

    wire::FlightMostBookedDestinationsRequest => model::FlightMostBookedDestinationsRequest {
        origin_city_code,
        period,
    }

    wire::FlightBusiestTravelingPeriodRequest => model::FlightBusiestTravelingPeriodRequest {
        city_code,
        period,
        direction,
    }

    wire::AirportNearestRelevantRequest => model::AirportNearestRelevantRequest {
        latitude,
        longitude,
        sort,
    }

    wire::AirportAndCitySearchRequest => model::AirportAndCitySearchRequest {
        keyword,
        sub_type,
        country_code,
    }

    wire::AirlineCodeLookupRequest => model::AirlineCodeLookupRequest {
        airline_codes,
    }
}

impl From<RpcRequest> for ServiceRequest {
    fn from(request: RpcRequest) -> Self {
        match request {
            RpcRequest::FlightLowFareSearch(r) => ServiceRequest::FlightLowFareSearch(r.into()),
            RpcRequest::FlightInspirationSearch(r) => {
                ServiceRequest::FlightInspirationSearch(r.into())
            }
            RpcRequest::FlightCheapestDateSearch(r) => {
                ServiceRequest::FlightCheapestDateSearch(r.into())
            }
            RpcRequest::FlightMostSearchedDestinations(r) => {
                ServiceRequest::FlightMostSearchedDestinations(r.into())
            }
            RpcRequest::FlightMostSearchedByDestination(r) => {
                ServiceRequest::FlightMostSearchedByDestination(r.into())
            }
            RpcRequest::FlightCheckInLinks(r) => ServiceRequest::FlightCheckInLinks(r.into()),
            RpcRequest::FlightMostTraveledDestinations(r) => {
                ServiceRequest::FlightMostTraveledDestinations(r.into())
            }
            RpcRequest::FlightMostBookedDestinations(r) => {
                ServiceRequest::FlightMostBookedDestinations(r.into())
            }
            RpcRequest::FlightBusiestTravelingPeriod(r) => {
                ServiceRequest::FlightBusiestTravelingPeriod(r.into())
            }
            RpcRequest::AirportNearestRelevant(r) => {
                ServiceRequest::AirportNearestRelevant(r.into())
            }
            RpcRequest::AirportAndCitySearch(r) => ServiceRequest::AirportAndCitySearch(r.into()),
            RpcRequest::AirlineCodeLookup(r) => ServiceRequest::AirlineCodeLookup(r.into()),
        }
    }
}

/// Decode a request routed to `expected`.
///
/// Fails with [`TranslateError::TypeMismatch`] and produces nothing when the
/// payload belongs to a different operation.
pub fn decode(expected: Operation, request: RpcRequest) -> Result<ServiceRequest, TranslateError> {
    let found = request.operation();
    if found != expected {
        return Err(TranslateError::TypeMismatch { expected, found });
    }
    Ok(request.into())
}
