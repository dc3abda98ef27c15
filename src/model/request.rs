//! Argument structs handed to the service layer, one per operation.
//!
//! Field names follow the provider's query parameters.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightLowFareSearchRequest {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightInspirationSearchRequest {
    pub origin: String,
    pub max_price: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightCheapestDateSearchRequest {
    pub origin: String,
    pub destination: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightMostSearchedDestinationsRequest {
    pub origin_city_code: String,
    pub search_period: String,
    pub market_country_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightMostSearchedByDestinationRequest {
    pub origin_city_code: String,
    pub destination_city_code: String,
    pub search_period: String,
    pub market_country_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightCheckInLinksRequest {
    pub airline_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightMostTraveledDestinationsRequest {
    pub origin_city_code: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightMostBookedDestinationsRequest {
    pub origin_city_code: String,
    pub period: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightBusiestTravelingPeriodRequest {
    pub city_code: String,
    pub period: String,
    pub direction: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirportNearestRelevantRequest {
    pub latitude: f64,
    pub longitude: f64,
    pub sort: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirportAndCitySearchRequest {
    pub keyword: String,
    pub sub_type: String,
    pub country_code: String,
}

/// Comma separated list of IATA or ICAO airline codes.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AirlineCodeLookupRequest {
    pub airline_codes: String,
}
