//! The closed set of operations exposed by the gateway.
//!
//! [`RpcRequest`] and [`ServiceRequest`] are tagged envelopes around the wire
//! and internal request types. Each RPC method builds its envelope from its own
//! message type, so a mismatched payload can only appear on paths that route
//! envelopes generically.

use std::fmt;

use crate::model;
use crate::proto::service as wire;

/// One variant per RPC method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    FlightLowFareSearch,
    FlightInspirationSearch,
    FlightCheapestDateSearch,
    FlightMostSearchedDestinations,
    FlightMostSearchedByDestination,
    FlightCheckInLinks,
    FlightMostTraveledDestinations,
    FlightMostBookedDestinations,
    FlightBusiestTravelingPeriod,
    AirportNearestRelevant,
    AirportAndCitySearch,
    AirlineCodeLookup,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::FlightLowFareSearch,
        Operation::FlightInspirationSearch,
        Operation::FlightCheapestDateSearch,
        Operation::FlightMostSearchedDestinations,
        Operation::FlightMostSearchedByDestination,
        Operation::FlightCheckInLinks,
        Operation::FlightMostTraveledDestinations,
        Operation::FlightMostBookedDestinations,
        Operation::FlightBusiestTravelingPeriod,
        Operation::AirportNearestRelevant,
        Operation::AirportAndCitySearch,
        Operation::AirlineCodeLookup,
    ];

    /// RPC method name, as registered on the service.
    pub fn name(self) -> &'static str {
        match self {
            Operation::FlightLowFareSearch => "FlightLowFareSearch",
            Operation::FlightInspirationSearch => "FlightInspirationSearch",
            Operation::FlightCheapestDateSearch => "FlightCheapestDateSearch",
            Operation::FlightMostSearchedDestinations => "FlightMostSearchedDestinations",
            Operation::FlightMostSearchedByDestination => "FlightMostSearchedByDestination",
            Operation::FlightCheckInLinks => "FlightCheckInLinks",
            Operation::FlightMostTraveledDestinations => "FlightMostTraveledDestinations",
            Operation::FlightMostBookedDestinations => "FlightMostBookedDestinations",
            Operation::FlightBusiestTravelingPeriod => "FlightBusiestTravelingPeriod",
            Operation::AirportNearestRelevant => "AirportNearestRelevant",
            Operation::AirportAndCitySearch => "AirportAndCitySearch",
            Operation::AirlineCodeLookup => "AirlineCodeLookup",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Generates a tagged envelope whose variants are named after [`Operation`].
macro_rules! envelope {
    ($(#[$meta:meta])* $name:ident, $module:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            FlightLowFareSearch($module::FlightLowFareSearchRequest),
            FlightInspirationSearch($module::FlightInspirationSearchRequest),
            FlightCheapestDateSearch($module::FlightCheapestDateSearchRequest),
            FlightMostSearchedDestinations($module::FlightMostSearchedDestinationsRequest),
            FlightMostSearchedByDestination($module::FlightMostSearchedByDestinationRequest),
            FlightCheckInLinks($module::FlightCheckInLinksRequest),
            FlightMostTraveledDestinations($module::FlightMostTraveledDestinationsRequest),
            FlightMostBookedDestinations($module::FlightMostBookedDestinationsRequest),
            FlightBusiestTravelingPeriod($module::FlightBusiestTravelingPeriodRequest),
            AirportNearestRelevant($module::AirportNearestRelevantRequest),
            AirportAndCitySearch($module::AirportAndCitySearchRequest),
            AirlineCodeLookup($module::AirlineCodeLookupRequest),
        }

        impl $name {
            /// Operation this payload belongs to.
            pub fn operation(&self) -> Operation {
                match self {
                    $name::FlightLowFareSearch(_) => Operation::FlightLowFareSearch,
                    $name::FlightInspirationSearch(_) => Operation::FlightInspirationSearch,
                    $name::FlightCheapestDateSearch(_) => Operation::FlightCheapestDateSearch,
                    $name::FlightMostSearchedDestinations(_) => {
                        Operation::FlightMostSearchedDestinations
                    }
                    $name::FlightMostSearchedByDestination(_) => {
                        Operation::FlightMostSearchedByDestination
                    }
                    $name::FlightCheckInLinks(_) => Operation::FlightCheckInLinks,
                    $name::FlightMostTraveledDestinations(_) => {
                        Operation::FlightMostTraveledDestinations
                    }
                    $name::FlightMostBookedDestinations(_) => Operation::FlightMostBookedDestinations,
                    $name::FlightBusiestTravelingPeriod(_) => Operation::FlightBusiestTravelingPeriod,
                    $name::AirportNearestRelevant(_) => Operation::AirportNearestRelevant,
                    $name::AirportAndCitySearch(_) => Operation::AirportAndCitySearch,
                    $name::AirlineCodeLookup(_) => Operation::AirlineCodeLookup,
                }
            }
        }
    };
}

envelope!(
    /// Inbound wire message for any operation.
    RpcRequest,
    wire
);

envelope!(
    /// Decoded argument struct for any operation.
    ServiceRequest,
    model
);
