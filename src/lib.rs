//! Amadeus gateway
//!
//! Exposes the Amadeus flight and airport search API as a gRPC service.
//! Inbound requests are decoded into internal argument structs, handed to a
//! [`service::FlightService`], and the provider-shaped answer is encoded
//! back into the protobuf response tree.

pub mod config;
pub mod discovery;
pub mod middleware;
pub mod model;
pub mod operation;
pub mod server;
pub mod service;
pub mod translate;
pub mod transport;
pub mod utils;

pub mod proto {
    pub mod common {
        tonic::include_proto!("amadeus.common");
    }

    pub mod types {
        tonic::include_proto!("amadeus.types");
    }

    pub mod service {
        tonic::include_proto!("amadeus.service");
    }
}

#[cfg(test)]
pub(crate) mod test_utils;
