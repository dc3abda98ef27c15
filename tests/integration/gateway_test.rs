//! End-to-end calls through the generated client.

use tonic::Code;

use amadeus_gateway::proto::service::{
    AirlineCodeLookupRequest, FlightCheckInLinksRequest, FlightLowFareSearchRequest,
};
use amadeus_gateway::translate::ResponseEncoder;

use crate::common::{TestGateway, LOW_FARE_SEARCH};

fn low_fare_request() -> FlightLowFareSearchRequest {
    FlightLowFareSearchRequest {
        origin: "MAD".to_string(),
        destination: "JFK".to_string(),
        departure_date: "2026-11-02".to_string(),
        return_date: String::new(),
    }
}

#[tokio::test]
async fn test_low_fare_search_end_to_end() {
    let gateway =
        TestGateway::start(&[("FlightLowFareSearch", LOW_FARE_SEARCH)], ResponseEncoder::default())
            .await;
    let mut client = gateway.client().await;

    let response = client
        .flight_low_fare_search(low_fare_request())
        .await
        .unwrap()
        .into_inner();

    assert_eq!(response.data.len(), 1);
    let offer = &response.data[0];
    assert_eq!(offer.r#type, "flight-offer");
    assert_eq!(offer.offer_items.len(), 1);

    let item = &offer.offer_items[0];
    assert_eq!(item.services.len(), 1);
    assert_eq!(item.services[0].segments.len(), 1);
    let segment = &item.services[0].segments[0];
    let flight = segment.flight_segment.as_ref().unwrap();
    assert_eq!(flight.carrier_code, "IB");
    assert_eq!(flight.departure.as_ref().unwrap().iata_code, "MAD");
    assert_eq!(flight.arrival.as_ref().unwrap().iata_code, "JFK");
    assert_eq!(flight.operating.as_ref().unwrap().number, "6251");
    let pricing = segment.pricing_detail_per_adult.as_ref().unwrap();
    assert_eq!(pricing.travel_class, "ECONOMY");
    assert_eq!(pricing.availability, 7);
    assert_eq!(item.price.as_ref().unwrap().total, "601.92");

    let dictionaries = response.dictionaries.unwrap();
    assert_eq!(dictionaries.aircrafts["346"], "AIRBUS INDUSTRIE A340-600");
    assert_eq!(dictionaries.carriers["IB"], "IBERIA");
    assert_eq!(dictionaries.currencies["EUR"], "EURO");
    assert_eq!(
        dictionaries.locations["MAD"].detail["detailedName"],
        "ADOLFO SUAREZ BARAJAS"
    );

    let meta = response.meta.unwrap();
    assert_eq!(meta.currency, "EUR");
    assert_eq!(meta.defaults.unwrap().adults, 1);

    assert!(response.warnings.is_empty());
    assert!(response.errors.is_empty());

    gateway.stop().await;
}

#[tokio::test]
async fn test_legacy_layout_over_the_wire() {
    let gateway =
        TestGateway::start(&[("FlightLowFareSearch", LOW_FARE_SEARCH)], ResponseEncoder::legacy())
            .await;
    let mut client = gateway.client().await;

    let response = client
        .flight_low_fare_search(low_fare_request())
        .await
        .unwrap()
        .into_inner();

    let dictionaries = response.dictionaries.unwrap();
    assert_eq!(dictionaries.aircrafts.len(), 3);
    assert_eq!(dictionaries.aircrafts["IB"], "IBERIA");
    assert_eq!(dictionaries.aircrafts["EUR"], "EURO");
    assert!(dictionaries.carriers.is_empty());
    assert!(dictionaries.currencies.is_empty());

    gateway.stop().await;
}

#[tokio::test]
async fn test_provider_errors_pass_through() {
    let errors = r#"{
      "errors": [{
        "status": 400,
        "code": 477,
        "title": "INVALID FORMAT",
        "detail": "airlineCodes must be 2 or 3 characters",
        "source": {"parameter": "airlineCodes", "example": "BA"}
      }]
    }"#;
    let gateway =
        TestGateway::start(&[("AirlineCodeLookup", errors)], ResponseEncoder::default()).await;
    let mut client = gateway.client().await;

    let response = client
        .airline_code_lookup(AirlineCodeLookupRequest {
            airline_codes: "TOOLONG".to_string(),
        })
        .await
        .unwrap()
        .into_inner();

    assert!(response.data.is_empty());
    assert_eq!(response.errors.len(), 1);
    let error = &response.errors[0];
    assert_eq!(error.status, 400);
    assert_eq!(error.code, 477);
    let source = error.source.as_ref().unwrap();
    assert_eq!(source.parameter, "airlineCodes");
    assert_eq!(source.pointer, "");
    assert_eq!(response.dictionaries, Some(Default::default()));

    gateway.stop().await;
}

#[tokio::test]
async fn test_missing_fixture_is_unimplemented() {
    let gateway = TestGateway::start(&[], ResponseEncoder::default()).await;
    let mut client = gateway.client().await;

    let status = client
        .flight_check_in_links(FlightCheckInLinksRequest {
            airline_code: "BA".to_string(),
        })
        .await
        .unwrap_err();

    assert_eq!(status.code(), Code::Unimplemented);
    assert!(status.message().contains("FlightCheckInLinks"));

    gateway.stop().await;
}
