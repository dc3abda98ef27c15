//! Provider response tree.
//!
//! Mirrors the JSON documents returned by the provider. Optional
//! sub-objects are `Option`, sequences and mappings default to empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::lenient;

/// Root of every provider answer, shared by all operations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Response {
    pub data: Vec<Data>,
    pub dictionaries: Option<Dictionaries>,
    pub meta: Option<Meta>,
    pub warnings: Vec<ErrorWarning>,
    pub errors: Vec<ErrorWarning>,
}

/// A single result entry.
///
/// Which field groups are populated depends on the operation: offers for
/// fare search, origin/destination/price for inspiration, analytics for the
/// traffic statistics, airport details for location lookups and
/// href/channel/parameters for check-in links.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Data {
    pub r#type: String,
    pub id: String,
    pub offer_items: Vec<OfferItem>,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: String,
    pub price: Option<Price>,
    pub links: Option<Links>,
    pub sub_type: String,
    pub period: String,
    pub analytics: Option<Analytics>,
    pub name: String,
    pub detailed_name: String,
    pub time_zone_offset: String,
    pub iata_code: String,
    pub geo_code: Option<GeoCode>,
    pub address: Option<Address>,
    pub distance: Option<Distance>,
    pub relevance: f64,
    #[serde(rename = "self")]
    pub self_ref: Option<SelfLink>,
    pub href: String,
    pub channel: String,
    pub parameters: HashMap<String, ParamDetail>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OfferItem {
    pub services: Vec<Service>,
    pub price: Option<Price>,
    pub price_per_adult: Option<Price>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Service {
    pub segments: Vec<Segment>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Segment {
    pub flight_segment: Option<FlightSegment>,
    pub pricing_detail_per_adult: Option<PricingDetailPerAdult>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FlightSegment {
    pub departure: Option<DepartureArrival>,
    pub arrival: Option<DepartureArrival>,
    pub carrier_code: String,
    pub number: String,
    pub aircraft: Option<Aircraft>,
    pub operating: Option<Operating>,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepartureArrival {
    pub iata_code: String,
    pub terminal: String,
    pub at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Aircraft {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Operating {
    pub carrier_code: String,
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PricingDetailPerAdult {
    pub travel_class: String,
    pub fare_class: String,
    pub availability: i32,
    pub fare_basis: String,
}

/// Monetary amounts are decimal strings, as sent by the provider.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Price {
    pub total: String,
    pub total_taxes: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeoCode {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
    pub city_name: String,
    pub city_code: String,
    pub country_name: String,
    pub country_code: String,
    pub state_code: String,
    pub region_code: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Distance {
    pub value: i32,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Links {
    #[serde(rename = "self")]
    pub self_link: String,
    pub next: String,
    pub last: String,
    pub flight_dates: String,
    pub flight_offers: String,
    pub flight_destinations: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelfLink {
    pub href: String,
    pub methods: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Score {
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Searches {
    pub score: i32,
    pub number_of_searches: Option<NumberOfSearches>,
}

/// Search counts keyed by bucket. The provider sends numbers; they are
/// kept as decimal strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NumberOfSearches {
    #[serde(deserialize_with = "lenient::string_map")]
    pub per_trip_duration: HashMap<String, String>,
    #[serde(deserialize_with = "lenient::string_map")]
    pub per_days_in_advance: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Analytics {
    pub flights: Option<Score>,
    pub travelers: Option<Score>,
    pub searches: Option<Searches>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParamDetail {
    pub r#type: String,
    pub description: String,
    pub format: String,
}

/// Reference data used to resolve codes appearing in `data`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Dictionaries {
    pub aircraft: HashMap<String, String>,
    #[serde(deserialize_with = "lenient::nested_string_map")]
    pub locations: HashMap<String, HashMap<String, String>>,
    pub carriers: HashMap<String, String>,
    pub currencies: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Defaults {
    pub adults: i32,
    pub non_stop: bool,
    pub departure_date: String,
    pub one_way: bool,
    pub duration: String,
    pub view_by: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
    pub links: Option<Links>,
    pub currency: String,
    pub defaults: Option<Defaults>,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Source {
    pub parameter: String,
    pub pointer: String,
    pub example: String,
}

/// Provider-reported problem, used for both `warnings` and `errors`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ErrorWarning {
    pub status: i32,
    pub code: i32,
    pub title: String,
    pub detail: String,
    pub source: Option<Source>,
}
