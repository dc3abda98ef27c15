//! Response encoder: provider response tree -> wire response tree.
//!
//! Scalars copy verbatim and sequences keep order and length. Optional
//! sub-objects are always materialized on the wire side, so consumers never
//! see an unset message where the provider omitted one.

use std::collections::HashMap;

use crate::model::response as model;
use crate::proto::types as wire;

field_map! {
    model::Response => wire::Response {
        data: seq,
        dictionaries: nested,
        meta: nested,
        warnings: seq,
        errors: seq,
    }

    model::Data => wire::Data {
        r#type,
        id,
        offer_items: seq,
        origin,
        destination,
        departure_date,
        return_date,
        price: nested,
        links: nested,
        sub_type,
        period,
        analytics: nested,
        name,
        detailed_name,
        time_zone_offset,
        iata_code,
        geo_code: nested,
        address: nested,
        distance: nested,
        relevance,
        self_ref: nested,
        href,
        channel,
        parameters: map,
    }

    model::OfferItem => wire::OfferItem {
        services: seq,
        price: nested,
        price_per_adult: nested,
    }

    model::Service => wire::Service {
        segments: seq,
    }

    model::Segment => wire::Segment {
        flight_segment: nested,
        pricing_detail_per_adult: nested,
    }

    model::FlightSegment => wire::FlightSegment {
        departure: nested,
        arrival: nested,
        carrier_code,
        number,
        aircraft: nested,
        operating: nested,
        duration,
    }

    model::DepartureArrival => wire::DepartureArrival { iata_code, terminal, at }
    model::Aircraft => wire::Aircraft { code }
    model::Operating => wire::Operating { carrier_code, number }

    model::PricingDetailPerAdult => wire::PricingDetailPerAdult {
        travel_class,
        fare_class,
        availability,
        fare_basis,
    }

    model::Price => wire::Price { total, total_taxes }
    model::GeoCode => wire::GeoCode { latitude, longitude }

    model::Address => wire::Address {
        city_name,
        city_code,
        country_name,
        country_code,
        state_code,
        region_code,
    }

    model::Distance => wire::Distance { value, unit }

    model::Links => wire::Links {
        self_link,
        next,
        last,
        flight_dates,
        flight_offers,
        flight_destinations,
    }

    model::SelfLink => wire::SelfLink { href, methods }
    model::Score => wire::Score { score }

    model::Searches => wire::Searches {
        score,
        number_of_searches: nested,
    }

    model::NumberOfSearches => wire::NumberOfSearches {
        per_trip_duration,
        per_days_in_advance,
    }

    model::Analytics => wire::Analytics {
        flights: nested,
        travelers: nested,
        searches: nested,
    }

    model::ParamDetail => wire::ParamDetail { r#type, description, format }

    model::Dictionaries => wire::Dictionaries {
        aircrafts <- aircraft: map,
        locations: map,
        carriers: map,
        currencies: map,
    }

    model::Defaults => wire::Defaults {
        adults,
        non_stop,
        departure_date,
        one_way,
        duration,
        view_by,
    }

    model::Meta => wire::Meta {
        links: nested,
        currency,
        defaults: nested,
        count,
    }

    model::Source => wire::Source { parameter, pointer, example }

    model::ErrorWarning => wire::ErrorWarning {
        status,
        code,
        title,
        detail,
        source: nested,
    }
}

impl From<HashMap<String, String>> for wire::LocationDetail {
    fn from(detail: HashMap<String, String>) -> Self {
        Self { detail }
    }
}

/// How the dictionaries block is laid out on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DictionaryLayout {
    /// Each provider dictionary lands in its own field.
    #[default]
    Corrected,
    /// Carriers and currencies are folded into `aircrafts` and their own
    /// fields stay empty. Kept for consumers built against older releases.
    LegacyMerged,
}

/// Encodes provider responses into wire responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseEncoder {
    layout: DictionaryLayout,
}

impl ResponseEncoder {
    pub fn new(layout: DictionaryLayout) -> Self {
        Self { layout }
    }

    /// Encoder producing [`DictionaryLayout::LegacyMerged`] dictionaries.
    pub fn legacy() -> Self {
        Self::new(DictionaryLayout::LegacyMerged)
    }

    pub fn layout(&self) -> DictionaryLayout {
        self.layout
    }

    pub fn encode(&self, response: crate::model::Response) -> wire::Response {
        let mut encoded = wire::Response::from(response);
        if self.layout == DictionaryLayout::LegacyMerged {
            if let Some(dictionaries) = encoded.dictionaries.as_mut() {
                merge_into_aircrafts(dictionaries);
            }
        }
        encoded
    }
}

fn merge_into_aircrafts(dictionaries: &mut wire::Dictionaries) {
    let carriers = std::mem::take(&mut dictionaries.carriers);
    let currencies = std::mem::take(&mut dictionaries.currencies);
    dictionaries.aircrafts.extend(carriers);
    dictionaries.aircrafts.extend(currencies);
}
