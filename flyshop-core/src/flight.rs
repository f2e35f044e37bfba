use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Airport descriptor: code, display name and city/country name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    pub data_code: String,
    pub name: String,
    pub country_name: String,
}

impl Airport {
    pub fn new(data_code: &str, name: &str, country_name: &str) -> Self {
        Self {
            data_code: data_code.to_string(),
            name: name.to_string(),
            country_name: country_name.to_string(),
        }
    }
}

/// A single scheduled flight.
///
/// Timestamps are airport-local and carry no timezone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub departure_date: NaiveDateTime,
    pub arrival_date: NaiveDateTime,
    pub flight_number: String,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl FlightRecord {
    pub fn departure_day(&self) -> NaiveDate {
        self.departure_date.date()
    }
}
