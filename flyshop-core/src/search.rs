use chrono::NaiveDate;

use crate::flight::FlightRecord;

/// Optional criteria for a flight search. Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightSearchCriteria {
    departure_code: Option<String>,
    arrival_code: Option<String>,
    departure_date: Option<NaiveDate>, // Just date, ignore time for search match
}

impl FlightSearchCriteria {
    /// Empty codes are treated the same as missing ones.
    pub fn new(
        departure_code: Option<String>,
        arrival_code: Option<String>,
        departure_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            departure_code: departure_code.filter(|code| !code.is_empty()),
            arrival_code: arrival_code.filter(|code| !code.is_empty()),
            departure_date,
        }
    }

    pub fn departure_code(&self) -> Option<&str> {
        self.departure_code.as_deref()
    }

    pub fn arrival_code(&self) -> Option<&str> {
        self.arrival_code.as_deref()
    }

    pub fn departure_date(&self) -> Option<NaiveDate> {
        self.departure_date
    }

    pub fn is_empty(&self) -> bool {
        self.departure_code.is_none() && self.arrival_code.is_none() && self.departure_date.is_none()
    }

    pub fn matches(&self, flight: &FlightRecord) -> bool {
        let departure_ok = self
            .departure_code()
            .map_or(true, |code| flight.departure_airport.data_code == code);
        let arrival_ok = self
            .arrival_code()
            .map_or(true, |code| flight.arrival_airport.data_code == code);
        let date_ok = self
            .departure_date
            .map_or(true, |date| flight.departure_day() == date);

        departure_ok && arrival_ok && date_ok
    }
}

/// Returns the flights matching every present criterion, in their original order.
pub fn filter_flights(flights: &[FlightRecord], criteria: &FlightSearchCriteria) -> Vec<FlightRecord> {
    flights
        .iter()
        .filter(|flight| criteria.matches(flight))
        .cloned()
        .collect()
}

/// Lowest-priced matching flight. Ties go to the one listed first.
pub fn cheapest_flight(flights: &[FlightRecord], criteria: &FlightSearchCriteria) -> Option<FlightRecord> {
    flights
        .iter()
        .filter(|flight| criteria.matches(flight))
        .fold(None, |best: Option<&FlightRecord>, flight| match best {
            Some(current) if current.price <= flight.price => Some(current),
            _ => Some(flight),
        })
        .cloned()
}
