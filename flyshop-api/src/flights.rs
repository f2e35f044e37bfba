use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use flyshop_core::flight::FlightRecord;
use flyshop_core::repository::FlightRepository;
use flyshop_core::search::FlightSearchCriteria;
use flyshop_core::CoreError;
use serde::Deserialize;
use tracing::info;

use crate::{error::AppError, state::AppState};

/// Query string of `GET /api/Flights`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightsQuery {
    #[serde(alias = "DepartureData")]
    pub departure_data: Option<String>,
    #[serde(alias = "ArrivalData")]
    pub arrival_data: Option<String>,
    #[serde(alias = "DepartureDate")]
    pub departure_date: Option<String>,
}

impl FlightsQuery {
    pub fn into_criteria(self) -> Result<FlightSearchCriteria, CoreError> {
        let departure_date = match self.departure_date.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(parse_departure_date(raw).ok_or_else(|| {
                CoreError::InvalidQueryParameter {
                    name: "departureDate".to_string(),
                    value: raw.to_string(),
                }
            })?),
        };

        Ok(FlightSearchCriteria::new(
            self.departure_data,
            self.arrival_data,
            departure_date,
        ))
    }
}

/// Accepts a plain date, a local date-time or an RFC 3339 timestamp.
/// Only the calendar date is kept; offsets are not applied.
pub fn parse_departure_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(datetime.date());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.naive_local().date())
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/Flights", get(get_flights))
        .route("/api/Flights/cheapest", get(get_cheapest_flight))
}

pub async fn search_flights(
    repo: &dyn FlightRepository,
    query: FlightsQuery,
) -> Result<Vec<FlightRecord>, AppError> {
    let criteria = query.into_criteria()?;
    let flights = repo.search_flights(&criteria).await?;
    info!("Flight search returned {} flights", flights.len());
    Ok(flights)
}

pub async fn find_cheapest_flight(
    repo: &dyn FlightRepository,
    query: FlightsQuery,
) -> Result<FlightRecord, AppError> {
    let criteria = query.into_criteria()?;
    repo.cheapest_flight(&criteria)
        .await?
        .ok_or_else(|| AppError::NotFound("No flights match the search".to_string()))
}

/// GET /api/Flights
async fn get_flights(
    State(state): State<AppState>,
    Query(query): Query<FlightsQuery>,
) -> Result<Json<Vec<FlightRecord>>, AppError> {
    search_flights(state.flight_repo.as_ref(), query).await.map(Json)
}

/// GET /api/Flights/cheapest
async fn get_cheapest_flight(
    State(state): State<AppState>,
    Query(query): Query<FlightsQuery>,
) -> Result<Json<FlightRecord>, AppError> {
    find_cheapest_flight(state.flight_repo.as_ref(), query).await.map(Json)
}
