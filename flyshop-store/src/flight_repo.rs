use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use flyshop_core::flight::{Airport, FlightRecord};
use flyshop_core::repository::FlightRepository;
use flyshop_core::search::{self, FlightSearchCriteria};
use flyshop_core::CoreResult;
use rust_decimal::Decimal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::app_config::FlightsConfig;

#[derive(Debug, thiserror::Error)]
pub enum FlightSeedError {
    #[error("Failed to read flight seed {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid flight seed {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Flight schedule held in memory for the life of the process.
///
/// Built once at start-up and never mutated, so clones share the same
/// records and concurrent searches need no locking.
#[derive(Debug, Clone)]
pub struct InMemoryFlightRepository {
    flights: Arc<[FlightRecord]>,
}

impl InMemoryFlightRepository {
    pub fn new(flights: Vec<FlightRecord>) -> Self {
        Self { flights: flights.into() }
    }

    /// The two flights the service ships with.
    pub fn with_default_schedule() -> Self {
        Self::new(default_schedule())
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, FlightSeedError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| FlightSeedError::Io { path: path.to_path_buf(), source })?;
        let flights: Vec<FlightRecord> = serde_json::from_str(&raw)
            .map_err(|source| FlightSeedError::Parse { path: path.to_path_buf(), source })?;

        info!("Loaded {} flights from {}", flights.len(), path.display());
        Ok(Self::new(flights))
    }

    pub async fn from_config(config: &FlightsConfig) -> Result<Self, FlightSeedError> {
        match &config.seed_path {
            Some(path) => Self::from_json_file(path).await,
            None => {
                info!("No flight seed configured, using built-in schedule");
                Ok(Self::with_default_schedule())
            }
        }
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[async_trait]
impl FlightRepository for InMemoryFlightRepository {
    async fn all_flights(&self) -> CoreResult<Vec<FlightRecord>> {
        Ok(self.flights.to_vec())
    }

    async fn search_flights(
        &self,
        criteria: &FlightSearchCriteria,
    ) -> CoreResult<Vec<FlightRecord>> {
        let found = search::filter_flights(&self.flights, criteria);
        debug!("Flight search {:?} matched {} of {}", criteria, found.len(), self.flights.len());
        Ok(found)
    }

    async fn cheapest_flight(
        &self,
        criteria: &FlightSearchCriteria,
    ) -> CoreResult<Option<FlightRecord>> {
        Ok(search::cheapest_flight(&self.flights, criteria))
    }
}

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn default_schedule() -> Vec<FlightRecord> {
    vec![
        FlightRecord {
            departure_date: at(2024, 11, 26, 10, 30),
            arrival_date: at(2024, 11, 26, 14, 45),
            flight_number: "AB123".to_string(),
            departure_airport: Airport::new("VNO", "Vilnius Airport", "Vilnius"),
            arrival_airport: Airport::new("LHR", "London Heathrow", "London"),
            price: Decimal::new(12999, 2),
        },
        FlightRecord {
            departure_date: at(2024, 11, 27, 12, 0),
            arrival_date: at(2024, 11, 27, 15, 30),
            flight_number: "XY456".to_string(),
            departure_airport: Airport::new("KUN", "Kaunas Airport", "Kaunas"),
            arrival_airport: Airport::new("RIX", "Riga Airport", "Riga"),
            price: Decimal::new(4999, 2),
        },
    ]
}
