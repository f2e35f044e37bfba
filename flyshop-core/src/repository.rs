use async_trait::async_trait;
use flyshop_catalog::Product;

use crate::flight::FlightRecord;
use crate::search::FlightSearchCriteria;
use crate::CoreResult;

/// Read-only access to the flight schedule.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    async fn all_flights(&self) -> CoreResult<Vec<FlightRecord>>;

    async fn search_flights(
        &self,
        criteria: &FlightSearchCriteria,
    ) -> CoreResult<Vec<FlightRecord>>;

    async fn cheapest_flight(
        &self,
        criteria: &FlightSearchCriteria,
    ) -> CoreResult<Option<FlightRecord>>;
}

/// Repository trait for product catalog access.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Every product in store order. Fails with `StoreUnavailable` when the
    /// backing store cannot be reached.
    async fn list_products(&self) -> CoreResult<Vec<Product>>;
}
