use std::sync::Arc;
use flyshop_core::repository::{FlightRepository, ProductRepository};

#[derive(Clone)]
pub struct AppState {
    pub product_repo: Arc<dyn ProductRepository>,
    pub flight_repo: Arc<dyn FlightRepository>,
}

impl AppState {
    pub fn new(
        product_repo: Arc<dyn ProductRepository>,
        flight_repo: Arc<dyn FlightRepository>,
    ) -> Self {
        Self { product_repo, flight_repo }
    }
}
