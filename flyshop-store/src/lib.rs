pub mod app_config;
pub mod database;
pub mod catalog_repo;
pub mod flight_repo;

pub use database::DbClient;
pub use catalog_repo::{InMemoryProductRepository, PostgresProductRepository};
pub use flight_repo::{FlightSeedError, InMemoryFlightRepository};
