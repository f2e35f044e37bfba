use axum::{extract::State, routing::get, Json, Router};
use flyshop_catalog::Product;
use flyshop_core::repository::ProductRepository;
use tracing::info;

use crate::{error::AppError, state::AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route("/GetProductsAsync", get(get_products))
}

pub async fn list_products(repo: &dyn ProductRepository) -> Result<Vec<Product>, AppError> {
    let products = repo.list_products().await?;
    info!("Listing {} products", products.len());
    Ok(products)
}

/// GET /GetProductsAsync
async fn get_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, AppError> {
    list_products(state.product_repo.as_ref()).await.map(Json)
}
