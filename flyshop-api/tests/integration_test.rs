use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use flyshop_api::{app, AppState};
use flyshop_catalog::Product;
use flyshop_core::repository::ProductRepository;
use flyshop_core::{CoreError, CoreResult};
use flyshop_store::{InMemoryFlightRepository, InMemoryProductRepository};
use rust_decimal::Decimal;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

struct UnreachableStore;

#[async_trait]
impl ProductRepository for UnreachableStore {
    async fn list_products(&self) -> CoreResult<Vec<Product>> {
        Err(CoreError::StoreUnavailable("connection refused".to_string()))
    }
}

fn router_with(products: Arc<dyn ProductRepository>) -> Router {
    app(AppState::new(
        products,
        Arc::new(InMemoryFlightRepository::with_default_schedule()),
    ))
}

fn router() -> Router {
    router_with(Arc::new(InMemoryProductRepository::new(vec![
        Product::new(1, "Travel Pillow", Decimal::new(1250, 2), 40).with_description("Memory foam"),
        Product::new(2, "Plug Adapter", Decimal::new(900, 2), 0),
    ])))
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn flight_numbers(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|f| f["flightNumber"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_lists_products() {
    let (status, body) = get(router(), "/GetProductsAsync").await;
    assert_eq!(status, StatusCode::OK);

    let products = body.as_array().unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0]["productId"], 1);
    assert_eq!(products[0]["name"], "Travel Pillow");
    assert_eq!(products[0]["description"], "Memory foam");
    assert_eq!(products[0]["price"], 12.5);
    assert_eq!(products[0]["quantityInStock"], 40);
    assert_eq!(products[1]["description"], Value::Null);
}

#[tokio::test]
async fn test_empty_catalog_is_empty_array() {
    let app = router_with(Arc::new(InMemoryProductRepository::default()));
    let (status, body) = get(app, "/GetProductsAsync").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_unreachable_store_is_server_error() {
    let app = router_with(Arc::new(UnreachableStore));
    let (status, body) = get(app, "/GetProductsAsync").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Store unavailable");
}

#[tokio::test]
async fn test_flights_without_parameters_returns_all() {
    let (status, body) = get(router(), "/api/Flights").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight_numbers(&body), vec!["AB123", "XY456"]);
}

#[tokio::test]
async fn test_flights_by_departure_code() {
    let (status, body) = get(router(), "/api/Flights?departureData=VNO").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight_numbers(&body), vec!["AB123"]);

    let flight = &body[0];
    assert_eq!(flight["departureAirport"]["dataCode"], "VNO");
    assert_eq!(flight["departureAirport"]["name"], "Vilnius Airport");
    assert_eq!(flight["arrivalAirport"]["countryName"], "London");
    assert_eq!(flight["departureDate"], "2024-11-26T10:30:00");
    assert_eq!(flight["arrivalDate"], "2024-11-26T14:45:00");
}

#[tokio::test]
async fn test_flights_by_arrival_and_date() {
    let (_, body) = get(router(), "/api/Flights?arrivalData=RIX&departureDate=2024-11-27").await;
    assert_eq!(flight_numbers(&body), vec!["XY456"]);

    let (_, body) = get(router(), "/api/Flights?arrivalData=RIX&departureDate=2024-11-26").await;
    assert!(flight_numbers(&body).is_empty());
}

#[tokio::test]
async fn test_flights_date_with_time_of_day() {
    let (status, body) = get(router(), "/api/Flights?departureDate=2024-11-27T00:00:00").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight_numbers(&body), vec!["XY456"]);
}

#[tokio::test]
async fn test_flights_empty_parameters_are_ignored() {
    let (status, body) = get(router(), "/api/Flights?departureData=&arrivalData=&departureDate=").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flight_numbers(&body), vec!["AB123", "XY456"]);
}

#[tokio::test]
async fn test_flights_unknown_code_is_empty_array() {
    let (status, body) = get(router(), "/api/Flights?departureData=ZZZ").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn test_flights_malformed_date_is_bad_request() {
    let (status, body) = get(router(), "/api/Flights?departureDate=not-a-date").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("departureDate"));
}

#[tokio::test]
async fn test_cheapest_flight() {
    let (status, body) = get(router(), "/api/Flights/cheapest").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["flightNumber"], "XY456");

    let (status, body) = get(router(), "/api/Flights/cheapest?departureData=VNO").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["flightNumber"], "AB123");
}

#[tokio::test]
async fn test_cheapest_flight_without_match_is_not_found() {
    let (status, body) = get(router(), "/api/Flights/cheapest?departureData=ZZZ").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No flights match the search");
}
