use async_trait::async_trait;
use flyshop_catalog::Product;
use flyshop_core::repository::ProductRepository;
use flyshop_core::{CoreError, CoreResult};
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::{debug, error};

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal struct for type-safe querying
#[derive(sqlx::FromRow)]
struct ProductRow {
    product_id: i32,
    name: Option<String>,
    description: Option<String>,
    price: Decimal,
    quantity_in_stock: i32,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            product_id: row.product_id,
            name: row.name,
            description: row.description,
            price: row.price,
            quantity_in_stock: row.quantity_in_stock,
        }
    }
}

#[async_trait]
impl ProductRepository for PostgresProductRepository {
    async fn list_products(&self) -> CoreResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT product_id, name, description, price, quantity_in_stock FROM products ORDER BY product_id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!("Failed to list products: {}", e);
            CoreError::StoreUnavailable(e.to_string())
        })?;

        debug!("Loaded {} products", rows.len());
        Ok(rows.into_iter().map(Product::from).collect())
    }
}

/// Fixed product list, for tests and runs without a database.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Vec<Product>,
}

impl InMemoryProductRepository {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list_products(&self) -> CoreResult<Vec<Product>> {
        Ok(self.products.clone())
    }
}
