pub mod flight;
pub mod search;
pub mod repository;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Invalid query parameter {name}: {value:?}")]
    InvalidQueryParameter { name: String, value: String },
}

pub type CoreResult<T> = Result<T, CoreError>;
