use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use flyshop_core::CoreError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidQueryParameter(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    StoreUnavailable(String),
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidQueryParameter { .. } => Self::InvalidQueryParameter(err.to_string()),
            CoreError::StoreUnavailable(_) => Self::StoreUnavailable(err.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::InvalidQueryParameter(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::StoreUnavailable(msg) => {
                tracing::error!("Store unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, "Store unavailable".to_string())
            }
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}
