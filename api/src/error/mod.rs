use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use nexscan_indexer::infrastructure::persistence::DbError;
use nexscan_indexer::infrastructure::rpc::RpcClientError;

#[derive(Error, Debug)]
pub enum ExplorerError {
    #[error("Upstream RPC error: {0}")]
    Upstream(#[from] RpcClientError),
    #[error("Database error: {0}")]
    Database(#[from] DbError),
    #[error("Not found")]
    NotFound,
    #[error("{0}")]
    InvalidRequest(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ExplorerResult<T> = Result<T, ExplorerError>;

impl ExplorerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ExplorerError::NotFound => StatusCode::NOT_FOUND,
            ExplorerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ExplorerError::Upstream(_) | ExplorerError::Database(_) | ExplorerError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}
