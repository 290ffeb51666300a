use thiserror::Error;

use crate::infrastructure::cli::CliError;
use crate::infrastructure::persistence::error::DbError;
use crate::infrastructure::rpc::RpcClientError;

/// Error type for one ingestion run; every variant aborts the run
#[derive(Debug, Error)]
pub enum IngestionError {
    #[error("CLI fetch failed: {0}")]
    Cli(#[from] CliError),
    #[error("RPC fetch failed: {0}")]
    Rpc(#[from] RpcClientError),
    #[error("Database error: {0}")]
    Db(#[from] DbError),
    /// A required source answered without a payload
    #[error("Missing data: {0}")]
    MissingData(String),
}

impl From<sea_orm::DbErr> for IngestionError {
    fn from(err: sea_orm::DbErr) -> Self {
        IngestionError::Db(DbError::from(err))
    }
}
