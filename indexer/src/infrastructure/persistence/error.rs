use thiserror::Error;

/// Error type for database operations
#[derive(Debug, Error)]
pub enum DbError {
    /// Error from SeaORM
    #[error("Database error: {0}")]
    SeaOrmError(#[from] sea_orm::DbErr),
    /// Connection error
    #[error("Connection error: {0}")]
    ConnectionError(String),
    /// Query error
    #[error("Query error: {0}")]
    QueryError(String),
}
