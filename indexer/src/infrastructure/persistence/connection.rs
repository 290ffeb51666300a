use std::time::Duration;

use log::{error, info};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::config::DatabaseConfig;
use crate::infrastructure::persistence::error::DbError;
use crate::utils::logging;

/// Manages database connection pool
#[derive(Clone)]
pub struct DbPool {
    connection: DatabaseConnection,
}

impl DbPool {
    /// Creates a new database connection pool
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbError> {
        logging::log_database_connection_details(&config.url);

        let mut options = ConnectOptions::new(config.url.clone());
        options
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        // An in-memory SQLite database exists per connection
        if config.url.starts_with("sqlite::memory:") {
            options.max_connections(1);
        }

        match Database::connect(options).await {
            Ok(connection) => {
                info!("Database connection established successfully");
                Ok(DbPool { connection })
            }
            Err(e) => {
                error!("Failed to connect to database: {}", e);
                Err(DbError::ConnectionError(format!(
                    "Failed to connect to database: {}",
                    e
                )))
            }
        }
    }

    /// Wraps an already open connection
    pub fn from_connection(connection: DatabaseConnection) -> Self {
        Self { connection }
    }

    /// Returns the database connection
    pub fn get_connection(&self) -> &DatabaseConnection {
        &self.connection
    }
}
