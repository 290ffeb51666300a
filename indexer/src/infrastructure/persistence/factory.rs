use sea_orm::DatabaseConnection;

use crate::infrastructure::persistence::connection::DbPool;
use crate::infrastructure::persistence::repositories::{
    EpochRepository, MaintenanceRepository, PerformanceRepository, Repositories,
    SnapshotRepository, ValidatorRepository,
};

/// Factory for creating repositories
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create all repositories sharing the pool's connection
    pub fn create_repositories(db_pool: &DbPool) -> Repositories {
        Self::from_connection(db_pool.get_connection().clone())
    }

    /// Create all repositories over an existing connection
    pub fn from_connection(conn: DatabaseConnection) -> Repositories {
        Repositories::new(
            Self::create_validator_repository(conn.clone()),
            PerformanceRepository::new(conn.clone()),
            EpochRepository::new(conn.clone()),
            SnapshotRepository::new(conn.clone()),
            Self::create_maintenance_repository(conn),
        )
    }

    pub fn create_validator_repository(conn: DatabaseConnection) -> ValidatorRepository {
        ValidatorRepository::new(conn)
    }

    pub fn create_maintenance_repository(conn: DatabaseConnection) -> MaintenanceRepository {
        MaintenanceRepository::new(conn)
    }
}
