use log::warn;

pub mod epoch_repository;
pub mod maintenance_repository;
pub mod performance_repository;
pub mod snapshot_repository;
pub mod validator_repository;

pub use epoch_repository::EpochRepository;
pub use maintenance_repository::MaintenanceRepository;
pub use performance_repository::PerformanceRepository;
pub use snapshot_repository::SnapshotRepository;
pub use validator_repository::ValidatorRepository;

/// Rows per bulk insert statement
pub(crate) const BATCH_SIZE: usize = 500;

/// Epoch the chain reports for a stake that never deactivates
pub(crate) const NEVER_EPOCH: u64 = u64::MAX;

/// Chain quantities are unsigned; columns are BIGINT
pub(crate) fn db_int(value: u64) -> i64 {
    i64::try_from(value).unwrap_or_else(|_| {
        warn!("Value {} exceeds the BIGINT range, stored as {}", value, i64::MAX);
        i64::MAX
    })
}

/// Stake epochs, with the never-deactivates sentinel stored as NULL
pub(crate) fn db_epoch(epoch: Option<u64>) -> Option<i64> {
    epoch.filter(|epoch| *epoch != NEVER_EPOCH).map(db_int)
}

/// Collection of all repositories
#[derive(Clone, Debug)]
pub struct Repositories {
    /// Repository for validator operations
    pub validator: ValidatorRepository,
    /// Repository for per-epoch performance
    pub performance: PerformanceRepository,
    /// Repository for epoch snapshots
    pub epoch: EpochRepository,
    /// Repository for the stats and stakers tables
    pub snapshot: SnapshotRepository,
    /// Repository for housekeeping statements
    pub maintenance: MaintenanceRepository,
}

impl Repositories {
    /// Create a new Repositories instance
    pub fn new(
        validator: ValidatorRepository,
        performance: PerformanceRepository,
        epoch: EpochRepository,
        snapshot: SnapshotRepository,
        maintenance: MaintenanceRepository,
    ) -> Self {
        Self {
            validator,
            performance,
            epoch,
            snapshot,
            maintenance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_int_saturates() {
        assert_eq!(db_int(42), 42);
        assert_eq!(db_int(i64::MAX as u64), i64::MAX);
        assert_eq!(db_int(u64::MAX - 1), i64::MAX);
    }

    #[test]
    fn test_never_epoch_is_null() {
        assert_eq!(db_epoch(Some(NEVER_EPOCH)), None);
        assert_eq!(db_epoch(Some(12)), Some(12));
        assert_eq!(db_epoch(None), None);
    }
}
