pub mod cluster;
pub mod snapshot;

pub use cluster::{
    BlockProduction, CliValidator, ClusterInputs, LeaderProduction, StakeDelegation,
    ValidatorInfoDetails, ValidatorInfoEntry, ValidatorList,
};
pub use snapshot::{
    IngestionSnapshot, PerformanceRecord, ReconciledCluster, SkipRateUpdate, StakeAccount,
    StakingAggregate, StakingAggregates, StatsRow, ValidatorProfileUpdate, ValidatorRecord,
};
