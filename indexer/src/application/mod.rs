pub mod housekeeping;
pub mod ingestion;

pub use housekeeping::{HousekeepingJob, HousekeepingReport, TaskOutcome};
pub use ingestion::{IngestionJob, IngestionSummary};
