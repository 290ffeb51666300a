pub mod job;

pub use job::{IngestionJob, IngestionSummary};
