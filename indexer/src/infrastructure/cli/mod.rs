//! Validator tooling command line as a data source

pub mod error;
pub mod runner;
pub mod source;

pub use error::CliError;
pub use runner::CliRunner;
pub use source::{ClusterDataSource, NexisCli};
