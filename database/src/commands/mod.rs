pub mod create;
pub mod migrate;
