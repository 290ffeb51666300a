pub mod cli;
pub mod persistence;
pub mod rpc;
