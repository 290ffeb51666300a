// Business logic service implementations

pub mod search_service;
pub mod stats_service;
pub mod validator_service;
