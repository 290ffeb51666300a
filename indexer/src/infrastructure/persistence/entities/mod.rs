pub mod epoch_info;
pub mod stakers;
pub mod stats;
pub mod validator_performance;
pub mod validators;
