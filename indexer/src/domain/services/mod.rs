pub mod performance;
pub mod reconciliation;

pub use performance::{
    credit_window, performance_records, skip_rate, total_active_stake, CreditWindow, StakingYield,
};
pub use reconciliation::reconcile;
