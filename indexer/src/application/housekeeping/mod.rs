//! Retention cleanup and materialized view refresh.
//!
//! Tasks are independent: each one is attempted, logged and reported on its
//! own, and a failure never stops the tasks after it.

use chrono::{Duration, Utc};
use log::{error, info};
use serde::Serialize;

use crate::config::HousekeepingConfig;
use crate::infrastructure::persistence::repositories::MaintenanceRepository;

/// Result of one housekeeping task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskOutcome {
    pub task: String,
    pub succeeded: bool,
    pub detail: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HousekeepingReport {
    pub outcomes: Vec<TaskOutcome>,
}

impl HousekeepingReport {
    pub fn failures(&self) -> impl Iterator<Item = &TaskOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.succeeded)
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }

    fn record(&mut self, task: String, result: Result<String, String>) {
        let outcome = match result {
            Ok(detail) => {
                info!("{}: ok ({})", task, detail);
                TaskOutcome { task, succeeded: true, detail }
            }
            Err(detail) => {
                error!("{}: failed ({})", task, detail);
                TaskOutcome { task, succeeded: false, detail }
            }
        };
        self.outcomes.push(outcome);
    }
}

pub struct HousekeepingJob {
    maintenance: MaintenanceRepository,
    config: HousekeepingConfig,
}

impl HousekeepingJob {
    pub fn new(maintenance: MaintenanceRepository, config: HousekeepingConfig) -> Self {
        Self { maintenance, config }
    }

    /// Attempt every task once
    pub async fn run(&self) -> HousekeepingReport {
        let mut report = HousekeepingReport::default();

        let cutoff = Utc::now() - Duration::days(self.config.retention_days);
        let deleted = self
            .maintenance
            .delete_stats_older_than(cutoff)
            .await
            .map(|rows| format!("{} rows older than {} deleted", rows, cutoff.to_rfc3339()))
            .map_err(|e| e.to_string());
        report.record("delete expired stats".to_string(), deleted);

        for view in &self.config.materialized_views {
            let refreshed = self
                .maintenance
                .refresh_materialized_view(view)
                .await
                .map(|_| "refreshed".to_string())
                .map_err(|e| e.to_string());
            report.record(format!("refresh {}", view), refreshed);
        }

        report
    }
}
