mod common;

use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use nexscan_indexer::application::HousekeepingJob;
use nexscan_indexer::config::HousekeepingConfig;
use nexscan_indexer::infrastructure::persistence::entities::stats;
use nexscan_indexer::infrastructure::persistence::repositories::MaintenanceRepository;

use common::migrated_db;

async fn insert_stats_row(conn: &sea_orm::DatabaseConnection, vote: &str, age_days: i64) {
    stats::ActiveModel {
        slot: Set(1),
        last_vote: Set(1),
        root_slot: Set(1),
        identity_pubkey: Set(format!("identity-{vote}")),
        vote_account_pubkey: Set(vote.to_string()),
        commission: Set(5),
        skip_rate: Set(0.0),
        stakers: Set(0),
        stake: Set(0),
        leader_slots: Set(0),
        blocks_produced: Set(0),
        skipped_slots: Set(0),
        created_at: Set(Utc::now() - Duration::days(age_days)),
        ..Default::default()
    }
    .insert(conn)
    .await
    .unwrap();
}

#[tokio::test]
async fn test_tasks_run_independently() {
    let conn = migrated_db().await;
    insert_stats_row(&conn, "vote-old", 120).await;
    insert_stats_row(&conn, "vote-new", 1).await;

    // SQLite has no materialized views, so every refresh fails
    let job = HousekeepingJob::new(
        MaintenanceRepository::new(conn.clone()),
        HousekeepingConfig {
            retention_days: 91,
            materialized_views: vec!["stats_stake".to_string(), "stats_performance".to_string()],
        },
    );

    let report = job.run().await;

    assert_eq!(report.outcomes.len(), 3);
    assert!(report.outcomes[0].succeeded);
    assert!(report.outcomes[0].detail.starts_with("1 rows"));
    assert!(!report.outcomes[1].succeeded);
    assert!(!report.outcomes[2].succeeded);
    assert_eq!(report.outcomes[2].task, "refresh stats_performance");
    assert!(!report.all_succeeded());

    let remaining = stats::Entity::find().all(&conn).await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].vote_account_pubkey, "vote-new");
}

#[tokio::test]
async fn test_invalid_view_name_is_a_failed_task() {
    let conn = migrated_db().await;
    let job = HousekeepingJob::new(
        MaintenanceRepository::new(conn),
        HousekeepingConfig {
            retention_days: 91,
            materialized_views: vec!["stats; DROP TABLE stats".to_string()],
        },
    );

    let report = job.run().await;

    assert!(report.outcomes[0].succeeded);
    assert!(report.outcomes[1].detail.contains("Invalid materialized view name"));
    assert_eq!(report.failures().count(), 1);
}
