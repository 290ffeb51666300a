mod common;

use chrono::Utc;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait, QueryOrder};

use nexscan_indexer::application::IngestionJob;
use nexscan_indexer::domain::errors::IngestionError;
use nexscan_indexer::domain::models::PerformanceRecord;
use nexscan_indexer::infrastructure::persistence::entities::{
    epoch_info, stakers, stats, validator_performance, validators,
};
use nexscan_indexer::infrastructure::persistence::repositories::{
    PerformanceRepository, SnapshotRepository,
};

use common::{chain_rpc, cluster_inputs, migrated_db, stake, validator, StubRpc, StubSource};

#[tokio::test]
async fn test_ingestion_writes_all_tables() {
    let conn = migrated_db().await;
    let job = IngestionJob::new(
        StubSource {
            inputs: cluster_inputs(),
            ..Default::default()
        },
        chain_rpc(10),
        conn.clone(),
    );

    let summary = job.run().await.unwrap();

    assert_eq!(summary.epoch, 10);
    assert_eq!(summary.stats, 2);
    assert_eq!(summary.stakers, 2);
    assert_eq!(summary.performance, 2);

    let epoch = epoch_info::Entity::find_by_id(10).one(&conn).await.unwrap().unwrap();
    assert_eq!(epoch.slots_in_epoch, 1000);

    let alpha = validators::Entity::find_by_id("vote-a".to_string())
        .one(&conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(alpha.name.as_deref(), Some("Alpha Validator"));
    assert_eq!(alpha.website.as_deref(), Some("https://alpha.example"));
    assert_eq!(alpha.skip_rate, Some(5.0));

    let beta = validators::Entity::find_by_id("vote-b".to_string())
        .one(&conn)
        .await
        .unwrap()
        .unwrap();
    assert!(beta.name.is_none());
    assert_eq!(beta.skip_rate, Some(0.0));

    let rows = stats::Entity::find()
        .order_by_asc(stats::Column::Id)
        .all(&conn)
        .await
        .unwrap();
    assert_eq!(rows[0].vote_account_pubkey, "vote-a");
    assert_eq!((rows[0].stakers, rows[0].stake), (2, 15));
    assert_eq!(rows[0].leader_slots, 40);
    assert_eq!(rows[1].vote_account_pubkey, "vote-b");
    assert_eq!((rows[1].stakers, rows[1].stake), (1, 1));
    assert_eq!(
        (rows[1].leader_slots, rows[1].blocks_produced, rows[1].skipped_slots),
        (0, 0, 0)
    );
    assert!(rows.iter().all(|row| row.slot == 10_120));

    let accounts = stakers::Entity::find().all(&conn).await.unwrap();
    assert!(accounts.iter().all(|account| account.stake_pubkey != "stake-3"));
    assert_eq!(accounts[0].activation_epoch, Some(3));
    assert_eq!(accounts[0].deactivation_epoch, None);

    let performance = validator_performance::Entity::find_by_id(("vote-a".to_string(), 10))
        .one(&conn)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(performance.credits, 800);
    assert_eq!((performance.credits_start, performance.credits_end), (400, 1200));
    assert!((performance.skip_rate - 0.2).abs() < 1e-9);
}

#[tokio::test]
async fn test_failed_validator_info_fetch_leaves_tables_unchanged() {
    let conn = migrated_db().await;
    IngestionJob::new(
        StubSource {
            inputs: cluster_inputs(),
            ..Default::default()
        },
        chain_rpc(10),
        conn.clone(),
    )
    .run()
    .await
    .unwrap();
    let before = table_dump(&conn).await;

    let mut changed = cluster_inputs();
    changed.validators.push(validator("identity-c", "vote-c", Some(1.0)));
    changed.stakes.push(stake("stake-4", Some("vote-c"), 9, Some(9)));
    let err = IngestionJob::new(
        StubSource {
            inputs: changed,
            fail_validator_info: true,
        },
        chain_rpc(11),
        conn.clone(),
    )
    .run()
    .await
    .unwrap_err();

    assert!(matches!(err, IngestionError::Cli(_)));
    assert_eq!(table_dump(&conn).await, before);
}

#[tokio::test]
async fn test_late_write_failure_rolls_back_earlier_writes() {
    let conn = migrated_db().await;
    IngestionJob::new(
        StubSource {
            inputs: cluster_inputs(),
            ..Default::default()
        },
        chain_rpc(10),
        conn.clone(),
    )
    .run()
    .await
    .unwrap();
    let stats_before = stats::Entity::find().all(&conn).await.unwrap();

    // The stakers reload is the last write of a run
    conn.execute_unprepared("DROP TABLE stakers").await.unwrap();

    let mut changed = cluster_inputs();
    changed.slot = 20_000;
    let err = IngestionJob::new(
        StubSource {
            inputs: changed,
            ..Default::default()
        },
        chain_rpc(11),
        conn.clone(),
    )
    .run()
    .await
    .unwrap_err();

    assert!(matches!(err, IngestionError::Db(_)));
    assert_eq!(stats::Entity::find().all(&conn).await.unwrap(), stats_before);
    assert!(epoch_info::Entity::find_by_id(11).one(&conn).await.unwrap().is_none());
}

#[tokio::test]
async fn test_missing_epoch_info_is_fatal() {
    let conn = migrated_db().await;
    let err = IngestionJob::new(
        StubSource {
            inputs: cluster_inputs(),
            ..Default::default()
        },
        StubRpc::default(),
        conn.clone(),
    )
    .run()
    .await
    .unwrap_err();

    assert!(matches!(err, IngestionError::MissingData(_)));
    assert_eq!(validators::Entity::find().count(&conn).await.unwrap(), 0);
}

#[tokio::test]
async fn test_performance_upsert_replay_keeps_one_row() {
    let conn = migrated_db().await;
    let mut record = PerformanceRecord {
        vote_pubkey: "vote-a".to_string(),
        epoch: 10,
        credits: 100,
        credits_start: 0,
        credits_end: 100,
        skip_rate: 0.9,
    };

    PerformanceRepository::upsert_many(&conn, &[record.clone()], Utc::now())
        .await
        .unwrap();
    PerformanceRepository::upsert_many(&conn, &[record.clone()], Utc::now())
        .await
        .unwrap();
    record.credits = 700;
    record.credits_end = 700;
    record.skip_rate = 0.3;
    PerformanceRepository::upsert_many(&conn, &[record], Utc::now())
        .await
        .unwrap();

    let rows = validator_performance::Entity::find().all(&conn).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].credits, 700);
    assert_eq!(rows[0].credits_end, 700);
    assert_eq!(rows[0].skip_rate, 0.3);
}

#[tokio::test]
async fn test_replace_all_reloads_snapshot_tables() {
    let conn = migrated_db().await;
    let source = StubSource {
        inputs: cluster_inputs(),
        ..Default::default()
    };
    IngestionJob::new(source, chain_rpc(10), conn.clone())
        .run()
        .await
        .unwrap();

    let mut next = cluster_inputs();
    next.validators.truncate(1);
    next.stakes = vec![stake("stake-9", Some("vote-a"), 3, Some(3))];
    IngestionJob::new(
        StubSource {
            inputs: next,
            ..Default::default()
        },
        chain_rpc(10),
        conn.clone(),
    )
    .run()
    .await
    .unwrap();

    let rows = stats::Entity::find().all(&conn).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, 1);
    assert_eq!((rows[0].stakers, rows[0].stake), (1, 3));

    let accounts = stakers::Entity::find().all(&conn).await.unwrap();
    assert_eq!(accounts.len(), 1);
    assert_eq!(accounts[0].stake_pubkey, "stake-9");

    // Validators are "latest known value" rows and survive the reload
    assert_eq!(validators::Entity::find().count(&conn).await.unwrap(), 2);
    assert_eq!(epoch_info::Entity::find().count(&conn).await.unwrap(), 1);
}

#[tokio::test]
async fn test_empty_snapshot_empties_tables() {
    let conn = migrated_db().await;
    IngestionJob::new(
        StubSource {
            inputs: cluster_inputs(),
            ..Default::default()
        },
        chain_rpc(10),
        conn.clone(),
    )
    .run()
    .await
    .unwrap();

    assert_eq!(SnapshotRepository::replace_stats(&conn, &[], Utc::now()).await.unwrap(), 0);
    assert_eq!(SnapshotRepository::replace_stakers(&conn, &[], Utc::now()).await.unwrap(), 0);
    assert_eq!(stats::Entity::find().count(&conn).await.unwrap(), 0);
    assert_eq!(stakers::Entity::find().count(&conn).await.unwrap(), 0);
}

#[derive(Debug, PartialEq)]
struct TableDump {
    validators: Vec<validators::Model>,
    performance: Vec<validator_performance::Model>,
    epochs: Vec<epoch_info::Model>,
    stats: Vec<stats::Model>,
    stakers: Vec<stakers::Model>,
}

async fn table_dump(conn: &sea_orm::DatabaseConnection) -> TableDump {
    TableDump {
        validators: validators::Entity::find().all(conn).await.unwrap(),
        performance: validator_performance::Entity::find().all(conn).await.unwrap(),
        epochs: epoch_info::Entity::find().all(conn).await.unwrap(),
        stats: stats::Entity::find().all(conn).await.unwrap(),
        stakers: stakers::Entity::find().all(conn).await.unwrap(),
    }
}
