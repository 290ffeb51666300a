use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::DbBackend;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Daily rollups of the stats table, refreshed by the housekeeping job.
// Materialized views only exist on PostgreSQL; other backends skip them.
const CREATE_STATS_STAKE: &str = r#"
CREATE MATERIALIZED VIEW IF NOT EXISTS stats_stake AS
SELECT
    vote_account_pubkey,
    date_trunc('day', created_at) AS day,
    MAX(stakers) AS stakers,
    MAX(stake) AS stake
FROM stats
GROUP BY vote_account_pubkey, date_trunc('day', created_at)
"#;

const CREATE_STATS_PERFORMANCE: &str = r#"
CREATE MATERIALIZED VIEW IF NOT EXISTS stats_performance AS
SELECT
    vote_account_pubkey,
    date_trunc('day', created_at) AS day,
    AVG(skip_rate) AS skip_rate,
    SUM(leader_slots) AS leader_slots,
    SUM(blocks_produced) AS blocks_produced,
    SUM(skipped_slots) AS skipped_slots
FROM stats
GROUP BY vote_account_pubkey, date_trunc('day', created_at)
"#;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        let conn = manager.get_connection();
        conn.execute_unprepared(CREATE_STATS_STAKE).await?;
        conn.execute_unprepared(CREATE_STATS_PERFORMANCE).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        if manager.get_database_backend() != DbBackend::Postgres {
            return Ok(());
        }

        let conn = manager.get_connection();
        conn.execute_unprepared("DROP MATERIALIZED VIEW IF EXISTS stats_performance")
            .await?;
        conn.execute_unprepared("DROP MATERIALIZED VIEW IF EXISTS stats_stake")
            .await?;

        Ok(())
    }
}
