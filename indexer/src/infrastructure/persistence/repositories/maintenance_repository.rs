use chrono::{DateTime, Utc};
use sea_orm::{ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::infrastructure::persistence::entities::stats;
use crate::infrastructure::persistence::error::DbError;

/// Repository for housekeeping statements
#[derive(Clone, Debug)]
pub struct MaintenanceRepository {
    conn: DatabaseConnection,
}

impl MaintenanceRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Delete stats rows created before `cutoff`
    pub async fn delete_stats_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DbError> {
        let result = stats::Entity::delete_many()
            .filter(stats::Column::CreatedAt.lt(cutoff))
            .exec(&self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Refresh one materialized view
    pub async fn refresh_materialized_view(&self, name: &str) -> Result<(), DbError> {
        if !is_sql_identifier(name) {
            return Err(DbError::QueryError(format!(
                "Invalid materialized view name: {:?}",
                name
            )));
        }

        self.conn
            .execute_unprepared(&format!("REFRESH MATERIALIZED VIEW {}", name))
            .await
            .map(|_| ())
            .map_err(|e| DbError::QueryError(e.to_string()))
    }
}

/// `name` or `schema.name`, each part `[A-Za-z_][A-Za-z0-9_]*`
fn is_sql_identifier(name: &str) -> bool {
    let parts: Vec<&str> = name.split('.').collect();
    parts.len() <= 2
        && parts.iter().all(|part| {
            let mut chars = part.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
}
