use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::prelude::*;
use std::error::Error;
use tracing::{error, info};

use crate::config::DatabaseConfig;

async fn connect() -> Result<DatabaseConnection, Box<dyn Error>> {
    let config = DatabaseConfig::from_env()?;
    let target = config
        .postgres
        .as_ref()
        .map(|pg| format!("postgres {}:{}/{}", pg.host, pg.port, pg.name))
        .unwrap_or_else(|| config.url.clone());

    info!("Connecting to database: {}", target);

    Database::connect(&config.url).await.map_err(|e| {
        error!("Failed to connect to database: {}", e);
        e.into()
    })
}

/// Execute the migrate command
pub async fn execute(steps: Option<u32>) -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let all_migrations = migration::Migrator::get_migration_files();
    info!("Found {} migration files", all_migrations.len());

    match steps {
        Some(n) => info!("Running {} migrations", n),
        None => info!("Running all pending migrations"),
    }

    migration::Migrator::up(&connection, steps).await.map_err(|e| {
        error!("Failed to run migrations: {}", e);
        e
    })?;

    info!("Migrations applied");
    Ok(())
}

/// Drop every table and re-apply all migrations
pub async fn reset() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    info!("Dropping all tables and re-running migrations");
    migration::Migrator::fresh(&connection).await.map_err(|e| {
        error!("Failed to reset database: {}", e);
        e
    })?;

    info!("Database reset complete");
    Ok(())
}

/// Log every migration with its applied/pending state
pub async fn status() -> Result<(), Box<dyn Error>> {
    let connection = connect().await?;

    let migrations = migration::Migrator::get_migration_with_status(&connection).await?;
    let pending = migration::Migrator::get_pending_migrations(&connection).await?.len();

    for m in &migrations {
        info!("{:<50} {:?}", m.name(), m.status());
    }
    info!(
        "{} applied, {} pending",
        migrations.len().saturating_sub(pending),
        pending
    );

    Ok(())
}
