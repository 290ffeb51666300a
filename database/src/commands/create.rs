use std::error::Error;
use std::process::Command;
use tracing::{error, info};

use crate::config::DatabaseConfig;

/// Execute the create command
pub async fn execute(name: Option<String>) -> Result<(), Box<dyn Error>> {
    // Load configuration
    let config = DatabaseConfig::from_env()?;

    let Some(target) = config.postgres else {
        info!("SQLite database is created on first connection: {}", config.url);
        return Ok(());
    };

    // Use provided name or default from config
    let db_name = name.unwrap_or(target.name);
    if !db_name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') || db_name.is_empty() {
        return Err(format!("Invalid database name: {}", db_name).into());
    }

    info!("Creating database: {}", db_name);

    // Connect to the server's maintenance database
    let conn_string = format!(
        "postgresql://{}:{}@{}:{}/postgres",
        target.user, target.password, target.host, target.port
    );

    let exists = psql(
        &conn_string,
        &format!("SELECT 1 FROM pg_database WHERE datname = '{}'", db_name),
    )?;
    if exists.trim() == "1" {
        info!("Database '{}' already exists", db_name);
        return Ok(());
    }

    psql(&conn_string, &format!("CREATE DATABASE \"{}\"", db_name))?;
    info!("Database '{}' created successfully", db_name);

    Ok(())
}

/// Run one statement through `psql`, returning its tuples-only output
fn psql(conn_string: &str, sql: &str) -> Result<String, Box<dyn Error>> {
    let output = Command::new("psql")
        .arg(conn_string)
        .arg("-t")
        .arg("-c")
        .arg(sql)
        .output()
        .map_err(|e| {
            error!("Failed to execute psql command: {}", e);
            e
        })?;

    if !output.status.success() {
        let error_msg = String::from_utf8_lossy(&output.stderr);
        error!("psql failed: {}", error_msg);
        return Err(format!("psql failed: {}", error_msg.trim()).into());
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
