// Explorer API server entry point

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod routes;
mod services;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nexscan_indexer::infrastructure::rpc::RpcClient;

use config::ApiConfig;
use db::DbPool;
use handlers::ApiState;

fn load_env() {
    dotenv::dotenv().ok();
}

#[tokio::main]
async fn main() {
    load_env();
    // Configure logging with tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load API configuration from environment
    let config = ApiConfig::from_env();
    tracing::info!("Configuration loaded, RPC endpoint {}", config.rpc.endpoint);

    // Establish database connection pool
    let db_pool = match DbPool::new(&config).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to database");

    let rpc = match RpcClient::new(&config.rpc) {
        Ok(rpc) => rpc,
        Err(e) => {
            tracing::error!("Failed to build RPC client: {}", e);
            std::process::exit(1);
        }
    };

    let app_state = Arc::new(ApiState {
        repositories: db_pool.repositories(),
        rpc: Arc::new(rpc),
        performance_history_limit: config.performance_history_limit,
    });

    let app = routes::create_router(app_state);

    // Parse server address from config
    let addr: SocketAddr = match config.server_addr().parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("Invalid address {}: {}", config.server_addr(), e);
            std::process::exit(1);
        }
    };

    // Start HTTP server
    tracing::info!("Starting server on {}", addr);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };
    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
