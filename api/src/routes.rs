// Router assembly: routes under the API prefix plus the middleware stack

use std::time::Duration;

use axum::routing::{get, Router};
use http::{header, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::handlers::{
    get_latest_epoch, get_stats, get_validator, get_validator_stakers, get_validators,
    health_check, search, AppState,
};

pub const API_PREFIX: &str = "/api/v1/nexscan";

pub fn create_router(state: AppState) -> Router {
    // Configure CORS policy
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN])
        .expose_headers([header::CONTENT_TYPE, header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(3600));

    let api = Router::new()
        .route("/stats", get(get_stats))
        .route("/search", get(search))
        .route("/validators", get(get_validators))
        .route("/validators/{vote_pubkey}", get(get_validator))
        .route("/validators/{vote_pubkey}/stakers", get(get_validator_stakers))
        .route("/epochs/latest", get(get_latest_epoch));

    Router::new()
        .route("/health", get(health_check))
        .nest(API_PREFIX, api)
        .layer(RequestBodyLimitLayer::new(64 * 1024))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
