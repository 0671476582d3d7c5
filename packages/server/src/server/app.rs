//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{HeaderName, CONTENT_TYPE},
        Method,
    },
    middleware,
    response::Redirect,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::domains::ingestion::webhook::handle_inbound_sms;
use crate::server::middleware::require_api_key;
use crate::server::routes::{
    health_handler, idea_research_handler, list_handler, quick_add_handler, research_add_handler,
};
use crate::server::static_files::{serve_add, serve_app};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub config: Arc<Config>,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: Config) -> Router {
    let app_state = AppState {
        db_pool: pool,
        config: Arc::new(config),
    };

    // CORS configuration - the forms and browse UI may be served elsewhere
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static("x-api-key")]);

    // Authenticated JSON API
    let api = Router::new()
        .route("/quick-add", post(quick_add_handler))
        .route("/research-add", post(research_add_handler))
        .route("/list", get(list_handler))
        .route("/idea/:id/research", get(idea_research_handler))
        .layer(middleware::from_fn(require_api_key));

    Router::new()
        // Front ends
        .route("/", get(|| async { Redirect::to("/app") }))
        .route("/app", get(serve_app))
        .route("/add", get(serve_add))
        // Health check (no auth)
        .route("/health", get(health_handler))
        // Inbound SMS/MMS webhook (unauthenticated; responses are fire-and-forget)
        .route("/twilio/webhook", post(handle_inbound_sms))
        .nest("/api", api)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
