//! Wedding RSVP Service
//!
//! Guest RSVP form and password-gated admin dashboard in front of a
//! spreadsheet-backed RSVP store endpoint.

mod admin;
mod api;
mod auth;
mod config;
mod errors;
mod models;
mod rsvp;
mod store;
mod views;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use admin::AdminFlow;
use auth::SessionStore;
use config::Config;
use rsvp::SubmissionFlow;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub submission: SubmissionFlow,
    pub admin: AdminFlow,
    pub sessions: Arc<SessionStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn store::RsvpStore>, session_idle_timeout: Duration) -> Self {
        Self {
            submission: SubmissionFlow::new(store.clone()),
            admin: AdminFlow::new(store),
            sessions: Arc::new(SessionStore::new(session_idle_timeout)),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Wedding RSVP service");
    tracing::info!("Bind address: {}", config.bind_addr);
    tracing::info!("Write mode: {:?}", config.write_mode);

    let store = store::build_store(&config)?;
    let state = AppState::new(store, config.session_idle_timeout);

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let guest_routes = Router::new()
        .route("/", get(api::index))
        .route("/rsvp", get(api::rsvp_form).post(api::submit_rsvp));

    let admin_routes = Router::new()
        .route("/admin", get(api::admin_home))
        .route("/admin/login", post(api::login))
        .route("/admin/logout", post(api::logout))
        .route(
            "/admin/delete",
            get(api::confirm_delete).post(api::delete_rsvp),
        );

    // Health check
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(guest_routes)
        .merge(admin_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
