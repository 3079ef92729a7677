//! School Records Backend
//!
//! Serves the School Management System's admin, teacher and student screens
//! from three JSON files in a data directory.

mod api;
mod auth;
mod config;
mod errors;
mod models;
mod store;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use store::{IdentityResolver, RecordStore, RosterMutator};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub resolver: IdentityResolver,
    pub mutator: RosterMutator,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: RecordStore, config: Config) -> Self {
        Self {
            resolver: IdentityResolver::new(store.clone()),
            mutator: RosterMutator::new(store),
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let (text_layer, json_layer) = if config.log_json {
        (None, Some(tracing_subscriber::fmt::layer().json()))
    } else {
        (Some(tracing_subscriber::fmt::layer()), None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .init();

    tracing::info!("Starting School Records Backend");
    tracing::info!("Data directory: {:?}", config.data_dir);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (SCHOOL_API_PSK). Authentication is disabled!");
    }

    let store =
        store::init_data_dir(&config.data_dir, config.bootstrap_admin_id.as_deref()).await?;

    let bind_addr = config.bind_addr;
    let app = create_router(AppState::new(store, config));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let psk = state.config.api_psk.clone();

    let api_routes = Router::new()
        // Login
        .route("/login/admin", post(api::login_admin))
        .route("/login/teacher", post(api::login_teacher))
        .route("/login/student", post(api::login_student))
        // Admin account
        .route("/admin/profile-pic", put(api::update_profile_pic))
        // Classes
        .route("/classes", get(api::list_classes).post(api::create_class))
        .route(
            "/classes/{class}/students",
            get(api::list_students).post(api::create_student),
        )
        .route("/classes/{class}/marks", post(api::evaluate_student))
        // Teachers
        .route("/teachers", post(api::create_teacher))
        .route("/teachers/{id}/classes", get(api::teacher_classes))
        // Students
        .route("/students/{class}/{id}/report", get(api::report_card))
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
