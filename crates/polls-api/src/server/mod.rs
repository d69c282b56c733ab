//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use axum::Router;
use polls_common::{AppConfig, AppError};
use polls_db::{create_pool, run_migrations, PgChoiceRepository, PgQuestionRepository};
use polls_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = polls_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending schema migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;

    // Create repositories
    let question_repo = Arc::new(PgQuestionRepository::new(pool.clone()));
    let choice_repo = Arc::new(PgChoiceRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContext::new(question_repo, choice_repo);

    Ok(AppState::new(service_context, pool, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Resolve the bind address from the server configuration
fn bind_address(config: &AppConfig) -> Result<SocketAddr, AppError> {
    let host: IpAddr = config.server.host.parse().map_err(|e| {
        AppError::Config(format!(
            "Invalid SERVER_HOST '{}': {}",
            config.server.host, e
        ))
    })?;

    Ok(SocketAddr::new(host, config.server.port))
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = bind_address(&config)?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
