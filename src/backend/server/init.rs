/**
 * Server Initialization
 *
 * This module builds the application: it picks the stores, assembles the
 * state and configures the router.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations if `DATABASE_URL` is set
 * 2. Otherwise fall back to in-memory stores
 * 3. Create the router with all routes and middleware
 *
 * A configured database that cannot be reached, or whose migrations fail,
 * aborts startup.
 */

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::routes::router::create_router;
use crate::backend::server::config::{ConfigError, ServerConfig};
use crate::backend::server::state::AppState;

const MAX_DB_CONNECTIONS: u32 = 10;

/// Startup failures
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Connect to `database_url` and bring the schema up to date
pub async fn load_database(database_url: &str) -> Result<PgPool, ServerError> {
    tracing::info!("Connecting to database...");
    let pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(database_url)
        .await
        .inspect_err(|e| tracing::error!("Failed to create database connection pool: {:?}", e))?;
    tracing::info!("Database connection pool created successfully");

    tracing::info!("Running database migrations...");
    sqlx::migrate!()
        .run(&pool)
        .await
        .inspect_err(|e| tracing::error!("Failed to run database migrations: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    Ok(pool)
}

/// Build the application state for `config`
pub async fn create_state(config: &ServerConfig) -> Result<AppState, ServerError> {
    match &config.database_url {
        Some(url) => {
            let pool = load_database(url).await?;
            Ok(AppState::postgres(pool, &config.auth))
        }
        None => {
            tracing::warn!("DATABASE_URL not set. Using in-memory stores; data is lost on restart.");
            Ok(AppState::in_memory(&config.auth))
        }
    }
}

/// Create and configure the Axum application
pub async fn create_app(config: &ServerConfig) -> Result<Router, ServerError> {
    tracing::info!("Initializing books backend server");
    let state = create_state(config).await?;
    let app = create_router(state);
    tracing::info!("Router configured");
    Ok(app)
}
