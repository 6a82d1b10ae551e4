//! Server Module
//!
//! Configuration, application state and initialization of the Axum server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - Environment configuration
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Store selection and app creation
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use books_api::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// Application state
pub mod state;

/// Server initialization
pub mod init;

pub use config::{AuthConfig, ConfigError, ServerConfig};
pub use init::{create_app, ServerError};
pub use state::AppState;
