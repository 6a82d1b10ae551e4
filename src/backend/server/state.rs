/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the two services. Each service owns its collaborators
 * behind `Arc<dyn ...>`, so cloning the state per request is cheap and the
 * same router runs over the in-memory or PostgreSQL stores.
 *
 * # State Extraction
 *
 * Handlers extract only the service they need:
 *
 * ```rust
 * use axum::extract::State;
 * use books_api::backend::books::BookService;
 *
 * async fn handler(State(books): State<BookService>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::backend::auth::{AuthService, JwtSigner, MemoryUserStore, PgUserStore, UserStore};
use crate::backend::books::{BookService, MemoryBookStore, PgBookStore};
use crate::backend::server::config::AuthConfig;

#[derive(Clone)]
pub struct AppState {
    pub books: BookService,
    pub auth: AuthService,
}

impl AppState {
    pub fn new(books: BookService, auth: AuthService) -> Self {
        Self { books, auth }
    }

    /// State over empty in-memory stores
    pub fn in_memory(config: &AuthConfig) -> Self {
        Self::new(
            BookService::new(Arc::new(MemoryBookStore::new())),
            auth_service(Arc::new(MemoryUserStore::new()), config),
        )
    }

    /// State over the PostgreSQL stores sharing `pool`
    pub fn postgres(pool: PgPool, config: &AuthConfig) -> Self {
        Self::new(
            BookService::new(Arc::new(PgBookStore::new(pool.clone()))),
            auth_service(Arc::new(PgUserStore::new(pool)), config),
        )
    }
}

fn auth_service(users: Arc<dyn UserStore>, config: &AuthConfig) -> AuthService {
    let signer = Arc::new(JwtSigner::new(&config.jwt_secret, config.token_ttl_secs));
    AuthService::new(users, signer, config.bcrypt_cost)
}

impl FromRef<AppState> for BookService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.books.clone()
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}
