/**
 * API Routes
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/signup` - User registration
 * - `POST /auth/login` - User login
 *
 * ## Books (requires authentication)
 * - `POST /books`, `GET /books`
 * - `GET /books/{id}`, `PATCH /books/{id}`, `DELETE /books/{id}`
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, signup};
use crate::backend::books::handlers::{create_book, delete_book, get_book, list_books, update_book};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Add the public authentication routes
pub fn configure_auth_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
}

/// Add the book routes, all behind the auth middleware
///
/// `route_layer` only runs the middleware for requests that match one of
/// these routes, so unknown paths still fall through to the 404 fallback.
pub fn configure_book_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let books = Router::new()
        .route("/books", post(create_book).get(list_books))
        .route(
            "/books/{id}",
            get(get_book).patch(update_book).delete(delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            auth_middleware,
        ));

    router.merge(books)
}
