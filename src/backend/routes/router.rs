/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Health check
 * 2. API routes (auth, books)
 * 3. OpenAPI document and Swagger UI
 * 4. Fallback handler (JSON 404)
 *
 * A `TraceLayer` wraps everything and logs each request and response.
 */

use axum::{
    http::{Method, Uri},
    response::Json,
    routing::get,
    Router,
};
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::backend::error::BackendError;
use crate::backend::routes::api_routes::{configure_auth_routes, configure_book_routes};
use crate::backend::routes::docs::{ApiDoc, OPENAPI_PATH, SWAGGER_UI_PATH};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", get(health));

    let router = configure_auth_routes(router);
    let router = configure_book_routes(router, &app_state);

    router
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_PATH, ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
pub(crate) async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn not_found(method: Method, uri: Uri) -> BackendError {
    BackendError::not_found(format!("Cannot {} {}", method, uri.path()))
}
