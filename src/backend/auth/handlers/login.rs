/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /auth/login.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown emails and wrong passwords both return 401 with the same message
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::rejection::JsonRejection, extract::State, response::Json};
use serde_json::Value;

use crate::backend::auth::handlers::types::{AuthResponse, LoginRequest, CREDENTIAL_FIELDS};
use crate::backend::auth::service::AuthService;
use crate::backend::error::{BackendError, ErrorBody};
use crate::shared::decode_body;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - undecodable body
/// * `401 Unauthorized` - unknown email or wrong password
/// * `500 Internal Server Error` - store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/login HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "securepassword123" }
/// ```
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = AuthResponse),
        (status = 400, description = "Invalid body", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AuthResponse>, BackendError> {
    let Json(body) = payload?;
    let request: LoginRequest = decode_body(body, CREDENTIAL_FIELDS)?;
    tracing::info!("Login request for: {}", request.email);

    let access_token = auth.login(&request.email, &request.password).await?;
    Ok(Json(AuthResponse { access_token }))
}
