/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user to handlers.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::AuthService;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub email: String,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `Authorization: Bearer <token>` header
/// 2. Verifies signature and expiry
/// 3. Attaches an `AuthenticatedUser` to the request extensions
///
/// Returns 401 if the header is missing or malformed or the token is
/// invalid or expired. The user is not looked up in the store.
pub async fn auth_middleware(
    State(auth): State<AuthService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized("Missing bearer token")
        })?;

    // Extract token (format: "Bearer <token>")
    let token = auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            tracing::warn!("Invalid Authorization header format");
            BackendError::unauthorized("Missing bearer token")
        })?;

    let claims = auth.verify_token(token)?;

    let user_id = claims.user_id().ok_or_else(|| {
        tracing::warn!("Invalid user ID in token: {}", claims.sub);
        BackendError::unauthorized("Invalid or expired token")
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id,
        email: claims.email,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the user attached by [`auth_middleware`]
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized("Missing bearer token")
            })?;

        Ok(AuthUser(user))
    }
}
