/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /auth/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Reject an already registered email
 * 3. Hash password using bcrypt
 * 4. Create user
 * 5. Return a JWT
 *
 * # Validation
 *
 * - Email must look like `local@domain` with no whitespace
 * - Password must be at least 8 characters long
 */

use axum::{extract::rejection::JsonRejection, extract::State, http::StatusCode, response::Json};
use serde_json::Value;

use crate::backend::auth::handlers::types::{AuthResponse, SignupRequest, CREDENTIAL_FIELDS};
use crate::backend::auth::service::AuthService;
use crate::backend::error::{BackendError, ErrorBody};
use crate::shared::{decode_body, FieldErrors, SharedError};

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate email format
///
/// Emails must have exactly one `@` with a non-empty local part and domain,
/// and no whitespace anywhere. Surrounding whitespace is ignored.
fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn validate_signup(request: &SignupRequest) -> Result<(), SharedError> {
    let mut errors = FieldErrors::new();
    if !is_valid_email(&request.email) {
        errors.push("email", "email must be an email");
    }
    if request.password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.push(
            "password",
            format!("password must be longer than or equal to {MIN_PASSWORD_LENGTH} characters"),
        );
    }
    errors.into_result(())
}

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - undecodable body, invalid email or short password
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing, store or signing failure
///
/// # Example Request
///
/// ```http
/// POST /auth/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "securepassword123" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
#[utoipa::path(
    post,
    path = "/auth/signup",
    tag = "auth",
    request_body = SignupRequest,
    responses(
        (status = 201, description = "User created", body = AuthResponse),
        (status = 400, description = "Invalid email or password", body = ErrorBody),
        (status = 409, description = "Email already registered", body = ErrorBody)
    )
)]
pub async fn signup(
    State(auth): State<AuthService>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), BackendError> {
    let Json(body) = payload?;
    let request: SignupRequest = decode_body(body, CREDENTIAL_FIELDS)?;
    tracing::info!("Signup request for email: {}", request.email);

    validate_signup(&request).inspect_err(|e| tracing::warn!("Signup rejected: {}", e))?;

    let access_token = auth.signup(&request.email, &request.password).await?;
    Ok((StatusCode::CREATED, Json(AuthResponse { access_token })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::auth::sessions::JwtSigner;
    use crate::backend::auth::users::MemoryUserStore;
    use assert_matches::assert_matches;
    use serde_json::json;
    use std::sync::Arc;

    fn auth() -> AuthService {
        AuthService::new(
            Arc::new(MemoryUserStore::new()),
            Arc::new(JwtSigner::new("test-secret", 3600)),
            4,
        )
    }

    fn request(email: &str, password: &str) -> SignupRequest {
        SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    fn body(email: &str, password: &str) -> Json<Value> {
        Json(json!({ "email": email, "password": password }))
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("  user@localhost "));
        assert!(!is_valid_email("invalid-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("a@b@example.com"));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn test_validate_signup_collects_both_fields() {
        let error = validate_signup(&request("nope", "short")).unwrap_err();
        let fields: Vec<&str> = error
            .field_errors()
            .unwrap()
            .iter()
            .map(|e| e.field.as_str())
            .collect();
        assert_eq!(fields, vec!["email", "password"]);
    }

    #[tokio::test]
    async fn test_signup_success() {
        let (status, Json(response)) = signup(
            State(auth()),
            Ok(body("newuser@example.com", "password123")),
        )
        .await
        .unwrap();

        assert_eq!(status, StatusCode::CREATED);
        assert!(!response.access_token.is_empty());
    }

    #[tokio::test]
    async fn test_signup_invalid_email() {
        let result = signup(
            State(auth()),
            Ok(body("invalid-email", "password123")),
        )
        .await;
        assert_matches!(result, Err(BackendError::SharedError(_)));
    }

    #[tokio::test]
    async fn test_signup_short_password() {
        let result = signup(State(auth()), Ok(body("user@example.com", "short"))).await;
        assert_matches!(result, Err(BackendError::SharedError(_)));
    }

    #[tokio::test]
    async fn test_signup_duplicate_email() {
        let auth = auth();
        signup(
            State(auth.clone()),
            Ok(body("duplicate@example.com", "password123")),
        )
        .await
        .unwrap();

        let result = signup(
            State(auth),
            Ok(body("duplicate@example.com", "password123")),
        )
        .await;
        assert_matches!(result, Err(ref e) if e.status_code() == StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_signup_missing_password_is_field_error() {
        let result = signup(State(auth()), Ok(Json(json!({ "email": "user@example.com" })))).await;
        let error = result.unwrap_err();
        let details = error.details().unwrap();
        assert_eq!(details.len(), 1);
        assert_eq!(details[0].field, "password");
        assert_eq!(details[0].message, "password should not be empty");
    }
}
