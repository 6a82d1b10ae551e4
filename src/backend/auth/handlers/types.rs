/**
 * Authentication Handler Types
 *
 * Request and response bodies shared by the signup and login handlers.
 * Unknown fields are rejected with `400`.
 */

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::{BodyField, FieldKind};

/// Body keys of both signup and login
pub const CREDENTIAL_FIELDS: &[BodyField] = &[
    BodyField::required("email", FieldKind::Text),
    BodyField::required("password", FieldKind::Text),
];

/// Sign up request
#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SignupRequest {
    /// User's email address (`local@domain`, no whitespace)
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User's password (at least 8 characters; hashed before storage)
    #[schema(example = "securepassword123", min_length = 8)]
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Clone, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Verified against the stored hash
    #[schema(example = "securepassword123")]
    pub password: String,
}

/// Auth response
///
/// Returned by signup and login. The token goes in
/// `Authorization: Bearer <access_token>` on every `/books` request.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct AuthResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
}
