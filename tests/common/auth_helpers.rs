//! Authentication test helpers
//!
//! Provides utilities for registering test users and generating tokens.

use books_api::backend::auth::{JwtSigner, TokenSigner};
use serde_json::json;
use uuid::Uuid;

use super::app::{TestApp, TEST_SECRET};

pub const TEST_PASSWORD: &str = "test_password_123";

pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

/// Sign up `email` through the API and return the access token
pub async fn signup_token(app: &TestApp, email: &str, password: &str) -> String {
    let response = app
        .post("/auth/signup", None, json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status.as_u16(), 201, "signup failed: {}", response.body);
    response.body["access_token"]
        .as_str()
        .expect("access_token missing")
        .to_string()
}

/// Token for a fresh user
pub async fn test_token(app: &TestApp) -> String {
    signup_token(app, &unique_email(), TEST_PASSWORD).await
}

/// Token signed with the test secret for an arbitrary subject
pub fn generate_test_token(user_id: Uuid, email: &str) -> String {
    JwtSigner::new(TEST_SECRET, 3600)
        .sign(user_id, email)
        .expect("Failed to generate test token")
}
