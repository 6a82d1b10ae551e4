//! In-process test application
//!
//! Builds the real router over in-memory stores and sends requests through
//! it with `tower::ServiceExt::oneshot`. The router is cloned per request;
//! the clones share the same stores.

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use books_api::backend::routes::create_router;
use books_api::backend::server::{AppState, AuthConfig};
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret";

/// Minimum bcrypt cost, keeps signup fast
pub const TEST_BCRYPT_COST: u32 = 4;

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        jwt_secret: TEST_SECRET.to_string(),
        token_ttl_secs: 3600,
        bcrypt_cost: TEST_BCRYPT_COST,
    }
}

#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    /// Parsed JSON body; `Value::Null` when the body is empty
    pub body: Value,
}

#[derive(Clone)]
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            router: create_router(AppState::in_memory(&test_auth_config())),
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, token: Option<&str>, body: Value) -> TestResponse {
        self.request(Method::PATCH, uri, token, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, token: Option<&str>) -> TestResponse {
        self.request(Method::DELETE, uri, token, None).await
    }
}

/// A valid create payload; override fields with `json["field"] = ...`
pub fn book_payload(title: &str, author: &str) -> Value {
    serde_json::json!({
        "title": title,
        "author": author,
        "category": "Fiction",
        "price": 19.99,
        "rating": 4.5,
        "publishedDate": "2023-01-01"
    })
}
