/**
 * User Model and Credential Stores
 *
 * This module defines the stored user record and the `UserStore` interface
 * with its in-memory and PostgreSQL implementations.
 *
 * Emails are unique. A second insert with the same email fails with
 * `StoreError::Duplicate`, whether the store checks it itself (memory) or the
 * database rejects it (`users_email_key` unique constraint).
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::error::StoreError;

/// User struct representing a registered account
///
/// Never serialized into a response; handlers only hand out tokens.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Normalized (trimmed, lowercase) email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user about to be registered
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user; `StoreError::Duplicate` if the email is taken
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;
}

fn email_taken(email: &str) -> StoreError {
    StoreError::duplicate(format!("Email {email} already registered"))
}

/// Users keyed by email behind a `tokio::sync::RwLock`
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(email_taken(&user.email));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: user.email,
            password_hash: user.password_hash,
            created_at: now,
            updated_at: now,
        };
        users.insert(user.email.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        Ok(self.users.read().await.get(email).cloned())
    }
}

/// `UserStore` backed by the `users` table
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, email, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, email, password_hash, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(err)) if err.is_unique_violation() => {
                Err(email_taken(&user.email))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, email, password_hash, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            email: email.to_string(),
            password_hash: "$2b$04$hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_insert_and_lookup() {
        let store = MemoryUserStore::new();
        let user = store.insert(new_user("test@example.com")).await.unwrap();

        let by_email = store.find_by_email("test@example.com").await.unwrap();
        assert_eq!(by_email, Some(user));
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let store = MemoryUserStore::new();
        store.insert(new_user("test@example.com")).await.unwrap();

        let result = store.insert(new_user("test@example.com")).await;
        assert_matches!(result, Err(StoreError::Duplicate { .. }));
    }

    #[tokio::test]
    async fn test_unknown_user() {
        let store = MemoryUserStore::new();
        assert_eq!(store.find_by_email("nobody@example.com").await.unwrap(), None);
    }
}
