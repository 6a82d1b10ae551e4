/**
 * Auth Service
 *
 * Credential checks and token issuance on top of a `UserStore` and a
 * `TokenSigner`.
 *
 * # Operations
 *
 * - `signup` - register a new email, return a token
 * - `login` - check credentials, return a token
 * - `validate` - check credentials without raising on a mismatch
 * - `verify_token` - decode a bearer token for the auth middleware
 *
 * Emails are trimmed and lowercased before every lookup, so
 * `User@Example.com` and `user@example.com` are the same account.
 */

use std::sync::Arc;

use bcrypt::{hash, verify};

use crate::backend::auth::sessions::{Claims, TokenSigner};
use crate::backend::auth::users::{NewUser, User, UserStore};
use crate::backend::error::{BackendError, StoreError};

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    signer: Arc<dyn TokenSigner>,
    bcrypt_cost: u32,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, signer: Arc<dyn TokenSigner>, bcrypt_cost: u32) -> Self {
        Self {
            users,
            signer,
            bcrypt_cost,
        }
    }

    /// Register `email` and return a session token
    ///
    /// # Errors
    ///
    /// * `Conflict` - the email is already registered
    /// * `Internal` - hashing or signing failed
    pub async fn signup(&self, email: &str, password: &str) -> Result<String, BackendError> {
        let email = normalize_email(email);

        if self.users.find_by_email(&email).await?.is_some() {
            tracing::warn!("Email already registered: {}", email);
            return Err(email_conflict());
        }

        let password_hash = hash_password(password, self.bcrypt_cost).await?;

        // A concurrent signup can still win the race between lookup and insert
        let user = match self.users.insert(NewUser { email, password_hash }).await {
            Ok(user) => user,
            Err(StoreError::Duplicate { message }) => {
                tracing::warn!("{}", message);
                return Err(email_conflict());
            }
            Err(err) => return Err(err.into()),
        };

        let token = self.issue_token(&user)?;
        tracing::info!("User created successfully: {} ({})", user.email, user.id);
        Ok(token)
    }

    /// Check credentials and return a session token
    ///
    /// Unknown emails and wrong passwords fail the same way.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, BackendError> {
        let user = self.validate(email, password).await?.ok_or_else(|| {
            tracing::warn!("Invalid credentials for: {}", email);
            BackendError::unauthorized("Invalid credentials")
        })?;

        let token = self.issue_token(&user)?;
        tracing::info!("User logged in successfully: {}", user.email);
        Ok(token)
    }

    /// The user owning `email` if `password` matches its hash
    pub async fn validate(&self, email: &str, password: &str) -> Result<Option<User>, BackendError> {
        let Some(user) = self.users.find_by_email(&normalize_email(email)).await? else {
            return Ok(None);
        };

        let valid = verify_password(password, &user.password_hash).await?;

        Ok(valid.then_some(user))
    }

    /// Decode a bearer token, checking signature and expiry
    pub fn verify_token(&self, token: &str) -> Result<Claims, BackendError> {
        self.signer.verify(token).map_err(|e| {
            tracing::warn!("Invalid token: {:?}", e);
            BackendError::unauthorized("Invalid or expired token")
        })
    }

    fn issue_token(&self, user: &User) -> Result<String, BackendError> {
        self.signer.sign(user.id, &user.email).map_err(|e| {
            tracing::error!("Failed to create token: {:?}", e);
            BackendError::internal(format!("token signing failed: {e}"))
        })
    }
}

// bcrypt calls run on the blocking pool

async fn hash_password(password: &str, cost: u32) -> Result<String, BackendError> {
    let password = password.to_owned();
    tokio::task::spawn_blocking(move || hash(password, cost))
        .await
        .map_err(|e| BackendError::internal(format!("password hashing task failed: {e}")))?
        .map_err(|e| {
            tracing::error!("Failed to hash password: {:?}", e);
            BackendError::internal(format!("password hashing failed: {e}"))
        })
}

async fn verify_password(password: &str, password_hash: &str) -> Result<bool, BackendError> {
    let password = password.to_owned();
    let password_hash = password_hash.to_owned();
    tokio::task::spawn_blocking(move || verify(password, &password_hash))
        .await
        .map_err(|e| BackendError::internal(format!("password verification task failed: {e}")))?
        .map_err(|e| {
            tracing::error!("Password verification error: {:?}", e);
            BackendError::internal(format!("password verification failed: {e}"))
        })
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn email_conflict() -> BackendError {
    BackendError::conflict("Email already registered")
}
