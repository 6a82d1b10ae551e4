/**
 * Session Tokens
 *
 * This module handles JWT generation and validation. Tokens are HS256 with
 * claims `{sub, email, iat, exp}`; signature and expiry are checked on every
 * protected request. There is no revocation list.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// User ID carried in `sub`
    pub fn user_id(&self) -> Option<Uuid> {
        Uuid::parse_str(&self.sub).ok()
    }
}

/// Issues and verifies session tokens
pub trait TokenSigner: Send + Sync {
    fn sign(&self, user_id: Uuid, email: &str) -> Result<String, jsonwebtoken::errors::Error>;

    /// Decode `token`, checking signature and expiry
    fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error>;
}

/// HS256 signer over a shared secret
#[derive(Clone)]
pub struct JwtSigner {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl JwtSigner {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }
}

impl TokenSigner for JwtSigner {
    fn sign(&self, user_id: Uuid, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
        let now = now_secs();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now.saturating_add(self.ttl_secs),
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(token_data.claims)
    }
}

fn now_secs() -> u64 {
    u64::try_from(Utc::now().timestamp()).unwrap_or_default()
}
