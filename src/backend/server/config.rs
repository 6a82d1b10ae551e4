/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables, with
 * defaults for local development. `main` loads a `.env` file first if one
 * is present.
 *
 * # Variables
 *
 * - `SERVER_HOST` (default `0.0.0.0`)
 * - `SERVER_PORT` (default `3000`)
 * - `DATABASE_URL` (optional; in-memory stores when unset)
 * - `JWT_SECRET` (development default, logged as a warning)
 * - `JWT_EXPIRES_IN_SECS` (default 86400)
 * - `BCRYPT_COST` (default `bcrypt::DEFAULT_COST`, 4..=31)
 *
 * Empty values count as unset. Unparseable numbers are errors.
 */

use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;
pub const DEV_JWT_SECRET: &str = "dev-secret-change-in-production";

const MIN_BCRYPT_COST: u32 = 4;
const MAX_BCRYPT_COST: u32 = 31;

/// Configuration errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },

    #[error("BCRYPT_COST must be between 4 and 31, got {0}")]
    BcryptCostOutOfRange(u32),
}

/// Token and password hashing settings
#[derive(Debug, Clone, PartialEq)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// PostgreSQL connection string; `None` selects the in-memory stores
    pub database_url: Option<String>,
    pub auth: AuthConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            database_url: None,
            auth: AuthConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());

        let jwt_secret = var("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set. Using the development secret.");
            DEV_JWT_SECRET.to_string()
        });

        let bcrypt_cost = parse_or("BCRYPT_COST", var("BCRYPT_COST"), bcrypt::DEFAULT_COST)?;
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&bcrypt_cost) {
            return Err(ConfigError::BcryptCostOutOfRange(bcrypt_cost));
        }

        Ok(Self {
            host: var("SERVER_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or("SERVER_PORT", var("SERVER_PORT"), DEFAULT_PORT)?,
            database_url: var("DATABASE_URL"),
            auth: AuthConfig {
                jwt_secret,
                token_ttl_secs: parse_or(
                    "JWT_EXPIRES_IN_SECS",
                    var("JWT_EXPIRES_IN_SECS"),
                    DEFAULT_TOKEN_TTL_SECS,
                )?,
                bcrypt_cost,
            },
        })
    }

    /// `host:port` for the TCP listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        None => Ok(default),
    }
}
