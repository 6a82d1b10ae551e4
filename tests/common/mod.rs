//! Common test utilities and helpers
//!
//! - In-process app over in-memory stores, driven with `oneshot`
//! - Authentication helpers (signup, tokens)
//! - Custom assertion macros
#![allow(dead_code)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;

pub use app::*;
pub use auth_helpers::*;
