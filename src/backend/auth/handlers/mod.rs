//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! └── login.rs    - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /auth/signup - User registration (201)
//! - **`login`** - POST /auth/login - User authentication
//!
//! Both return `{"access_token": "..."}`.

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

pub use types::{AuthResponse, LoginRequest, SignupRequest};

pub use login::login;
pub use signup::signup;
