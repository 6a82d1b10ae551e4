//! Books Module
//!
//! The book catalog: validation of incoming payloads, the query component
//! that turns filter/sort/page parameters into a store query, the store
//! interface with its in-memory and PostgreSQL implementations, the service
//! implementing the CRUD operations, and the HTTP handlers.
//!
//! # Module Structure
//!
//! ```text
//! books/
//! ├── mod.rs         - Module exports and documentation
//! ├── model.rs       - Validated inputs (NewBook, BookPatch)
//! ├── validation.rs  - Field constraint checks
//! ├── query.rs       - Listing filters, sorting and pagination
//! ├── store.rs       - BookStore trait
//! ├── memory.rs      - In-memory BookStore
//! ├── postgres.rs    - PostgreSQL BookStore
//! ├── service.rs     - BookService (create/find_all/find_one/update/remove)
//! └── handlers.rs    - HTTP handlers for /books
//! ```
//!
//! # Identifiers
//!
//! Book ids are UUIDs. A path segment that is not a UUID is reported exactly
//! like a missing record (`404`), so clients cannot tell the two apart.

/// Validated book inputs
pub mod model;

/// Field constraint checks
pub mod validation;

/// Listing query component
pub mod query;

/// Store interface
pub mod store;

/// In-memory store
pub mod memory;

/// PostgreSQL store
pub mod postgres;

/// CRUD service
pub mod service;

/// HTTP handlers
pub mod handlers;

pub use memory::MemoryBookStore;
pub use model::{BookPatch, NewBook};
pub use postgres::PgBookStore;
pub use query::{BookFilter, BookListQuery, BookQuery, BookSort, BookSortField, SortOrder};
pub use service::BookService;
pub use store::BookStore;
