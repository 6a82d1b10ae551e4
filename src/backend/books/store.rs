//! Book store interface
//!
//! The service issues at most one store call per logical step. Each call
//! is atomic on its own (an update is a single read-modify-write); nothing
//! spans more than one call, so `find` and `count` for the same listing may
//! observe different states under concurrent writes.

use async_trait::async_trait;
use uuid::Uuid;

use crate::backend::books::model::{BookPatch, NewBook};
use crate::backend::books::query::{BookFilter, BookSort};
use crate::backend::error::StoreError;
use crate::shared::Book;

#[async_trait]
pub trait BookStore: Send + Sync {
    /// Persist a new book, assigning its id and timestamps
    async fn insert(&self, book: NewBook) -> Result<Book, StoreError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, StoreError>;

    /// Matching books in sort order (insertion order when `sort` is `None`),
    /// skipping `skip` and returning at most `limit`
    async fn find(
        &self,
        filter: &BookFilter,
        sort: Option<BookSort>,
        skip: u64,
        limit: u32,
    ) -> Result<Vec<Book>, StoreError>;

    /// Number of books matching `filter`
    async fn count(&self, filter: &BookFilter) -> Result<u64, StoreError>;

    /// Apply `patch` and return the updated book, or `None` if `id` is unknown
    async fn update(&self, id: Uuid, patch: BookPatch) -> Result<Option<Book>, StoreError>;

    /// Delete a book; `false` if `id` is unknown
    async fn delete(&self, id: Uuid) -> Result<bool, StoreError>;
}
