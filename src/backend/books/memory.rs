/**
 * In-Memory Book Store
 *
 * Keeps books in a vector behind a `tokio::sync::RwLock`, in insertion
 * order. Used when no database is configured and by the test suites.
 *
 * # Thread Safety
 *
 * Reads take the shared lock; insert, update and delete take the exclusive
 * lock for the whole read-modify-write, so each call is atomic.
 */

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::backend::books::model::{BookPatch, NewBook};
use crate::backend::books::query::{BookFilter, BookSort};
use crate::backend::books::store::BookStore;
use crate::backend::error::StoreError;
use crate::shared::Book;

#[derive(Debug, Clone, Default)]
pub struct MemoryBookStore {
    books: Arc<RwLock<Vec<Book>>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, book: NewBook) -> Result<Book, StoreError> {
        let now = Utc::now();
        let book = Book {
            id: Uuid::new_v4(),
            title: book.title,
            author: book.author,
            category: book.category,
            price: book.price,
            rating: book.rating,
            published_date: book.published_date,
            created_at: now,
            updated_at: now,
        };
        self.books.write().await.push(book.clone());
        Ok(book)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, StoreError> {
        let books = self.books.read().await;
        Ok(books.iter().find(|book| book.id == id).cloned())
    }

    async fn find(
        &self,
        filter: &BookFilter,
        sort: Option<BookSort>,
        skip: u64,
        limit: u32,
    ) -> Result<Vec<Book>, StoreError> {
        let books = self.books.read().await;
        let mut matching: Vec<&Book> = books.iter().filter(|book| filter.matches(book)).collect();

        // sort_by is stable, so ties stay in insertion order
        if let Some(sort) = sort {
            matching.sort_by(|a, b| sort.compare(a, b));
        }

        let skip = usize::try_from(skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        Ok(matching
            .into_iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, filter: &BookFilter) -> Result<u64, StoreError> {
        let books = self.books.read().await;
        let count = books.iter().filter(|book| filter.matches(book)).count();
        Ok(u64::try_from(count).unwrap_or(u64::MAX))
    }

    async fn update(&self, id: Uuid, patch: BookPatch) -> Result<Option<Book>, StoreError> {
        let mut books = self.books.write().await;
        Ok(books.iter_mut().find(|book| book.id == id).map(|book| {
            patch.apply(book, Utc::now());
            book.clone()
        }))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|book| book.id != id);
        Ok(books.len() < before)
    }
}
