/**
 * Book Service
 *
 * Implements the catalog operations on top of a `BookStore`:
 *
 * - `create` - validate, persist, return the stored record
 * - `find_all` - validate the listing query, fetch one page and the total
 * - `find_one` - fetch by id
 * - `update` - validate the present fields, merge them into the record
 * - `remove` - delete by id
 *
 * Every payload is validated before the store is touched. Ids that are not
 * valid UUIDs are reported as `NotFound`, the same as unknown ids.
 */

use std::sync::Arc;

use uuid::Uuid;

use crate::backend::books::query::BookQuery;
use crate::backend::books::store::BookStore;
use crate::backend::books::validation::{validate_create, validate_update};
use crate::backend::error::BackendError;
use crate::shared::{Book, BookPage, CreateBookRequest, UpdateBookRequest};

#[derive(Clone)]
pub struct BookService {
    store: Arc<dyn BookStore>,
}

impl BookService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, request: CreateBookRequest) -> Result<Book, BackendError> {
        let new_book = validate_create(request)?;
        let book = self.store.insert(new_book).await?;
        tracing::info!("Book created: {} ({})", book.id, book.title);
        Ok(book)
    }

    /// One page of matching books plus the number of matches
    ///
    /// The page and the count are fetched concurrently as two store calls, so
    /// `total` may lag `items` if another request writes in between.
    pub async fn find_all(&self, query: BookQuery) -> Result<BookPage, BackendError> {
        let query = query.validate()?;
        let skip = query.skip();

        let (items, total) = tokio::try_join!(
            self.store.find(&query.filter, query.sort, skip, query.limit),
            self.store.count(&query.filter),
        )?;

        tracing::debug!(
            "Listed {} of {} books (page {}, limit {})",
            items.len(),
            total,
            query.page,
            query.limit
        );

        Ok(BookPage {
            items,
            total,
            page: query.page,
            limit: query.limit,
        })
    }

    pub async fn find_one(&self, id: &str) -> Result<Book, BackendError> {
        let uuid = parse_id(id)?;
        self.store
            .find_by_id(uuid)
            .await?
            .ok_or_else(|| book_not_found(id))
    }

    pub async fn update(&self, id: &str, request: UpdateBookRequest) -> Result<Book, BackendError> {
        let patch = validate_update(request)?;
        let uuid = parse_id(id)?;
        let book = self
            .store
            .update(uuid, patch)
            .await?
            .ok_or_else(|| book_not_found(id))?;
        tracing::info!("Book updated: {}", book.id);
        Ok(book)
    }

    pub async fn remove(&self, id: &str) -> Result<(), BackendError> {
        let uuid = parse_id(id)?;
        if !self.store.delete(uuid).await? {
            return Err(book_not_found(id));
        }
        tracing::info!("Book deleted: {}", uuid);
        Ok(())
    }
}

/// Malformed ids are indistinguishable from missing records
fn parse_id(id: &str) -> Result<Uuid, BackendError> {
    Uuid::parse_str(id).map_err(|_| {
        tracing::debug!("Malformed book id: {}", id);
        book_not_found(id)
    })
}

fn book_not_found(id: &str) -> BackendError {
    BackendError::not_found(format!("Book with ID {id} not found"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::books::memory::MemoryBookStore;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;

    fn service() -> BookService {
        BookService::new(Arc::new(MemoryBookStore::new()))
    }

    fn request(title: &str, author: &str) -> CreateBookRequest {
        CreateBookRequest {
            title: title.to_string(),
            author: author.to_string(),
            category: "Fiction".to_string(),
            price: 19.99,
            rating: 4.5,
            published_date: "2023-01-01".to_string(),
        }
    }

    fn listing(pairs: &[(&str, &str)]) -> BookQuery {
        let mut query = BookQuery::default();
        for (key, value) in pairs {
            let value = Some(value.to_string());
            match *key {
                "author" => query.author = value,
                "page" => query.page = value,
                "limit" => query.limit = value,
                "sortBy" => query.sort_by = value,
                "sortOrder" => query.sort_order = value,
                other => panic!("unsupported key {other}"),
            }
        }
        query
    }

    #[tokio::test]
    async fn test_create_then_find_one() {
        let service = service();
        let created = service.create(request("Test Book", "Test Author")).await.unwrap();

        assert_eq!(created.title, "Test Book");
        assert_eq!(created.author, "Test Author");
        assert_eq!(created.category, "Fiction");
        assert_eq!(created.price, 19.99);
        assert_eq!(created.rating, 4.5);

        let found = service.find_one(&created.id.to_string()).await.unwrap();
        assert_eq!(found, created);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_input() {
        let service = service();
        let mut invalid = request("Test Book", "Test Author");
        invalid.rating = 7.0;

        let result = service.create(invalid).await;
        assert_matches!(result, Err(BackendError::SharedError(_)));

        let page = service.find_all(BookQuery::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn test_unknown_and_malformed_ids_are_not_found() {
        let service = service();
        service.create(request("Test Book", "Test Author")).await.unwrap();

        for id in [Uuid::new_v4().to_string(), "not-an-id".to_string(), String::new()] {
            assert_matches!(service.find_one(&id).await, Err(BackendError::NotFound { .. }));
            assert_matches!(
                service.update(&id, UpdateBookRequest::default()).await,
                Err(BackendError::NotFound { .. })
            );
            assert_matches!(service.remove(&id).await, Err(BackendError::NotFound { .. }));
        }
    }

    #[tokio::test]
    async fn test_update_changes_only_given_fields() {
        let service = service();
        let created = service.create(request("Test Book", "Test Author")).await.unwrap();

        let updated = service
            .update(
                &created.id.to_string(),
                UpdateBookRequest {
                    title: Some("X".to_string()),
                    ..UpdateBookRequest::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(
            updated,
            Book {
                title: "X".to_string(),
                updated_at: updated.updated_at,
                ..created.clone()
            }
        );
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_revalidates_present_fields() {
        let service = service();
        let created = service.create(request("Test Book", "Test Author")).await.unwrap();

        let result = service
            .update(
                &created.id.to_string(),
                UpdateBookRequest {
                    price: Some(-1.0),
                    ..UpdateBookRequest::default()
                },
            )
            .await;
        assert_matches!(result, Err(BackendError::SharedError(_)));

        let unchanged = service.find_one(&created.id.to_string()).await.unwrap();
        assert_eq!(unchanged, created);
    }

    #[tokio::test]
    async fn test_remove_then_find_one() {
        let service = service();
        let created = service.create(request("Test Book", "Test Author")).await.unwrap();
        let id = created.id.to_string();

        service.remove(&id).await.unwrap();
        assert_matches!(service.find_one(&id).await, Err(BackendError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_pagination_of_fifteen_records() {
        let service = service();
        for i in 0..15 {
            service.create(request(&format!("Book {i}"), "Author")).await.unwrap();
        }

        let first = service.find_all(listing(&[("limit", "10")])).await.unwrap();
        assert_eq!(first.items.len(), 10);
        assert_eq!(first.total, 15);
        assert_eq!(first.page, 1);
        assert_eq!(first.limit, 10);
        assert_eq!(first.items[0].title, "Book 0");

        let second = service
            .find_all(listing(&[("limit", "10"), ("page", "2")]))
            .await
            .unwrap();
        assert_eq!(second.items.len(), 5);
        assert_eq!(second.total, 15);
        assert_eq!(second.items[0].title, "Book 10");
    }

    #[tokio::test]
    async fn test_author_filter_is_case_insensitive() {
        let service = service();
        service.create(request("Essays", "Jane Doe")).await.unwrap();
        service.create(request("Poems", "John Roe")).await.unwrap();

        let page = service.find_all(listing(&[("author", "jane")])).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].author, "Jane Doe");
    }

    #[tokio::test]
    async fn test_find_all_rejects_invalid_query() {
        let service = service();
        let result = service.find_all(listing(&[("limit", "500")])).await;
        assert_matches!(result, Err(BackendError::SharedError(_)));
    }
}
