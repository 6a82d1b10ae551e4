/**
 * PostgreSQL Book Store
 *
 * `BookStore` backed by the `books` table (see `migrations/`).
 *
 * # Query Translation
 *
 * - Substring filters become `ILIKE '%...%'` with `%`, `_` and `\` escaped,
 *   so user input is matched literally
 * - Minimum rating becomes `rating >= $n`
 * - Natural order is the `seq` insertion sequence; it also breaks ties
 *   when sorting by price, rating or published date
 * - Pagination is `LIMIT`/`OFFSET`
 *
 * Updates are a single `UPDATE ... RETURNING` statement, so the merge is
 * atomic per row.
 */

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::backend::books::model::{BookPatch, NewBook};
use crate::backend::books::query::{BookFilter, BookSort, BookSortField, SortOrder};
use crate::backend::books::store::BookStore;
use crate::backend::error::StoreError;
use crate::shared::Book;

const BOOK_COLUMNS: &str =
    "id, title, author, category, price, rating, published_date, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookStore for PgBookStore {
    async fn insert(&self, book: NewBook) -> Result<Book, StoreError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let book = sqlx::query_as::<_, Book>(&format!(
            r#"
            INSERT INTO books (id, title, author, category, price, rating, published_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.category)
        .bind(book.price)
        .bind(book.rating)
        .bind(book.published_date)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(book)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Book>, StoreError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            "SELECT {BOOK_COLUMNS} FROM books WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn find(
        &self,
        filter: &BookFilter,
        sort: Option<BookSort>,
        skip: u64,
        limit: u32,
    ) -> Result<Vec<Book>, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new(format!("SELECT {BOOK_COLUMNS} FROM books"));
        push_filter(&mut builder, filter);

        builder.push(" ORDER BY ");
        if let Some(sort) = sort {
            builder
                .push(sort_column(sort.field))
                .push(" ")
                .push(sort_direction(sort.order))
                .push(", ");
        }
        builder.push("seq ASC");

        builder
            .push(" LIMIT ")
            .push_bind(i64::from(limit))
            .push(" OFFSET ")
            .push_bind(i64::try_from(skip).unwrap_or(i64::MAX));

        let books = builder
            .build_query_as::<Book>()
            .fetch_all(&self.pool)
            .await?;

        Ok(books)
    }

    async fn count(&self, filter: &BookFilter) -> Result<u64, StoreError> {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM books");
        push_filter(&mut builder, filter);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn update(&self, id: Uuid, patch: BookPatch) -> Result<Option<Book>, StoreError> {
        let book = sqlx::query_as::<_, Book>(&format!(
            r#"
            UPDATE books
            SET title = COALESCE($2, title),
                author = COALESCE($3, author),
                category = COALESCE($4, category),
                price = COALESCE($5, price),
                rating = COALESCE($6, rating),
                published_date = COALESCE($7, published_date),
                updated_at = $8
            WHERE id = $1
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.title)
        .bind(patch.author)
        .bind(patch.category)
        .bind(patch.price)
        .bind(patch.rating)
        .bind(patch.published_date)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?;

        Ok(book)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, StoreError> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &BookFilter) {
    builder.push(" WHERE TRUE");
    if let Some(author) = &filter.author {
        builder.push(" AND author ILIKE ").push_bind(like_pattern(author));
    }
    if let Some(category) = &filter.category {
        builder.push(" AND category ILIKE ").push_bind(like_pattern(category));
    }
    if let Some(search) = &filter.search {
        builder.push(" AND title ILIKE ").push_bind(like_pattern(search));
    }
    if let Some(min_rating) = filter.min_rating {
        builder.push(" AND rating >= ").push_bind(min_rating);
    }
}

fn sort_column(field: BookSortField) -> &'static str {
    match field {
        BookSortField::Price => "price",
        BookSortField::Rating => "rating",
        BookSortField::PublishedDate => "published_date",
    }
}

fn sort_direction(order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

/// `%needle%` with LIKE metacharacters escaped (backslash is the default escape)
fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
