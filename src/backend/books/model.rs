//! Validated book inputs handed to the stores

use chrono::{DateTime, Utc};

use crate::shared::Book;

/// A book that passed every creation constraint
///
/// Only `validation::validate_create` builds one, so a store can persist it
/// without re-checking. Id and timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub category: String,
    pub price: f64,
    pub rating: f64,
    pub published_date: DateTime<Utc>,
}

/// Fields to overwrite on an existing book; `None` keeps the stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookPatch {
    pub title: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub published_date: Option<DateTime<Utc>>,
}

impl BookPatch {
    /// Merge the provided fields into `book`, bumping `updated_at`
    pub fn apply(self, book: &mut Book, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            book.title = title;
        }
        if let Some(author) = self.author {
            book.author = author;
        }
        if let Some(category) = self.category {
            book.category = category;
        }
        if let Some(price) = self.price {
            book.price = price;
        }
        if let Some(rating) = self.rating {
            book.rating = rating;
        }
        if let Some(published_date) = self.published_date {
            book.published_date = published_date;
        }
        book.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use uuid::Uuid;

    #[test]
    fn test_apply_only_touches_provided_fields() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut book = Book {
            id: Uuid::new_v4(),
            title: "Old".to_string(),
            author: "Jane Doe".to_string(),
            category: "Essays".to_string(),
            price: 12.0,
            rating: 3.0,
            published_date: created,
            created_at: created,
            updated_at: created,
        };
        let before = book.clone();
        let later = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        BookPatch {
            title: Some("New".to_string()),
            ..BookPatch::default()
        }
        .apply(&mut book, later);

        assert_eq!(
            book,
            Book {
                title: "New".to_string(),
                updated_at: later,
                ..before
            }
        );
    }
}
