//! Property-based tests for listing pagination and filtering
#![cfg(feature = "ssr")]

use std::sync::Arc;

use books_api::backend::books::{BookQuery, BookService, MemoryBookStore};
use books_api::shared::CreateBookRequest;
use proptest::prelude::*;

fn request(title: String, author: &str, rating: f64) -> CreateBookRequest {
    CreateBookRequest {
        title,
        author: author.to_string(),
        category: "Fiction".to_string(),
        price: 10.0,
        rating,
        published_date: "2020-01-01".to_string(),
    }
}

fn seeded(total: usize) -> BookService {
    let service = BookService::new(Arc::new(MemoryBookStore::new()));
    tokio_test::block_on(async {
        for i in 0..total {
            service
                .create(request(format!("Book {i}"), "Author", 3.0))
                .await
                .unwrap();
        }
    });
    service
}

fn page_query(page: u32, limit: u32) -> BookQuery {
    BookQuery {
        page: Some(page.to_string()),
        limit: Some(limit.to_string()),
        ..BookQuery::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_page_size_matches_remaining_records(
        total in 0usize..40,
        page in 1u32..8,
        limit in 1u32..20,
    ) {
        let service = seeded(total);
        let result = tokio_test::block_on(service.find_all(page_query(page, limit))).unwrap();

        let skip = (page as usize - 1) * limit as usize;
        let expected = (limit as usize).min(total.saturating_sub(skip));
        prop_assert_eq!(result.items.len(), expected);
        prop_assert_eq!(result.total, total as u64);
        prop_assert_eq!(result.page, page);
        prop_assert_eq!(result.limit, limit);

        for (offset, book) in result.items.iter().enumerate() {
            prop_assert_eq!(&book.title, &format!("Book {}", skip + offset));
        }
    }

    #[test]
    fn test_author_filter_counts_case_insensitive_matches(
        authors in prop::collection::vec(prop::sample::select(vec!["Jane Doe", "JANE ROE", "John Smith", "Mary Jane"]), 0..20),
        needle in prop::sample::select(vec!["jane", "JANE", "doe", "smith", "nobody"]),
    ) {
        let service = BookService::new(Arc::new(MemoryBookStore::new()));
        tokio_test::block_on(async {
            for (i, author) in authors.iter().enumerate() {
                service.create(request(format!("Book {i}"), author, 3.0)).await.unwrap();
            }
        });

        let query = BookQuery {
            author: Some(needle.to_string()),
            limit: Some("100".to_string()),
            ..BookQuery::default()
        };
        let result = tokio_test::block_on(service.find_all(query)).unwrap();

        let expected = authors
            .iter()
            .filter(|a| a.to_lowercase().contains(&needle.to_lowercase()))
            .count();
        prop_assert_eq!(result.total, expected as u64);
        prop_assert_eq!(result.items.len(), expected);
    }

    #[test]
    fn test_min_rating_filter(ratings in prop::collection::vec(1u8..=5, 0..20), min in 1u8..=5) {
        let service = BookService::new(Arc::new(MemoryBookStore::new()));
        tokio_test::block_on(async {
            for (i, rating) in ratings.iter().enumerate() {
                service
                    .create(request(format!("Book {i}"), "Author", f64::from(*rating)))
                    .await
                    .unwrap();
            }
        });

        let query = BookQuery {
            rating: Some(min.to_string()),
            limit: Some("100".to_string()),
            ..BookQuery::default()
        };
        let result = tokio_test::block_on(service.find_all(query)).unwrap();

        prop_assert!(result.items.iter().all(|b| b.rating >= f64::from(min)));
        prop_assert_eq!(result.total, ratings.iter().filter(|r| **r >= min).count() as u64);
    }
}
