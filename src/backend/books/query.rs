/**
 * Book Query Component
 *
 * Translates the listing parameters of `GET /books` into a store query.
 *
 * # Parameters
 *
 * - `author`, `category` - case-insensitive substring match
 * - `search` - case-insensitive substring match against the title
 * - `rating` - minimum rating, between 1 and 5
 * - `page` (default 1, at least 1) and `limit` (default 10, 1..=100)
 * - `sortBy` - one of `price`, `rating`, `publishedDate`; natural store
 *   order when absent
 * - `sortOrder` - `asc` (default) or `desc`
 *
 * Filters combine with logical AND. Empty string parameters count as absent.
 */

use std::cmp::Ordering;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::backend::books::validation::check_rating;
use crate::shared::{Book, FieldErrors, SharedError};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;

/// Raw query string of `GET /books`
///
/// Every value is kept as a string so that a malformed number is reported
/// as a field error by [`BookQuery::validate`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Filter books by author
    #[param(example = "Fitzgerald")]
    pub author: Option<String>,
    /// Filter books by category
    #[param(example = "Fiction")]
    pub category: Option<String>,
    /// Filter books by minimum rating (1-5)
    #[param(value_type = Option<f64>, example = 4, minimum = 1, maximum = 5)]
    pub rating: Option<String>,
    /// Search books by title (partial match)
    #[param(example = "Gatsby")]
    pub search: Option<String>,
    /// Page number for pagination
    #[param(value_type = Option<u32>, example = 1, minimum = 1, default = 1)]
    pub page: Option<String>,
    /// Number of items per page
    #[param(value_type = Option<u32>, example = 10, minimum = 1, maximum = 100, default = 10)]
    pub limit: Option<String>,
    /// Field to sort by: `price`, `rating` or `publishedDate`
    #[param(example = "price")]
    pub sort_by: Option<String>,
    /// Sort order: `asc` or `desc`
    #[param(example = "asc", default = "asc")]
    pub sort_order: Option<String>,
}

/// Record filter; `None` fields do not constrain the result
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub author: Option<String>,
    pub category: Option<String>,
    /// Substring of the title
    pub search: Option<String>,
    pub min_rating: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookSortField {
    Price,
    Rating,
    PublishedDate,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookSort {
    pub field: BookSortField,
    pub order: SortOrder,
}

/// A validated listing request
#[derive(Debug, Clone, PartialEq)]
pub struct BookListQuery {
    pub filter: BookFilter,
    pub sort: Option<BookSort>,
    pub page: u32,
    pub limit: u32,
}

impl Default for BookListQuery {
    fn default() -> Self {
        Self {
            filter: BookFilter::default(),
            sort: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl BookQuery {
    /// Check every parameter and build the store query
    pub fn validate(self) -> Result<BookListQuery, SharedError> {
        let mut errors = FieldErrors::new();

        let min_rating = present(self.rating).and_then(|raw| match raw.trim().parse::<f64>() {
            Ok(rating) => {
                check_rating(&mut errors, "rating", rating);
                Some(rating)
            }
            Err(_) => {
                errors.push("rating", "rating must be a number");
                None
            }
        });

        let page = parse_bounded(&mut errors, "page", self.page, DEFAULT_PAGE, None);
        let limit = parse_bounded(&mut errors, "limit", self.limit, DEFAULT_LIMIT, Some(MAX_LIMIT));

        let field = present(self.sort_by).and_then(|raw| match raw.as_str() {
            "price" => Some(BookSortField::Price),
            "rating" => Some(BookSortField::Rating),
            "publishedDate" => Some(BookSortField::PublishedDate),
            _ => {
                errors.push(
                    "sortBy",
                    "sortBy must be one of the following values: price, rating, publishedDate",
                );
                None
            }
        });

        let order = match present(self.sort_order).as_deref() {
            None | Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            Some(_) => {
                errors.push(
                    "sortOrder",
                    "sortOrder must be one of the following values: asc, desc",
                );
                SortOrder::Asc
            }
        };

        errors.into_result(BookListQuery {
            filter: BookFilter {
                author: present(self.author),
                category: present(self.category),
                search: present(self.search),
                min_rating,
            },
            sort: field.map(|field| BookSort { field, order }),
            page,
            limit,
        })
    }
}

impl BookListQuery {
    /// Records skipped before this page starts
    pub fn skip(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }
}

impl BookFilter {
    /// Whether `book` satisfies every filter
    pub fn matches(&self, book: &Book) -> bool {
        contains_ignore_case(&book.author, self.author.as_deref())
            && contains_ignore_case(&book.category, self.category.as_deref())
            && contains_ignore_case(&book.title, self.search.as_deref())
            && self.min_rating.map_or(true, |min| book.rating >= min)
    }
}

impl BookSort {
    /// Ordering of two books under this sort; ties compare equal
    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        let ordering = match self.field {
            BookSortField::Price => a.price.total_cmp(&b.price),
            BookSortField::Rating => a.rating.total_cmp(&b.rating),
            BookSortField::PublishedDate => a.published_date.cmp(&b.published_date),
        };
        match self.order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn contains_ignore_case(haystack: &str, needle: Option<&str>) -> bool {
    match needle {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

fn parse_bounded(
    errors: &mut FieldErrors,
    field: &str,
    raw: Option<String>,
    default: u32,
    max: Option<u32>,
) -> u32 {
    let Some(raw) = present(raw) else {
        return default;
    };
    match raw.trim().parse::<u32>() {
        Ok(0) => {
            errors.push(field, format!("{field} must not be less than 1"));
            default
        }
        Ok(value) => match max {
            Some(max) if value > max => {
                errors.push(field, format!("{field} must not be greater than {max}"));
                default
            }
            _ => value,
        },
        Err(_) => {
            errors.push(field, format!("{field} must be a positive integer"));
            default
        }
    }
}
