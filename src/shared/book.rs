//! Book wire types
//!
//! JSON field names are camelCase on the wire (`publishedDate`, `createdAt`),
//! matching what API clients send and receive.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::body::{BodyField, FieldKind};

/// A stored book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(sqlx::FromRow, utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Store-generated identifier
    pub id: Uuid,
    #[cfg_attr(feature = "ssr", schema(example = "The Great Gatsby"))]
    pub title: String,
    #[cfg_attr(feature = "ssr", schema(example = "F. Scott Fitzgerald"))]
    pub author: String,
    #[cfg_attr(feature = "ssr", schema(example = "Fiction"))]
    pub category: String,
    /// Never negative
    #[cfg_attr(feature = "ssr", schema(example = 19.99, minimum = 0))]
    pub price: f64,
    /// Between 1 and 5 inclusive
    #[cfg_attr(feature = "ssr", schema(example = 4.5, minimum = 1, maximum = 5))]
    pub rating: f64,
    pub published_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /books`
///
/// `publishedDate` stays a string here; it is parsed during validation so a
/// bad date is reported as a field error rather than a decoding failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateBookRequest {
    /// The title of the book
    #[cfg_attr(feature = "ssr", schema(example = "The Great Gatsby"))]
    pub title: String,
    /// The author of the book
    #[cfg_attr(feature = "ssr", schema(example = "F. Scott Fitzgerald"))]
    pub author: String,
    /// The category of the book
    #[cfg_attr(feature = "ssr", schema(example = "Fiction"))]
    pub category: String,
    /// The price of the book
    #[cfg_attr(feature = "ssr", schema(example = 19.99, minimum = 0))]
    pub price: f64,
    /// The rating of the book (1-5)
    #[cfg_attr(feature = "ssr", schema(example = 4.5, minimum = 1, maximum = 5))]
    pub rating: f64,
    /// The published date of the book
    #[cfg_attr(feature = "ssr", schema(example = "2023-01-01"))]
    pub published_date: String,
}

impl CreateBookRequest {
    /// Body keys accepted by `POST /books`
    pub const FIELDS: &'static [BodyField] = &[
        BodyField::required("title", FieldKind::Text),
        BodyField::required("author", FieldKind::Text),
        BodyField::required("category", FieldKind::Text),
        BodyField::required("price", FieldKind::Number),
        BodyField::required("rating", FieldKind::Number),
        BodyField::required("publishedDate", FieldKind::Date),
    ];
}

/// Body of `PATCH /books/{id}`; absent fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBookRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ssr", schema(example = "The Great Gatsby"))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ssr", schema(example = "F. Scott Fitzgerald"))]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ssr", schema(example = "Fiction"))]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ssr", schema(example = 19.99, minimum = 0))]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ssr", schema(example = 4.5, minimum = 1, maximum = 5))]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "ssr", schema(example = "2023-01-01"))]
    pub published_date: Option<String>,
}

impl UpdateBookRequest {
    /// Body keys accepted by `PATCH /books/{id}`; all optional
    pub const FIELDS: &'static [BodyField] = &[
        BodyField::optional("title", FieldKind::Text),
        BodyField::optional("author", FieldKind::Text),
        BodyField::optional("category", FieldKind::Text),
        BodyField::optional("price", FieldKind::Number),
        BodyField::optional("rating", FieldKind::Number),
        BodyField::optional("publishedDate", FieldKind::Date),
    ];
}

/// One page of a filtered listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ssr", derive(utoipa::ToSchema))]
pub struct BookPage {
    /// Records on this page, in store order
    #[serde(rename = "books")]
    pub items: Vec<Book>,
    /// Number of records matching the filters, before pagination
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}
