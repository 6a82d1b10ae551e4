/**
 * Book Validation
 *
 * Explicit validation for the create and update payloads. Each function
 * checks every field, collects all violations, and either returns the
 * validated input or a `SharedError::ValidationError` listing them.
 *
 * # Constraints
 *
 * - `title`, `author`, `category` must not be `""` on create
 * - `price` must be a finite number, at least 0
 * - `rating` must be a finite number between 1 and 5
 * - `publishedDate` must be an ISO 8601 date (`2023-01-01`) or date-time
 *
 * Update payloads are held to the numeric and date constraints for every
 * field present. Strings on update only need to be strings.
 */

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::backend::books::model::{BookPatch, NewBook};
use crate::shared::{CreateBookRequest, FieldErrors, SharedError, UpdateBookRequest};

pub const MIN_PRICE: f64 = 0.0;
pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Validate a create payload
pub fn validate_create(request: CreateBookRequest) -> Result<NewBook, SharedError> {
    let mut errors = FieldErrors::new();

    check_text(&mut errors, "title", &request.title);
    check_text(&mut errors, "author", &request.author);
    check_text(&mut errors, "category", &request.category);
    check_price(&mut errors, request.price);
    check_rating(&mut errors, "rating", request.rating);
    let published_date = check_date(&mut errors, "publishedDate", &request.published_date);
    errors.into_result(())?;

    // check_date recorded an error above whenever the date is missing
    let published_date = published_date
        .ok_or_else(|| SharedError::validation("publishedDate", invalid_date("publishedDate")))?;

    Ok(NewBook {
        title: request.title,
        author: request.author,
        category: request.category,
        price: request.price,
        rating: request.rating,
        published_date,
    })
}

/// Validate an update payload; only present fields are checked
pub fn validate_update(request: UpdateBookRequest) -> Result<BookPatch, SharedError> {
    let mut errors = FieldErrors::new();

    if let Some(price) = request.price {
        check_price(&mut errors, price);
    }
    if let Some(rating) = request.rating {
        check_rating(&mut errors, "rating", rating);
    }
    let published_date = request
        .published_date
        .as_deref()
        .and_then(|raw| check_date(&mut errors, "publishedDate", raw));

    errors.into_result(BookPatch {
        title: request.title,
        author: request.author,
        category: request.category,
        price: request.price,
        rating: request.rating,
        published_date,
    })
}

fn check_text(errors: &mut FieldErrors, field: &str, value: &str) {
    if value.is_empty() {
        errors.push(field, format!("{field} should not be empty"));
    }
}

fn check_price(errors: &mut FieldErrors, price: f64) {
    if !price.is_finite() {
        errors.push("price", "price must be a number");
    } else if price < MIN_PRICE {
        errors.push("price", "price must not be less than 0");
    }
}

/// Shared with the query component, which bounds `rating` the same way
pub(crate) fn check_rating(errors: &mut FieldErrors, field: &str, rating: f64) {
    if !rating.is_finite() {
        errors.push(field, format!("{field} must be a number"));
    } else if rating < MIN_RATING {
        errors.push(field, format!("{field} must not be less than 1"));
    } else if rating > MAX_RATING {
        errors.push(field, format!("{field} must not be greater than 5"));
    }
}

fn check_date(errors: &mut FieldErrors, field: &str, raw: &str) -> Option<DateTime<Utc>> {
    let parsed = parse_date(raw);
    if parsed.is_none() {
        errors.push(field, invalid_date(field));
    }
    parsed
}

fn invalid_date(field: &str) -> String {
    format!("{field} must be a valid ISO 8601 date string")
}

/// Parse an ISO 8601 date or date-time into UTC
///
/// A bare date is midnight UTC; a date-time without offset is taken as UTC.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(date_time) = DateTime::parse_from_rfc3339(raw) {
        return Some(date_time.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
