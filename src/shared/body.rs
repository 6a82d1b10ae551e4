//! Request body shape checks
//!
//! A JSON body is checked against a list of [`BodyField`]s before it is
//! deserialized into its request type, so a missing field, a value of the
//! wrong JSON type or an unknown key is reported as a field error instead of
//! a bare decoding failure. Every problem in the body is reported at once.
//!
//! Constraint checks (ranges, date formats, email shape) run afterwards on
//! the typed request.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::shared::error::{FieldErrors, SharedError};

/// JSON type expected for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
    /// A string holding an ISO 8601 date; the format is checked later
    Date,
}

/// One key of a request body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BodyField {
    /// Wire name (`publishedDate`)
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl BodyField {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    fn accepts(&self, value: &Value) -> bool {
        match self.kind {
            FieldKind::Text | FieldKind::Date => value.is_string(),
            FieldKind::Number => value.is_number(),
        }
    }

    fn type_message(&self) -> String {
        match self.kind {
            FieldKind::Text => format!("{} must be a string", self.name),
            FieldKind::Number => format!(
                "{} must be a number conforming to the specified constraints",
                self.name
            ),
            FieldKind::Date => format!("{} must be a valid ISO 8601 date string", self.name),
        }
    }

    fn missing_message(&self) -> String {
        match self.kind {
            FieldKind::Text => format!("{} should not be empty", self.name),
            FieldKind::Number | FieldKind::Date => self.type_message(),
        }
    }
}

/// Check `body` against `fields`, then deserialize it
///
/// `null` counts as absent. A body that is not a JSON object is a
/// `SerializationError`; every other problem is a `ValidationError`.
pub fn decode_body<T: DeserializeOwned>(body: Value, fields: &[BodyField]) -> Result<T, SharedError> {
    let Some(object) = body.as_object() else {
        return Err(SharedError::serialization("Request body must be a JSON object"));
    };

    let mut errors = FieldErrors::new();
    for field in fields {
        match object.get(field.name) {
            None | Some(Value::Null) if field.required => {
                errors.push(field.name, field.missing_message());
            }
            None | Some(Value::Null) => {}
            Some(value) if !field.accepts(value) => errors.push(field.name, field.type_message()),
            Some(_) => {}
        }
    }
    for key in object.keys() {
        if !fields.iter().any(|field| field.name == key) {
            errors.push(key.as_str(), format!("property {key} should not exist"));
        }
    }
    errors.into_result(())?;

    Ok(serde_json::from_value(body)?)
}
