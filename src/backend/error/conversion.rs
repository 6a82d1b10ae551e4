/**
 * Error Conversion
 *
 * This module converts backend errors into HTTP responses and turns Axum
 * extractor rejections into backend errors.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Validation failed",
 *   "status": 400,
 *   "details": [{ "field": "price", "message": "price must not be less than 0" }]
 * }
 * ```
 *
 * `details` is only present for validation errors.
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::backend::error::types::BackendError;
use crate::shared::{FieldError, SharedError};

/// JSON body of every error response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Validation failed")]
    pub error: String,
    #[schema(example = 400)]
    pub status: u16,
    /// Present only for validation errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<FieldError>>,
}

impl From<&BackendError> for ErrorBody {
    fn from(error: &BackendError) -> Self {
        Self {
            error: error.message(),
            status: error.status_code().as_u16(),
            details: error.details().map(<[FieldError]>::to_vec),
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected ({}): {}", status, self);
        }

        (status, Json(ErrorBody::from(&self))).into_response()
    }
}

/// Only undecodable bodies land here (bad syntax, wrong content type);
/// handlers shape-check the decoded value themselves.
impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        SharedError::serialization(rejection.body_text()).into()
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        SharedError::serialization(rejection.body_text()).into()
    }
}
