// SPDX-License-Identifier: Apache-2.0

use crate::ApiError;

pub const HTTP_ERROR_SCHEMA_REF: &str = "#/components/schemas/HTTPError";
pub const HTTP_VALIDATION_ERROR_SCHEMA_REF: &str = "#/components/schemas/HTTPValidationError";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiErrorMapping {
    pub status_code: u16,
    pub schema_ref: &'static str,
}

#[must_use]
pub fn map_error(error: &ApiError) -> ApiErrorMapping {
    match error {
        ApiError::NotFound(_) | ApiError::RouteNotFound => ApiErrorMapping {
            status_code: 404,
            schema_ref: HTTP_ERROR_SCHEMA_REF,
        },
        ApiError::Validation(_) => ApiErrorMapping {
            status_code: 422,
            schema_ref: HTTP_VALIDATION_ERROR_SCHEMA_REF,
        },
        ApiError::MethodNotAllowed => ApiErrorMapping {
            status_code: 405,
            schema_ref: HTTP_ERROR_SCHEMA_REF,
        },
    }
}
