// SPDX-License-Identifier: Apache-2.0

use resilience_model::CatalogKind;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt::{Display, Formatter};

pub const INT_PARSING_TYPE: &str = "int_parsing";
pub const INT_PARSING_MSG: &str =
    "Input should be a valid integer, unable to parse string as an integer";
pub const ROUTE_NOT_FOUND_DETAIL: &str = "Not Found";
pub const METHOD_NOT_ALLOWED_DETAIL: &str = "Method Not Allowed";

/// One entry of a validation-error `detail` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidationIssue {
    #[serde(rename = "type")]
    pub kind: String,
    pub loc: Vec<String>,
    pub msg: String,
    pub input: String,
}

impl ValidationIssue {
    #[must_use]
    pub fn int_parsing(location: &str, name: &str, input: &str) -> Self {
        Self {
            kind: INT_PARSING_TYPE.to_string(),
            loc: vec![location.to_string(), name.to_string()],
            msg: INT_PARSING_MSG.to_string(),
            input: input.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ApiError {
    NotFound(CatalogKind),
    Validation(Vec<ValidationIssue>),
    RouteNotFound,
    MethodNotAllowed,
}

impl ApiError {
    #[must_use]
    pub fn invalid_path_int(name: &str, input: &str) -> Self {
        Self::Validation(vec![ValidationIssue::int_parsing("path", name, input)])
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        crate::error_mapping::map_error(self).status_code
    }

    /// Wire body: always a `{"detail": ...}` envelope.
    #[must_use]
    pub fn body(&self) -> Value {
        match self {
            Self::NotFound(kind) => json!({"detail": kind.not_found_detail()}),
            Self::Validation(issues) => json!({"detail": issues}),
            Self::RouteNotFound => json!({"detail": ROUTE_NOT_FOUND_DETAIL}),
            Self::MethodNotAllowed => json!({"detail": METHOD_NOT_ALLOWED_DETAIL}),
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(kind) => f.write_str(kind.not_found_detail()),
            Self::Validation(issues) => {
                write!(f, "validation failed")?;
                for issue in issues {
                    write!(f, "; {}: {}", issue.loc.join("."), issue.msg)?;
                }
                Ok(())
            }
            Self::RouteNotFound => f.write_str(ROUTE_NOT_FOUND_DETAIL),
            Self::MethodNotAllowed => f.write_str(METHOD_NOT_ALLOWED_DETAIL),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_body_is_a_plain_detail_string() {
        assert_eq!(
            ApiError::NotFound(CatalogKind::Tasks).body(),
            json!({"detail": "Task not found"})
        );
    }

    #[test]
    fn validation_body_lists_issue_location_and_input() {
        let body = ApiError::invalid_path_int("task_id", "abc").body();
        assert_eq!(
            body,
            json!({"detail": [{
                "type": "int_parsing",
                "loc": ["path", "task_id"],
                "msg": INT_PARSING_MSG,
                "input": "abc"
            }]})
        );
    }

    #[test]
    fn display_is_human_readable() {
        assert_eq!(
            ApiError::invalid_path_int("task_id", "x").to_string(),
            format!("validation failed; path.task_id: {INT_PARSING_MSG}")
        );
        assert_eq!(ApiError::MethodNotAllowed.to_string(), "Method Not Allowed");
    }

    #[test]
    fn status_code_follows_the_central_mapping() {
        assert_eq!(ApiError::NotFound(CatalogKind::Precedents).status_code(), 404);
        assert_eq!(ApiError::invalid_path_int("task_id", "x").status_code(), 422);
        assert_eq!(ApiError::MethodNotAllowed.status_code(), 405);
    }
}
