// SPDX-License-Identifier: Apache-2.0

use crate::errors::ApiError;
use resilience_model::{CatalogKind, RecordId, ValidationError};
use std::collections::BTreeMap;

pub const QUERY_PARAM: &str = "query";

/// Parameters accepted by the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Accepted and echoed into logs, but not applied: list endpoints
    /// always return the whole catalog.
    pub query: Option<String>,
}

impl ListQuery {
    #[must_use]
    pub fn is_filter_requested(&self) -> bool {
        self.query.is_some()
    }
}

/// Extracts `query`; every other key is ignored.
#[must_use]
pub fn parse_list_query(query: &BTreeMap<String, String>) -> ListQuery {
    ListQuery {
        query: query.get(QUERY_PARAM).cloned(),
    }
}

/// Coerces the raw `{<kind>_id}` path segment.
///
/// Malformed input is a validation error. A well-formed integer that does not
/// fit an id can never match a record, so it is reported as not found.
pub fn parse_record_id(kind: CatalogKind, raw: &str) -> Result<RecordId, ApiError> {
    match RecordId::parse(raw) {
        Ok(id) => Ok(id),
        Err(ValidationError::OutOfRange) => Err(ApiError::NotFound(kind)),
        Err(_) => Err(ApiError::invalid_path_int(kind.id_param(), raw)),
    }
}
