// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

pub mod error_mapping;
pub mod errors;
pub mod openapi;
pub mod params;
pub mod responses;

pub use error_mapping::{map_error, ApiErrorMapping};
pub use errors::{ApiError, ValidationIssue};
pub use openapi::openapi_spec;
pub use params::{parse_list_query, parse_record_id, ListQuery};
pub use responses::{DetailBody, RootMessage, ROOT_MESSAGE};

pub const CRATE_NAME: &str = "resilience-api";
pub const API_TITLE: &str = "Resilience Research Platform API";
pub const API_VERSION: &str = "0.2";
