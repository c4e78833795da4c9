// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
//! Catalog model SSOT.
//!
//! Records and catalogs are immutable once built. There is no mutation path:
//!
//! ```compile_fail
//! use resilience_model::{CatalogKind, CatalogSet};
//!
//! let set = CatalogSet::builtin().expect("builtin");
//! set.get(CatalogKind::Tasks).records.clear();
//! ```

mod catalog;
mod record;
mod seed;

pub use catalog::{Catalog, CatalogKind, CatalogSet};
pub use record::{Record, RecordId, ValidationError};
pub use seed::{builtin_records, PRECEDENT_FILTER_SENTINEL_ID};

pub const CRATE_NAME: &str = "resilience-model";
