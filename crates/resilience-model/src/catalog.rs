// SPDX-License-Identifier: Apache-2.0

use crate::record::{Record, RecordId, ValidationError};
use crate::seed::builtin_records;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
    Tasks,
    Resources,
    Precedents,
}

impl CatalogKind {
    pub const ALL: [Self; 3] = [Self::Tasks, Self::Resources, Self::Precedents];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Resources => "resources",
            Self::Precedents => "precedents",
        }
    }

    /// Name of the path parameter carrying a record id for this catalog.
    #[must_use]
    pub const fn id_param(self) -> &'static str {
        match self {
            Self::Tasks => "task_id",
            Self::Resources => "resource_id",
            Self::Precedents => "precedent_id",
        }
    }

    #[must_use]
    pub const fn not_found_detail(self) -> &'static str {
        match self {
            Self::Tasks => "Task not found",
            Self::Resources => "Resource not found",
            Self::Precedents => "Precedent not found",
        }
    }
}

impl Display for CatalogKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered, read-only sequence of records with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    kind: CatalogKind,
    records: Vec<Record>,
}

impl Catalog {
    pub fn new(kind: CatalogKind, records: Vec<Record>) -> Result<Self, ValidationError> {
        let mut seen = BTreeSet::new();
        for record in &records {
            if !seen.insert(record.id) {
                return Err(ValidationError::DuplicateId {
                    catalog: kind.as_str(),
                    id: record.id,
                });
            }
        }
        Ok(Self { kind, records })
    }

    #[must_use]
    pub fn kind(&self) -> CatalogKind {
        self.kind
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// First record whose id equals `id`, scanning in definition order.
    #[must_use]
    pub fn find(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| record.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The three catalogs a process serves, built once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSet {
    tasks: Catalog,
    resources: Catalog,
    precedents: Catalog,
}

impl CatalogSet {
    pub fn builtin() -> Result<Self, ValidationError> {
        Ok(Self {
            tasks: Catalog::new(CatalogKind::Tasks, builtin_records(CatalogKind::Tasks))?,
            resources: Catalog::new(
                CatalogKind::Resources,
                builtin_records(CatalogKind::Resources),
            )?,
            precedents: Catalog::new(
                CatalogKind::Precedents,
                builtin_records(CatalogKind::Precedents),
            )?,
        })
    }

    #[must_use]
    pub fn get(&self, kind: CatalogKind) -> &Catalog {
        match kind {
            CatalogKind::Tasks => &self.tasks,
            CatalogKind::Resources => &self.resources,
            CatalogKind::Precedents => &self.precedents,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Catalog> {
        CatalogKind::ALL.into_iter().map(|kind| self.get(kind))
    }
}
