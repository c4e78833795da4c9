// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ValidationError {
    NotAnInteger,
    OutOfRange,
    DuplicateId { catalog: &'static str, id: RecordId },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAnInteger => f.write_str("record id must be an integer"),
            Self::OutOfRange => write!(
                f,
                "record id is outside [{}, {}]",
                i64::MIN,
                i64::MAX
            ),
            Self::DuplicateId { catalog, id } => {
                write!(f, "duplicate record id {id} in catalog {catalog}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Identifier of a record inside one catalog.
///
/// Identifier spaces are per catalog: task `1` and resource `1` are unrelated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(i64);

impl RecordId {
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Coerces a raw path segment into an id.
    ///
    /// Surrounding ASCII whitespace is ignored and a single leading sign is
    /// accepted. Decimals, inner whitespace and empty input are
    /// `NotAnInteger`; well-formed integers that do not fit `i64` are
    /// `OutOfRange`.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim_matches(|c: char| c.is_ascii_whitespace());
        let digits = trimmed
            .strip_prefix(|c: char| c == '+' || c == '-')
            .unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotAnInteger);
        }
        trimmed
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::OutOfRange)
    }

    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// One catalog entry. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    pub id: RecordId,
    pub title: String,
    pub description: String,
}

impl Record {
    #[must_use]
    pub fn new(id: i64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: RecordId(id),
            title: title.into(),
            description: description.into(),
        }
    }
}
