// SPDX-License-Identifier: Apache-2.0

use resilience_model::ValidationError;
use std::fmt::{Display, Formatter};

/// Failures that stop the process before or while serving.
#[derive(Debug)]
#[non_exhaustive]
pub enum ServerError {
    Config(String),
    Catalog(ValidationError),
    Io {
        context: &'static str,
        source: std::io::Error,
    },
}

impl ServerError {
    pub(crate) fn io(context: &'static str) -> impl FnOnce(std::io::Error) -> Self {
        move |source| Self::Io { context, source }
    }
}

impl Display for ServerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "invalid configuration: {msg}"),
            Self::Catalog(err) => write!(f, "catalog construction failed: {err}"),
            Self::Io { context, source } => write!(f, "{context} failed: {source}"),
        }
    }
}

impl std::error::Error for ServerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(_) => None,
            Self::Catalog(err) => Some(err),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<ValidationError> for ServerError {
    fn from(err: ValidationError) -> Self {
        Self::Catalog(err)
    }
}
