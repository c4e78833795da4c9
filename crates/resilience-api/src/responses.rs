// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

pub const ROOT_MESSAGE: &str = "Hello World from FastAPI";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RootMessage {
    pub message: String,
}

impl Default for RootMessage {
    fn default() -> Self {
        Self {
            message: ROOT_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetailBody<T> {
    pub detail: T,
}
