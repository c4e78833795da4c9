// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

mod config;
mod error;
mod http;
mod middleware;
mod runtime;
mod telemetry;

pub const CRATE_NAME: &str = "resilience-server";

pub use config::{ServerConfig, CONFIG_SCHEMA_VERSION};
pub use error::ServerError;
pub use runtime::server_runtime_app::build_router;
pub use runtime::server_runtime_core::{bind_listener, serve, AppState};
pub use telemetry::{init_tracing, ACCESS_LOG_TARGET};
