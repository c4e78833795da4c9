// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]

use resilience_model::CatalogSet;
use resilience_server::{bind_listener, init_tracing, serve, AppState, ServerConfig, ServerError};
use std::process::ExitCode;
use tracing::{error, info};

async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let summary = config.startup_summary()?;
    info!(config = %summary, "effective configuration");
    let catalogs = CatalogSet::builtin()?;
    for catalog in catalogs.iter() {
        info!(catalog = %catalog.kind(), records = catalog.len(), "catalog loaded");
    }

    let addr = config.bind_addr()?;
    let listener = bind_listener(addr).await?;
    info!(
        %addr,
        cors_allowed_origins = ?config.cors_allowed_origins,
        "resilience-server listening"
    );
    serve(listener, AppState::with_config(catalogs, config)).await
}

#[tokio::main]
async fn main() -> ExitCode {
    let config = ServerConfig::from_env();
    init_tracing(config.log_json);
    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("resilience-server failed: {e}");
            ExitCode::FAILURE
        }
    }
}
