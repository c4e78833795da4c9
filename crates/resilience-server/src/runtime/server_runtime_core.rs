// SPDX-License-Identifier: Apache-2.0

use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::runtime::server_runtime_app::build_router;
use resilience_model::CatalogSet;
use std::net::SocketAddr;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpSocket};
use tracing::{error, info, warn};

/// Handler state. Catalogs are shared read-only; cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub catalogs: Arc<CatalogSet>,
    pub config: Arc<ServerConfig>,
    pub(crate) request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(catalogs: CatalogSet) -> Self {
        Self::with_config(catalogs, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(catalogs: CatalogSet, config: ServerConfig) -> Self {
        Self {
            catalogs: Arc::new(catalogs),
            config: Arc::new(config),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, ServerError> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4().map_err(ServerError::io("socket v4"))?
    } else {
        TcpSocket::new_v6().map_err(ServerError::io("socket v6"))?
    };
    socket
        .set_reuseaddr(true)
        .map_err(ServerError::io("set_reuseaddr"))?;
    socket.bind(addr).map_err(ServerError::io("bind"))?;
    socket.listen(1024).map_err(ServerError::io("listen"))
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
                return;
            }
            _ => warn!("unix signal registration failed; falling back to ctrl-c"),
        }
    }
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("ctrl-c handler failed: {e}");
        std::future::pending::<()>().await;
    }
}

/// Serves until SIGINT/SIGTERM, then lets in-flight requests finish.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServerError> {
    let drain = state.config.shutdown_drain;
    let app = build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            wait_for_shutdown_signal().await;
            info!("shutdown signal received; draining in-flight requests");
            if !drain.is_zero() {
                tokio::time::sleep(drain).await;
            }
        })
        .await
        .map_err(ServerError::io("serve"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn bind_listener_reports_the_ephemeral_port() {
        let addr: SocketAddr = "127.0.0.1:0".parse().expect("addr");
        let listener = bind_listener(addr).await.expect("bind");
        let local = listener.local_addr().expect("local addr");
        assert!(local.ip().is_loopback());
        assert_ne!(local.port(), 0);
    }

    #[test]
    fn state_clones_share_catalogs() {
        let state = AppState::new(CatalogSet::builtin().expect("builtin set"));
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.catalogs, &clone.catalogs));
        assert_eq!(clone.config.port, 8000);
    }
}
