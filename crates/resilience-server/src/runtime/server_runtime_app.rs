// SPDX-License-Identifier: Apache-2.0

use crate::http::handlers;
use crate::middleware::cors::cors_middleware;
use crate::middleware::request_tracing::request_tracing_middleware;
use crate::AppState;
use axum::handler::Handler;
use axum::middleware::from_fn_with_state;
use axum::routing::{get, MethodRouter};
use axum::Router;

/// GET (and HEAD) route whose other methods answer 405 with a detail body.
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).fallback(handlers::method_not_allowed_handler)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get_only(handlers::root_handler))
        .route("/healthz", get_only(handlers::healthz_handler))
        .route("/openapi.json", get_only(handlers::openapi_handler))
        .route("/tasks", get_only(handlers::list_tasks_handler))
        .route("/tasks/:task_id", get_only(handlers::get_task_handler))
        .route("/resources", get_only(handlers::list_resources_handler))
        .route(
            "/resources/:resource_id",
            get_only(handlers::get_resource_handler),
        )
        .route("/precedents", get_only(handlers::list_precedents_handler))
        .route(
            "/precedents/:precedent_id",
            get_only(handlers::get_precedent_handler),
        )
        .fallback(handlers::route_not_found_handler)
        .layer(from_fn_with_state(state.clone(), cors_middleware))
        .layer(from_fn_with_state(state.clone(), request_tracing_middleware))
        .with_state(state)
}
