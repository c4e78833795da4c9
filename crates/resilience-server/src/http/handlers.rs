// SPDX-License-Identifier: Apache-2.0

use crate::http::response_contract::api_error_response;
use crate::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use percent_encoding::percent_decode_str;
use resilience_api::{
    openapi_spec, parse_list_query, parse_record_id, ApiError, ListQuery, RootMessage,
};
use resilience_model::{CatalogKind, CatalogSet, Record};
use std::collections::BTreeMap;
use tracing::debug;

/// Scans `kind` for the record named by the raw path segment.
pub(crate) fn lookup_record<'a>(
    catalogs: &'a CatalogSet,
    kind: CatalogKind,
    raw_id: &str,
) -> Result<&'a Record, ApiError> {
    let id = parse_record_id(kind, raw_id)?;
    catalogs
        .get(kind)
        .find(id)
        .ok_or(ApiError::NotFound(kind))
}

/// Last path segment, percent-decoded with invalid UTF-8 replaced.
pub(crate) fn lossy_last_segment(uri: &Uri) -> String {
    let segment = uri.path().rsplit('/').next().unwrap_or("");
    percent_decode_str(segment).decode_utf8_lossy().into_owned()
}

// Ids that do not decode to UTF-8 still go through record-id validation.
fn raw_id(path: Result<Path<String>, PathRejection>, uri: &Uri) -> String {
    match path {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            debug!(%rejection, "path id rejected by extractor; decoding lossily");
            lossy_last_segment(uri)
        }
    }
}

fn list_response(state: &AppState, kind: CatalogKind, params: &ListQuery) -> Response {
    if let Some(query) = params.query.as_deref() {
        debug!(catalog = %kind, query, "query parameter accepted but not applied");
    }
    Json(state.catalogs.get(kind).records()).into_response()
}

fn lookup_response(state: &AppState, kind: CatalogKind, raw_id: &str) -> Response {
    match lookup_record(&state.catalogs, kind, raw_id) {
        Ok(record) => Json(record).into_response(),
        Err(err) => {
            debug!(catalog = %kind, raw_id, error = %err, "record lookup failed");
            api_error_response(&err)
        }
    }
}

pub(crate) async fn root_handler() -> Json<RootMessage> {
    Json(RootMessage::default())
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn openapi_handler() -> impl IntoResponse {
    Json(openapi_spec())
}

pub(crate) async fn list_tasks_handler(State(state): State<AppState>) -> Response {
    list_response(&state, CatalogKind::Tasks, &ListQuery::default())
}

pub(crate) async fn get_task_handler(
    State(state): State<AppState>,
    uri: Uri,
    task_id: Result<Path<String>, PathRejection>,
) -> Response {
    lookup_response(&state, CatalogKind::Tasks, &raw_id(task_id, &uri))
}

pub(crate) async fn list_resources_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    list_response(&state, CatalogKind::Resources, &parse_list_query(&query))
}

pub(crate) async fn get_resource_handler(
    State(state): State<AppState>,
    uri: Uri,
    resource_id: Result<Path<String>, PathRejection>,
) -> Response {
    lookup_response(&state, CatalogKind::Resources, &raw_id(resource_id, &uri))
}

pub(crate) async fn list_precedents_handler(
    State(state): State<AppState>,
    Query(query): Query<BTreeMap<String, String>>,
) -> Response {
    list_response(&state, CatalogKind::Precedents, &parse_list_query(&query))
}

pub(crate) async fn get_precedent_handler(
    State(state): State<AppState>,
    uri: Uri,
    precedent_id: Result<Path<String>, PathRejection>,
) -> Response {
    lookup_response(&state, CatalogKind::Precedents, &raw_id(precedent_id, &uri))
}

pub(crate) async fn route_not_found_handler() -> Response {
    api_error_response(&ApiError::RouteNotFound)
}

pub(crate) async fn method_not_allowed_handler() -> Response {
    api_error_response(&ApiError::MethodNotAllowed)
}
