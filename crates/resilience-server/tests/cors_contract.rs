// SPDX-License-Identifier: Apache-2.0

mod support;

use resilience_server::ServerConfig;
use support::{header, json, send_raw, send_raw_with_method, spawn_app, spawn_app_with_config};

const TRUSTED: &str = "http://localhost:3000";

#[tokio::test]
async fn trusted_origin_gets_credentialed_allow_origin() {
    let addr = spawn_app().await;
    let (status, head, _) = send_raw(addr, "/tasks", &[("Origin", TRUSTED)]).await;
    assert_eq!(status, 200);
    assert_eq!(header(&head, "access-control-allow-origin"), Some(TRUSTED));
    assert_eq!(
        header(&head, "access-control-allow-credentials"),
        Some("true")
    );
    assert_eq!(header(&head, "vary"), Some("Origin"));
}

#[tokio::test]
async fn untrusted_origin_is_served_without_cors_headers() {
    let addr = spawn_app().await;
    let (status, head, body) = send_raw(addr, "/tasks", &[("Origin", "http://evil.test")]).await;
    assert_eq!(status, 200);
    assert_eq!(json(&body).as_array().expect("task array").len(), 3);
    assert!(header(&head, "access-control-allow-origin").is_none());
    assert!(header(&head, "access-control-allow-credentials").is_none());
}

#[tokio::test]
async fn error_responses_carry_cors_headers_for_trusted_origin() {
    let addr = spawn_app().await;
    let (status, head, _) = send_raw(addr, "/tasks/999", &[("Origin", TRUSTED)]).await;
    assert_eq!(status, 404);
    assert_eq!(header(&head, "access-control-allow-origin"), Some(TRUSTED));
}

#[tokio::test]
async fn trusted_preflight_allows_any_method_and_header() {
    let addr = spawn_app().await;
    let (status, head, body) = send_raw_with_method(
        addr,
        "OPTIONS",
        "/tasks/1",
        &[
            ("Origin", TRUSTED),
            ("Access-Control-Request-Method", "PATCH"),
            ("Access-Control-Request-Headers", "x-custom-header, content-type"),
        ],
    )
    .await;
    assert_eq!(status, 200);
    assert_eq!(body, "OK");
    assert_eq!(header(&head, "access-control-allow-origin"), Some(TRUSTED));
    assert_eq!(
        header(&head, "access-control-allow-methods"),
        Some("DELETE, GET, HEAD, OPTIONS, PATCH, POST, PUT")
    );
    assert_eq!(
        header(&head, "access-control-allow-headers"),
        Some("x-custom-header, content-type")
    );
    assert_eq!(
        header(&head, "access-control-allow-credentials"),
        Some("true")
    );
    assert_eq!(header(&head, "access-control-max-age"), Some("600"));
}

#[tokio::test]
async fn untrusted_preflight_is_rejected() {
    let addr = spawn_app().await;
    let (status, head, body) = send_raw_with_method(
        addr,
        "OPTIONS",
        "/tasks",
        &[
            ("Origin", "http://localhost:3001"),
            ("Access-Control-Request-Method", "GET"),
        ],
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body, "Disallowed CORS origin");
    assert!(header(&head, "access-control-allow-origin").is_none());
}

#[tokio::test]
async fn allowed_origins_are_configurable() {
    let addr = spawn_app_with_config(ServerConfig {
        cors_allowed_origins: vec!["https://app.example".to_string()],
        ..ServerConfig::default()
    })
    .await;
    let (_, head, _) = send_raw(addr, "/", &[("Origin", "https://app.example")]).await;
    assert_eq!(
        header(&head, "access-control-allow-origin"),
        Some("https://app.example")
    );
    let (_, head, _) = send_raw(addr, "/", &[("Origin", TRUSTED)]).await;
    assert!(header(&head, "access-control-allow-origin").is_none());
}
