mod common;

use anyhow::Result;
use axum::http::{header, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use tutor_portal::routes;
use tutor_portal::upstream::UpstreamClient;

// These tests run with no upstream auth API listening; the portal must keep
// serving login views, surface login failures once, and never trap a caller
// in a session because the upstream is down.

/// Router wired to a dead upstream (TCP discard port, nothing listens there)
fn app_with_dead_upstream() -> axum::Router {
    routes::app_with_upstream(UpstreamClient::new("http://127.0.0.1:9", 2, 5))
}

#[tokio::test]
async fn root_describes_portal_surface() -> Result<()> {
    let response = routes::app().oneshot(common::get("/", None)).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["name"], "Tutor Portal");
    Ok(())
}

#[tokio::test]
async fn health_stays_ok_with_unreachable_upstream() -> Result<()> {
    let response = app_with_dead_upstream()
        .oneshot(common::get("/health", None))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await?;
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["upstream"], "unreachable");
    Ok(())
}

#[tokio::test]
async fn both_login_views_resolve() -> Result<()> {
    for portal in ["teacher", "admin"] {
        let response = routes::app()
            .oneshot(common::get(&format!("/login/{}", portal), None))
            .await?;
        assert_eq!(response.status(), StatusCode::OK);

        let body = common::body_json(response).await?;
        assert_eq!(body["portal"], portal);
        assert_eq!(body["submit"], format!("/auth/{}/login", portal));
    }
    Ok(())
}

#[tokio::test]
async fn login_with_unreachable_upstream_fails_once_with_bad_gateway() -> Result<()> {
    let credentials = json!({"username": "aziza", "password": "secret"});

    let response = app_with_dead_upstream()
        .oneshot(common::post_json("/auth/teacher/login", None, credentials))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = common::body_json(response).await?;
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "BAD_GATEWAY");
    Ok(())
}

#[tokio::test]
async fn login_with_blank_credentials_is_rejected_locally() -> Result<()> {
    let response = routes::app()
        .oneshot(common::post_json(
            "/auth/admin/login",
            None,
            json!({"username": "", "password": ""}),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn logout_clears_both_session_cookies() -> Result<()> {
    let response = app_with_dead_upstream()
        .oneshot(common::post_json(
            "/auth/logout",
            Some("token=abc123; role=teacher"),
            json!({}),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let cleared: Vec<String> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap_or_default().to_string())
        .collect();

    for name in ["token", "role"] {
        assert!(
            cleared
                .iter()
                .any(|c| c.starts_with(&format!("{}=", name)) && c.contains("Max-Age=0")),
            "expected removal cookie for '{}', got {:?}",
            name,
            cleared
        );
    }
    Ok(())
}

#[tokio::test]
async fn logout_without_session_still_succeeds() -> Result<()> {
    let response = routes::app()
        .oneshot(common::post_json("/auth/logout", None, json!({})))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = common::body_json(response).await?;
    assert_eq!(body["success"], true);
    Ok(())
}
