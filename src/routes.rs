use axum::{middleware::from_fn, routing::get, routing::post, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{auth, portal, views};
use crate::middleware::{require_admin, require_teacher};
use crate::upstream::UpstreamClient;

/// Assemble the portal router with an upstream client built from config
pub fn app() -> Router {
    app_with_upstream(UpstreamClient::from_config())
}

/// Assemble the portal router around a specific upstream client
pub fn app_with_upstream(upstream: UpstreamClient) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Login views and session transitions
        .merge(auth_routes())
        // Role-gated portal subtrees
        .merge(admin_portal_routes())
        .merge(teacher_portal_routes())
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(upstream)
}

fn auth_routes() -> Router<UpstreamClient> {
    Router::new()
        // Login views; /login/teacher is also the fixed denial redirect target
        .route("/login/teacher", get(views::teacher_login_view))
        .route("/login/admin", get(views::admin_login_view))
        // Session transitions
        .route("/auth/teacher/login", post(auth::teacher_login))
        .route("/auth/admin/login", post(auth::admin_login))
        .route("/auth/logout", post(auth::logout))
}

fn admin_portal_routes() -> Router<UpstreamClient> {
    Router::new()
        .route("/app/admin", get(portal::admin_index))
        .route("/app/admin/:section", get(portal::admin_section))
        .layer(from_fn(require_admin))
}

fn teacher_portal_routes() -> Router<UpstreamClient> {
    Router::new()
        .route("/app/teacher", get(portal::teacher_index))
        .route("/app/teacher/:section", get(portal::teacher_section))
        .layer(from_fn(require_teacher))
}

async fn root() -> axum::response::Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    axum::response::Json(json!({
        "success": true,
        "data": {
            "name": "Tutor Portal",
            "version": version,
            "description": "Role-gated admin/teacher portal for a tutoring-marketplace platform",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "login_views": "/login/teacher, /login/admin (public)",
                "auth": "/auth/teacher/login, /auth/admin/login, /auth/logout (public - session transitions)",
                "admin_portal": "/app/admin[/:section] (requires admin or superadmin session)",
                "teacher_portal": "/app/teacher[/:section] (requires teacher session)"
            }
        }
    }))
}

async fn health(
    axum::extract::State(upstream): axum::extract::State<UpstreamClient>,
) -> axum::response::Json<Value> {
    let now = chrono::Utc::now();

    // Upstream reachability is reported, never failed on: the portal can
    // still serve login views and gate navigation while the API is down
    let upstream_status = if upstream.probe().await { "ok" } else { "unreachable" };

    axum::response::Json(json!({
        "success": true,
        "data": {
            "status": "ok",
            "timestamp": now,
            "upstream": upstream_status
        }
    }))
}
