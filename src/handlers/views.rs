//! Login view descriptors. Both must resolve: the teacher login view is the
//! fixed destination every guard denial redirects to.

use axum::response::Json;
use serde_json::{json, Value};

/// GET /login/teacher
pub async fn teacher_login_view() -> Json<Value> {
    Json(json!({
        "view": "login",
        "portal": "teacher",
        "submit": "/auth/teacher/login",
        "fields": ["username", "password"]
    }))
}

/// GET /login/admin
pub async fn admin_login_view() -> Json<Value> {
    Json(json!({
        "view": "login",
        "portal": "admin",
        "submit": "/auth/admin/login",
        "fields": ["username", "password"]
    }))
}
