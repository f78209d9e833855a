//! View descriptors for the two role-gated portal subtrees. Each subtree has
//! a fixed section table; the sections themselves are presentation screens
//! backed by the remote API and carry no further logic here.

use axum::{extract::Path, response::Json, Extension};
use serde::Serialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::CurrentRole;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub path: &'static str,
    pub title: &'static str,
}

/// Sections reachable under /app/admin (admin and super-admin callers)
pub const ADMIN_SECTIONS: &[Section] = &[
    Section { path: "admins", title: "Admins" },
    Section { path: "teachers", title: "Teachers" },
    Section { path: "students", title: "Students" },
    Section { path: "lessons", title: "Lessons" },
    Section { path: "payments", title: "Payments" },
    Section { path: "earnings", title: "Earnings" },
];

/// Sections reachable under /app/teacher
pub const TEACHER_SECTIONS: &[Section] = &[
    Section { path: "lessons", title: "Lessons" },
    Section { path: "schedules", title: "Schedules" },
    Section { path: "payments", title: "Payments" },
    Section { path: "profile", title: "Profile" },
];

/// GET /app/admin - dashboard index for the admin subtree
pub async fn admin_index(Extension(CurrentRole(role)): Extension<CurrentRole>) -> Json<Value> {
    Json(index("admin", role.as_str(), ADMIN_SECTIONS))
}

/// GET /app/admin/:section
pub async fn admin_section(
    Extension(CurrentRole(role)): Extension<CurrentRole>,
    Path(section): Path<String>,
) -> Result<Json<Value>, ApiError> {
    section_view("admin", role.as_str(), ADMIN_SECTIONS, &section)
}

/// GET /app/teacher - dashboard index for the teacher subtree
pub async fn teacher_index(Extension(CurrentRole(role)): Extension<CurrentRole>) -> Json<Value> {
    Json(index("teacher", role.as_str(), TEACHER_SECTIONS))
}

/// GET /app/teacher/:section
pub async fn teacher_section(
    Extension(CurrentRole(role)): Extension<CurrentRole>,
    Path(section): Path<String>,
) -> Result<Json<Value>, ApiError> {
    section_view("teacher", role.as_str(), TEACHER_SECTIONS, &section)
}

fn index(portal: &str, role: &str, sections: &[Section]) -> Value {
    json!({
        "view": "dashboard",
        "portal": portal,
        "role": role,
        "sections": sections
            .iter()
            .map(|s| json!({
                "title": s.title,
                "path": format!("/app/{}/{}", portal, s.path)
            }))
            .collect::<Vec<_>>()
    })
}

fn section_view(
    portal: &str,
    role: &str,
    sections: &[Section],
    requested: &str,
) -> Result<Json<Value>, ApiError> {
    let section = sections
        .iter()
        .find(|s| s.path == requested)
        .ok_or_else(|| ApiError::not_found(format!("Unknown {} section: {}", portal, requested)))?;

    Ok(Json(json!({
        "view": "section",
        "portal": portal,
        "role": role,
        "section": section.path,
        "title": section.title
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_tables_match_portal_navigation() {
        assert!(ADMIN_SECTIONS.iter().any(|s| s.path == "students"));
        assert!(TEACHER_SECTIONS.iter().any(|s| s.path == "schedules"));
        // Teacher portal has no user-management sections
        assert!(!TEACHER_SECTIONS.iter().any(|s| s.path == "admins"));
    }

    #[test]
    fn test_unknown_section_is_not_found() {
        let err = section_view("admin", "admin", ADMIN_SECTIONS, "schedules").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }
}
