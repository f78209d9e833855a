//! Login and logout handlers: the only two places the session moves between
//! its anonymous and authenticated states. The guard itself never drives
//! these transitions.

use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::guard::Role;
use crate::session;
use crate::upstream::{Credentials, UpstreamClient};

/// POST /auth/teacher/login
pub async fn teacher_login(
    State(upstream): State<UpstreamClient>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    login(upstream, jar, Role::Teacher, credentials).await
}

/// POST /auth/admin/login
pub async fn admin_login(
    State(upstream): State<UpstreamClient>,
    jar: CookieJar,
    Json(credentials): Json<Credentials>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    login(upstream, jar, Role::Admin, credentials).await
}

async fn login(
    upstream: UpstreamClient,
    jar: CookieJar,
    portal: Role,
    credentials: Credentials,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    if credentials.username.is_empty() || credentials.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let login = upstream.login(portal, &credentials).await?;

    // Token and role are written together; they are only meaningful as a pair
    let jar = session::login_jar(jar, &login.access_token, login.role_tag);
    let landing = format!("/app/{}", login.role_tag.normalize().as_str());

    tracing::info!(
        "Login successful for '{}' with role '{}'",
        credentials.username,
        login.role_tag.as_str()
    );

    Ok((
        jar,
        Json(json!({
            "success": true,
            "message": login.message.unwrap_or_else(|| "Login successful".to_string()),
            "role": login.role_tag.as_str(),
            "redirect": landing
        })),
    ))
}

/// POST /auth/logout - clear the session cookie pair.
///
/// Upstream invalidation is attempted when a token is present, but the local
/// session is cleared no matter what: a denied or failed upstream call must
/// not leave the caller authenticated.
pub async fn logout(
    State(upstream): State<UpstreamClient>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    if let Some(token) = jar.get(session::TOKEN_COOKIE).map(|c| c.value().to_string()) {
        if let Err(e) = upstream.logout(&token).await {
            tracing::warn!("Upstream logout failed, clearing session anyway: {}", e);
        }
    }

    (
        session::logout_jar(jar),
        Json(json!({
            "success": true,
            "message": "Logged out"
        })),
    )
}
