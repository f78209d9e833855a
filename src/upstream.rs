//! Thin client for the remote tutoring-marketplace REST API. The portal only
//! proxies credential exchange and logout; all other data access belongs to
//! other services and is out of scope here.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config;
use crate::guard::{Role, RoleTag};

/// Errors from the upstream auth API
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream request failed: {0}")]
    Unreachable(#[from] reqwest::Error),

    #[error("Login rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("Unrecognized role tag from upstream: {0}")]
    UnknownRole(String),

    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

/// Credentials submitted to a login view and forwarded upstream verbatim
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginBody {
    access_token: String,
    role: String,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

/// Successful credential exchange: the opaque token and role tag the portal
/// persists as the session cookie pair.
#[derive(Debug)]
pub struct Login {
    pub access_token: String,
    pub role_tag: RoleTag,
    pub message: Option<String>,
}

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn from_config() -> Self {
        let upstream = &config::config().upstream;
        Self::new(
            &upstream.base_url,
            upstream.connect_timeout_secs,
            upstream.request_timeout_secs,
        )
    }

    pub fn new(base_url: &str, connect_timeout_secs: u64, request_timeout_secs: u64) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .timeout(Duration::from_secs(request_timeout_secs))
            .build()
            .unwrap_or_default();

        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Exchange credentials against the portal-specific login endpoint
    /// (`/auth/teacher/login` or `/auth/admin/login`). No retry: a failure is
    /// surfaced to the caller exactly once.
    pub async fn login(&self, portal: Role, credentials: &Credentials) -> Result<Login, UpstreamError> {
        let url = format!("{}/auth/{}/login", self.base_url, portal.as_str());

        let response = self.http.post(&url).json(credentials).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "Invalid credentials".to_string());
            return Err(UpstreamError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: LoginBody = response
            .json()
            .await
            .map_err(|e| UpstreamError::MalformedResponse(e.to_string()))?;

        if body.access_token.is_empty() {
            return Err(UpstreamError::MalformedResponse(
                "login response carried an empty access token".to_string(),
            ));
        }

        // Upstream issues mixed-case tags; the cookie store holds lowercase
        let raw_role = body.role.to_lowercase();
        let role_tag = RoleTag::parse(&raw_role).ok_or(UpstreamError::UnknownRole(raw_role))?;

        Ok(Login {
            access_token: body.access_token,
            role_tag,
            message: body.message,
        })
    }

    /// Invalidate the session upstream. Best-effort: the caller clears the
    /// local cookie pair regardless of the outcome, so a dead upstream can
    /// never trap a user in a session.
    pub async fn logout(&self, token: &str) -> Result<(), UpstreamError> {
        let url = format!("{}/auth/admin/logout", self.base_url);

        self.http.post(&url).bearer_auth(token).send().await?;
        Ok(())
    }

    /// Liveness probe used by the health endpoint. Reports reachability only,
    /// never an error.
    pub async fn probe(&self) -> bool {
        self.http.head(&self.base_url).send().await.is_ok()
    }
}
