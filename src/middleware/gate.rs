use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::guard::{self, Decision, Role};
use crate::session;

/// Normalized role of the caller, injected into requests that pass the gate
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CurrentRole(pub Role);

/// Gate middleware for the admin portal subtree
pub async fn require_admin(request: Request, next: Next) -> Response {
    gate(&[Role::Admin], request, next).await
}

/// Gate middleware for the teacher portal subtree
pub async fn require_teacher(request: Request, next: Next) -> Response {
    gate(&[Role::Teacher], request, next).await
}

/// Evaluate the session guard for one navigation into a gated subtree.
///
/// The decision is recomputed from the request's cookies on every call;
/// nothing is cached between requests. Denials answer with a redirect to the
/// fixed login destination rather than an error status.
async fn gate(allowed_roles: &[Role], mut request: Request, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let session = session::session_from_jar(&jar);

    match guard::authorize(allowed_roles, &session) {
        Decision::Allow => {
            // Allow implies a token plus a recognized role tag
            if let Some(role) = session.normalized_role() {
                request.extensions_mut().insert(CurrentRole(role));
            }
            next.run(request).await
        }
        Decision::RedirectTo(target) => {
            tracing::debug!(
                "Session denied for {} {}: redirecting to {}",
                request.method(),
                request.uri().path(),
                target.path()
            );
            Redirect::to(target.path()).into_response()
        }
    }
}
