//! Cookie-backed session store: the `token`/`role` pair written together at
//! login and cleared together at logout. The guard itself never touches
//! cookies; this module is the only place that knows the storage layout.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config;
use crate::guard::{RoleTag, Session};

pub const TOKEN_COOKIE: &str = "token";
pub const ROLE_COOKIE: &str = "role";

/// Read the caller's session out of its cookie jar.
///
/// The token value stays opaque, only presence matters. An empty token cookie
/// counts as absent. A role cookie outside the recognized set parses to none,
/// which the guard treats the same as a missing tag.
pub fn session_from_jar(jar: &CookieJar) -> Session {
    let token = jar
        .get(TOKEN_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|t| !t.is_empty());
    let role_tag = jar.get(ROLE_COOKIE).and_then(|c| RoleTag::parse(c.value()));

    Session { token, role_tag }
}

/// Jar with the login-time cookie pair added. The role tag is stored in its
/// lowercase raw form, matching what the login endpoint issues.
pub fn login_jar(jar: CookieJar, token: &str, role_tag: RoleTag) -> CookieJar {
    jar.add(session_cookie(TOKEN_COOKIE, token.to_string()))
        .add(session_cookie(ROLE_COOKIE, role_tag.as_str().to_string()))
}

/// Jar with both session cookies removed. Logout clears them together; a
/// role tag without a token is unusable anyway.
pub fn logout_jar(jar: CookieJar) -> CookieJar {
    jar.remove(removal_cookie(TOKEN_COOKIE))
        .remove(removal_cookie(ROLE_COOKIE))
}

fn session_cookie(name: &'static str, value: String) -> Cookie<'static> {
    let security = &config::config().security;

    Cookie::build((name, value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(security.cookie_secure)
        .max_age(Duration::days(security.session_cookie_days))
        .build()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    // Removal must match the path the cookie was set with
    Cookie::build((name, "")).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::Role;

    #[test]
    fn test_empty_jar_is_anonymous() {
        let session = session_from_jar(&CookieJar::new());
        assert_eq!(session, Session::anonymous());
    }

    #[test]
    fn test_reads_token_and_role_pair() {
        let jar = CookieJar::new()
            .add(Cookie::new(TOKEN_COOKIE, "abc123"))
            .add(Cookie::new(ROLE_COOKIE, "superadmin"));

        let session = session_from_jar(&jar);
        assert_eq!(session.token.as_deref(), Some("abc123"));
        assert_eq!(session.role_tag, Some(RoleTag::SuperAdmin));
        assert_eq!(session.normalized_role(), Some(Role::Admin));
    }

    #[test]
    fn test_empty_token_cookie_counts_as_absent() {
        let jar = CookieJar::new()
            .add(Cookie::new(TOKEN_COOKIE, ""))
            .add(Cookie::new(ROLE_COOKIE, "teacher"));

        let session = session_from_jar(&jar);
        assert_eq!(session.token, None);
    }

    #[test]
    fn test_unrecognized_role_cookie_parses_to_none() {
        let jar = CookieJar::new()
            .add(Cookie::new(TOKEN_COOKIE, "abc123"))
            .add(Cookie::new(ROLE_COOKIE, "Root"));

        let session = session_from_jar(&jar);
        assert_eq!(session.role_tag, None);
    }

    #[test]
    fn test_login_then_logout_round_trip() {
        let jar = login_jar(CookieJar::new(), "abc123", RoleTag::Teacher);
        let session = session_from_jar(&jar);
        assert_eq!(session, Session::authenticated("abc123", RoleTag::Teacher));

        let jar = logout_jar(jar);
        assert_eq!(session_from_jar(&jar), Session::anonymous());
    }
}
