use serde::{Deserialize, Serialize};

/// Role a protected subtree can declare acceptable.
///
/// Super-admin never appears here: it is reached only through role tag
/// normalization, where it collapses into `Admin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Teacher,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Teacher => "teacher",
        }
    }
}

/// Raw role tag as issued by the login endpoint and persisted alongside
/// the session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleTag {
    Admin,
    SuperAdmin,
    Teacher,
}

impl RoleTag {
    /// Parse the raw stored value. Anything outside the closed set fails to
    /// parse, which takes the same denial branch a missing tag does.
    pub fn parse(raw: &str) -> Option<RoleTag> {
        match raw {
            "admin" => Some(RoleTag::Admin),
            "superadmin" => Some(RoleTag::SuperAdmin),
            "teacher" => Some(RoleTag::Teacher),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RoleTag::Admin => "admin",
            RoleTag::SuperAdmin => "superadmin",
            RoleTag::Teacher => "teacher",
        }
    }

    /// Collapse the tag into the role used for authorization decisions.
    /// A super-admin is a superset of admin capability, so it normalizes to
    /// admin. Total and side-effect free; recomputed on every check.
    pub fn normalize(self) -> Role {
        match self {
            RoleTag::Admin | RoleTag::SuperAdmin => Role::Admin,
            RoleTag::Teacher => Role::Teacher,
        }
    }
}

/// Current caller's session state: token presence and role tag.
///
/// Both values live in an external cookie-like store; they are passed in
/// explicitly so the decision function stays pure and testable. The token
/// value itself is opaque at this layer, only presence matters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub token: Option<String>,
    pub role_tag: Option<RoleTag>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(token: impl Into<String>, role_tag: RoleTag) -> Self {
        Self {
            token: Some(token.into()),
            role_tag: Some(role_tag),
        }
    }

    /// Normalized role of the session, if it is authenticated and carries a
    /// recognized tag. A role tag without a token is unusable.
    pub fn normalized_role(&self) -> Option<Role> {
        self.token.as_ref()?;
        self.role_tag.map(RoleTag::normalize)
    }
}

/// Fixed destination for denied callers.
///
/// Every denial path goes to the teacher login view, even when the denied
/// caller holds an admin or super-admin tag. That single fallback destination
/// is the observed production behavior and is preserved as-is rather than
/// replaced with a per-role redirect table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    TeacherLogin,
}

impl RedirectTarget {
    pub fn path(self) -> &'static str {
        match self {
            RedirectTarget::TeacherLogin => "/login/teacher",
        }
    }
}

/// Outcome of an authorization check, consumed by the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Render the protected subtree.
    Allow,
    /// Navigate to the fixed login destination instead.
    RedirectTo(RedirectTarget),
}

/// Decide whether a session may enter a subtree that accepts `allowed_roles`.
///
/// Pure and total: absence and unrecognized values are ordinary decision
/// branches, never errors. Repeated calls with the same inputs return the
/// same decision; a denial only flips after an external login with a
/// qualifying role.
pub fn authorize(allowed_roles: &[Role], session: &Session) -> Decision {
    debug_assert!(
        !allowed_roles.is_empty(),
        "protected subtree must declare at least one acceptable role"
    );

    if session.token.is_none() {
        return Decision::RedirectTo(RedirectTarget::TeacherLogin);
    }

    let Some(tag) = session.role_tag else {
        return Decision::RedirectTo(RedirectTarget::TeacherLogin);
    };

    if !allowed_roles.contains(&tag.normalize()) {
        return Decision::RedirectTo(RedirectTarget::TeacherLogin);
    }

    Decision::Allow
}
