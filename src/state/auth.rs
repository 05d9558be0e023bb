#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use serde::{Deserialize, Serialize};

/// Access role carried by the session token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Employee,
}

/// The signed-in user, reconstructed from the session record on every
/// page load. Never persisted on its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: String,
}

impl User {
    /// Derive a user from session credentials: `id` is the email itself
    /// and `name` is the local part before the `@`.
    pub fn from_credentials(email: &str, role: Role) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_owned();
        Self {
            id: email.to_owned(),
            email: email.to_owned(),
            role,
            name,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Authentication state tracking the current user and loading status.
///
/// Provided as an `RwSignal` context at the app root and hydrated once per
/// tab lifetime from the stored session record.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Route-guard decision for the current auth state.
    ///
    /// `require_admin` marks admin-only routes; `allowed_roles` restricts a
    /// route to an explicit role set. Both default to "any signed-in user".
    pub fn check_access(
        &self,
        require_admin: bool,
        allowed_roles: Option<&[Role]>,
    ) -> GuardDecision {
        if self.loading {
            return GuardDecision::Wait;
        }
        let Some(user) = &self.user else {
            return GuardDecision::RedirectLogin;
        };
        if require_admin && !user.is_admin() {
            return GuardDecision::RedirectDashboard;
        }
        if let Some(allowed) = allowed_roles {
            if !allowed.contains(&user.role) {
                return GuardDecision::RedirectDashboard;
            }
        }
        GuardDecision::Allow
    }
}

/// Outcome of a route-guard check. Redirects are navigation side effects,
/// never errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state still resolving; render a blocking placeholder.
    Wait,
    /// No user; navigate to the login page at `/`.
    RedirectLogin,
    /// Insufficient role; navigate to `/dashboard`.
    RedirectDashboard,
    /// Render the protected children.
    Allow,
}
