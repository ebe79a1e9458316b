//! Route guard: the decision made before any page handler runs.

use yugam_entity::Role;

use super::policies::{RbacPolicies, RouteAccess};

/// Outcome of a guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Render the page.
    Allow,
    /// No session; send to `/login`.
    RedirectLogin,
    /// Wrong role; send to `/unauthorized`.
    RedirectUnauthorized,
    /// Signed-in user visiting `/login`; send to `/`.
    RedirectHome,
}

impl GuardDecision {
    /// Redirect target, if the decision is a redirect.
    pub fn location(&self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectLogin => Some("/login"),
            Self::RedirectUnauthorized => Some("/unauthorized"),
            Self::RedirectHome => Some("/"),
        }
    }
}

/// Pure guard predicate.
///
/// No user: [`GuardDecision::RedirectLogin`]. A user whose role is outside a
/// given `allowed` set: [`GuardDecision::RedirectUnauthorized`]. Otherwise
/// [`GuardDecision::Allow`].
pub fn guard(user: Option<&Role>, allowed: Option<&[Role]>) -> GuardDecision {
    match (user, allowed) {
        (None, _) => GuardDecision::RedirectLogin,
        (Some(_), None) => GuardDecision::Allow,
        (Some(role), Some(roles)) if roles.contains(role) => GuardDecision::Allow,
        (Some(_), Some(_)) => GuardDecision::RedirectUnauthorized,
    }
}

/// Policy lookup plus guard.
#[derive(Debug, Clone, Default)]
pub struct RbacEnforcer {
    policies: RbacPolicies,
}

impl RbacEnforcer {
    pub fn new() -> Self {
        Self {
            policies: RbacPolicies::new(),
        }
    }

    /// Decide whether `user` may reach `path`.
    ///
    /// Paths missing from the table still need a session; the router then
    /// answers them with 404.
    pub fn check(&self, user: Option<&Role>, path: &str) -> GuardDecision {
        let decision = match self.policies.allowed_roles(path) {
            RouteAccess::Public if path == "/login" && user.is_some() => {
                GuardDecision::RedirectHome
            }
            RouteAccess::Public => GuardDecision::Allow,
            RouteAccess::Authenticated | RouteAccess::Unknown => guard(user, None),
            RouteAccess::Roles(roles) => guard(user, Some(roles)),
        };

        if decision != GuardDecision::Allow {
            tracing::debug!(path = %path, role = ?user, decision = ?decision, "Route guard redirect");
        }
        decision
    }
}
