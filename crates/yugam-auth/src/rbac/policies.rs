//! Role-to-route mapping.
//!
//! Every restricted set lists `ADMIN` explicitly; there is no implicit
//! admin bypass.

use yugam_entity::Role;

const ADMIN_ONLY: &[Role] = &[Role::Admin];
const FINANCE: &[Role] = &[Role::FinanceTeam, Role::Admin];
const EVENT_LEADS: &[Role] = &[Role::EventTeamLead, Role::Admin];
const WORKSHOP_LEADS: &[Role] = &[Role::WorkshopTeamLead, Role::Admin];
const FACILITIES: &[Role] = &[Role::FacilitiesTeam, Role::Admin];
const COORDINATORS: &[Role] = &[
    Role::EventCoordinator,
    Role::WorkshopCoordinator,
    Role::Admin,
];

/// Who may reach a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// No session needed.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in users holding one of these roles.
    Roles(&'static [Role]),
    /// Not in the table.
    Unknown,
}

impl RouteAccess {
    /// The role restriction to hand to [`super::guard`], if any.
    pub fn allowed(&self) -> Option<&'static [Role]> {
        match self {
            Self::Roles(roles) => Some(*roles),
            _ => None,
        }
    }
}

/// Matching rule for one table row.
#[derive(Debug, Clone, Copy)]
enum Pattern {
    /// Exactly this path.
    Exact(&'static str),
    /// This path or anything below it.
    Subtree(&'static str),
    /// `prefix/<one segment>`.
    Param(&'static str),
}

impl Pattern {
    fn matches(&self, path: &str) -> bool {
        match *self {
            Pattern::Exact(p) => path == p,
            Pattern::Subtree(p) => {
                path == p || path.strip_prefix(p).is_some_and(|rest| rest.starts_with('/'))
            }
            Pattern::Param(p) => path
                .strip_prefix(p)
                .and_then(|rest| rest.strip_prefix('/'))
                .is_some_and(|seg| !seg.is_empty() && !seg.contains('/')),
        }
    }
}

/// The route table consulted by the guard.
#[derive(Debug, Clone)]
pub struct RbacPolicies {
    rules: Vec<(Pattern, RouteAccess)>,
}

impl RbacPolicies {
    /// The portal's route table.
    pub fn new() -> Self {
        let rules = vec![
            (Pattern::Exact("/login"), RouteAccess::Public),
            (Pattern::Exact("/unauthorized"), RouteAccess::Public),
            (Pattern::Exact("/health"), RouteAccess::Public),
            (Pattern::Exact("/"), RouteAccess::Authenticated),
            (Pattern::Exact("/profile"), RouteAccess::Authenticated),
            (Pattern::Subtree("/notifications"), RouteAccess::Authenticated),
            (Pattern::Exact("/logout"), RouteAccess::Authenticated),
            (Pattern::Param("/events"), RouteAccess::Authenticated),
            (Pattern::Param("/workshops"), RouteAccess::Authenticated),
            (Pattern::Subtree("/admin"), RouteAccess::Roles(ADMIN_ONLY)),
            (Pattern::Subtree("/finance"), RouteAccess::Roles(FINANCE)),
            (Pattern::Subtree("/event-leads"), RouteAccess::Roles(EVENT_LEADS)),
            (
                Pattern::Subtree("/workshop-leads"),
                RouteAccess::Roles(WORKSHOP_LEADS),
            ),
            (Pattern::Subtree("/facilities"), RouteAccess::Roles(FACILITIES)),
            (
                Pattern::Subtree("/coordinator"),
                RouteAccess::Roles(COORDINATORS),
            ),
        ];
        Self { rules }
    }

    /// Look up the access rule for `path`. A trailing slash is ignored.
    pub fn allowed_roles(&self, path: &str) -> RouteAccess {
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };
        self.rules
            .iter()
            .find(|(pattern, _)| pattern.matches(path))
            .map(|(_, access)| *access)
            .unwrap_or(RouteAccess::Unknown)
    }
}

impl Default for RbacPolicies {
    fn default() -> Self {
        Self::new()
    }
}
