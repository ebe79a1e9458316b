//! Role-to-route policies and the route guard.

pub mod enforcer;
pub mod policies;

pub use enforcer::{GuardDecision, RbacEnforcer, guard};
pub use policies::{RbacPolicies, RouteAccess};
