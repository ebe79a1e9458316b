//! # yugam-auth
//!
//! Authentication and route authorization for the Yugam Finance Portal.
//!
//! ## Modules
//!
//! - `jwt`: signed session tokens carrying the user and their remote API token
//! - `rbac`: the role-to-route policy table and the route guard

pub mod jwt;
pub mod rbac;

pub use jwt::{IssuedSession, SessionClaims, SessionDecoder, SessionEncoder};
pub use rbac::{GuardDecision, RbacEnforcer, RbacPolicies, RouteAccess, guard};
