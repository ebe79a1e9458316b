//! User domain entities.

pub mod model;
pub mod role;

pub use model::{User, UserRef};
pub use role::Role;
