//! Profile and notification actions for the signed-in user.

pub mod service;

pub use service::{ProfileService, ProfileView};
