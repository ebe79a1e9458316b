//! Route handlers organized by area.
//!
//! Page handlers return JSON view models and never fail on remote fetch
//! errors (see `yugam_service`). Action handlers return [`ApiResult`] and
//! surface remote failures as error responses.
//!
//! [`ApiResult`]: crate::error::ApiResult

pub mod admin;
pub mod auth;
pub mod coordinator;
pub mod dashboard;
pub mod detail;
pub mod event_leads;
pub mod facilities;
pub mod finance;
pub mod health;
pub mod profile;
pub mod program;
pub mod workshop_leads;
