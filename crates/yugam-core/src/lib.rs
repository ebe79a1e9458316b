//! # yugam-core
//!
//! Core crate for the Yugam Finance Portal. Contains configuration schemas,
//! the in-memory list filter types shared by every list page, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Yugam crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
