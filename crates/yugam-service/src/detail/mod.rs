//! Event and workshop detail pages.

pub mod service;

pub use service::{DetailService, DetailView};
