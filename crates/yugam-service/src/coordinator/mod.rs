//! Coordinator area: one mixed list of the events and workshops the user
//! coordinates.

pub mod service;

pub use service::CoordinatorService;
