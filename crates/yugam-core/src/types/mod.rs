//! Core type definitions used across the portal workspace.

pub mod filter;

pub use filter::{DateRange, ListFilter};
