//! Event domain entities.

pub mod model;

pub use model::{CreateEventRequest, Event, UpdateEventRequest};
