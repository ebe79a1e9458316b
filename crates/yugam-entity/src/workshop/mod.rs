//! Workshop domain entities.

pub mod model;

pub use model::{CreateWorkshopRequest, UpdateWorkshopRequest, Workshop};
