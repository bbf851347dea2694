//! Port definitions (interfaces to the outside world)

pub mod interaction;
pub mod store;
