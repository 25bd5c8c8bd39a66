//! Rotation store service.

mod store;

pub use store::RotationStore;
