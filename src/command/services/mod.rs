//! Command registry service.

mod registry;

pub use registry::{CommandRegistry, RegistryEntry, RegistryError, RegistryResult};
