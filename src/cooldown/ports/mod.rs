//! Port contracts for cooldown persistence.

pub mod repository;

pub use repository::{CooldownRepository, CooldownStoreError, CooldownStoreResult};
