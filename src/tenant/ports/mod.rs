//! Port contracts for tenant persistence.

pub mod repository;

pub use repository::{BlockList, TenantConfigRepository, TenantStoreError, TenantStoreResult};
