//! In-memory tenant store.

mod store;

pub use store::InMemoryTenantStore;
