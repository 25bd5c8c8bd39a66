//! In-memory cooldown store.

mod repository;

pub use repository::InMemoryCooldownRepository;
