//! Domain model for tenant configuration and blocking.

mod block;
mod config;

pub use block::{BlockEntry, BlockKind};
pub use config::{DEFAULT_PREFIX, MAX_PREFIX_LEN, NSFW_TOGGLE, TenantConfig};
