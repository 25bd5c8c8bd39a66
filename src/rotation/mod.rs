//! Per-tenant rotating cursors for paginated feed commands.
//!
//! A feed command reads the cursor for `(tenant, command)` to choose which
//! item to show, then advances it so the next invocation shows another
//! item. Accesses to one key are linearized by the store.

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
