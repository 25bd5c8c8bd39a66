//! Command descriptors, the handler contract and the command registry.
//!
//! Commands are registered once at startup through an explicit
//! registration function and looked up by the dispatcher on every message.
//! Handlers receive an [`ports::InvocationContext`] that exposes narrow
//! interfaces onto the shared components they may use.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - The registry in [`services`]

pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
