//! Per-tenant configuration and the block list.
//!
//! The dispatch core reads a tenant's prefix and disabled-command list on
//! every message and consults the block list before doing anything else.
//! Handlers mutate the configuration through the same port.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
