//! Per-tenant voice sessions and audio streaming.
//!
//! A tenant holds at most one voice session. A session moves through
//! `Joining`, `Playing` and `Stopping` before its entry is removed; every
//! way out of `Playing` (end of source, stop request, stalled sink, lost
//! connection) converges on the same teardown.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The session manager in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
