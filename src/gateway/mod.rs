//! Messaging-gateway boundary for Memer.
//!
//! The gateway is the chat platform as seen by the dispatch core: inbound
//! messages arrive as [`domain::InboundMessage`] values and everything the
//! core needs from the platform (sending responses, reading channel and
//! member metadata) goes through the [`ports::MessageGateway`] port.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
