//! Port contracts for the messaging gateway.

pub mod messaging;

pub use messaging::{GatewayError, GatewayResult, MessageGateway};

#[cfg(test)]
pub use messaging::MockMessageGateway;
