//! Adapter implementations for the messaging gateway port.

pub mod console;
pub mod memory;

pub use console::ConsoleGateway;
pub use memory::{InMemoryGateway, SentMessage};
