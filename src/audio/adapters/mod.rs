//! Adapter implementations for the voice transport.

pub mod memory;
