//! Adapter implementations for cooldown persistence.

pub mod memory;
