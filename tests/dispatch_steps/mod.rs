//! Step definitions for command dispatch behaviour scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
