//! Per-(command, user) rate limiting.
//!
//! The dispatcher asks the [`ports::CooldownRepository`] for the remaining
//! window before running a command and commits a new window only after the
//! handler succeeded.

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
