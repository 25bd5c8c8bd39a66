//! Built-in command handlers.
//!
//! These are the handler categories that exercise the shared components a
//! command context exposes: paginated feeds use the rotation store, sound
//! commands drive the audio session manager, and the utility commands
//! read and mutate tenant configuration.
//!
//! [`services::register_builtin`] registers all of them against a
//! [`crate::command::services::CommandRegistry`].

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
