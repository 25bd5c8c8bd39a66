//! Command construction and handler errors.

use thiserror::Error;

use crate::audio::ports::AudioSessionError;
use crate::command::services::RegistryError;
use crate::cooldown::ports::CooldownStoreError;
use crate::gateway::ports::GatewayError;
use crate::rotation::domain::RotationError;
use crate::tenant::ports::TenantStoreError;

/// Errors returned while building command descriptors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandDomainError {
    /// No trigger was supplied.
    #[error("a command needs at least one trigger")]
    NoTriggers,

    /// A trigger was empty after trimming.
    #[error("command triggers must not be empty")]
    EmptyTrigger,

    /// A trigger contains whitespace and could never be typed as one token.
    #[error("command trigger '{0}' contains whitespace")]
    WhitespaceInTrigger(String),
}

/// A failure reported by a command handler.
///
/// The message is shown to the invoking user as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct HandlerError {
    message: String,
}

impl HandlerError {
    /// Creates an error with a user-visible message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the user-visible message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

macro_rules! handler_error_from {
    ($($source:ty),+ $(,)?) => {
        $(
            impl From<$source> for HandlerError {
                fn from(err: $source) -> Self {
                    Self::new(err.to_string())
                }
            }
        )+
    };
}

handler_error_from!(
    AudioSessionError,
    CooldownStoreError,
    GatewayError,
    RegistryError,
    RotationError,
    TenantStoreError,
    std::io::Error,
);
