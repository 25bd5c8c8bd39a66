//! Errors returned by the session manager.

use super::VoiceGatewayError;
use crate::gateway::domain::TenantId;
use thiserror::Error;

/// Reasons a play request is refused or fails.
#[derive(Debug, Clone, Error)]
pub enum AudioSessionError {
    /// The tenant already has a joining or playing session.
    #[error("already playing audio in tenant {0}")]
    AlreadyPlaying(TenantId),

    /// The tenant's previous session is still tearing down.
    #[error("previous session in tenant {0} is still stopping")]
    TearingDown(TenantId),

    /// Joining the voice channel failed.
    #[error("failed to join voice channel: {0}")]
    Connect(#[source] VoiceGatewayError),

    /// The session was stopped or disconnected while joining.
    #[error("session in tenant {0} was cancelled while joining")]
    Cancelled(TenantId),
}
