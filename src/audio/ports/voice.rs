//! Voice transport contract.

use crate::gateway::domain::{ChannelId, TenantId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// Result type for voice transport operations.
pub type VoiceGatewayResult<T> = Result<T, VoiceGatewayError>;

/// Opens voice connections.
#[async_trait]
pub trait VoiceGateway: Send + Sync {
    /// Joins a voice channel and returns the established connection.
    ///
    /// # Errors
    ///
    /// Returns [`VoiceGatewayError`] when the handshake fails.
    async fn join(
        &self,
        tenant: &TenantId,
        channel: &ChannelId,
    ) -> VoiceGatewayResult<Arc<dyn VoiceConnection>>;
}

/// One established voice connection.
#[async_trait]
pub trait VoiceConnection: Send + Sync {
    /// Returns the bounded channel that accepts encoded audio frames.
    fn frame_sink(&self) -> mpsc::Sender<Vec<u8>>;

    /// Toggles the speaking indicator.
    ///
    /// # Errors
    ///
    /// Returns [`VoiceGatewayError`] when the platform rejects the update.
    async fn set_speaking(&self, speaking: bool) -> VoiceGatewayResult<()>;

    /// Leaves the voice channel. Calling this more than once is harmless.
    ///
    /// # Errors
    ///
    /// Returns [`VoiceGatewayError`] when the platform rejects the request.
    async fn disconnect(&self) -> VoiceGatewayResult<()>;
}

/// Errors returned by voice transports.
#[derive(Debug, Clone, Error)]
pub enum VoiceGatewayError {
    /// The platform refused the request.
    #[error("voice request rejected: {0}")]
    Rejected(String),

    /// The handshake did not complete in time.
    #[error("voice handshake timed out")]
    Timeout,

    /// Transport failure.
    #[error("voice transport unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl VoiceGatewayError {
    /// Wraps a transport failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
