//! Narrow audio interface exposed to command handlers.

use super::AudioSessionError;
use crate::audio::domain::SessionId;
use crate::gateway::domain::{ChannelId, TenantId};
use async_trait::async_trait;
use tokio::io::AsyncRead;

/// Readable audio handed to a session.
pub type AudioSource = Box<dyn AsyncRead + Send + Unpin>;

/// What a voice command may do with the tenant's session.
#[async_trait]
pub trait AudioAccess: Send + Sync {
    /// Starts streaming `source` into `channel`.
    ///
    /// Returns once the connection is established and streaming has been
    /// handed off; it does not wait for playback to finish.
    ///
    /// # Errors
    ///
    /// Returns [`AudioSessionError::AlreadyPlaying`] when the tenant has a
    /// live session and [`AudioSessionError::Connect`] when joining fails.
    async fn play(
        &self,
        tenant: &TenantId,
        channel: &ChannelId,
        source: AudioSource,
    ) -> Result<SessionId, AudioSessionError>;

    /// Requests the tenant's session to stop, returning whether one existed.
    fn stop(&self, tenant: &TenantId) -> bool;

    /// Tears the tenant's session down immediately, returning whether one
    /// existed.
    async fn disconnect(&self, tenant: &TenantId) -> bool;

    /// Returns `true` while the tenant's session is streaming.
    fn is_playing(&self, tenant: &TenantId) -> bool;
}
