//! Outbound half of the messaging-gateway contract.
//!
//! Inbound events are pushed into the dispatcher by whoever owns the
//! platform connection; this port covers the calls the dispatch core and
//! handlers make back into the platform.

use crate::gateway::domain::{CapabilitySet, ChannelId, MessageId, OutboundMessage, TenantId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Calls the dispatch core makes into the chat platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageGateway: Send + Sync {
    /// Delivers a message to a channel.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the platform rejects or cannot accept
    /// the message.
    async fn send(&self, channel: &ChannelId, message: OutboundMessage) -> GatewayResult<()>;

    /// Adds an emoji reaction to a message.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the reaction cannot be added.
    async fn add_reaction(
        &self,
        channel: &ChannelId,
        message: &MessageId,
        emoji: &str,
    ) -> GatewayResult<()>;

    /// Returns the bot's effective capabilities in a channel.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when neither the local cache nor the
    /// platform can answer.
    async fn bot_capabilities(&self, channel: &ChannelId) -> GatewayResult<CapabilitySet>;

    /// Returns a member's effective capabilities in a channel.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the lookup fails.
    async fn member_capabilities(
        &self,
        channel: &ChannelId,
        user: &UserId,
    ) -> GatewayResult<CapabilitySet>;

    /// Returns whether a channel is flagged for adult content.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::ChannelNotFound`] for unknown channels.
    async fn channel_is_nsfw(&self, channel: &ChannelId) -> GatewayResult<bool>;

    /// Returns the voice channel a member is connected to, if any.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the voice state cannot be read.
    async fn member_voice_channel(
        &self,
        tenant: &TenantId,
        user: &UserId,
    ) -> GatewayResult<Option<ChannelId>>;
}

/// Errors returned by gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The channel does not exist or is not visible to the bot.
    #[error("channel not found: {0}")]
    ChannelNotFound(ChannelId),

    /// The platform rejected the request.
    #[error("gateway rejected request: {0}")]
    Rejected(String),

    /// Transport or cache failure.
    #[error("gateway unavailable: {0}")]
    Unavailable(Arc<dyn std::error::Error + Send + Sync>),
}

impl GatewayError {
    /// Wraps a transport failure.
    pub fn unavailable(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Unavailable(Arc::new(err))
    }
}
