//! Recording in-memory gateway for tests and local runs.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::gateway::{
    domain::{CapabilitySet, ChannelId, MessageId, OutboundMessage, TenantId, UserId},
    ports::{GatewayError, GatewayResult, MessageGateway},
};

/// A message captured by [`InMemoryGateway::send`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    /// Destination channel.
    pub channel: ChannelId,
    /// Delivered payload.
    pub message: OutboundMessage,
}

/// Thread-safe gateway double that records outbound traffic.
///
/// The bot holds every capability in every channel unless configured
/// otherwise; members hold none.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGateway {
    state: Arc<Mutex<GatewayState>>,
}

#[derive(Debug, Default)]
struct GatewayState {
    sent: Vec<SentMessage>,
    reactions: Vec<(MessageId, String)>,
    bot_capabilities: HashMap<ChannelId, CapabilitySet>,
    member_capabilities: HashMap<(ChannelId, UserId), CapabilitySet>,
    nsfw_channels: HashSet<ChannelId>,
    voice_presence: HashMap<(TenantId, UserId), ChannelId>,
    capability_lookup_fails: bool,
    send_fails: bool,
}

impl InMemoryGateway {
    /// Creates an empty gateway.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, GatewayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Restricts the bot's capabilities in one channel.
    pub fn set_bot_capabilities(&self, channel: impl Into<ChannelId>, capabilities: CapabilitySet) {
        self.state()
            .bot_capabilities
            .insert(channel.into(), capabilities);
    }

    /// Grants a member capabilities in one channel.
    pub fn set_member_capabilities(
        &self,
        channel: impl Into<ChannelId>,
        user: impl Into<UserId>,
        capabilities: CapabilitySet,
    ) {
        self.state()
            .member_capabilities
            .insert((channel.into(), user.into()), capabilities);
    }

    /// Flags a channel for adult content.
    pub fn mark_nsfw(&self, channel: impl Into<ChannelId>) {
        self.state().nsfw_channels.insert(channel.into());
    }

    /// Places a member in a voice channel.
    pub fn join_voice(
        &self,
        tenant: impl Into<TenantId>,
        user: impl Into<UserId>,
        channel: impl Into<ChannelId>,
    ) {
        self.state()
            .voice_presence
            .insert((tenant.into(), user.into()), channel.into());
    }

    /// Makes every capability lookup fail.
    pub fn fail_capability_lookups(&self) {
        self.state().capability_lookup_fails = true;
    }

    /// Makes every send fail.
    pub fn fail_sends(&self) {
        self.state().send_fails = true;
    }

    /// Returns every message sent so far.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        self.state().sent.clone()
    }

    /// Returns the text content of every message sent so far.
    #[must_use]
    pub fn sent_texts(&self) -> Vec<String> {
        self.state()
            .sent
            .iter()
            .filter_map(|sent| sent.message.content.clone())
            .collect()
    }

    /// Returns every reaction added so far.
    #[must_use]
    pub fn reactions(&self) -> Vec<(MessageId, String)> {
        self.state().reactions.clone()
    }
}

fn lookup_failure() -> GatewayError {
    GatewayError::unavailable(std::io::Error::other("capability cache unavailable"))
}

#[async_trait]
impl MessageGateway for InMemoryGateway {
    async fn send(&self, channel: &ChannelId, message: OutboundMessage) -> GatewayResult<()> {
        let mut state = self.state();
        if state.send_fails {
            return Err(GatewayError::Rejected("send disabled".to_owned()));
        }
        state.sent.push(SentMessage {
            channel: channel.clone(),
            message,
        });
        Ok(())
    }

    async fn add_reaction(
        &self,
        _channel: &ChannelId,
        message: &MessageId,
        emoji: &str,
    ) -> GatewayResult<()> {
        self.state()
            .reactions
            .push((message.clone(), emoji.to_owned()));
        Ok(())
    }

    async fn bot_capabilities(&self, channel: &ChannelId) -> GatewayResult<CapabilitySet> {
        let state = self.state();
        if state.capability_lookup_fails {
            return Err(lookup_failure());
        }
        Ok(state
            .bot_capabilities
            .get(channel)
            .cloned()
            .unwrap_or_else(CapabilitySet::all))
    }

    async fn member_capabilities(
        &self,
        channel: &ChannelId,
        user: &UserId,
    ) -> GatewayResult<CapabilitySet> {
        let state = self.state();
        if state.capability_lookup_fails {
            return Err(lookup_failure());
        }
        Ok(state
            .member_capabilities
            .get(&(channel.clone(), user.clone()))
            .cloned()
            .unwrap_or_default())
    }

    async fn channel_is_nsfw(&self, channel: &ChannelId) -> GatewayResult<bool> {
        Ok(self.state().nsfw_channels.contains(channel))
    }

    async fn member_voice_channel(
        &self,
        tenant: &TenantId,
        user: &UserId,
    ) -> GatewayResult<Option<ChannelId>> {
        Ok(self
            .state()
            .voice_presence
            .get(&(tenant.clone(), user.clone()))
            .cloned())
    }
}
