//! Gateway adapter that prints responses to standard output.
//!
//! Used by the `memer` binary to drive the dispatcher from a terminal.
//! The console user is treated as the tenant owner: every capability is
//! granted and the configured voice channel is always joined.

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::gateway::{
    domain::{CapabilitySet, ChannelId, MessageId, OutboundMessage, TenantId, UserId},
    ports::{GatewayError, GatewayResult, MessageGateway},
};

/// Console-backed gateway.
#[derive(Debug)]
pub struct ConsoleGateway {
    out: Mutex<tokio::io::Stdout>,
    nsfw: bool,
    voice_channel: ChannelId,
}

impl ConsoleGateway {
    /// Creates a console gateway.
    #[must_use]
    pub fn new(voice_channel: impl Into<ChannelId>) -> Self {
        Self {
            out: Mutex::new(tokio::io::stdout()),
            nsfw: false,
            voice_channel: voice_channel.into(),
        }
    }

    /// Treats every channel as adult-content enabled.
    #[must_use]
    pub const fn with_nsfw(mut self, nsfw: bool) -> Self {
        self.nsfw = nsfw;
        self
    }

    async fn write_line(&self, line: &str) -> GatewayResult<()> {
        let mut out = self.out.lock().await;
        out.write_all(line.as_bytes())
            .await
            .map_err(GatewayError::unavailable)?;
        out.write_all(b"\n").await.map_err(GatewayError::unavailable)?;
        out.flush().await.map_err(GatewayError::unavailable)
    }
}

/// Renders a message the way a terminal user would want to read it.
#[must_use]
pub fn render(message: &OutboundMessage) -> String {
    let mut rendered = String::new();
    if let Some(content) = &message.content {
        rendered.push_str(content);
    }
    if let Some(embed) = &message.embed {
        for (label, value) in [
            ("title", &embed.title),
            ("description", &embed.description),
            ("url", &embed.url),
            ("image", &embed.image_url),
            ("footer", &embed.footer),
        ] {
            if let Some(text) = value {
                rendered.push_str(&format!("\n  [{label}] {text}"));
            }
        }
        for field in &embed.fields {
            rendered.push_str(&format!("\n  [{}] {}", field.name, field.value));
        }
    }
    for file in &message.files {
        rendered.push_str(&format!(
            "\n  <attachment {} ({} bytes)>",
            file.name,
            file.data.len()
        ));
    }
    rendered
}

#[async_trait]
impl MessageGateway for ConsoleGateway {
    async fn send(&self, channel: &ChannelId, message: OutboundMessage) -> GatewayResult<()> {
        self.write_line(&format!("#{channel} > {}", render(&message)))
            .await
    }

    async fn add_reaction(
        &self,
        channel: &ChannelId,
        _message: &MessageId,
        emoji: &str,
    ) -> GatewayResult<()> {
        self.write_line(&format!("#{channel} reacted {emoji}")).await
    }

    async fn bot_capabilities(&self, _channel: &ChannelId) -> GatewayResult<CapabilitySet> {
        Ok(CapabilitySet::all())
    }

    async fn member_capabilities(
        &self,
        _channel: &ChannelId,
        _user: &UserId,
    ) -> GatewayResult<CapabilitySet> {
        Ok(CapabilitySet::all())
    }

    async fn channel_is_nsfw(&self, _channel: &ChannelId) -> GatewayResult<bool> {
        Ok(self.nsfw)
    }

    async fn member_voice_channel(
        &self,
        _tenant: &TenantId,
        _user: &UserId,
    ) -> GatewayResult<Option<ChannelId>> {
        Ok(Some(self.voice_channel.clone()))
    }
}
