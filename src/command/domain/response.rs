//! Handler responses.

use crate::gateway::domain::{Attachment, Embed, MessageId, OutboundMessage};

/// What a handler wants delivered after it succeeds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResponse {
    /// Plain text.
    pub content: Option<String>,
    /// Rich embed.
    pub embed: Option<Embed>,
    /// File attachments.
    pub files: Vec<Attachment>,
    /// Deliver as a reply to the triggering message.
    pub reply: bool,
}

impl CommandResponse {
    /// Creates a plain-text response.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Creates an embed response.
    #[must_use]
    pub fn embed(embed: Embed) -> Self {
        Self {
            embed: Some(embed),
            ..Self::default()
        }
    }

    /// Creates a single-file response.
    #[must_use]
    pub fn file(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            files: vec![Attachment::new(name, data)],
            ..Self::default()
        }
    }

    /// Marks the response as a reply.
    #[must_use]
    pub const fn as_reply(mut self) -> Self {
        self.reply = true;
        self
    }

    /// Converts the response into a gateway message.
    #[must_use]
    pub fn into_outbound(self, trigger_message: &MessageId) -> OutboundMessage {
        OutboundMessage {
            content: self.content,
            embed: self.embed,
            files: self.files,
            reply_to: self.reply.then(|| trigger_message.clone()),
        }
    }
}
