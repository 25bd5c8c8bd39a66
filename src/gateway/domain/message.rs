//! Inbound message events.

use super::{ChannelId, MessageId, TenantId, UserId};
use serde::{Deserialize, Serialize};

/// The sender of an inbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: UserId,
    username: String,
    is_bot: bool,
}

impl Author {
    /// Creates a human author.
    #[must_use]
    pub fn new(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            username: username.into(),
            is_bot: false,
        }
    }

    /// Creates an automated (bot) author.
    #[must_use]
    pub fn bot(id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            is_bot: true,
            ..Self::new(id, username)
        }
    }

    /// Returns the author's user id.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the author's display name.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns `true` when the author is an automated account.
    #[must_use]
    pub const fn is_bot(&self) -> bool {
        self.is_bot
    }
}

/// A user mention resolved by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mention {
    /// The mentioned user's id.
    pub user_id: UserId,
    /// The mentioned user's display name.
    pub username: String,
}

impl Mention {
    /// Creates a resolved mention.
    #[must_use]
    pub fn new(user_id: impl Into<UserId>, username: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
        }
    }
}

/// A message-received event as delivered by the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    id: MessageId,
    author: Author,
    tenant_id: Option<TenantId>,
    channel_id: ChannelId,
    content: String,
    mentions: Vec<Mention>,
}

impl InboundMessage {
    /// Creates a direct (tenant-less) message.
    #[must_use]
    pub fn new(
        id: impl Into<MessageId>,
        author: Author,
        channel_id: impl Into<ChannelId>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author,
            tenant_id: None,
            channel_id: channel_id.into(),
            content: content.into(),
            mentions: Vec::new(),
        }
    }

    /// Places the message in a tenant channel.
    #[must_use]
    pub fn in_tenant(mut self, tenant_id: impl Into<TenantId>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    /// Attaches the mentions resolved by the gateway.
    #[must_use]
    pub fn with_mentions(mut self, mentions: impl IntoIterator<Item = Mention>) -> Self {
        self.mentions = mentions.into_iter().collect();
        self
    }

    /// Returns the message id.
    #[must_use]
    pub const fn id(&self) -> &MessageId {
        &self.id
    }

    /// Returns the message author.
    #[must_use]
    pub const fn author(&self) -> &Author {
        &self.author
    }

    /// Returns the tenant the message was posted in, if any.
    #[must_use]
    pub const fn tenant_id(&self) -> Option<&TenantId> {
        self.tenant_id.as_ref()
    }

    /// Returns the channel the message was posted in.
    #[must_use]
    pub const fn channel_id(&self) -> &ChannelId {
        &self.channel_id
    }

    /// Returns the raw message text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the resolved user mentions.
    #[must_use]
    pub fn mentions(&self) -> &[Mention] {
        &self.mentions
    }
}
