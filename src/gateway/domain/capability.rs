//! Delegated capabilities (platform permissions).

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A delegated capability the bot or a member may hold in a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Post messages.
    SendMessages,
    /// Post rich embeds.
    EmbedLinks,
    /// Upload files.
    AttachFiles,
    /// Read channel history.
    ReadMessages,
    /// Delete or pin other users' messages.
    ManageMessages,
    /// Join a voice channel.
    Connect,
    /// Transmit audio in a voice channel.
    Speak,
    /// Add reactions to messages.
    AddReactions,
    /// Manage roles.
    ManageRoles,
    /// Manage channels.
    ManageChannels,
    /// Manage tenant-wide settings.
    ManageServer,
    /// Full administrative rights.
    Administrator,
    /// Use emojis from other tenants.
    UseExternalEmojis,
}

impl Capability {
    /// Every known capability.
    pub const ALL: [Self; 13] = [
        Self::SendMessages,
        Self::EmbedLinks,
        Self::AttachFiles,
        Self::ReadMessages,
        Self::ManageMessages,
        Self::Connect,
        Self::Speak,
        Self::AddReactions,
        Self::ManageRoles,
        Self::ManageChannels,
        Self::ManageServer,
        Self::Administrator,
        Self::UseExternalEmojis,
    ];

    /// Returns the name shown to users in refusal messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::SendMessages => "Send Messages",
            Self::EmbedLinks => "Embed Links",
            Self::AttachFiles => "Attach Files",
            Self::ReadMessages => "Read Messages",
            Self::ManageMessages => "Manage Messages",
            Self::Connect => "Connect (Voice)",
            Self::Speak => "Speak (Voice)",
            Self::AddReactions => "Add Reactions",
            Self::ManageRoles => "Manage Roles",
            Self::ManageChannels => "Manage Channels",
            Self::ManageServer => "Manage Server",
            Self::Administrator => "Administrator",
            Self::UseExternalEmojis => "Use External Emojis",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// An ordered set of capabilities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet(BTreeSet<Capability>);

impl CapabilitySet {
    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Creates a set holding every known capability.
    #[must_use]
    pub fn all() -> Self {
        Capability::ALL.into_iter().collect()
    }

    /// Adds a capability.
    #[must_use]
    pub fn with(mut self, capability: Capability) -> Self {
        self.0.insert(capability);
        self
    }

    /// Returns `true` when the set holds `capability`.
    #[must_use]
    pub fn contains(&self, capability: Capability) -> bool {
        self.0.contains(&capability)
    }

    /// Returns `true` when the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.0.iter().copied()
    }

    /// Returns the members of `self` that `granted` lacks.
    #[must_use]
    pub fn missing_from(&self, granted: &Self) -> Vec<Capability> {
        self.0.difference(&granted.0).copied().collect()
    }
}

impl FromIterator<Capability> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = Capability>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
