//! Domain model for messages exchanged with the chat platform.
//!
//! These types carry no platform client state; adapters translate them to
//! and from whatever the concrete gateway speaks.

mod capability;
mod ids;
mod message;
mod outbound;

pub use capability::{Capability, CapabilitySet};
pub use ids::{ChannelId, MessageId, TenantId, UserId};
pub use message::{Author, InboundMessage, Mention};
pub use outbound::{Attachment, Embed, EmbedField, OutboundMessage};
