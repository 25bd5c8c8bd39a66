//! Identifier types for platform entities.
//!
//! Platform identifiers are opaque strings (snowflakes on most chat
//! platforms). They are wrapped so that a channel id can never be passed
//! where a user id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! platform_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw platform identifier.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

platform_id!(
    /// Identifier of a tenant (a guild or workspace).
    TenantId
);
platform_id!(
    /// Identifier of a text or voice channel.
    ChannelId
);
platform_id!(
    /// Identifier of a user account.
    UserId
);
platform_id!(
    /// Identifier of a single message.
    MessageId
);
