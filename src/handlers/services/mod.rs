//! Built-in command handlers and their registration.

mod access;
mod builtin;
mod feed;
mod help;
mod prefix;
mod toggle;
mod voice;

pub use builtin::{BuiltinPorts, BuiltinRegistrationError, register_builtin};
pub use feed::{FeedCommand, NO_POSTS_MESSAGE};
pub use help::{COMMAND_NOT_FOUND, HelpCommand, UNCATEGORISED};
pub use prefix::PrefixCommand;
pub use toggle::{ToggleCommand, ToggleMode};
pub use voice::{
    DEFAULT_BUSY_MESSAGE, JOIN_VOICE_MESSAGE, NO_CLIPS_MESSAGE, NOT_PLAYING_MESSAGE,
    SOUND_COOLDOWN, STOP_REACTION, SoundCommand, StopCommand, VOICE_CATEGORY,
    VOICE_PERMISSIONS_MESSAGE,
};
