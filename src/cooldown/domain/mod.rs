//! Cooldown defaults and user-facing formatting.

mod format;

pub use format::{
    COOLDOWN_PLACEHOLDER, DEFAULT_COOLDOWN, DEFAULT_COOLDOWN_MESSAGE, format_duration,
    render_cooldown_message,
};
