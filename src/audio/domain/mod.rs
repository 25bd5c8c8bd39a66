//! Domain model for voice sessions.

mod session;
mod settings;

pub use session::{SessionId, SessionSnapshot, StreamEnd, VoiceSessionState};
pub use settings::AudioSettings;
