//! In-memory voice transport.

mod voice;

pub use voice::{InMemoryVoiceGateway, SinkMode, VoiceStats};
