//! Port contracts for voice connectivity and audio access.

pub mod access;
pub mod error;
pub mod voice;

pub use access::{AudioAccess, AudioSource};
pub use error::AudioSessionError;
pub use voice::{VoiceConnection, VoiceGateway, VoiceGatewayError, VoiceGatewayResult};
