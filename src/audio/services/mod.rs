//! Voice session orchestration.

mod manager;
mod stream;

pub use manager::{AudioSessionManager, Playback};
