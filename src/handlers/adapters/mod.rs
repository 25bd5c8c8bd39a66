//! Adapter implementations for the handler ports.

pub mod fs;
pub mod memory;

pub use fs::FsAudioOpener;
pub use memory::{InMemoryAudioOpener, InMemoryFeedSource};
