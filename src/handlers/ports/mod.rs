//! Ports consumed by the built-in handlers.

pub mod clips;
pub mod feed;

pub use clips::{AudioOpener, ClipError, ClipResult};
pub use feed::{FeedError, FeedResult, FeedSource};

#[cfg(test)]
pub use clips::MockAudioOpener;
#[cfg(test)]
pub use feed::MockFeedSource;
