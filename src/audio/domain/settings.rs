//! Streaming parameters.

use std::time::Duration;

/// Tunables for the streaming loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioSettings {
    frame_size: usize,
    send_timeout: Duration,
    ready_delay: Duration,
}

impl AudioSettings {
    /// Bytes read per frame: 960 samples, 2 channels, 16-bit.
    pub const DEFAULT_FRAME_SIZE: usize = 960 * 2 * 2;
    /// Longest wait for the sink to accept one frame.
    pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(1);
    /// Pause between joining and the first frame.
    pub const DEFAULT_READY_DELAY: Duration = Duration::from_millis(250);

    /// Creates the default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            frame_size: Self::DEFAULT_FRAME_SIZE,
            send_timeout: Self::DEFAULT_SEND_TIMEOUT,
            ready_delay: Self::DEFAULT_READY_DELAY,
        }
    }

    /// Overrides the frame size. Zero is clamped to one byte.
    #[must_use]
    pub const fn with_frame_size(mut self, frame_size: usize) -> Self {
        self.frame_size = if frame_size == 0 { 1 } else { frame_size };
        self
    }

    /// Overrides the per-frame send timeout.
    #[must_use]
    pub const fn with_send_timeout(mut self, send_timeout: Duration) -> Self {
        self.send_timeout = send_timeout;
        self
    }

    /// Overrides the post-join ready delay.
    #[must_use]
    pub const fn with_ready_delay(mut self, ready_delay: Duration) -> Self {
        self.ready_delay = ready_delay;
        self
    }

    /// Returns the frame size in bytes.
    #[must_use]
    pub const fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// Returns the per-frame send timeout.
    #[must_use]
    pub const fn send_timeout(&self) -> Duration {
        self.send_timeout
    }

    /// Returns the post-join ready delay.
    #[must_use]
    pub const fn ready_delay(&self) -> Duration {
        self.ready_delay
    }
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self::new()
    }
}
