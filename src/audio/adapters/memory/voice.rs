//! Voice transport double with a configurable sink.

use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::mpsc;

use crate::audio::ports::{VoiceConnection, VoiceGateway, VoiceGatewayError, VoiceGatewayResult};
use crate::gateway::domain::{ChannelId, TenantId};

const SINK_CAPACITY: usize = 1;

/// How a connection's frame sink behaves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SinkMode {
    /// Frames are consumed as fast as they arrive.
    #[default]
    Draining,
    /// Frames are never consumed; the sink fills after one frame.
    Stalled,
    /// The receiving side is dropped immediately.
    Closed,
}

/// Counters shared by every connection a gateway opened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceStats {
    /// Successful joins.
    pub joins: usize,
    /// Disconnect calls, including repeated ones.
    pub disconnects: usize,
    /// Frames consumed by draining sinks.
    pub frames: usize,
    /// Bytes consumed by draining sinks.
    pub bytes: usize,
    /// Speaking-indicator updates, in order.
    pub speaking: Vec<bool>,
}

#[derive(Debug, Default)]
struct VoiceConfig {
    sink_mode: SinkMode,
    join_delay: Duration,
    fail_joins: bool,
}

/// In-memory voice gateway.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoiceGateway {
    config: Arc<Mutex<VoiceConfig>>,
    stats: Arc<Mutex<VoiceStats>>,
}

fn guard<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl InMemoryVoiceGateway {
    /// Creates a gateway whose sinks drain immediately.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Changes the sink behaviour of connections opened from now on.
    pub fn set_sink_mode(&self, mode: SinkMode) {
        guard(&self.config).sink_mode = mode;
    }

    /// Delays every handshake.
    pub fn set_join_delay(&self, delay: Duration) {
        guard(&self.config).join_delay = delay;
    }

    /// Makes every handshake fail.
    pub fn fail_joins(&self) {
        guard(&self.config).fail_joins = true;
    }

    /// Returns a copy of the counters.
    #[must_use]
    pub fn stats(&self) -> VoiceStats {
        guard(&self.stats).clone()
    }
}

#[async_trait]
impl VoiceGateway for InMemoryVoiceGateway {
    async fn join(
        &self,
        _tenant: &TenantId,
        channel: &ChannelId,
    ) -> VoiceGatewayResult<Arc<dyn VoiceConnection>> {
        let (mode, delay, fails) = {
            let config = guard(&self.config);
            (config.sink_mode, config.join_delay, config.fail_joins)
        };
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        if fails {
            return Err(VoiceGatewayError::Rejected(format!(
                "cannot join channel {channel}"
            )));
        }

        let (sender, mut receiver) = mpsc::channel::<Vec<u8>>(SINK_CAPACITY);
        let parked = match mode {
            SinkMode::Draining => {
                let stats = Arc::clone(&self.stats);
                tokio::spawn(async move {
                    while let Some(frame) = receiver.recv().await {
                        let mut counters = guard(&stats);
                        counters.frames += 1;
                        counters.bytes += frame.len();
                    }
                });
                None
            }
            SinkMode::Stalled => Some(receiver),
            SinkMode::Closed => {
                drop(receiver);
                None
            }
        };

        guard(&self.stats).joins += 1;
        Ok(Arc::new(InMemoryVoiceConnection {
            sender,
            _parked: Mutex::new(parked),
            stats: Arc::clone(&self.stats),
        }))
    }
}

struct InMemoryVoiceConnection {
    sender: mpsc::Sender<Vec<u8>>,
    _parked: Mutex<Option<mpsc::Receiver<Vec<u8>>>>,
    stats: Arc<Mutex<VoiceStats>>,
}

#[async_trait]
impl VoiceConnection for InMemoryVoiceConnection {
    fn frame_sink(&self) -> mpsc::Sender<Vec<u8>> {
        self.sender.clone()
    }

    async fn set_speaking(&self, speaking: bool) -> VoiceGatewayResult<()> {
        guard(&self.stats).speaking.push(speaking);
        Ok(())
    }

    async fn disconnect(&self) -> VoiceGatewayResult<()> {
        guard(&self.stats).disconnects += 1;
        Ok(())
    }
}
