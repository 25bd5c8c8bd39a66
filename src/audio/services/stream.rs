//! The streaming loop and its teardown.

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::io::AsyncReadExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::manager::SessionTable;
use crate::audio::{
    domain::{AudioSettings, SessionId, StreamEnd},
    ports::{AudioSource, VoiceConnection},
};
use crate::gateway::domain::TenantId;

/// Leaves a voice channel, logging rather than propagating failures.
pub(super) async fn close_connection(
    connection: &dyn VoiceConnection,
    tenant: &TenantId,
    id: SessionId,
) {
    if let Err(err) = connection.disconnect().await {
        warn!(tenant = %tenant, session = %id, error = %err, "voice disconnect failed");
    }
}

/// One session's streaming unit of work.
pub(super) struct StreamTask {
    pub(super) tenant: TenantId,
    pub(super) id: SessionId,
    pub(super) connection: Arc<dyn VoiceConnection>,
    pub(super) cancel: CancellationToken,
    pub(super) settings: AudioSettings,
    pub(super) sessions: SessionTable,
}

impl StreamTask {
    /// Streams until a terminal condition, then tears the session down.
    pub(super) async fn run(self, source: AudioSource) -> StreamEnd {
        let end = AssertUnwindSafe(self.stream(source))
            .catch_unwind()
            .await
            .unwrap_or(StreamEnd::Faulted);
        self.teardown(end).await;
        end
    }

    async fn stream(&self, mut source: AudioSource) -> StreamEnd {
        tokio::select! {
            () = self.cancel.cancelled() => return StreamEnd::Stopped,
            () = tokio::time::sleep(self.settings.ready_delay()) => {}
        }

        self.speaking(true).await;
        let end = self.pump(&mut source).await;
        self.speaking(false).await;
        end
    }

    async fn pump(&self, source: &mut AudioSource) -> StreamEnd {
        let sink = self.connection.frame_sink();
        let mut frame = vec![0_u8; self.settings.frame_size()];
        loop {
            if self.cancel.is_cancelled() {
                return StreamEnd::Stopped;
            }

            let read = tokio::select! {
                biased;
                () = self.cancel.cancelled() => return StreamEnd::Stopped,
                read = source.read(&mut frame) => read,
            };
            let len = match read {
                Ok(0) => return StreamEnd::EndOfSource,
                Ok(len) => len,
                Err(err) => {
                    debug!(tenant = %self.tenant, session = %self.id, error = %err, "audio source read failed");
                    return StreamEnd::EndOfSource;
                }
            };
            let payload = frame.get(..len).map(<[u8]>::to_vec).unwrap_or_default();

            tokio::select! {
                biased;
                () = self.cancel.cancelled() => return StreamEnd::Stopped,
                sent = tokio::time::timeout(self.settings.send_timeout(), sink.send(payload)) => {
                    match sent {
                        Ok(Ok(())) => {}
                        Ok(Err(_)) => return StreamEnd::SinkClosed,
                        Err(_) => return StreamEnd::SendTimeout,
                    }
                }
            }
        }
    }

    async fn speaking(&self, speaking: bool) {
        if let Err(err) = self.connection.set_speaking(speaking).await {
            warn!(tenant = %self.tenant, session = %self.id, speaking, error = %err, "speaking update failed");
        }
    }

    async fn teardown(&self, end: StreamEnd) {
        if self.sessions.mark_stopping(&self.tenant, self.id) {
            close_connection(self.connection.as_ref(), &self.tenant, self.id).await;
            self.sessions.remove_if(&self.tenant, self.id);
        }
        info!(tenant = %self.tenant, session = %self.id, end = %end, "voice session ended");
    }
}
