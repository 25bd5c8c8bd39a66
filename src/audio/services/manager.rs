//! Per-tenant voice session state machine.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::stream::{StreamTask, close_connection};
use crate::audio::{
    domain::{AudioSettings, SessionId, SessionSnapshot, StreamEnd, VoiceSessionState},
    ports::{AudioAccess, AudioSessionError, AudioSource, VoiceConnection, VoiceGateway},
};
use crate::gateway::domain::{ChannelId, TenantId};

struct SessionEntry {
    id: SessionId,
    channel: ChannelId,
    state: VoiceSessionState,
    cancel: CancellationToken,
    connection: Option<Arc<dyn VoiceConnection>>,
}

/// Session map shared between the manager and its streaming tasks.
///
/// Entries are replaced or mutated field by field with no I/O in between.
/// A poisoned guard is recovered.
#[derive(Clone, Default)]
pub(super) struct SessionTable(Arc<RwLock<HashMap<TenantId, SessionEntry>>>);

impl SessionTable {
    fn read(&self) -> RwLockReadGuard<'_, HashMap<TenantId, SessionEntry>> {
        self.0.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<TenantId, SessionEntry>> {
        self.0.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn reserve(
        &self,
        tenant: &TenantId,
        channel: &ChannelId,
    ) -> Result<(SessionId, CancellationToken), AudioSessionError> {
        let mut sessions = self.write();
        if let Some(existing) = sessions.get(tenant) {
            return Err(match existing.state {
                VoiceSessionState::Stopping => AudioSessionError::TearingDown(tenant.clone()),
                VoiceSessionState::Joining | VoiceSessionState::Playing => {
                    AudioSessionError::AlreadyPlaying(tenant.clone())
                }
            });
        }
        let entry = SessionEntry {
            id: SessionId::new(),
            channel: channel.clone(),
            state: VoiceSessionState::Joining,
            cancel: CancellationToken::new(),
            connection: None,
        };
        let reserved = (entry.id, entry.cancel.clone());
        sessions.insert(tenant.clone(), entry);
        Ok(reserved)
    }

    fn activate(
        &self,
        tenant: &TenantId,
        id: SessionId,
        connection: &Arc<dyn VoiceConnection>,
    ) -> Result<(), AudioSessionError> {
        let mut sessions = self.write();
        let state = sessions
            .get(tenant)
            .filter(|entry| entry.id == id)
            .map(|entry| entry.state);
        match state {
            Some(VoiceSessionState::Joining) => {
                if let Some(entry) = sessions.get_mut(tenant) {
                    entry.state = VoiceSessionState::Playing;
                    entry.connection = Some(Arc::clone(connection));
                }
                Ok(())
            }
            Some(_) => {
                sessions.remove(tenant);
                Err(AudioSessionError::Cancelled(tenant.clone()))
            }
            None => Err(AudioSessionError::Cancelled(tenant.clone())),
        }
    }

    /// Marks the session stopping if `id` still owns the tenant's slot.
    ///
    /// Returns `false` when the slot was already released, for example by
    /// [`AudioSessionManager::disconnect`].
    pub(super) fn mark_stopping(&self, tenant: &TenantId, id: SessionId) -> bool {
        match self.write().get_mut(tenant) {
            Some(entry) if entry.id == id => {
                entry.state = VoiceSessionState::Stopping;
                true
            }
            _ => false,
        }
    }

    /// Removes the session if `id` still owns the tenant's slot.
    pub(super) fn remove_if(&self, tenant: &TenantId, id: SessionId) -> bool {
        let mut sessions = self.write();
        if sessions.get(tenant).is_some_and(|entry| entry.id == id) {
            sessions.remove(tenant);
            true
        } else {
            false
        }
    }
}

/// Handle to a streaming session started by [`AudioSessionManager::start`].
#[derive(Debug)]
pub struct Playback {
    id: SessionId,
    task: JoinHandle<StreamEnd>,
}

impl Playback {
    /// Returns the session identifier.
    #[must_use]
    pub const fn id(&self) -> SessionId {
        self.id
    }

    /// Waits for the stream to end and its teardown to finish.
    pub async fn finished(self) -> StreamEnd {
        self.task.await.unwrap_or(StreamEnd::Faulted)
    }
}

/// Owns every tenant's voice session.
///
/// The session map lock is only held for map lookups and mutations. The
/// voice handshake and all streaming I/O happen outside it.
pub struct AudioSessionManager<G>
where
    G: VoiceGateway,
{
    gateway: Arc<G>,
    settings: AudioSettings,
    sessions: SessionTable,
}

impl<G> AudioSessionManager<G>
where
    G: VoiceGateway + 'static,
{
    /// Creates a manager with no sessions.
    #[must_use]
    pub fn new(gateway: Arc<G>, settings: AudioSettings) -> Self {
        Self {
            gateway,
            settings,
            sessions: SessionTable::default(),
        }
    }

    /// Joins `channel` and starts streaming `source` on its own task.
    ///
    /// The tenant's slot is reserved before the handshake, so a concurrent
    /// request for the same tenant is refused rather than queued. A stop
    /// during the handshake abandons it and frees the slot at once.
    ///
    /// # Errors
    ///
    /// Returns [`AudioSessionError::AlreadyPlaying`] or
    /// [`AudioSessionError::TearingDown`] when the tenant's slot is taken,
    /// [`AudioSessionError::Connect`] when the handshake fails, and
    /// [`AudioSessionError::Cancelled`] when the session was stopped while
    /// joining.
    pub async fn start(
        &self,
        tenant: &TenantId,
        channel: &ChannelId,
        source: AudioSource,
    ) -> Result<Playback, AudioSessionError> {
        let (id, cancel) = self.sessions.reserve(tenant, channel)?;
        debug!(tenant = %tenant, channel = %channel, session = %id, "joining voice channel");

        let joined = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                self.sessions.remove_if(tenant, id);
                debug!(tenant = %tenant, session = %id, "voice join cancelled");
                return Err(AudioSessionError::Cancelled(tenant.clone()));
            }
            joined = self.gateway.join(tenant, channel) => joined,
        };
        let connection = match joined {
            Ok(connection) => connection,
            Err(err) => {
                self.sessions.remove_if(tenant, id);
                warn!(tenant = %tenant, channel = %channel, error = %err, "voice join failed");
                return Err(AudioSessionError::Connect(err));
            }
        };

        if let Err(err) = self.sessions.activate(tenant, id, &connection) {
            close_connection(connection.as_ref(), tenant, id).await;
            return Err(err);
        }
        info!(tenant = %tenant, channel = %channel, session = %id, "voice session playing");

        let stream = StreamTask {
            tenant: tenant.clone(),
            id,
            connection,
            cancel,
            settings: self.settings,
            sessions: self.sessions.clone(),
        };
        Ok(Playback {
            id,
            task: tokio::spawn(stream.run(source)),
        })
    }

    /// Signals the tenant's session to stop and marks it not playing.
    ///
    /// Teardown completes asynchronously within one frame cycle. Returns
    /// `false` when the tenant has no session.
    pub fn stop(&self, tenant: &TenantId) -> bool {
        let mut sessions = self.sessions.write();
        let Some(entry) = sessions.get_mut(tenant) else {
            return false;
        };
        entry.cancel.cancel();
        entry.state = VoiceSessionState::Stopping;
        debug!(tenant = %tenant, session = %entry.id, "voice session stop requested");
        true
    }

    /// Signals every session to stop and returns how many were signalled.
    pub fn stop_all(&self) -> usize {
        let mut sessions = self.sessions.write();
        for entry in sessions.values_mut() {
            entry.cancel.cancel();
            entry.state = VoiceSessionState::Stopping;
        }
        sessions.len()
    }

    /// Removes the tenant's session at once and leaves the voice channel.
    ///
    /// Returns `false` when the tenant has no session.
    pub async fn disconnect(&self, tenant: &TenantId) -> bool {
        let removed = self.sessions.write().remove(tenant);
        let Some(entry) = removed else {
            return false;
        };
        entry.cancel.cancel();
        if let Some(connection) = entry.connection {
            close_connection(connection.as_ref(), tenant, entry.id).await;
        }
        info!(tenant = %tenant, session = %entry.id, "voice session disconnected");
        true
    }

    /// Returns `true` while the tenant's session is streaming.
    #[must_use]
    pub fn is_playing(&self, tenant: &TenantId) -> bool {
        self.sessions
            .read()
            .get(tenant)
            .is_some_and(|entry| entry.state == VoiceSessionState::Playing)
    }

    /// Returns a snapshot of the tenant's session.
    #[must_use]
    pub fn session(&self, tenant: &TenantId) -> Option<SessionSnapshot> {
        self.sessions.read().get(tenant).map(|entry| SessionSnapshot {
            id: entry.id,
            channel: entry.channel.clone(),
            state: entry.state,
        })
    }

    /// Returns the number of live sessions.
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.read().len()
    }
}

#[async_trait]
impl<G> AudioAccess for AudioSessionManager<G>
where
    G: VoiceGateway + 'static,
{
    async fn play(
        &self,
        tenant: &TenantId,
        channel: &ChannelId,
        source: AudioSource,
    ) -> Result<SessionId, AudioSessionError> {
        self.start(tenant, channel, source)
            .await
            .map(|playback| playback.id())
    }

    fn stop(&self, tenant: &TenantId) -> bool {
        Self::stop(self, tenant)
    }

    async fn disconnect(&self, tenant: &TenantId) -> bool {
        Self::disconnect(self, tenant).await
    }

    fn is_playing(&self, tenant: &TenantId) -> bool {
        Self::is_playing(self, tenant)
    }
}
