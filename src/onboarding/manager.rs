//! OnboardingManager — owns the live wizard sessions and their transitions.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{SessionError, SessionResult};

use super::model::WizardSession;

/// In-memory store of open wizard sessions, keyed by session id.
///
/// Sessions are transient: they vanish on close, on idle expiry, and on
/// process exit. Nothing is ever written to disk.
pub struct OnboardingManager {
    sessions: RwLock<HashMap<Uuid, WizardSession>>,
}

impl OnboardingManager {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            sessions: RwLock::new(HashMap::new()),
        })
    }

    /// Open a new session at Identify with empty partner data.
    pub async fn open(&self) -> WizardSession {
        let session = WizardSession::new();
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.id, session.clone());
        tracing::info!(session = %session.id, "wizard session opened");
        session
    }

    /// Snapshot a session by id.
    pub async fn get(&self, id: Uuid) -> SessionResult<WizardSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { id })?;
        session.touch();
        Ok(session.clone())
    }

    /// Store the identity fields on a session.
    pub async fn set_identity(
        &self,
        id: Uuid,
        name: String,
        business_name: String,
    ) -> SessionResult<WizardSession> {
        self.update(id, |s| s.set_identity(name, business_name)).await
    }

    /// Store the typed signature on a session.
    pub async fn set_signature(&self, id: Uuid, signature: String) -> SessionResult<WizardSession> {
        self.update(id, |s| s.set_signature(signature)).await
    }

    /// Advance a session to its next step, enforcing the step guard.
    pub async fn advance(&self, id: Uuid) -> SessionResult<WizardSession> {
        let session = self
            .update(id, |s| s.advance().map(|_| ()))
            .await?;
        tracing::info!(session = %id, step = %session.step, "wizard advanced");
        Ok(session)
    }

    /// Start-new-agreement from the Success screen.
    pub async fn reset(&self, id: Uuid) -> SessionResult<WizardSession> {
        let session = self.update(id, |s| s.reset()).await?;
        tracing::info!(session = %id, "wizard reset to identify");
        Ok(session)
    }

    /// Close a session, silently discarding whatever it held.
    pub async fn close(&self, id: Uuid) -> SessionResult<()> {
        let mut sessions = self.sessions.write().await;
        match sessions.remove(&id) {
            Some(session) => {
                tracing::info!(session = %id, step = %session.step, "wizard session closed");
                Ok(())
            }
            None => Err(SessionError::NotFound { id }),
        }
    }

    /// Number of open sessions.
    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Remove sessions idle longer than `max_idle`. Returns how many were
    /// discarded.
    pub async fn prune_idle(&self, max_idle: Duration) -> usize {
        let cutoff = Utc::now()
            - chrono::Duration::from_std(max_idle).unwrap_or_else(|_| chrono::Duration::hours(1));
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| s.last_activity >= cutoff);
        let pruned = before - sessions.len();
        if pruned > 0 {
            tracing::info!(pruned, "pruned idle wizard sessions");
        }
        pruned
    }

    /// Apply a mutation to a session, touching its activity clock, and
    /// return the updated snapshot.
    async fn update<F>(&self, id: Uuid, f: F) -> SessionResult<WizardSession>
    where
        F: FnOnce(&mut WizardSession) -> SessionResult<()>,
    {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .get_mut(&id)
            .ok_or(SessionError::NotFound { id })?;
        f(session)?;
        session.touch();
        Ok(session.clone())
    }
}

/// Spawn the periodic idle-session sweep.
pub fn spawn_prune_task(
    manager: Arc<OnboardingManager>,
    interval: Duration,
    max_idle: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            manager.prune_idle(max_idle).await;
        }
    })
}
