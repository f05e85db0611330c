//! The session store: single source of truth for "who is signed in".

use std::sync::Arc;

use tokio::sync::RwLock;

use trimdesk_auth::{Credential, Identity, Role, Session, SessionState};

use crate::backend::{FileBackend, PersistedSession, SessionBackend, StoreError};

/// Owns the in-memory `SessionState` and mirrors it to a backend.
///
/// Cloning the store hands out another handle to the same state, so
/// every page and the API client agree on one session. State starts as
/// `Loading` and leaves it exactly once, when `restore` completes.
#[derive(Clone)]
pub struct SessionStore {
    state: Arc<RwLock<SessionState>>,
    backend: Arc<dyn SessionBackend>,
}

impl SessionStore {
    pub fn new(backend: Arc<dyn SessionBackend>) -> Self {
        Self {
            state: Arc::new(RwLock::new(SessionState::Loading)),
            backend,
        }
    }

    /// Store persisted at the default platform location.
    pub fn file_backed() -> Result<Self, StoreError> {
        Ok(Self::new(Arc::new(FileBackend::default_location()?)))
    }

    /// Load any persisted session and resolve the `Loading` state.
    ///
    /// A backend failure resolves to `Anonymous`: an unreadable store
    /// must not keep the whole client stuck on the loading screen.
    pub async fn restore(&self) -> SessionState {
        let restored = match self.backend.load().await {
            Ok(Some(persisted)) => {
                let session: Session = persisted.into();
                tracing::debug!(role = %session.role(), "session restored");
                SessionState::Authenticated(session)
            }
            Ok(None) => SessionState::Anonymous,
            Err(err) => {
                tracing::warn!("session restore failed, starting signed out: {err}");
                SessionState::Anonymous
            }
        };

        let mut state = self.state.write().await;
        *state = restored.clone();
        restored
    }

    /// Persist a new credential+identity pair and make it current.
    ///
    /// The pair is saved before the in-memory state flips, so an
    /// interrupted login leaves the previous session intact rather than
    /// a half-written one.
    pub async fn login(
        &self,
        credential: Credential,
        identity: Identity,
    ) -> Result<(), StoreError> {
        let session = Session::new(credential, identity);
        self.backend
            .save(&PersistedSession::from(session.clone()))
            .await?;

        let mut state = self.state.write().await;
        *state = SessionState::Authenticated(session);
        Ok(())
    }

    /// Clear the session everywhere.
    ///
    /// The in-memory state becomes `Anonymous` even when the backend
    /// fails to clear; a forced logout (expired credential) must never
    /// leave the old identity visible.
    pub async fn logout(&self) -> Result<(), StoreError> {
        let cleared = self.backend.clear().await;

        let mut state = self.state.write().await;
        *state = SessionState::Anonymous;
        drop(state);

        cleared
    }

    /// Snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.state.read().await.clone()
    }

    /// Role of the current session, `None` when nobody is signed in.
    pub async fn current_role(&self) -> Option<Role> {
        self.state.read().await.role()
    }

    /// Credential for outbound requests, if any.
    pub async fn credential(&self) -> Option<Credential> {
        self.state.read().await.credential().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{FileBackend, MemoryBackend};

    fn identity(role: Role) -> Identity {
        Identity::new(trimdesk_core::UserId::new(4), "Sardor", role)
    }

    fn memory_store() -> SessionStore {
        SessionStore::new(Arc::new(MemoryBackend::new()))
    }

    #[tokio::test]
    async fn starts_loading_until_restore_completes() {
        let store = memory_store();
        assert!(store.state().await.is_loading());

        let restored = store.restore().await;
        assert_eq!(restored, SessionState::Anonymous);
        assert!(!store.state().await.is_loading());
    }

    #[tokio::test]
    async fn login_makes_the_pair_current_as_a_unit() {
        let store = memory_store();
        store.restore().await;
        store
            .login(Credential::new("tok"), identity(Role::Admin))
            .await
            .unwrap();

        let state = store.state().await;
        assert_eq!(state.role(), Some(Role::Admin));
        assert!(state.credential().is_some());
        assert_eq!(store.current_role().await, Some(Role::Admin));
    }

    #[tokio::test]
    async fn logout_clears_role_and_credential_together() {
        let store = memory_store();
        store.restore().await;
        store
            .login(Credential::new("tok"), identity(Role::Client))
            .await
            .unwrap();
        store.logout().await.unwrap();

        let state = store.state().await;
        assert_eq!(state, SessionState::Anonymous);
        assert_eq!(store.current_role().await, None);
        assert!(store.credential().await.is_none());
    }

    #[tokio::test]
    async fn session_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::new(Arc::new(FileBackend::at(&path)));
        store.restore().await;
        store
            .login(Credential::new("tok"), identity(Role::Superadmin))
            .await
            .unwrap();

        // New store over the same backing file: a fresh process start.
        let next = SessionStore::new(Arc::new(FileBackend::at(&path)));
        let restored = next.restore().await;
        assert_eq!(restored.role(), Some(Role::Superadmin));
    }

    #[tokio::test]
    async fn login_then_logout_restores_prior_storage_state() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let store = SessionStore::new(Arc::new(FileBackend::at(&path)));
        store.restore().await;
        assert!(!path.exists());

        store
            .login(Credential::new("tok"), identity(Role::Client))
            .await
            .unwrap();
        assert!(path.exists());

        store.logout().await.unwrap();
        assert!(!path.exists());
    }
}
