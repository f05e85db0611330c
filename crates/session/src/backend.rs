//! Session persistence backends.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::Mutex;

use trimdesk_auth::{Credential, Identity, Session};

/// On-disk session document.
///
/// The field names are the stable storage keys: `token` for the
/// credential, `user` for the identity. Both live in one document and
/// are written and removed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
    pub token: Credential,
    pub user: Identity,
}

impl From<Session> for PersistedSession {
    fn from(session: Session) -> Self {
        Self {
            token: session.credential,
            user: session.identity,
        }
    }
}

impl From<PersistedSession> for Session {
    fn from(persisted: PersistedSession) -> Self {
        Session::new(persisted.token, persisted.user)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage codec: {0}")]
    Codec(#[from] serde_json::Error),

    #[error("no usable data directory for session storage")]
    NoDataDir,
}

/// Where the credential+identity pair is kept between runs.
///
/// Implementations must persist and clear the pair as a unit.
#[async_trait]
pub trait SessionBackend: Send + Sync {
    async fn load(&self) -> Result<Option<PersistedSession>, StoreError>;
    async fn save(&self, session: &PersistedSession) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;
}

/// File-backed persistence under the platform data directory.
///
/// Writes go to a sibling temp file first and are moved into place with
/// a rename, so a concurrent reader sees either the old document or the
/// new one, never a partial write.
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Backend at the default platform location.
    pub fn default_location() -> Result<Self, StoreError> {
        let base = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self {
            path: base.join("trimdesk").join("session.json"),
        })
    }

    /// Backend at an explicit path (tests, portable installs).
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SessionBackend for FileBackend {
    async fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        match serde_json::from_slice(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                // A corrupt document cannot be recovered; treat it as
                // signed out rather than wedging startup.
                tracing::warn!("discarding unreadable session document: {err}");
                let _ = tokio::fs::remove_file(&self.path).await;
                Ok(None)
            }
        }
    }

    async fn save(&self, session: &PersistedSession) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let raw = serde_json::to_vec_pretty(session)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, &raw).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    inner: Mutex<Option<PersistedSession>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionBackend for MemoryBackend {
    async fn load(&self) -> Result<Option<PersistedSession>, StoreError> {
        Ok(self.inner.lock().await.clone())
    }

    async fn save(&self, session: &PersistedSession) -> Result<(), StoreError> {
        *self.inner.lock().await = Some(session.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        *self.inner.lock().await = None;
        Ok(())
    }
}
