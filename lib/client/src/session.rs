//! Session — the ambient credential cell.
//!
//! One bearer token per process, set after a successful login, cleared
//! on logout or any 401 response. The in-memory cell writes through to
//! a pluggable [`CredentialStore`] so the credential survives restarts
//! when the host supplies durable storage.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The stored bearer credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub access_token: String,
    /// Token kind, typically "bearer".
    pub token_type: String,
}

/// Credential store error.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("format: {0}")]
    Format(String),
}

/// Durable storage for the single credential slot. The medium's own
/// persistence guarantees are out of scope; it is treated as an opaque
/// key-value capability.
pub trait CredentialStore: Send + Sync {
    fn load(&self) -> Result<Option<Credential>, StoreError>;
    fn save(&self, credential: &Credential) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// In-process store — ephemeral sessions and tests.
#[derive(Default)]
pub struct MemoryStore {
    slot: RwLock<Option<Credential>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn load(&self) -> Result<Option<Credential>, StoreError> {
        Ok(self.slot.read().clone())
    }

    fn save(&self, credential: &Credential) -> Result<(), StoreError> {
        *self.slot.write() = Some(credential.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.slot.write() = None;
        Ok(())
    }
}

/// Shared handle over the credential cell. Cheap to clone; all clones
/// observe the same slot.
///
/// Reads never block on I/O, so the navigation guard can consult the
/// session synchronously. Writes go to the store first and only then
/// update the cell, keeping the two in step.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    current: RwLock<Option<Credential>>,
    store: Arc<dyn CredentialStore>,
}

impl Session {
    /// Create a session backed by `store`, picking up any persisted
    /// credential. A failing load starts the session unauthenticated.
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        let initial = match store.load() {
            Ok(credential) => credential,
            Err(e) => {
                warn!("credential store unreadable, starting unauthenticated: {e}");
                None
            }
        };
        Self {
            inner: Arc::new(SessionInner {
                current: RwLock::new(initial),
                store,
            }),
        }
    }

    /// Current bearer token, if any.
    pub fn token(&self) -> Option<String> {
        self.inner
            .current
            .read()
            .as_ref()
            .map(|c| c.access_token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.current.read().is_some()
    }

    /// Store a fresh credential (after a successful login).
    pub fn set(&self, credential: Credential) -> Result<(), StoreError> {
        self.inner.store.save(&credential)?;
        *self.inner.current.write() = Some(credential);
        Ok(())
    }

    /// Drop the credential (logout or 401).
    pub fn clear(&self) -> Result<(), StoreError> {
        self.inner.store.clear()?;
        *self.inner.current.write() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credential(token: &str) -> Credential {
        Credential {
            access_token: token.into(),
            token_type: "bearer".into(),
        }
    }

    #[test]
    fn starts_empty_with_fresh_store() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn set_then_clear() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        session.set(credential("tok-1")).unwrap();
        assert!(session.is_authenticated());
        assert_eq!(session.token().as_deref(), Some("tok-1"));

        session.clear().unwrap();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn picks_up_persisted_credential() {
        let store = Arc::new(MemoryStore::new());
        store.save(&credential("persisted")).unwrap();

        let session = Session::new(store);
        assert_eq!(session.token().as_deref(), Some("persisted"));
    }

    #[test]
    fn writes_through_to_store() {
        let store = Arc::new(MemoryStore::new());
        let session = Session::new(store.clone());

        session.set(credential("tok-2")).unwrap();
        assert_eq!(store.load().unwrap(), Some(credential("tok-2")));

        session.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn clones_share_the_slot() {
        let session = Session::new(Arc::new(MemoryStore::new()));
        let other = session.clone();

        session.set(credential("shared")).unwrap();
        assert_eq!(other.token().as_deref(), Some("shared"));

        other.clear().unwrap();
        assert!(!session.is_authenticated());
    }
}
