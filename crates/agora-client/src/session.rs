//! Token persistence and the shared session handle.
//!
//! A [`SessionStore`] is where tokens live between runs (browser
//! `localStorage`, a JSON file, memory in tests). [`SessionManager`] wraps a
//! store, keeps the current value in a watch channel and is cloned into every
//! component that needs the token.

use std::sync::{Arc, RwLock};

use agora_types::Session;
use tokio::sync::watch;
use tracing::warn;

use crate::error::StoreError;

/// Backend that persists the session between runs.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Result<Option<Session>, StoreError>;
    fn save(&self, session: &Session) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

/// Process-local store, used by tests and as a fallback when persistent
/// storage is unavailable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: RwLock<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self { session: RwLock::new(Some(session)) }
    }
}

fn poisoned<T>(_: T) -> StoreError {
    StoreError::Unavailable("session lock poisoned".to_string())
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<Session>, StoreError> {
        Ok(self.session.read().map_err(poisoned)?.clone())
    }

    fn save(&self, session: &Session) -> Result<(), StoreError> {
        *self.session.write().map_err(poisoned)? = Some(session.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.session.write().map_err(poisoned)? = None;
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::path::{Path, PathBuf};

    use agora_types::Session;

    use super::SessionStore;
    use crate::error::StoreError;

    /// JSON file store (`session.json` under the platform config dir).
    #[derive(Debug, Clone)]
    pub struct FileStore {
        path: PathBuf,
    }

    impl FileStore {
        pub const FILE_NAME: &'static str = "session.json";

        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `$CONFIG_DIR/agora/session.json`, if the platform has a config dir.
        pub fn default_location() -> Option<Self> {
            dirs::config_dir().map(|dir| Self::new(dir.join("agora").join(Self::FILE_NAME)))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl SessionStore for FileStore {
        fn load(&self) -> Result<Option<Session>, StoreError> {
            match std::fs::read_to_string(&self.path) {
                Ok(raw) if raw.trim().is_empty() => Ok(None),
                Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(e.into()),
            }
        }

        fn save(&self, session: &Session) -> Result<(), StoreError> {
            if let Some(parent) = self.path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(session)?;
            std::fs::write(&self.path, json)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
            }
            Ok(())
        }

        fn clear(&self) -> Result<(), StoreError> {
            match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            }
        }
    }
}

type ClearListener = Box<dyn Fn() + Send + Sync>;

struct Inner {
    store: Box<dyn SessionStore>,
    tx: watch::Sender<Option<Session>>,
    on_clear: RwLock<Vec<ClearListener>>,
}

/// Shared handle over the current session.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionManager")
            .field("authenticated", &self.inner.tx.borrow().is_some())
            .finish()
    }
}

impl SessionManager {
    /// Wrap `store`, loading whatever it already holds. A corrupt store is
    /// treated as empty.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        let initial = store.load().unwrap_or_else(|e| {
            warn!("Discarding stored session: {}", e);
            None
        });
        let (tx, _rx) = watch::channel(initial);
        Self { inner: Arc::new(Inner { store: Box::new(store), tx, on_clear: RwLock::new(Vec::new()) }) }
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Current access token.
    pub fn token(&self) -> Option<String> {
        self.inner.tx.borrow().as_ref().map(|s| s.access_token.clone())
    }

    pub fn current(&self) -> Option<Session> {
        self.inner.tx.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.inner.tx.borrow().is_some()
    }

    pub fn set_session(&self, session: Session) -> Result<(), StoreError> {
        self.inner.store.save(&session)?;
        self.inner.tx.send_replace(Some(session));
        Ok(())
    }

    /// Drop both tokens. The in-memory copy is cleared even if the store fails.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.inner.tx.send_replace(None);
        if let Ok(listeners) = self.inner.on_clear.read() {
            for listener in listeners.iter() {
                listener();
            }
        }
        self.inner.store.clear()
    }

    /// Run `listener` synchronously whenever the session is cleared, including
    /// when the gateway client drops a rejected token on its own.
    pub fn on_clear(&self, listener: impl Fn() + Send + Sync + 'static) {
        match self.inner.on_clear.write() {
            Ok(mut listeners) => listeners.push(Box::new(listener)),
            Err(_) => warn!("Session listener lock poisoned"),
        }
    }

    /// Notified on every login, refresh and logout.
    pub fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.inner.tx.subscribe()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_roundtrip() {
        let manager = SessionManager::in_memory();
        assert!(manager.token().is_none());

        manager.set_session(Session::new("a1", Some("r1".to_string()))).unwrap();
        assert_eq!(manager.token().as_deref(), Some("a1"));

        manager.clear().unwrap();
        assert!(manager.current().is_none());
    }

    #[test]
    fn test_subscribers_see_changes() {
        let manager = SessionManager::in_memory();
        let mut rx = manager.subscribe();
        manager.set_session(Session::new("a1", None)).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().as_ref().map(|s| s.access_token.as_str()), Some("a1"));
    }

    #[test]
    fn test_clear_notifies_listeners() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let manager = SessionManager::new(MemoryStore::with_session(Session::new("a1", None)));
        let cleared = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&cleared);
        manager.on_clear(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        manager.set_session(Session::new("a2", None)).unwrap();
        assert_eq!(cleared.load(Ordering::SeqCst), 0);
        manager.clear().unwrap();
        assert_eq!(cleared.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_file_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("agora").join(FileStore::FILE_NAME);

        let manager = SessionManager::new(FileStore::new(&path));
        manager.set_session(Session::new("a1", Some("r1".to_string()))).unwrap();
        assert!(path.exists());

        let reopened = SessionManager::new(FileStore::new(&path));
        assert_eq!(reopened.current(), Some(Session::new("a1", Some("r1".to_string()))));

        reopened.clear().unwrap();
        assert!(!path.exists());
        assert!(FileStore::new(&path).clear().is_ok());
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(FileStore::FILE_NAME);
        std::fs::write(&path, "{not json").unwrap();

        let manager = SessionManager::new(FileStore::new(&path));
        assert!(manager.current().is_none());
    }
}
