use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::state::TrackerState;

/// Persistence seam for the tracker document. Implementations replace the whole
/// document on every save.
pub trait StateStore: Send + Sync {
    fn load(&self) -> Result<TrackerState, StoreError>;
    fn save(&self, state: &TrackerState) -> Result<(), StoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("state document {} is not valid: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Single JSON document on disk. A missing file reads as a fresh state.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Result<TrackerState, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(TrackerState::default())
            }
            Err(err) => return Err(self.io_error(err)),
        };

        serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    fn save(&self, state: &TrackerState) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        let body = serde_json::to_vec_pretty(state).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;

        // write-then-rename keeps the previous document intact on failure
        let staging = self.path.with_extension("json.tmp");
        fs::write(&staging, body).map_err(|err| self.io_error(err))?;
        fs::rename(&staging, &self.path).map_err(|err| self.io_error(err))
    }
}

/// Process-local store for tests and the demo.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: Mutex<Option<TrackerState>>,
}

impl InMemoryStateStore {
    pub fn with_state(state: TrackerState) -> Self {
        Self {
            state: Mutex::new(Some(state)),
        }
    }
}

impl StateStore for InMemoryStateStore {
    fn load(&self) -> Result<TrackerState, StoreError> {
        let guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Unavailable("state mutex poisoned".to_string()))?;
        Ok(guard.clone().unwrap_or_default())
    }

    fn save(&self, state: &TrackerState) -> Result<(), StoreError> {
        let mut guard = self
            .state
            .lock()
            .map_err(|_| StoreError::Unavailable("state mutex poisoned".to_string()))?;
        *guard = Some(state.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::tracking::state::SubscriptionTier;

    #[test]
    fn missing_file_loads_fresh_state() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        let state = store.load().expect("loads");
        assert_eq!(state.chat_messages.len(), 1);
        assert!(state.cycle_entries.is_empty());
    }

    #[test]
    fn saves_survive_a_reload() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("sakhi.json");
        let store = JsonFileStore::new(&path);

        let mut state = store.load().expect("loads");
        state.set_subscription_tier(SubscriptionTier::Premium);
        store.save(&state).expect("saves");

        let reloaded = JsonFileStore::new(&path).load().expect("reloads");
        assert_eq!(reloaded, state);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_documents_are_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").expect("write");

        let err = JsonFileStore::new(&path).load().expect_err("corrupt");
        assert!(matches!(err, StoreError::Corrupt { .. }));
    }

    #[test]
    fn memory_store_round_trips() {
        let store = InMemoryStateStore::default();
        let mut state = store.load().expect("loads");
        state.set_subscription_tier(SubscriptionTier::Pro);
        store.save(&state).expect("saves");
        assert_eq!(store.load().expect("loads").subscription_tier, SubscriptionTier::Pro);
    }
}
