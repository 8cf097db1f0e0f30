use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

use crate::panel::config::PanelConfiguration;

/// Name of the single slot holding the saved panel list. Kept identical to
/// the browser storage key so exported data stays recognizable.
pub const STORAGE_KEY: &str = "paineisSalvos";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write panel store: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode panel store: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable storage for the saved panel list. The whole list is replaced on
/// every save; there are no per-record writes and no transactional
/// guarantees. Concurrent writers are last-write-wins.
pub trait PanelStore: Send + Sync {
    /// Every stored configuration, in insertion order. Unreadable or
    /// unparseable storage degrades to an empty list, never an error.
    fn load_all(&self) -> Vec<PanelConfiguration>;

    /// Replace the stored list wholesale. Failure is surfaced to the caller
    /// to report; it must not take the process down.
    fn save_all(&self, paineis: &[PanelConfiguration]) -> Result<(), StoreError>;

    fn find_by_id(&self, id: &str) -> Option<PanelConfiguration> {
        self.load_all().into_iter().find(|painel| painel.id == id)
    }
}

/// JSON file store: one `paineisSalvos.json` file under the given directory.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{}.json", STORAGE_KEY)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PanelStore for JsonFileStore {
    fn load_all(&self) -> Vec<PanelConfiguration> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            // Missing file just means nothing was saved yet.
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str(&raw) {
            Ok(paineis) => paineis,
            Err(err) => {
                warn!(
                    "ignoring unreadable panel store {}: {}",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    fn save_all(&self, paineis: &[PanelConfiguration]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(paineis)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}

/// In-memory store used as a substitute gateway in tests.
#[derive(Default)]
pub struct MemoryStore {
    paineis: Mutex<Vec<PanelConfiguration>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PanelStore for MemoryStore {
    fn load_all(&self) -> Vec<PanelConfiguration> {
        self.paineis
            .lock()
            .map(|paineis| paineis.clone())
            .unwrap_or_default()
    }

    fn save_all(&self, paineis: &[PanelConfiguration]) -> Result<(), StoreError> {
        if let Ok(mut slot) = self.paineis.lock() {
            *slot = paineis.to_vec();
        }
        Ok(())
    }
}
