//! Persistence backends for the saved selection.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::catalog::Product;
use crate::selection::saver::{deserialize, serialize, SerializedForm};

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to access state file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode state file '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode saved selection: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Storage for a [`SerializedForm`] across screen or process recreation.
pub trait StateBackend {
    /// `Ok(None)` means nothing was ever saved.
    fn load(&self) -> Result<Option<SerializedForm>, StateError>;

    fn save(&self, form: &SerializedForm) -> Result<(), StateError>;
}

/// In-process slot. Used to carry state across a screen teardown.
#[derive(Debug, Default)]
pub struct MemoryStateBackend {
    slot: Mutex<Option<SerializedForm>>,
}

impl MemoryStateBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&self) -> Option<SerializedForm> {
        self.slot.lock().take()
    }
}

impl StateBackend for MemoryStateBackend {
    fn load(&self) -> Result<Option<SerializedForm>, StateError> {
        Ok(self.slot.lock().clone())
    }

    fn save(&self, form: &SerializedForm) -> Result<(), StateError> {
        *self.slot.lock() = Some(form.clone());
        Ok(())
    }
}

/// JSON file holding the saved form, e.g. `["Banana","Yellow fruit",0.16]`.
///
/// Writes go to a sibling temp file which is renamed over the target while
/// holding an exclusive lock on `<file>.lock`.
#[derive(Debug, Clone)]
pub struct FileStateBackend {
    path: PathBuf,
}

impl FileStateBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<state dir>/paneshop/selection.json`, falling back to the data dir
    /// and then the current directory.
    pub fn default_path() -> PathBuf {
        let base = dirs::state_dir()
            .or_else(dirs::data_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("paneshop").join("selection.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(suffix);
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StateError {
        StateError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl StateBackend for FileStateBackend {
    fn load(&self) -> Result<Option<SerializedForm>, StateError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let form = serde_json::from_str(&content).map_err(|e| StateError::Decode {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(Some(form))
    }

    fn save(&self, form: &SerializedForm) -> Result<(), StateError> {
        let encoded = serde_json::to_vec(form)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }

        let lock = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(self.sibling(".lock"))
            .map_err(|e| self.io_error(e))?;
        lock.lock_exclusive().map_err(|e| self.io_error(e))?;

        let tmp_path = self.sibling(".tmp");
        let mut tmp = fs::File::create(&tmp_path).map_err(|e| self.io_error(e))?;
        tmp.write_all(&encoded).map_err(|e| self.io_error(e))?;
        tmp.sync_all().map_err(|e| self.io_error(e))?;
        drop(tmp);
        fs::rename(&tmp_path, &self.path).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), "selection state written");
        // Lock is released when `lock` is dropped.
        drop(lock);
        Ok(())
    }
}

/// Best-effort restore: every failure becomes `None`.
pub fn restore_selection(backend: &dyn StateBackend) -> Option<Product> {
    match backend.load() {
        Ok(Some(form)) => {
            let restored = deserialize(&form);
            info!(
                selected = restored.as_ref().map(|p| p.name.as_str()),
                "restored selection"
            );
            restored
        }
        Ok(None) => None,
        Err(err) => {
            warn!(error = %err, "ignoring unreadable selection state");
            None
        }
    }
}

pub fn persist_selection(
    backend: &dyn StateBackend,
    selected: Option<&Product>,
) -> Result<(), StateError> {
    backend.save(&serialize(selected))
}
