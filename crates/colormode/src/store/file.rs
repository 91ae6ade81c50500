//! JSON file preference store.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{PreferenceStore, StoreError};

type Entries = BTreeMap<String, String>;

/// A preference store persisted as a JSON object on disk.
///
/// The file holds string keys and values, e.g. `{"color-theme": "dark"}`.
/// A missing file reads as empty and is created, along with its parent
/// directories, on the first write. Writes go to a sibling temporary file
/// that is renamed over the target.
///
/// # Example
///
/// ```rust,no_run
/// use colormode::{FileStore, PreferenceStore};
///
/// let mut store = FileStore::new("/home/me/.config/colormode/prefs.json");
/// store.set("color-theme", "dark")?;
/// assert_eq!(store.get("color-theme")?.as_deref(), Some("dark"));
/// # Ok::<(), colormode::StoreError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Entries, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };
        if raw.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&raw).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }

    /// Loads entries for a read-modify-write. A malformed file is replaced.
    fn load_for_update(&self) -> Result<Entries, StoreError> {
        match self.load() {
            Err(StoreError::Malformed { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "replacing malformed preference store");
                Ok(Entries::new())
            }
            other => other,
        }
    }

    fn save(&self, entries: &Entries) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }

        let mut body = serde_json::to_string_pretty(entries).map_err(StoreError::Serialize)?;
        body.push('\n');

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, body).map_err(io_err)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            io_err(e)
        })
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.load_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)?;
        tracing::debug!(path = %self.path.display(), key, value, "preference saved");
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load_for_update()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
