//! Durable key/value stores for the user's theme preference.
//!
//! - [`PreferenceStore`]: the get/set interface controllers depend on
//! - [`MemoryStore`]: a `HashMap`, for hosts without persistence and for tests
//! - [`FileStore`]: a JSON object file on disk
//! - [`StoreError`]: read/write failures

mod error;
mod file;
mod memory;

pub use error::StoreError;
pub use file::FileStore;
pub use memory::MemoryStore;

/// Default key under which the theme preference is stored.
pub const DEFAULT_STORAGE_KEY: &str = "color-theme";

/// A string key/value store that survives restarts.
pub trait PreferenceStore {
    /// Reads the value for `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &mut S {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}
