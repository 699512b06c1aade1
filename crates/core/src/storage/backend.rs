use std::collections::HashMap;
use std::sync::Mutex;

use crate::errors::CartError;

/// Key-value persistence interface, shaped after browser local storage:
/// string keys, string values, synchronous access.
///
/// The cart is stored whole under a single namespaced key — there is no
/// per-item addressing and no transaction discipline beyond "last
/// writer wins".
pub trait CartStorage: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn load(&self, key: &str) -> Result<Option<String>, CartError>;

    /// Store `value` under `key`, overwriting any previous value.
    fn save(&self, key: &str, value: &str) -> Result<(), CartError>;

    /// Delete the value under `key`. Deleting an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), CartError>;
}

/// In-memory storage backend. State lives only as long as the value;
/// used in tests and as a stand-in where no persistence is wanted.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartError> {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), CartError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CartError> {
        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// File-backed storage (native only, not WASM). Each key becomes one
/// file under the root directory, so carts survive process restarts the
/// way local storage survives page reloads.
#[cfg(not(target_arch = "wasm32"))]
pub struct FileStorage {
    root: std::path::PathBuf,
}

#[cfg(not(target_arch = "wasm32"))]
impl FileStorage {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Map a namespaced key like `@shopcart:cart` to a filesystem-safe
    /// file name (`_shopcart_cart.json`).
    fn path_for(&self, key: &str) -> std::path::PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        self.root.join(format!("{name}.json"))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl CartStorage for FileStorage {
    fn load(&self, key: &str) -> Result<Option<String>, CartError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, key: &str, value: &str) -> Result<(), CartError> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CartError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
