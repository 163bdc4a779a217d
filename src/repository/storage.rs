use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::services::error_handling::{BoardError, Result};

/// String key-value storage with the shape of the browser `Storage` API.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store. Clones share the same map, so a test can keep a handle
/// while the repository owns another.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    items: Rc<RefCell<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects writes whose value is larger than `bytes`, like a full
    /// browser store.
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: Rc::default(),
            quota: Some(bytes),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(BoardError::write(
                    key,
                    format!("quota of {} bytes exceeded ({} bytes)", quota, value.len()),
                ));
            }
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file_storage::FileStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_storage {
    use std::fs;
    use std::io::{self, Write as _};
    use std::path::{Path, PathBuf};

    use super::KeyValueStore;
    use crate::services::error_handling::{BoardError, Result};

    /// Desktop store: one JSON file per key under `dir`.
    #[derive(Debug, Clone)]
    pub struct FileStorage {
        dir: PathBuf,
    }

    impl FileStorage {
        pub fn new(dir: impl Into<PathBuf>) -> Self {
            Self { dir: dir.into() }
        }

        pub fn dir(&self) -> &Path {
            &self.dir
        }

        pub fn path_for(&self, key: &str) -> PathBuf {
            let name: String = key
                .chars()
                .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
                .collect();
            self.dir.join(format!("{}.json", name))
        }
    }

    impl KeyValueStore for FileStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            match fs::read_to_string(self.path_for(key)) {
                Ok(content) => Ok(Some(content)),
                Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
                Err(e) => Err(BoardError::read(key, e)),
            }
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            fs::create_dir_all(&self.dir).map_err(|e| BoardError::write(key, e))?;

            // Uniquely named temp file + rename: concurrent writers never share
            // a temp file and readers only ever see a complete blob
            let target = self.path_for(key);
            let write = || -> io::Result<()> {
                let mut tmp = tempfile::Builder::new()
                    .prefix(".")
                    .suffix(".json.tmp")
                    .tempfile_in(&self.dir)?;
                tmp.write_all(value.as_bytes())?;
                tmp.as_file().sync_all()?;
                tmp.persist(&target).map_err(|e| e.error)?;
                Ok(())
            };
            write().map_err(|e| BoardError::write(key, e))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorage;

#[cfg(target_arch = "wasm32")]
mod local_storage {
    use super::KeyValueStore;
    use crate::services::error_handling::{BoardError, Result};

    /// Browser `window.localStorage`, scoped per origin.
    #[derive(Clone)]
    pub struct LocalStorage {
        storage: web_sys::Storage,
    }

    impl LocalStorage {
        pub fn open() -> Result<Self> {
            let window = web_sys::window().ok_or_else(|| BoardError::StorageUnavailable {
                reason: "no window object".to_string(),
            })?;
            let storage = window
                .local_storage()
                .map_err(|e| BoardError::StorageUnavailable {
                    reason: format!("{:?}", e),
                })?
                .ok_or_else(|| BoardError::StorageUnavailable {
                    reason: "localStorage is disabled".to_string(),
                })?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.storage
                .get_item(key)
                .map_err(|e| BoardError::read(key, format!("{:?}", e)))
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            // Throws QuotaExceededError when the origin is full
            self.storage
                .set_item(key, value)
                .map_err(|e| BoardError::write(key, format!("{:?}", e)))
        }
    }
}
