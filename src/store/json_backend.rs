use std::fs;
use std::path::PathBuf;

use super::{Result, StoreBackend};
use crate::utils::{app_data_dir, ensure_dir, write_atomic};

const STORE_DIR: &str = "store";

/// File-per-key backend rooted in a directory; payloads land in `<key>.json`
/// via atomic tmp-file writes.
pub struct JsonBackend {
    root: PathBuf,
}

impl JsonBackend {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    /// Backend rooted in the app data directory.
    pub fn new_default() -> Result<Self> {
        Self::new(app_data_dir().join(STORE_DIR))
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StoreBackend for JsonBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if path.exists() {
            Ok(Some(fs::read_to_string(path)?))
        } else {
            Ok(None)
        }
    }

    fn write(&self, key: &str, payload: &str) -> Result<()> {
        write_atomic(&self.key_path(key), payload)
    }
}
