use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{Result, store::CartStorage};

/// File-backed key-value storage.
///
/// All keys live in a single JSON object file, read on every access and
/// rewritten on every set. Writers take a mutex so concurrent sets cannot
/// interleave their read-modify-write cycles.
#[derive(Clone)]
pub struct FileStorage {
    path: Arc<PathBuf>,
    write_lock: Arc<Mutex<()>>,
}

impl FileStorage {
    /// Creates a store backed by the file at `path`.
    ///
    /// The file is created on the first write; a missing file reads as an
    /// empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Returns the path of the backing file.
    pub fn path(&self) -> &std::path::Path {
        self.path.as_ref()
    }

    async fn read_map(&self) -> Result<HashMap<String, String>> {
        match tokio::fs::read(self.path.as_ref()).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }
        let bytes = serde_json::to_vec_pretty(map)?;
        tokio::fs::write(self.path.as_ref(), bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl CartStorage for FileStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }
}
