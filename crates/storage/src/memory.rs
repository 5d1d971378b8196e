use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    Result, StorageError,
    store::CartStorage,
};

#[derive(Debug, Default)]
struct InMemoryState {
    values: HashMap<String, String>,
    fail_writes: bool,
}

/// In-memory storage implementation for testing.
///
/// Stores all values in memory and provides the same interface as the
/// file-backed implementation.
#[derive(Clone, Default)]
pub struct InMemoryStorage {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryStorage {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored keys.
    pub async fn len(&self) -> usize {
        self.state.read().await.values.len()
    }

    /// Returns true if no keys are stored.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.values.is_empty()
    }

    /// Clears all stored values.
    pub async fn clear(&self) {
        self.state.write().await.values.clear();
    }

    /// Configures the store to fail every subsequent write.
    pub async fn set_fail_writes(&self, fail: bool) {
        self.state.write().await.fail_writes = fail;
    }
}

#[async_trait]
impl CartStorage for InMemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let state = self.state.read().await;
        Ok(state.values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.write().await;
        if state.fail_writes {
            return Err(StorageError::Io(std::io::Error::other(
                "writes disabled for testing",
            )));
        }
        state.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
