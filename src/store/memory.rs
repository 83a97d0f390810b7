// src/store/memory.rs

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Document, DocumentStore, Fields, StoreError};

/// In-memory document store.
///
/// Documents are keyed by their full slash-separated path. Listing order is
/// the path order of the underlying map; generated keys are monotonic so a
/// collection lists in insertion order, but callers must not rely on more
/// than store-native order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    docs: RwLock<BTreeMap<String, Fields>>,
    next_key: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn generate_key(&self) -> String {
        let n = self.next_key.fetch_add(1, Ordering::Relaxed);
        format!("doc{:08}", n)
    }

    /// Removes the document at `path` if present.
    ///
    /// Out-of-band authoring surface (the question bank is maintained
    /// outside the API); not part of the client interface the repository
    /// consumes.
    pub async fn remove(&self, path: &str) {
        let mut docs = self.docs.write().await;
        docs.remove(path);
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, path: &str) -> Result<Document, StoreError> {
        let docs = self.docs.read().await;
        let fields = docs.get(path).ok_or_else(|| StoreError::NotFound {
            path: path.to_string(),
        })?;
        let id = path.rsplit('/').next().unwrap_or(path).to_string();
        Ok(Document {
            id,
            fields: fields.clone(),
        })
    }

    async fn set(&self, path: &str, fields: Fields) -> Result<(), StoreError> {
        let mut docs = self.docs.write().await;
        docs.insert(path.to_string(), fields);
        Ok(())
    }

    async fn add(&self, collection: &str, fields: Fields) -> Result<String, StoreError> {
        let key = self.generate_key();
        let mut docs = self.docs.write().await;
        docs.insert(format!("{}/{}", collection, key), fields);
        Ok(key)
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let prefix = format!("{}/", collection);
        let docs = self.docs.read().await;
        let listed = docs
            .range(prefix.clone()..)
            .take_while(|(path, _)| path.starts_with(&prefix))
            .filter(|(path, _)| !path[prefix.len()..].contains('/'))
            .map(|(path, fields)| Document {
                id: path[prefix.len()..].to_string(),
                fields: fields.clone(),
            })
            .collect();
        Ok(listed)
    }
}
