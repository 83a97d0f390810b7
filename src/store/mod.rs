// src/store/mod.rs

pub mod memory;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

pub use memory::MemoryStore;

/// Untyped field map of a single document.
pub type Fields = serde_json::Map<String, Value>;

/// One document read from the store: the store-assigned key plus its fields.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub fields: Fields,
}

impl Document {
    /// Decodes the field map into a typed record.
    ///
    /// A mismatch between the stored fields and the target schema means the
    /// record is corrupt; it surfaces as a `StoreError`, not a panic.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, StoreError> {
        serde_json::from_value(Value::Object(self.fields.clone())).map_err(|e| {
            StoreError::Corrupt {
                id: self.id.clone(),
                message: e.to_string(),
            }
        })
    }
}

/// Encodes a record into a document field map.
pub fn to_fields<T: Serialize>(record: &T) -> Result<Fields, StoreError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(fields)) => Ok(fields),
        Ok(other) => Err(StoreError::Encode {
            message: format!("expected an object, got {}", other),
        }),
        Err(e) => Err(StoreError::Encode {
            message: e.to_string(),
        }),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("document not found at {path}")]
    NotFound { path: String },

    #[error("corrupt document {id}: {message}")]
    Corrupt { id: String, message: String },

    #[error("failed to encode record: {message}")]
    Encode { message: String },

    #[error("store backend failure: {message}")]
    Backend { message: String },
}

/// Client interface of the hierarchical document store.
///
/// Paths are slash-separated: a document path alternates collection and
/// document segments (`users/u1/scores/s1`), a collection path ends on a
/// collection segment (`users/u1/scores`). The store enforces no schema on
/// document fields.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Reads the document at `path`. An absent document is `NotFound`.
    async fn get(&self, path: &str) -> Result<Document, StoreError>;

    /// Writes `fields` at `path`, overwriting any existing document.
    async fn set(&self, path: &str, fields: Fields) -> Result<(), StoreError>;

    /// Inserts `fields` under `collection` with a store-generated key and
    /// returns that key.
    async fn add(&self, collection: &str, fields: Fields) -> Result<String, StoreError>;

    /// Lists the documents directly under `collection`, in store-native
    /// order. Documents of nested sub-collections are not included. An
    /// empty or unknown collection yields an empty list.
    async fn list(&self, collection: &str) -> Result<Vec<Document>, StoreError>;
}
