//! In-process `SeedStore` for tests and offline runs.

use crate::error::SeedError;
use crate::schema::validate_document;
use crate::store::SeedStore;
use bson::Document;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug, Default)]
struct MemoryCollection {
    validator: Option<Document>,
    documents: Vec<Document>,
}

/// `SeedStore` holding collections in memory.
///
/// Behaves like MongoDB where the seeder can observe it: creating an existing
/// collection fails, an empty `insert_many` is rejected and inserting into an
/// unknown collection creates it without a validator.
///
/// Validation is stricter than MongoDB: a batch is stored only if every
/// document passes the validator. An ordered MongoDB `insertMany` keeps the
/// documents before the first rejected one; this store treats the bulk insert
/// as all-or-nothing instead.
#[derive(Debug)]
pub struct MemoryStore {
    database_name: String,
    collections: Mutex<HashMap<String, MemoryCollection>>,
    insert_calls: AtomicU64,
}

impl MemoryStore {
    pub fn new(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            collections: Mutex::new(HashMap::new()),
            insert_calls: AtomicU64::new(0),
        }
    }

    /// Number of `insert_many` calls that reached the store, including rejected ones.
    pub fn insert_calls(&self) -> u64 {
        self.insert_calls.load(Ordering::SeqCst)
    }

    pub fn has_collection(&self, collection: &str) -> bool {
        self.lock().contains_key(collection)
    }

    /// Snapshot of the documents stored in `collection`.
    pub fn documents(&self, collection: &str) -> Vec<Document> {
        self.lock()
            .get(collection)
            .map(|c| c.documents.clone())
            .unwrap_or_default()
    }

    /// The validator attached to `collection`, if any.
    pub fn validator(&self, collection: &str) -> Option<Document> {
        self.lock()
            .get(collection)
            .and_then(|c| c.validator.clone())
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, MemoryCollection>> {
        self.collections.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait::async_trait]
impl SeedStore for MemoryStore {
    fn database_name(&self) -> &str {
        &self.database_name
    }

    async fn ping(&self) -> Result<(), SeedError> {
        Ok(())
    }

    async fn create_collection(
        &self,
        collection: &str,
        validator: Document,
    ) -> Result<(), SeedError> {
        let mut collections = self.lock();
        if collections.contains_key(collection) {
            return Err(SeedError::CollectionExists(collection.to_string()));
        }
        collections.insert(
            collection.to_string(),
            MemoryCollection {
                validator: Some(validator),
                documents: Vec::new(),
            },
        );
        Ok(())
    }

    async fn insert_many(
        &self,
        collection: &str,
        documents: Vec<Document>,
    ) -> Result<u64, SeedError> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);

        if documents.is_empty() {
            return Err(SeedError::EmptyBatch(collection.to_string()));
        }

        let mut collections = self.lock();
        let target = collections.entry(collection.to_string()).or_default();

        if let Some(validator) = &target.validator {
            for document in &documents {
                validate_document(validator, document).map_err(|reason| {
                    SeedError::ValidationFailed {
                        collection: collection.to_string(),
                        reason,
                    }
                })?;
            }
        }

        let inserted = documents.len() as u64;
        target.documents.extend(documents);
        Ok(inserted)
    }

    async fn drop_collection(&self, collection: &str) -> Result<(), SeedError> {
        self.lock().remove(collection);
        Ok(())
    }

    async fn count_documents(&self, collection: &str) -> Result<u64, SeedError> {
        Ok(self
            .lock()
            .get(collection)
            .map_or(0, |c| c.documents.len() as u64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::person_validator;
    use bson::doc;

    #[test]
    fn test_create_twice_fails() {
        let store = MemoryStore::new("testdb");
        tokio_test::block_on(async {
            store
                .create_collection("person", person_validator())
                .await
                .unwrap();
            let err = store
                .create_collection("person", person_validator())
                .await
                .unwrap_err();
            assert!(matches!(err, SeedError::CollectionExists(ref name) if name == "person"));
        });
    }

    #[test]
    fn test_empty_batch_rejected() {
        let store = MemoryStore::new("testdb");
        let err = tokio_test::block_on(store.insert_many("person", Vec::new())).unwrap_err();

        assert!(matches!(err, SeedError::EmptyBatch(_)));
        assert_eq!(store.insert_calls(), 1);
    }

    #[tokio::test]
    async fn test_batch_is_all_or_nothing() {
        let store = MemoryStore::new("testdb");
        store
            .create_collection("person", person_validator())
            .await
            .unwrap();

        let batch = vec![
            doc! { "name": "Eve Foster", "age": 20_i32, "email": "person1@example.com" },
            doc! { "name": "Leo Miller", "age": 21_i32, "email": "broken" },
        ];
        let err = store.insert_many("person", batch).await.unwrap_err();

        assert!(matches!(err, SeedError::ValidationFailed { .. }));
        assert_eq!(store.count_documents("person").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_implicit_create_and_drop() {
        let store = MemoryStore::new("testdb");
        let inserted = store
            .insert_many("scratch", vec![doc! { "anything": true }])
            .await
            .unwrap();

        assert_eq!(inserted, 1);
        assert!(store.has_collection("scratch"));
        assert!(store.validator("scratch").is_none());

        store.drop_collection("scratch").await.unwrap();
        store.drop_collection("scratch").await.unwrap();
        assert!(!store.has_collection("scratch"));
        assert_eq!(store.count_documents("scratch").await.unwrap(), 0);
    }
}
