//! Collection creation and bulk insert of persons.

use crate::error::SeedError;
use crate::store::SeedStore;
use bson::{Bson, Document};
use seed_generator::Person;
use tracing::debug;

/// Create `collection` with `validator` attached.
///
/// A pre-existing collection is not special-cased; the store's
/// `CollectionExists` error is returned to the caller.
pub async fn ensure_collection<S: SeedStore + ?Sized>(
    store: &S,
    collection: &str,
    validator: Document,
) -> Result<(), SeedError> {
    debug!("createCollection '{}' with validator {}", collection, validator);
    store.create_collection(collection, validator).await
}

/// Insert `persons` into `collection` with a single `insert_many`.
///
/// An empty slice returns `0` without calling the store.
pub async fn insert_persons<S: SeedStore + ?Sized>(
    store: &S,
    collection: &str,
    persons: &[Person],
) -> Result<u64, SeedError> {
    if persons.is_empty() {
        return Ok(0);
    }

    let documents: Vec<Document> = persons.iter().map(person_to_document).collect();
    store.insert_many(collection, documents).await
}

/// Convert a `Person` to a BSON document.
///
/// `age` is written as Int32 to satisfy the validator's `int` type; `id`,
/// when present, as Int64.
pub fn person_to_document(person: &Person) -> Document {
    let mut doc = Document::new();

    if let Some(id) = person.id {
        doc.insert("id", Bson::Int64(id));
    }
    doc.insert("name", Bson::String(person.name.clone()));
    doc.insert("age", Bson::Int32(person.age));
    doc.insert("email", Bson::String(person.email.clone()));

    doc
}
