//! Error types for the MongoDB seeder.

use seed_generator::GeneratorError;
use thiserror::Error;

/// MongoDB server error code for `NamespaceExists`.
pub const NAMESPACE_EXISTS_CODE: i32 = 48;

/// Errors that can occur while seeding.
#[derive(Error, Debug)]
pub enum SeedError {
    /// MongoDB connection or command error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),

    /// Collection is already present in the target database.
    #[error("Collection '{0}' already exists")]
    CollectionExists(String),

    /// A document was rejected by the collection validator.
    #[error("Document failed validation for collection '{collection}': {reason}")]
    ValidationFailed { collection: String, reason: String },

    /// An empty batch was submitted to the store.
    #[error("Cannot insert an empty batch into collection '{0}'")]
    EmptyBatch(String),

    /// Generator error.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SeedError {
    /// Translate a `createCollection` failure, mapping `NamespaceExists` to
    /// `CollectionExists`.
    pub fn from_create_collection(collection: &str, err: mongodb::error::Error) -> Self {
        let exists = matches!(
            *err.kind,
            mongodb::error::ErrorKind::Command(ref command_error)
                if command_error.code == NAMESPACE_EXISTS_CODE
        );
        if exists {
            SeedError::CollectionExists(collection.to_string())
        } else {
            SeedError::MongoDB(err)
        }
    }
}
