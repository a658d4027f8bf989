//! MongoDB seeder for mock person data.
//!
//! Creates a collection with a `$jsonSchema` validator and fills it with
//! persons from `seed-generator` in a single bulk insert.

pub mod args;
pub mod config;
pub mod error;
pub mod insert;
pub mod memory;
pub mod schema;
pub mod seeder;
pub mod store;

pub use args::{ConnectionArgs, GenerateArgs, SeedArgs};
pub use config::{resolve_record_count, SeedConfig, DEFAULT_RECORD_COUNT};
pub use error::SeedError;
pub use insert::{ensure_collection, insert_persons, person_to_document};
pub use memory::MemoryStore;
pub use schema::{person_validator, validate_document};
pub use seeder::{generate_persons, load_catalog, SeedMetrics, Seeder};
pub use store::{MongoStore, SeedStore};
