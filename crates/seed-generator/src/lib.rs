//! Mock person generator for mongo-seed.
//!
//! This crate produces the synthetic `Person` records that the seeder writes
//! into MongoDB. Names are drawn with replacement from a `NameCatalog`, ages
//! are uniform in `[0, 100)` and emails are derived from the record position,
//! so they are unique within one run.
//!
//! # Architecture
//!
//! ```text
//! NameCatalog
//!      │
//!      ▼
//! ┌──────────────────┐
//! │ PersonGenerator  │
//! │                  │
//! │  - rng (StdRng)  │
//! │  - index         │
//! │  - include_id    │
//! └────────┬─────────┘
//!          │
//!          ▼
//!   Person { id, name, age, email }
//! ```
//!
//! # Example
//!
//! ```rust
//! use seed_generator::{generate_mock_persons, NameCatalog};
//!
//! let catalog = NameCatalog::default();
//! let persons = generate_mock_persons(10, &catalog, Some(42), true);
//! assert_eq!(persons.len(), 10);
//! assert_eq!(persons[0].email, "person1@example.com");
//! ```
//!
//! Without a seed the generator draws its state from the OS, so every run
//! produces different data.

pub mod catalog;
pub mod generator;
pub mod person;

pub use catalog::{NameCatalog, DEFAULT_NAMES};
pub use generator::{generate_mock_persons, GeneratorError, PersonGenerator, PersonIterator};
pub use person::{Person, AGE_MAX_EXCLUSIVE, AGE_MIN};
