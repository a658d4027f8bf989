//! Person generator producing mock records.

use crate::catalog::NameCatalog;
use crate::person::{Person, AGE_MAX_EXCLUSIVE, AGE_MIN};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Name catalog has no entries
    #[error("Name catalog is empty")]
    EmptyCatalog,

    /// Name catalog file could not be read
    #[error("Failed to read name catalog {path:?}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Generator that produces mock person records.
///
/// Without a seed the RNG is initialized from the operating system, so each
/// run yields different data. With a seed the output is reproducible.
pub struct PersonGenerator {
    /// Candidate names, sampled with replacement
    catalog: NameCatalog,
    /// Random number generator for names and ages
    rng: StdRng,
    /// Number of persons generated so far
    index: u64,
    /// Whether to attach the sequential `id` field
    include_id: bool,
}

impl PersonGenerator {
    /// Create a generator over the given catalog.
    ///
    /// Sequential ids are enabled by default.
    pub fn new(catalog: NameCatalog, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            catalog,
            rng,
            index: 0,
            include_id: true,
        }
    }

    /// Enable or disable the sequential `id` field.
    pub fn with_sequential_id(mut self, include_id: bool) -> Self {
        self.include_id = include_id;
        self
    }

    /// Number of persons generated so far.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    pub fn catalog(&self) -> &NameCatalog {
        &self.catalog
    }

    /// Generate the next person.
    pub fn next_person(&mut self) -> Person {
        self.index += 1;
        let position = self.index;

        let name_idx = self.rng.random_range(0..self.catalog.len());
        let age = self.rng.random_range(AGE_MIN..AGE_MAX_EXCLUSIVE);

        Person {
            id: self.include_id.then_some(position as i64),
            name: self.catalog.get(name_idx).to_string(),
            age,
            email: Person::email_for_position(position),
        }
    }

    /// Generate `count` persons lazily.
    pub fn persons(&mut self, count: u64) -> PersonIterator<'_> {
        PersonIterator {
            generator: self,
            remaining: count,
        }
    }
}

/// Iterator that lazily generates persons.
pub struct PersonIterator<'a> {
    generator: &'a mut PersonGenerator,
    remaining: u64,
}

impl Iterator for PersonIterator<'_> {
    type Item = Person;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.generator.next_person())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PersonIterator<'_> {}

/// Generate exactly `count` mock persons from `catalog`.
///
/// `count = 0` yields an empty vector.
pub fn generate_mock_persons(
    count: u64,
    catalog: &NameCatalog,
    seed: Option<u64>,
    include_sequential_id: bool,
) -> Vec<Person> {
    let mut generator =
        PersonGenerator::new(catalog.clone(), seed).with_sequential_id(include_sequential_id);
    generator.persons(count).collect()
}
