//! Catalog of candidate names for generated persons.

use crate::generator::GeneratorError;
use std::path::Path;

/// Names used when no catalog file is configured.
pub const DEFAULT_NAMES: [&str; 20] = [
    "John Doe",
    "Jane Smith",
    "Alice Johnson",
    "Bob Brown",
    "Charlie Davis",
    "Diana Evans",
    "Eve Foster",
    "Frank Green",
    "Grace Harris",
    "Hank Irving",
    "Ivy Johnson",
    "Jack King",
    "Kara Lee",
    "Leo Miller",
    "Mona Nelson",
    "Nina Owens",
    "Oscar Perry",
    "Paula Quinn",
    "Quincy Roberts",
    "Rita Scott",
];

/// A non-empty, ordered list of full names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCatalog {
    names: Vec<String>,
}

impl NameCatalog {
    /// Create a catalog from the given names.
    ///
    /// Returns `GeneratorError::EmptyCatalog` if `names` is empty.
    pub fn new(names: Vec<String>) -> Result<Self, GeneratorError> {
        if names.is_empty() {
            return Err(GeneratorError::EmptyCatalog);
        }
        Ok(Self { names })
    }

    /// Parse a catalog from text with one name per line.
    ///
    /// Surrounding whitespace is trimmed and blank lines are skipped.
    pub fn from_lines(text: &str) -> Result<Self, GeneratorError> {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(names)
    }

    /// Load a catalog from a file with one name per line.
    pub fn from_file(path: &Path) -> Result<Self, GeneratorError> {
        let text = std::fs::read_to_string(path).map_err(|source| GeneratorError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_lines(&text)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false for a constructed catalog.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub(crate) fn get(&self, index: usize) -> &str {
        &self.names[index]
    }
}

impl Default for NameCatalog {
    fn default() -> Self {
        Self {
            names: DEFAULT_NAMES.iter().map(|n| n.to_string()).collect(),
        }
    }
}
