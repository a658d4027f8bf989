//! Seeding run: create the collection, generate persons, insert them.

use crate::config::SeedConfig;
use crate::error::SeedError;
use crate::insert::{ensure_collection, insert_persons};
use crate::schema::person_validator;
use crate::store::SeedStore;
use seed_generator::{NameCatalog, Person, PersonGenerator};
use std::time::{Duration, Instant};
use tracing::info;

/// Metrics from a seeding run.
#[derive(Debug, Clone, Default)]
pub struct SeedMetrics {
    /// Number of persons generated.
    pub persons_generated: u64,
    /// Number of documents the store acknowledged.
    pub documents_inserted: u64,
    /// Documents in the collection after the insert.
    pub document_count: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Time spent generating persons.
    pub generation_duration: Duration,
    /// Time spent in the bulk insert.
    pub insert_duration: Duration,
}

impl SeedMetrics {
    /// Calculate documents inserted per second.
    pub fn documents_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.documents_inserted as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Load the name catalog named by `config`, or the built-in one.
pub fn load_catalog(config: &SeedConfig) -> Result<NameCatalog, SeedError> {
    match &config.names_file {
        Some(path) => Ok(NameCatalog::from_file(path)?),
        None => Ok(NameCatalog::default()),
    }
}

/// Generate the persons described by `config` without touching any store.
pub fn generate_persons(config: &SeedConfig, catalog: NameCatalog) -> Vec<Person> {
    let mut generator = PersonGenerator::new(catalog, config.seed)
        .with_sequential_id(config.include_sequential_id);
    generator.persons(config.record_count).collect()
}

/// Seeds one collection of a `SeedStore` with mock persons.
pub struct Seeder<'a, S: SeedStore + ?Sized> {
    store: &'a S,
    config: SeedConfig,
    catalog: NameCatalog,
}

impl<'a, S: SeedStore + ?Sized> Seeder<'a, S> {
    /// Create a seeder writing to `store`, loading the catalog from `config`.
    pub fn new(store: &'a S, config: SeedConfig) -> Result<Self, SeedError> {
        let catalog = load_catalog(&config)?;
        Ok(Self {
            store,
            config,
            catalog,
        })
    }

    /// Replace the name catalog.
    pub fn with_catalog(mut self, catalog: NameCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    /// Run every phase once, in order.
    ///
    /// Any failure aborts the run; nothing is retried.
    pub async fn run(&self) -> Result<SeedMetrics, SeedError> {
        let start_time = Instant::now();
        let mut metrics = SeedMetrics::default();
        let collection = self.config.collection_name.as_str();

        info!("Start of seeding run");
        info!(
            "Creating '{}' collection in database '{}' with {} mock persons.",
            collection,
            self.store.database_name(),
            self.config.record_count
        );

        if self.config.drop_existing {
            info!("Dropping existing collection '{}'", collection);
            self.store.drop_collection(collection).await?;
        }

        ensure_collection(self.store, collection, person_validator()).await?;
        info!("Created collection '{}' with person validator", collection);

        let gen_start = Instant::now();
        let persons = generate_persons(&self.config, self.catalog.clone());
        metrics.generation_duration = gen_start.elapsed();
        metrics.persons_generated = persons.len() as u64;
        info!(
            "Generated {} mock persons from {} candidate names",
            metrics.persons_generated,
            self.catalog.len()
        );

        let insert_start = Instant::now();
        metrics.documents_inserted = insert_persons(self.store, collection, &persons).await?;
        metrics.insert_duration = insert_start.elapsed();
        info!(
            "Inserted {} persons into the '{}' collection.",
            metrics.documents_inserted, collection
        );

        metrics.document_count = self.store.count_documents(collection).await?;
        metrics.total_duration = start_time.elapsed();

        info!(
            "End of seeding run: '{}' holds {} documents ({:?}, {:.2} docs/sec)",
            collection,
            metrics.document_count,
            metrics.total_duration,
            metrics.documents_per_second()
        );

        Ok(metrics)
    }
}
