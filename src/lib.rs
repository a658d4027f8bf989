//! mongo-seed
//!
//! Initializes a MongoDB database with a validated `person` collection and a
//! batch of mock person documents.
//!
//! # CLI Usage
//!
//! ```bash
//! # Seed 100 persons (the default) using environment configuration
//! MONGO_INITDB_DATABASE=people COLLECTION_NAME=person \
//!   DB_USERNAME=root DB_ROOT_PASSWORD=root DB_HOST=mongodb \
//!   mongo-seed
//!
//! # Seed 10 reproducible persons without the sequential id, replacing old data
//! mongo-seed --database people --collection person \
//!   --mock-persons 10 --seed 42 --include-id false --drop-existing
//!
//! # Preview what would be inserted
//! mongo-seed --database people --collection person --mock-persons 5 --dry-run
//! ```

use anyhow::Context;
use seed_generator::Person;
use seed_mongodb::{
    generate_persons, load_catalog, MongoStore, SeedConfig, SeedMetrics, SeedStore, Seeder,
};

pub mod logging;

pub use seed_generator as generator;
pub use seed_mongodb as seeder;

/// Run a seeding pass as described by `config`.
///
/// Connects to MongoDB unless `config.dry_run` is set, in which case the
/// persons are generated and logged and `None` is returned.
pub async fn run_seed(config: SeedConfig) -> anyhow::Result<Option<SeedMetrics>> {
    if config.dry_run {
        preview(&config)?;
        return Ok(None);
    }

    tracing::info!(
        "Connecting to MongoDB at {}",
        logging::mask_connection_password(&config.connection_string)
    );
    let store = MongoStore::connect(&config.connection_string, &config.database)
        .await
        .context("Failed to connect to MongoDB")?;

    run_seed_with_store(&store, config).await.map(Some)
}

/// Run a seeding pass against an already connected store.
pub async fn run_seed_with_store<S: SeedStore + ?Sized>(
    store: &S,
    config: SeedConfig,
) -> anyhow::Result<SeedMetrics> {
    let collection = config.collection_name.clone();
    let seeder = Seeder::new(store, config).context("Failed to prepare seeder")?;
    seeder
        .run()
        .await
        .with_context(|| format!("Failed to seed collection '{collection}'"))
}

/// Generate the persons `config` describes and log each one, without
/// connecting to any store.
pub fn preview(config: &SeedConfig) -> anyhow::Result<Vec<Person>> {
    let catalog = load_catalog(config).context("Failed to load name catalog")?;
    let persons = generate_persons(config, catalog);

    tracing::info!(
        "Dry run: generated {} persons for '{}.{}', nothing written",
        persons.len(),
        config.database,
        config.collection_name
    );
    for person in &persons {
        tracing::info!("{}", serde_json::to_string(person)?);
    }
    Ok(persons)
}
