//! Command-line interface for mongo-seed
//!
//! Every option can also be given through the environment variable shown in
//! `--help`, which is how a container entrypoint usually drives it.
//!
//! ```bash
//! MONGO_INITDB_DATABASE=people COLLECTION_NAME=person MOCK_PERSONS=10 mongo-seed
//! ```

use anyhow::Context;
use clap::Parser;
use mongo_seed::{logging, run_seed};
use seed_mongodb::{SeedArgs, SeedConfig};

#[derive(Parser)]
#[command(name = "mongo-seed")]
#[command(about = "Create a validated MongoDB collection and fill it with mock persons")]
#[command(long_about = None)]
struct Cli {
    #[command(flatten)]
    args: SeedArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    logging::init_tracing();

    let cli = Cli::parse();
    let config = SeedConfig::try_from(cli.args).context("Invalid configuration")?;

    if let Some(metrics) = run_seed(config).await? {
        tracing::info!(
            "Seeded {} documents in {:?} (generation {:?}, insert {:?})",
            metrics.documents_inserted,
            metrics.total_duration,
            metrics.generation_duration,
            metrics.insert_duration
        );
    }

    Ok(())
}
