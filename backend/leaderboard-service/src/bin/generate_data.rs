/// Generate a synthetic leaderboard data file
///
/// Writes `UID,Score,Timestamp` rows for uids 1..=count with uniform random
/// scores in [0, 10000] and timestamps within 30 days of 2023-09-15.
///
/// Usage:
///   GENERATE_COUNT=1000000 LEADERBOARD_DATA_PATH=data.csv cargo run --bin generate-leaderboard-data
///
/// Environment variables:
///   - LEADERBOARD_DATA_PATH: output file (default: data.csv)
///   - GENERATE_COUNT: number of rows (default: 1000000)
///   - GENERATE_SEED: fixed RNG seed for reproducible output (default: random)
use anyhow::{Context, Result};
use leaderboard_service::services::generator::{generate_records, row_count, write_csv};
use leaderboard_service::utils::init_tracing;
use leaderboard_service::Config;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;
use tracing::info;

#[derive(Debug, Deserialize)]
struct GenerateConfig {
    #[serde(default = "default_count")]
    count: u64,
    #[serde(default)]
    seed: Option<u64>,
}

fn default_count() -> u64 {
    1_000_000
}

fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load config")?;
    let generate: GenerateConfig = envy::prefixed("GENERATE_")
        .from_env()
        .context("Failed to load GENERATE_* config")?;

    let count = row_count(generate.count)
        .with_context(|| format!("GENERATE_COUNT {} exceeds i64::MAX", generate.count))?;

    let mut rng = match generate.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let path = &config.data_path;
    info!(
        path = %path.display(),
        count,
        seed = ?generate.seed,
        "Generating leaderboard data"
    );

    let started = Instant::now();
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let rows = write_csv(BufWriter::new(file), generate_records(count, &mut rng))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        rows,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Data file written"
    );
    Ok(())
}
