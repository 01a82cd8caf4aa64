use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use leaderboard_service::{
    handlers::{self, LeaderboardState},
    utils::init_tracing,
    Config, CsvRecordSource, RankingIndex, RecordSource,
};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load config")?;

    info!(
        data_path = %config.data_path.display(),
        window_radius = config.window_radius,
        duplicate_policy = ?config.duplicate_policy,
        tie_break = ?config.tie_break,
        "Starting leaderboard-service"
    );

    // The board must be complete before any request is served
    let source = CsvRecordSource::new(&config.data_path);
    let records = source
        .load_records()
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;
    info!("Loaded {} records", records.len());

    let index = RankingIndex::build(records, &config.index_options())
        .context("Failed to build ranking index")?;

    if index.distinct_identities() < index.len() {
        warn!(
            entries = index.len(),
            identities = index.distinct_identities(),
            "Duplicate uids kept; lookups resolve to the last position per uid"
        );
    }
    info!(
        entries = index.len(),
        identities = index.distinct_identities(),
        "Ranking index built"
    );

    let state = web::Data::new(LeaderboardState::new(index, config.window_radius));

    let (host, port) = config.bind_addr();
    info!("HTTP server listening on {}:{}", host, port);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(state.clone())
            .configure(handlers::configure)
    });
    if let Some(workers) = config.workers {
        server = server.workers(workers.get());
    }

    server
        .bind((host.as_str(), port))
        .with_context(|| format!("Failed to bind HTTP server to {host}:{port}"))?
        .run()
        .await
        .context("HTTP server error")
}
