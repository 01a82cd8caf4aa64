use crate::error::{AppError, Result};
use crate::models::{LookupResponse, NearbyRankItem, RankItem, UidQuery};
use crate::services::RankingIndex;
use actix_web::{web, HttpResponse};

/// Shared, read-only state handed to every worker.
///
/// Wrapped in `web::Data` (an `Arc`), so each worker clones a pointer and
/// reads the same index without locking.
#[derive(Debug)]
pub struct LeaderboardState {
    pub index: RankingIndex,
    pub window_radius: usize,
}

impl LeaderboardState {
    pub fn new(index: RankingIndex, window_radius: usize) -> Self {
        Self {
            index,
            window_radius,
        }
    }
}

/// GET /nearby_ranks?uid=
pub async fn nearby_ranks(
    state: web::Data<LeaderboardState>,
    query: web::Query<UidQuery>,
) -> Result<HttpResponse> {
    let uid = query.uid;
    let window = state.index.neighborhood(uid, state.window_radius)?;

    tracing::debug!(uid, entries = window.len(), "nearby_ranks lookup");

    let data: Vec<NearbyRankItem> = window.into_iter().map(NearbyRankItem::from).collect();
    Ok(HttpResponse::Ok().json(LookupResponse::ok(data)))
}

/// GET /rank?uid=
pub async fn resolve_rank(
    state: web::Data<LeaderboardState>,
    query: web::Query<UidQuery>,
) -> Result<HttpResponse> {
    let uid = query.uid;
    let position = state.index.resolve_rank(uid)?;

    tracing::debug!(uid, position, "rank lookup");

    Ok(HttpResponse::Ok().json(LookupResponse::ok(RankItem {
        uid,
        rank: position as i64 + 1,
        position: position as i64,
    })))
}

async fn health() -> &'static str {
    "OK"
}

async fn ready() -> &'static str {
    "READY"
}

/// Missing or non-integer `uid` becomes a JSON 400 instead of actix's plain-text default.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::BadRequest(format!("parse uid error: {err}")).into()
    })
}

/// Register all leaderboard routes. State is attached by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .route("/nearby_ranks", web::get().to(nearby_ranks))
        .route("/rank", web::get().to(resolve_rank))
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready));
}
