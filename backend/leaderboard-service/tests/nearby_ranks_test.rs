use actix_web::{http::StatusCode, test, web, App};
use leaderboard_service::{
    error::ErrorResponse,
    handlers::{self, LeaderboardState},
    models::{LookupResponse, NearbyRankItem, RankItem, Record},
    RankingIndex,
};

/// 100 players; uid `k` holds rank `k`.
fn board_state() -> web::Data<LeaderboardState> {
    let records = (1..=100).map(|uid| Record::new(uid, 10_000 - uid, 1_694_736_000));
    let index = RankingIndex::new(records.collect());
    web::Data::new(LeaderboardState::new(index, 10))
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data($state)
                .configure(handlers::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn nearby_ranks_returns_clamped_window() {
    let app = app!(board_state());

    let req = test::TestRequest::get()
        .uri("/nearby_ranks?uid=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body: LookupResponse<Vec<NearbyRankItem>> = test::read_body_json(resp).await;
    assert_eq!(body.code, 0);
    assert_eq!(body.msg, "OK");

    // positions 0..=12
    assert_eq!(body.data.len(), 13);
    let ranks: Vec<i64> = body.data.iter().map(|item| item.rank).collect();
    assert_eq!(ranks, (1..=13).collect::<Vec<_>>());
    assert_eq!(body.data[2].uid, 3);
    assert_eq!(body.data[2].score, 9_997);
    assert_eq!(body.data[2].timestamp, 1_694_736_000);
}

#[actix_web::test]
async fn nearby_ranks_middle_of_board() {
    let app = app!(board_state());

    let req = test::TestRequest::get()
        .uri("/nearby_ranks?uid=51")
        .to_request();
    let body: LookupResponse<Vec<NearbyRankItem>> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body.data.len(), 21);
    assert_eq!(body.data.first().map(|i| i.rank), Some(41));
    assert_eq!(body.data.last().map(|i| i.rank), Some(61));
}

#[actix_web::test]
async fn wire_format_uses_pascal_case_field_names() {
    let app = app!(board_state());

    let req = test::TestRequest::get()
        .uri("/nearby_ranks?uid=100")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["Code"], 0);
    assert_eq!(body["Msg"], "OK");
    let last = &body["Data"][10];
    assert_eq!(last["UID"], 100);
    assert_eq!(last["Rank"], 100);
    assert!(last.get("Score").is_some());
    assert!(last.get("Timestamp").is_some());
}

#[actix_web::test]
async fn unknown_uid_is_404() {
    let app = app!(board_state());

    for uri in ["/nearby_ranks?uid=4242", "/rank?uid=4242"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, 404);
        assert_eq!(body.error, "uid not found: 4242");
    }
}

#[actix_web::test]
async fn invalid_uid_is_400() {
    let app = app!(board_state());

    for uri in ["/nearby_ranks?uid=abc", "/nearby_ranks", "/rank?uid="] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "uri: {uri}");

        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.code, 400);
    }
}

#[actix_web::test]
async fn rank_endpoint_reports_position_and_display_rank() {
    let app = app!(board_state());

    let req = test::TestRequest::get().uri("/rank?uid=7").to_request();
    let body: LookupResponse<RankItem> = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body.data,
        RankItem {
            uid: 7,
            rank: 7,
            position: 6,
        }
    );
}

#[actix_web::test]
async fn empty_board_answers_404() {
    let state = web::Data::new(LeaderboardState::new(RankingIndex::new(Vec::new()), 10));
    let app = app!(state);

    let req = test::TestRequest::get()
        .uri("/nearby_ranks?uid=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn health_and_ready() {
    let app = app!(board_state());

    let req = test::TestRequest::get().uri("/health").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "OK");

    let req = test::TestRequest::get().uri("/ready").to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert_eq!(body, "READY");
}
