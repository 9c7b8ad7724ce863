use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::{json, Value};
use tower::ServiceExt;

use pitchside_api::{create_routes, AppState};
use pitchside_store::{seed_sample_data, Store};

fn seeded_app() -> (Router, Arc<Store>) {
    let store = Arc::new(Store::new());
    seed_sample_data(&store);
    let state = AppState::new(Arc::clone(&store), SmallRng::seed_from_u64(42));
    (create_routes().with_state(state), store)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = seeded_app();
    let (status, body) = get(&app, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_and_get_teams() {
    let (app, _) = seeded_app();

    let (status, body) = get(&app, "/api/teams").await;
    assert_eq!(status, StatusCode::OK);
    let teams = body.as_array().unwrap();
    assert_eq!(teams.len(), 5);
    assert_eq!(teams[0]["shortName"], "CSK");

    let (status, body) = get(&app, "/api/teams/2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mumbai Indians");
}

#[tokio::test]
async fn test_get_unknown_team_is_404() {
    let (app, _) = seeded_app();
    let (status, body) = get(&app, "/api/teams/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_create_team_round_trips() {
    let (app, store) = seeded_app();

    let (status, body) = post(
        &app,
        "/api/teams",
        json!({
            "name": "Gujarat Titans",
            "shortName": "GT",
            "homeVenue": "Narendra Modi Stadium"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap() as i32;
    assert_eq!(body["shortName"], "GT");

    let stored = store.get_team(id).unwrap();
    assert_eq!(stored.name, "Gujarat Titans");
    assert_eq!(stored.home_venue.as_deref(), Some("Narendra Modi Stadium"));

    let (status, fetched) = get(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn test_create_team_rejects_empty_name() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/teams",
        json!({ "name": "", "shortName": "XX" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("name"));
}

#[tokio::test]
async fn test_players_filtered_by_team() {
    let (app, _) = seeded_app();

    let (status, body) = get(&app, "/api/players").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    // MI has Rohit Sharma and Jasprit Bumrah.
    let (status, body) = get(&app, "/api/players?teamId=2").await;
    assert_eq!(status, StatusCode::OK);
    let players = body.as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert!(players.iter().all(|p| p["teamId"] == 2));
}

#[tokio::test]
async fn test_create_player_rejects_unknown_team() {
    let (app, _) = seeded_app();
    let (status, body) = post(
        &app,
        "/api/players",
        json!({ "name": "Mystery Player", "teamId": 999, "role": "batsman" }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("teamId"));
}

#[tokio::test]
async fn test_matches_listing_and_filters() {
    let (app, store) = seeded_app();

    let (status, body) = get(&app, "/api/matches").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    // The seeded "today" match is already in the past by query time, so the
    // upcoming view holds the tomorrow and day-after fixtures, soonest first.
    let (status, body) = get(&app, "/api/matches?type=upcoming").await;
    assert_eq!(status, StatusCode::OK);
    let upcoming = body.as_array().unwrap();
    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0]["id"], 2);
    assert_eq!(upcoming[1]["id"], 3);

    // limit=0 is a real cap, not "no limit".
    let (status, body) = get(&app, "/api/matches?type=upcoming&limit=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    let (status, body) = get(&app, "/api/matches?type=completed").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.as_array().unwrap().is_empty());

    // Complete one and it moves lists.
    store.update_match(1, pitchside_models::MatchUpdate {
        is_completed: Some(true),
        winner_id: Some(1),
        ..pitchside_models::MatchUpdate::default()
    });
    let (_, body) = get(&app, "/api/matches?type=completed").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body.as_array().unwrap()[0]["id"], 1);
}

#[tokio::test]
async fn test_create_match_validates_references() {
    let (app, _) = seeded_app();

    let (status, _) = post(
        &app,
        "/api/matches",
        json!({
            "team1Id": 1,
            "team2Id": 2,
            "stadiumId": 1,
            "matchDate": "2030-05-15T14:00:00Z",
            "season": 2030
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(
        &app,
        "/api/matches",
        json!({
            "team1Id": 1,
            "team2Id": 999,
            "matchDate": "2030-05-15T14:00:00Z",
            "season": 2030
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("team2Id"));

    let (status, body) = post(
        &app,
        "/api/matches",
        json!({
            "team1Id": 1,
            "team2Id": 2,
            "stadiumId": 999,
            "matchDate": "2030-05-15T14:00:00Z",
            "season": 2030
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("stadiumId"));
}

#[tokio::test]
async fn test_predictions_listing_forms() {
    let (app, _) = seeded_app();

    let (status, body) = get(&app, "/api/predictions").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 3);

    // The by-match form returns a single object.
    let (status, body) = get(&app, "/api/predictions?matchId=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matchId"], 1);
    assert_eq!(body["winProbability"], 0.62);

    // No prediction for that match: JSON null, not an error.
    let (status, body) = get(&app, "/api/predictions?matchId=999").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_null());

    let (status, body) = get(&app, "/api/predictions/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);

    let (status, _) = get(&app, "/api/predictions/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_prediction_validates_winner() {
    let (app, _) = seeded_app();

    // Team 3 is not playing match 1 (CSK vs MI).
    let (status, body) = post(
        &app,
        "/api/predictions",
        json!({
            "matchId": 1,
            "predictedWinnerId": 3,
            "winProbability": 0.6,
            "confidence": 0.7
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("predictedWinnerId"));

    let (status, body) = post(
        &app,
        "/api/predictions",
        json!({
            "matchId": 2,
            "predictedWinnerId": 4,
            "winProbability": 0.58,
            "confidence": 0.66
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["predictedWinnerId"], 4);
    assert_eq!(body["isCorrect"], Value::Null);
}

#[tokio::test]
async fn test_performance_prediction_listing_requires_a_key() {
    let (app, _) = seeded_app();

    let (status, body) = get(&app, "/api/player-performance-predictions?matchId=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 4);

    // Dhoni's seeded row.
    let (status, body) = get(&app, "/api/player-performance-predictions?playerId=1").await;
    assert_eq!(status, StatusCode::OK);
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["predictedRunsScored"], 42);

    let (status, body) = get(&app, "/api/player-performance-predictions").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("either matchId or playerId"));
}

#[tokio::test]
async fn test_chat_requires_message() {
    let (app, _) = seeded_app();
    let (status, body) = post(&app, "/api/chat", json!({ "userId": 1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("message"));
}

#[tokio::test]
async fn test_scrape_returns_mock_payload() {
    let (app, _) = seeded_app();
    let (status, body) = post(&app, "/api/scrape", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Data scraping initiated");
    assert_eq!(body["data"]["matches"].as_array().unwrap().len(), 4);
    assert_eq!(body["data"]["playerStats"].as_array().unwrap().len(), 4);
}
