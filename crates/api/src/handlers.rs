use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use pitchside_engine::{predict_match, predict_player_performance};
use pitchside_models::{
    ChatMessage, Match, NewChatMessage, NewMatch, NewPlayer, NewPlayerPerformancePrediction,
    NewPrediction, NewTeam, PitchsideError, Player, PlayerPerformancePrediction, Prediction, Team,
};
use pitchside_services::{explain, scrape_latest_ipl_data, ExplanationContext};

use crate::error::ApiError;
use crate::routes::AppState;

fn require_non_empty(field: &'static str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(PitchsideError::validation(field, "must not be empty").into());
    }
    Ok(())
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

// Teams

pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<Team>> {
    Json(state.store.get_all_teams())
}

pub async fn get_team(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Team>, ApiError> {
    state
        .store
        .get_team(id)
        .map(Json)
        .ok_or_else(|| PitchsideError::not_found("team", id).into())
}

pub async fn create_team(
    State(state): State<AppState>,
    Json(new_team): Json<NewTeam>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    require_non_empty("name", &new_team.name)?;
    require_non_empty("shortName", &new_team.short_name)?;

    let team = state.store.create_team(new_team);
    tracing::info!(team_id = team.id, name = %team.name, "team created");
    Ok((StatusCode::CREATED, Json(team)))
}

// Players

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFilter {
    pub team_id: Option<i32>,
}

pub async fn list_players(
    State(state): State<AppState>,
    Query(filter): Query<PlayerFilter>,
) -> Json<Vec<Player>> {
    match filter.team_id {
        Some(team_id) => Json(state.store.get_players_by_team(team_id)),
        None => Json(state.store.get_all_players()),
    }
}

pub async fn get_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Player>, ApiError> {
    state
        .store
        .get_player(id)
        .map(Json)
        .ok_or_else(|| PitchsideError::not_found("player", id).into())
}

pub async fn create_player(
    State(state): State<AppState>,
    Json(new_player): Json<NewPlayer>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    require_non_empty("name", &new_player.name)?;
    if let Some(team_id) = new_player.team_id {
        if state.store.get_team(team_id).is_none() {
            return Err(
                PitchsideError::validation("teamId", format!("team {team_id} does not exist"))
                    .into(),
            );
        }
    }

    let player = state.store.create_player(new_player);
    tracing::info!(player_id = player.id, name = %player.name, "player created");
    Ok((StatusCode::CREATED, Json(player)))
}

// Matches

#[derive(Deserialize)]
pub struct MatchFilter {
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub limit: Option<usize>,
}

pub async fn list_matches(
    State(state): State<AppState>,
    Query(filter): Query<MatchFilter>,
) -> Json<Vec<Match>> {
    match filter.kind.as_deref() {
        Some("upcoming") => Json(state.store.get_upcoming_matches(filter.limit)),
        Some("completed") => Json(state.store.get_completed_matches(filter.limit)),
        _ => Json(state.store.get_all_matches()),
    }
}

pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Match>, ApiError> {
    state
        .store
        .get_match(id)
        .map(Json)
        .ok_or_else(|| PitchsideError::not_found("match", id).into())
}

pub async fn create_match(
    State(state): State<AppState>,
    Json(new_match): Json<NewMatch>,
) -> Result<(StatusCode, Json<Match>), ApiError> {
    for (field, team_id) in [("team1Id", new_match.team1_id), ("team2Id", new_match.team2_id)] {
        if state.store.get_team(team_id).is_none() {
            return Err(
                PitchsideError::validation(field, format!("team {team_id} does not exist")).into(),
            );
        }
    }
    if let Some(stadium_id) = new_match.stadium_id {
        if state.store.get_stadium(stadium_id).is_none() {
            return Err(PitchsideError::validation(
                "stadiumId",
                format!("stadium {stadium_id} does not exist"),
            )
            .into());
        }
    }

    let m = state.store.create_match(new_match);
    tracing::info!(match_id = m.id, "match created");
    Ok((StatusCode::CREATED, Json(m)))
}

// Predictions

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionFilter {
    pub match_id: Option<i32>,
}

pub async fn list_predictions(
    State(state): State<AppState>,
    Query(filter): Query<PredictionFilter>,
) -> Json<Value> {
    match filter.match_id {
        // The by-match form returns the single prediction, or JSON null.
        Some(match_id) => Json(json!(state.store.get_prediction_by_match(match_id))),
        None => Json(json!(state.store.get_all_predictions())),
    }
}

pub async fn get_prediction(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Prediction>, ApiError> {
    state
        .store
        .get_prediction(id)
        .map(Json)
        .ok_or_else(|| PitchsideError::not_found("prediction", id).into())
}

pub async fn create_prediction(
    State(state): State<AppState>,
    Json(new_prediction): Json<NewPrediction>,
) -> Result<(StatusCode, Json<Prediction>), ApiError> {
    let m = state
        .store
        .get_match(new_prediction.match_id)
        .ok_or_else(|| {
            PitchsideError::validation(
                "matchId",
                format!("match {} does not exist", new_prediction.match_id),
            )
        })?;
    new_prediction.validate_against(&m)?;

    let prediction = state.store.create_prediction(new_prediction);
    tracing::info!(prediction_id = prediction.id, match_id = m.id, "prediction created");
    Ok((StatusCode::CREATED, Json(prediction)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePredictionRequest {
    pub match_id: Option<i32>,
}

/// Returns the stored prediction for the match when one exists, otherwise
/// runs the heuristic, fills in the narrative reasoning and persists the
/// result. The persist step is insert-if-absent, so two racing calls for
/// one match converge on a single row.
pub async fn generate_prediction(
    State(state): State<AppState>,
    Json(request): Json<GeneratePredictionRequest>,
) -> Result<Json<Prediction>, ApiError> {
    let match_id = request
        .match_id
        .ok_or_else(|| ApiError::bad_request("matchId is required"))?;

    let m = state
        .store
        .get_match(match_id)
        .ok_or_else(|| ApiError::not_found(format!("match not found: {match_id}")))?;

    if let Some(existing) = state.store.get_prediction_by_match(m.id) {
        return Ok(Json(existing));
    }

    let team1 = state
        .store
        .get_team(m.team1_id)
        .ok_or_else(|| ApiError::not_found(format!("team not found: {}", m.team1_id)))?;
    let team2 = state
        .store
        .get_team(m.team2_id)
        .ok_or_else(|| ApiError::not_found(format!("team not found: {}", m.team2_id)))?;
    let stadium = m.stadium_id.and_then(|id| state.store.get_stadium(id));

    let mut rng = state.rng.lock().await;
    let mut new_prediction = predict_match(&m, &team1, &team2, stadium.as_ref(), &mut *rng);
    new_prediction.reasoning = Some(explain(
        ExplanationContext::Match {
            prediction: &new_prediction,
            team1: &team1,
            team2: &team2,
            stadium: stadium.as_ref(),
        },
        &mut *rng,
    ));
    drop(rng);

    let (prediction, created) = state.store.create_prediction_if_absent(new_prediction);
    if created {
        tracing::info!(
            match_id = m.id,
            prediction_id = prediction.id,
            winner_id = prediction.predicted_winner_id,
            probability = prediction.win_probability,
            "prediction generated"
        );
    }
    Ok(Json(prediction))
}

// Player performance predictions

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformancePredictionFilter {
    pub match_id: Option<i32>,
    pub player_id: Option<i32>,
}

pub async fn list_player_performance_predictions(
    State(state): State<AppState>,
    Query(filter): Query<PerformancePredictionFilter>,
) -> Result<Json<Value>, ApiError> {
    if let Some(match_id) = filter.match_id {
        return Ok(Json(json!(state
            .store
            .get_player_performance_predictions_by_match(match_id))));
    }
    if let Some(player_id) = filter.player_id {
        return Ok(Json(json!(state
            .store
            .get_player_performance_predictions_by_player(player_id))));
    }
    Err(ApiError::bad_request(
        "either matchId or playerId is required",
    ))
}

pub async fn create_player_performance_prediction(
    State(state): State<AppState>,
    Json(new_prediction): Json<NewPlayerPerformancePrediction>,
) -> Result<(StatusCode, Json<PlayerPerformancePrediction>), ApiError> {
    if state.store.get_match(new_prediction.match_id).is_none() {
        return Err(PitchsideError::validation(
            "matchId",
            format!("match {} does not exist", new_prediction.match_id),
        )
        .into());
    }
    if state.store.get_player(new_prediction.player_id).is_none() {
        return Err(PitchsideError::validation(
            "playerId",
            format!("player {} does not exist", new_prediction.player_id),
        )
        .into());
    }

    let prediction = state.store.create_player_performance_prediction(new_prediction);
    Ok((StatusCode::CREATED, Json(prediction)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePerformanceRequest {
    pub match_id: Option<i32>,
    pub player_id: Option<i32>,
}

pub async fn generate_player_performance_prediction(
    State(state): State<AppState>,
    Json(request): Json<GeneratePerformanceRequest>,
) -> Result<Json<PlayerPerformancePrediction>, ApiError> {
    let (match_id, player_id) = match (request.match_id, request.player_id) {
        (Some(match_id), Some(player_id)) => (match_id, player_id),
        _ => {
            return Err(ApiError::bad_request(
                "matchId and playerId are required",
            ))
        }
    };

    let m = state
        .store
        .get_match(match_id)
        .ok_or_else(|| ApiError::not_found(format!("match not found: {match_id}")))?;
    let player = state
        .store
        .get_player(player_id)
        .ok_or_else(|| ApiError::not_found(format!("player not found: {player_id}")))?;

    let mut rng = state.rng.lock().await;
    let mut new_prediction = predict_player_performance(&m, &player, &mut *rng);
    new_prediction.reasoning = Some(explain(
        ExplanationContext::Player {
            prediction: &new_prediction,
            player: &player,
        },
        &mut *rng,
    ));
    drop(rng);

    let prediction = state.store.create_player_performance_prediction(new_prediction);
    tracing::info!(
        match_id = m.id,
        player_id = player.id,
        prediction_id = prediction.id,
        "player performance prediction generated"
    );
    Ok(Json(prediction))
}

// Chatbot

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub user_id: Option<i32>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    pub user_message: ChatMessage,
    pub bot_response: ChatMessage,
}

/// Persists the user's message, computes a canned analyst reply and persists
/// that as the bot's turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatExchange>, ApiError> {
    let message = match request.message {
        Some(message) if !message.trim().is_empty() => message,
        _ => return Err(ApiError::bad_request("message is required")),
    };

    let user_message = state.store.create_chat_message(NewChatMessage {
        user_id: request.user_id,
        message: message.clone(),
        is_user_message: true,
        response: None,
    });

    let reply = {
        let mut rng = state.rng.lock().await;
        explain(ExplanationContext::Chat { message: &message }, &mut *rng)
    };

    let bot_response = state.store.create_chat_message(NewChatMessage {
        user_id: request.user_id,
        message: reply,
        is_user_message: false,
        response: None,
    });

    Ok(Json(ChatExchange {
        user_message,
        bot_response,
    }))
}

// Data scraping

pub async fn scrape(State(_state): State<AppState>) -> Json<Value> {
    let data = scrape_latest_ipl_data().await;
    Json(json!({
        "success": true,
        "message": "Data scraping initiated",
        "data": data,
    }))
}
