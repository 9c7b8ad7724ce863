use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Actual (not predicted) numbers a player put up in a completed match.
/// Populated by the completion workflow; read-only everywhere else.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPerformance {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub runs_scored: i32,
    pub balls_faced: i32,
    pub fours: i32,
    pub sixes: i32,
    pub overs: f64,
    pub runs_conceded: i32,
    pub wickets: i32,
    pub maidens: i32,
    pub catches: i32,
    pub stumpings: i32,
    pub run_outs: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerPerformance {
    pub match_id: i32,
    pub player_id: i32,
    #[serde(default)]
    pub runs_scored: i32,
    #[serde(default)]
    pub balls_faced: i32,
    #[serde(default)]
    pub fours: i32,
    #[serde(default)]
    pub sixes: i32,
    #[serde(default)]
    pub overs: f64,
    #[serde(default)]
    pub runs_conceded: i32,
    #[serde(default)]
    pub wickets: i32,
    #[serde(default)]
    pub maidens: i32,
    #[serde(default)]
    pub catches: i32,
    #[serde(default)]
    pub stumpings: i32,
    #[serde(default)]
    pub run_outs: i32,
}
