use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TossDecision {
    Bat,
    Bowl,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WinMarginType {
    Runs,
    Wickets,
}

/// A scheduled or completed fixture. Toss and result fields stay `None`
/// until the match completes; the completion workflow only runs through
/// `update_match`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    pub id: i32,
    pub team1_id: i32,
    pub team2_id: i32,
    pub stadium_id: Option<i32>,
    pub match_date: DateTime<Utc>,
    pub match_type: String,
    pub season: i32,
    pub is_completed: bool,
    pub toss_winner_id: Option<i32>,
    pub toss_decision: Option<TossDecision>,
    pub winner_id: Option<i32>,
    pub win_margin: Option<i32>,
    pub win_margin_type: Option<WinMarginType>,
    pub team1_score: Option<i32>,
    pub team1_wickets: Option<i32>,
    pub team1_overs: Option<f64>,
    pub team2_score: Option<i32>,
    pub team2_wickets: Option<i32>,
    pub team2_overs: Option<f64>,
    pub created_at: DateTime<Utc>,
}

impl Match {
    /// True when `team_id` is one of the two sides of this fixture.
    pub fn involves(&self, team_id: i32) -> bool {
        self.team1_id == team_id || self.team2_id == team_id
    }
}

fn default_match_type() -> String {
    "league".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMatch {
    pub team1_id: i32,
    pub team2_id: i32,
    #[serde(default)]
    pub stadium_id: Option<i32>,
    pub match_date: DateTime<Utc>,
    #[serde(default = "default_match_type")]
    pub match_type: String,
    pub season: i32,
    #[serde(default)]
    pub is_completed: bool,
}

/// Partial update for a match; `None` fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchUpdate {
    #[serde(default)]
    pub is_completed: Option<bool>,
    #[serde(default)]
    pub toss_winner_id: Option<i32>,
    #[serde(default)]
    pub toss_decision: Option<TossDecision>,
    #[serde(default)]
    pub winner_id: Option<i32>,
    #[serde(default)]
    pub win_margin: Option<i32>,
    #[serde(default)]
    pub win_margin_type: Option<WinMarginType>,
    #[serde(default)]
    pub team1_score: Option<i32>,
    #[serde(default)]
    pub team1_wickets: Option<i32>,
    #[serde(default)]
    pub team1_overs: Option<f64>,
    #[serde(default)]
    pub team2_score: Option<i32>,
    #[serde(default)]
    pub team2_wickets: Option<i32>,
    #[serde(default)]
    pub team2_overs: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_involves_both_sides() {
        let m = Match {
            id: 1,
            team1_id: 7,
            team2_id: 9,
            stadium_id: None,
            match_date: Utc::now(),
            match_type: "league".to_string(),
            season: 2023,
            is_completed: false,
            toss_winner_id: None,
            toss_decision: None,
            winner_id: None,
            win_margin: None,
            win_margin_type: None,
            team1_score: None,
            team1_wickets: None,
            team1_overs: None,
            team2_score: None,
            team2_wickets: None,
            team2_overs: None,
            created_at: Utc::now(),
        };

        assert!(m.involves(7));
        assert!(m.involves(9));
        assert!(!m.involves(8));
    }

    #[test]
    fn test_new_match_defaults() {
        let body = r#"{"team1Id":1,"team2Id":2,"matchDate":"2023-05-15T14:00:00Z","season":2023}"#;
        let new_match: NewMatch = serde_json::from_str(body).unwrap();

        assert_eq!(new_match.match_type, "league");
        assert!(!new_match.is_completed);
        assert_eq!(new_match.stadium_id, None);
    }
}
