use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PitchsideError, Result};
use crate::matches::Match;

/// Predicted score and wickets for both sides over one phase of the innings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseStats {
    pub team1_score: i32,
    pub team1_wickets: i32,
    pub team2_score: i32,
    pub team2_wickets: i32,
}

/// Phase-wise breakdown of a match prediction. Phases are floored
/// independently, so their sums may undershoot the predicted totals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PhaseBreakdown {
    pub powerplay: PhaseStats,
    pub middle: PhaseStats,
    pub death: PhaseStats,
}

/// A stored match forecast. `win_probability` is always the probability of
/// `predicted_winner_id`, never of team1 as such.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub id: i32,
    pub match_id: i32,
    pub predicted_winner_id: i32,
    pub win_probability: f64,
    pub team1_predicted_score: Option<i32>,
    pub team1_predicted_wickets: Option<i32>,
    pub team2_predicted_score: Option<i32>,
    pub team2_predicted_wickets: Option<i32>,
    pub reasoning: Option<String>,
    pub confidence: f64,
    pub is_correct: Option<bool>,
    pub prediction_date: DateTime<Utc>,
    pub detailed_stats: Option<PhaseBreakdown>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPrediction {
    pub match_id: i32,
    pub predicted_winner_id: i32,
    pub win_probability: f64,
    #[serde(default)]
    pub team1_predicted_score: Option<i32>,
    #[serde(default)]
    pub team1_predicted_wickets: Option<i32>,
    #[serde(default)]
    pub team2_predicted_score: Option<i32>,
    #[serde(default)]
    pub team2_predicted_wickets: Option<i32>,
    #[serde(default)]
    pub reasoning: Option<String>,
    pub confidence: f64,
    #[serde(default)]
    pub detailed_stats: Option<PhaseBreakdown>,
}

impl NewPrediction {
    /// Checks the payload against the match it claims to predict: the winner
    /// must be one of the two sides and both scalars must be probabilities.
    pub fn validate_against(&self, m: &Match) -> Result<()> {
        if !m.involves(self.predicted_winner_id) {
            return Err(PitchsideError::validation(
                "predictedWinnerId",
                format!(
                    "team {} is not playing in match {}",
                    self.predicted_winner_id, m.id
                ),
            ));
        }
        if !(0.0..=1.0).contains(&self.win_probability) {
            return Err(PitchsideError::validation(
                "winProbability",
                format!("{} is not within 0.0..=1.0", self.win_probability),
            ));
        }
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(PitchsideError::validation(
                "confidence",
                format!("{} is not within 0.0..=1.0", self.confidence),
            ));
        }
        Ok(())
    }
}

/// Partial update for a prediction; `None` fields are left unchanged.
/// `is_correct` is the post-match backfill slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionUpdate {
    #[serde(default)]
    pub reasoning: Option<String>,
    #[serde(default)]
    pub is_correct: Option<bool>,
}

/// A stored forecast of one player's batting and/or bowling numbers for a
/// match. Only the halves that match the player's role are populated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerPerformancePrediction {
    pub id: i32,
    pub match_id: i32,
    pub player_id: i32,
    pub predicted_runs_scored: Option<i32>,
    pub predicted_balls_faced: Option<i32>,
    pub predicted_fours: Option<i32>,
    pub predicted_sixes: Option<i32>,
    pub predicted_overs: Option<f64>,
    pub predicted_runs_conceded: Option<i32>,
    pub predicted_wickets: Option<i32>,
    pub predicted_maidens: Option<i32>,
    pub prediction_date: DateTime<Utc>,
    pub confidence: Option<f64>,
    pub reasoning: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPlayerPerformancePrediction {
    pub match_id: i32,
    pub player_id: i32,
    #[serde(default)]
    pub predicted_runs_scored: Option<i32>,
    #[serde(default)]
    pub predicted_balls_faced: Option<i32>,
    #[serde(default)]
    pub predicted_fours: Option<i32>,
    #[serde(default)]
    pub predicted_sixes: Option<i32>,
    #[serde(default)]
    pub predicted_overs: Option<f64>,
    #[serde(default)]
    pub predicted_runs_conceded: Option<i32>,
    #[serde(default)]
    pub predicted_wickets: Option<i32>,
    #[serde(default)]
    pub predicted_maidens: Option<i32>,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub reasoning: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture_match() -> Match {
        Match {
            id: 10,
            team1_id: 1,
            team2_id: 2,
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
        }
    }

    fn payload(winner: i32, prob: f64, confidence: f64) -> NewPrediction {
        NewPrediction {
            match_id: 10,
            predicted_winner_id: winner,
            win_probability: prob,
            team1_predicted_score: Some(187),
            team1_predicted_wickets: Some(6),
            team2_predicted_score: Some(173),
            team2_predicted_wickets: Some(8),
            reasoning: None,
            confidence,
            detailed_stats: None,
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let m = fixture_match();
        assert!(payload(1, 0.62, 0.78).validate_against(&m).is_ok());
        assert!(payload(2, 0.55, 0.5).validate_against(&m).is_ok());
    }

    #[test]
    fn test_winner_must_be_a_participant() {
        let m = fixture_match();
        let err = payload(3, 0.62, 0.78).validate_against(&m).unwrap_err();
        assert!(matches!(
            err,
            PitchsideError::Validation {
                field: "predictedWinnerId",
                ..
            }
        ));
    }

    #[test]
    fn test_probability_bounds_checked() {
        let m = fixture_match();
        assert!(payload(1, 1.5, 0.78).validate_against(&m).is_err());
        assert!(payload(1, 0.62, -0.1).validate_against(&m).is_err());
    }

    #[test]
    fn test_camel_case_wire_format() {
        let m = fixture_match();
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("team1Id").is_some());
        assert!(json.get("isCompleted").is_some());

        let p = payload(1, 0.62, 0.78);
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("matchId").is_some());
        assert!(json.get("predictedWinnerId").is_some());
        assert!(json.get("winProbability").is_some());
    }
}
